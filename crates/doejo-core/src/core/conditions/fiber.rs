use super::parameter::ParameterRange;
use serde::Serialize;
use std::fmt;

/// SPME fiber coatings, from the least to the most polar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Fiber {
    // --- Nonpolar absorbent: hydrophobic, semi-volatile analytes ---
    #[serde(rename = "PDMS")]
    Pdms,
    // --- Biphasic: moderately polar phenols, esters, amines ---
    #[serde(rename = "PDMS/DVB")]
    PdmsDvb,
    // --- Multimodal composite: broad selectivity over mixed volatility ---
    #[serde(rename = "DVB/CAR/PDMS")]
    DvbCarPdms,
    // --- Polar composite: alcohols, organic acids, aldehydes ---
    #[serde(rename = "CW/DVB/PA")]
    CwDvbPa,
    // --- Highly polar: small, strongly polar or ionic analytes ---
    #[serde(rename = "CAP-PDMS/PEG/CW")]
    CapPdmsPegCw,
}

/// Thermal desorption recommended by the coating manufacturer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Desorption {
    pub time_minutes: ParameterRange,
    pub temperature_celsius: ParameterRange,
}

impl Fiber {
    pub fn label(&self) -> &'static str {
        match self {
            Fiber::Pdms => "PDMS",
            Fiber::PdmsDvb => "PDMS/DVB",
            Fiber::DvbCarPdms => "DVB/CAR/PDMS",
            Fiber::CwDvbPa => "CW/DVB/PA",
            Fiber::CapPdmsPegCw => "CAP-PDMS/PEG/CW",
        }
    }

    pub fn desorption(&self) -> Desorption {
        let (time, temperature) = match self {
            Fiber::Pdms => ((3.0, 5.0), (250.0, 280.0)),
            Fiber::PdmsDvb => ((3.0, 5.0), (250.0, 270.0)),
            Fiber::DvbCarPdms => ((4.0, 6.0), (270.0, 300.0)),
            Fiber::CwDvbPa => ((4.0, 6.0), (250.0, 280.0)),
            Fiber::CapPdmsPegCw => ((4.0, 5.0), (250.0, 280.0)),
        };
        Desorption {
            time_minutes: ParameterRange::new(time.0, time.1),
            temperature_celsius: ParameterRange::new(temperature.0, temperature.1),
        }
    }
}

impl fmt::Display for Fiber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Desorption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} min @ {}°C",
            self.time_minutes, self.temperature_celsius
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIBERS: [Fiber; 5] = [
        Fiber::Pdms,
        Fiber::PdmsDvb,
        Fiber::DvbCarPdms,
        Fiber::CwDvbPa,
        Fiber::CapPdmsPegCw,
    ];

    #[test]
    fn labels_match_serialized_names() {
        for fiber in FIBERS {
            let json = serde_json::to_string(&fiber).unwrap();
            assert_eq!(json, format!("\"{}\"", fiber.label()));
        }
    }

    #[test]
    fn desorption_conditions_render_like_the_manufacturer_tables() {
        assert_eq!(Fiber::Pdms.desorption().to_string(), "3-5 min @ 250-280°C");
        assert_eq!(Fiber::PdmsDvb.desorption().to_string(), "3-5 min @ 250-270°C");
        assert_eq!(
            Fiber::DvbCarPdms.desorption().to_string(),
            "4-6 min @ 270-300°C"
        );
        assert_eq!(Fiber::CwDvbPa.desorption().to_string(), "4-6 min @ 250-280°C");
        assert_eq!(
            Fiber::CapPdmsPegCw.desorption().to_string(),
            "4-5 min @ 250-280°C"
        );
    }
}
