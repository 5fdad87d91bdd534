use super::cas::CasNumber;
use serde::Serialize;
use std::fmt;

const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

/// A resolved analyte, as delivered by the compound-resolution layer.
///
/// Every physicochemical property is optional because chemical databases frequently omit
/// them; the aggregation and classification stages decide how an absent value is handled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compound {
    pub name: String,                       // IUPAC or common name
    pub cid: Option<u64>,                   // PubChem compound identifier
    pub cas: Option<CasNumber>,             // Registry number the compound was resolved from
    pub xlogp: Option<f64>,                 // Computed octanol-water partition coefficient
    pub molecular_weight: Option<f64>,      // g/mol
    pub boiling_point_celsius: Option<f64>, // °C
    pub is_charged: bool,                   // Charged or ionic species
}

impl Compound {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cid: None,
            cas: None,
            xlogp: None,
            molecular_weight: None,
            boiling_point_celsius: None,
            is_charged: false,
        }
    }

    pub fn with_cid(mut self, cid: u64) -> Self {
        self.cid = Some(cid);
        self
    }

    pub fn with_cas(mut self, cas: CasNumber) -> Self {
        self.cas = Some(cas);
        self
    }

    pub fn with_xlogp(mut self, xlogp: f64) -> Self {
        self.xlogp = Some(xlogp);
        self
    }

    pub fn with_molecular_weight(mut self, molecular_weight: f64) -> Self {
        self.molecular_weight = Some(molecular_weight);
        self
    }

    pub fn with_boiling_point_celsius(mut self, celsius: f64) -> Self {
        self.boiling_point_celsius = Some(celsius);
        self
    }

    pub fn with_boiling_point_kelvin(self, kelvin: f64) -> Self {
        self.with_boiling_point_celsius(kelvin_to_celsius(kelvin))
    }

    pub fn charged(mut self, is_charged: bool) -> Self {
        self.is_charged = is_charged;
        self
    }
}

/// Converts kelvin to degrees Celsius, rounded to two decimals.
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    ((kelvin + ABSOLUTE_ZERO_CELSIUS) * 100.0).round() / 100.0
}

fn fmt_optional(value: Option<f64>, suffix: &str) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{}{}", v, suffix))
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | BP: {} | xLogP: {} | MW: {}",
            self.name,
            fmt_optional(self.boiling_point_celsius, "°C"),
            fmt_optional(self.xlogp, ""),
            fmt_optional(self.molecular_weight, ""),
        )?;
        if self.is_charged {
            write!(f, " | charged")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kelvin_conversion_rounds_to_two_decimals() {
        assert_eq!(kelvin_to_celsius(351.52), 78.37);
        assert_eq!(kelvin_to_celsius(273.15), 0.0);
        assert_eq!(kelvin_to_celsius(373.124), 99.97);
    }

    #[test]
    fn builder_sets_every_property() {
        let cas: CasNumber = "64-17-5".parse().unwrap();
        let compound = Compound::new("ethanol")
            .with_cid(702)
            .with_cas(cas.clone())
            .with_xlogp(-0.1)
            .with_molecular_weight(46.07)
            .with_boiling_point_kelvin(351.52)
            .charged(true);

        assert_eq!(compound.cid, Some(702));
        assert_eq!(compound.cas, Some(cas));
        assert_eq!(compound.xlogp, Some(-0.1));
        assert_eq!(compound.molecular_weight, Some(46.07));
        assert_eq!(compound.boiling_point_celsius, Some(78.37));
        assert!(compound.is_charged);
    }

    #[test]
    fn display_marks_missing_properties() {
        let compound = Compound::new("Ethanol")
            .with_xlogp(-0.31)
            .with_molecular_weight(46.0);
        assert_eq!(
            compound.to_string(),
            "Ethanol | BP: n/a | xLogP: -0.31 | MW: 46"
        );
    }

    #[test]
    fn display_includes_charge_marker() {
        let compound = Compound::new("acetate")
            .with_boiling_point_celsius(118.1)
            .with_xlogp(-0.2)
            .with_molecular_weight(59.04)
            .charged(true);
        assert_eq!(
            compound.to_string(),
            "acetate | BP: 118.1°C | xLogP: -0.2 | MW: 59.04 | charged"
        );
    }
}
