use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Unit {
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "min")]
    Minutes,
    #[serde(rename = "°C")]
    Celsius,
    #[serde(rename = "rpm")]
    Rpm,
}

impl Unit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Percent => "%",
            Unit::Minutes => "min",
            Unit::Celsius => "°C",
            Unit::Rpm => "rpm",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The continuous process variables a Box-Behnken design can explore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProcessParameter {
    SaltAddition,
    ExtractionTime,
    ExtractionTemperature,
    AgitationRate,
}

impl ProcessParameter {
    /// Column order of the design table.
    pub const ALL: [ProcessParameter; 4] = [
        ProcessParameter::SaltAddition,
        ProcessParameter::ExtractionTime,
        ProcessParameter::ExtractionTemperature,
        ProcessParameter::AgitationRate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ProcessParameter::SaltAddition => "Salt Addition",
            ProcessParameter::ExtractionTime => "Extraction Time",
            ProcessParameter::ExtractionTemperature => "Extraction Temperature",
            ProcessParameter::AgitationRate => "Agitation Rate",
        }
    }

    pub fn unit(&self) -> Unit {
        match self {
            ProcessParameter::SaltAddition => Unit::Percent,
            ProcessParameter::ExtractionTime => Unit::Minutes,
            ProcessParameter::ExtractionTemperature => Unit::Celsius,
            ProcessParameter::AgitationRate => Unit::Rpm,
        }
    }
}

impl fmt::Display for ProcessParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A closed interval `[low, high]` in the unit of the parameter it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterRange {
    pub low: f64,
    pub high: f64,
}

impl ParameterRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn mid(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

impl fmt::Display for ParameterRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// The recommendation for one process parameter.
///
/// A `Fixed` setting is held constant for every run and never becomes a design factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ParameterSetting {
    Range(ParameterRange),
    Fixed { value: f64 },
}

impl ParameterSetting {
    pub const fn range(low: f64, high: f64) -> Self {
        ParameterSetting::Range(ParameterRange::new(low, high))
    }

    pub const fn fixed(value: f64) -> Self {
        ParameterSetting::Fixed { value }
    }

    pub fn as_range(&self) -> Option<&ParameterRange> {
        match self {
            ParameterSetting::Range(range) => Some(range),
            ParameterSetting::Fixed { .. } => None,
        }
    }
}

impl fmt::Display for ParameterSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterSetting::Range(range) => fmt::Display::fmt(range, f),
            ParameterSetting::Fixed { value } => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProcessCondition {
    pub parameter: ProcessParameter,
    pub unit: Unit,
    pub setting: ParameterSetting,
}

impl ProcessCondition {
    pub fn new(parameter: ProcessParameter, setting: ParameterSetting) -> Self {
        Self {
            parameter,
            unit: parameter.unit(),
            setting,
        }
    }
}

impl fmt::Display for ProcessCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Percent => write!(f, "{}{}", self.setting, self.unit),
            _ => write!(f, "{} {}", self.setting, self.unit),
        }
    }
}
