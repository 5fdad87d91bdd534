use crate::core::conditions::classifier::ProcessConditions;
use crate::core::conditions::parameter::{ParameterRange, ParameterSetting, ProcessCondition, Unit};
use serde::{Serialize, Serializer};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum FactorError {
    #[error("Degenerate range for factor '{factor}': [{low}, {high}] has no width to explore")]
    DegenerateRange { factor: String, low: f64, high: f64 },

    #[error("Inverted range for factor '{factor}': low bound {low} exceeds high bound {high}")]
    InvertedRange { factor: String, low: f64, high: f64 },
}

/// Normalized factor level used by the design generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodedLevel {
    Low,
    Center,
    High,
}

impl CodedLevel {
    /// The two levels a pair block varies over, in emission order.
    pub const EXTREMES: [CodedLevel; 2] = [CodedLevel::Low, CodedLevel::High];

    pub const fn as_i8(self) -> i8 {
        match self {
            CodedLevel::Low => -1,
            CodedLevel::Center => 0,
            CodedLevel::High => 1,
        }
    }
}

impl Serialize for CodedLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.as_i8())
    }
}

/// A continuous variable with real-unit values for the coded levels `-1`, `0`, `+1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignFactor {
    pub name: String,
    pub unit: Unit,
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

impl DesignFactor {
    pub fn new(name: &str, unit: Unit, range: ParameterRange) -> Result<Self, FactorError> {
        let ParameterRange { low, high } = range;
        let width = range.width();
        if !width.is_finite() || width == 0.0 {
            return Err(FactorError::DegenerateRange {
                factor: name.to_string(),
                low,
                high,
            });
        }
        if width < 0.0 {
            return Err(FactorError::InvertedRange {
                factor: name.to_string(),
                low,
                high,
            });
        }

        Ok(Self {
            name: name.to_string(),
            unit,
            low,
            mid: range.mid(),
            high,
        })
    }

    pub fn value_at(&self, level: CodedLevel) -> f64 {
        match level {
            CodedLevel::Low => self.low,
            CodedLevel::Center => self.mid,
            CodedLevel::High => self.high,
        }
    }

    /// Column header, e.g. `Extraction Time (min)`.
    pub fn header(&self) -> String {
        format!("{} ({})", self.name, self.unit)
    }
}

/// The design factors of a batch together with the settings held constant across all runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorSet {
    pub factors: Vec<DesignFactor>,
    pub fixed: Vec<ProcessCondition>,
}

pub fn build_factors(process: &ProcessConditions) -> Result<FactorSet, FactorError> {
    let mut factors = Vec::with_capacity(4);
    let mut fixed = Vec::new();

    for condition in process.iter() {
        match condition.setting {
            ParameterSetting::Range(range) => {
                factors.push(DesignFactor::new(
                    condition.parameter.name(),
                    condition.unit,
                    range,
                )?);
            }
            ParameterSetting::Fixed { value } => {
                debug!(
                    parameter = %condition.parameter,
                    value,
                    "Holding parameter constant; excluded from the design."
                );
                fixed.push(*condition);
            }
        }
    }

    Ok(FactorSet { factors, fixed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::conditions::parameter::ProcessParameter;

    fn process(salt: ParameterSetting) -> ProcessConditions {
        ProcessConditions {
            salt_addition: ProcessCondition::new(ProcessParameter::SaltAddition, salt),
            extraction_time: ProcessCondition::new(
                ProcessParameter::ExtractionTime,
                ParameterSetting::range(20.0, 30.0),
            ),
            extraction_temperature: ProcessCondition::new(
                ProcessParameter::ExtractionTemperature,
                ParameterSetting::range(40.0, 60.0),
            ),
            agitation_rate: ProcessCondition::new(
                ProcessParameter::AgitationRate,
                ParameterSetting::range(600.0, 800.0),
            ),
        }
    }

    #[test]
    fn coded_levels_map_to_low_mid_high() {
        let factor =
            DesignFactor::new("Extraction Time", Unit::Minutes, ParameterRange::new(30.0, 60.0))
                .unwrap();
        assert_eq!(factor.value_at(CodedLevel::Low), 30.0);
        assert_eq!(factor.value_at(CodedLevel::Center), 45.0);
        assert_eq!(factor.value_at(CodedLevel::High), 60.0);
        assert_eq!(factor.header(), "Extraction Time (min)");
    }

    #[test]
    fn zero_width_range_is_degenerate() {
        let result = DesignFactor::new("Salt Addition", Unit::Percent, ParameterRange::new(5.0, 5.0));
        assert_eq!(
            result,
            Err(FactorError::DegenerateRange {
                factor: "Salt Addition".to_string(),
                low: 5.0,
                high: 5.0,
            })
        );
    }

    #[test]
    fn non_finite_bounds_are_degenerate() {
        let result = DesignFactor::new("x", Unit::Rpm, ParameterRange::new(f64::NAN, 1.0));
        assert!(matches!(result, Err(FactorError::DegenerateRange { .. })));
    }

    #[test]
    fn unbounded_range_is_degenerate() {
        let result = DesignFactor::new("x", Unit::Rpm, ParameterRange::new(0.0, f64::INFINITY));
        assert!(matches!(result, Err(FactorError::DegenerateRange { .. })));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let result = DesignFactor::new("x", Unit::Rpm, ParameterRange::new(800.0, 600.0));
        assert!(matches!(result, Err(FactorError::InvertedRange { .. })));
    }

    #[test]
    fn every_ranged_condition_becomes_a_factor_in_column_order() {
        let set = build_factors(&process(ParameterSetting::range(0.0, 10.0))).unwrap();
        let names: Vec<&str> = set.factors.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Salt Addition",
                "Extraction Time",
                "Extraction Temperature",
                "Agitation Rate"
            ]
        );
        assert!(set.fixed.is_empty());
    }

    #[test]
    fn fixed_settings_are_carried_outside_the_factor_set() {
        let set = build_factors(&process(ParameterSetting::fixed(0.0))).unwrap();
        assert_eq!(set.factors.len(), 3);
        assert_eq!(set.fixed.len(), 1);
        assert_eq!(set.fixed[0].parameter, ProcessParameter::SaltAddition);
    }

    #[test]
    fn degenerate_condition_fails_the_whole_factor_set() {
        let result = build_factors(&process(ParameterSetting::range(0.0, 0.0)));
        assert!(matches!(result, Err(FactorError::DegenerateRange { .. })));
    }
}
