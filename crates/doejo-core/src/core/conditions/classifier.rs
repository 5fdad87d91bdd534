use super::fiber::{Desorption, Fiber};
use super::kinetics::equilibration_time;
use super::parameter::{ProcessCondition, ProcessParameter};
use super::rules::{self, FiberDriver, RuleTable, SaltDriver};
use crate::core::models::profile::AggregateProfile;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ClassificationError {
    #[error("Cannot classify {parameter}: '{driver}' is undefined for every compound")]
    UndefinedDriver {
        parameter: &'static str,
        driver: &'static str,
    },

    #[error("No {parameter} rule matched the aggregate profile")]
    NoMatchingRule { parameter: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FiberRecommendation {
    pub fiber: Fiber,
    pub desorption: Desorption,
}

/// The four continuous process parameters, in design-table column order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProcessConditions {
    pub salt_addition: ProcessCondition,
    pub extraction_time: ProcessCondition,
    pub extraction_temperature: ProcessCondition,
    pub agitation_rate: ProcessCondition,
}

impl ProcessConditions {
    pub fn iter(&self) -> impl Iterator<Item = &ProcessCondition> {
        ProcessParameter::ALL
            .into_iter()
            .map(|parameter| self.get(parameter))
    }

    pub fn get(&self, parameter: ProcessParameter) -> &ProcessCondition {
        match parameter {
            ProcessParameter::SaltAddition => &self.salt_addition,
            ProcessParameter::ExtractionTime => &self.extraction_time,
            ProcessParameter::ExtractionTemperature => &self.extraction_temperature,
            ProcessParameter::AgitationRate => &self.agitation_rate,
        }
    }
}

/// Recommended SPME conditions for one analyte batch.
///
/// The fiber is a categorical result and is kept apart from the process parameters so that it
/// can never leak into the design matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpmeConditions {
    pub fiber: FiberRecommendation,
    pub process: ProcessConditions,
    /// τ(M) for the heaviest analyte, minutes.
    pub equilibration_time_minutes: f64,
}

#[instrument(level = "debug", skip_all)]
pub fn classify(profile: &AggregateProfile) -> Result<SpmeConditions, ClassificationError> {
    let molecular_weight =
        profile
            .max_molecular_weight
            .ok_or(ClassificationError::UndefinedDriver {
                parameter: rules::EXTRACTION_TIME.parameter,
                driver: "molecular weight",
            })?;

    let fiber = select(
        &rules::FIBER,
        &FiberDriver {
            xlogp: profile.max_xlogp,
            molecular_weight,
        },
    )?;
    let salt = select(
        &rules::SALT_ADDITION,
        &SaltDriver {
            xlogp: profile.max_xlogp,
            any_charged: profile.any_charged,
        },
    )?;
    let time = select(&rules::EXTRACTION_TIME, &molecular_weight)?;
    let temperature = select(&rules::EXTRACTION_TEMPERATURE, &profile.max_boiling_point)?;
    let agitation = select(&rules::AGITATION_RATE, &profile.high_viscosity)?;

    Ok(SpmeConditions {
        fiber: FiberRecommendation {
            fiber,
            desorption: fiber.desorption(),
        },
        process: ProcessConditions {
            salt_addition: ProcessCondition::new(ProcessParameter::SaltAddition, salt),
            extraction_time: ProcessCondition::new(ProcessParameter::ExtractionTime, time),
            extraction_temperature: ProcessCondition::new(
                ProcessParameter::ExtractionTemperature,
                temperature,
            ),
            agitation_rate: ProcessCondition::new(ProcessParameter::AgitationRate, agitation),
        },
        equilibration_time_minutes: equilibration_time(molecular_weight),
    })
}

fn select<D: 'static, T: Copy + 'static>(
    table: &RuleTable<D, T>,
    driver: &D,
) -> Result<T, ClassificationError> {
    let rule = table
        .select(driver)
        .ok_or(ClassificationError::NoMatchingRule {
            parameter: table.parameter,
        })?;
    debug!(parameter = table.parameter, rule = rule.label, "Rule matched.");
    Ok(rule.outcome)
}
