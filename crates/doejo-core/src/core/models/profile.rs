use super::compound::Compound;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument, warn};

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum AggregateError {
    #[error("Cannot aggregate an empty compound list: at least one compound is required")]
    EmptyInput,
}

/// Properties of the sample matrix that apply to the whole batch rather than to a compound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchConditions {
    pub high_viscosity: bool,
    /// Marks every analyte in the batch as charged or ionic.
    pub ionic: bool,
}

/// The worst-case view of a compound batch that drives every classification rule.
///
/// `None` means no compound in the batch defined the property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateProfile {
    pub max_xlogp: Option<f64>,
    pub max_molecular_weight: Option<f64>,
    pub max_boiling_point: Option<f64>,
    pub any_charged: bool,
    pub high_viscosity: bool,
}

impl AggregateProfile {
    #[instrument(level = "debug", skip_all, fields(compounds = compounds.len()))]
    pub fn from_compounds(
        compounds: &[Compound],
        batch: BatchConditions,
    ) -> Result<Self, AggregateError> {
        if compounds.is_empty() {
            return Err(AggregateError::EmptyInput);
        }

        let profile = Self {
            max_xlogp: max_defined(compounds, "xlogp", |c| c.xlogp),
            max_molecular_weight: max_defined(compounds, "molecular weight", |c| {
                c.molecular_weight
            }),
            max_boiling_point: max_defined(compounds, "boiling point", |c| {
                c.boiling_point_celsius
            }),
            any_charged: batch.ionic || compounds.iter().any(|c| c.is_charged),
            high_viscosity: batch.high_viscosity,
        };

        debug!(?profile, "Aggregated compound batch.");
        Ok(profile)
    }
}

fn max_defined<F>(compounds: &[Compound], property: &'static str, get: F) -> Option<f64>
where
    F: Fn(&Compound) -> Option<f64>,
{
    compounds
        .iter()
        .filter_map(|compound| match get(compound) {
            Some(value) if value.is_finite() => Some(value),
            Some(value) => {
                warn!(
                    compound = %compound.name,
                    property,
                    value,
                    "Ignoring non-finite property value."
                );
                None
            }
            None => None,
        })
        .reduce(f64::max)
}
