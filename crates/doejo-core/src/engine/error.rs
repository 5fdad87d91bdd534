use thiserror::Error;

use super::config::ConfigError;
use crate::core::conditions::classifier::ClassificationError;
use crate::core::design::bbd::DesignError;
use crate::core::design::factor::FactorError;
use crate::core::models::profile::AggregateError;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Aggregation failed: {source}")]
    Aggregation {
        #[from]
        source: AggregateError,
    },

    #[error("Classification failed: {source}")]
    Classification {
        #[from]
        source: ClassificationError,
    },

    #[error("Factor construction failed: {source}")]
    Factor {
        #[from]
        source: FactorError,
    },

    #[error("Design generation failed: {source}")]
    Design {
        #[from]
        source: DesignError,
    },
}
