use serde::Serialize;
use spme_doejo::core::models::compound::Compound;
use spme_doejo::core::models::profile::BatchConditions;
use spme_doejo::engine::config::DesignConfig;
use std::path::PathBuf;

/// A compound entry of the request file that failed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedCompound {
    /// 1-based position in the request file.
    pub entry: usize,
    pub name: String,
    pub reason: String,
}

pub struct AppConfig {
    pub input_path: PathBuf,
    pub compounds: Vec<Compound>,
    pub rejected: Vec<RejectedCompound>,
    pub batch: BatchConditions,
    pub design: DesignConfig,
}
