use crate::error::{CliError, Result};
use serde::Deserialize;
use spme_doejo::core::models::cas::{CasError, CasNumber};
use spme_doejo::core::models::compound::Compound;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq)]
pub enum CompoundError {
    #[error("compound name cannot be empty")]
    EmptyName,

    #[error(transparent)]
    Cas(#[from] CasError),

    #[error("'boiling-point' and 'boiling-point-kelvin' are mutually exclusive")]
    ConflictingBoilingPoints,

    #[error("molecular weight must be positive, got {0}")]
    NonPositiveMolecularWeight(f64),
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct RequestFile {
    pub options: Option<FileOptions>,
    #[serde(default)]
    pub compounds: Vec<FileCompound>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileOptions {
    pub center_points: Option<FileCenterPoints>,
    pub salt_in_design: Option<bool>,
    pub high_viscosity: Option<bool>,
    pub ionic: Option<bool>,
}

/// `center-points = 3` or `center-points = "recommended"`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FileCenterPoints {
    Count(i64),
    Named(String),
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileCompound {
    pub name: String,
    pub cid: Option<u64>,
    pub cas: Option<String>,
    pub xlogp: Option<f64>,
    pub molecular_weight: Option<f64>,
    /// Degrees Celsius.
    pub boiling_point: Option<f64>,
    pub boiling_point_kelvin: Option<f64>,
    #[serde(default)]
    pub charged: bool,
}

impl RequestFile {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading request file {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

impl FileCompound {
    pub fn into_compound(self) -> std::result::Result<Compound, CompoundError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CompoundError::EmptyName);
        }

        let mut compound = Compound::new(name).charged(self.charged);
        if let Some(cid) = self.cid {
            compound = compound.with_cid(cid);
        }
        if let Some(cas) = &self.cas {
            compound = compound.with_cas(cas.parse::<CasNumber>()?);
        }
        if let Some(xlogp) = self.xlogp {
            compound = compound.with_xlogp(xlogp);
        }
        if let Some(mw) = self.molecular_weight {
            if mw <= 0.0 {
                return Err(CompoundError::NonPositiveMolecularWeight(mw));
            }
            compound = compound.with_molecular_weight(mw);
        }
        compound = match (self.boiling_point, self.boiling_point_kelvin) {
            (Some(_), Some(_)) => return Err(CompoundError::ConflictingBoilingPoints),
            (Some(celsius), None) => compound.with_boiling_point_celsius(celsius),
            (None, Some(kelvin)) => compound.with_boiling_point_kelvin(kelvin),
            (None, None) => compound,
        };

        Ok(compound)
    }
}
