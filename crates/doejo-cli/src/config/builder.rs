use super::defaults::DefaultsConfig;
use super::file::{FileCenterPoints, RequestFile};
use super::models::{AppConfig, RejectedCompound};
use crate::cli::DesignOverrides;
use crate::error::{CliError, Result};
use crate::utils::parser;
use spme_doejo::core::models::profile::BatchConditions;
use spme_doejo::engine::config::{self as core_config, CenterPoints};
use std::path::Path;
use tracing::{info, warn};

pub fn build_config(input: &Path, overrides: &DesignOverrides) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = RequestFile::from_file(input)?;
    let mut file_config = apply_set_values(file_config, &overrides.set_values)?;
    let options = file_config.options.take().unwrap_or_default();

    let center_points = match overrides.center_points {
        Some(cli) => cli,
        None => match options.center_points {
            Some(file) => resolve_center_points(file)?,
            None => defaults.center_points,
        },
    };

    let high_viscosity = match (
        overrides.viscosity.high_viscosity,
        overrides.viscosity.low_viscosity,
    ) {
        (true, false) => true,
        (false, true) => false,
        _ => options.high_viscosity.unwrap_or(defaults.high_viscosity),
    };
    let ionic = overrides.ionic || options.ionic.unwrap_or(defaults.ionic);

    let design = core_config::DesignConfigBuilder::new()
        .center_points(center_points)
        .salt_in_design(options.salt_in_design.unwrap_or(defaults.salt_in_design))
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let mut compounds = Vec::with_capacity(file_config.compounds.len());
    let mut rejected = Vec::new();
    for (idx, entry) in file_config.compounds.into_iter().enumerate() {
        let name = entry.name.clone();
        match entry.into_compound() {
            Ok(compound) => compounds.push(compound),
            Err(e) => {
                warn!("Skipping compound #{} ('{}'): {}", idx + 1, name, e);
                rejected.push(RejectedCompound {
                    entry: idx + 1,
                    name,
                    reason: e.to_string(),
                });
            }
        }
    }

    if compounds.is_empty() {
        return Err(CliError::NoValidCompounds {
            path: input.to_path_buf(),
            rejected: rejected.len(),
        });
    }
    info!(
        "Loaded {} compound(s) from {:?} ({} rejected).",
        compounds.len(),
        input,
        rejected.len()
    );

    Ok(AppConfig {
        input_path: input.to_path_buf(),
        compounds,
        rejected,
        batch: BatchConditions {
            high_viscosity,
            ionic,
        },
        design,
    })
}

fn resolve_center_points(value: FileCenterPoints) -> Result<CenterPoints> {
    match value {
        FileCenterPoints::Count(n) => Ok(CenterPoints::Count(n)),
        FileCenterPoints::Named(name) => {
            parser::parse_center_points(&name).map_err(|e| CliError::Config(e.to_string()))
        }
    }
}

fn apply_set_values(mut config: RequestFile, set_values: &[String]) -> Result<RequestFile> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let options = config.options.get_or_insert_with(Default::default);

        match key.trim() {
            "options.center-points" => {
                options.center_points = Some(FileCenterPoints::Named(value_str.to_string()));
            }
            "options.salt-in-design" => {
                options.salt_in_design = Some(parse_bool_value(key, value_str)?);
            }
            "options.high-viscosity" => {
                options.high_viscosity = Some(parse_bool_value(key, value_str)?);
            }
            "options.ionic" => {
                options.ionic = Some(parse_bool_value(key, value_str)?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

fn parse_bool_value(key: &str, value: &str) -> Result<bool> {
    parser::parse_bool(value)
        .map_err(|e| CliError::Config(format!("Invalid value for {}: {}", key, e)))
}
