use crate::config::RejectedCompound;
use crate::error::{CliError, Result};
use serde::Serialize;
use spme_doejo::core::models::compound::Compound;
use spme_doejo::workflows::plan::ExperimentPlan;
use std::io::Write;
use std::path::Path;

/// Everything written out for one request file.
#[derive(Debug, Serialize)]
pub struct PlanReport<'a> {
    pub request: &'a Path,
    pub compounds: &'a [Compound],
    pub rejected: &'a [RejectedCompound],
    pub plan: &'a ExperimentPlan,
}

pub(super) fn write_json<W: Write>(report: &PlanReport, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, report).map_err(|e| CliError::Other(e.into()))?;
    writeln!(writer)?;
    Ok(())
}
