mod delimited;
mod report;
mod table;

pub use report::PlanReport;

use crate::error::Result;
use clap::ValueEnum;
use std::fs;
use std::io::Write;
use std::path::Path;

pub const EXPERIMENT_NUMBER_HEADER: &str = "Experiment Number";

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary followed by the aligned run table.
    Table,
    /// The run table only, one row per experiment.
    Csv,
    /// The full plan, including recommendations and rejected compounds.
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Table => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

pub fn write_report<W: Write>(report: &PlanReport, format: OutputFormat, writer: W) -> Result<()> {
    match format {
        OutputFormat::Table => table::write(report, writer),
        OutputFormat::Csv => delimited::write(report, writer),
        OutputFormat::Json => report::write_json(report, writer),
    }
}

/// Renders the complete report in memory; `path` is only written once rendering succeeded.
pub fn save_report(report: &PlanReport, format: OutputFormat, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    write_report(report, format, &mut buffer)?;
    fs::write(path, buffer)?;
    Ok(())
}
