use crate::output::OutputFormat;
use crate::utils::parser;
use clap::{Args, Parser, Subcommand};
use spme_doejo::engine::config::CenterPoints;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "SPME-DoEjo Contributors",
    version,
    about = "DoEjo CLI - Recommends SPME fibers and extraction conditions for a set of analytes and lays out the Box-Behnken experiment that optimizes them.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used by `batch`.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend conditions and generate the experiment design for one request file.
    Plan(PlanArgs),
    /// Plan several request files in parallel, writing one design per file.
    Batch(BatchArgs),
    /// Check CAS registry numbers for well-formedness and a valid check digit.
    Cas(CasArgs),
}

/// Arguments for the `plan` subcommand.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Path to the request file in TOML format (compounds and design options).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Write the report to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub overrides: DesignOverrides,
}

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Request files to plan.
    #[arg(required = true, num_args(1..), value_name = "PATH")]
    pub inputs: Vec<PathBuf>,

    /// Directory receiving one report per request file, named after the input file.
    #[arg(short, long, required = true, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Report format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub overrides: DesignOverrides,
}

/// Arguments for the `cas` subcommand.
#[derive(Args, Debug)]
pub struct CasArgs {
    /// CAS registry numbers, e.g. 64-17-5.
    #[arg(required = true, num_args(1..), value_name = "CAS")]
    pub numbers: Vec<String>,
}

/// Overrides applied on top of the request file's `[options]` table.
#[derive(Args, Debug, Clone, Default)]
pub struct DesignOverrides {
    /// Number of center-point replicates, or 'recommended' for the conventional count.
    #[arg(short = 'c', long, value_name = "N|recommended", value_parser = parser::parse_center_points)]
    pub center_points: Option<CenterPoints>,

    #[command(flatten)]
    pub viscosity: Viscosity,

    /// Treat every analyte in the batch as charged or ionic.
    #[arg(long)]
    pub ionic: bool,

    /// Set a specific configuration value, overriding the request file.
    /// Can be used multiple times. Example: -S options.salt-in-design=false
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Mutually exclusive flags for the sample matrix viscosity.
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(required = false, multiple = false)]
pub struct Viscosity {
    /// The sample matrix is highly viscous (lower agitation rates).
    #[arg(long)]
    pub high_viscosity: bool,
    /// The sample matrix is not viscous, overriding the request file.
    #[arg(long)]
    pub low_viscosity: bool,
}
