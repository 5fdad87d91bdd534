use crate::cli::{BatchArgs, DesignOverrides};
use crate::config;
use crate::error::{CliError, Result};
use crate::output::{self, OutputFormat, PlanReport};
use crate::utils::progress;
use rayon::prelude::*;
use spme_doejo::{engine::progress::ProgressReporter, workflows};
use std::path::{Path, PathBuf};
use tracing::{error, info};

pub fn run(args: BatchArgs) -> Result<()> {
    std::fs::create_dir_all(&args.output_dir)?;
    info!(
        "Planning {} request file(s) into {:?}",
        args.inputs.len(),
        &args.output_dir
    );

    let pb = progress::batch_bar(args.inputs.len() as u64);
    let outcomes: Vec<(&PathBuf, Result<PathBuf>)> = args
        .inputs
        .par_iter()
        .map(|input| {
            let outcome = plan_one(input, &args.output_dir, args.format, &args.overrides);
            pb.inc(1);
            (input, outcome)
        })
        .collect();
    pb.finish_and_clear();

    let mut failed = 0;
    for (input, outcome) in &outcomes {
        match outcome {
            Ok(path) => println!("✓ {} → {}", input.display(), path.display()),
            Err(e) => {
                failed += 1;
                error!("Planning {:?} failed: {}", input, e);
                eprintln!("✗ {}: {}", input.display(), e);
            }
        }
    }

    if failed > 0 {
        return Err(CliError::Other(anyhow::anyhow!(
            "{} of {} request file(s) failed",
            failed,
            outcomes.len()
        )));
    }
    Ok(())
}

fn plan_one(
    input: &Path,
    output_dir: &Path,
    format: OutputFormat,
    overrides: &DesignOverrides,
) -> Result<PathBuf> {
    let app = config::build_config(input, overrides)?;

    let label = input.display().to_string();
    let reporter = ProgressReporter::with_callback(progress::log_callback(label));
    let plan = workflows::plan::run(&app.compounds, app.batch, &app.design, &reporter)?;

    let output_path = output_path(input, output_dir, format);
    let report = PlanReport {
        request: &app.input_path,
        compounds: &app.compounds,
        rejected: &app.rejected,
        plan: &plan,
    };
    output::save_report(&report, format, &output_path)?;

    info!(
        "Wrote {} run(s) for {:?} to {:?}",
        plan.design.len(),
        input,
        &output_path
    );
    Ok(output_path)
}

fn output_path(input: &Path, output_dir: &Path, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "request".to_string());
    output_dir.join(format!("{}.{}", stem, format.extension()))
}
