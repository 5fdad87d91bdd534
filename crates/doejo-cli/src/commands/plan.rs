use crate::cli::PlanArgs;
use crate::config;
use crate::error::Result;
use crate::output::{self, PlanReport};
use crate::utils::progress::CliProgressHandler;
use spme_doejo::{engine::progress::ProgressReporter, workflows};
use std::io;
use tracing::info;

pub fn run(args: PlanArgs) -> Result<()> {
    info!("Building configuration from {:?}", &args.input);
    let app = config::build_config(&args.input, &args.overrides)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the planning workflow...");
    let plan = workflows::plan::run(&app.compounds, app.batch, &app.design, &reporter)?;
    info!(
        "Workflow finished: {} run(s) over {} factor(s).",
        plan.design.len(),
        plan.design.factors().len()
    );

    let report = PlanReport {
        request: &app.input_path,
        compounds: &app.compounds,
        rejected: &app.rejected,
        plan: &plan,
    };

    match &args.output {
        Some(path) => {
            output::save_report(&report, args.format, path)?;
            println!(
                "✓ {} experiment(s) with fiber {} written to: {}",
                plan.design.len(),
                plan.conditions.fiber.fiber,
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            output::write_report(&report, args.format, stdout.lock())?;
        }
    }

    if !app.rejected.is_empty() {
        eprintln!(
            "Warning: {} compound(s) were skipped; see the report for details.",
            app.rejected.len()
        );
    }

    Ok(())
}
