use crate::cli::CasArgs;
use crate::error::{CliError, Result};
use spme_doejo::core::models::cas::CasNumber;
use tracing::debug;

pub fn run(args: CasArgs) -> Result<()> {
    let mut invalid = 0;
    for line in check_all(&args.numbers) {
        match line {
            Ok(cas) => println!("✓ {}", cas),
            Err(message) => {
                invalid += 1;
                println!("✗ {}", message);
            }
        }
    }

    if invalid > 0 {
        return Err(CliError::Argument(format!(
            "{} of {} CAS number(s) are invalid",
            invalid,
            args.numbers.len()
        )));
    }
    Ok(())
}

fn check_all(numbers: &[String]) -> Vec<std::result::Result<CasNumber, String>> {
    numbers
        .iter()
        .map(|raw| {
            let result = raw.parse::<CasNumber>().map_err(|e| e.to_string());
            debug!(cas = %raw, valid = result.is_ok(), "Checked CAS number.");
            result
        })
        .collect()
}
