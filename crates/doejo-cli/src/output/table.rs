use super::{EXPERIMENT_NUMBER_HEADER, PlanReport};
use crate::error::Result;
use std::io::Write;

const LABEL_WIDTH: usize = 28;
const COLUMN_GAP: &str = "  ";

pub(super) fn write<W: Write>(report: &PlanReport, mut w: W) -> Result<()> {
    let plan = report.plan;
    let conditions = &plan.conditions;

    writeln!(w, "Compounds ({}):", report.compounds.len())?;
    for compound in report.compounds {
        writeln!(w, "  {}", compound)?;
    }
    if !report.rejected.is_empty() {
        writeln!(w, "Rejected ({}):", report.rejected.len())?;
        for rejected in report.rejected {
            writeln!(w, "  #{} {}: {}", rejected.entry, rejected.name, rejected.reason)?;
        }
    }
    writeln!(w)?;

    writeln!(w, "{:<LABEL_WIDTH$}{}", "Fiber:", conditions.fiber.fiber)?;
    writeln!(w, "{:<LABEL_WIDTH$}{}", "Desorption:", conditions.fiber.desorption)?;
    for condition in conditions.process.iter() {
        let label = format!("{}:", condition.parameter);
        writeln!(w, "{:<LABEL_WIDTH$}{}", label, condition)?;
    }
    for fixed in &plan.fixed_settings {
        writeln!(
            w,
            "{:<LABEL_WIDTH$}{} at {}",
            "Held constant:", fixed.parameter, fixed
        )?;
    }
    writeln!(
        w,
        "{:<LABEL_WIDTH$}{:.1} min",
        "Equilibration estimate:", conditions.equilibration_time_minutes
    )?;
    writeln!(w)?;

    write_runs(report, &mut w)
}

fn write_runs<W: Write>(report: &PlanReport, w: &mut W) -> Result<()> {
    let design = &report.plan.design;

    let mut header = vec![EXPERIMENT_NUMBER_HEADER.to_string()];
    header.extend(design.headers());
    let rows: Vec<Vec<String>> = design
        .runs()
        .iter()
        .map(|run| {
            std::iter::once(run.number.to_string())
                .chain(run.values().map(|v| v.to_string()))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(col, title)| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(title.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    write_row(w, &header, &widths)?;
    let rule: Vec<String> = widths.iter().map(|&n| "-".repeat(n)).collect();
    write_row(w, &rule, &widths)?;
    for row in &rows {
        write_row(w, row, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write>(w: &mut W, cells: &[String], widths: &[usize]) -> Result<()> {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", " ".repeat(pad), cell)
        })
        .collect();
    writeln!(w, "{}", line.join(COLUMN_GAP))?;
    Ok(())
}
