use super::{EXPERIMENT_NUMBER_HEADER, PlanReport};
use crate::error::Result;
use std::io::Write;

pub(super) fn write<W: Write>(report: &PlanReport, writer: W) -> Result<()> {
    let design = &report.plan.design;
    let mut csv = csv::Writer::from_writer(writer);

    let mut header = vec![EXPERIMENT_NUMBER_HEADER.to_string()];
    header.extend(design.headers());
    csv.write_record(&header)?;

    for run in design.runs() {
        let mut record = vec![run.number.to_string()];
        record.extend(run.values().map(|v| v.to_string()));
        csv.write_record(&record)?;
    }

    csv.flush()?;
    Ok(())
}
