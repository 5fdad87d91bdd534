use super::bbd::{self, DesignError};
use super::factor::{CodedLevel, DesignFactor};
use serde::Serialize;
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorLevel {
    pub factor: String,
    pub coded: CodedLevel,
    pub value: f64,
}

/// One row of the design matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignRun {
    pub number: usize, // 1-based experiment number
    pub levels: Vec<FactorLevel>,
    pub is_center_point: bool,
}

impl DesignRun {
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.levels.iter().map(|level| level.value)
    }
}

/// A Box-Behnken experiment in real engineering units, in generation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignMatrix {
    factors: Vec<DesignFactor>,
    runs: Vec<DesignRun>,
}

impl DesignMatrix {
    #[instrument(level = "debug", skip(factors), fields(factors = factors.len()))]
    pub fn box_behnken(factors: Vec<DesignFactor>, center_points: i64) -> Result<Self, DesignError> {
        let coded = bbd::coded_runs(factors.len(), center_points)?;

        let runs: Vec<DesignRun> = coded
            .into_iter()
            .enumerate()
            .map(|(idx, run)| DesignRun {
                number: idx + 1,
                levels: factors
                    .iter()
                    .zip(run.levels)
                    .map(|(factor, coded)| FactorLevel {
                        factor: factor.name.clone(),
                        coded,
                        value: factor.value_at(coded),
                    })
                    .collect(),
                is_center_point: run.is_center_point,
            })
            .collect();

        debug!(runs = runs.len(), "Generated Box-Behnken design.");
        Ok(Self { factors, runs })
    }

    pub fn factors(&self) -> &[DesignFactor] {
        &self.factors
    }

    pub fn runs(&self) -> &[DesignRun] {
        &self.runs
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn center_point_count(&self) -> usize {
        self.runs.iter().filter(|run| run.is_center_point).count()
    }

    /// Factor column headers with units, in factor order.
    pub fn headers(&self) -> Vec<String> {
        self.factors.iter().map(DesignFactor::header).collect()
    }
}
