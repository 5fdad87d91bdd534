use super::factor::CodedLevel;
use thiserror::Error;
use tracing::instrument;

/// Box-Behnken designs are undefined below three factors.
pub const MIN_FACTORS: usize = 3;

const RUNS_PER_PAIR: usize = 4;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DesignError {
    #[error("Box-Behnken designs require at least 3 factors, found {found}")]
    InvalidFactorCount { found: usize },

    #[error("Center-point count must be non-negative, got {0}")]
    InvalidCenterPointCount(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodedRun {
    pub levels: Vec<CodedLevel>,
    pub is_center_point: bool,
}

pub fn run_count(factors: usize, center_points: usize) -> usize {
    let pairs = factors * factors.saturating_sub(1) / 2;
    RUNS_PER_PAIR * pairs + center_points
}

/// Center-point replicates conventionally paired with a `k`-factor design.
pub fn recommended_center_points(factors: usize) -> usize {
    match factors {
        3 | 4 => 3,
        5..=7 => 6,
        9 | 10 => 10,
        11 => 11,
        12 | 16 => 12,
        k => k,
    }
}

#[instrument(level = "debug")]
pub fn coded_runs(factors: usize, center_points: i64) -> Result<Vec<CodedRun>, DesignError> {
    if factors < MIN_FACTORS {
        return Err(DesignError::InvalidFactorCount { found: factors });
    }
    let center_points = usize::try_from(center_points)
        .map_err(|_| DesignError::InvalidCenterPointCount(center_points))?;

    let mut runs = Vec::with_capacity(run_count(factors, center_points));
    for i in 0..factors {
        for j in (i + 1)..factors {
            for first in CodedLevel::EXTREMES {
                for second in CodedLevel::EXTREMES {
                    let mut levels = vec![CodedLevel::Center; factors];
                    levels[i] = first;
                    levels[j] = second;
                    runs.push(CodedRun {
                        levels,
                        is_center_point: false,
                    });
                }
            }
        }
    }

    runs.extend((0..center_points).map(|_| CodedRun {
        levels: vec![CodedLevel::Center; factors],
        is_center_point: true,
    }));

    Ok(runs)
}
