use crate::core::conditions::classifier::{self, ProcessConditions, SpmeConditions};
use crate::core::conditions::parameter::{ParameterSetting, ProcessCondition};
use crate::core::design::factor;
use crate::core::design::matrix::DesignMatrix;
use crate::core::models::compound::Compound;
use crate::core::models::profile::{AggregateProfile, BatchConditions};
use crate::engine::config::DesignConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use serde::Serialize;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentPlan {
    pub profile: AggregateProfile,
    pub conditions: SpmeConditions,
    /// Parameters held constant across every run.
    pub fixed_settings: Vec<ProcessCondition>,
    pub design: DesignMatrix,
}

#[instrument(skip_all, name = "planning_workflow", fields(compounds = compounds.len()))]
pub fn run(
    compounds: &[Compound],
    batch: BatchConditions,
    config: &DesignConfig,
    reporter: &ProgressReporter,
) -> Result<ExperimentPlan, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Aggregation",
    });
    let profile = AggregateProfile::from_compounds(compounds, batch)?;
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Classification",
    });
    let conditions = classifier::classify(&profile)?;
    info!(
        fiber = %conditions.fiber.fiber,
        equilibration_minutes = conditions.equilibration_time_minutes,
        "Classified compound batch."
    );
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Factor Construction",
    });
    let process = design_conditions(&conditions.process, config);
    let factor_set = factor::build_factors(&process)?;
    reporter.report(Progress::Message(format!(
        "{} factor(s) varied, {} held constant",
        factor_set.factors.len(),
        factor_set.fixed.len()
    )));
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Design Generation",
    });
    let center_points = config.center_points.resolve(factor_set.factors.len());
    let design = DesignMatrix::box_behnken(factor_set.factors, center_points)?;
    info!(
        runs = design.len(),
        center_points = design.center_point_count(),
        "Box-Behnken design ready."
    );
    reporter.report(Progress::PhaseFinish);

    Ok(ExperimentPlan {
        profile,
        conditions,
        fixed_settings: factor_set.fixed,
        design,
    })
}

fn design_conditions(process: &ProcessConditions, config: &DesignConfig) -> ProcessConditions {
    let mut process = *process;
    if !config.salt_in_design {
        if let ParameterSetting::Range(range) = process.salt_addition.setting {
            debug!(value = range.low, "Salt addition excluded from the design by configuration.");
            process.salt_addition.setting = ParameterSetting::fixed(range.low);
        }
    }
    process
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::conditions::fiber::Fiber;
    use crate::core::conditions::parameter::ProcessParameter;
    use crate::core::design::bbd::DesignError;
    use crate::core::models::profile::AggregateError;
    use crate::engine::config::{CenterPoints, DesignConfigBuilder};
    use std::sync::Mutex;

    fn config(center_points: CenterPoints) -> DesignConfig {
        DesignConfigBuilder::new()
            .center_points(center_points)
            .salt_in_design(true)
            .build()
            .unwrap()
    }

    fn hydrophobic_batch() -> Vec<Compound> {
        vec![
            Compound::new("Naphthalene")
                .with_xlogp(3.3)
                .with_molecular_weight(128.17)
                .with_boiling_point_celsius(218.0),
            Compound::new("Analyte X")
                .with_xlogp(4.0)
                .with_molecular_weight(250.0)
                .with_boiling_point_celsius(150.0),
        ]
    }

    fn single_analyte() -> Vec<Compound> {
        vec![
            Compound::new("Analyte X")
                .with_xlogp(4.0)
                .with_molecular_weight(250.0)
                .with_boiling_point_celsius(150.0),
        ]
    }

    #[test]
    fn hydrophobic_analyte_yields_a_four_factor_design_with_twenty_seven_runs() {
        let plan = run(
            &single_analyte(),
            BatchConditions::default(),
            &config(CenterPoints::Count(3)),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(plan.conditions.fiber.fiber, Fiber::Pdms);
        assert!(plan.fixed_settings.is_empty());
        assert_eq!(
            plan.design.headers(),
            vec![
                "Salt Addition (%)",
                "Extraction Time (min)",
                "Extraction Temperature (°C)",
                "Agitation Rate (rpm)"
            ]
        );
        assert_eq!(plan.design.len(), 27);
        assert_eq!(plan.design.center_point_count(), 3);

        let center = plan.design.runs().last().unwrap();
        assert_eq!(center.number, 27);
        assert_eq!(center.values().collect::<Vec<_>>(), vec![5.0, 25.0, 50.0, 700.0]);
    }

    #[test]
    fn charged_batch_holds_salt_constant_and_varies_three_factors() {
        let plan = run(
            &single_analyte(),
            BatchConditions {
                ionic: true,
                ..Default::default()
            },
            &config(CenterPoints::Recommended),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(plan.fixed_settings.len(), 1);
        assert_eq!(
            plan.fixed_settings[0].parameter,
            ProcessParameter::SaltAddition
        );
        assert_eq!(plan.design.factors().len(), 3);
        assert_eq!(plan.design.center_point_count(), 3);
        assert_eq!(plan.design.len(), 15);
    }

    #[test]
    fn salt_can_be_excluded_from_the_design_by_configuration() {
        let config = DesignConfigBuilder::new()
            .center_points(CenterPoints::Count(0))
            .salt_in_design(false)
            .build()
            .unwrap();
        let plan = run(
            &single_analyte(),
            BatchConditions::default(),
            &config,
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(plan.design.len(), 12);
        assert_eq!(
            plan.fixed_settings[0].setting,
            ParameterSetting::fixed(0.0)
        );
        assert_eq!(
            plan.conditions.process.salt_addition.setting,
            ParameterSetting::range(0.0, 10.0)
        );
    }

    #[test]
    fn identical_inputs_produce_identical_plans() {
        let first = run(
            &hydrophobic_batch(),
            BatchConditions::default(),
            &config(CenterPoints::Count(2)),
            &ProgressReporter::new(),
        )
        .unwrap();
        let second = run(
            &hydrophobic_batch(),
            BatchConditions::default(),
            &config(CenterPoints::Count(2)),
            &ProgressReporter::new(),
        )
        .unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    #[test]
    fn compound_order_does_not_change_the_plan() {
        let mut reversed = hydrophobic_batch();
        reversed.reverse();
        let forward = run(
            &hydrophobic_batch(),
            BatchConditions::default(),
            &config(CenterPoints::Count(1)),
            &ProgressReporter::new(),
        )
        .unwrap();
        let backward = run(
            &reversed,
            BatchConditions::default(),
            &config(CenterPoints::Count(1)),
            &ProgressReporter::new(),
        )
        .unwrap();
        assert_eq!(forward.design, backward.design);
        assert_eq!(forward.conditions, backward.conditions);
    }

    #[test]
    fn empty_input_is_rejected() {
        let result = run(
            &[],
            BatchConditions::default(),
            &config(CenterPoints::Count(1)),
            &ProgressReporter::new(),
        );
        assert_eq!(
            result,
            Err(EngineError::Aggregation {
                source: AggregateError::EmptyInput
            })
        );
    }

    #[test]
    fn negative_center_points_surface_as_a_design_error() {
        let result = run(
            &single_analyte(),
            BatchConditions::default(),
            &config(CenterPoints::Count(-2)),
            &ProgressReporter::new(),
        );
        assert_eq!(
            result,
            Err(EngineError::Design {
                source: DesignError::InvalidCenterPointCount(-2)
            })
        );
    }

    #[test]
    fn every_phase_is_reported() {
        let phases = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::PhaseStart { name } = event {
                phases.lock().unwrap().push(name);
            }
        }));
        run(
            &single_analyte(),
            BatchConditions::default(),
            &config(CenterPoints::Count(1)),
            &reporter,
        )
        .unwrap();
        drop(reporter);

        assert_eq!(
            phases.into_inner().unwrap(),
            vec![
                "Aggregation",
                "Classification",
                "Factor Construction",
                "Design Generation"
            ]
        );
    }
}
