use crate::model::{
    aggregate::{ComparativeStatistics, ExpectedFootprint},
    assessment::{Assessment, AssessmentWarning, Evaluation, Variant},
    impact::ImpactValues,
    intervention::FootprintComparison,
};
use serde::Serialize;
use umia_core::model::{session::Session, validation::Percent};

/// machine-readable results of one assessment, written as summary.json
#[derive(Serialize, Debug)]
pub struct Summary<'a> {
    pub created_at: String,
    pub population: u64,
    pub scenarios: Vec<ScenarioSummary<'a>>,
    pub baseline: VariantSummary<'a>,
    pub interventions: Vec<InterventionSummary<'a>>,
    pub warnings: &'a [AssessmentWarning],
}

#[derive(Serialize, Debug)]
pub struct ScenarioSummary<'a> {
    pub label: String,
    pub name: &'a str,
    pub likelihood: Percent,
}

/// group totals are indexed like the scenarios of the summary
#[derive(Serialize, Debug)]
pub struct VariantSummary<'a> {
    pub variant: Variant,
    pub footprint: &'a ExpectedFootprint,
    pub scenario_totals: &'a [ImpactValues],
    pub statistics: Option<&'a ComparativeStatistics>,
}

#[derive(Serialize, Debug)]
pub struct InterventionSummary<'a> {
    #[serde(flatten)]
    pub result: VariantSummary<'a>,
    pub comparison: &'a FootprintComparison,
    pub clamped_ratings: usize,
}

impl<'a> Summary<'a> {
    pub fn new(session: &'a Session, assessment: &'a Assessment) -> Summary<'a> {
        let scenarios = session
            .scenarios
            .iter()
            .map(|s| ScenarioSummary {
                label: s.id.to_string(),
                name: &s.name,
                likelihood: s.likelihood,
            })
            .collect();
        let interventions = assessment
            .interventions
            .iter()
            .map(|outcome| InterventionSummary {
                result: VariantSummary::new(outcome.variant.clone(), &outcome.evaluation),
                comparison: &outcome.comparison,
                clamped_ratings: outcome.clamped.len(),
            })
            .collect();
        Summary {
            created_at: chrono::Local::now().to_rfc3339(),
            population: session.population,
            scenarios,
            baseline: VariantSummary::new(Variant::Baseline, &assessment.baseline),
            interventions,
            warnings: &assessment.warnings,
        }
    }
}

impl<'a> VariantSummary<'a> {
    pub fn new(variant: Variant, evaluation: &'a Evaluation) -> VariantSummary<'a> {
        VariantSummary {
            variant,
            footprint: &evaluation.footprint,
            scenario_totals: &evaluation.scenario_totals,
            statistics: evaluation.statistics.as_ref(),
        }
    }
}
