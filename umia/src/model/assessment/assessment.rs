use super::{AssessmentWarning, Evaluation, Variant};
use crate::model::intervention::{CellComparisonTable, ClampEvent, FootprintComparison};

/// the baseline evaluation and one evaluation per intervention.
#[derive(Clone, Debug, PartialEq)]
pub struct Assessment {
    pub baseline: Evaluation,
    pub interventions: Vec<InterventionOutcome>,
    pub warnings: Vec<AssessmentWarning>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterventionOutcome {
    pub variant: Variant,
    pub evaluation: Evaluation,
    pub clamped: Vec<ClampEvent>,
    pub comparison: FootprintComparison,
    /// per person, kg CO2e, MJ and cal per day
    pub individual_cells: CellComparisonTable,
    /// per population group, t CO2e, GJ and pizzas per day
    pub group_cells: CellComparisonTable,
}

impl Assessment {
    /// the baseline followed by each intervention
    pub fn evaluations(&self) -> impl Iterator<Item = (Variant, &Evaluation)> {
        std::iter::once((Variant::Baseline, &self.baseline)).chain(
            self.interventions
                .iter()
                .map(|i| (i.variant.clone(), &i.evaluation)),
        )
    }
}
