use crate::model::assessment::InterventionOutcome;
use serde::{Deserialize, Serialize};
use umia_core::model::session::Session;

/// per-person CO2e, energy and calories of one cell before and after an
/// intervention, with the change of the group values
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub intervention: String,
    pub scenario: String,
    pub persona: String,
    pub baseline_co2e_kg: f64,
    pub intervention_co2e_kg: f64,
    pub baseline_energy_mj: f64,
    pub intervention_energy_mj: f64,
    pub baseline_calories: f64,
    pub intervention_calories: f64,
    pub change_group_co2e_t: f64,
    pub change_group_energy_gj: f64,
    pub change_group_pizzas: f64,
}

impl ComparisonRow {
    pub fn rows(session: &Session, outcome: &InterventionOutcome) -> Vec<Self> {
        outcome
            .individual_cells
            .iter()
            .map(|(key, cell)| {
                let group = outcome
                    .group_cells
                    .get(key)
                    .map(|c| c.change())
                    .unwrap_or_default();
                ComparisonRow {
                    intervention: outcome.variant.to_string(),
                    scenario: session.scenario_name(key.scenario),
                    persona: session.persona_name(key.persona),
                    baseline_co2e_kg: cell.baseline.co2e,
                    intervention_co2e_kg: cell.intervention.co2e,
                    baseline_energy_mj: cell.baseline.energy,
                    intervention_energy_mj: cell.intervention.energy,
                    baseline_calories: cell.baseline.calories,
                    intervention_calories: cell.intervention.calories,
                    change_group_co2e_t: group.co2e,
                    change_group_energy_gj: group.energy,
                    change_group_pizzas: group.calories,
                }
            })
            .collect()
    }
}
