use super::modal_distance_row::cell_scenario;
use crate::model::assessment::{Evaluation, Variant};
use serde::{Deserialize, Serialize};
use umia_core::model::session::Session;

/// individual and group impacts of one persona in one scenario
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ImpactRow {
    pub variant: String,
    pub scenario: String,
    pub persona: String,
    pub co2e_kg: f64,
    pub energy_mj: f64,
    pub calories: f64,
    pub group_co2e_t: f64,
    pub group_energy_gj: f64,
    pub group_pizzas: f64,
}

impl ImpactRow {
    pub fn rows(session: &Session, variant: &Variant, evaluation: &Evaluation) -> Vec<Self> {
        let impacts = &evaluation.impacts;
        impacts
            .individual
            .iter()
            .map(|(key, individual)| {
                let group = impacts.group.get(key).copied().unwrap_or_default();
                ImpactRow {
                    variant: variant.to_string(),
                    scenario: cell_scenario(session, variant, key),
                    persona: session.persona_name(key.persona),
                    co2e_kg: individual.co2e,
                    energy_mj: individual.energy,
                    calories: individual.calories,
                    group_co2e_t: group.co2e,
                    group_energy_gj: group.energy,
                    group_pizzas: group.calories,
                }
            })
            .collect()
    }
}
