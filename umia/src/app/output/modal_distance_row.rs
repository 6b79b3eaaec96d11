use crate::model::assessment::{Evaluation, Variant};
use serde::{Deserialize, Serialize};
use umia_core::model::{session::Session, table::CellKey};

/// km per day by canonical mode of one persona in one scenario
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ModalDistanceRow {
    pub variant: String,
    pub scenario: String,
    pub persona: String,
    pub pt: f64,
    pub car: f64,
    #[serde(rename = "mod")]
    pub mod_: f64,
    pub mm: f64,
    pub bike: f64,
    pub walk: f64,
    pub total: f64,
}

impl ModalDistanceRow {
    pub fn rows(session: &Session, variant: &Variant, evaluation: &Evaluation) -> Vec<Self> {
        evaluation
            .distances
            .iter()
            .map(|(key, km)| ModalDistanceRow {
                variant: variant.to_string(),
                scenario: cell_scenario(session, variant, key),
                persona: session.persona_name(key.persona),
                pt: km.pt,
                car: km.car,
                mod_: km.mod_,
                mm: km.mm,
                bike: km.bike,
                walk: km.walk,
                total: km.total(),
            })
            .collect()
    }
}

/// "S1a: name of the scenario"
pub(super) fn cell_scenario(session: &Session, variant: &Variant, key: &CellKey) -> String {
    format!(
        "{}{}: {}",
        key.scenario,
        variant.letter(),
        session.scenario_name(key.scenario)
    )
}
