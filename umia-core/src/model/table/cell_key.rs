use crate::model::entity::{PersonaId, ScenarioId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// composite key of a persona-scenario table cell. ordered persona-major.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellKey {
    pub persona: PersonaId,
    pub scenario: ScenarioId,
}

impl CellKey {
    pub fn new(persona: PersonaId, scenario: ScenarioId) -> CellKey {
        CellKey { persona, scenario }
    }
}

impl Display for CellKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.persona, self.scenario)
    }
}
