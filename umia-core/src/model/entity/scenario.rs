use super::{CharacteristicLevel, ScenarioId, AXIS_COUNT};
use crate::model::validation::Percent;
use serde::Serialize;
use std::path::PathBuf;

/// a possible future state of the study area.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Scenario {
    pub id: ScenarioId,
    pub name: String,
    pub description: String,
    /// one level per uncertainty axis of the session
    pub characteristics: [CharacteristicLevel; AXIS_COUNT],
    pub image: Option<PathBuf>,
    pub likelihood: Percent,
}
