use serde::Serialize;
use umia_core::model::entity::{PersonaId, ScenarioId};

/// CO2e based comparisons across scenarios and personas.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ComparativeStatistics {
    /// by likelihood-weighted group CO2e per scenario
    pub scenarios: ScenarioRange,
    /// by kg CO2e per person
    pub individual: PersonaStatistics,
    /// by t CO2e per population group
    pub group: PersonaStatistics,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct ScenarioExtreme {
    pub scenario: ScenarioId,
    pub co2e: f64,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct ScenarioRange {
    pub highest: ScenarioExtreme,
    pub lowest: ScenarioExtreme,
    pub difference: f64,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct PersonaMean {
    pub persona: PersonaId,
    /// mean over all scenarios
    pub co2e: f64,
}

/// the CO2e spread of one persona across scenarios
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct EmitterProfile {
    pub persona: PersonaId,
    pub max_scenario: ScenarioId,
    pub max_co2e: f64,
    pub min_scenario: ScenarioId,
    pub min_co2e: f64,
    /// max / min, absent when min is zero
    pub ratio: Option<f64>,
}

impl EmitterProfile {
    pub fn range(&self) -> f64 {
        self.max_co2e - self.min_co2e
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct PersonaStatistics {
    pub highest_mean: PersonaMean,
    pub lowest_mean: PersonaMean,
    /// owner of the single highest persona-scenario value
    pub max_emitter: EmitterProfile,
    /// owner of the single lowest persona-scenario value
    pub min_emitter: EmitterProfile,
}
