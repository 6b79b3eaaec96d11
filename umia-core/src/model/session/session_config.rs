use crate::model::{
    coefficients::ModeCoefficients,
    entity::{CharacteristicLevel, UncertaintyAxis},
    mode::RawModeValues,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_POPULATION: u64 = 50000;

fn default_population() -> u64 {
    DEFAULT_POPULATION
}

/// serialized form of a session, as read from a TOML or JSON session file.
/// scenarios, personas and their table rows reference each other by name.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SessionConfig {
    #[serde(default = "default_population")]
    pub population: u64,
    /// the four uncertainty axes. when omitted the default axes are used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axes: Option<Vec<UncertaintyAxis>>,
    #[serde(default)]
    pub coefficients: ModeCoefficients,
    pub personas: Vec<PersonaConfig>,
    pub scenarios: Vec<ScenarioConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interventions: Vec<InterventionConfig>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PersonaConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub distance_km: f64,
    pub body_mass_kg: f64,
    /// percent of the population
    pub weight: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScenarioConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// percent
    pub likelihood: i64,
    /// one level per uncertainty axis, all medium when omitted
    #[serde(default)]
    pub characteristics: Vec<CharacteristicLevel>,
    pub ratings: Vec<RatingRowConfig>,
}

/// the mode ratings of one persona in the enclosing scenario. values are
/// range checked when the session is built so that a bad row can be
/// reported against its cell.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RatingRowConfig {
    pub persona: String,
    pub modes: RawModeValues<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InterventionConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,
    #[serde(default)]
    pub description: String,
    /// rows not listed leave the ratings unchanged
    #[serde(default)]
    pub deltas: Vec<DeltaRowConfig>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DeltaRowConfig {
    pub scenario: String,
    pub persona: String,
    pub modes: RawModeValues<i64>,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::mode::RawMode;

    const SESSION_TOML: &str = r#"
        population = 1000

        [[personas]]
        name = "Rui"
        distance_km = 4
        body_mass_kg = 53
        weight = 50

        [[personas]]
        name = "Adrian"
        distance_km = 10
        body_mass_kg = 72
        weight = 50

        [[scenarios]]
        name = "Dense"
        likelihood = 100
        characteristics = ["high", "very_high", "high", "medium"]

        [[scenarios.ratings]]
        persona = "Rui"
        modes = { bike = 4, walk = 3 }

        [[scenarios.ratings]]
        persona = "Adrian"
        modes = { car = 4, car_walk = 2 }

        [[interventions]]
        name = "Bike lanes"
        acronym = "BL"

        [[interventions.deltas]]
        scenario = "Dense"
        persona = "Adrian"
        modes = { bike = 2, car = -1 }
    "#;

    #[test]
    fn test_deserialize_toml() {
        let config: SessionConfig = toml::from_str(SESSION_TOML).expect("test invariant failed");
        assert_eq!(config.population, 1000);
        assert_eq!(config.coefficients, ModeCoefficients::default());
        assert_eq!(config.scenarios[0].ratings.len(), 2);
        let adrian = &config.scenarios[0].ratings[1];
        assert_eq!(adrian.modes[RawMode::Car], 4);
        assert_eq!(adrian.modes[RawMode::CarWalk], 2);
        assert_eq!(adrian.modes[RawMode::Bike], 0);
        assert_eq!(config.interventions[0].deltas.len(), 1);
    }

    #[test]
    fn test_rating_out_of_range_parses() {
        // out of range ratings are reported per cell when the session is built
        let bad = SESSION_TOML.replace("bike = 4, walk = 3", "bike = 5");
        let config: SessionConfig = toml::from_str(&bad).expect("test failed");
        assert_eq!(config.scenarios[0].ratings[0].modes[RawMode::Bike], 5);
    }

    #[test]
    fn test_non_integer_rating_rejected() {
        let bad = SESSION_TOML.replace("bike = 4, walk = 3", "bike = \"often\"");
        let result: Result<SessionConfig, _> = toml::from_str(&bad);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_population() {
        let json = r#"{"personas": [], "scenarios": []}"#;
        let config: SessionConfig = serde_json::from_str(json).expect("test invariant failed");
        assert_eq!(config.population, DEFAULT_POPULATION);
        assert!(config.axes.is_none());
    }
}
