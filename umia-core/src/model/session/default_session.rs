use super::{
    session_config::{
        DeltaRowConfig, InterventionConfig, PersonaConfig, RatingRowConfig, ScenarioConfig,
        SessionConfig,
    },
    Session, SessionError,
};
use crate::model::{
    coefficients::ModeCoefficients,
    entity::{CharacteristicLevel, UncertaintyAxis},
    mode::{RawMode, RawModeValues},
    rating::{Rating, RatingDelta},
    validation::{validation_ops, PERCENT_STEP},
};
use serde::Deserialize;
use std::collections::BTreeMap;

/// scenarios and personas in the default session when no count is given
pub const DEFAULT_ENTITY_COUNT: usize = 4;

const DEFAULT_SESSION_TOML: &str = include_str!("default_session.toml");

/// the built-in data file. entries are keyed by position rather than by
/// name so that any leading subset forms a complete session.
#[derive(Deserialize)]
struct DefaultSessionData {
    population: u64,
    axes: Vec<UncertaintyAxis>,
    scenarios: Vec<DefaultScenario>,
    personas: Vec<PersonaConfig>,
    interventions: Vec<DefaultIntervention>,
}

#[derive(Deserialize)]
struct DefaultScenario {
    name: String,
    #[serde(default)]
    description: String,
    image: Option<String>,
    likelihood: i64,
    characteristics: Vec<CharacteristicLevel>,
    /// by persona index, in raw mode order
    ratings: Vec<[Rating; RawMode::COUNT]>,
}

#[derive(Deserialize)]
struct DefaultIntervention {
    name: String,
    acronym: Option<String>,
    description: String,
    deltas: Vec<DefaultDelta>,
}

/// the adjustments of one raw mode in one scenario, by persona index
#[derive(Deserialize)]
struct DefaultDelta {
    scenario: usize,
    mode: RawMode,
    values: Vec<RatingDelta>,
}

/// builds the default session configuration with the given number of
/// scenarios and personas, each in [2, 8].
pub fn default_session_config(
    n_scenarios: usize,
    n_personas: usize,
) -> Result<SessionConfig, SessionError> {
    validation_ops::check_entity_count("scenario", n_scenarios)?;
    validation_ops::check_entity_count("persona", n_personas)?;
    let data: DefaultSessionData =
        toml::from_str(DEFAULT_SESSION_TOML).map_err(|e| SessionError::Defaults(e.to_string()))?;
    if data.scenarios.len() < n_scenarios || data.personas.len() < n_personas {
        return Err(SessionError::Defaults(format!(
            "built-in session has {} scenarios and {} personas, {n_scenarios} and {n_personas} requested",
            data.scenarios.len(),
            data.personas.len()
        )));
    }

    let mut personas = data
        .personas
        .into_iter()
        .take(n_personas)
        .collect::<Vec<_>>();
    let weights = rescale_percents(&personas.iter().map(|p| p.weight).collect::<Vec<_>>());
    for (persona, weight) in personas.iter_mut().zip(weights) {
        persona.weight = weight;
    }
    let scenario_names = data
        .scenarios
        .iter()
        .take(n_scenarios)
        .map(|s| s.name.clone())
        .collect::<Vec<_>>();
    let mut scenarios = data
        .scenarios
        .into_iter()
        .take(n_scenarios)
        .map(|s| default_scenario(s, &personas))
        .collect::<Vec<_>>();
    let likelihoods =
        rescale_percents(&scenarios.iter().map(|s| s.likelihood).collect::<Vec<_>>());
    for (scenario, likelihood) in scenarios.iter_mut().zip(likelihoods) {
        scenario.likelihood = likelihood;
    }
    let interventions = data
        .interventions
        .into_iter()
        .map(|i| default_intervention(i, &scenario_names, &personas))
        .collect();

    Ok(SessionConfig {
        population: data.population,
        axes: Some(data.axes),
        coefficients: ModeCoefficients::default(),
        personas,
        scenarios,
        interventions,
    })
}

/// the default session as validated inputs
pub fn default_session(n_scenarios: usize, n_personas: usize) -> Result<Session, SessionError> {
    Session::try_from(default_session_config(n_scenarios, n_personas)?)
}

fn default_scenario(scenario: DefaultScenario, personas: &[PersonaConfig]) -> ScenarioConfig {
    let ratings = personas
        .iter()
        .enumerate()
        .map(|(idx, persona)| RatingRowConfig {
            persona: persona.name.clone(),
            modes: scenario
                .ratings
                .get(idx)
                .map(|row| RawModeValues::from_array(*row).map(i64::from))
                .unwrap_or_default(),
        })
        .collect();
    ScenarioConfig {
        name: scenario.name,
        description: scenario.description,
        image: scenario.image,
        likelihood: scenario.likelihood,
        characteristics: scenario.characteristics,
        ratings,
    }
}

/// gathers the per-mode adjustment lists into one row per persona and
/// scenario, dropping entries outside of the requested session size.
fn default_intervention(
    intervention: DefaultIntervention,
    scenario_names: &[String],
    personas: &[PersonaConfig],
) -> InterventionConfig {
    let mut rows: BTreeMap<(usize, usize), RawModeValues<i64>> = BTreeMap::new();
    for delta in intervention.deltas.iter() {
        if delta.scenario >= scenario_names.len() {
            continue;
        }
        for (persona, value) in delta.values.iter().enumerate().take(personas.len()) {
            if *value == RatingDelta::NoChange {
                continue;
            }
            let row = rows.entry((delta.scenario, persona)).or_default();
            row[delta.mode] = i64::from(*value);
        }
    }
    let deltas = rows
        .into_iter()
        .map(|((scenario, persona), modes)| DeltaRowConfig {
            scenario: scenario_names[scenario].clone(),
            persona: personas[persona].name.clone(),
            modes,
        })
        .collect();
    InterventionConfig {
        name: intervention.name,
        acronym: intervention.acronym,
        description: intervention.description,
        deltas,
    }
}

/// scales the leading entries of a subset so they sum to 100 again, in
/// steps of 5. leftover steps go to the largest remainders, ties to the
/// first entry. values that already sum to 100, or to nothing, are kept.
fn rescale_percents(values: &[i64]) -> Vec<i64> {
    let sum: i64 = values.iter().sum();
    if sum == 100 || sum <= 0 {
        return values.to_vec();
    }
    let steps = 100 / PERCENT_STEP;
    let mut scaled = values.iter().map(|v| v * steps / sum).collect::<Vec<_>>();
    let mut by_remainder = (0..values.len()).collect::<Vec<_>>();
    by_remainder.sort_by_key(|idx| std::cmp::Reverse(values[*idx] * steps % sum));
    let leftover = steps - scaled.iter().sum::<i64>();
    for idx in by_remainder.into_iter().take(leftover.max(0) as usize) {
        scaled[idx] += 1;
    }
    log::debug!("rescaled default percentages {values:?} to sum to 100");
    scaled.into_iter().map(|s| s * PERCENT_STEP).collect()
}
