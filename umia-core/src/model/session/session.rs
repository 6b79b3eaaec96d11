use super::{session_config::*, SessionError};
use crate::model::{
    coefficients::ModeCoefficients,
    entity::{
        CharacteristicLevel, Intervention, Persona, PersonaId, Scenario, ScenarioId,
        UncertaintyAxis, AXIS_COUNT,
    },
    mode::RawModeValues,
    rating::{ModeDeltas, ModeRatings},
    table::{CellKey, CellTable, RatingTable},
    validation::{
        validation_ops as ops, Percent, ValidationError, MAX_ACRONYM, MAX_AXIS_DESCRIPTION,
        MAX_INTERVENTIONS, MAX_INTERVENTION_DESCRIPTION, MAX_PERSONA_DESCRIPTION,
        MAX_SCENARIO_DESCRIPTION,
    },
};
use std::{collections::HashMap, path::PathBuf};

/// a validated set of assessment inputs. all tables have the
/// persona x scenario shape of the session.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub population: u64,
    pub axes: [UncertaintyAxis; AXIS_COUNT],
    pub coefficients: ModeCoefficients,
    pub scenarios: Vec<Scenario>,
    pub personas: Vec<Persona>,
    pub ratings: RatingTable,
    pub interventions: Vec<Intervention>,
}

impl Session {
    pub fn scenario(&self, id: ScenarioId) -> Option<&Scenario> {
        self.scenarios.get(id.0)
    }

    pub fn persona(&self, id: PersonaId) -> Option<&Persona> {
        self.personas.get(id.0)
    }

    /// display name of a scenario, falling back to its id
    pub fn scenario_name(&self, id: ScenarioId) -> String {
        self.scenario(id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// display name of a persona, falling back to its id
    pub fn persona_name(&self, id: PersonaId) -> String {
        self.persona(id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// checks the two summation invariants: scenario likelihoods and persona
    /// weights each sum to 100. violations are returned so that callers can
    /// apply their own strictness.
    pub fn invariant_violations(&self) -> Vec<ValidationError> {
        let likelihoods = ops::check_likelihood_sum(self.scenarios.iter().map(|s| s.likelihood));
        let weights = ops::check_weight_sum(self.personas.iter().map(|p| p.weight));
        likelihoods.into_iter().chain(weights).collect()
    }

    /// builds a session, replacing invalid cell-level inputs with neutral
    /// values instead of failing: a bad rating row becomes a zero row, a bad
    /// adjustment row becomes no change, a bad distance or body mass becomes
    /// 0 and a bad weight or likelihood becomes 0%. each replacement is
    /// returned with the session. names, references, counts and duplicate
    /// rows are still rejected.
    pub fn try_from_lenient(
        config: SessionConfig,
    ) -> Result<(Session, Vec<ValidationError>), SessionError> {
        let mut repairs = Repairs::replacing();
        let session = build(config, &mut repairs)?;
        Ok((session, repairs.issues))
    }
}

impl TryFrom<SessionConfig> for Session {
    type Error = SessionError;

    fn try_from(config: SessionConfig) -> Result<Self, Self::Error> {
        build(config, &mut Repairs::rejecting())
    }
}

/// decides what happens to an invalid cell-level input while building
struct Repairs {
    replace: bool,
    issues: Vec<ValidationError>,
}

impl Repairs {
    fn rejecting() -> Repairs {
        Repairs {
            replace: false,
            issues: vec![],
        }
    }

    fn replacing() -> Repairs {
        Repairs {
            replace: true,
            issues: vec![],
        }
    }

    fn recover<T>(
        &mut self,
        result: Result<T, ValidationError>,
        fallback: T,
    ) -> Result<T, ValidationError> {
        match result {
            Err(error) if self.replace => {
                log::warn!("replacing invalid input: {error}");
                self.issues.push(error);
                Ok(fallback)
            }
            other => other,
        }
    }
}

fn build(config: SessionConfig, repairs: &mut Repairs) -> Result<Session, SessionError> {
    ops::check_entity_count("scenario", config.scenarios.len())?;
    ops::check_entity_count("persona", config.personas.len())?;
    ops::check_names("scenario", config.scenarios.iter().map(|s| s.name.as_str()))?;
    ops::check_names("persona", config.personas.iter().map(|p| p.name.as_str()))?;
    if config.interventions.len() > MAX_INTERVENTIONS {
        return Err(ValidationError::TooManyInterventions {
            count: config.interventions.len(),
            max: MAX_INTERVENTIONS,
        }
        .into());
    }
    ops::check_names(
        "intervention",
        config.interventions.iter().map(|i| i.name.as_str()),
    )?;
    config.coefficients.validate()?;

    let axes = build_axes(config.axes)?;
    let personas = config
        .personas
        .iter()
        .enumerate()
        .map(|(idx, p)| build_persona(PersonaId(idx), p, repairs))
        .collect::<Result<Vec<_>, _>>()?;
    let scenarios = config
        .scenarios
        .iter()
        .enumerate()
        .map(|(idx, s)| build_scenario(ScenarioId(idx), s, repairs))
        .collect::<Result<Vec<_>, _>>()?;

    let persona_lookup = lookup(personas.iter().map(|p| (p.name.as_str(), p.id.0)));
    let scenario_lookup = lookup(scenarios.iter().map(|s| (s.name.as_str(), s.id.0)));
    let ratings = build_ratings(&config.scenarios, &personas, &persona_lookup, repairs)?;
    let tables = Tables {
        n_personas: personas.len(),
        n_scenarios: scenarios.len(),
        persona_lookup: &persona_lookup,
        scenario_lookup: &scenario_lookup,
    };
    let interventions = config
        .interventions
        .iter()
        .map(|i| build_intervention(i, &tables, repairs))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "built session with {} scenarios, {} personas and {} interventions, {} inputs replaced",
        scenarios.len(),
        personas.len(),
        interventions.len(),
        repairs.issues.len()
    );

    Ok(Session {
        population: config.population,
        axes,
        coefficients: config.coefficients,
        scenarios,
        personas,
        ratings,
        interventions,
    })
}

/// shape and name lookups shared by the per-intervention tables
struct Tables<'a> {
    n_personas: usize,
    n_scenarios: usize,
    persona_lookup: &'a HashMap<String, usize>,
    scenario_lookup: &'a HashMap<String, usize>,
}

fn lookup<'a>(names: impl Iterator<Item = (&'a str, usize)>) -> HashMap<String, usize> {
    names.map(|(name, idx)| (name.trim().to_string(), idx)).collect()
}

fn resolve(
    lookup: &HashMap<String, usize>,
    entity: &str,
    name: &str,
) -> Result<usize, ValidationError> {
    lookup
        .get(name.trim())
        .copied()
        .ok_or_else(|| ValidationError::UnknownReference {
            entity: entity.to_string(),
            name: name.to_string(),
        })
}

/// range checks the integer values of one configuration row
fn parse_row<T>(
    table: &str,
    scenario: &str,
    persona: &str,
    raw: &RawModeValues<i64>,
) -> Result<RawModeValues<T>, ValidationError>
where
    T: Copy + Default + TryFrom<i64, Error = ValidationError>,
{
    RawModeValues::try_from_fn(|mode| {
        T::try_from(raw[mode]).map_err(|e| ValidationError::InvalidRow {
            table: table.to_string(),
            scenario: scenario.trim().to_string(),
            persona: persona.trim().to_string(),
            mode,
            reason: e.to_string(),
        })
    })
}

fn build_axes(axes: Option<Vec<UncertaintyAxis>>) -> Result<[UncertaintyAxis; AXIS_COUNT], ValidationError> {
    let axes = match axes {
        None => return Ok(UncertaintyAxis::defaults()),
        Some(axes) => axes,
    };
    for axis in axes.iter() {
        ops::check_text("description", &axis.name, &axis.description, MAX_AXIS_DESCRIPTION)?;
    }
    let found = axes.len();
    <[UncertaintyAxis; AXIS_COUNT]>::try_from(axes).map_err(|_| ValidationError::AxisCount {
        expected: AXIS_COUNT,
        found,
    })
}

fn build_persona(
    id: PersonaId,
    config: &PersonaConfig,
    repairs: &mut Repairs,
) -> Result<Persona, ValidationError> {
    let name = config.name.trim().to_string();
    ops::check_text("description", &name, &config.description, MAX_PERSONA_DESCRIPTION)?;
    let distance_km = ops::check_quantity("distance_km", &name, config.distance_km);
    let body_mass_kg = ops::check_quantity("body_mass_kg", &name, config.body_mass_kg);
    let weight = ops::check_percent("weight", &name, config.weight);
    Ok(Persona {
        id,
        distance_km: repairs.recover(distance_km, 0.0)?,
        body_mass_kg: repairs.recover(body_mass_kg, 0.0)?,
        weight: repairs.recover(weight, Percent::ZERO)?,
        description: config.description.clone(),
        image: config.image.as_ref().map(PathBuf::from),
        name,
    })
}

fn build_scenario(
    id: ScenarioId,
    config: &ScenarioConfig,
    repairs: &mut Repairs,
) -> Result<Scenario, ValidationError> {
    let name = config.name.trim().to_string();
    ops::check_text("description", &name, &config.description, MAX_SCENARIO_DESCRIPTION)?;
    let characteristics = if config.characteristics.is_empty() {
        [CharacteristicLevel::default(); AXIS_COUNT]
    } else {
        <[CharacteristicLevel; AXIS_COUNT]>::try_from(config.characteristics.as_slice()).map_err(
            |_| ValidationError::CharacteristicCount {
                scenario: name.clone(),
                expected: AXIS_COUNT,
                found: config.characteristics.len(),
            },
        )?
    };
    let likelihood = ops::check_percent("likelihood", &name, config.likelihood);
    Ok(Scenario {
        id,
        description: config.description.clone(),
        characteristics,
        image: config.image.as_ref().map(PathBuf::from),
        likelihood: repairs.recover(likelihood, Percent::ZERO)?,
        name,
    })
}

/// every scenario must list exactly one rating row for every persona
fn build_ratings(
    scenarios: &[ScenarioConfig],
    personas: &[Persona],
    persona_lookup: &HashMap<String, usize>,
    repairs: &mut Repairs,
) -> Result<RatingTable, ValidationError> {
    let mut cells = HashMap::new();
    for (scenario_idx, scenario) in scenarios.iter().enumerate() {
        for row in scenario.ratings.iter() {
            let persona_idx = resolve(persona_lookup, "persona", &row.persona)?;
            let key = CellKey::new(PersonaId(persona_idx), ScenarioId(scenario_idx));
            let modes = parse_row("mode ratings", &scenario.name, &row.persona, &row.modes);
            let modes = repairs.recover(modes, ModeRatings::default())?;
            if cells.insert(key, modes).is_some() {
                return Err(ValidationError::DuplicateRow {
                    table: String::from("mode ratings"),
                    scenario: scenario.name.clone(),
                    persona: row.persona.clone(),
                });
            }
        }
        if let Some(missing) = personas
            .iter()
            .find(|p| !cells.contains_key(&CellKey::new(p.id, ScenarioId(scenario_idx))))
        {
            return Err(ValidationError::MissingRatings {
                scenario: scenario.name.clone(),
                persona: missing.name.clone(),
            });
        }
    }
    CellTable::try_new(personas.len(), scenarios.len(), cells)
}

fn build_intervention(
    config: &InterventionConfig,
    tables: &Tables,
    repairs: &mut Repairs,
) -> Result<Intervention, ValidationError> {
    let name = config.name.trim().to_string();
    if let Some(acronym) = &config.acronym {
        ops::check_text("acronym", &name, acronym, MAX_ACRONYM)?;
    }
    ops::check_text(
        "description",
        &name,
        &config.description,
        MAX_INTERVENTION_DESCRIPTION,
    )?;
    let table = format!("adjustments of intervention '{name}'");
    let mut rows: HashMap<CellKey, ModeDeltas> = HashMap::new();
    for row in config.deltas.iter() {
        let persona = resolve(tables.persona_lookup, "persona", &row.persona)?;
        let scenario = resolve(tables.scenario_lookup, "scenario", &row.scenario)?;
        let key = CellKey::new(PersonaId(persona), ScenarioId(scenario));
        let modes = parse_row(&table, &row.scenario, &row.persona, &row.modes);
        let modes = repairs.recover(modes, ModeDeltas::default())?;
        if rows.insert(key, modes).is_some() {
            return Err(ValidationError::DuplicateRow {
                table,
                scenario: row.scenario.clone(),
                persona: row.persona.clone(),
            });
        }
    }
    let deltas = CellTable::from_fn(tables.n_personas, tables.n_scenarios, |key| {
        rows.get(&key).copied().unwrap_or_default()
    });
    let acronym = config
        .acronym
        .as_ref()
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty());
    Ok(Intervention {
        acronym,
        description: config.description.clone(),
        deltas,
        name,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{
        mode::RawMode,
        rating::{Rating, RatingDelta},
    };

    fn two_by_two() -> SessionConfig {
        let toml_str = r#"
            [[personas]]
            name = "A"
            distance_km = 10
            body_mass_kg = 70
            weight = 60

            [[personas]]
            name = "B"
            distance_km = 5
            body_mass_kg = 60
            weight = 40

            [[scenarios]]
            name = "S1"
            likelihood = 50
            ratings = [
                { persona = "A", modes = { car = 4 } },
                { persona = "B", modes = { walk = 4 } },
            ]

            [[scenarios]]
            name = "S2"
            likelihood = 50
            ratings = [
                { persona = "B", modes = { bike = 4 } },
                { persona = "A", modes = { pt_walk = 4 } },
            ]

            [[interventions]]
            name = "Bike lanes"
            deltas = [{ scenario = "S2", persona = "A", modes = { bike = 2 } }]
        "#;
        toml::from_str(toml_str).expect("test invariant failed")
    }

    #[test]
    fn test_build_session() {
        let session = Session::try_from(two_by_two()).expect("test invariant failed");
        assert_eq!(session.scenarios.len(), 2);
        assert_eq!(session.ratings.len(), 4);
        assert_eq!(session.axes, UncertaintyAxis::defaults());
        assert!(session.invariant_violations().is_empty());
        let a_s2 = session
            .ratings
            .get(&CellKey::new(PersonaId(0), ScenarioId(1)))
            .expect("test invariant failed");
        assert_eq!(a_s2[RawMode::PtWalk].value(), 4);
        let deltas = &session.interventions[0].deltas;
        let a_s2_delta = deltas
            .get(&CellKey::new(PersonaId(0), ScenarioId(1)))
            .expect("test invariant failed");
        assert_eq!(a_s2_delta[RawMode::Bike], RatingDelta::StrongIncrease);
        let b_s1_delta = deltas
            .get(&CellKey::new(PersonaId(1), ScenarioId(0)))
            .expect("test invariant failed");
        assert!(b_s1_delta.iter().all(|(_, d)| d == RatingDelta::NoChange));
    }

    #[test]
    fn test_invariant_violations_reported() {
        let mut config = two_by_two();
        config.scenarios[0].likelihood = 40;
        config.personas[1].weight = 45;
        let session = Session::try_from(config).expect("test invariant failed");
        assert_eq!(
            session.invariant_violations(),
            vec![
                ValidationError::LikelihoodSum { sum: 90 },
                ValidationError::PersonaWeightSum { sum: 105 }
            ]
        );
    }

    #[test]
    fn test_missing_ratings() {
        let mut config = two_by_two();
        config.scenarios[1].ratings.pop();
        match Session::try_from(config) {
            Err(SessionError::Validation {
                source: ValidationError::MissingRatings { scenario, persona },
            }) => {
                assert_eq!(scenario, "S2");
                assert_eq!(persona, "A");
            }
            other => panic!("test failed, unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_unknown_persona() {
        let mut config = two_by_two();
        config.interventions[0].deltas[0].persona = String::from("Z");
        assert!(matches!(
            Session::try_from(config),
            Err(SessionError::Validation {
                source: ValidationError::UnknownReference { .. }
            })
        ));
    }

    #[test]
    fn test_negative_distance() {
        let mut config = two_by_two();
        config.personas[0].distance_km = -3.0;
        assert!(matches!(
            Session::try_from(config),
            Err(SessionError::Validation {
                source: ValidationError::InvalidQuantity { .. }
            })
        ));
    }

    #[test]
    fn test_bad_rating_names_its_cell() {
        let mut config = two_by_two();
        config.scenarios[0].ratings[1].modes[RawMode::Walk] = 7;
        match Session::try_from(config) {
            Err(SessionError::Validation {
                source:
                    ValidationError::InvalidRow {
                        scenario,
                        persona,
                        mode,
                        ..
                    },
            }) => {
                assert_eq!(scenario, "S1");
                assert_eq!(persona, "B");
                assert_eq!(mode, RawMode::Walk);
            }
            other => panic!("test failed, expected invalid row, found {other:?}"),
        }
    }

    #[test]
    fn test_lenient_zeroes_bad_rating_row() {
        let mut config = two_by_two();
        config.scenarios[0].ratings[1].modes[RawMode::Walk] = 7;
        let (session, issues) = Session::try_from_lenient(config).expect("test failed");
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0], ValidationError::InvalidRow { .. }));
        let b_s1 = session
            .ratings
            .get(&CellKey::new(PersonaId(1), ScenarioId(0)))
            .expect("test invariant failed");
        assert_eq!(*b_s1, ModeRatings::default());
        let a_s1 = session
            .ratings
            .get(&CellKey::new(PersonaId(0), ScenarioId(0)))
            .expect("test invariant failed");
        assert_eq!(a_s1[RawMode::Car], Rating::VeryLikely);
        let b_s2 = session
            .ratings
            .get(&CellKey::new(PersonaId(1), ScenarioId(1)))
            .expect("test invariant failed");
        assert_eq!(b_s2[RawMode::Bike], Rating::VeryLikely);
    }

    #[test]
    fn test_lenient_zeroes_bad_distance() {
        let mut config = two_by_two();
        config.personas[1].distance_km = -5.0;
        let (session, issues) = Session::try_from_lenient(config).expect("test failed");
        assert_eq!(
            issues,
            vec![ValidationError::InvalidQuantity {
                field: String::from("distance_km"),
                name: String::from("B"),
                value: -5.0,
            }]
        );
        assert_eq!(session.personas[1].distance_km, 0.0);
        assert_eq!(session.personas[1].body_mass_kg, 60.0);
        assert_eq!(session.personas[0].distance_km, 10.0);
    }

    #[test]
    fn test_lenient_collects_every_issue() {
        let mut config = two_by_two();
        config.personas[0].weight = 62;
        config.scenarios[1].likelihood = 150;
        config.interventions[0].deltas[0].modes[RawMode::Bike] = 3;
        let (session, issues) = Session::try_from_lenient(config).expect("test failed");
        assert_eq!(issues.len(), 3);
        assert_eq!(session.personas[0].weight, Percent::ZERO);
        assert_eq!(session.scenarios[1].likelihood, Percent::ZERO);
        assert_eq!(
            session.invariant_violations(),
            vec![
                ValidationError::LikelihoodSum { sum: 50 },
                ValidationError::PersonaWeightSum { sum: 40 }
            ]
        );
        let deltas = &session.interventions[0].deltas;
        assert!(deltas.values().all(|row| *row == ModeDeltas::default()));
    }

    #[test]
    fn test_lenient_still_rejects_unknown_reference() {
        let mut config = two_by_two();
        config.scenarios[0].ratings[0].persona = String::from("Z");
        assert!(matches!(
            Session::try_from_lenient(config),
            Err(SessionError::Validation {
                source: ValidationError::UnknownReference { .. }
            })
        ));
    }

    #[test]
    fn test_persona_count() {
        let mut config = two_by_two();
        config.personas.pop();
        assert!(matches!(
            Session::try_from(config),
            Err(SessionError::Validation {
                source: ValidationError::CountOutOfRange { .. }
            })
        ));
    }

    #[test]
    fn test_too_many_interventions() {
        let mut config = two_by_two();
        let extra = config.interventions[0].clone();
        config.interventions.push(InterventionConfig {
            name: String::from("Second"),
            ..extra.clone()
        });
        config.interventions.push(InterventionConfig {
            name: String::from("Third"),
            ..extra
        });
        assert!(matches!(
            Session::try_from(config),
            Err(SessionError::Validation {
                source: ValidationError::TooManyInterventions { count: 3, max: 2 }
            })
        ));
    }

    #[test]
    fn test_acronym_too_long() {
        let mut config = two_by_two();
        config.interventions[0].acronym = Some(String::from("BIKES!"));
        assert!(matches!(
            Session::try_from(config),
            Err(SessionError::Validation {
                source: ValidationError::TextTooLong { .. }
            })
        ));
    }
}
