use super::{
    Assessment, AssessmentError, AssessmentWarning, Evaluation, InterventionOutcome,
    ValidationPolicy, Variant,
};
use crate::model::{
    aggregate::{aggregate_ops, ExpectedFootprint},
    impact::impact_ops,
    intervention::intervention_ops,
    mode_share::mode_share_ops,
};
use itertools::Itertools;
use umia_core::model::{
    session::{Session, SessionConfig},
    table::RatingTable,
};

/// builds a session from its configuration and assesses it. the strict
/// policy rejects the first invalid input. the lenient policy replaces
/// invalid cell inputs with neutral values, reports each one as a warning
/// and computes every unaffected cell as usual.
pub fn assess(
    config: SessionConfig,
    policy: ValidationPolicy,
) -> Result<(Session, Assessment), AssessmentError> {
    let (session, repaired) = match policy {
        ValidationPolicy::Strict => (Session::try_from(config)?, vec![]),
        ValidationPolicy::Lenient => Session::try_from_lenient(config)?,
    };
    let mut assessment = run(&session, policy)?;
    let mut warnings = repaired
        .into_iter()
        .map(|error| AssessmentWarning::InputRepaired { error })
        .collect_vec();
    warnings.append(&mut assessment.warnings);
    assessment.warnings = warnings;
    Ok((session, assessment))
}

/// runs the full pipeline on a session: the baseline ratings, then each
/// intervention applied independently to the baseline.
pub fn run(session: &Session, policy: ValidationPolicy) -> Result<Assessment, AssessmentError> {
    let mut warnings = check_invariants(session, policy)?;

    let baseline = evaluate(session, session.ratings.clone())?;
    warnings.extend(zero_row_warnings(session, &Variant::Baseline, &baseline));

    let mut interventions = vec![];
    for (index, intervention) in session.interventions.iter().enumerate() {
        let variant = Variant::intervention(index, intervention);
        log::debug!("evaluating intervention '{}'", intervention.name);
        let adjusted = intervention_ops::adjust_ratings(&session.ratings, &intervention.deltas)?;
        let evaluation = evaluate(session, adjusted.ratings)?;
        warnings.extend(zero_row_warnings(session, &variant, &evaluation));
        warnings.extend(adjusted.clamped.iter().map(|event| {
            AssessmentWarning::RatingClamped {
                intervention: intervention.name.clone(),
                scenario: session.scenario_name(event.cell.scenario),
                persona: session.persona_name(event.cell.persona),
                mode: event.mode,
                requested: event.adjustment.requested,
                applied: event.adjustment.rating,
            }
        }));
        let comparison =
            intervention_ops::compare_footprints(&baseline.footprint, &evaluation.footprint);
        let individual_cells = intervention_ops::compare_cells(
            &baseline.impacts.individual,
            &evaluation.impacts.individual,
        )?;
        let group_cells =
            intervention_ops::compare_cells(&baseline.impacts.group, &evaluation.impacts.group)?;
        interventions.push(InterventionOutcome {
            variant,
            evaluation,
            clamped: adjusted.clamped,
            comparison,
            individual_cells,
            group_cells,
        });
    }

    for warning in warnings.iter() {
        log::warn!("{warning}");
    }
    log::info!(
        "assessed {} scenarios x {} personas with {} interventions, {} warnings",
        session.scenarios.len(),
        session.personas.len(),
        interventions.len(),
        warnings.len()
    );

    Ok(Assessment {
        baseline,
        interventions,
        warnings,
    })
}

/// mode shares, impacts and aggregates of one rating table
pub fn evaluate(session: &Session, ratings: RatingTable) -> Result<Evaluation, AssessmentError> {
    let distances = mode_share_ops::resolve(&ratings, &session.personas)?;
    let impacts = impact_ops::compute(
        &distances.table,
        &session.personas,
        &session.coefficients,
        session.population,
    )?;
    let likelihoods = session.scenarios.iter().map(|s| s.likelihood).collect_vec();
    let scenario_totals = aggregate_ops::scenario_totals(&impacts.group);
    let daily = aggregate_ops::expected_daily(&scenario_totals, &likelihoods)?;
    let footprint = ExpectedFootprint {
        daily,
        annual: aggregate_ops::annual(&daily),
    };
    let statistics =
        aggregate_ops::comparative_statistics(&impacts.individual, &impacts.group, &likelihoods);
    Ok(Evaluation {
        ratings,
        distances: distances.table,
        impacts,
        scenario_totals,
        footprint,
        statistics,
        zero_rows: distances.zero_rows,
    })
}

fn check_invariants(
    session: &Session,
    policy: ValidationPolicy,
) -> Result<Vec<AssessmentWarning>, AssessmentError> {
    let violations = session.invariant_violations();
    if violations.is_empty() {
        return Ok(vec![]);
    }
    match policy {
        ValidationPolicy::Strict => Err(AssessmentError::InvariantViolations(violations)),
        ValidationPolicy::Lenient => Ok(violations
            .into_iter()
            .map(|error| AssessmentWarning::InvariantViolation { error })
            .collect()),
    }
}

fn zero_row_warnings(
    session: &Session,
    variant: &Variant,
    evaluation: &Evaluation,
) -> Vec<AssessmentWarning> {
    evaluation
        .zero_rows
        .iter()
        .map(|key| AssessmentWarning::ZeroRatingRow {
            variant: variant.to_string(),
            scenario: session.scenario_name(key.scenario),
            persona: session.persona_name(key.persona),
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::impact::ImpactMetric;
    use umia_core::model::{
        coefficients::ModeCoefficients,
        entity::{Intervention, Persona, PersonaId, Scenario, ScenarioId, UncertaintyAxis},
        mode::{CanonicalMode, RawMode},
        rating::{ModeDeltas, ModeRatings, Rating},
        session::{default_session, default_session_config},
        table::{CellKey, CellTable},
        validation::{Percent, ValidationError},
    };

    /// one persona in one scenario, both at 100%
    fn single_cell_session(distance_km: f64, ratings: ModeRatings) -> Session {
        Session {
            population: 50000,
            axes: UncertaintyAxis::defaults(),
            coefficients: ModeCoefficients::default(),
            scenarios: vec![Scenario {
                id: ScenarioId(0),
                name: String::from("only"),
                description: String::new(),
                characteristics: Default::default(),
                image: None,
                likelihood: Percent::FULL,
            }],
            personas: vec![Persona {
                id: PersonaId(0),
                name: String::from("commuter"),
                description: String::new(),
                image: None,
                distance_km,
                body_mass_kg: 70.0,
                weight: Percent::FULL,
            }],
            ratings: CellTable::from_fn(1, 1, |_| ratings),
            interventions: vec![],
        }
    }

    fn cell() -> CellKey {
        CellKey::new(PersonaId(0), ScenarioId(0))
    }

    #[test]
    fn test_mod_and_car_commute() {
        let mut ratings = ModeRatings::default();
        ratings[RawMode::Mod] = Rating::RatherLikely;
        ratings[RawMode::Car] = Rating::Likely;
        let session = single_cell_session(60.0, ratings);
        let assessment = run(&session, ValidationPolicy::Strict).expect("test failed");

        let km = assessment
            .baseline
            .distances
            .get(&cell())
            .expect("test invariant failed");
        assert_eq!(km[CanonicalMode::Mod], 24.0);
        assert_eq!(km[CanonicalMode::Car], 36.0);
        let individual = assessment
            .baseline
            .impacts
            .individual
            .get(&cell())
            .expect("test invariant failed");
        assert!((individual.co2e - (24.0 * 150.0 / 1000.0 + 36.0 * 50.0 / 1000.0)).abs() < 1e-9);
        assert!((individual.co2e - 5.4).abs() < 1e-9);
        // 5.4 kg x 50000 people = 270 t
        assert_eq!(assessment.baseline.footprint.daily.co2e, 270.0);
        assert_eq!(assessment.baseline.footprint.annual.co2e, 270.0 * 365.0);
        assert!(assessment.warnings.is_empty());
    }

    #[test]
    fn test_group_scaling_full_weight() {
        // 200 km by car at 50 g/pkm is 10 kg per day
        let mut ratings = ModeRatings::default();
        ratings[RawMode::Car] = Rating::VeryLikely;
        let session = single_cell_session(200.0, ratings);
        let assessment = run(&session, ValidationPolicy::Strict).expect("test failed");
        let individual = assessment.baseline.impacts.individual.get(&cell()).expect("test failed");
        assert!((individual.co2e - 10.0).abs() < 1e-9);
        let group = assessment.baseline.impacts.group.get(&cell()).expect("test failed");
        assert_eq!(group.co2e, 500.0);
    }

    #[test]
    fn test_zero_row_warning() {
        let session = single_cell_session(10.0, ModeRatings::default());
        let assessment = run(&session, ValidationPolicy::Strict).expect("test failed");
        assert_eq!(assessment.baseline.footprint.daily.co2e, 0.0);
        assert_eq!(
            assessment.warnings,
            vec![AssessmentWarning::ZeroRatingRow {
                variant: String::from("baseline"),
                scenario: String::from("only"),
                persona: String::from("commuter"),
            }]
        );
    }

    #[test]
    fn test_strict_policy_rejects_bad_weights() {
        let mut session = default_session(4, 4).expect("test invariant failed");
        session.personas[0].weight = Percent::try_from(25).expect("test invariant failed");
        match run(&session, ValidationPolicy::Strict) {
            Err(AssessmentError::InvariantViolations(errors)) => {
                assert_eq!(errors, vec![ValidationError::PersonaWeightSum { sum: 105 }]);
            }
            other => panic!("test failed, expected invariant violation, found {other:?}"),
        }
    }

    #[test]
    fn test_lenient_policy_warns() {
        let mut session = default_session(4, 4).expect("test invariant failed");
        session.scenarios[0].likelihood = Percent::try_from(50).expect("test invariant failed");
        let assessment = run(&session, ValidationPolicy::Lenient).expect("test failed");
        assert!(assessment.warnings.contains(&AssessmentWarning::InvariantViolation {
            error: ValidationError::LikelihoodSum { sum: 110 }
        }));
    }

    #[test]
    fn test_bad_rating_row_only_affects_its_cell() {
        let mut config = default_session_config(4, 4).expect("test invariant failed");
        config.scenarios[0].ratings[1].modes[RawMode::Walk] = 7;

        match assess(config.clone(), ValidationPolicy::Strict) {
            Err(AssessmentError::InvalidSession { .. }) => {}
            other => panic!("test failed, expected invalid session, found {other:?}"),
        }

        let (session, assessment) =
            assess(config, ValidationPolicy::Lenient).expect("test failed");
        assert!(matches!(
            assessment.warnings[0],
            AssessmentWarning::InputRepaired {
                error: ValidationError::InvalidRow { .. }
            }
        ));
        assert!(assessment.warnings.contains(&AssessmentWarning::ZeroRatingRow {
            variant: String::from("baseline"),
            scenario: session.scenario_name(ScenarioId(0)),
            persona: session.persona_name(PersonaId(1)),
        }));
        let individual = &assessment.baseline.impacts.individual;
        let repaired = individual
            .get(&CellKey::new(PersonaId(1), ScenarioId(0)))
            .expect("test invariant failed");
        assert_eq!(repaired.co2e, 0.0);
        let neighbour = individual
            .get(&CellKey::new(PersonaId(0), ScenarioId(0)))
            .expect("test invariant failed");
        assert!(neighbour.co2e > 0.0);
        let reference = run(
            &default_session(4, 4).expect("test invariant failed"),
            ValidationPolicy::Strict,
        )
        .expect("test invariant failed");
        let untouched = reference
            .baseline
            .impacts
            .individual
            .get(&CellKey::new(PersonaId(0), ScenarioId(0)))
            .expect("test invariant failed");
        assert_eq!(neighbour, untouched);
    }

    #[test]
    fn test_zero_delta_intervention_reproduces_baseline() {
        let mut session = default_session(4, 4).expect("test invariant failed");
        session.interventions = vec![Intervention {
            name: String::from("nothing"),
            acronym: None,
            description: String::new(),
            deltas: CellTable::from_fn(4, 4, |_| ModeDeltas::default()),
        }];
        let assessment = run(&session, ValidationPolicy::Strict).expect("test failed");
        let outcome = &assessment.interventions[0];
        assert_eq!(outcome.evaluation, assessment.baseline);
        assert!(outcome.clamped.is_empty());
        for metric in ImpactMetric::ALL {
            let comparison = outcome.comparison.get(metric).expect("test failed");
            assert_eq!(comparison.change(), 0.0);
        }
        assert!(outcome
            .group_cells
            .values()
            .all(|c| c.change() == Default::default()));
    }

    #[test]
    fn test_default_session_assessment() {
        let session = default_session(4, 4).expect("test invariant failed");
        let assessment = run(&session, ValidationPolicy::Strict).expect("test failed");
        assert_eq!(assessment.interventions.len(), 2);
        assert_eq!(assessment.baseline.scenario_totals.len(), 4);
        let daily = assessment.baseline.footprint.daily;
        assert!(daily.co2e > 0.0 && daily.energy > 0.0 && daily.calories > 0.0);
        assert!(assessment.baseline.zero_rows.is_empty());
        // S3 has the largest group total but S1 dominates once weighted by likelihood
        let totals = &assessment.baseline.scenario_totals;
        assert!(totals[2].co2e > totals[0].co2e);
        let statistics = assessment.baseline.statistics.as_ref().expect("test failed");
        assert_eq!(statistics.scenarios.highest.scenario, ScenarioId(0));
        assert_eq!(statistics.scenarios.lowest.scenario, ScenarioId(1));
        for outcome in assessment.interventions.iter() {
            assert_eq!(outcome.comparison.metrics.len(), 3);
            assert_eq!(outcome.group_cells.len(), 16);
        }
    }

    #[test]
    fn test_interventions_are_independent() {
        let session = default_session(4, 4).expect("test invariant failed");
        let both = run(&session, ValidationPolicy::Strict).expect("test failed");
        let mut only_second = session.clone();
        only_second.interventions.remove(0);
        let single = run(&only_second, ValidationPolicy::Strict).expect("test failed");
        assert_eq!(
            both.interventions[1].evaluation,
            single.interventions[0].evaluation
        );
    }
}
