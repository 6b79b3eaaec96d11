use super::{
    ComparativeStatistics, EmitterProfile, ExpectedFootprint, PersonaMean, PersonaStatistics,
    ScenarioExtreme, ScenarioRange,
};
use crate::model::impact::{ImpactTable, ImpactValues};
use umia_core::model::{
    entity::{PersonaId, ScenarioId},
    validation::{Percent, ValidationError},
};

pub const DAYS_PER_YEAR: f64 = 365.0;

/// group values summed over all personas, indexed by scenario
pub fn scenario_totals(group: &ImpactTable) -> Vec<ImpactValues> {
    group
        .scenario_ids()
        .map(|s| group.scenario_cells(s).map(|(_, v)| *v).sum())
        .collect()
}

/// sum of scenario totals weighted by scenario likelihood
pub fn expected_daily(
    totals: &[ImpactValues],
    likelihoods: &[Percent],
) -> Result<ImpactValues, ValidationError> {
    if totals.len() != likelihoods.len() {
        return Err(ValidationError::CountOutOfRange {
            entity: String::from("scenario likelihood"),
            count: likelihoods.len(),
            min: totals.len(),
            max: totals.len(),
        });
    }
    Ok(totals
        .iter()
        .zip(likelihoods)
        .map(|(total, likelihood)| total.scale(likelihood.fraction()))
        .sum())
}

pub fn annual(daily: &ImpactValues) -> ImpactValues {
    daily.scale(DAYS_PER_YEAR)
}

pub fn expected_footprint(
    group: &ImpactTable,
    likelihoods: &[Percent],
) -> Result<ExpectedFootprint, ValidationError> {
    let daily = expected_daily(&scenario_totals(group), likelihoods)?;
    Ok(ExpectedFootprint {
        daily,
        annual: annual(&daily),
    })
}

/// CO2e comparisons across scenarios and personas. scenarios are ranked
/// by their group total weighted by likelihood, rounded to a whole t CO2e.
/// ties resolve to the first entry in scenario order, or persona-major cell
/// order for single cells. returns None for an empty table.
pub fn comparative_statistics(
    individual: &ImpactTable,
    group: &ImpactTable,
    likelihoods: &[Percent],
) -> Option<ComparativeStatistics> {
    let weighted = weighted_co2e(&scenario_totals(group), likelihoods);
    let by_scenario = || weighted.iter().enumerate().map(|(idx, v)| (ScenarioId(idx), *v));
    let (max_scenario, max_co2e) = first_max(by_scenario())?;
    let (min_scenario, min_co2e) = first_min(by_scenario())?;
    let scenarios = ScenarioRange {
        highest: ScenarioExtreme {
            scenario: max_scenario,
            co2e: max_co2e,
        },
        lowest: ScenarioExtreme {
            scenario: min_scenario,
            co2e: min_co2e,
        },
        difference: max_co2e - min_co2e,
    };
    Some(ComparativeStatistics {
        scenarios,
        individual: persona_statistics(individual)?,
        group: persona_statistics(group)?,
    })
}

/// group CO2e of each scenario times its likelihood, rounded to whole t
pub fn weighted_co2e(totals: &[ImpactValues], likelihoods: &[Percent]) -> Vec<f64> {
    totals
        .iter()
        .zip(likelihoods)
        .map(|(total, likelihood)| (total.co2e * likelihood.fraction()).round())
        .collect()
}

pub fn persona_statistics(table: &ImpactTable) -> Option<PersonaStatistics> {
    let means = || {
        table.persona_ids().filter_map(|p| {
            let values = table.persona_cells(p).map(|(_, v)| v.co2e).collect::<Vec<_>>();
            (!values.is_empty()).then(|| (p, values.iter().sum::<f64>() / values.len() as f64))
        })
    };
    let (high_persona, high_mean) = first_max(means())?;
    let (low_persona, low_mean) = first_min(means())?;
    let cells = || table.iter().map(|(k, v)| (k.persona, v.co2e));
    let (max_persona, _) = first_max(cells())?;
    let (min_persona, _) = first_min(cells())?;
    Some(PersonaStatistics {
        highest_mean: PersonaMean {
            persona: high_persona,
            co2e: high_mean,
        },
        lowest_mean: PersonaMean {
            persona: low_persona,
            co2e: low_mean,
        },
        max_emitter: emitter_profile(table, max_persona)?,
        min_emitter: emitter_profile(table, min_persona)?,
    })
}

/// highest and lowest scenario of one persona
pub fn emitter_profile(table: &ImpactTable, persona: PersonaId) -> Option<EmitterProfile> {
    let cells = || table.persona_cells(persona).map(|(s, v)| (s, v.co2e));
    let (max_scenario, max_co2e) = first_max(cells())?;
    let (min_scenario, min_co2e) = first_min(cells())?;
    let ratio = (min_co2e != 0.0).then(|| max_co2e / min_co2e);
    Some(EmitterProfile {
        persona,
        max_scenario,
        max_co2e,
        min_scenario,
        min_co2e,
        ratio,
    })
}

fn first_max<K>(items: impl Iterator<Item = (K, f64)>) -> Option<(K, f64)> {
    items.fold(None, |best, (k, v)| match best {
        Some((_, b)) if b >= v => best,
        _ => Some((k, v)),
    })
}

fn first_min<K>(items: impl Iterator<Item = (K, f64)>) -> Option<(K, f64)> {
    items.fold(None, |best, (k, v)| match best {
        Some((_, b)) if b <= v => best,
        _ => Some((k, v)),
    })
}
