use super::{ImpactTables, ImpactValues};
use crate::model::mode_share::ModalDistanceTable;
use umia_core::model::{
    coefficients::{CalorieRates, ModeCoefficients},
    entity::Persona,
    mode::ModeValues,
    validation::{Percent, ValidationError},
};

/// grams per kg
pub const GRAMS_PER_KG: f64 = 1000.0;
/// step from an individual unit to its group unit: kg to t, MJ to GJ,
/// cal to pizzas
pub const GROUP_UNIT_SCALE: f64 = 1000.0;
/// calories in one pizza
pub const CALORIES_PER_PIZZA: f64 = GROUP_UNIT_SCALE;
const PERCENT: f64 = 100.0;

/// daily kg CO2e from km per mode
pub fn co2e_kg(km: &ModeValues<f64>, coefficients: &ModeCoefficients) -> f64 {
    km.dot(&coefficients.co2e_g_per_pkm) / GRAMS_PER_KG
}

/// daily MJ from km per mode
pub fn energy_mj(km: &ModeValues<f64>, coefficients: &ModeCoefficients) -> f64 {
    km.dot(&coefficients.energy_mj_per_pkm)
}

/// daily calories burned cycling and walking, rounded to a whole calorie
pub fn calories(km: &ModeValues<f64>, body_mass_kg: f64, rates: &CalorieRates) -> f64 {
    (body_mass_kg * (km.bike * rates.bike + km.walk * rates.walk)).round()
}

pub fn individual_impacts(
    km: &ModeValues<f64>,
    persona: &Persona,
    coefficients: &ModeCoefficients,
) -> ImpactValues {
    ImpactValues {
        co2e: co2e_kg(km, coefficients),
        energy: energy_mj(km, coefficients),
        calories: calories(km, persona.body_mass_kg, &coefficients.calories_per_kg_km),
    }
}

/// scales an individual daily value to the population group a persona
/// stands for, in the group unit (1000x the individual unit), rounded to
/// a whole unit.
pub fn group_value(individual: f64, weight: Percent, population: u64) -> f64 {
    let people = weight.value() as f64 * population as f64 / PERCENT;
    (individual * people / GROUP_UNIT_SCALE).round()
}

pub fn group_impacts(individual: &ImpactValues, weight: Percent, population: u64) -> ImpactValues {
    individual.map(|v| group_value(v, weight, population))
}

/// computes individual and group impacts for every cell of a distance table.
pub fn compute(
    distances: &ModalDistanceTable,
    personas: &[Persona],
    coefficients: &ModeCoefficients,
    population: u64,
) -> Result<ImpactTables, ValidationError> {
    let individual = distances.try_map(|key, km| {
        let persona = personas
            .get(key.persona.0)
            .ok_or(ValidationError::ShapeMismatch {
                left_personas: distances.n_personas(),
                left_scenarios: distances.n_scenarios(),
                right_personas: personas.len(),
                right_scenarios: distances.n_scenarios(),
            })?;
        Ok(individual_impacts(km, persona, coefficients))
    })?;
    let group = individual.map(|key, values| {
        let weight = personas[key.persona.0].weight;
        group_impacts(values, weight, population)
    });
    Ok(ImpactTables { individual, group })
}
