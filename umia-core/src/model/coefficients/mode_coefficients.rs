use super::CalorieRates;
use crate::model::{
    mode::ModeValues,
    validation::{validation_ops, ValidationError},
};
use serde::{Deserialize, Serialize};

/// per passenger-km intensities of each canonical mode.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ModeCoefficients {
    /// grams of CO2 equivalent per passenger-km
    pub co2e_g_per_pkm: ModeValues<f64>,
    /// megajoules per passenger-km
    pub energy_mj_per_pkm: ModeValues<f64>,
    #[serde(default)]
    pub calories_per_kg_km: CalorieRates,
}

impl Default for ModeCoefficients {
    fn default() -> Self {
        Self {
            co2e_g_per_pkm: ModeValues {
                pt: 15.0,
                car: 50.0,
                mod_: 150.0,
                mm: 10.0,
                bike: 0.0,
                walk: 0.0,
            },
            energy_mj_per_pkm: ModeValues {
                pt: 0.2,
                car: 0.8,
                mod_: 1.8,
                mm: 0.5,
                bike: 0.0,
                walk: 0.0,
            },
            calories_per_kg_km: CalorieRates::default(),
        }
    }
}

impl ModeCoefficients {
    /// all intensities must be finite and non-negative
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (mode, value) in self.co2e_g_per_pkm.iter() {
            validation_ops::check_quantity("co2e_g_per_pkm", mode.label(), value)?;
        }
        for (mode, value) in self.energy_mj_per_pkm.iter() {
            validation_ops::check_quantity("energy_mj_per_pkm", mode.label(), value)?;
        }
        let rates = &self.calories_per_kg_km;
        validation_ops::check_quantity("calories_per_kg_km", "walk", rates.walk)?;
        validation_ops::check_quantity("calories_per_kg_km", "bike", rates.bike)?;
        Ok(())
    }
}
