use serde::{Deserialize, Serialize};

/// calories burned per kg of body mass per km of active travel.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CalorieRates {
    pub walk: f64,
    pub bike: f64,
}

impl Default for CalorieRates {
    fn default() -> Self {
        Self {
            walk: 1.0,
            bike: 0.4,
        }
    }
}
