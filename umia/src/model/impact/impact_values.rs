use super::ImpactMetric;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub};

/// one value per impact metric. units depend on context: individual
/// values are kg CO2e, MJ and cal per day, group values are t CO2e, GJ
/// and pizzas per day.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct ImpactValues {
    pub co2e: f64,
    pub energy: f64,
    pub calories: f64,
}

impl ImpactValues {
    pub fn get(&self, metric: ImpactMetric) -> f64 {
        match metric {
            ImpactMetric::Co2e => self.co2e,
            ImpactMetric::Energy => self.energy,
            ImpactMetric::Calories => self.calories,
        }
    }

    pub fn map(&self, f: impl Fn(f64) -> f64) -> ImpactValues {
        ImpactValues {
            co2e: f(self.co2e),
            energy: f(self.energy),
            calories: f(self.calories),
        }
    }

    pub fn scale(&self, factor: f64) -> ImpactValues {
        self.map(|v| v * factor)
    }
}

impl Add for ImpactValues {
    type Output = ImpactValues;

    fn add(self, rhs: Self) -> Self::Output {
        ImpactValues {
            co2e: self.co2e + rhs.co2e,
            energy: self.energy + rhs.energy,
            calories: self.calories + rhs.calories,
        }
    }
}

impl AddAssign for ImpactValues {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for ImpactValues {
    type Output = ImpactValues;

    fn sub(self, rhs: Self) -> Self::Output {
        ImpactValues {
            co2e: self.co2e - rhs.co2e,
            energy: self.energy - rhs.energy,
            calories: self.calories - rhs.calories,
        }
    }
}

impl std::iter::Sum for ImpactValues {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ImpactValues::default(), |acc, v| acc + v)
    }
}
