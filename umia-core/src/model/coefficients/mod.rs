mod calorie_rates;
mod mode_coefficients;

pub use calorie_rates::CalorieRates;
pub use mode_coefficients::ModeCoefficients;
