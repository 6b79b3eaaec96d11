use crate::model::impact::ImpactValues;
use serde::Serialize;

/// likelihood-weighted footprint of the whole population in group units
/// (t CO2e, GJ, pizzas).
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct ExpectedFootprint {
    pub daily: ImpactValues,
    pub annual: ImpactValues,
}
