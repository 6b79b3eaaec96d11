use super::PersonaId;
use crate::model::validation::Percent;
use serde::Serialize;
use std::path::PathBuf;

/// an archetypal traveler standing for a share of the population.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Persona {
    pub id: PersonaId,
    pub name: String,
    pub description: String,
    pub image: Option<PathBuf>,
    /// daily round trip
    pub distance_km: f64,
    pub body_mass_kg: f64,
    /// share of the population this persona represents
    pub weight: Percent,
}
