use super::CellKey;
use crate::model::{
    entity::{PersonaId, ScenarioId},
    validation::ValidationError,
};
use std::collections::BTreeMap;

/// a dense persona x scenario table. every cell of the shape is present,
/// which is checked when the table is built.
#[derive(Clone, Debug, PartialEq)]
pub struct CellTable<T> {
    personas: usize,
    scenarios: usize,
    cells: BTreeMap<CellKey, T>,
}

impl<T> CellTable<T> {
    /// builds a table from keyed cells, failing on cells outside of the
    /// shape, repeated cells, or missing cells.
    pub fn try_new(
        personas: usize,
        scenarios: usize,
        cells: impl IntoIterator<Item = (CellKey, T)>,
    ) -> Result<CellTable<T>, ValidationError> {
        let mut table = BTreeMap::new();
        for (key, value) in cells {
            if key.persona.0 >= personas || key.scenario.0 >= scenarios {
                return Err(ValidationError::CellOutOfBounds {
                    persona: key.persona.0,
                    scenario: key.scenario.0,
                    personas,
                    scenarios,
                });
            }
            if table.insert(key, value).is_some() {
                return Err(ValidationError::DuplicateCell {
                    persona: key.persona.0,
                    scenario: key.scenario.0,
                });
            }
        }
        if let Some(missing) = keys(personas, scenarios).find(|k| !table.contains_key(k)) {
            return Err(ValidationError::MissingCell {
                persona: missing.persona.0,
                scenario: missing.scenario.0,
            });
        }
        Ok(CellTable {
            personas,
            scenarios,
            cells: table,
        })
    }

    pub fn from_fn(
        personas: usize,
        scenarios: usize,
        mut f: impl FnMut(CellKey) -> T,
    ) -> CellTable<T> {
        CellTable {
            personas,
            scenarios,
            cells: keys(personas, scenarios).map(|k| (k, f(k))).collect(),
        }
    }

    pub fn try_from_fn<E>(
        personas: usize,
        scenarios: usize,
        mut f: impl FnMut(CellKey) -> Result<T, E>,
    ) -> Result<CellTable<T>, E> {
        let cells = keys(personas, scenarios)
            .map(|k| f(k).map(|v| (k, v)))
            .collect::<Result<BTreeMap<_, _>, E>>()?;
        Ok(CellTable {
            personas,
            scenarios,
            cells,
        })
    }

    pub fn n_personas(&self) -> usize {
        self.personas
    }

    pub fn n_scenarios(&self) -> usize {
        self.scenarios
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, key: &CellKey) -> Option<&T> {
        self.cells.get(key)
    }

    /// cells in persona-major order
    pub fn iter(&self) -> impl Iterator<Item = (&CellKey, &T)> {
        self.cells.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.cells.values()
    }

    pub fn scenario_ids(&self) -> impl Iterator<Item = ScenarioId> {
        (0..self.scenarios).map(ScenarioId)
    }

    pub fn persona_ids(&self) -> impl Iterator<Item = PersonaId> {
        (0..self.personas).map(PersonaId)
    }

    /// the cells of every persona within one scenario
    pub fn scenario_cells(&self, scenario: ScenarioId) -> impl Iterator<Item = (PersonaId, &T)> {
        self.cells
            .iter()
            .filter(move |(k, _)| k.scenario == scenario)
            .map(|(k, v)| (k.persona, v))
    }

    /// the cells of one persona across every scenario
    pub fn persona_cells(&self, persona: PersonaId) -> impl Iterator<Item = (ScenarioId, &T)> {
        self.cells
            .iter()
            .filter(move |(k, _)| k.persona == persona)
            .map(|(k, v)| (k.scenario, v))
    }

    pub fn same_shape<U>(&self, other: &CellTable<U>) -> bool {
        self.personas == other.personas && self.scenarios == other.scenarios
    }

    pub fn map<U>(&self, mut f: impl FnMut(&CellKey, &T) -> U) -> CellTable<U> {
        CellTable {
            personas: self.personas,
            scenarios: self.scenarios,
            cells: self.cells.iter().map(|(k, v)| (*k, f(k, v))).collect(),
        }
    }

    pub fn try_map<U, E>(
        &self,
        mut f: impl FnMut(&CellKey, &T) -> Result<U, E>,
    ) -> Result<CellTable<U>, E> {
        let cells = self
            .cells
            .iter()
            .map(|(k, v)| f(k, v).map(|u| (*k, u)))
            .collect::<Result<BTreeMap<_, _>, E>>()?;
        Ok(CellTable {
            personas: self.personas,
            scenarios: self.scenarios,
            cells,
        })
    }

    /// combines two tables of the same shape cell by cell.
    pub fn zip_with<U, V>(
        &self,
        other: &CellTable<U>,
        mut f: impl FnMut(&CellKey, &T, &U) -> V,
    ) -> Result<CellTable<V>, ValidationError> {
        if !self.same_shape(other) {
            return Err(ValidationError::ShapeMismatch {
                left_personas: self.personas,
                left_scenarios: self.scenarios,
                right_personas: other.personas,
                right_scenarios: other.scenarios,
            });
        }
        let cells = self
            .cells
            .iter()
            .zip(other.cells.values())
            .map(|((k, t), u)| (*k, f(k, t, u)))
            .collect();
        Ok(CellTable {
            personas: self.personas,
            scenarios: self.scenarios,
            cells,
        })
    }
}

/// every key of a table shape in persona-major order
fn keys(personas: usize, scenarios: usize) -> impl Iterator<Item = CellKey> {
    (0..personas).flat_map(move |p| {
        (0..scenarios).map(move |s| CellKey::new(PersonaId(p), ScenarioId(s)))
    })
}
