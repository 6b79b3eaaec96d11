mod characteristic_level;
mod identifier;
mod intervention;
mod persona;
mod scenario;
mod uncertainty_axis;

pub use characteristic_level::CharacteristicLevel;
pub use identifier::{PersonaId, ScenarioId};
pub use intervention::Intervention;
pub use persona::Persona;
pub use scenario::Scenario;
pub use uncertainty_axis::{UncertaintyAxis, AXIS_COUNT};
