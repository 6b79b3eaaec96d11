use crate::model::mode::RawMode;
use serde::Serialize;

/// an input that cannot be accepted into a session.
#[derive(thiserror::Error, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ValidationError {
    #[error("rating {value} is outside of the valid range [0, 4]")]
    RatingOutOfRange { value: i64 },
    #[error("rating adjustment {value} is outside of the valid range [-2, 2]")]
    DeltaOutOfRange { value: i64 },
    #[error("percentage {value} is outside of the valid range [0, 100]")]
    PercentOutOfRange { value: i64 },
    #[error("percentage {value} is not a multiple of {step}")]
    PercentStep { value: i64, step: i64 },
    #[error("scenario likelihoods must sum to 100 but sum to {sum}")]
    LikelihoodSum { sum: u32 },
    #[error("persona weights must sum to 100 but sum to {sum}")]
    PersonaWeightSum { sum: u32 },
    #[error("{field} of '{name}' must be a finite non-negative number, found {value}")]
    InvalidQuantity {
        field: String,
        name: String,
        value: f64,
    },
    #[error("{field} of '{name}' is invalid: {reason}")]
    InvalidValue {
        field: String,
        name: String,
        reason: String,
    },
    #[error("{table} of persona '{persona}' in scenario '{scenario}' has an invalid {mode} value: {reason}")]
    InvalidRow {
        table: String,
        scenario: String,
        persona: String,
        mode: RawMode,
        reason: String,
    },
    #[error("{entity} count {count} is outside of the supported range [{min}, {max}]")]
    CountOutOfRange {
        entity: String,
        count: usize,
        min: usize,
        max: usize,
    },
    #[error("at most {max} interventions can be compared, found {count}")]
    TooManyInterventions { count: usize, max: usize },
    #[error("scenario '{scenario}' is missing mode ratings for persona '{persona}'")]
    MissingRatings { scenario: String, persona: String },
    #[error("scenario '{scenario}' has more than one row of {table} for persona '{persona}'")]
    DuplicateRow {
        table: String,
        scenario: String,
        persona: String,
    },
    #[error("unknown {entity} '{name}'")]
    UnknownReference { entity: String, name: String },
    #[error("{entity} name '{name}' is used more than once")]
    DuplicateName { entity: String, name: String },
    #[error("{entity} name must not be empty")]
    EmptyName { entity: String },
    #[error("{field} of '{name}' has {length} characters, maximum is {max}")]
    TextTooLong {
        field: String,
        name: String,
        length: usize,
        max: usize,
    },
    #[error("expected {expected} uncertainty axes, found {found}")]
    AxisCount { expected: usize, found: usize },
    #[error("scenario '{scenario}' has {found} characteristic levels, expected {expected}")]
    CharacteristicCount {
        scenario: String,
        expected: usize,
        found: usize,
    },
    #[error("table has more than one cell (persona {persona}, scenario {scenario})")]
    DuplicateCell { persona: usize, scenario: usize },
    #[error("table is missing cell (persona {persona}, scenario {scenario})")]
    MissingCell { persona: usize, scenario: usize },
    #[error("table cell (persona {persona}, scenario {scenario}) lies outside of a {personas}x{scenarios} table")]
    CellOutOfBounds {
        persona: usize,
        scenario: usize,
        personas: usize,
        scenarios: usize,
    },
    #[error("table shapes differ: {left_personas}x{left_scenarios} vs {right_personas}x{right_scenarios}")]
    ShapeMismatch {
        left_personas: usize,
        left_scenarios: usize,
        right_personas: usize,
        right_scenarios: usize,
    },
}
