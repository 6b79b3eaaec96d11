use serde::Serialize;
use std::fmt::Display;
use umia_core::model::{mode::RawMode, rating::Rating, validation::ValidationError};

/// a condition found during an assessment that did not stop it.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum AssessmentWarning {
    /// an invalid cell input replaced by a neutral value under the lenient policy
    InputRepaired { error: ValidationError },
    /// likelihoods or weights do not sum to 100 under the lenient policy
    InvariantViolation { error: ValidationError },
    /// every rating of a persona in a scenario is 0, so it travels nowhere
    ZeroRatingRow {
        variant: String,
        scenario: String,
        persona: String,
    },
    /// an adjusted rating left [0, 4] and was clamped
    RatingClamped {
        intervention: String,
        scenario: String,
        persona: String,
        mode: RawMode,
        requested: i64,
        applied: Rating,
    },
}

impl Display for AssessmentWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssessmentWarning::InputRepaired { error } => {
                write!(f, "{error}, replaced by a zero value")
            }
            AssessmentWarning::InvariantViolation { error } => write!(f, "{error}"),
            AssessmentWarning::ZeroRatingRow {
                variant,
                scenario,
                persona,
            } => write!(
                f,
                "{variant}: all mode ratings of persona '{persona}' in scenario '{scenario}' are 0, distances set to 0"
            ),
            AssessmentWarning::RatingClamped {
                intervention,
                scenario,
                persona,
                mode,
                requested,
                applied,
            } => write!(
                f,
                "{intervention}: {mode} rating of persona '{persona}' in scenario '{scenario}' adjusted to {requested}, clamped to {}",
                applied.value()
            ),
        }
    }
}
