use itertools::Itertools;
use umia_core::model::{session::SessionError, validation::ValidationError};

#[derive(thiserror::Error, Debug)]
pub enum AssessmentError {
    #[error("{source}")]
    InvalidSession {
        #[from]
        source: SessionError,
    },
    #[error("session violates assessment invariants: {}", join_errors(.0))]
    InvariantViolations(Vec<ValidationError>),
    #[error("inconsistent assessment tables: {source}")]
    InconsistentTables {
        #[from]
        source: ValidationError,
    },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors.iter().join("; ")
}
