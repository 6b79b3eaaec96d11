use crate::model::validation::ValidationError;

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("invalid session: {source}")]
    Validation {
        #[from]
        source: ValidationError,
    },
    #[error("failure decoding built-in default session: {0}")]
    Defaults(String),
}
