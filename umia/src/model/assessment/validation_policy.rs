use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// how an assessment treats scenario likelihoods or persona weights that
/// do not sum to 100.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// refuse to assess
    #[default]
    Strict,
    /// assess anyway and attach the violations as warnings
    Lenient,
}

impl Display for ValidationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ValidationPolicy::Strict => "strict",
            ValidationPolicy::Lenient => "lenient",
        };
        write!(f, "{s}")
    }
}
