mod assessment;
mod assessment_error;
pub mod assessment_ops;
mod assessment_warning;
mod evaluation;
mod validation_policy;
mod variant;

pub use assessment::{Assessment, InterventionOutcome};
pub use assessment_error::AssessmentError;
pub use assessment_warning::AssessmentWarning;
pub use evaluation::Evaluation;
pub use validation_policy::ValidationPolicy;
pub use variant::Variant;
