mod limits;
mod percent;
mod validation_error;
pub mod validation_ops;

pub use limits::*;
pub use percent::Percent;
pub use validation_error::ValidationError;
