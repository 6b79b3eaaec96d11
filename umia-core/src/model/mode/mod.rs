mod canonical_mode;
mod modal_split;
mod mode_values;
mod raw_mode;
mod raw_mode_values;

pub use canonical_mode::CanonicalMode;
pub use modal_split::{ModalSplit, PRIMARY_SHARE, SECONDARY_SHARE};
pub use mode_values::ModeValues;
pub use raw_mode::RawMode;
pub use raw_mode_values::RawModeValues;
