pub mod aggregate;
pub mod assessment;
pub mod impact;
pub mod intervention;
pub mod mode_share;
