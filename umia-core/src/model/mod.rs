pub mod coefficients;
pub mod entity;
pub mod mode;
pub mod rating;
pub mod session;
pub mod table;
pub mod validation;
