mod app_error;
pub mod output;
pub mod report;
pub mod session_loader;
mod umia_app;

pub use app_error::AppError;
pub use umia_app::{UmiaApp, UmiaOperation};
