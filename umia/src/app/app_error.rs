use crate::model::assessment::AssessmentError;
use umia_core::model::session::SessionError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("failure reading session file {path}: {source}")]
    ConfigReadError {
        path: String,
        source: config::ConfigError,
    },
    #[error("unsupported session file {0}, expected a .toml or .json file")]
    UnsupportedFileFormat(String),
    #[error("{source}")]
    SessionError {
        #[from]
        source: SessionError,
    },
    #[error("assessment failed: {source}")]
    AssessmentError {
        #[from]
        source: AssessmentError,
    },
    #[error("failure writing output: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure writing CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure encoding TOML: {source}")]
    TomlError {
        #[from]
        source: toml::ser::Error,
    },
}
