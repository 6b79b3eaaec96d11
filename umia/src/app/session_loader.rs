use super::AppError;
use config::{Config, File, FileFormat};
use std::path::Path;
use umia_core::model::session::{default_session_config, SessionConfig, DEFAULT_ENTITY_COUNT};

/// reads a session file in TOML or JSON format. a population given here
/// replaces the one in the file.
pub fn read_session_config(path: &str, population: Option<u64>) -> Result<SessionConfig, AppError> {
    let format = file_format(path)?;
    let read_err = |source| AppError::ConfigReadError {
        path: path.to_string(),
        source,
    };
    let mut builder = Config::builder().add_source(File::new(path, format));
    if let Some(population) = population {
        builder = builder
            .set_override("population", population)
            .map_err(read_err)?;
    }
    let config = builder.build().map_err(read_err)?;
    config.try_deserialize::<SessionConfig>().map_err(read_err)
}

/// the session file when given, otherwise the built-in session
pub fn session_config_or_default(
    path: Option<&str>,
    population: Option<u64>,
) -> Result<SessionConfig, AppError> {
    match path {
        Some(f) => {
            log::info!("reading session from {f}");
            read_session_config(f, population)
        }
        None => {
            log::info!("using the built-in session");
            let mut config = default_session_config(DEFAULT_ENTITY_COUNT, DEFAULT_ENTITY_COUNT)?;
            if let Some(population) = population {
                config.population = population;
            }
            Ok(config)
        }
    }
}

fn file_format(path: &str) -> Result<FileFormat, AppError> {
    match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some("toml") => Ok(FileFormat::Toml),
        Some("json") => Ok(FileFormat::Json),
        _ => Err(AppError::UnsupportedFileFormat(path.to_string())),
    }
}
