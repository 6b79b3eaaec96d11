mod default_session;
mod session;
mod session_config;
mod session_error;

pub use default_session::{default_session, default_session_config, DEFAULT_ENTITY_COUNT};
pub use session::Session;
pub use session_config::{
    DeltaRowConfig, InterventionConfig, PersonaConfig, RatingRowConfig, ScenarioConfig,
    SessionConfig, DEFAULT_POPULATION,
};
pub use session_error::SessionError;
