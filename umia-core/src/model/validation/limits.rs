/// fewest scenarios or personas in a session
pub const MIN_ENTITY_COUNT: usize = 2;
/// most scenarios or personas in a session
pub const MAX_ENTITY_COUNT: usize = 8;
/// interventions compared against the baseline at once
pub const MAX_INTERVENTIONS: usize = 2;
/// step size of likelihood and weight inputs
pub const PERCENT_STEP: i64 = 5;

pub const MAX_SCENARIO_DESCRIPTION: usize = 750;
pub const MAX_PERSONA_DESCRIPTION: usize = 450;
pub const MAX_AXIS_DESCRIPTION: usize = 250;
pub const MAX_INTERVENTION_DESCRIPTION: usize = 250;
pub const MAX_ACRONYM: usize = 5;
