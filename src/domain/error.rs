use thiserror::Error;

/// Everything the core can refuse. None of these are fatal: callers turn
/// them into a status string or a log line and the world keeps running.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WorldError {
    #[error("coordinate {axis} is not finite ({value})")]
    NonFiniteCoordinate { axis: char, value: f32 },

    #[error("coordinate {axis}={value} is outside +/-{limit}")]
    CoordinateOutOfRange { axis: char, value: f32, limit: f32 },

    #[error("push intensity must be a finite, non-negative number (got {0})")]
    InvalidIntensity(f32),

    #[error("push intensity {value} is above the limit of {limit}")]
    IntensityOutOfRange { value: f32, limit: f32 },

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("malformed arguments for {tool}: {reason}")]
    MalformedArguments { tool: String, reason: String },

    #[error("unknown tuning profile: {0}")]
    UnknownProfile(String),

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("invalid palette: {0}")]
    InvalidPalette(String),
}

pub type WorldResult<T> = Result<T, WorldError>;
