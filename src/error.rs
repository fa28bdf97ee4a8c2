use thiserror::Error;

/// Top-level error type for the territory capture pipeline.
#[derive(Debug, Error)]
pub enum TerritoryError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),
}

/// Errors raised while validating a [`CaptureConfig`](crate::config::CaptureConfig).
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{parameter} = {value} must be finite and greater than zero")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("agent tag must not be empty")]
    EmptyAgentTag,
}

/// Errors reported by the host runtime when it cannot honour a request.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("missing component: {0}")]
    MissingComponent(String),

    #[error("host request failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`TerritoryError`].
pub type Result<T> = std::result::Result<T, TerritoryError>;
