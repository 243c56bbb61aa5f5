//! Error types
//!
//! Runtime engine operations never fail; these cover construction-time and
//! host-side configuration problems.

use thiserror::Error;

/// Problems with a `Config` that a host must reject before building an engine
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("spawn interval must be positive, got {0} ms")]
    NonPositiveSpawnInterval(f64),
    #[error("base fall speed must be positive, got {0}")]
    NonPositiveFallSpeed(f64),
    #[error("initial lives must be at least 1")]
    NonPositiveLives,
    #[error("word budget must be at least 1 when set")]
    ZeroWordBudget,
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unable to read config: {0}")]
    Io(#[from] std::io::Error),
}

/// Fatal problems detected while wiring up an engine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("word corpus is empty")]
    EmptyCorpus,
}
