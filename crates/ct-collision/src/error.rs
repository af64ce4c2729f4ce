//! Collision database errors.

use ct_core::CoreError;
use thiserror::Error;

/// Result type for collision database operations.
pub type CollisionResult<T> = Result<T, CollisionError>;

/// Errors raised while building or querying a collision database.
#[derive(Error, Debug)]
pub enum CollisionError {
    /// A tabulation attribute violates its constraint. Fatal to construction.
    #[error("Invalid transport database attribute '{attribute}': {rule}")]
    Config {
        attribute: &'static str,
        rule: &'static str,
    },

    /// Group name whose two-character suffix does not classify.
    #[error(
        "Bad collision integral group type: '{suffix}' in group name: '{name}'. \
         Allowed group types are 'ee', 'ei', 'ii', and 'ij'."
    )]
    InvalidGroup { name: String, suffix: String },

    /// No model configured (nor defaulted) for this pair and integral kind.
    #[error("No {kind} collision integral available for pair {pair}")]
    MissingIntegral { kind: String, pair: String },

    /// Evaluated integral is not finite and positive.
    #[error("Non-physical {kind} collision integral for pair {pair} at T = {t} K: {value}")]
    NonPhysical {
        kind: String,
        pair: String,
        t: f64,
        value: f64,
    },

    /// Named resource could not be resolved to a file.
    #[error("Cannot find {category} resource '{name}' (looked in {searched})")]
    ResourceNotFound {
        name: String,
        category: &'static str,
        searched: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}
