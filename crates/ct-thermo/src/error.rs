//! Thermodynamic state errors.

use ct_core::CoreError;
use thiserror::Error;

/// Result type for thermodynamic state operations.
pub type ThermoResult<T> = Result<T, ThermoError>;

/// Errors raised while building or updating a thermodynamic state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThermoError {
    /// Non-physical values (negative temperature, molecular weight, etc.).
    #[error("Non-physical value for {what}: {value}")]
    NonPhysical { what: &'static str, value: f64 },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    /// The electron must be the first species of a mixture.
    #[error("Electron species must be at index 0 (found at index {index})")]
    ElectronNotFirst { index: usize },

    /// Two species share a name.
    #[error("Duplicate species: {name}")]
    DuplicateSpecies { name: String },

    /// A mixture needs at least one species.
    #[error("Mixture has no species")]
    Empty,
}

impl From<CoreError> for ThermoError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, value } => ThermoError::NonPhysical { what, value },
            other => ThermoError::InvalidArg {
                what: other.to_string(),
            },
        }
    }
}

impl From<ThermoError> for CoreError {
    fn from(err: ThermoError) -> Self {
        match err {
            ThermoError::NonPhysical { what, value } => CoreError::NonFinite { what, value },
            ThermoError::InvalidArg { what } => CoreError::InvalidArg { what },
            other => CoreError::Invariant {
                what: other.to_string(),
            },
        }
    }
}
