//! Chemical species descriptors.

use crate::error::ThermoResult;
use ct_core::numeric::ensure_positive;
use serde::{Deserialize, Serialize};

/// Name conventionally given to the free electron.
pub const ELECTRON_NAME: &str = "e-";

/// Electron molar mass [kg/mol].
pub const ELECTRON_MW: f64 = 5.485_799_090_65e-7;

/// A gas-phase species as seen by transport code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    /// Species name, unique within a mixture (e.g. `N2`, `O+`, `e-`).
    pub name: String,
    /// Molecular weight [kg/mol].
    pub mw: f64,
    /// Charge in units of the elementary charge.
    #[serde(default)]
    pub charge: i32,
}

impl Species {
    /// Create a species, validating that the molecular weight is positive and finite.
    pub fn new(name: impl Into<String>, mw: f64, charge: i32) -> ThermoResult<Self> {
        let species = Self {
            name: name.into(),
            mw,
            charge,
        };
        species.validate()?;
        Ok(species)
    }

    /// The free electron.
    pub fn electron() -> Self {
        Self {
            name: ELECTRON_NAME.to_string(),
            mw: ELECTRON_MW,
            charge: -1,
        }
    }

    /// Electrons are recognized by name and charge.
    pub fn is_electron(&self) -> bool {
        self.name == ELECTRON_NAME && self.charge == -1
    }

    pub fn is_ion(&self) -> bool {
        self.charge != 0 && !self.is_electron()
    }

    pub fn is_neutral(&self) -> bool {
        self.charge == 0
    }

    /// Check the invariants of a deserialized species.
    pub fn validate(&self) -> ThermoResult<()> {
        if self.name.is_empty() {
            return Err(crate::ThermoError::InvalidArg {
                what: "species name must not be empty".to_string(),
            });
        }
        ensure_positive(self.mw, "molecular weight")?;
        Ok(())
    }
}
