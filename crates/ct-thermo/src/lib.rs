//! ct-thermo: thermodynamic state consumed by the collision database.
//!
//! Provides:
//! - Species descriptors (name, molecular weight, charge)
//! - `ThermoModel` trait: the read-only view transport code needs
//! - `Mixture`: a concrete model with an updatable two-temperature state
//!
//! # Example
//!
//! ```
//! use ct_core::units::k;
//! use ct_thermo::{Mixture, Species, ThermoModel};
//!
//! let mix = Mixture::new(vec![
//!     Species::electron(),
//!     Species::new("N", 0.014_006_7, 0).unwrap(),
//!     Species::new("N+", 0.014_006_2, 1).unwrap(),
//! ])
//! .unwrap();
//! mix.set_state(k(8000.0), k(12000.0)).unwrap();
//!
//! assert!(mix.has_electrons());
//! assert_eq!(mix.n_heavy(), 2);
//! assert_eq!(mix.te(), 12000.0);
//! ```

pub mod error;
pub mod mixture;
pub mod model;
pub mod species;

pub use error::{ThermoError, ThermoResult};
pub use mixture::Mixture;
pub use model::ThermoModel;
pub use species::Species;
