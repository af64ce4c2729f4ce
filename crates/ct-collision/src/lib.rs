//! ct-collision: collision integral database for ionized gas mixtures.
//!
//! Provides:
//! - The triangular list of species pairs and their integral fits
//! - Named collision groups (`Q11ei`, `Q22ii`, ...) cached per database and
//!   optionally tabulated on a temperature grid
//! - Kinetic-theory scale factors and the viscosity / diffusion factors built on them
//!
//! # Group names
//!
//! A group name is an integral kind followed by a two-letter suffix selecting the pairs:
//!
//! | suffix | pairs | temperature |
//! |---|---|---|
//! | `ee` | electron-electron | Te |
//! | `ei` | electron with every species | Te |
//! | `ii` | heavy self pairs | T |
//! | `ij` | every heavy-heavy pair | T |
//!
//! # Example
//!
//! ```
//! use ct_collision::{CollisionDb, CollisionDbConfig};
//! use ct_core::units::k;
//! use ct_thermo::{Mixture, Species};
//!
//! let config = CollisionDbConfig::from_yaml_str(
//!     "defaults:\n  Q11: { constant: 1.0e-19 }\n  Q22: { constant: 1.2e-19 }\n",
//! )
//! .unwrap();
//! let mix = Mixture::new(vec![
//!     Species::electron(),
//!     Species::new("Ar", 0.039_948, 0).unwrap(),
//!     Species::new("Ar+", 0.039_947_5, 1).unwrap(),
//! ])
//! .unwrap();
//! mix.set_state(k(8000.0), k(10000.0)).unwrap();
//!
//! let mut db = CollisionDb::new(&config, &mix).unwrap();
//! assert_eq!(db.try_group("Q11ij").unwrap().len(), 3);
//! assert_eq!(db.etai().unwrap().len(), 2);
//! assert_eq!(db.n_dei().unwrap().len(), 3);
//! ```

pub mod cache;
pub mod config;
pub mod database;
pub mod error;
pub mod group;
pub mod group_type;
pub mod integral;
pub mod pair;
pub mod resource;
pub mod scale;
pub mod transport;
pub mod triangular;

// Re-exports for ergonomics
pub use cache::GroupCache;
pub use config::{CollisionDbConfig, PairEntry, TabulationPolicy};
pub use database::CollisionDb;
pub use error::{CollisionError, CollisionResult};
pub use group::CollisionGroup;
pub use group_type::GroupType;
pub use integral::IntegralModel;
pub use pair::CollisionPair;
pub use scale::ScaleFactors;
