//! ct-core: shared numeric foundation for collitrans.
//!
//! Contains:
//! - units (uom SI temperature type + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - constants (universal gas constant and the π multiples used by kinetic theory)
//! - error (shared error types)

pub mod constants;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
