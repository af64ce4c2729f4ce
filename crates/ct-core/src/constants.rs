//! Physical and mathematical constants used by the kinetic-theory scale factors.

/// Universal gas constant [J/(mol·K)] (CODATA 2018, exact).
pub const RU: f64 = 8.314_462_618_153_24;

/// π
pub const PI: f64 = std::f64::consts::PI;

/// 2π
pub const TWOPI: f64 = std::f64::consts::TAU;

/// √2
pub const SQRT2: f64 = std::f64::consts::SQRT_2;
