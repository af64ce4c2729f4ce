//! Transport database configuration and tabulation policy.

use crate::error::{CollisionError, CollisionResult};
use crate::integral::IntegralModel;
use ct_core::Real;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const DEFAULT_TABULATE: bool = true;
pub const DEFAULT_TMIN: Real = 300.0;
pub const DEFAULT_TMAX: Real = 20000.0;
pub const DEFAULT_DT: Real = 100.0;

/// Relative tolerance on the integrality of `(Tmax - Tmin)/dT`.
const GRID_REL_TOL: Real = 1.0e-15;

fn default_tabulate() -> bool {
    DEFAULT_TABULATE
}

fn default_tmin() -> Real {
    DEFAULT_TMIN
}

fn default_tmax() -> Real {
    DEFAULT_TMAX
}

fn default_dt() -> Real {
    DEFAULT_DT
}

/// Root of a transport database resource.
///
/// ```yaml
/// tabulate: true
/// Tmin: 300
/// Tmax: 20000
/// dT: 100
/// defaults:
///   Q11: { constant: 1.0e-19 }
/// pairs:
///   - species: [N2, N2]
///     Q22: { exp-poly: [-43.0, 0.2, -0.015] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionDbConfig {
    #[serde(default = "default_tabulate")]
    pub tabulate: bool,
    #[serde(rename = "Tmin", default = "default_tmin")]
    pub t_min: Real,
    #[serde(rename = "Tmax", default = "default_tmax")]
    pub t_max: Real,
    #[serde(rename = "dT", default = "default_dt")]
    pub dt: Real,
    /// Fallback model per integral kind for pairs without an explicit entry.
    #[serde(default)]
    pub defaults: BTreeMap<String, IntegralModel>,
    #[serde(default)]
    pub pairs: Vec<PairEntry>,
}

/// Explicit integral models for one species pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairEntry {
    /// Species names; order does not matter.
    pub species: [String; 2],
    #[serde(flatten)]
    pub integrals: BTreeMap<String, IntegralModel>,
}

impl PairEntry {
    pub fn matches(&self, a: &str, b: &str) -> bool {
        let [x, y] = &self.species;
        (x == a && y == b) || (x == b && y == a)
    }
}

impl Default for CollisionDbConfig {
    fn default() -> Self {
        Self {
            tabulate: DEFAULT_TABULATE,
            t_min: DEFAULT_TMIN,
            t_max: DEFAULT_TMAX,
            dt: DEFAULT_DT,
            defaults: BTreeMap::new(),
            pairs: Vec::new(),
        }
    }
}

impl CollisionDbConfig {
    /// Integral models are written as single-key maps (`Q11: { constant: 1.0e-19 }`)
    /// rather than YAML tags.
    pub fn from_yaml_str(text: &str) -> CollisionResult<Self> {
        let de = serde_yaml::Deserializer::from_str(text);
        Ok(serde_yaml::with::singleton_map_recursive::deserialize(de)?)
    }

    pub fn from_json_str(text: &str) -> CollisionResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load from a file, picking the format from the extension (`.json` or YAML otherwise).
    pub fn load(path: &Path) -> CollisionResult<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_yaml_str(&content),
        }
    }

    pub fn tabulation(&self) -> TabulationPolicy {
        TabulationPolicy {
            enabled: self.tabulate,
            t_min: self.t_min,
            t_max: self.t_max,
            dt: self.dt,
        }
    }

    /// Explicit entry for a pair, if any.
    pub fn pair_entry(&self, a: &str, b: &str) -> Option<&PairEntry> {
        self.pairs.iter().find(|p| p.matches(a, b))
    }
}

/// Temperature grid on which collision groups may tabulate their integrals.
///
/// Shared by every group of a database. The grid nodes are `t_min + k*dt` for
/// `k = 0..=n_intervals()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabulationPolicy {
    pub enabled: bool,
    pub t_min: Real,
    pub t_max: Real,
    pub dt: Real,
}

impl Default for TabulationPolicy {
    fn default() -> Self {
        CollisionDbConfig::default().tabulation()
    }
}

impl TabulationPolicy {
    /// Check the grid. A disabled policy is always valid.
    pub fn validate(&self) -> CollisionResult<()> {
        if !self.enabled {
            return Ok(());
        }

        let check = |ok: bool, attribute: &'static str, rule: &'static str| {
            if ok {
                Ok(())
            } else {
                Err(CollisionError::Config { attribute, rule })
            }
        };

        check(self.t_min > 0.0, "Tmin", "must be positive")?;
        check(self.t_max > 0.0, "Tmax", "must be positive")?;
        check(self.dt > 0.0, "dT", "must be positive")?;
        check(self.t_min < self.t_max, "Tmin", "Tmin must be < Tmax")?;

        let size = (self.t_max - self.t_min) / self.dt;
        check(
            (size - size.trunc()).abs() / size < GRID_REL_TOL,
            "dT",
            "(Tmax - Tmin)/dT must be a positive whole number",
        )
    }

    /// Number of grid intervals. Meaningful only for a validated, enabled policy.
    pub fn n_intervals(&self) -> usize {
        ((self.t_max - self.t_min) / self.dt).round() as usize
    }

    pub fn node(&self, k: usize) -> Real {
        self.t_min + k as Real * self.dt
    }

    /// Whether `t` should be served from the table.
    pub fn covers(&self, t: Real) -> bool {
        self.enabled && t >= self.t_min && t <= self.t_max
    }
}
