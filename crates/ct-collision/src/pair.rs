//! Per-pair collision integral evaluators.

use crate::config::CollisionDbConfig;
use crate::error::{CollisionError, CollisionResult};
use crate::integral::IntegralModel;
use ct_core::Real;
use ct_thermo::Species;
use std::collections::BTreeMap;

/// One unordered species pair `(i, j)` with `i <= j`, and the integral fits that
/// apply to it.
///
/// Models are resolved once at construction: the pair's own configuration entry
/// wins, kinds it does not list fall back to the database defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionPair {
    i: usize,
    j: usize,
    label: String,
    integrals: BTreeMap<String, IntegralModel>,
}

impl CollisionPair {
    pub fn new(
        (i, a): (usize, &Species),
        (j, b): (usize, &Species),
        config: &CollisionDbConfig,
    ) -> Self {
        let mut integrals = config.defaults.clone();
        if let Some(entry) = config.pair_entry(&a.name, &b.name) {
            integrals.extend(
                entry
                    .integrals
                    .iter()
                    .map(|(kind, model)| (kind.clone(), model.clone())),
            );
        }

        Self {
            i,
            j,
            label: format!("{}-{}", a.name, b.name),
            integrals,
        }
    }

    pub fn indices(&self) -> (usize, usize) {
        (self.i, self.j)
    }

    pub fn is_self_pair(&self) -> bool {
        self.i == self.j
    }

    /// Species names joined by a dash, e.g. `e--N+`.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn has_kind(&self, kind: &str) -> bool {
        self.integrals.contains_key(kind)
    }

    /// Evaluate integral `kind` at temperature `t` [K].
    pub fn evaluate(&self, kind: &str, t: Real) -> CollisionResult<Real> {
        let model = self
            .integrals
            .get(kind)
            .ok_or_else(|| CollisionError::MissingIntegral {
                kind: kind.to_string(),
                pair: self.label.clone(),
            })?;

        let value = model.evaluate(t);
        if !value.is_finite() || value <= 0.0 {
            return Err(CollisionError::NonPhysical {
                kind: kind.to_string(),
                pair: self.label.clone(),
                t,
                value,
            });
        }
        Ok(value)
    }
}
