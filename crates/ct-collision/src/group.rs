//! Cached evaluation of one collision integral kind over a set of pairs.

use crate::config::TabulationPolicy;
use crate::error::CollisionResult;
use crate::pair::CollisionPair;
use ct_core::Real;
use std::ops::Index;
use std::sync::Arc;
use tracing::trace;

/// Values of integral `kind` for an ordered selection of species pairs at the
/// temperature of the last [`update`](CollisionGroup::update).
///
/// When the shared policy enables tabulation, in-range temperatures are served by
/// linear interpolation in a table built on first use; other temperatures are
/// evaluated directly. An update at an unchanged temperature is a no-op.
#[derive(Debug, Clone)]
pub struct CollisionGroup {
    policy: Arc<TabulationPolicy>,
    kind: String,
    pairs: Vec<Arc<CollisionPair>>,
    values: Vec<Real>,
    /// Row-major, one row of `pairs.len()` values per grid node.
    table: Option<Vec<Real>>,
    last_t: Option<Real>,
}

impl CollisionGroup {
    pub fn new(policy: Arc<TabulationPolicy>) -> Self {
        Self {
            policy,
            kind: String::new(),
            pairs: Vec::new(),
            values: Vec::new(),
            table: None,
            last_t: None,
        }
    }

    /// Bind the group to its pairs and integral kind. Resets any cached state.
    pub fn manage(&mut self, pairs: Vec<Arc<CollisionPair>>, kind: impl Into<String>) {
        self.kind = kind.into();
        self.values = vec![0.0; pairs.len()];
        self.pairs = pairs;
        self.table = None;
        self.last_t = None;
    }

    /// Bring values to temperature `t` [K], reusing them if `t` is unchanged.
    ///
    /// On error the group keeps its previous state.
    pub fn update(&mut self, t: Real) -> CollisionResult<&Self> {
        if self.last_t == Some(t) {
            trace!(kind = %self.kind, t, "collision group up to date");
            return Ok(self);
        }

        if self.policy.covers(t) && self.policy.n_intervals() > 0 {
            self.interpolate(t)?;
        } else {
            self.evaluate_direct(t)?;
        }
        self.last_t = Some(t);
        Ok(self)
    }

    fn evaluate_direct(&mut self, t: Real) -> CollisionResult<()> {
        let values = self
            .pairs
            .iter()
            .map(|pair| pair.evaluate(&self.kind, t))
            .collect::<CollisionResult<Vec<_>>>()?;
        self.values = values;
        Ok(())
    }

    fn interpolate(&mut self, t: Real) -> CollisionResult<()> {
        let table = match self.table.take() {
            Some(table) => table,
            None => self.build_table()?,
        };

        let np = self.pairs.len();
        let n = self.policy.n_intervals();
        let lower = (((t - self.policy.t_min) / self.policy.dt).floor() as usize).min(n - 1);
        let w = (t - self.policy.node(lower)) / self.policy.dt;

        let lo = &table[lower * np..(lower + 1) * np];
        let hi = &table[(lower + 1) * np..(lower + 2) * np];
        for (v, (a, b)) in self.values.iter_mut().zip(lo.iter().zip(hi)) {
            *v = (1.0 - w) * a + w * b;
        }
        self.table = Some(table);
        Ok(())
    }

    fn build_table(&self) -> CollisionResult<Vec<Real>> {
        let n = self.policy.n_intervals();
        trace!(kind = %self.kind, pairs = self.pairs.len(), nodes = n + 1, "tabulating collision group");

        let mut table = Vec::with_capacity((n + 1) * self.pairs.len());
        for k in 0..=n {
            let t = self.policy.node(k);
            for pair in &self.pairs {
                table.push(pair.evaluate(&self.kind, t)?);
            }
        }
        Ok(table)
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn values(&self) -> &[Real] {
        &self.values
    }

    pub fn pairs(&self) -> &[Arc<CollisionPair>] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Temperature of the current values, if the group has been updated.
    pub fn temperature(&self) -> Option<Real> {
        self.last_t
    }

    pub fn is_tabulated(&self) -> bool {
        self.table.is_some()
    }
}

impl Index<usize> for CollisionGroup {
    type Output = Real;

    fn index(&self, index: usize) -> &Real {
        &self.values[index]
    }
}
