//! The collision database: pair list, group cache and transport scale factors
//! for one mixture.

use crate::cache::GroupCache;
use crate::config::{CollisionDbConfig, TabulationPolicy};
use crate::error::CollisionResult;
use crate::group::CollisionGroup;
use crate::pair::CollisionPair;
use crate::resource::resource_path;
use crate::scale::ScaleFactors;
use crate::triangular;
use ct_core::Real;
use ct_thermo::ThermoModel;
use std::sync::Arc;
use tracing::{debug, error};

/// Resource category under which databases are looked up.
pub const RESOURCE_CATEGORY: &str = "transport";

/// Collision integrals and derived transport factors for the species of `thermo`.
///
/// The database borrows the thermodynamic model and reads its temperatures on
/// every request, so callers must bring the model to the intended state first.
/// Group retrieval and factor computation take `&mut self`: the returned
/// references stay valid until the next call on the same database.
#[derive(Debug)]
pub struct CollisionDb<'t, M: ThermoModel + ?Sized> {
    pub(crate) thermo: &'t M,
    pub(crate) cache: GroupCache,
    pub(crate) scale: ScaleFactors,
    pub(crate) etai: Vec<Real>,
    pub(crate) n_dei: Vec<Real>,
    pub(crate) n_dij: Vec<Real>,
    pub(crate) dim: Vec<Real>,
}

impl<'t, M: ThermoModel + ?Sized> CollisionDb<'t, M> {
    /// Load the named database from the `transport` resource category.
    pub fn open(name: &str, thermo: &'t M) -> CollisionResult<Self> {
        let path = resource_path(name, RESOURCE_CATEGORY)?;
        debug!(database = name, path = %path.display(), "loading collision database");
        let config = CollisionDbConfig::load(&path)?;
        Self::new(&config, thermo)
    }

    /// Build from an already parsed configuration.
    ///
    /// Fails if tabulation is enabled with an invalid temperature grid.
    pub fn new(config: &CollisionDbConfig, thermo: &'t M) -> CollisionResult<Self> {
        let policy = config.tabulation();
        policy.validate()?;

        let species = thermo.species();
        let ns = thermo.n_species();
        let pairs: Vec<Arc<CollisionPair>> = triangular::pairs(ns)
            .map(|(i, j)| {
                Arc::new(CollisionPair::new(
                    (i, &species[i]),
                    (j, &species[j]),
                    config,
                ))
            })
            .collect();

        debug!(
            species = ns,
            heavy = thermo.n_heavy(),
            pairs = pairs.len(),
            tabulate = policy.enabled,
            t_min = policy.t_min,
            t_max = policy.t_max,
            dt = policy.dt,
            "collision database ready"
        );

        let scale = ScaleFactors::compute(thermo);
        Ok(Self {
            thermo,
            cache: GroupCache::new(Arc::new(policy), pairs, ns, thermo.has_electrons()),
            scale,
            etai: Vec::with_capacity(thermo.n_heavy()),
            n_dei: Vec::new(),
            n_dij: Vec::new(),
            dim: Vec::with_capacity(ns),
        })
    }

    /// Group `name` (e.g. `"Q11ij"`) at its driving temperature.
    ///
    /// Fails with [`CollisionError::InvalidGroup`](crate::CollisionError::InvalidGroup)
    /// when the suffix is not one of `ee`, `ei`, `ii`, `ij`.
    pub fn try_group(&mut self, name: &str) -> CollisionResult<&CollisionGroup> {
        self.cache.fetch(name, self.thermo)
    }

    /// Like [`try_group`](Self::try_group), but prints the error and terminates the
    /// process on failure.
    pub fn group(&mut self, name: &str) -> &CollisionGroup {
        match self.try_group(name) {
            Ok(group) => group,
            Err(err) => {
                error!(group = name, %err, "collision group request failed");
                eprintln!("{err}");
                std::process::exit(1);
            }
        }
    }

    pub fn q11ee(&mut self) -> CollisionResult<&CollisionGroup> {
        self.try_group("Q11ee")
    }

    pub fn q22ee(&mut self) -> CollisionResult<&CollisionGroup> {
        self.try_group("Q22ee")
    }

    pub fn q11ei(&mut self) -> CollisionResult<&CollisionGroup> {
        self.try_group("Q11ei")
    }

    pub fn q22ei(&mut self) -> CollisionResult<&CollisionGroup> {
        self.try_group("Q22ei")
    }

    pub fn q11ij(&mut self) -> CollisionResult<&CollisionGroup> {
        self.try_group("Q11ij")
    }

    pub fn q22ij(&mut self) -> CollisionResult<&CollisionGroup> {
        self.try_group("Q22ij")
    }

    pub fn q22ii(&mut self) -> CollisionResult<&CollisionGroup> {
        self.try_group("Q22ii")
    }

    /// Full triangular pair list.
    pub fn pairs(&self) -> &[Arc<CollisionPair>] {
        self.cache.pairs()
    }

    pub fn n_pairs(&self) -> usize {
        self.cache.pairs().len()
    }

    /// Pair `{i, j}` in either argument order.
    pub fn pair(&self, i: usize, j: usize) -> CollisionResult<&CollisionPair> {
        let index = triangular::pair_index(i, j, self.thermo.n_species())?;
        Ok(&self.cache.pairs()[index])
    }

    pub fn tabulation(&self) -> &TabulationPolicy {
        self.cache.policy()
    }

    /// Number of groups created so far.
    pub fn n_groups(&self) -> usize {
        self.cache.len()
    }

    pub fn scale_factors(&self) -> &ScaleFactors {
        &self.scale
    }

    pub fn thermo(&self) -> &'t M {
        self.thermo
    }
}
