//! Name-keyed cache of collision groups.

use crate::config::TabulationPolicy;
use crate::error::{CollisionError, CollisionResult};
use crate::group::CollisionGroup;
use crate::group_type::{GroupType, group_kind, group_suffix};
use crate::pair::CollisionPair;
use crate::triangular::diagonal_indices;
use ct_thermo::ThermoModel;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tracing::debug;

/// Owns the triangular pair list and every group created from it.
///
/// Groups are created on first request and live as long as the cache. Retrieval
/// mutates the cache, so a cache must not be shared between threads without an
/// exclusive lock held across the whole [`fetch`](GroupCache::fetch) call.
#[derive(Debug)]
pub struct GroupCache {
    policy: Arc<TabulationPolicy>,
    pairs: Vec<Arc<CollisionPair>>,
    n_species: usize,
    n_electrons: usize,
    groups: HashMap<String, CollisionGroup>,
}

impl GroupCache {
    /// `pairs` must hold the `n_species` triangular list, electron (if any) first.
    pub fn new(
        policy: Arc<TabulationPolicy>,
        pairs: Vec<Arc<CollisionPair>>,
        n_species: usize,
        has_electrons: bool,
    ) -> Self {
        Self {
            policy,
            pairs,
            n_species,
            n_electrons: usize::from(has_electrons),
            groups: HashMap::new(),
        }
    }

    /// Return group `name` updated to its driving temperature, creating it if needed.
    ///
    /// Electron groups (`ee`, `ei`) follow `thermo.te()`, heavy groups `thermo.t()`.
    pub fn fetch<M: ThermoModel + ?Sized>(
        &mut self,
        name: &str,
        thermo: &M,
    ) -> CollisionResult<&CollisionGroup> {
        let group_type = GroupType::classify(name);
        let kind = match group_kind(name) {
            Some(kind) if group_type != GroupType::Invalid => kind,
            _ => {
                return Err(CollisionError::InvalidGroup {
                    name: name.to_string(),
                    suffix: group_suffix(name).unwrap_or(name).to_string(),
                });
            }
        };

        let t = if group_type.is_electron_driven() {
            thermo.te()
        } else {
            thermo.t()
        };

        let group = match self.groups.entry(name.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let selected =
                    select_pairs(group_type, &self.pairs, self.n_species, self.n_electrons);
                debug!(
                    group = name,
                    ?group_type,
                    pairs = selected.len(),
                    "creating collision group"
                );

                let mut group = CollisionGroup::new(Arc::clone(&self.policy));
                group.manage(selected, kind);
                entry.insert(group)
            }
        };
        group.update(t)
    }

    pub fn pairs(&self) -> &[Arc<CollisionPair>] {
        &self.pairs
    }

    pub fn policy(&self) -> &TabulationPolicy {
        &self.policy
    }

    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Number of groups created so far.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Pairs a group of `group_type` covers, in triangular order.
///
/// The electron occupies index 0, so its `n` pairs head the list and every pair
/// after them is heavy-heavy. Heavy self pairs are not contiguous and are gathered
/// into a fresh list.
pub fn select_pairs(
    group_type: GroupType,
    pairs: &[Arc<CollisionPair>],
    n_species: usize,
    n_electrons: usize,
) -> Vec<Arc<CollisionPair>> {
    let k = n_electrons * n_species;
    match group_type {
        GroupType::ElectronElectron => pairs[..n_electrons].to_vec(),
        GroupType::ElectronIon => pairs[..k].to_vec(),
        GroupType::IonIonOffDiagonal => pairs[k..].to_vec(),
        GroupType::IonIonDiagonal => diagonal_indices(n_electrons, n_species)
            .map(|index| Arc::clone(&pairs[index]))
            .collect(),
        GroupType::Invalid => Vec::new(),
    }
}
