//! Concrete two-temperature mixture model.

use crate::error::{ThermoError, ThermoResult};
use crate::model::ThermoModel;
use crate::species::Species;
use ct_core::numeric::ensure_positive;
use ct_core::units::{Temperature, kelvin};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

/// Default temperature assigned to a freshly built mixture [K].
pub const DEFAULT_TEMPERATURE: f64 = 300.0;

/// An `f64` cell shared between the owner and borrowers of a mixture.
#[derive(Debug)]
struct AtomicReal(AtomicU64);

impl AtomicReal {
    fn new(v: f64) -> Self {
        Self(AtomicU64::new(v.to_bits()))
    }

    fn get(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }

    fn set(&self, v: f64) {
        self.0.store(v.to_bits(), Ordering::Relaxed);
    }
}

/// Species list plus heavy-particle and electron temperatures.
///
/// The species list is fixed at construction. Temperatures can be updated through
/// a shared reference so that a transport database may keep borrowing the mixture
/// while the caller moves it between states.
#[derive(Debug)]
pub struct Mixture {
    species: Vec<Species>,
    has_electrons: bool,
    t: AtomicReal,
    te: AtomicReal,
}

impl Mixture {
    /// Build a mixture at [`DEFAULT_TEMPERATURE`].
    ///
    /// Validates every species, rejects duplicate names, and requires the electron
    /// (if any) to be listed first.
    pub fn new(species: Vec<Species>) -> ThermoResult<Self> {
        if species.is_empty() {
            return Err(ThermoError::Empty);
        }

        let mut names = HashSet::new();
        for (index, s) in species.iter().enumerate() {
            s.validate()?;
            if !names.insert(s.name.as_str()) {
                return Err(ThermoError::DuplicateSpecies {
                    name: s.name.clone(),
                });
            }
            if index > 0 && s.is_electron() {
                return Err(ThermoError::ElectronNotFirst { index });
            }
        }

        let has_electrons = species[0].is_electron();
        Ok(Self {
            species,
            has_electrons,
            t: AtomicReal::new(DEFAULT_TEMPERATURE),
            te: AtomicReal::new(DEFAULT_TEMPERATURE),
        })
    }

    /// Set heavy-particle and electron temperatures.
    pub fn set_state(&self, t: Temperature, te: Temperature) -> ThermoResult<()> {
        let t = ensure_positive(kelvin(t), "temperature")?;
        let te = ensure_positive(kelvin(te), "electron temperature")?;
        self.t.set(t);
        self.te.set(te);
        Ok(())
    }

    /// Set a thermal-equilibrium state (Te = T).
    pub fn set_temperature(&self, t: Temperature) -> ThermoResult<()> {
        self.set_state(t, t)
    }

    /// Index of a species by name.
    pub fn species_index(&self, name: &str) -> Option<usize> {
        self.species.iter().position(|s| s.name == name)
    }
}

impl ThermoModel for Mixture {
    fn n_species(&self) -> usize {
        self.species.len()
    }

    fn n_heavy(&self) -> usize {
        self.species.len() - usize::from(self.has_electrons)
    }

    fn has_electrons(&self) -> bool {
        self.has_electrons
    }

    fn t(&self) -> f64 {
        self.t.get()
    }

    fn te(&self) -> f64 {
        self.te.get()
    }

    fn species_mw(&self, i: usize) -> f64 {
        self.species[i].mw
    }

    fn species(&self) -> &[Species] {
        &self.species
    }
}
