//! Thermodynamic model trait.

use crate::species::Species;

/// Read-only view of a thermodynamic state used by transport code.
///
/// Species are ordered with the electron, when present, at index 0; every other
/// species is "heavy". Temperatures are in kelvin, molecular weights in kg/mol.
///
/// Implementations must be thread-safe (Send + Sync), but callers that mutate the
/// state are responsible for serializing those updates with readers.
pub trait ThermoModel: Send + Sync {
    /// Total number of species, electrons included.
    fn n_species(&self) -> usize;

    /// Number of heavy (non-electron) species.
    fn n_heavy(&self) -> usize;

    /// Whether species 0 is the electron.
    fn has_electrons(&self) -> bool;

    /// Heavy-particle translational temperature [K].
    fn t(&self) -> f64;

    /// Electron temperature [K].
    fn te(&self) -> f64;

    /// Molecular weight of species `i` [kg/mol].
    fn species_mw(&self, i: usize) -> f64;

    /// Species descriptors in index order.
    fn species(&self) -> &[Species];
}
