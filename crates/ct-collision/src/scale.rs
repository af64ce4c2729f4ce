//! Kinetic-theory prefactors that turn collision integrals into transport factors.

use ct_core::Real;
use ct_core::constants::{PI, RU, SQRT2, TWOPI};
use ct_thermo::ThermoModel;

/// Temperature-independent factors computed from molecular weights.
///
/// - `etafac[h] = 5/16 √(π R Mₕ)` for each heavy species `h`
/// - `deifac[i] = 3/16 √(2π R / Mₑ)` for every species when electrons are present,
///   with the electron self term further multiplied by `2/√2`; empty otherwise
/// - `dijfac[p] = 3/16 √(2π R (Mᵢ+Mⱼ)/(Mᵢ Mⱼ))` for each heavy pair `p`, in
///   triangular order
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleFactors {
    etafac: Vec<Real>,
    deifac: Vec<Real>,
    dijfac: Vec<Real>,
}

impl ScaleFactors {
    pub fn compute<M: ThermoModel + ?Sized>(thermo: &M) -> Self {
        let ns = thermo.n_species();
        let k = ns - thermo.n_heavy();

        let etafac = (k..ns)
            .map(|i| 5.0 / 16.0 * (PI * RU * thermo.species_mw(i)).sqrt())
            .collect();

        let mut deifac = Vec::new();
        if k > 0 {
            let factor = 3.0 / 16.0 * (TWOPI * RU / thermo.species_mw(0)).sqrt();
            deifac = vec![factor; ns];
            deifac[0] *= 2.0 / SQRT2;
        }

        let mut dijfac = Vec::with_capacity(crate::triangular::pair_count(ns - k));
        for i in k..ns {
            let mi = thermo.species_mw(i);
            for j in i..ns {
                let mj = thermo.species_mw(j);
                dijfac.push(3.0 / 16.0 * (TWOPI * RU * (mi + mj) / (mi * mj)).sqrt());
            }
        }

        Self {
            etafac,
            deifac,
            dijfac,
        }
    }

    pub fn etafac(&self) -> &[Real] {
        &self.etafac
    }

    pub fn deifac(&self) -> &[Real] {
        &self.deifac
    }

    pub fn dijfac(&self) -> &[Real] {
        &self.dijfac
    }
}
