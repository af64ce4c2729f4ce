//! Transport factors derived from collision groups.
//!
//! Each method reads the current temperature from the thermodynamic model,
//! retrieves the group it needs and recomputes its output in full.

use crate::database::CollisionDb;
use crate::error::CollisionResult;
use ct_core::Real;
use ct_thermo::ThermoModel;

impl<M: ThermoModel + ?Sized> CollisionDb<'_, M> {
    /// Heavy-species viscosity scaling `√T · etafac / Q22ii`, one entry per heavy species.
    pub fn etai(&mut self) -> CollisionResult<&[Real]> {
        let sqrt_t = self.thermo.t().sqrt();
        let q22 = self.cache.fetch("Q22ii", self.thermo)?;

        self.etai.clear();
        self.etai.extend(
            self.scale
                .etafac()
                .iter()
                .zip(q22.values())
                .map(|(fac, q)| sqrt_t * fac / q),
        );
        Ok(&self.etai)
    }

    /// Electron-species diffusion scaling `√Te · Deifac / Q11ei`.
    ///
    /// Empty for mixtures without electrons, otherwise one entry per species.
    pub fn n_dei(&mut self) -> CollisionResult<&[Real]> {
        self.n_dei.clear();
        if self.scale.deifac().is_empty() {
            return Ok(&self.n_dei);
        }

        let sqrt_te = self.thermo.te().sqrt();
        let q11 = self.cache.fetch("Q11ei", self.thermo)?;
        self.n_dei.extend(
            self.scale
                .deifac()
                .iter()
                .zip(q11.values())
                .map(|(fac, q)| sqrt_te * fac / q),
        );
        Ok(&self.n_dei)
    }

    /// Heavy-pair binary diffusion scaling `√T · Dijfac / Q11ij`, in triangular order.
    pub fn n_dij(&mut self) -> CollisionResult<&[Real]> {
        let sqrt_t = self.thermo.t().sqrt();
        let q11 = self.cache.fetch("Q11ij", self.thermo)?;

        self.n_dij.clear();
        self.n_dij.extend(
            self.scale
                .dijfac()
                .iter()
                .zip(q11.values())
                .map(|(fac, q)| sqrt_t * fac / q),
        );
        Ok(&self.n_dij)
    }

    /// Mixture diffusion coefficients.
    ///
    /// Not modeled yet: always zero, one entry per species.
    pub fn dim(&mut self) -> &[Real] {
        self.dim.clear();
        self.dim.resize(self.thermo.n_species(), 0.0);
        &self.dim
    }
}
