//! Temperature fits for a single collision integral.
//!
//! Values are cross sections in m². Which fit applies to a pair is decided by the
//! database configuration, see [`crate::config`].

use ct_core::Real;
use serde::{Deserialize, Serialize};

/// Curve fit Q(T) for one pair and one integral kind.
///
/// Serialized externally tagged in kebab-case:
///
/// ```yaml
/// Q11: { constant: 1.2e-19 }
/// Q22: { exp-poly: [-44.3, 0.12, -0.01] }
/// Q12: { power-law: { a: 3.1e-18, b: -0.35 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntegralModel {
    /// Q(T) = value
    Constant(Real),
    /// Q(T) = exp(Σ aₖ (ln T)ᵏ)
    ExpPoly(Vec<Real>),
    /// Q(T) = a·Tᵇ
    PowerLaw { a: Real, b: Real },
}

impl IntegralModel {
    pub fn evaluate(&self, t: Real) -> Real {
        match self {
            IntegralModel::Constant(value) => *value,
            IntegralModel::ExpPoly(coeffs) => {
                let x = t.ln();
                coeffs.iter().rev().fold(0.0, |acc, a| acc * x + a).exp()
            }
            IntegralModel::PowerLaw { a, b } => a * t.powf(*b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ct_core::{Tolerances, nearly_equal};

    const TOL: Tolerances = Tolerances::relative(1e-12);

    #[test]
    fn constant_ignores_temperature() {
        let q = IntegralModel::Constant(1.5e-19);
        assert_eq!(q.evaluate(300.0), 1.5e-19);
        assert_eq!(q.evaluate(20000.0), 1.5e-19);
    }

    #[test]
    fn exp_poly_matches_expanded_form() {
        let coeffs = vec![-43.0, 0.2, -0.015];
        let q = IntegralModel::ExpPoly(coeffs.clone());
        let t: Real = 4500.0;
        let x = t.ln();
        let expected = (coeffs[0] + coeffs[1] * x + coeffs[2] * x * x).exp();
        assert!(nearly_equal(q.evaluate(t), expected, TOL));
    }

    #[test]
    fn power_law_decreases_with_negative_exponent() {
        let q = IntegralModel::PowerLaw { a: 3.0e-18, b: -0.4 };
        assert!(q.evaluate(1000.0) > q.evaluate(2000.0));
        assert!(nearly_equal(q.evaluate(1.0), 3.0e-18, TOL));
    }

    fn from_yaml(text: &str) -> IntegralModel {
        let de = serde_yaml::Deserializer::from_str(text);
        serde_yaml::with::singleton_map_recursive::deserialize(de).unwrap()
    }

    #[test]
    fn deserializes_kebab_case_single_key_maps() {
        assert_eq!(
            from_yaml("exp-poly: [1.0, 2.0]"),
            IntegralModel::ExpPoly(vec![1.0, 2.0])
        );
        assert_eq!(
            from_yaml("power-law: { a: 2.0, b: 0.5 }"),
            IntegralModel::PowerLaw { a: 2.0, b: 0.5 }
        );
        assert_eq!(
            from_yaml("constant: 1.0e-19"),
            IntegralModel::Constant(1.0e-19)
        );
    }
}
