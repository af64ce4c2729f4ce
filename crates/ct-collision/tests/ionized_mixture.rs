//! End-to-end checks on a partially ionized nitrogen mixture.
//!
//! Integral fits are deliberately simple (power laws and exp-polys with
//! plausible magnitudes); the tests check structure and bookkeeping, not data.

use ct_collision::{CollisionDb, CollisionDbConfig, CollisionError, triangular};
use ct_core::units::k;
use ct_core::{Tolerances, nearly_equal};
use ct_thermo::{Mixture, Species, ThermoModel};

const DATABASE: &str = r#"
tabulate: true
Tmin: 300
Tmax: 20000
dT: 100
defaults:
  Q11: { power-law: { a: 4.0e-18, b: -0.35 } }
  Q22: { exp-poly: [-41.5, -0.4, 0.012] }
pairs:
  - species: [e-, e-]
    Q11: { power-law: { a: 2.0e-14, b: -1.2 } }
    Q22: { power-law: { a: 2.2e-14, b: -1.2 } }
  - species: [N+, e-]
    Q11: { power-law: { a: 1.5e-14, b: -1.1 } }
"#;

fn ionized() -> Mixture {
    Mixture::new(vec![
        Species::electron(),
        Species::new("N", 0.014_006_7, 0).unwrap(),
        Species::new("N+", 0.014_006_2, 1).unwrap(),
        Species::new("N2", 0.028_013_4, 0).unwrap(),
    ])
    .unwrap()
}

fn neutral() -> Mixture {
    Mixture::new(vec![
        Species::new("N", 0.014_006_7, 0).unwrap(),
        Species::new("N2", 0.028_013_4, 0).unwrap(),
    ])
    .unwrap()
}

fn config() -> CollisionDbConfig {
    CollisionDbConfig::from_yaml_str(DATABASE).unwrap()
}

#[test]
fn pair_list_is_triangular() {
    let mix = ionized();
    let db = CollisionDb::new(&config(), &mix).unwrap();

    assert_eq!(db.n_pairs(), 10);
    let indices: Vec<_> = db.pairs().iter().map(|p| p.indices()).collect();
    let expected: Vec<_> = triangular::pairs(4).collect();
    assert_eq!(indices, expected);
    assert_eq!(indices[0], (0, 0));
    assert_eq!(indices[9], (3, 3));
}

#[test]
fn group_sizes_for_three_heavy_and_electron() {
    let mix = ionized();
    mix.set_state(k(6000.0), k(9000.0)).unwrap();
    let mut db = CollisionDb::new(&config(), &mix).unwrap();

    assert_eq!(db.q11ee().unwrap().len(), 1);
    assert_eq!(db.q11ei().unwrap().len(), 4);
    assert_eq!(db.q11ij().unwrap().len(), 6);
    assert_eq!(db.q22ii().unwrap().len(), 3);
    assert_eq!(db.n_groups(), 4);

    let diagonal: Vec<_> = db
        .group("Q22ii")
        .pairs()
        .iter()
        .map(|p| p.indices())
        .collect();
    assert_eq!(diagonal, vec![(1, 1), (2, 2), (3, 3)]);
}

#[test]
fn electron_groups_are_empty_without_electrons() {
    let mix = neutral();
    let mut db = CollisionDb::new(&config(), &mix).unwrap();

    assert!(db.q11ee().unwrap().is_empty());
    assert!(db.q11ei().unwrap().is_empty());
    assert_eq!(db.q11ij().unwrap().len(), 3);
    assert_eq!(db.q22ii().unwrap().len(), 2);
}

#[test]
fn kind_is_name_without_suffix() {
    let mix = ionized();
    let mut db = CollisionDb::new(&config(), &mix).unwrap();
    assert_eq!(db.group("Q11ij").kind(), "Q11");
    assert_eq!(db.group("Q22ee").kind(), "Q22");
}

#[test]
fn repeated_retrieval_is_idempotent() {
    let mix = ionized();
    mix.set_temperature(k(7350.0)).unwrap();
    let mut db = CollisionDb::new(&config(), &mix).unwrap();

    let first = db.group("Q22ii").values().to_vec();
    let second = db.group("Q22ii").values().to_vec();
    assert_eq!(first, second);
    assert_eq!(db.n_groups(), 1);
}

#[test]
fn temperature_change_refreshes_cached_group() {
    let mix = ionized();
    mix.set_temperature(k(2000.0)).unwrap();
    let mut db = CollisionDb::new(&config(), &mix).unwrap();

    let cold = db.group("Q11ij").values().to_vec();
    mix.set_temperature(k(12000.0)).unwrap();
    let hot = db.group("Q11ij").values().to_vec();

    assert_eq!(db.n_groups(), 1);
    assert_eq!(db.group("Q11ij").temperature(), Some(12000.0));
    assert!(hot.iter().zip(&cold).all(|(h, c)| h < c));
}

#[test]
fn grid_node_matches_direct_evaluation() {
    let mix = ionized();
    let tol = Tolerances::relative(1e-9);

    let mut tabulated = CollisionDb::new(&config(), &mix).unwrap();
    let mut direct_cfg = config();
    direct_cfg.tabulate = false;
    let mut direct = CollisionDb::new(&direct_cfg, &mix).unwrap();

    for t in [300.0, 1500.0, 8800.0, 20000.0] {
        mix.set_state(k(t), k(t)).unwrap();
        for name in ["Q11ei", "Q11ij", "Q22ii"] {
            let a = tabulated.group(name).values().to_vec();
            let b = direct.group(name).values().to_vec();
            assert!(tabulated.group(name).is_tabulated());
            assert!(!direct.group(name).is_tabulated());
            for (x, y) in a.iter().zip(&b) {
                assert!(nearly_equal(*x, *y, tol), "{name} at {t} K: {x} vs {y}");
            }
        }
    }
}

#[test]
fn invalid_group_name_is_reported() {
    let mix = ionized();
    let mut db = CollisionDb::new(&config(), &mix).unwrap();

    let err = db.try_group("Q11zz").unwrap_err();
    assert!(matches!(err, CollisionError::InvalidGroup { .. }));
    assert!(err.to_string().contains("'ee', 'ei', 'ii', and 'ij'"));
    assert_eq!(db.n_groups(), 0);
}

#[test]
fn missing_integral_kind_is_reported() {
    let mix = ionized();
    let mut db = CollisionDb::new(&config(), &mix).unwrap();
    assert!(matches!(
        db.try_group("Bstij"),
        Err(CollisionError::MissingIntegral { .. })
    ));
}

#[test]
fn construction_rejects_bad_grids() {
    let mix = ionized();
    for text in [
        "Tmin: 20000\nTmax: 300\n",
        "Tmin: 300\nTmax: 1300\ndT: 333\n",
        "dT: 0\n",
        "Tmin: -300\n",
    ] {
        let cfg = CollisionDbConfig::from_yaml_str(text).unwrap();
        assert!(
            matches!(
                CollisionDb::new(&cfg, &mix),
                Err(CollisionError::Config { .. })
            ),
            "accepted {text:?}"
        );
    }

    let cfg = CollisionDbConfig::from_yaml_str("tabulate: false\nTmin: 20000\nTmax: 300\n").unwrap();
    assert!(CollisionDb::new(&cfg, &mix).is_ok());
}

#[test]
fn factor_lengths() {
    let mix = ionized();
    mix.set_state(k(5000.0), k(11000.0)).unwrap();
    let mut db = CollisionDb::new(&config(), &mix).unwrap();

    assert_eq!(db.etai().unwrap().len(), mix.n_heavy());
    assert_eq!(db.n_dei().unwrap().len(), mix.n_species());
    assert_eq!(db.n_dij().unwrap().len(), 6);
    assert_eq!(db.dim().len(), mix.n_species());

    let plain = neutral();
    let mut db = CollisionDb::new(&config(), &plain).unwrap();
    assert!(db.n_dei().unwrap().is_empty());
    assert_eq!(db.n_groups(), 0);
    assert_eq!(db.n_dij().unwrap().len(), 3);
}

#[test]
fn factors_follow_formulas() {
    let mix = ionized();
    mix.set_state(k(4321.0), k(15000.0)).unwrap();
    let mut db = CollisionDb::new(&config(), &mix).unwrap();

    let tol = Tolerances::relative(1e-14);

    let q22 = db.group("Q22ii").values().to_vec();
    let etafac = db.scale_factors().etafac().to_vec();
    let etai = db.etai().unwrap().to_vec();
    for h in 0..3 {
        assert!(nearly_equal(etai[h], 4321.0_f64.sqrt() * etafac[h] / q22[h], tol));
    }

    let q11 = db.group("Q11ei").values().to_vec();
    let deifac = db.scale_factors().deifac().to_vec();
    let n_dei = db.n_dei().unwrap().to_vec();
    for i in 0..4 {
        assert!(nearly_equal(n_dei[i], 15000.0_f64.sqrt() * deifac[i] / q11[i], tol));
    }

    let q11 = db.group("Q11ij").values().to_vec();
    let dijfac = db.scale_factors().dijfac().to_vec();
    let n_dij = db.n_dij().unwrap().to_vec();
    for p in 0..6 {
        assert!(nearly_equal(n_dij[p], 4321.0_f64.sqrt() * dijfac[p] / q11[p], tol));
    }
}

#[test]
fn mixture_diffusion_is_zero() {
    let mix = ionized();
    let mut db = CollisionDb::new(&config(), &mix).unwrap();
    for t in [500.0, 9000.0] {
        mix.set_temperature(k(t)).unwrap();
        assert!(db.dim().iter().all(|&d| d == 0.0));
        assert_eq!(db.dim().len(), 4);
    }

    let plain = neutral();
    let mut db = CollisionDb::new(&config(), &plain).unwrap();
    assert_eq!(db.dim(), &[0.0, 0.0]);
}

#[test]
fn open_reads_database_file() {
    let dir = std::env::temp_dir().join(format!("ct-collision-open-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("nitrogen.yaml");
    std::fs::write(&path, DATABASE).unwrap();

    let mix = ionized();
    let mut db = CollisionDb::open(path.to_str().unwrap(), &mix).unwrap();
    assert_eq!(db.tabulation().n_intervals(), 197);
    assert_eq!(db.q11ei().unwrap().len(), 4);

    std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn open_unknown_resource_fails() {
    let mix = ionized();
    assert!(matches!(
        CollisionDb::open("definitely-not-a-database", &mix),
        Err(CollisionError::ResourceNotFound { .. })
    ));
}
