use clap::{Parser, Subcommand};
use ct_collision::{CollisionDb, CollisionError};
use ct_core::units::k;
use ct_thermo::{Mixture, Species, ThermoError, ThermoModel};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Collision(#[from] CollisionError),

    #[error(transparent)]
    Thermo(#[from] ThermoError),

    #[error("Cannot read mixture file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid mixture file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "ct-cli")]
#[command(about = "Collision integral database and transport factors for ionized gas mixtures", long_about = None)]
struct Cli {
    /// Transport database name (looked up under $CT_DATA_DIRECTORY/transport) or file path
    #[arg(long)]
    db: String,
    /// Mixture YAML file (species list and temperatures)
    #[arg(long)]
    mixture: PathBuf,
    /// Heavy-particle temperature in K, overrides the mixture file
    #[arg(long)]
    t: Option<f64>,
    /// Electron temperature in K, overrides the mixture file
    #[arg(long)]
    te: Option<f64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the species pairs in database order
    Pairs,
    /// Print the values of a collision group (e.g. Q11ij)
    Group {
        /// Group name: integral kind followed by ee, ei, ii or ij
        name: String,
    },
    /// Print viscosity and diffusion factors
    Factors,
}

/// Species and state read from `--mixture`.
#[derive(Debug, Deserialize)]
struct MixtureFile {
    species: Vec<Species>,
    #[serde(rename = "T")]
    t: f64,
    #[serde(rename = "Te")]
    te: Option<f64>,
}

impl MixtureFile {
    fn parse(text: &str) -> CliResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Build the mixture, command-line temperatures taking precedence.
    fn into_mixture(self, t: Option<f64>, te: Option<f64>) -> CliResult<Mixture> {
        let t = t.unwrap_or(self.t);
        let te = te.or(self.te).unwrap_or(t);
        let mixture = Mixture::new(self.species)?;
        mixture.set_state(k(t), k(te))?;
        Ok(mixture)
    }
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mixture = MixtureFile::load(&cli.mixture)?.into_mixture(cli.t, cli.te)?;
    info!(
        species = mixture.n_species(),
        t = mixture.t(),
        te = mixture.te(),
        "mixture loaded"
    );
    let mut db = CollisionDb::open(&cli.db, &mixture)?;

    match cli.command {
        Commands::Pairs => cmd_pairs(&db),
        Commands::Group { name } => cmd_group(&mut db, &name),
        Commands::Factors => cmd_factors(&mut db),
    }
}

fn cmd_pairs(db: &CollisionDb<'_, Mixture>) -> CliResult<()> {
    println!("{} species pairs:", db.n_pairs());
    for pair in db.pairs() {
        let (i, j) = pair.indices();
        println!("  ({i}, {j})  {}", pair.label());
    }
    Ok(())
}

fn cmd_group(db: &mut CollisionDb<'_, Mixture>, name: &str) -> CliResult<()> {
    let group = db.try_group(name)?;
    println!(
        "{} ({} pairs, kind {}, T = {:.1} K):",
        name,
        group.len(),
        group.kind(),
        group.temperature().unwrap_or(f64::NAN)
    );
    for (pair, value) in group.pairs().iter().zip(group.values()) {
        println!("  {:<16} {:.6e} m²", pair.label(), value);
    }
    Ok(())
}

fn cmd_factors(db: &mut CollisionDb<'_, Mixture>) -> CliResult<()> {
    let names: Vec<String> = db
        .thermo()
        .species()
        .iter()
        .map(|s| s.name.clone())
        .collect();
    let first_heavy = names.len() - db.thermo().n_heavy();
    let heavy = &names[first_heavy..];

    println!("etai:");
    for (name, v) in heavy.iter().zip(db.etai()?) {
        println!("  {:<8} {:.6e}", name, v);
    }

    let n_dei = db.n_dei()?;
    if !n_dei.is_empty() {
        println!("nDei:");
        for (name, v) in names.iter().zip(n_dei) {
            println!("  {:<8} {:.6e}", name, v);
        }
    }

    println!("nDij:");
    let heavy_pairs = heavy
        .iter()
        .enumerate()
        .flat_map(move |(i, a)| heavy[i..].iter().map(move |b| format!("{a}-{b}")));
    for (label, v) in heavy_pairs.zip(db.n_dij()?) {
        println!("  {:<16} {:.6e}", label, v);
    }

    println!("Dim:");
    for (name, v) in names.iter().zip(db.dim()) {
        println!("  {:<8} {:.6e}", name, v);
    }
    Ok(())
}
