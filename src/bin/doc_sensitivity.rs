use std::path::PathBuf;

use aircraft_doc::common::constants::DEFAULT_TARGET_YEAR;
use aircraft_doc::config::ParameterSet;
use aircraft_doc::export;
use aircraft_doc::sensitivity::{DEFAULT_PERTURBATIONS, maintenance_sensitivity};
use aircraft_doc::setup;
use clap::Parser;

/// Rank maintenance coefficients by their influence on maintenance cost per flight.
#[derive(Parser, Debug)]
#[command(author, version, about = "Maintenance coefficient sensitivity ranking")]
struct Cli {
    /// Aircraft catalog: YAML list, TOML file, or directory of TOML files
    #[arg(long, default_value = "data/aircraft/regional_jets.yaml")]
    catalog: PathBuf,

    /// Aircraft name in the catalog (case-insensitive; defaults to the first entry)
    #[arg(long)]
    aircraft: Option<String>,

    /// Coefficient set: aea-default or fitted
    #[arg(long, default_value_t = ParameterSet::AeaDefault)]
    parameter_set: ParameterSet,

    /// TOML file with method overrides merged over the parameter set
    #[arg(long)]
    method: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_TARGET_YEAR)]
    target_year: i32,

    /// Comma-separated perturbation fractions, e.g. -0.2,-0.1,0.1,0.2
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    perturbations: Vec<f64>,

    /// Number of coefficients to print
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Write the full ranking as CSV (use '-' for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let aircraft = setup::load_aircraft(&cli.catalog, cli.aircraft.as_deref())?;
    let method = setup::method_config(cli.parameter_set, cli.method.as_deref())?;
    let perturbations = if cli.perturbations.is_empty() {
        DEFAULT_PERTURBATIONS.to_vec()
    } else {
        cli.perturbations.clone()
    };
    if perturbations.iter().any(|f| *f == 0.0 || !f.is_finite()) {
        anyhow::bail!("perturbation fractions must be finite and non-zero");
    }

    let report = maintenance_sensitivity(&aircraft.spec, &method, cli.target_year, &perturbations)?;

    if let Some(path) = &cli.csv {
        export::sensitivity::write_csv(export::writer_for_path(path)?, &report)?;
        if path.as_os_str() != "-" {
            eprintln!("Wrote {}", path.display());
        }
        return Ok(());
    }

    println!(
        "=== Maintenance sensitivity: {} ({}, {} USD) ===",
        aircraft.name,
        cli.parameter_set,
        cli.target_year
    );
    println!("Base maintenance per flight: ${:.2}", report.base_maintenance_usd);
    println!();
    println!("{:>4}  {:<46}{:>12}{:>12}", "rank", "coefficient", "score", "std");
    for (rank, entry) in report.top(cli.top).iter().enumerate() {
        println!(
            "{:>4}  {:<46}{:>12.4}{:>12.4}",
            rank + 1,
            entry.coefficient,
            entry.score,
            entry.score_std
        );
    }
    Ok(())
}
