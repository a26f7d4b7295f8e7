use std::io::{self, Write};
use std::path::PathBuf;

use aircraft_doc::common::constants::DEFAULT_TARGET_YEAR;
use aircraft_doc::config::ParameterSet;
use aircraft_doc::export::{self, breakdown, report};
use aircraft_doc::operating::{AnalysisResult, analyze};
use aircraft_doc::setup::{self, NamedAircraft};
use clap::{Parser, ValueEnum};

/// Estimate the direct operating cost of one aircraft with the AEA 1989a/b method.
#[derive(Parser, Debug)]
#[command(author, version, about = "AEA direct operating cost calculator")]
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

    /// Year the costs are expressed in
    #[arg(long, default_value_t = DEFAULT_TARGET_YEAR)]
    target_year: i32,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Output file for the report (use '-' for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Csv,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let aircraft = setup::load_aircraft(&cli.catalog, cli.aircraft.as_deref())?;
    let method = setup::method_config(cli.parameter_set, cli.method.as_deref())?;
    let result = analyze(&aircraft.spec, &method, cli.target_year)?;
    let set_name = cli.parameter_set.name();

    match cli.format {
        Format::Table => {
            let mut writer = export::writer_for_path(&cli.output)?;
            write_report(writer.as_mut(), &aircraft, set_name, &result)?;
        }
        Format::Csv => {
            let label = breakdown::Label {
                aircraft: &aircraft.name,
                parameter_set: set_name,
            };
            breakdown::write_csv(export::writer_for_path(&cli.output)?, &label, &result)?;
        }
        Format::Json => {
            report::write_json(
                export::writer_for_path(&cli.output)?,
                &aircraft.name,
                set_name,
                &result,
            )?;
        }
    }

    if cli.output.as_os_str() != "-" {
        eprintln!("Wrote {}", cli.output.display());
    }
    Ok(())
}

fn write_report(
    writer: &mut dyn Write,
    aircraft: &NamedAircraft,
    set_name: &str,
    result: &AnalysisResult,
) -> io::Result<()> {
    let pricing = &result.pricing;
    let engine = &aircraft.spec.engine;
    writeln!(
        writer,
        "=== {} ({}, {} USD) ===",
        aircraft.name, set_name, result.target_year
    )?;
    writeln!(
        writer,
        "Engines: {} x {} (BPR {:.1}, OPR {:.1}, {:.0} N)",
        engine.count,
        engine.shafts,
        engine.bypass_ratio,
        engine.overall_pressure_ratio,
        engine.takeoff_thrust_per_engine_n
    )?;
    writeln!(writer, "Engine price:    ${:>14.2}", pricing.engine_price_usd)?;
    writeln!(writer, "Delivery price:  ${:>14.2}", pricing.delivery_price_usd)?;
    writeln!(writer, "Airframe price:  ${:>14.2}", pricing.airframe_price_usd)?;
    writeln!(writer, "Spares:          ${:>14.2}", pricing.spares_price_usd)?;
    writeln!(writer, "Purchase price:  ${:>14.2}", pricing.purchase_price_usd)?;

    let m = &result.maintenance;
    writeln!(writer)?;
    writeln!(
        writer,
        "Maintenance per flight: airframe ${:.2} ({:.2} h labor), engines ${:.2} ({:.2} h labor)",
        m.airframe.total_usd(),
        m.airframe.labor_hours,
        m.engines.total_usd(),
        m.engines.labor_hours
    )?;

    writeln!(writer)?;
    writeln!(
        writer,
        "{:<18}{:>16}{:>14}{:>12}",
        "category", "annual", "per flight", "per hour"
    )?;
    let rows = result
        .annual
        .categories()
        .into_iter()
        .zip(result.per_flight.categories())
        .zip(result.per_hour.categories());
    for (((category, annual), (_, flight)), (_, hour)) in rows {
        write_row(writer, category, annual, flight, hour)?;
    }
    write_row(
        writer,
        "total",
        result.annual.total,
        result.per_flight.total,
        result.per_hour.total,
    )?;
    writer.flush()
}

fn write_row(
    writer: &mut dyn Write,
    category: &str,
    annual: f64,
    flight: f64,
    hour: f64,
) -> io::Result<()> {
    writeln!(
        writer,
        "{:<18}{:>16.2}{:>14.2}{:>12.2}",
        category, annual, flight, hour
    )
}
