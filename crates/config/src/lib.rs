//! Configuration models and loaders for the AEA direct operating cost calculator.

pub mod maintenance;
pub mod method;

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use maintenance::MaintenanceCoefficients;
pub use method::{
    CrewRates, DepreciationTerms, EngineInstallation, FeeFactors, FinancingTerms, InterestModel,
    LaborRate, MethodConfig, ParameterSet, SparesFactors,
};

/// Aircraft record parsed from catalog files.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AircraftConfig {
    pub name: String,
    /// Unit of every entry in `weights`.
    #[serde(default)]
    pub mass_unit: MassUnit,
    pub utilization: UtilizationConfig,
    pub weights: WeightsConfig,
    pub range_nm: f64,
    pub engine: EngineConfig,
    #[serde(default)]
    pub crew: CrewConfig,
    #[serde(default)]
    pub prices: PricesConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    #[default]
    Kg,
    Lb,
}

/// A duration given either as decimal hours or as an `H:MM:SS` clock string.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum HoursValue {
    Hours(f64),
    Clock(String),
}

impl HoursValue {
    /// Decimal hours, or `None` for a malformed clock string.
    pub fn hours(&self) -> Option<f64> {
        match self {
            HoursValue::Hours(h) => Some(*h),
            HoursValue::Clock(text) => aea_core::time::parse_clock_hours(text),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct UtilizationConfig {
    pub block_time: HoursValue,
    pub flight_time: HoursValue,
    pub flights_per_year: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct WeightsConfig {
    pub maximum_takeoff: f64,
    pub operational_empty: f64,
    /// Bare weight of one engine.
    pub engine: f64,
    /// Trip fuel burned per flight.
    pub fuel: f64,
    pub payload: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EngineConfig {
    #[serde(default = "default_engine_count")]
    pub count: u32,
    pub bypass_ratio: f64,
    pub overall_pressure_ratio: f64,
    /// Compressor stages including the fan.
    pub compressor_stages: u32,
    pub shafts: u8,
    pub takeoff_thrust_n: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct CrewConfig {
    #[serde(default = "default_cockpit_crew")]
    pub cockpit: u32,
    #[serde(default = "default_cabin_crew")]
    pub cabin: u32,
}

impl Default for CrewConfig {
    fn default() -> Self {
        Self {
            cockpit: default_cockpit_crew(),
            cabin: default_cabin_crew(),
        }
    }
}

/// Known prices; absent entries are estimated from weights and thrust.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
pub struct PricesConfig {
    #[serde(default)]
    pub delivery_usd: Option<f64>,
    #[serde(default)]
    pub engine_usd: Option<f64>,
}

fn default_engine_count() -> u32 {
    2
}

fn default_cockpit_crew() -> u32 {
    2
}

fn default_cabin_crew() -> u32 {
    1
}

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to encode TOML: {0}")]
    TomlEncode(#[from] toml::ser::Error),
    #[error("invalid method configuration `{field}`: {reason}")]
    Invalid { field: String, reason: String },
    #[error("unknown parameter set '{0}' (expected 'aea-default' or 'fitted')")]
    UnknownParameterSet(String),
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Load aircraft records from a YAML list, a single TOML file, or a directory of TOML files.
pub fn load_aircraft_configs<P: AsRef<Path>>(path: P) -> Result<Vec<AircraftConfig>, ConfigError> {
    load_records(path)
}

/// Load a method file and merge it over `base`; fields absent from the file keep `base` values.
pub fn load_method_config<P: AsRef<Path>>(
    path: P,
    base: &MethodConfig,
) -> Result<MethodConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    parse_method_overrides(&contents, base)
}

/// Merge TOML method overrides over `base` and validate the result.
pub fn parse_method_overrides(
    contents: &str,
    base: &MethodConfig,
) -> Result<MethodConfig, ConfigError> {
    let overrides: toml::Table = toml::from_str(contents)?;
    let mut merged = match toml::Value::try_from(base)? {
        toml::Value::Table(table) => table,
        _ => toml::Table::new(),
    };
    merge_tables(&mut merged, overrides);
    let config: MethodConfig = toml::Value::Table(merged).try_into()?;
    config.validate()?;
    Ok(config)
}

fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        match value {
            toml::Value::Table(nested) => match base.get_mut(&key) {
                Some(toml::Value::Table(existing)) => merge_tables(existing, nested),
                _ => {
                    base.insert(key, toml::Value::Table(nested));
                }
            },
            other => {
                base.insert(key, other);
            }
        }
    }
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
