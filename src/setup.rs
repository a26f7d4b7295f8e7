//! Resolution of catalog files, parameter sets, and override files into analysis inputs.

use std::path::Path;

use aea_aircraft::{AircraftError, AircraftSpec};
use aea_config::{ConfigError, MethodConfig, ParameterSet};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Aircraft(#[from] AircraftError),
}

/// A catalog entry ready for analysis.
#[derive(Debug, Clone)]
pub struct NamedAircraft {
    pub name: String,
    pub spec: AircraftSpec,
}

/// Load the catalog at `path` and pick `requested` (case-insensitive), or the first entry.
pub fn load_aircraft<P: AsRef<Path>>(
    path: P,
    requested: Option<&str>,
) -> Result<NamedAircraft, SetupError> {
    let configs = aea_config::load_aircraft_configs(path)?;
    let (record, spec) = aea_aircraft::select(&configs, requested)?;
    Ok(NamedAircraft {
        name: record.name.clone(),
        spec,
    })
}

/// Materialize `set` and merge the optional TOML override file over it.
pub fn method_config(
    set: ParameterSet,
    overrides: Option<&Path>,
) -> Result<MethodConfig, SetupError> {
    let base = set.method_config();
    let config = match overrides {
        Some(path) => aea_config::load_method_config(path, &base)?,
        None => {
            base.validate()?;
            base
        }
    };
    Ok(config)
}
