//! Aircraft description consumed by every cost component, plus catalog conversion.

use std::fmt;

use aea_config::{AircraftConfig, HoursValue, MassUnit};
use aea_core::units::lb_to_kg;
use serde::Serialize;
use thiserror::Error;

/// Spool architecture of the engine. Selects the k4 maintenance factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EngineShafts {
    Single,
    Twin,
    Triple,
}

impl TryFrom<u8> for EngineShafts {
    type Error = AircraftError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(EngineShafts::Single),
            2 => Ok(EngineShafts::Twin),
            3 => Ok(EngineShafts::Triple),
            other => Err(AircraftError::UnsupportedShaftCount(other)),
        }
    }
}

impl fmt::Display for EngineShafts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EngineShafts::Single => "single-shaft",
            EngineShafts::Twin => "twin-shaft",
            EngineShafts::Triple => "triple-shaft",
        };
        f.write_str(label)
    }
}

/// Annual utilization and per-flight timing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Utilization {
    /// Brakes-off to brakes-on time per flight, t_b (h).
    pub block_time_hours: f64,
    /// Airborne time per flight, t_f (h).
    pub flight_time_hours: f64,
    pub flights_per_year: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weights {
    pub maximum_takeoff_kg: f64,
    pub operational_empty_kg: f64,
    /// Bare weight of a single engine.
    pub engine_kg: f64,
    /// Trip fuel consumed per flight.
    pub fuel_kg: f64,
    pub payload_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngineSpec {
    pub count: u32,
    pub bypass_ratio: f64,
    pub overall_pressure_ratio: f64,
    /// Compressor stages including the fan.
    pub compressor_stages: u32,
    pub shafts: EngineShafts,
    pub takeoff_thrust_per_engine_n: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrewComplement {
    pub cockpit: u32,
    pub cabin: u32,
}

impl Default for CrewComplement {
    fn default() -> Self {
        Self {
            cockpit: 2,
            cabin: 1,
        }
    }
}

/// Prices known to the caller. `None` requests an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct KnownPrices {
    /// Delivery price without spares (USD, target year).
    pub delivery_usd: Option<f64>,
    /// Unit price of one engine (USD, target year).
    pub engine_usd: Option<f64>,
}

/// Complete design and mission description of one aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AircraftSpec {
    pub utilization: Utilization,
    pub weights: Weights,
    pub range_nm: f64,
    pub engine: EngineSpec,
    pub crew: CrewComplement,
    pub prices: KnownPrices,
}

/// Errors surfaced while validating or converting aircraft descriptions.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AircraftError {
    #[error("`{field}` must be strictly positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("`{field}` must be finite and non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("`{field}` must be at least 1")]
    ZeroCount { field: &'static str },
    #[error("`engine.shafts` must be 1, 2, or 3, got {0}")]
    UnsupportedShaftCount(u8),
    #[error("`{field}` is not a valid duration: '{text}' (expected hours or H:MM:SS)")]
    InvalidDuration { field: &'static str, text: String },
    #[error("aircraft '{0}' not found in catalog")]
    NotFound(String),
    #[error("aircraft catalog is empty")]
    EmptyCatalog,
}

impl AircraftSpec {
    /// Check every field against its admissible range, naming the first offending field.
    pub fn validate(&self) -> Result<(), AircraftError> {
        let positive = [
            ("utilization.block_time_hours", self.utilization.block_time_hours),
            ("utilization.flight_time_hours", self.utilization.flight_time_hours),
            ("weights.maximum_takeoff_kg", self.weights.maximum_takeoff_kg),
            ("weights.operational_empty_kg", self.weights.operational_empty_kg),
            ("weights.engine_kg", self.weights.engine_kg),
            ("weights.fuel_kg", self.weights.fuel_kg),
            ("weights.payload_kg", self.weights.payload_kg),
            ("range_nm", self.range_nm),
            (
                "engine.takeoff_thrust_per_engine_n",
                self.engine.takeoff_thrust_per_engine_n,
            ),
            ("engine.overall_pressure_ratio", self.engine.overall_pressure_ratio),
        ];
        for (field, value) in positive {
            // NaN fails this comparison as well.
            if !(value > 0.0 && value.is_finite()) {
                return Err(AircraftError::NonPositive { field, value });
            }
        }

        let bpr = self.engine.bypass_ratio;
        if !(bpr >= 0.0 && bpr.is_finite()) {
            return Err(AircraftError::Negative {
                field: "engine.bypass_ratio",
                value: bpr,
            });
        }

        if self.utilization.flights_per_year == 0 {
            return Err(AircraftError::ZeroCount {
                field: "utilization.flights_per_year",
            });
        }
        if self.engine.count == 0 {
            return Err(AircraftError::ZeroCount {
                field: "engine.count",
            });
        }

        let prices = [
            ("prices.delivery_usd", self.prices.delivery_usd),
            ("prices.engine_usd", self.prices.engine_usd),
        ];
        for (field, price) in prices {
            if let Some(value) = price {
                if !(value > 0.0 && value.is_finite()) {
                    return Err(AircraftError::NonPositive { field, value });
                }
            }
        }
        Ok(())
    }
}

/// Convert a catalog record into a validated `AircraftSpec`, converting pounds when requested.
pub fn from_config(config: &AircraftConfig) -> Result<AircraftSpec, AircraftError> {
    let mass = |v: f64| match config.mass_unit {
        MassUnit::Kg => v,
        MassUnit::Lb => lb_to_kg(v),
    };

    let block_time_hours =
        duration_hours("utilization.block_time", &config.utilization.block_time)?;
    let flight_time_hours =
        duration_hours("utilization.flight_time", &config.utilization.flight_time)?;

    let spec = AircraftSpec {
        utilization: Utilization {
            block_time_hours,
            flight_time_hours,
            flights_per_year: config.utilization.flights_per_year,
        },
        weights: Weights {
            maximum_takeoff_kg: mass(config.weights.maximum_takeoff),
            operational_empty_kg: mass(config.weights.operational_empty),
            engine_kg: mass(config.weights.engine),
            fuel_kg: mass(config.weights.fuel),
            payload_kg: mass(config.weights.payload),
        },
        range_nm: config.range_nm,
        engine: EngineSpec {
            count: config.engine.count,
            bypass_ratio: config.engine.bypass_ratio,
            overall_pressure_ratio: config.engine.overall_pressure_ratio,
            compressor_stages: config.engine.compressor_stages,
            shafts: EngineShafts::try_from(config.engine.shafts)?,
            takeoff_thrust_per_engine_n: config.engine.takeoff_thrust_n,
        },
        crew: CrewComplement {
            cockpit: config.crew.cockpit,
            cabin: config.crew.cabin,
        },
        prices: KnownPrices {
            delivery_usd: config.prices.delivery_usd,
            engine_usd: config.prices.engine_usd,
        },
    };
    spec.validate()?;
    Ok(spec)
}

fn duration_hours(field: &'static str, value: &HoursValue) -> Result<f64, AircraftError> {
    value.hours().ok_or_else(|| AircraftError::InvalidDuration {
        field,
        text: match value {
            HoursValue::Hours(h) => h.to_string(),
            HoursValue::Clock(text) => text.clone(),
        },
    })
}

/// Select an aircraft from the catalog by optional name, defaulting to the first entry.
///
/// Returns the chosen record alongside its validated spec.
pub fn select<'a>(
    configs: &'a [AircraftConfig],
    requested: Option<&str>,
) -> Result<(&'a AircraftConfig, AircraftSpec), AircraftError> {
    let chosen = match requested {
        Some(name) => {
            let upper = name.to_uppercase();
            configs
                .iter()
                .find(|cfg| cfg.name.to_uppercase() == upper)
                .ok_or_else(|| AircraftError::NotFound(name.to_string()))?
        }
        None => configs.first().ok_or(AircraftError::EmptyCatalog)?,
    };

    Ok((chosen, from_config(chosen)?))
}
