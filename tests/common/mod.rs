#![allow(dead_code)]

use aircraft_doc::aircraft::{
    AircraftSpec, CrewComplement, EngineShafts, EngineSpec, KnownPrices, Utilization, Weights,
};

/// ERJ-145 class regional jet with estimated prices.
pub fn erj145() -> AircraftSpec {
    AircraftSpec {
        utilization: Utilization {
            block_time_hours: 2.33,
            flight_time_hours: 2.087,
            flights_per_year: 1500,
        },
        weights: Weights {
            maximum_takeoff_kg: 21_996.0,
            operational_empty_kg: 12_495.0,
            engine_kg: 751.6,
            fuel_kg: 1_731.0,
            payload_kg: 3_800.0,
        },
        range_nm: 654.0,
        engine: EngineSpec {
            count: 2,
            bypass_ratio: 4.7,
            overall_pressure_ratio: 20.0,
            compressor_stages: 9,
            shafts: EngineShafts::Twin,
            takeoff_thrust_per_engine_n: 39_670.0,
        },
        crew: CrewComplement::default(),
        prices: KnownPrices::default(),
    }
}

pub fn with_prices(delivery_usd: f64, engine_usd: f64) -> AircraftSpec {
    AircraftSpec {
        prices: KnownPrices {
            delivery_usd: Some(delivery_usd),
            engine_usd: Some(engine_usd),
        },
        ..erj145()
    }
}

pub const CATALOG: &str = "data/aircraft/regional_jets.yaml";
