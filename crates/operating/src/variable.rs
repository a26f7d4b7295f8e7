//! Costs incurred per flight: fuel, crew, fees and charges.

use aea_aircraft::AircraftSpec;
use aea_config::MethodConfig;
use aea_core::inflation;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VariableCosts {
    pub fuel_usd: f64,
    pub crew_usd: f64,
    pub landing_usd: f64,
    pub navigation_usd: f64,
    pub ground_handling_usd: f64,
}

impl VariableCosts {
    pub fn fees_and_charges_usd(&self) -> f64 {
        self.landing_usd + self.navigation_usd + self.ground_handling_usd
    }
}

pub fn fuel(aircraft: &AircraftSpec, config: &MethodConfig) -> f64 {
    aircraft.weights.fuel_kg * config.fuel_price_usd_per_kg
}

/// Crew cost over the block time, with hourly rates inflated from their base year.
pub fn crew(aircraft: &AircraftSpec, config: &MethodConfig, target_year: i32) -> f64 {
    let rates = &config.crew;
    let k = inflation::factor(rates.base_year, target_year, config.inflation_rate);
    let hourly = aircraft.crew.cockpit as f64 * rates.cockpit_usd_per_hour
        + aircraft.crew.cabin as f64 * rates.cabin_usd_per_hour;
    aircraft.utilization.block_time_hours * hourly * k
}

pub fn variable_costs_per_flight(
    aircraft: &AircraftSpec,
    config: &MethodConfig,
    target_year: i32,
) -> VariableCosts {
    let fees = &config.fees;
    let k = inflation::factor(fees.base_year, target_year, config.inflation_rate);
    let mtow = aircraft.weights.maximum_takeoff_kg;

    VariableCosts {
        fuel_usd: fuel(aircraft, config),
        crew_usd: crew(aircraft, config, target_year),
        landing_usd: fees.landing_usd_per_kg * k * mtow,
        navigation_usd: fees.navigation_usd_per_nm_sqrt_kg * k * aircraft.range_nm * mtow.sqrt(),
        ground_handling_usd: fees.ground_handling_usd_per_kg * k * aircraft.weights.payload_kg,
    }
}
