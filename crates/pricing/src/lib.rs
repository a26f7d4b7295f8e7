//! Acquisition price resolution: engine and delivery estimates, spares, and purchase price.
//!
//! Correlations are anchored at their own historical base years and normalized to the
//! target year with the configured inflation rate. Prices supplied by the caller are taken
//! as already expressed in the target year.

use aea_aircraft::AircraftSpec;
use aea_config::MethodConfig;
use aea_core::constants::{DELIVERY_PRICE_BASE_YEAR, ENGINE_PRICE_BASE_YEAR};
use aea_core::inflation;
use serde::Serialize;

/// OEW at which the delivery correlation switches from the quadratic to the linear branch.
pub const DELIVERY_BRANCH_OEW_KG: f64 = 10_000.0;

/// Resolved acquisition prices (USD, target year).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingResult {
    /// Unit price of one engine.
    pub engine_price_usd: f64,
    /// Aircraft price from the manufacturer, without spares.
    pub delivery_price_usd: f64,
    /// Delivery price minus all engines. Negative when engine prices exceed the delivery price.
    pub airframe_price_usd: f64,
    pub spares_price_usd: f64,
    /// Delivery plus spares.
    pub purchase_price_usd: f64,
}

/// Engine unit price from takeoff thrust, in base-year (1999) USD.
///
/// P_E = 293 · T_TO,E^0.81 with thrust in newtons.
pub fn estimate_engine_price(takeoff_thrust_per_engine_n: f64) -> f64 {
    293.0 * takeoff_thrust_per_engine_n.powf(0.81)
}

/// Delivery price from operational empty weight, in base-year (2010) USD.
///
/// The two branches are independent fits; the jump at 10 000 kg is part of the correlation.
pub fn estimate_delivery_price(operational_empty_kg: f64) -> f64 {
    let oew = operational_empty_kg;
    if oew >= DELIVERY_BRANCH_OEW_KG {
        860.0 * oew
    } else {
        -0.002695 * oew * oew + 1967.0 * oew - 2_158_000.0
    }
}

/// Delivery price minus the price of all installed engines.
pub fn airframe_price(delivery_price_usd: f64, engine_price_usd: f64, engine_count: u32) -> f64 {
    delivery_price_usd - engine_count as f64 * engine_price_usd
}

/// Initial spares investment as fractions of airframe and total engine prices.
pub fn spares_price(
    airframe_price_usd: f64,
    engine_price_usd: f64,
    engine_count: u32,
    config: &MethodConfig,
) -> f64 {
    config.spares.airframe * airframe_price_usd
        + config.spares.engine * engine_count as f64 * engine_price_usd
}

/// Resolve the full price structure, estimating whatever the aircraft does not supply.
pub fn resolve(aircraft: &AircraftSpec, config: &MethodConfig, target_year: i32) -> PricingResult {
    let rate = config.inflation_rate;
    let engine_count = aircraft.engine.count;

    let engine_price_usd = match aircraft.prices.engine_usd {
        Some(price) => price,
        None => inflation::adjust(
            estimate_engine_price(aircraft.engine.takeoff_thrust_per_engine_n),
            ENGINE_PRICE_BASE_YEAR,
            target_year,
            rate,
        ),
    };

    let delivery_price_usd = match aircraft.prices.delivery_usd {
        Some(price) => price,
        None => inflation::adjust(
            estimate_delivery_price(aircraft.weights.operational_empty_kg),
            DELIVERY_PRICE_BASE_YEAR,
            target_year,
            rate,
        ),
    };

    let airframe_price_usd = airframe_price(delivery_price_usd, engine_price_usd, engine_count);
    let spares_price_usd = spares_price(airframe_price_usd, engine_price_usd, engine_count, config);

    PricingResult {
        engine_price_usd,
        delivery_price_usd,
        airframe_price_usd,
        spares_price_usd,
        purchase_price_usd: delivery_price_usd + spares_price_usd,
    }
}
