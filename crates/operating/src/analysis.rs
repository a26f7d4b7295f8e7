//! Validated end-to-end DOC analysis of one aircraft under one method configuration.

use aea_aircraft::{AircraftError, AircraftSpec};
use aea_config::{ConfigError, MethodConfig};
use aea_core::constants::DEFAULT_TARGET_YEAR;
use aea_maintenance::{MaintenanceCost, maintenance_per_flight};
use aea_pricing::PricingResult;
use serde::Serialize;
use thiserror::Error;

use crate::aggregate::{CostBreakdown, aggregate};
use crate::fixed::{FixedCosts, annual_fixed_costs};
use crate::variable::{VariableCosts, variable_costs_per_flight};

/// Inputs rejected before any cost is computed.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid aircraft: {0}")]
    Aircraft(#[from] AircraftError),
    #[error(transparent)]
    Method(#[from] ConfigError),
}

/// Full output of one analysis, in target-year USD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub target_year: i32,
    pub pricing: PricingResult,
    pub maintenance: MaintenanceCost,
    pub fixed: FixedCosts,
    pub variable: VariableCosts,
    pub annual: CostBreakdown,
    pub per_flight: CostBreakdown,
    pub per_hour: CostBreakdown,
}

/// Compute the DOC of `aircraft` in `target_year` dollars.
pub fn analyze(
    aircraft: &AircraftSpec,
    config: &MethodConfig,
    target_year: i32,
) -> Result<AnalysisResult, AnalysisError> {
    aircraft.validate()?;
    config.validate()?;

    let pricing = aea_pricing::resolve(aircraft, config, target_year);
    let fixed = annual_fixed_costs(&pricing, config);
    let maintenance =
        maintenance_per_flight(aircraft, pricing.airframe_price_usd, config, target_year);
    let variable = variable_costs_per_flight(aircraft, config, target_year);

    let views = aggregate(
        &fixed,
        &variable,
        maintenance.total_usd,
        aircraft.utilization.flights_per_year,
        aircraft.utilization.block_time_hours,
    );

    Ok(AnalysisResult {
        target_year,
        pricing,
        maintenance,
        fixed,
        variable,
        annual: views.annual,
        per_flight: views.per_flight,
        per_hour: views.per_hour,
    })
}

/// [`analyze`] at the default target year.
pub fn analyze_default_year(
    aircraft: &AircraftSpec,
    config: &MethodConfig,
) -> Result<AnalysisResult, AnalysisError> {
    analyze(aircraft, config, DEFAULT_TARGET_YEAR)
}
