//! Airframe and engine maintenance cost per flight (AEA 1989a).
//!
//! Airframe:
//!   t_M,AF = (c_w·m_AF + t_0 − N/(m_AF + D)) · (a + b·t_f)
//!   C_M,M,AF = (m_0 + m_t·t_f) · P_AF
//! Engine (per aircraft, n_E engines):
//!   k1 = k1_0 − c_bpr·BPR^e_bpr
//!   k2 = c_opr·OAPR^e_opr / d_opr + k2_0
//!   k3 = c_c·n_c + k4(n_s)
//!   t_M,E = n_E · l_0 · k1 · k3 · (1 + c_T·T)^e_l · (1 + τ_l/t_f) · t_f
//!   C_M,M,E = n_E · m_E · k1 · (k2 + k3) · (1 + c_T·T)^e_m · (1 + τ_m/t_f) · k_INF · t_f
//!
//! Labor hours are priced at the labor rate inflated from its base year; k_INF carries the
//! engine material correlation from its base year to the target year.

use aea_aircraft::{AircraftSpec, EngineShafts, EngineSpec};
use aea_config::{MaintenanceCoefficients, MethodConfig};
use aea_core::inflation;
use serde::Serialize;

/// Labor and material split of one maintenance component, per flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentCost {
    pub labor_hours: f64,
    pub labor_usd: f64,
    pub material_usd: f64,
}

impl ComponentCost {
    pub fn total_usd(&self) -> f64 {
        self.labor_usd + self.material_usd
    }
}

/// Maintenance cost per flight, split by airframe and engines (all engines summed).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaintenanceCost {
    pub airframe: ComponentCost,
    pub engines: ComponentCost,
    /// Labor rate applied to both components (USD/h, target year).
    pub labor_rate_usd_per_hour: f64,
    pub total_usd: f64,
}

/// Engine-design factors of the engine maintenance laws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngineFactors {
    pub k1: f64,
    pub k2: f64,
    pub k3: f64,
    pub k4: f64,
}

/// Weight of all engines including mounts, cowlings, and thrust reversers.
pub fn installed_engine_weight_kg(aircraft: &AircraftSpec, config: &MethodConfig) -> f64 {
    config.installation.installed_factor
        * config.installation.thrust_reverser_factor
        * aircraft.weights.engine_kg
        * aircraft.engine.count as f64
}

/// Airframe weight m_AF: operational empty weight without installed engines.
pub fn airframe_weight_kg(aircraft: &AircraftSpec, config: &MethodConfig) -> f64 {
    aircraft.weights.operational_empty_kg - installed_engine_weight_kg(aircraft, config)
}

/// k4 for the engine's spool architecture.
pub fn k4(shafts: EngineShafts, coefficients: &MaintenanceCoefficients) -> f64 {
    match shafts {
        EngineShafts::Single => coefficients.engine_k4_single_shaft,
        EngineShafts::Twin => coefficients.engine_k4_twin_shaft,
        EngineShafts::Triple => coefficients.engine_k4_triple_shaft,
    }
}

pub fn engine_factors(engine: &EngineSpec, c: &MaintenanceCoefficients) -> EngineFactors {
    let bpr_term = engine.bypass_ratio.powf(c.engine_k1_bpr_exponent);
    let k1 = c.engine_k1_base - c.engine_k1_bpr_coefficient * bpr_term;
    let opr_term = engine.overall_pressure_ratio.powf(c.engine_k2_opr_exponent);
    let k2 = c.engine_k2_opr_coefficient * opr_term / c.engine_k2_opr_divisor + c.engine_k2_base;
    let k4 = k4(engine.shafts, c);
    let k3 = c.engine_k3_compressor_coefficient * engine.compressor_stages as f64 + k4;
    EngineFactors { k1, k2, k3, k4 }
}

/// Airframe labor hours per flight.
pub fn airframe_labor_hours(
    airframe_weight_kg: f64,
    flight_time_hours: f64,
    c: &MaintenanceCoefficients,
) -> f64 {
    let weight_term = c.airframe_labor_weight_coefficient * airframe_weight_kg
        + c.airframe_labor_base_hours
        - c.airframe_labor_weight_numerator_kg
            / (airframe_weight_kg + c.airframe_labor_weight_denominator_offset_kg);
    let time_term =
        c.airframe_labor_time_base_factor + c.airframe_labor_time_coefficient * flight_time_hours;
    weight_term * time_term
}

/// Airframe material cost per flight, proportional to the airframe price.
pub fn airframe_material_usd(
    airframe_price_usd: f64,
    flight_time_hours: f64,
    c: &MaintenanceCoefficients,
) -> f64 {
    (c.airframe_material_base_coefficient
        + c.airframe_material_time_coefficient * flight_time_hours)
        * airframe_price_usd
}

/// Engine labor hours per flight, all engines.
pub fn engine_labor_hours(
    engine: &EngineSpec,
    factors: &EngineFactors,
    flight_time_hours: f64,
    c: &MaintenanceCoefficients,
) -> f64 {
    let thrust_term = (1.0 + c.engine_labor_thrust_coefficient * engine.takeoff_thrust_per_engine_n)
        .powf(c.engine_labor_thrust_exponent);
    let cycle_term = 1.0 + c.engine_labor_flight_time_constant / flight_time_hours;
    engine.count as f64
        * c.engine_labor_base_coefficient
        * factors.k1
        * factors.k3
        * thrust_term
        * cycle_term
        * flight_time_hours
}

/// Engine material cost per flight, all engines, in target-year USD.
pub fn engine_material_usd(
    engine: &EngineSpec,
    factors: &EngineFactors,
    flight_time_hours: f64,
    material_inflation: f64,
    c: &MaintenanceCoefficients,
) -> f64 {
    let thrust_term = (1.0 + c.engine_labor_thrust_coefficient * engine.takeoff_thrust_per_engine_n)
        .powf(c.engine_material_thrust_exponent);
    let cycle_term = 1.0 + c.engine_material_flight_time_constant / flight_time_hours;
    engine.count as f64
        * c.engine_material_base_coefficient
        * factors.k1
        * (factors.k2 + factors.k3)
        * thrust_term
        * cycle_term
        * material_inflation
        * flight_time_hours
}

/// Maintenance cost per flight for the aircraft at the target year.
///
/// `airframe_price_usd` is the derived airframe price from price resolution.
pub fn maintenance_per_flight(
    aircraft: &AircraftSpec,
    airframe_price_usd: f64,
    config: &MethodConfig,
    target_year: i32,
) -> MaintenanceCost {
    let c = &config.maintenance;
    let t_f = aircraft.utilization.flight_time_hours;

    let labor_rate = inflation::adjust(
        config.labor.usd_per_hour,
        config.labor.base_year,
        target_year,
        config.inflation_rate,
    );
    let material_inflation = inflation::factor(
        config.engine_material_base_year,
        target_year,
        config.inflation_rate,
    );

    let m_af = airframe_weight_kg(aircraft, config);
    let airframe_hours = airframe_labor_hours(m_af, t_f, c);
    let airframe = ComponentCost {
        labor_hours: airframe_hours,
        labor_usd: airframe_hours * labor_rate,
        material_usd: airframe_material_usd(airframe_price_usd, t_f, c),
    };

    let factors = engine_factors(&aircraft.engine, c);
    let engine_hours = engine_labor_hours(&aircraft.engine, &factors, t_f, c);
    let engines = ComponentCost {
        labor_hours: engine_hours,
        labor_usd: engine_hours * labor_rate,
        material_usd: engine_material_usd(&aircraft.engine, &factors, t_f, material_inflation, c),
    };

    MaintenanceCost {
        airframe,
        engines,
        labor_rate_usd_per_hour: labor_rate,
        total_usd: airframe.total_usd() + engines.total_usd(),
    }
}
