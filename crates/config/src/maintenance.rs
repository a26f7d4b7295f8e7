//! Named coefficients of the AEA 1989a airframe and engine maintenance laws.

use serde::{Deserialize, Serialize};

/// Every coefficient of the maintenance sub-model, addressable individually.
///
/// Missing fields deserialize to the AEA 1989a literature values, so a partial table
/// overrides a subset while inheriting the rest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaintenanceCoefficients {
    pub airframe_labor_weight_coefficient: f64,
    pub airframe_labor_base_hours: f64,
    pub airframe_labor_weight_numerator_kg: f64,
    pub airframe_labor_weight_denominator_offset_kg: f64,
    pub airframe_labor_time_base_factor: f64,
    pub airframe_labor_time_coefficient: f64,
    pub airframe_material_base_coefficient: f64,
    pub airframe_material_time_coefficient: f64,
    pub engine_k1_base: f64,
    pub engine_k1_bpr_coefficient: f64,
    pub engine_k1_bpr_exponent: f64,
    pub engine_k2_base: f64,
    pub engine_k2_opr_coefficient: f64,
    pub engine_k2_opr_divisor: f64,
    pub engine_k2_opr_exponent: f64,
    pub engine_k3_compressor_coefficient: f64,
    pub engine_k4_single_shaft: f64,
    pub engine_k4_twin_shaft: f64,
    pub engine_k4_triple_shaft: f64,
    pub engine_labor_base_coefficient: f64,
    pub engine_labor_thrust_coefficient: f64,
    pub engine_labor_thrust_exponent: f64,
    pub engine_labor_flight_time_constant: f64,
    pub engine_material_base_coefficient: f64,
    pub engine_material_thrust_exponent: f64,
    pub engine_material_flight_time_constant: f64,
}

impl MaintenanceCoefficients {
    /// Coefficient names in declaration order.
    pub const NAMES: [&'static str; 26] = [
        "airframe_labor_weight_coefficient",
        "airframe_labor_base_hours",
        "airframe_labor_weight_numerator_kg",
        "airframe_labor_weight_denominator_offset_kg",
        "airframe_labor_time_base_factor",
        "airframe_labor_time_coefficient",
        "airframe_material_base_coefficient",
        "airframe_material_time_coefficient",
        "engine_k1_base",
        "engine_k1_bpr_coefficient",
        "engine_k1_bpr_exponent",
        "engine_k2_base",
        "engine_k2_opr_coefficient",
        "engine_k2_opr_divisor",
        "engine_k2_opr_exponent",
        "engine_k3_compressor_coefficient",
        "engine_k4_single_shaft",
        "engine_k4_twin_shaft",
        "engine_k4_triple_shaft",
        "engine_labor_base_coefficient",
        "engine_labor_thrust_coefficient",
        "engine_labor_thrust_exponent",
        "engine_labor_flight_time_constant",
        "engine_material_base_coefficient",
        "engine_material_thrust_exponent",
        "engine_material_flight_time_constant",
    ];

    /// AEA 1989a literature values.
    pub const fn aea_default() -> Self {
        Self {
            airframe_labor_weight_coefficient: 9.0e-5,
            airframe_labor_base_hours: 6.7,
            airframe_labor_weight_numerator_kg: 350_000.0,
            airframe_labor_weight_denominator_offset_kg: 75_000.0,
            airframe_labor_time_base_factor: 0.8,
            airframe_labor_time_coefficient: 0.68,
            airframe_material_base_coefficient: 4.2e-6,
            airframe_material_time_coefficient: 2.2e-6,
            engine_k1_base: 1.27,
            engine_k1_bpr_coefficient: 0.2,
            engine_k1_bpr_exponent: 0.2,
            engine_k2_base: 0.4,
            engine_k2_opr_coefficient: 0.4,
            engine_k2_opr_divisor: 20.0,
            engine_k2_opr_exponent: 1.3,
            engine_k3_compressor_coefficient: 0.032,
            engine_k4_single_shaft: 0.5,
            engine_k4_twin_shaft: 0.57,
            engine_k4_triple_shaft: 0.64,
            engine_labor_base_coefficient: 0.17,
            engine_labor_thrust_coefficient: 1.02e-4,
            engine_labor_thrust_exponent: 0.4,
            engine_labor_flight_time_constant: 1.3,
            engine_material_base_coefficient: 2.0,
            engine_material_thrust_exponent: 0.8,
            engine_material_flight_time_constant: 1.3,
        }
    }

    /// Values calibrated against the ERJ-145 XR, CRJ-200 and CRJ-700 maintenance targets.
    ///
    /// Only the ten highest-sensitivity coefficients differ from [`Self::aea_default`].
    pub const fn fitted() -> Self {
        let base = Self::aea_default();
        Self {
            airframe_labor_weight_coefficient: 3.636374535885983e-5,
            airframe_labor_base_hours: 8.122902723888275,
            airframe_labor_weight_numerator_kg: 349_999.964_792_814_9,
            airframe_labor_weight_denominator_offset_kg: 74_999.771_245_287_34,
            airframe_labor_time_base_factor: 0.16870063740188052,
            airframe_labor_time_coefficient: 0.9003414675473087,
            engine_k1_base: 0.5542373120826335,
            engine_k2_opr_exponent: 0.554237323109609,
            engine_labor_base_coefficient: 0.0662712266888201,
            engine_material_thrust_exponent: 0.42892656740853,
            ..base
        }
    }

    /// Look up a coefficient by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        let mut copy = *self;
        copy.get_mut(name).map(|v| *v)
    }

    /// Return a copy with one coefficient replaced, or `None` if the name is unknown.
    pub fn with(&self, name: &str, value: f64) -> Option<Self> {
        let mut copy = *self;
        *copy.get_mut(name)? = value;
        Some(copy)
    }

    /// Iterate `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        Self::NAMES
            .iter()
            .map(move |name| (*name, self.get(name).unwrap_or(f64::NAN)))
    }

    /// Mutable access to a coefficient by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut f64> {
        let slot = match name {
            "airframe_labor_weight_coefficient" => &mut self.airframe_labor_weight_coefficient,
            "airframe_labor_base_hours" => &mut self.airframe_labor_base_hours,
            "airframe_labor_weight_numerator_kg" => &mut self.airframe_labor_weight_numerator_kg,
            "airframe_labor_weight_denominator_offset_kg" => {
                &mut self.airframe_labor_weight_denominator_offset_kg
            }
            "airframe_labor_time_base_factor" => &mut self.airframe_labor_time_base_factor,
            "airframe_labor_time_coefficient" => &mut self.airframe_labor_time_coefficient,
            "airframe_material_base_coefficient" => &mut self.airframe_material_base_coefficient,
            "airframe_material_time_coefficient" => &mut self.airframe_material_time_coefficient,
            "engine_k1_base" => &mut self.engine_k1_base,
            "engine_k1_bpr_coefficient" => &mut self.engine_k1_bpr_coefficient,
            "engine_k1_bpr_exponent" => &mut self.engine_k1_bpr_exponent,
            "engine_k2_base" => &mut self.engine_k2_base,
            "engine_k2_opr_coefficient" => &mut self.engine_k2_opr_coefficient,
            "engine_k2_opr_divisor" => &mut self.engine_k2_opr_divisor,
            "engine_k2_opr_exponent" => &mut self.engine_k2_opr_exponent,
            "engine_k3_compressor_coefficient" => &mut self.engine_k3_compressor_coefficient,
            "engine_k4_single_shaft" => &mut self.engine_k4_single_shaft,
            "engine_k4_twin_shaft" => &mut self.engine_k4_twin_shaft,
            "engine_k4_triple_shaft" => &mut self.engine_k4_triple_shaft,
            "engine_labor_base_coefficient" => &mut self.engine_labor_base_coefficient,
            "engine_labor_thrust_coefficient" => &mut self.engine_labor_thrust_coefficient,
            "engine_labor_thrust_exponent" => &mut self.engine_labor_thrust_exponent,
            "engine_labor_flight_time_constant" => &mut self.engine_labor_flight_time_constant,
            "engine_material_base_coefficient" => &mut self.engine_material_base_coefficient,
            "engine_material_thrust_exponent" => &mut self.engine_material_thrust_exponent,
            "engine_material_flight_time_constant" => {
                &mut self.engine_material_flight_time_constant
            }
            _ => return None,
        };
        Some(slot)
    }
}

impl Default for MaintenanceCoefficients {
    fn default() -> Self {
        Self::aea_default()
    }
}
