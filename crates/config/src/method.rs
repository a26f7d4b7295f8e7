//! Method coefficients of the AEA 1989a/b direct operating cost correlations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;
use crate::maintenance::MaintenanceCoefficients;

/// Spares investment as fractions of airframe and engine prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SparesFactors {
    pub airframe: f64,
    pub engine: f64,
}

impl Default for SparesFactors {
    fn default() -> Self {
        Self {
            airframe: 0.1,
            engine: 0.3,
        }
    }
}

/// Straight-line depreciation terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DepreciationTerms {
    /// Useful service life, n_dep (years).
    pub period_years: u32,
    /// Residual value as a fraction of the purchase price.
    pub residual_fraction: f64,
}

impl Default for DepreciationTerms {
    fn default() -> Self {
        Self {
            period_years: 16,
            residual_fraction: 0.1,
        }
    }
}

/// How the annual interest charge treats the balloon payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestModel {
    /// Average outstanding balance of the amortized (non-balloon) principal.
    #[default]
    AverageBalance,
    /// Average balance plus the balloon carried at full value over the whole term.
    AverageBalanceWithBalloon,
    /// AEA 1989a annuity average interest rate p_av spread over the depreciation period.
    AeaAnnuity,
}

/// Financing terms of the purchase price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FinancingTerms {
    pub interest_rate: f64,
    /// Repayment period, n_pay (years).
    pub repayment_years: u32,
    /// Final balloon payment as a fraction of the purchase price.
    pub balloon_fraction: f64,
    pub model: InterestModel,
}

impl Default for FinancingTerms {
    fn default() -> Self {
        Self {
            interest_rate: 0.08,
            repayment_years: 16,
            balloon_fraction: 0.1,
            model: InterestModel::AverageBalance,
        }
    }
}

/// Maintenance labor rate and the year it is quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LaborRate {
    pub usd_per_hour: f64,
    pub base_year: i32,
}

impl Default for LaborRate {
    fn default() -> Self {
        Self {
            usd_per_hour: 65.0,
            base_year: aea_core::constants::AEA_BASE_YEAR,
        }
    }
}

/// Hourly crew rates per crew member.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CrewRates {
    pub cockpit_usd_per_hour: f64,
    pub cabin_usd_per_hour: f64,
    pub base_year: i32,
}

impl Default for CrewRates {
    fn default() -> Self {
        Self {
            cockpit_usd_per_hour: 295.0 / 2.0,
            cabin_usd_per_hour: 0.0,
            base_year: aea_core::constants::AEA_BASE_YEAR,
        }
    }
}

/// Landing, navigation, and ground-handling fee factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeeFactors {
    /// k_LD (USD/kg of MTOW).
    pub landing_usd_per_kg: f64,
    /// k_NAV (USD per nm per sqrt(kg) of MTOW).
    pub navigation_usd_per_nm_sqrt_kg: f64,
    /// k_GND (USD/kg of payload).
    pub ground_handling_usd_per_kg: f64,
    pub base_year: i32,
}

impl Default for FeeFactors {
    fn default() -> Self {
        // AEA 1989a factors scaled to regional operations.
        Self {
            landing_usd_per_kg: 0.0078 / 15.0,
            navigation_usd_per_nm_sqrt_kg: 0.00414 / 15.0,
            ground_handling_usd_per_kg: 0.10 / 15.0,
            base_year: aea_core::constants::AEA_BASE_YEAR,
        }
    }
}

/// Multipliers from bare engine weight to installed engine weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineInstallation {
    /// Mounts, cowlings and systems (1.15 for transport jets).
    pub installed_factor: f64,
    /// 1.18 with thrust reversers, 1.0 without.
    pub thrust_reverser_factor: f64,
}

impl Default for EngineInstallation {
    fn default() -> Self {
        Self {
            installed_factor: 1.15,
            thrust_reverser_factor: 1.18,
        }
    }
}

/// Every coefficient used by the cost formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MethodConfig {
    pub spares: SparesFactors,
    pub depreciation: DepreciationTerms,
    pub financing: FinancingTerms,
    /// k_ins, fraction of the delivery price per year.
    pub insurance_rate: f64,
    pub fuel_price_usd_per_kg: f64,
    /// p_inf, average annual inflation.
    pub inflation_rate: f64,
    pub labor: LaborRate,
    pub crew: CrewRates,
    pub fees: FeeFactors,
    pub installation: EngineInstallation,
    /// Year the engine material correlation is quoted in.
    pub engine_material_base_year: i32,
    pub maintenance: MaintenanceCoefficients,
}

impl MethodConfig {
    /// Literature values of the AEA 1989a/b method.
    pub fn aea_default() -> Self {
        Self {
            spares: SparesFactors::default(),
            depreciation: DepreciationTerms::default(),
            financing: FinancingTerms::default(),
            insurance_rate: 0.005,
            // 0.888 USD/kg (2.7 USD/gal) at a 0.7 contract discount.
            fuel_price_usd_per_kg: 0.888 * 0.7,
            inflation_rate: 0.013,
            labor: LaborRate::default(),
            crew: CrewRates::default(),
            fees: FeeFactors::default(),
            installation: EngineInstallation::default(),
            engine_material_base_year: aea_core::constants::AEA_BASE_YEAR,
            maintenance: MaintenanceCoefficients::aea_default(),
        }
    }

    /// AEA defaults with the calibrated maintenance coefficients.
    pub fn fitted() -> Self {
        Self {
            maintenance: MaintenanceCoefficients::fitted(),
            ..Self::aea_default()
        }
    }

    /// Return a copy with a different maintenance coefficient set.
    pub fn with_maintenance(&self, maintenance: MaintenanceCoefficients) -> Self {
        Self {
            maintenance,
            ..*self
        }
    }

    /// Reject configurations the formulas cannot evaluate (zero periods, non-finite coefficients).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depreciation.period_years == 0 {
            return Err(ConfigError::invalid(
                "depreciation.period_years",
                "must be at least one year",
            ));
        }
        if self.financing.repayment_years == 0 {
            return Err(ConfigError::invalid(
                "financing.repayment_years",
                "must be at least one year",
            ));
        }

        let scalars = [
            ("spares.airframe", self.spares.airframe),
            ("spares.engine", self.spares.engine),
            ("depreciation.residual_fraction", self.depreciation.residual_fraction),
            ("financing.interest_rate", self.financing.interest_rate),
            ("financing.balloon_fraction", self.financing.balloon_fraction),
            ("insurance_rate", self.insurance_rate),
            ("fuel_price_usd_per_kg", self.fuel_price_usd_per_kg),
            ("inflation_rate", self.inflation_rate),
            ("labor.usd_per_hour", self.labor.usd_per_hour),
            ("crew.cockpit_usd_per_hour", self.crew.cockpit_usd_per_hour),
            ("crew.cabin_usd_per_hour", self.crew.cabin_usd_per_hour),
            ("fees.landing_usd_per_kg", self.fees.landing_usd_per_kg),
            (
                "fees.navigation_usd_per_nm_sqrt_kg",
                self.fees.navigation_usd_per_nm_sqrt_kg,
            ),
            (
                "fees.ground_handling_usd_per_kg",
                self.fees.ground_handling_usd_per_kg,
            ),
            ("installation.installed_factor", self.installation.installed_factor),
            (
                "installation.thrust_reverser_factor",
                self.installation.thrust_reverser_factor,
            ),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, "must be finite"));
            }
        }
        for (name, value) in self.maintenance.iter() {
            if !value.is_finite() {
                return Err(ConfigError::invalid(
                    format!("maintenance.{name}"),
                    "must be finite",
                ));
            }
        }
        Ok(())
    }
}

impl Default for MethodConfig {
    fn default() -> Self {
        Self::aea_default()
    }
}

/// Canonical coefficient configurations shipped with the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterSet {
    /// Literature values of AEA 1989a/b.
    #[default]
    AeaDefault,
    /// AEA values with the regional-jet maintenance calibration.
    Fitted,
}

impl ParameterSet {
    pub const ALL: [ParameterSet; 2] = [ParameterSet::AeaDefault, ParameterSet::Fitted];

    /// Stable identifier used in files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            ParameterSet::AeaDefault => "aea-default",
            ParameterSet::Fitted => "fitted",
        }
    }

    /// Materialize the coefficient set.
    pub fn method_config(self) -> MethodConfig {
        match self {
            ParameterSet::AeaDefault => MethodConfig::aea_default(),
            ParameterSet::Fitted => MethodConfig::fitted(),
        }
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParameterSet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase().replace('_', "-");
        match lower.as_str() {
            "aea-default" | "default" | "aea" => Ok(ParameterSet::AeaDefault),
            "fitted" => Ok(ParameterSet::Fitted),
            _ => Err(ConfigError::UnknownParameterSet(s.to_string())),
        }
    }
}
