//! Capital costs per year: depreciation, interest, insurance.

use aea_config::{InterestModel, MethodConfig};
use aea_pricing::PricingResult;
use serde::Serialize;

/// Annual capital costs. Independent of utilization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FixedCosts {
    pub depreciation_usd: f64,
    pub interest_usd: f64,
    pub insurance_usd: f64,
}

/// Straight-line depreciation of the purchase price down to its residual value.
pub fn depreciation(purchase_price_usd: f64, config: &MethodConfig) -> f64 {
    let terms = &config.depreciation;
    purchase_price_usd * (1.0 - terms.residual_fraction) / terms.period_years as f64
}

/// Average annual interest on the financed purchase price.
pub fn interest(purchase_price_usd: f64, config: &MethodConfig) -> f64 {
    let financing = &config.financing;
    let rate = financing.interest_rate;
    let balloon = financing.balloon_fraction;
    let n = financing.repayment_years as f64;

    let amortized = purchase_price_usd * (1.0 - balloon) * rate * (n + 1.0) / (2.0 * n);
    match financing.model {
        InterestModel::AverageBalance => amortized,
        InterestModel::AverageBalanceWithBalloon => amortized + purchase_price_usd * balloon * rate,
        InterestModel::AeaAnnuity => {
            let p_av = annuity_average_rate(
                rate,
                financing.repayment_years,
                balloon,
                config.depreciation.period_years,
            );
            purchase_price_usd * p_av
        }
    }
}

/// AEA 1989a average interest rate p_av of an annuity loan with a balloon payment.
///
/// p_av = ((qⁿ − b)(q − 1)/(qⁿ − 1)) · n/n_dep − (1 − b)/n_dep, q = 1 + rate.
pub fn annuity_average_rate(
    rate: f64,
    repayment_years: u32,
    balloon_fraction: f64,
    depreciation_years: u32,
) -> f64 {
    let n = repayment_years as f64;
    let n_dep = depreciation_years as f64;
    let q = 1.0 + rate;
    let q_n = q.powi(repayment_years as i32);
    // (q − 1)/(qⁿ − 1) tends to 1/n as the rate goes to zero.
    let capital_recovery = if rate == 0.0 { 1.0 / n } else { (q - 1.0) / (q_n - 1.0) };
    (q_n - balloon_fraction) * capital_recovery * n / n_dep - (1.0 - balloon_fraction) / n_dep
}

/// Hull insurance on the delivery price.
pub fn insurance(delivery_price_usd: f64, config: &MethodConfig) -> f64 {
    delivery_price_usd * config.insurance_rate
}

pub fn annual_fixed_costs(pricing: &PricingResult, config: &MethodConfig) -> FixedCosts {
    FixedCosts {
        depreciation_usd: depreciation(pricing.purchase_price_usd, config),
        interest_usd: interest(pricing.purchase_price_usd, config),
        insurance_usd: insurance(pricing.delivery_price_usd, config),
    }
}
