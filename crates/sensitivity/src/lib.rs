//! One-at-a-time sensitivity of per-flight maintenance cost to each maintenance coefficient.
//!
//! Every non-zero coefficient is scaled by `1 + f` for each perturbation fraction `f`
//! while all other coefficients keep their base values. The score of a coefficient is the
//! mean absolute relative change in maintenance cost, normalized to a 10 % perturbation.

use aea_aircraft::AircraftSpec;
use aea_config::MethodConfig;
use aea_operating::{AnalysisError, analyze};
use serde::Serialize;

/// Perturbations applied when the caller does not choose any.
pub const DEFAULT_PERTURBATIONS: [f64; 4] = [-0.20, -0.10, 0.10, 0.20];

/// Maintenance cost under one perturbation of one coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerturbationOutcome {
    /// Fractional change applied to the coefficient (0.1 = +10 %).
    pub fraction: f64,
    pub maintenance_usd: f64,
    pub absolute_change_usd: f64,
    /// Relative change of maintenance cost, in percent.
    pub relative_change_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoefficientSensitivity {
    pub coefficient: &'static str,
    pub base_value: f64,
    pub outcomes: Vec<PerturbationOutcome>,
    /// Mean |Δ%| per 10 % perturbation.
    pub score: f64,
    /// Population standard deviation of the per-perturbation scores.
    pub score_std: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityReport {
    pub target_year: i32,
    /// Per-flight maintenance cost with the unperturbed coefficients.
    pub base_maintenance_usd: f64,
    /// Sorted by descending score.
    pub coefficients: Vec<CoefficientSensitivity>,
}

impl SensitivityReport {
    /// The `n` most influential coefficients.
    pub fn top(&self, n: usize) -> &[CoefficientSensitivity] {
        &self.coefficients[..n.min(self.coefficients.len())]
    }
}

/// Rank every maintenance coefficient by its influence on per-flight maintenance cost.
///
/// `perturbations` must not contain zero; an empty slice falls back to
/// [`DEFAULT_PERTURBATIONS`].
pub fn maintenance_sensitivity(
    aircraft: &AircraftSpec,
    base: &MethodConfig,
    target_year: i32,
    perturbations: &[f64],
) -> Result<SensitivityReport, AnalysisError> {
    let perturbations: Vec<f64> = if perturbations.is_empty() {
        DEFAULT_PERTURBATIONS.to_vec()
    } else {
        perturbations.iter().copied().filter(|f| *f != 0.0).collect()
    };

    let base_cost = maintenance_cost(aircraft, base, target_year)?;

    let mut coefficients = Vec::new();
    for (name, base_value) in base.maintenance.iter() {
        if base_value == 0.0 {
            continue;
        }

        let mut outcomes = Vec::with_capacity(perturbations.len());
        for &fraction in &perturbations {
            let Some(perturbed) = base.maintenance.with(name, base_value * (1.0 + fraction))
            else {
                continue;
            };
            let cost = maintenance_cost(aircraft, &base.with_maintenance(perturbed), target_year)?;
            let relative_change_pct = if base_cost != 0.0 {
                (cost / base_cost - 1.0) * 100.0
            } else {
                0.0
            };
            outcomes.push(PerturbationOutcome {
                fraction,
                maintenance_usd: cost,
                absolute_change_usd: cost - base_cost,
                relative_change_pct,
            });
        }

        let (score, score_std) = score(&outcomes);
        coefficients.push(CoefficientSensitivity {
            coefficient: name,
            base_value,
            outcomes,
            score,
            score_std,
        });
    }

    coefficients.sort_by(|a, b| b.score.total_cmp(&a.score));

    Ok(SensitivityReport {
        target_year,
        base_maintenance_usd: base_cost,
        coefficients,
    })
}

fn maintenance_cost(
    aircraft: &AircraftSpec,
    config: &MethodConfig,
    target_year: i32,
) -> Result<f64, AnalysisError> {
    Ok(analyze(aircraft, config, target_year)?.per_flight.maintenance)
}

fn score(outcomes: &[PerturbationOutcome]) -> (f64, f64) {
    if outcomes.is_empty() {
        return (0.0, 0.0);
    }
    let scores: Vec<f64> = outcomes
        .iter()
        .map(|o| o.relative_change_pct.abs() / (o.fraction * 100.0).abs() * 10.0)
        .collect();
    let n = scores.len() as f64;
    let mean = scores.iter().sum::<f64>() / n;
    let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}
