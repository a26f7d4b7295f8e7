mod common;

use aircraft_doc::config::MethodConfig;
use aircraft_doc::operating::analyze;
use aircraft_doc::sensitivity::{DEFAULT_PERTURBATIONS, maintenance_sensitivity};

#[test]
fn ranking_covers_every_nonzero_coefficient() {
    let config = MethodConfig::fitted();
    let report = maintenance_sensitivity(&common::erj145(), &config, 2025, &[]).expect("ranking");

    let nonzero = config.maintenance.iter().filter(|(_, v)| *v != 0.0).count();
    assert_eq!(report.coefficients.len(), nonzero);
    assert!(report.coefficients.iter().all(|c| c.outcomes.len() == DEFAULT_PERTURBATIONS.len()));

    let base = analyze(&common::erj145(), &config, 2025).unwrap().per_flight.maintenance;
    assert_eq!(report.base_maintenance_usd, base);

    for pair in report.coefficients.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn scaling_coefficients_rank_high_and_unused_ones_score_zero() {
    let report =
        maintenance_sensitivity(&common::erj145(), &MethodConfig::aea_default(), 2026, &[-0.1, 0.1])
            .unwrap();

    let triple = report
        .coefficients
        .iter()
        .find(|c| c.coefficient == "engine_k4_triple_shaft")
        .expect("triple-shaft k4 is reported");
    assert_eq!(triple.score, 0.0);
    assert_eq!(triple.score_std, 0.0);

    // Airframe labor enters linearly through the time factor.
    let time_base = report
        .coefficients
        .iter()
        .position(|c| c.coefficient == "airframe_labor_time_base_factor")
        .unwrap();
    assert!(time_base < report.coefficients.len() / 2);
    assert!(report.top(3).len() == 3);
    assert!(report.top(100).len() == report.coefficients.len());
}

#[test]
fn outcomes_report_relative_change_in_percent() {
    let report =
        maintenance_sensitivity(&common::erj145(), &MethodConfig::aea_default(), 2026, &[0.2]).unwrap();
    for entry in &report.coefficients {
        let outcome = entry.outcomes[0];
        assert_eq!(outcome.fraction, 0.2);
        let expected = (outcome.maintenance_usd / report.base_maintenance_usd - 1.0) * 100.0;
        assert!((outcome.relative_change_pct - expected).abs() < 1e-9);
        assert!((entry.score - outcome.relative_change_pct.abs() / 2.0).abs() < 1e-9);
    }
}
