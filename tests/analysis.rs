mod common;

use aircraft_doc::aircraft::{AircraftError, AircraftSpec, EngineSpec, Utilization, Weights};
use aircraft_doc::config::{ConfigError, InterestModel, MethodConfig};
use aircraft_doc::operating::fixed::{annuity_average_rate, depreciation, insurance, interest};
use aircraft_doc::operating::{AnalysisError, analyze, analyze_default_year};
use approx::assert_relative_eq;

#[test]
fn concrete_regional_jet_scenario() {
    let result = analyze(&common::erj145(), &MethodConfig::aea_default(), 2025).expect("analysis");

    let engine = result.pricing.engine_price_usd;
    assert!((1.0e6..5.0e6).contains(&engine), "engine price {engine}");

    let doc = result.per_flight.total;
    assert!(doc.is_finite() && doc > 0.0);
    assert!((1_000.0..10_000.0).contains(&doc), "DOC per flight {doc}");

    for (category, value) in result.per_flight.categories() {
        assert!(value.is_finite() && value > 0.0, "{category} = {value}");
    }
}

#[test]
fn views_are_consistent() {
    let aircraft = common::erj145();
    let result = analyze(&aircraft, &MethodConfig::fitted(), 2026).expect("analysis");
    let flights = aircraft.utilization.flights_per_year as f64;
    let block = aircraft.utilization.block_time_hours;

    for view in [&result.annual, &result.per_flight, &result.per_hour] {
        let sum: f64 = view.categories().iter().map(|(_, v)| v).sum();
        assert_relative_eq!(view.total, sum, max_relative = 1e-9);
    }
    assert_relative_eq!(result.annual.total, result.per_flight.total * flights, max_relative = 1e-9);
    assert_relative_eq!(result.per_flight.total, result.per_hour.total * block, max_relative = 1e-9);
    assert_eq!(result.per_flight.maintenance, result.maintenance.total_usd);
}

#[test]
fn repeated_calls_are_identical() {
    let aircraft = common::erj145();
    let config = MethodConfig::aea_default();
    let first = analyze(&aircraft, &config, 2026).unwrap();
    let _other = analyze(&common::with_prices(30.0e6, 4.0e6), &MethodConfig::fitted(), 2000).unwrap();
    let second = analyze(&aircraft, &config, 2026).unwrap();
    assert_eq!(first, second);
    assert_eq!(analyze_default_year(&aircraft, &config).unwrap(), first);
}

#[test]
fn fixed_costs_ignore_utilization() {
    let config = MethodConfig::aea_default();
    let base = common::erj145();
    let busier = AircraftSpec {
        utilization: Utilization {
            flights_per_year: 3000,
            ..base.utilization
        },
        ..base
    };
    let a = analyze(&base, &config, 2026).unwrap();
    let b = analyze(&busier, &config, 2026).unwrap();
    assert_eq!(a.fixed, b.fixed);
    assert_eq!(a.annual.depreciation, b.annual.depreciation);
    assert_relative_eq!(a.per_flight.depreciation, 2.0 * b.per_flight.depreciation, max_relative = 1e-12);
    assert_eq!(a.per_flight.fuel, b.per_flight.fuel);
}

#[test]
fn capital_costs_follow_financing_terms() {
    let config = MethodConfig::aea_default();
    let purchase = 16.0e6;
    assert_relative_eq!(depreciation(purchase, &config), 16.0e6 * 0.9 / 16.0, max_relative = 1e-12);
    assert_relative_eq!(
        interest(purchase, &config),
        16.0e6 * 0.9 * 0.08 * 17.0 / 32.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(insurance(10.0e6, &config), 50_000.0, max_relative = 1e-12);
}

#[test]
fn interest_models_differ_by_balloon_treatment() {
    let mut config = MethodConfig::aea_default();
    let purchase = 16.0e6;
    let average = interest(purchase, &config);

    config.financing.model = InterestModel::AverageBalanceWithBalloon;
    let with_balloon = interest(purchase, &config);
    assert_relative_eq!(with_balloon - average, purchase * 0.1 * 0.08, max_relative = 1e-9);

    config.financing.model = InterestModel::AeaAnnuity;
    let annuity = interest(purchase, &config);
    assert!(annuity > 0.0 && annuity.is_finite());
}

#[test]
fn annuity_rate_vanishes_without_interest() {
    assert_relative_eq!(annuity_average_rate(0.0, 16, 0.1, 16), 0.0, epsilon = 1e-15);
    let q: f64 = 1.08;
    let qn = q.powi(16);
    let expected = (qn - 0.1) * (q - 1.0) / (qn - 1.0) - 0.9 / 16.0;
    assert_relative_eq!(annuity_average_rate(0.08, 16, 0.1, 16), expected, max_relative = 1e-12);
}

#[test]
fn crew_and_fees_inflate_from_1989() {
    let config = MethodConfig::aea_default();
    let aircraft = common::erj145();
    let result = analyze(&aircraft, &config, 2026).unwrap();
    let k = 1.013_f64.powi(2026 - 1989);

    assert_relative_eq!(result.per_flight.crew, 2.33 * 2.0 * 147.5 * k, max_relative = 1e-12);
    let fees = k
        * (0.0078 / 15.0 * 21_996.0
            + 0.00414 / 15.0 * 654.0 * 21_996.0_f64.sqrt()
            + 0.10 / 15.0 * 3_800.0);
    assert_relative_eq!(result.per_flight.fees_and_charges, fees, max_relative = 1e-12);
    assert_relative_eq!(result.per_flight.fuel, 1_731.0 * 0.888 * 0.7, max_relative = 1e-12);
}

#[test]
fn invalid_aircraft_names_the_field() {
    let base = common::erj145();
    let bad = AircraftSpec {
        weights: Weights {
            operational_empty_kg: 0.0,
            ..base.weights
        },
        ..base
    };
    let err = analyze(&bad, &MethodConfig::aea_default(), 2026).unwrap_err();
    match err {
        AnalysisError::Aircraft(AircraftError::NonPositive { field, .. }) => {
            assert_eq!(field, "weights.operational_empty_kg");
        }
        other => panic!("unexpected error: {other}"),
    }

    let no_flights = AircraftSpec {
        utilization: Utilization {
            flights_per_year: 0,
            ..base.utilization
        },
        ..base
    };
    assert!(matches!(
        analyze(&no_flights, &MethodConfig::aea_default(), 2026),
        Err(AnalysisError::Aircraft(AircraftError::ZeroCount {
            field: "utilization.flights_per_year"
        }))
    ));

    let nan_block = AircraftSpec {
        utilization: Utilization {
            block_time_hours: f64::NAN,
            ..base.utilization
        },
        ..base
    };
    assert!(analyze(&nan_block, &MethodConfig::aea_default(), 2026).is_err());
}

fn rejected_field(aircraft: &AircraftSpec) -> &'static str {
    match analyze(aircraft, &MethodConfig::aea_default(), 2026) {
        Err(AnalysisError::Aircraft(
            AircraftError::NonPositive { field, .. }
            | AircraftError::Negative { field, .. }
            | AircraftError::ZeroCount { field },
        )) => field,
        other => panic!("expected a rejected aircraft field, got {other:?}"),
    }
}

#[test]
fn out_of_range_fields_are_rejected_by_name() {
    let base = common::erj145();

    let no_engines = AircraftSpec {
        engine: EngineSpec {
            count: 0,
            ..base.engine
        },
        ..base
    };
    assert_eq!(rejected_field(&no_engines), "engine.count");

    for block in [0.0, -2.33] {
        let aircraft = AircraftSpec {
            utilization: Utilization {
                block_time_hours: block,
                ..base.utilization
            },
            ..base
        };
        assert_eq!(rejected_field(&aircraft), "utilization.block_time_hours");
    }

    for thrust in [0.0, -39_670.0] {
        let aircraft = AircraftSpec {
            engine: EngineSpec {
                takeoff_thrust_per_engine_n: thrust,
                ..base.engine
            },
            ..base
        };
        assert_eq!(rejected_field(&aircraft), "engine.takeoff_thrust_per_engine_n");
    }

    for range in [0.0, -654.0] {
        let aircraft = AircraftSpec {
            range_nm: range,
            ..base
        };
        assert_eq!(rejected_field(&aircraft), "range_nm");
    }

    let negative_bpr = AircraftSpec {
        engine: EngineSpec {
            bypass_ratio: -1.0,
            ..base.engine
        },
        ..base
    };
    assert_eq!(rejected_field(&negative_bpr), "engine.bypass_ratio");
}

#[test]
fn fitted_coefficient_override_touches_only_maintenance() {
    let aircraft = common::erj145();
    let fitted = MethodConfig::fitted();
    let tuned = fitted.with_maintenance(
        fitted
            .maintenance
            .with("airframe_labor_base_hours", 10.0)
            .unwrap(),
    );

    let base = analyze(&aircraft, &fitted, 2026).unwrap();
    let changed = analyze(&aircraft, &tuned, 2026).unwrap();

    assert_ne!(changed.per_flight.maintenance, base.per_flight.maintenance);
    assert_eq!(changed.pricing, base.pricing);
    assert_eq!(changed.fixed, base.fixed);
    assert_eq!(changed.variable, base.variable);
    for (before, after) in [
        (&base.annual, &changed.annual),
        (&base.per_flight, &changed.per_flight),
        (&base.per_hour, &changed.per_hour),
    ] {
        assert_eq!(after.depreciation, before.depreciation);
        assert_eq!(after.interest, before.interest);
        assert_eq!(after.insurance, before.insurance);
        assert_eq!(after.fuel, before.fuel);
        assert_eq!(after.crew, before.crew);
        assert_eq!(after.fees_and_charges, before.fees_and_charges);
        assert_ne!(after.maintenance, before.maintenance);
    }
}

#[test]
fn invalid_method_config_names_the_field() {
    let mut config = MethodConfig::aea_default();
    config.depreciation.period_years = 0;
    match analyze(&common::erj145(), &config, 2026) {
        Err(AnalysisError::Method(ConfigError::Invalid { field, .. })) => {
            assert_eq!(field, "depreciation.period_years");
        }
        other => panic!("expected invalid method config, got {other:?}"),
    }

    let config = MethodConfig::aea_default()
        .with_maintenance(MethodConfig::aea_default().maintenance.with("engine_k1_base", f64::INFINITY).unwrap());
    assert!(matches!(
        analyze(&common::erj145(), &config, 2026),
        Err(AnalysisError::Method(ConfigError::Invalid { .. }))
    ));
}

#[test]
fn analysis_result_serializes_to_json() {
    let result = analyze(&common::erj145(), &MethodConfig::aea_default(), 2026).unwrap();
    let value = serde_json::to_value(&result).expect("json");
    assert_eq!(value["target_year"], 2026);
    assert!(value["per_flight"]["total"].as_f64().unwrap() > 0.0);
    assert!(value["maintenance"]["engines"]["labor_hours"].is_number());
}
