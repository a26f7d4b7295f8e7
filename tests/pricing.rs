mod common;

use aircraft_doc::config::MethodConfig;
use aircraft_doc::pricing::{
    DELIVERY_BRANCH_OEW_KG, estimate_delivery_price, estimate_engine_price, resolve,
};
use approx::assert_relative_eq;

#[test]
fn engine_price_follows_thrust_correlation() {
    assert_relative_eq!(
        estimate_engine_price(39_670.0),
        293.0 * 39_670.0_f64.powf(0.81),
        max_relative = 1e-12
    );
    assert!(estimate_engine_price(61_300.0) > estimate_engine_price(39_670.0));
}

#[test]
fn estimated_engine_price_is_inflated_from_1999() {
    let config = MethodConfig::aea_default();
    let pricing = resolve(&common::erj145(), &config, 2025);
    let expected = estimate_engine_price(39_670.0) * 1.013_f64.powi(26);
    assert_relative_eq!(pricing.engine_price_usd, expected, max_relative = 1e-12);
    assert!(
        (1.0e6..5.0e6).contains(&pricing.engine_price_usd),
        "engine price {}",
        pricing.engine_price_usd
    );
}

#[test]
fn delivery_boundary_uses_linear_branch() {
    assert_eq!(DELIVERY_BRANCH_OEW_KG, 10_000.0);
    assert_relative_eq!(estimate_delivery_price(10_000.0), 8_600_000.0, max_relative = 1e-12);
    // The quadratic fit just below the boundary sits well above the linear branch.
    let below = estimate_delivery_price(9_999.0);
    let expected = -0.002695 * 9_999.0_f64.powi(2) + 1967.0 * 9_999.0 - 2_158_000.0;
    assert_relative_eq!(below, expected, max_relative = 1e-12);
    assert!(below > estimate_delivery_price(10_000.0));
}

#[test]
fn estimated_delivery_price_is_inflated_from_2010() {
    let config = MethodConfig::aea_default();
    let pricing = resolve(&common::erj145(), &config, 2026);
    let expected = 860.0 * 12_495.0 * 1.013_f64.powi(16);
    assert_relative_eq!(pricing.delivery_price_usd, expected, max_relative = 1e-12);
}

#[test]
fn supplied_prices_bypass_estimation_and_inflation() {
    let config = MethodConfig::aea_default();
    let aircraft = common::with_prices(20.0e6, 3.0e6);
    for year in [1995, 2010, 2026, 2040] {
        let pricing = resolve(&aircraft, &config, year);
        assert_eq!(pricing.engine_price_usd, 3.0e6);
        assert_eq!(pricing.delivery_price_usd, 20.0e6);
        assert_eq!(pricing.airframe_price_usd, 14.0e6);
    }
}

#[test]
fn spares_and_purchase_price_compose() {
    let config = MethodConfig::aea_default();
    let pricing = resolve(&common::with_prices(20.0e6, 3.0e6), &config, 2026);
    let spares = 0.1 * 14.0e6 + 0.3 * 2.0 * 3.0e6;
    assert_relative_eq!(pricing.spares_price_usd, spares, max_relative = 1e-12);
    assert_relative_eq!(pricing.purchase_price_usd, 20.0e6 + spares, max_relative = 1e-12);
}

#[test]
fn negative_airframe_price_is_not_clamped() {
    let config = MethodConfig::aea_default();
    let pricing = resolve(&common::with_prices(1.0e6, 3.0e6), &config, 2026);
    assert_eq!(pricing.airframe_price_usd, -5.0e6);
}
