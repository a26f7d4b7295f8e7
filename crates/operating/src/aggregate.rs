//! Combination of cost categories into annual, per-flight, and per-hour views.

use serde::Serialize;

use crate::fixed::FixedCosts;
use crate::variable::VariableCosts;

/// The seven DOC categories of one view plus their sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub depreciation: f64,
    pub interest: f64,
    pub insurance: f64,
    pub fuel: f64,
    pub maintenance: f64,
    pub crew: f64,
    pub fees_and_charges: f64,
    pub total: f64,
}

impl CostBreakdown {
    /// Build a breakdown; `total` is always the sum of the categories.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        depreciation: f64,
        interest: f64,
        insurance: f64,
        fuel: f64,
        maintenance: f64,
        crew: f64,
        fees_and_charges: f64,
    ) -> Self {
        Self {
            depreciation,
            interest,
            insurance,
            fuel,
            maintenance,
            crew,
            fees_and_charges,
            total: depreciation
                + interest
                + insurance
                + fuel
                + maintenance
                + crew
                + fees_and_charges,
        }
    }

    /// `(category, value)` pairs in report order, without the total.
    pub fn categories(&self) -> [(&'static str, f64); 7] {
        [
            ("depreciation", self.depreciation),
            ("interest", self.interest),
            ("insurance", self.insurance),
            ("fuel", self.fuel),
            ("maintenance", self.maintenance),
            ("crew", self.crew),
            ("fees_and_charges", self.fees_and_charges),
        ]
    }

    /// Divide every category by `divisor`, recomputing the total.
    pub fn scaled_down(&self, divisor: f64) -> Self {
        Self::new(
            self.depreciation / divisor,
            self.interest / divisor,
            self.insurance / divisor,
            self.fuel / divisor,
            self.maintenance / divisor,
            self.crew / divisor,
            self.fees_and_charges / divisor,
        )
    }
}

/// Annual, per-flight, and per-block-hour views of the same costs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostViews {
    pub annual: CostBreakdown,
    pub per_flight: CostBreakdown,
    pub per_hour: CostBreakdown,
}

pub fn aggregate(
    fixed: &FixedCosts,
    variable: &VariableCosts,
    maintenance_per_flight_usd: f64,
    flights_per_year: u32,
    block_time_hours: f64,
) -> CostViews {
    let flights = flights_per_year as f64;
    let fees = variable.fees_and_charges_usd();

    let annual = CostBreakdown::new(
        fixed.depreciation_usd,
        fixed.interest_usd,
        fixed.insurance_usd,
        variable.fuel_usd * flights,
        maintenance_per_flight_usd * flights,
        variable.crew_usd * flights,
        fees * flights,
    );
    let per_flight = CostBreakdown::new(
        fixed.depreciation_usd / flights,
        fixed.interest_usd / flights,
        fixed.insurance_usd / flights,
        variable.fuel_usd,
        maintenance_per_flight_usd,
        variable.crew_usd,
        fees,
    );
    let per_hour = per_flight.scaled_down(block_time_hours);

    CostViews {
        annual,
        per_flight,
        per_hour,
    }
}
