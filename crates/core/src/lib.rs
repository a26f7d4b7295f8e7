//! Core units, constants, and shared primitives for the AEA direct operating cost workspace.

/// Reference years and defaults of the AEA 1989a/b method (unless stated otherwise).
pub mod constants {
    /// Base year of the AEA 1989 labor rate, fee factors, and engine material correlation.
    pub const AEA_BASE_YEAR: i32 = 1989;
    /// Base year of the thrust-based engine price correlation.
    pub const ENGINE_PRICE_BASE_YEAR: i32 = 1999;
    /// Base year of the OEW-based delivery price correlation.
    pub const DELIVERY_PRICE_BASE_YEAR: i32 = 2010;
    /// Target year used when the caller does not specify one.
    pub const DEFAULT_TARGET_YEAR: i32 = 2026;
    /// Pounds per kilogram, as used by manufacturer data sheets.
    pub const LB_PER_KG: f64 = 2.205;
    /// Seconds per hour.
    pub const SECONDS_PER_HOUR: f64 = 3_600.0;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::LB_PER_KG;

    /// Convert pounds to kilograms.
    #[inline]
    pub fn lb_to_kg(v: f64) -> f64 {
        v / LB_PER_KG
    }

    /// Convert kilograms to pounds.
    #[inline]
    pub fn kg_to_lb(v: f64) -> f64 {
        v * LB_PER_KG
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::SECONDS_PER_HOUR;

    /// Convert seconds to hours.
    #[inline]
    pub fn seconds_to_hours(seconds: f64) -> f64 {
        seconds / SECONDS_PER_HOUR
    }

    /// Parse an `H:MM:SS` (or `H:MM`) clock duration into decimal hours.
    ///
    /// Returns `None` when the string is not a clock duration or minutes/seconds are out of range.
    pub fn parse_clock_hours(text: &str) -> Option<f64> {
        let mut parts = text.trim().split(':');
        let hours: u32 = parts.next()?.trim().parse().ok()?;
        let minutes: u32 = parts.next()?.trim().parse().ok()?;
        let seconds: u32 = match parts.next() {
            Some(s) => s.trim().parse().ok()?,
            None => 0,
        };
        if parts.next().is_some() || minutes >= 60 || seconds >= 60 {
            return None;
        }
        Some(hours as f64 + minutes as f64 / 60.0 + seconds_to_hours(seconds as f64))
    }
}

/// Compound-growth normalization of monetary amounts between calendar years.
pub mod inflation {
    /// Multiplier that carries an amount from `base_year` to `target_year`.
    ///
    /// `target_year` may precede `base_year`, in which case the factor deflates. Spans wider
    /// than `i32` saturate to zero or infinity instead of overflowing.
    #[inline]
    pub fn factor(base_year: i32, target_year: i32, annual_rate: f64) -> f64 {
        let years = i64::from(target_year) - i64::from(base_year);
        match i32::try_from(years) {
            Ok(n) => (1.0 + annual_rate).powi(n),
            Err(_) => (1.0 + annual_rate).powf(years as f64),
        }
    }

    /// Scale `amount`, anchored at `base_year`, to `target_year` with a compounding annual rate.
    #[inline]
    pub fn adjust(amount: f64, base_year: i32, target_year: i32, annual_rate: f64) -> f64 {
        amount * factor(base_year, target_year, annual_rate)
    }
}
