//! Normalization Utilities
//!
//! Converts native quiz/catalog units (dollars, hours, 1-5 ratings) onto a
//! common 0..1 scale so both sides of an attribute comparison line up.
//!
//! Dollar and hour amounts go through piecewise-linear band tables; ratings
//! and ordinal answers map evenly onto 0..1.

/// (native value, normalized value) breakpoints, ascending in both columns
pub type Bands = [(f64, f64)];

/// Monthly income, USD
pub const MONTHLY_INCOME_BANDS: [(f64, f64); 8] = [
    (0.0, 0.0),
    (500.0, 0.15),
    (1_000.0, 0.3),
    (2_500.0, 0.5),
    (5_000.0, 0.65),
    (10_000.0, 0.8),
    (25_000.0, 0.92),
    (50_000.0, 1.0),
];

/// Startup budget / startup cost, USD
pub const INVESTMENT_BANDS: [(f64, f64); 8] = [
    (0.0, 0.0),
    (100.0, 0.1),
    (250.0, 0.2),
    (500.0, 0.35),
    (1_000.0, 0.5),
    (2_500.0, 0.7),
    (5_000.0, 0.85),
    (10_000.0, 1.0),
];

/// Hours per week
pub const WEEKLY_HOURS_BANDS: [(f64, f64); 8] = [
    (0.0, 0.0),
    (5.0, 0.1),
    (10.0, 0.25),
    (15.0, 0.4),
    (20.0, 0.5),
    (30.0, 0.7),
    (40.0, 0.85),
    (60.0, 1.0),
];

/// Band normalize using linear interpolation
///
/// Algorithm:
/// 1. Clamp below the first breakpoint to its value and above the last to its value
/// 2. Find bracketing breakpoints [bi, bi+1] where native[bi] <= raw <= native[bi+1]
/// 3. Linear interpolation between their normalized values
pub fn band_normalize(raw_value: f64, bands: &Bands) -> f64 {
    let Some(&(first_raw, first_norm)) = bands.first() else {
        return 0.0;
    };
    let Some(&(last_raw, last_norm)) = bands.last() else {
        return 0.0;
    };

    // Edge cases
    if raw_value <= first_raw {
        return first_norm;
    }
    if raw_value >= last_raw {
        return last_norm;
    }

    for pair in bands.windows(2) {
        let (lo_raw, lo_norm) = pair[0];
        let (hi_raw, hi_norm) = pair[1];
        if lo_raw <= raw_value && raw_value <= hi_raw {
            let fraction = if hi_raw - lo_raw > 0.0 {
                (raw_value - lo_raw) / (hi_raw - lo_raw)
            } else {
                0.0
            };
            return lo_norm + fraction * (hi_norm - lo_norm);
        }
    }

    // Unreachable for ascending bands
    last_norm
}

/// 1-5 rating onto 0..1
pub fn rating_normalize(rating: u8) -> f64 {
    (f64::from(rating.clamp(1, 5)) - 1.0) / 4.0
}

pub fn normalize_income(usd_per_month: u32) -> f64 {
    band_normalize(f64::from(usd_per_month), &MONTHLY_INCOME_BANDS)
}

pub fn normalize_investment(usd: u32) -> f64 {
    band_normalize(f64::from(usd), &INVESTMENT_BANDS)
}

pub fn normalize_hours(hours_per_week: u32) -> f64 {
    band_normalize(f64::from(hours_per_week), &WEEKLY_HOURS_BANDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_band_normalize_edge_cases() {
        // At or below minimum
        assert_relative_eq!(band_normalize(0.0, &INVESTMENT_BANDS), 0.0, epsilon = 0.0001);
        assert_relative_eq!(band_normalize(-5.0, &INVESTMENT_BANDS), 0.0, epsilon = 0.0001);

        // Above maximum
        assert_relative_eq!(band_normalize(1_000_000.0, &INVESTMENT_BANDS), 1.0, epsilon = 0.0001);

        // Exactly on a breakpoint
        assert_relative_eq!(band_normalize(1_000.0, &INVESTMENT_BANDS), 0.5, epsilon = 0.0001);
    }

    #[test]
    fn test_band_normalize_interpolates() {
        // Halfway between $1,000 (0.5) and $2,500 (0.7)
        assert_relative_eq!(band_normalize(1_750.0, &INVESTMENT_BANDS), 0.6, epsilon = 0.0001);

        // Halfway between 20h (0.5) and 30h (0.7)
        assert_relative_eq!(normalize_hours(25), 0.6, epsilon = 0.0001);
    }

    #[test]
    fn test_band_normalize_is_monotonic() {
        let mut previous = -1.0;
        for usd in (0..60_000).step_by(250) {
            let value = normalize_income(usd);
            assert!(value >= previous, "income normalization decreased at ${}", usd);
            previous = value;
        }
    }

    #[test]
    fn test_rating_normalize() {
        assert_relative_eq!(rating_normalize(1), 0.0);
        assert_relative_eq!(rating_normalize(3), 0.5);
        assert_relative_eq!(rating_normalize(5), 1.0);
        // Out-of-range ratings are clamped rather than extrapolated
        assert_relative_eq!(rating_normalize(9), 1.0);
    }

    #[test]
    fn test_empty_bands() {
        assert_eq!(band_normalize(42.0, &[]), 0.0);
    }
}
