use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Round a currency amount to `precision` decimals, halves away from zero.
///
/// The value is rounded on its shortest decimal rendering, so `9.995`
/// becomes `10.00` even though its binary form sits just below the midpoint.
pub fn to_fixed(value: f64, precision: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    match Decimal::from_str(&value.to_string()) {
        Ok(exact) => exact
            .round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero)
            .to_string()
            .parse::<f64>()
            .unwrap_or(value),
        // Out of Decimal's range: plain float rounding is all that is left.
        Err(_) => {
            let scale = 10f64.powi(precision as i32);
            (value * scale).round() / scale
        }
    }
}

/// Prices and unit prices are always stored with two decimals.
pub fn round_price(value: f64) -> f64 {
    to_fixed(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_price(9.995), 10.00);
        assert_eq!(round_price(9.994), 9.99);
        assert_eq!(round_price(-9.995), -10.00);
        assert_eq!(round_price(0.125), 0.13);
    }

    #[test]
    fn keeps_already_rounded_values() {
        assert_eq!(round_price(5.0), 5.0);
        assert_eq!(round_price(3.5), 3.5);
        assert_eq!(round_price(12.34), 12.34);
    }

    #[test]
    fn other_precisions() {
        assert_eq!(to_fixed(1.2345, 3), 1.235);
        assert_eq!(to_fixed(2.5, 0), 3.0);
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert!(round_price(f64::NAN).is_nan());
        assert_eq!(round_price(f64::INFINITY), f64::INFINITY);
    }
}
