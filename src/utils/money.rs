//! Money rounding and conversion helpers

use bigdecimal::rounding::RoundingMode;
use bigdecimal::BigDecimal;

/// Round a monetary amount to two decimal places, half-up
///
/// Applied at every calculation boundary so that figures shown to the
/// user and figures persisted to history agree to the kuruş.
pub fn round_currency(amount: &BigDecimal) -> BigDecimal {
    amount.with_scale_round(2, RoundingMode::HalfUp)
}

/// Build a fractional rate from hundredths (15 -> 0.15)
///
/// Keeps bracket tables free of string parsing.
pub fn rate_from_percent(percent: i64) -> BigDecimal {
    BigDecimal::from(percent) / BigDecimal::from(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_currency_half_up() {
        let value: BigDecimal = "19166.665".parse().unwrap();
        assert_eq!(round_currency(&value), "19166.67".parse::<BigDecimal>().unwrap());

        let down: BigDecimal = "1666.664".parse().unwrap();
        assert_eq!(round_currency(&down), "1666.66".parse::<BigDecimal>().unwrap());
    }

    #[test]
    fn test_rate_from_percent() {
        assert_eq!(rate_from_percent(15), "0.15".parse::<BigDecimal>().unwrap());
        assert_eq!(rate_from_percent(40), "0.4".parse::<BigDecimal>().unwrap());
    }
}
