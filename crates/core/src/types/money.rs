//! Money helpers.
//!
//! All monetary amounts in Tiffin are [`rust_decimal::Decimal`] values in the
//! store's single display currency. Derived figures (subtotal, tax, total)
//! are rounded to two decimal places at the point they are produced; raw
//! unit prices are stored as given.

use rust_decimal::{Decimal, RoundingStrategy};

/// Sales tax rate applied to every cart subtotal (5%).
#[must_use]
pub fn tax_rate() -> Decimal {
    Decimal::new(5, 2)
}

/// Round a monetary amount to two decimal places.
///
/// Midpoints round away from zero, the convention customers expect on a
/// receipt. The result carries exactly two decimal places so serialized
/// figures always read like prices (`240.00`, not `240.0`).
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_is_five_percent() {
        assert_eq!(tax_rate(), Decimal::new(5, 2));
        assert_eq!(Decimal::from(100) * tax_rate(), Decimal::from(5));
    }

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(round_money(Decimal::new(12345, 3)), Decimal::new(1235, 2));
        assert_eq!(round_money(Decimal::new(125, 3)), Decimal::new(13, 2));
    }

    #[test]
    fn test_round_money_pads_to_two_places() {
        assert_eq!(round_money(Decimal::from(240)).to_string(), "240.00");
        assert_eq!(round_money(Decimal::new(2401, 1)).to_string(), "240.10");
    }
}
