use rust_decimal::Decimal;

/// Fraction digits kept on every stored or reported money amount.
pub const MONEY_DP: u32 = 2;

/// Round a money amount to the canonical scale.
///
/// Uses banker's rounding, so exact midpoints go to the nearest even digit.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp(MONEY_DP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_two_fraction_digits() {
        assert_eq!(round_money(Decimal::new(123456, 3)), Decimal::new(12346, 2));
        assert_eq!(round_money(Decimal::new(991, 1)), Decimal::new(9910, 2));
    }

    #[test]
    fn test_two_digit_amounts_pass_through() {
        let amount = Decimal::new(22550, 2);
        assert_eq!(round_money(amount), amount);
    }

    #[test]
    fn test_midpoints_round_half_even() {
        // 0.125 -> 0.12, 0.135 -> 0.14
        assert_eq!(round_money(Decimal::new(125, 3)), Decimal::new(12, 2));
        assert_eq!(round_money(Decimal::new(135, 3)), Decimal::new(14, 2));
    }
}
