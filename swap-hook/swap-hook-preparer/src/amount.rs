//! Conversion of human-readable token amounts into smallest units

use alloy_primitives::U256;

use crate::error::SwapPreparationError;

/// The error message emitted for a malformed amount
const ERR_MALFORMED_AMOUNT: &str = "expected an unsigned decimal amount";
/// The error message emitted when an amount does not fit in 256 bits
const ERR_AMOUNT_OVERFLOW: &str = "amount overflows 256 bits";

/// Convert a decimal amount string into the token's smallest unit
///
/// Fractional digits beyond `decimals` are rounded half-up, so
/// `("1.25", 1)` becomes `13`
pub fn parse_token_amount(amount: &str, decimals: u8) -> Result<U256, SwapPreparationError> {
    let amount = amount.trim();
    let (integer, fraction) = amount.split_once('.').unwrap_or((amount, ""));

    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (integer.is_empty() && fraction.is_empty()) || !is_digits(integer) || !is_digits(fraction) {
        return Err(SwapPreparationError::invalid_amount(format!(
            "{ERR_MALFORMED_AMOUNT}, got {amount:?}"
        )));
    }

    let decimals = decimals as usize;
    let (kept, dropped) = fraction.split_at(fraction.len().min(decimals));
    let round_up = dropped.bytes().next().is_some_and(|b| b >= b'5');

    let digits = format!("{integer}{kept:0<decimals$}");
    let value = if digits.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(&digits, 10)
            .map_err(|_| SwapPreparationError::invalid_amount(ERR_AMOUNT_OVERFLOW))?
    };

    if round_up {
        value
            .checked_add(U256::from(1u8))
            .ok_or_else(|| SwapPreparationError::invalid_amount(ERR_AMOUNT_OVERFLOW))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use rand::{thread_rng, Rng};

    use super::*;

    #[test]
    fn test_whole_amount() {
        let amount = parse_token_amount("100", 18).unwrap();
        assert_eq!(amount, U256::from(100u64) * U256::from(10u64).pow(U256::from(18u64)));
    }

    #[test]
    fn test_fractional_amount() {
        assert_eq!(parse_token_amount("12.5", 6).unwrap(), U256::from(12_500_000u64));
        assert_eq!(parse_token_amount(".5", 2).unwrap(), U256::from(50u64));
        assert_eq!(parse_token_amount("7.", 2).unwrap(), U256::from(700u64));
        assert_eq!(parse_token_amount("0.000001", 6).unwrap(), U256::from(1u64));
    }

    #[test]
    fn test_excess_precision_rounds_half_up() {
        assert_eq!(parse_token_amount("1.25", 1).unwrap(), U256::from(13u64));
        assert_eq!(parse_token_amount("1.24999", 1).unwrap(), U256::from(12u64));
        assert_eq!(parse_token_amount("0.5", 0).unwrap(), U256::from(1u64));
        assert_eq!(parse_token_amount(".4", 0).unwrap(), U256::ZERO);
    }

    #[test]
    fn test_malformed_amounts() {
        for amount in ["", ".", "-1", "+1", "1.2.3", "1e18", "abc", "1,000"] {
            let err = parse_token_amount(amount, 18).unwrap_err();
            assert!(
                matches!(err, SwapPreparationError::InvalidAmount(_)),
                "{amount:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_overflow() {
        let too_large = "1".repeat(80);
        assert!(parse_token_amount(&too_large, 0).is_err());
    }

    /// Random whole amounts scale by exactly `10^decimals`
    #[test]
    fn test_random_amounts() {
        let mut rng = thread_rng();
        let whole: u64 = rng.gen();
        let decimals: u8 = rng.gen_range(0..=18);

        let expected = U256::from(whole) * U256::from(10u64).pow(U256::from(decimals));
        assert_eq!(parse_token_amount(&whole.to_string(), decimals).unwrap(), expected);
    }
}
