//! Swap amount generation and base-unit conversion

use alloy::primitives::U256;
use rand::Rng;
use rust_decimal::prelude::*;
use std::str::FromStr;

use crate::config::{AMOUNT_DECIMALS, MAX_SWAP_AMOUNT, MIN_SWAP_AMOUNT};
use crate::utils::pow10;

/// Uniform random amount in [`MIN_SWAP_AMOUNT`, `MAX_SWAP_AMOUNT`], rounded
/// to [`AMOUNT_DECIMALS`] places.
pub fn generate_swap_amount() -> Decimal {
    let min = MIN_SWAP_AMOUNT.to_f64().unwrap_or(0.0001);
    let max = MAX_SWAP_AMOUNT.to_f64().unwrap_or(0.0002);
    let raw = rand::rng().random_range(min..=max);

    Decimal::from_f64(raw)
        .unwrap_or(MIN_SWAP_AMOUNT)
        .round_dp(AMOUNT_DECIMALS)
        .clamp(MIN_SWAP_AMOUNT, MAX_SWAP_AMOUNT)
}

/// Scale a human-readable amount to integer base units.
pub fn to_base_units(amount: Decimal, decimals: u32) -> U256 {
    let scaled = (amount * pow10(decimals as i32)).trunc();
    U256::from(scaled.to_u128().unwrap_or(0))
}

/// Scale integer base units back to a human-readable amount, for display.
pub fn from_base_units(value: U256, decimals: u32) -> Decimal {
    Decimal::from_str(&value.to_string()).unwrap_or(Decimal::ZERO) / pow10(decimals as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn generated_amounts_stay_in_bounds() {
        for _ in 0..1000 {
            let amount = generate_swap_amount();
            assert!(amount >= MIN_SWAP_AMOUNT, "below bound: {}", amount);
            assert!(amount <= MAX_SWAP_AMOUNT, "above bound: {}", amount);
            assert!(amount.scale() <= AMOUNT_DECIMALS, "too precise: {}", amount);
        }
    }

    #[test]
    fn base_unit_conversion_is_exact_at_six_decimals() {
        assert_eq!(to_base_units(dec!(0.0001), 6), U256::from(100u64));
        assert_eq!(to_base_units(dec!(0.000150), 6), U256::from(150u64));
        assert_eq!(to_base_units(dec!(0.0002), 6), U256::from(200u64));
    }

    #[test]
    fn from_base_units_inverts_small_amounts() {
        assert_eq!(from_base_units(U256::from(150u64), 6), dec!(0.00015));
        assert_eq!(
            from_base_units(U256::from(1_000_000_000_000_000_000u128), 18),
            dec!(1)
        );
    }

    proptest! {
        #[test]
        fn round_trip_preserves_six_decimal_amounts(units in 100u64..=200u64) {
            let amount = from_base_units(U256::from(units), 6);
            prop_assert_eq!(to_base_units(amount, 6), U256::from(units));
        }
    }
}
