//! Full-precision `a × b ÷ d` on `u128` operands.
//!
//! Reserves of 18-decimal assets routinely exceed `2^64`, so products of
//! two reserves do not fit in `u128`.  Intermediates are widened to 256
//! bits and only the final quotient is narrowed back, which keeps every
//! formula to a single rounding step.

use crate::domain::Rounding;
use crate::error::AmmError;

mod wide {
    #![allow(clippy::all, clippy::pedantic, missing_docs)]

    use uint::construct_uint;

    construct_uint! {
        /// 256-bit unsigned integer for intermediate products.
        pub struct U256(4);
    }
}

use wide::U256;

fn narrow(value: U256, what: &'static str) -> Result<u128, AmmError> {
    if value.bits() > 128 {
        return Err(AmmError::Overflow(what));
    }
    Ok(value.low_u128())
}

/// Computes `a × b ÷ denominator` with one rounding step.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Rounding;
/// use pairswap::math::mul_div;
///
/// // 10^30 × 10^30 overflows u128, the quotient does not.
/// let e30 = 10u128.pow(30);
/// assert_eq!(mul_div(e30, e30, e30, Rounding::Down), Ok(e30));
/// assert_eq!(mul_div(10, 1, 3, Rounding::Up), Ok(4));
/// ```
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Result<u128, AmmError> {
    if denominator == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let product = U256::from(a)
        .checked_mul(U256::from(b))
        .ok_or(AmmError::Overflow("mul_div product overflow"))?;
    let (quotient, remainder) = product.div_mod(U256::from(denominator));
    let quotient = if rounding.is_up() && !remainder.is_zero() {
        quotient
            .checked_add(U256::one())
            .ok_or(AmmError::Overflow("mul_div rounding overflow"))?
    } else {
        quotient
    };
    narrow(quotient, "mul_div quotient exceeds u128")
}

/// Integer square root of `a × b`, rounded down.
///
/// The result always fits in `u128` because `√(a·b) ≤ max(a, b)`.
#[must_use]
pub fn sqrt_of_product(a: u128, b: u128) -> u128 {
    let root = wide_product(a, b).integer_sqrt();
    root.low_u128()
}

/// Exact product `a × b` as `(high word, low word)`.
///
/// Tuples compare lexicographically, so two results order the same way
/// as the 256-bit products they encode.
#[must_use]
pub fn widening_mul(a: u128, b: u128) -> (u128, u128) {
    let product = wide_product(a, b);
    ((product >> 128).low_u128(), product.low_u128())
}

fn wide_product(a: u128, b: u128) -> U256 {
    // A product of two u128 values never exceeds 256 bits.
    let (product, _) = U256::from(a).overflowing_mul(U256::from(b));
    product
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn mul_div_small_values() {
        assert_eq!(mul_div(100, 20_000, 10_100, Rounding::Down), Ok(198));
        assert_eq!(mul_div(100, 20_000, 10_100, Rounding::Up), Ok(199));
        assert_eq!(mul_div(9, 1, 3, Rounding::Up), Ok(3));
    }

    #[test]
    fn mul_div_wide_intermediate() {
        let a = u128::MAX;
        let b = u128::MAX;
        assert_eq!(mul_div(a, b, u128::MAX, Rounding::Down), Ok(u128::MAX));
    }

    #[test]
    fn mul_div_eighteen_decimal_reserves() {
        let wad = 10u128.pow(18);
        let amount_in = 100 * wad;
        let reserve_in = 10_000 * wad;
        let reserve_out = 20_000 * wad;
        let Ok(out) = mul_div(amount_in, reserve_out, reserve_in + amount_in, Rounding::Down)
        else {
            panic!("expected Ok");
        };
        // 100 * 20_000 / 10_100 = 198.0198...
        assert_eq!(out / wad, 198);
        assert!(out < reserve_out);
    }

    #[test]
    fn mul_div_zero_denominator() {
        assert_eq!(mul_div(1, 1, 0, Rounding::Down), Err(AmmError::DivisionByZero));
    }

    #[test]
    fn mul_div_quotient_overflow() {
        let Err(AmmError::Overflow(_)) = mul_div(u128::MAX, 2, 1, Rounding::Down) else {
            panic!("expected Overflow");
        };
    }

    #[test]
    fn sqrt_of_product_values() {
        assert_eq!(sqrt_of_product(0, 5), 0);
        assert_eq!(sqrt_of_product(4, 9), 6);
        assert_eq!(sqrt_of_product(2, 3), 2);
        assert_eq!(sqrt_of_product(u128::MAX, u128::MAX), u128::MAX);
    }

    #[test]
    fn widening_mul_splits_words() {
        assert_eq!(widening_mul(10_000, 20_000), (0, 200_000_000));
        assert_eq!(widening_mul(u128::MAX, 2), (1, u128::MAX - 1));
        assert_eq!(widening_mul(u128::MAX, u128::MAX), (u128::MAX - 1, 1));
    }
}
