//! Pure constant-product pricing functions.
//!
//! No fees are charged, so the exact-in output for `x × y = k` is
//!
//! ```text
//! amount_out = ⌊amount_in × reserve_out / (reserve_in + amount_in)⌋
//! ```
//!
//! and the exact-out input is its ceiling inverse.  All products go
//! through [`mul_div`], so 18-decimal reserves never overflow an
//! intermediate.

use super::{mul_div, CheckedArithmetic};
use crate::domain::{Amount, Price, Rounding};
use crate::error::AmmError;

/// Output of an exact-in swap against `(reserve_in, reserve_out)`.
///
/// The result is non-decreasing in `amount_in` and always strictly less
/// than `reserve_out`.
///
/// # Errors
///
/// - [`AmmError::InsufficientInputAmount`] if `amount_in` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
/// - [`AmmError::Overflow`] if `reserve_in + amount_in` exceeds `u128`.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Amount;
/// use pairswap::math::quote_output;
///
/// let out = quote_output(Amount::new(100), Amount::new(10_000), Amount::new(20_000));
/// assert_eq!(out, Ok(Amount::new(198)));
/// ```
pub fn quote_output(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<Amount, AmmError> {
    if amount_in.is_zero() {
        return Err(AmmError::InsufficientInputAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    let denominator = reserve_in.safe_add(&amount_in)?;
    mul_div(
        amount_in.get(),
        reserve_out.get(),
        denominator.get(),
        Rounding::Down,
    )
    .map(Amount::new)
}

/// Smallest input whose [`quote_output`] is at least `amount_out`.
///
/// `amount_in = ⌈reserve_in × amount_out / (reserve_out − amount_out)⌉`
///
/// # Errors
///
/// - [`AmmError::InsufficientOutputAmount`] if `amount_out` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero or
///   `amount_out >= reserve_out`.
/// - [`AmmError::Overflow`] if the required input exceeds `u128`.
pub fn quote_input(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<Amount, AmmError> {
    if amount_out.is_zero() {
        return Err(AmmError::InsufficientOutputAmount(
            "requested output must be positive",
        ));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() || amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }
    let remaining = reserve_out.safe_sub(&amount_out)?;
    mul_div(
        reserve_in.get(),
        amount_out.get(),
        remaining.get(),
        Rounding::Up,
    )
    .map(Amount::new)
}

/// Price of one unit of the `reserve_of` asset in units of the
/// `reserve_against` asset, scaled by `10^18` and rounded down.
///
/// # Errors
///
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
/// - [`AmmError::Overflow`] if the scaled price exceeds `u128`.
pub fn spot_price(reserve_of: Amount, reserve_against: Amount) -> Result<Price, AmmError> {
    if reserve_of.is_zero() || reserve_against.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    mul_div(
        reserve_against.get(),
        Price::SCALE,
        reserve_of.get(),
        Rounding::Down,
    )
    .map(Price::from_raw)
}

/// Amount of `y` matching `amount_x` at the current reserve ratio,
/// rounded down.
///
/// # Errors
///
/// - [`AmmError::InsufficientAmount`] if `amount_x` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
pub fn quote(amount_x: Amount, reserve_x: Amount, reserve_y: Amount) -> Result<Amount, AmmError> {
    if amount_x.is_zero() {
        return Err(AmmError::InsufficientAmount("quoted amount must be positive"));
    }
    if reserve_x.is_zero() || reserve_y.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    mul_div(
        amount_x.get(),
        reserve_y.get(),
        reserve_x.get(),
        Rounding::Down,
    )
    .map(Amount::new)
}
