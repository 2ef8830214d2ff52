//! Proportional deposit and withdrawal arithmetic.
//!
//! Both functions are orientation-agnostic: `x` and `y` are whatever two
//! sides the caller lines up, as long as reserves and amounts agree.

use super::{mul_div, quote};
use crate::domain::{Amount, Rounding, Shares};
use crate::error::AmmError;

/// Ratio-adjusted amounts and shares for a deposit into a seeded pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositPlan {
    /// Amount of `x` actually taken.
    pub amount_x: Amount,
    /// Amount of `y` actually taken.
    pub amount_y: Amount,
    /// Shares minted for the deposit.
    pub shares: Shares,
}

/// Fits a desired `(x, y)` deposit onto the current reserve ratio.
///
/// One side is kept at its desired amount and the other is reduced to
/// match the ratio.  Shares are minted against the side held fixed:
/// `total × dx / rx` when `x` is kept, `total × dy / ry` otherwise, both
/// rounded down.
///
/// # Errors
///
/// - [`AmmError::InsufficientAmount`] if either desired amount is zero,
///   an adjusted amount falls below its minimum or rounds to zero, or the
///   deposit is too small to mint a single share.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
/// - [`AmmError::Overflow`] on arithmetic overflow.
#[allow(clippy::too_many_arguments)]
pub fn plan_deposit(
    desired_x: Amount,
    desired_y: Amount,
    min_x: Amount,
    min_y: Amount,
    reserve_x: Amount,
    reserve_y: Amount,
    total_shares: Shares,
) -> Result<DepositPlan, AmmError> {
    if desired_x.is_zero() || desired_y.is_zero() {
        return Err(AmmError::InsufficientAmount(
            "both deposit amounts must be positive",
        ));
    }

    let optimal_y = quote(desired_x, reserve_x, reserve_y)?;
    let (amount_x, amount_y, held, reserve_held) = if optimal_y <= desired_y {
        if optimal_y < min_y || desired_x < min_x {
            return Err(AmmError::InsufficientAmount(
                "ratio-adjusted amount below minimum",
            ));
        }
        (desired_x, optimal_y, desired_x, reserve_x)
    } else {
        // optimal_y > desired_y implies optimal_x < desired_x.
        let optimal_x = quote(desired_y, reserve_y, reserve_x)?;
        if optimal_x < min_x || desired_y < min_y {
            return Err(AmmError::InsufficientAmount(
                "ratio-adjusted amount below minimum",
            ));
        }
        (optimal_x, desired_y, desired_y, reserve_y)
    };
    if amount_x.is_zero() || amount_y.is_zero() {
        return Err(AmmError::InsufficientAmount(
            "ratio-adjusted amount rounds to zero",
        ));
    }

    let shares = Shares::new(mul_div(
        held.get(),
        total_shares.get(),
        reserve_held.get(),
        Rounding::Down,
    )?);
    if shares.is_zero() {
        return Err(AmmError::InsufficientAmount(
            "deposit too small to mint shares",
        ));
    }

    Ok(DepositPlan {
        amount_x,
        amount_y,
        shares,
    })
}

/// Reserve amounts redeemed by burning `shares` out of `total_shares`,
/// each rounded down in favour of the pool.
///
/// # Errors
///
/// - [`AmmError::InsufficientLiquidity`] if `total_shares` is zero.
/// - [`AmmError::InsufficientShareBalance`] if `shares > total_shares`.
pub fn withdrawal_amounts(
    shares: Shares,
    reserve_x: Amount,
    reserve_y: Amount,
    total_shares: Shares,
) -> Result<(Amount, Amount), AmmError> {
    if total_shares.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    if shares > total_shares {
        return Err(AmmError::InsufficientShareBalance {
            held: total_shares,
            requested: shares,
        });
    }
    let amount_x = mul_div(
        reserve_x.get(),
        shares.get(),
        total_shares.get(),
        Rounding::Down,
    )?;
    let amount_y = mul_div(
        reserve_y.get(),
        shares.get(),
        total_shares.get(),
        Rounding::Down,
    )?;
    Ok((Amount::new(amount_x), Amount::new(amount_y)))
}
