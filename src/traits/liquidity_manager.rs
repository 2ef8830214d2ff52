//! Liquidity provisioning against pair pools.
//!
//! Amounts in requests and results follow the caller's argument order
//! (`x`, `y`), not the canonical low/high order of the pool.

use crate::domain::{AccountId, AddLiquidity, Amount, RemoveLiquidity, Shares};
use crate::error::AmmError;

/// Deposits into and withdrawals from pair pools.
///
/// # Atomicity
///
/// Each call either commits fully (transfers applied, reserves and share
/// balances updated, event emitted) or has no observable effect.
pub trait LiquidityManager {
    /// Deposits up to `(amount_x, amount_y)` from `caller` and mints
    /// shares to `request.recipient`.
    ///
    /// The first deposit into an empty pool is taken as-is and fixes the
    /// price.  Later deposits are trimmed to the current reserve ratio.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] if the deadline has passed.
    /// - [`AmmError::IdenticalAssets`] if both assets are the same.
    /// - [`AmmError::InsufficientAmount`] if an amount is zero, a
    ///   minimum is missed, or no share would be minted.
    /// - [`AmmError::TransferFailed`] if a deposit transfer fails.
    fn add_liquidity(&self, caller: AccountId, request: &AddLiquidity) -> Result<Shares, AmmError>;

    /// Burns `request.shares` held by `caller` and pays the proportional
    /// reserves to `request.recipient`.
    ///
    /// Returns the paid amounts as `(amount_x, amount_y)`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] if the deadline has passed.
    /// - [`AmmError::IdenticalAssets`] if both assets are the same.
    /// - [`AmmError::InsufficientAmount`] if `shares` is zero.
    /// - [`AmmError::InsufficientShareBalance`] if `caller` holds fewer
    ///   shares.
    /// - [`AmmError::InsufficientOutputAmount`] if a payout is below its
    ///   minimum.
    /// - [`AmmError::TransferFailed`] if a payout transfer fails.
    fn remove_liquidity(
        &self,
        caller: AccountId,
        request: &RemoveLiquidity,
    ) -> Result<(Amount, Amount), AmmError>;
}
