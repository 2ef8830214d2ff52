//! Single-pair swap execution.

use crate::domain::{AccountId, Amount, SwapExactIn, SwapExactOut};
use crate::error::AmmError;

/// Executes swaps against one pair pool.
///
/// The pool is selected by the request's `(asset_in, asset_out)`; the
/// direction follows from which canonical side `asset_in` occupies.
/// Reserves change only after both transfer legs succeed.
pub trait SwapEngine {
    /// Sells exactly `amount_in` and returns the amount delivered.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] if the deadline has passed.
    /// - [`AmmError::IdenticalAssets`] if both assets are the same.
    /// - [`AmmError::InsufficientInputAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if the pool is empty.
    /// - [`AmmError::InsufficientOutputAmount`] if the output rounds to
    ///   zero.
    /// - [`AmmError::SlippageExceeded`] if the output is below
    ///   `amount_out_min`.
    /// - [`AmmError::TransferFailed`] if either leg fails.
    fn swap_exact_in(&self, caller: AccountId, request: &SwapExactIn) -> Result<Amount, AmmError>;

    /// Buys exactly `amount_out` and returns the input charged.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] if the deadline has passed.
    /// - [`AmmError::IdenticalAssets`] if both assets are the same.
    /// - [`AmmError::InsufficientOutputAmount`] if `amount_out` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if the pool is empty or
    ///   holds no more than `amount_out`.
    /// - [`AmmError::SlippageExceeded`] if the input exceeds
    ///   `amount_in_max`.
    /// - [`AmmError::TransferFailed`] if either leg fails.
    fn swap_exact_out(&self, caller: AccountId, request: &SwapExactOut)
        -> Result<Amount, AmmError>;
}
