//! Token-transfer capability supplied by the host.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::{AccountId, Amount, AssetId};

/// Reason a transfer was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// The source account does not hold enough of the asset.
    #[error("insufficient balance of {asset} in {account}: available {available}, requested {requested}")]
    InsufficientBalance {
        /// Asset being moved.
        asset: AssetId,
        /// Account debited.
        account: AccountId,
        /// Balance at the time of the attempt.
        available: Amount,
        /// Amount the transfer asked for.
        requested: Amount,
    },

    /// The host declined the transfer for its own reasons.
    #[error("transfer rejected: {0}")]
    Rejected(String),
}

/// Moves value between accounts.
///
/// # Contract
///
/// - A call either moves exactly `amount` or moves nothing.
/// - The call is synchronous: when it returns `Ok`, the move is final.
/// - Implementations are shared across threads.
pub trait TokenTransfer: Send + Sync {
    /// Moves `amount` of `asset` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if the move did not happen.
    fn transfer(
        &self,
        asset: &AssetId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), TransferError>;
}

impl<T: TokenTransfer + ?Sized> TokenTransfer for Arc<T> {
    fn transfer(
        &self,
        asset: &AssetId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        (**self).transfer(asset, from, to, amount)
    }
}

impl<T: TokenTransfer + ?Sized> TokenTransfer for &T {
    fn transfer(
        &self,
        asset: &AssetId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        (**self).transfer(asset, from, to, amount)
    }
}
