//! Unified error type for the pairswap engine.
//!
//! Every fallible operation in the crate returns [`AmmError`].  The
//! business-rule variants are terminal for the attempted operation: the
//! engine never retries internally and never mutates pool state before
//! returning one of them.

use thiserror::Error;

use crate::domain::{Amount, Shares, Timestamp};
use crate::host::TransferError;

/// Errors produced by pool operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// Both sides of a pair name the same asset.
    #[error("identical assets: a pair requires two distinct asset identifiers")]
    IdenticalAssets,

    /// The caller's deadline had already passed when the operation ran.
    #[error("expired: deadline {deadline} is before current time {now}")]
    Expired {
        /// Clock reading at execution time.
        now: Timestamp,
        /// Caller-supplied deadline.
        deadline: Timestamp,
    },

    /// A reserve required to be positive is zero, or the pool does not exist.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// A swap was requested with a zero input amount.
    #[error("insufficient input amount")]
    InsufficientInputAmount,

    /// A deposit is zero, misses its minimums after ratio adjustment, or is
    /// too small to mint a share.
    #[error("insufficient amount: {0}")]
    InsufficientAmount(&'static str),

    /// A withdrawal or swap output falls below what the caller accepts.
    #[error("insufficient output amount: {0}")]
    InsufficientOutputAmount(&'static str),

    /// The executed swap amount is worse than the caller's limit.
    #[error("slippage exceeded: quoted {quoted}, limit {limit}")]
    SlippageExceeded {
        /// Amount the pool would deliver (exact-in) or require (exact-out).
        quoted: Amount,
        /// Caller-supplied bound.
        limit: Amount,
    },

    /// The caller tried to burn more shares than it holds.
    #[error("insufficient share balance: holding {held}, requested {requested}")]
    InsufficientShareBalance {
        /// Shares currently held by the caller.
        held: Shares,
        /// Shares the caller asked to burn.
        requested: Shares,
    },

    /// The host transfer capability declined a movement of funds.
    #[error("transfer failed: {0}")]
    TransferFailed(#[from] TransferError),

    /// Arithmetic overflow or underflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Engine configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;
