//! Structured records of committed pool mutations.
//!
//! Amounts in events are expressed per canonical side (`low`/`high`) so
//! that observers see the same orientation regardless of the argument
//! order each caller used.

use serde::{Deserialize, Serialize};

use super::{AccountId, Amount, AssetPairKey, Shares, SwapDirection};

/// Liquidity was deposited and shares minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiquidityAdded {
    /// Pool that received the deposit.
    pub pair: AssetPairKey,
    /// Account the assets were pulled from.
    pub provider: AccountId,
    /// Account credited with the shares.
    pub recipient: AccountId,
    /// Deposited amount of the low asset.
    pub amount_low: Amount,
    /// Deposited amount of the high asset.
    pub amount_high: Amount,
    /// Shares minted.
    pub shares: Shares,
}

/// Shares were burned and reserves paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiquidityRemoved {
    /// Pool that paid out.
    pub pair: AssetPairKey,
    /// Account whose shares were burned.
    pub provider: AccountId,
    /// Account that received the payout.
    pub recipient: AccountId,
    /// Paid-out amount of the low asset.
    pub amount_low: Amount,
    /// Paid-out amount of the high asset.
    pub amount_high: Amount,
    /// Shares burned.
    pub shares: Shares,
}

/// A swap executed against a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Swapped {
    /// Pool the swap ran against.
    pub pair: AssetPairKey,
    /// Account that paid the input.
    pub caller: AccountId,
    /// Account that received the output.
    pub recipient: AccountId,
    /// Which side was sold.
    pub direction: SwapDirection,
    /// Input paid into the pool.
    pub amount_in: Amount,
    /// Output paid out of the pool.
    pub amount_out: Amount,
}

/// Any event emitted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolEvent {
    /// See [`LiquidityAdded`].
    LiquidityAdded(LiquidityAdded),
    /// See [`LiquidityRemoved`].
    LiquidityRemoved(LiquidityRemoved),
    /// See [`Swapped`].
    Swapped(Swapped),
}

impl PoolEvent {
    /// Pool the event refers to.
    #[must_use]
    pub const fn pair(&self) -> AssetPairKey {
        match self {
            Self::LiquidityAdded(e) => e.pair,
            Self::LiquidityRemoved(e) => e.pair,
            Self::Swapped(e) => e.pair,
        }
    }
}

impl From<LiquidityAdded> for PoolEvent {
    fn from(e: LiquidityAdded) -> Self {
        Self::LiquidityAdded(e)
    }
}

impl From<LiquidityRemoved> for PoolEvent {
    fn from(e: LiquidityRemoved) -> Self {
        Self::LiquidityRemoved(e)
    }
}

impl From<Swapped> for PoolEvent {
    fn from(e: Swapped) -> Self {
        Self::Swapped(e)
    }
}
