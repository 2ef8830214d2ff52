//! Parameters of liquidity deposits and withdrawals.
//!
//! Both request types name the pair by its two assets in the caller's own
//! order (`asset_x`, `asset_y`); every amount and minimum in the request,
//! and every amount returned for it, follows that same order.

use serde::{Deserialize, Serialize};

use super::{AccountId, Amount, AssetId, Shares, Timestamp};

/// A deposit into the pool for `asset_x`/`asset_y`.
///
/// `amount_x`/`amount_y` are the desired amounts.  After the first
/// deposit the engine trims one of them to the pool's current ratio; the
/// trimmed amount must still reach its minimum.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{AccountId, AddLiquidity, Amount, AssetId, Timestamp};
///
/// let request = AddLiquidity {
///     asset_x: AssetId::from_bytes([1u8; 32]),
///     asset_y: AssetId::from_bytes([2u8; 32]),
///     amount_x: Amount::new(1_000),
///     amount_y: Amount::new(2_000),
///     min_x: Amount::ZERO,
///     min_y: Amount::ZERO,
///     recipient: AccountId::from_bytes([9u8; 32]),
///     deadline: Timestamp::MAX,
/// };
/// assert_eq!(request.amount_y, Amount::new(2_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddLiquidity {
    /// First asset of the pair, in caller order.
    pub asset_x: AssetId,
    /// Second asset of the pair, in caller order.
    pub asset_y: AssetId,
    /// Desired deposit of `asset_x`.
    pub amount_x: Amount,
    /// Desired deposit of `asset_y`.
    pub amount_y: Amount,
    /// Smallest acceptable deposit of `asset_x` after ratio adjustment.
    pub min_x: Amount,
    /// Smallest acceptable deposit of `asset_y` after ratio adjustment.
    pub min_y: Amount,
    /// Account credited with the minted shares.
    pub recipient: AccountId,
    /// Latest time at which the deposit may execute.
    pub deadline: Timestamp,
}

/// A withdrawal that burns `shares` of the caller's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemoveLiquidity {
    /// First asset of the pair, in caller order.
    pub asset_x: AssetId,
    /// Second asset of the pair, in caller order.
    pub asset_y: AssetId,
    /// Shares to burn from the caller's balance.
    pub shares: Shares,
    /// Smallest acceptable payout of `asset_x`.
    pub min_x: Amount,
    /// Smallest acceptable payout of `asset_y`.
    pub min_y: Amount,
    /// Account that receives both payouts.
    pub recipient: AccountId,
    /// Latest time at which the withdrawal may execute.
    pub deadline: Timestamp,
}
