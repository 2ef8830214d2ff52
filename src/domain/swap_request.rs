//! Parameters of a single-pair swap.

use serde::{Deserialize, Serialize};

use super::{AccountId, Amount, AssetId, Timestamp};

/// Sell exactly `amount_in` of `asset_in` for at least `amount_out_min`
/// of `asset_out`.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{AccountId, Amount, AssetId, SwapExactIn, Timestamp};
///
/// let request = SwapExactIn {
///     asset_in: AssetId::from_bytes([1u8; 32]),
///     asset_out: AssetId::from_bytes([2u8; 32]),
///     amount_in: Amount::new(100),
///     amount_out_min: Amount::new(190),
///     recipient: AccountId::from_bytes([9u8; 32]),
///     deadline: Timestamp::from_secs(1_700_000_000),
/// };
/// assert!(request.amount_out_min < Amount::new(198));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapExactIn {
    /// Asset sold by the caller.
    pub asset_in: AssetId,
    /// Asset bought by the caller.
    pub asset_out: AssetId,
    /// Exact amount of `asset_in` to sell.
    pub amount_in: Amount,
    /// Floor on the amount of `asset_out` delivered.
    pub amount_out_min: Amount,
    /// Account that receives `asset_out`.
    pub recipient: AccountId,
    /// Latest time at which the swap may execute.
    pub deadline: Timestamp,
}

/// Buy exactly `amount_out` of `asset_out` for at most `amount_in_max`
/// of `asset_in`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapExactOut {
    /// Asset sold by the caller.
    pub asset_in: AssetId,
    /// Asset bought by the caller.
    pub asset_out: AssetId,
    /// Exact amount of `asset_out` to receive.
    pub amount_out: Amount,
    /// Ceiling on the amount of `asset_in` taken from the caller.
    pub amount_in_max: Amount,
    /// Account that receives `asset_out`.
    pub recipient: AccountId,
    /// Latest time at which the swap may execute.
    pub deadline: Timestamp,
}
