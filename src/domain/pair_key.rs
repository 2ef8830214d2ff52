//! Order-independent key for a pair of distinct assets.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{AssetId, SwapDirection};
use crate::error::AmmError;

/// Canonical key of an unordered asset pair.
///
/// Construction sorts the two identifiers so that `low < high`, which
/// makes `(A, B)` and `(B, A)` resolve to the same key.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{AssetId, AssetPairKey};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
///
/// let key = AssetPairKey::new(b, a).expect("distinct assets");
/// assert_eq!(key.low(), a);
/// assert_eq!(key.high(), b);
/// assert_eq!(key, AssetPairKey::new(a, b).expect("distinct assets"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetPairKey {
    low: AssetId,
    high: AssetId,
}

impl AssetPairKey {
    /// Sorts two asset identifiers into `(low, high)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`] if `asset_x == asset_y`.
    pub fn canonicalize(asset_x: AssetId, asset_y: AssetId) -> Result<(AssetId, AssetId), AmmError> {
        if asset_x == asset_y {
            return Err(AmmError::IdenticalAssets);
        }
        if asset_x < asset_y {
            Ok((asset_x, asset_y))
        } else {
            Ok((asset_y, asset_x))
        }
    }

    /// Creates the canonical key for `asset_x` and `asset_y`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`] if `asset_x == asset_y`.
    pub fn new(asset_x: AssetId, asset_y: AssetId) -> Result<Self, AmmError> {
        let (low, high) = Self::canonicalize(asset_x, asset_y)?;
        Ok(Self { low, high })
    }

    /// Returns the asset with the lower identifier.
    #[must_use]
    pub const fn low(&self) -> AssetId {
        self.low
    }

    /// Returns the asset with the higher identifier.
    #[must_use]
    pub const fn high(&self) -> AssetId {
        self.high
    }

    /// Returns `true` if `asset` is the low side of this pair.
    #[must_use]
    pub fn is_low(&self, asset: &AssetId) -> bool {
        self.low == *asset
    }

    /// Returns `true` if `asset` is one of the two sides.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.low == *asset || self.high == *asset
    }

    /// Direction of a swap that sells `asset_in`.
    ///
    /// Returns `None` if `asset_in` is not part of the pair.
    #[must_use]
    pub fn direction_from(&self, asset_in: &AssetId) -> Option<SwapDirection> {
        if *asset_in == self.low {
            Some(SwapDirection::LowToHigh)
        } else if *asset_in == self.high {
            Some(SwapDirection::HighToLow)
        } else {
            None
        }
    }
}

impl fmt::Display for AssetPairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.low, self.high)
    }
}
