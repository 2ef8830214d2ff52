//! Swap direction relative to a canonical pair.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Which side of an [`AssetPairKey`](super::AssetPairKey) a swap sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapDirection {
    /// Sell the low asset, receive the high asset.
    LowToHigh,
    /// Sell the high asset, receive the low asset.
    HighToLow,
}

impl SwapDirection {
    /// Returns `true` when the input asset is the low side.
    #[must_use]
    pub const fn input_is_low(&self) -> bool {
        matches!(self, Self::LowToHigh)
    }

    /// Splits `(low, high)` into `(input side, output side)`.
    pub fn split<T>(&self, low: T, high: T) -> (T, T) {
        match self {
            Self::LowToHigh => (low, high),
            Self::HighToLow => (high, low),
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LowToHigh => write!(f, "LowToHigh"),
            Self::HighToLow => write!(f, "HighToLow"),
        }
    }
}
