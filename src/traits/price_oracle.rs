//! Read-only spot price view.

use crate::domain::{AssetId, Price};
use crate::error::AmmError;

/// Spot prices derived from current reserves.
pub trait PriceOracle {
    /// Units of `against` per unit of `of`, 18-decimal fixed point,
    /// rounded down.
    ///
    /// Reads the last committed snapshot; never waits for an in-flight
    /// mutation.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] if both assets are the same.
    /// - [`AmmError::InsufficientLiquidity`] if the pair is unseeded.
    fn get_price(&self, of: AssetId, against: AssetId) -> Result<Price, AmmError>;
}
