//! How the first deposit into an empty pool is converted into shares.

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, Shares};
use crate::math::sqrt_of_product;

/// Initial share minting rule for a pool with no outstanding shares.
///
/// Later deposits are always minted proportionally to the existing
/// supply; this policy only fixes the unit of the first share.
///
/// # Examples
///
/// ```
/// use pairswap::config::InitialSharePolicy;
/// use pairswap::domain::{Amount, Shares};
///
/// let x = Amount::new(400);
/// let y = Amount::new(900);
/// assert_eq!(InitialSharePolicy::FirstAssetAmount.initial_shares(x, y), Shares::new(400));
/// assert_eq!(InitialSharePolicy::GeometricMean.initial_shares(x, y), Shares::new(600));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InitialSharePolicy {
    /// Shares equal the deposited amount of the caller's first asset.
    #[default]
    FirstAssetAmount,
    /// Shares equal `⌊√(amount_x × amount_y)⌋`, independent of argument
    /// order.
    GeometricMean,
}

impl InitialSharePolicy {
    /// Shares minted for a first deposit of `(amount_x, amount_y)`, where
    /// `amount_x` belongs to the first asset the caller named.
    #[must_use]
    pub fn initial_shares(self, amount_x: Amount, amount_y: Amount) -> Shares {
        match self {
            Self::FirstAssetAmount => Shares::new(amount_x.get()),
            Self::GeometricMean => Shares::new(sqrt_of_product(amount_x.get(), amount_y.get())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_first_asset_amount() {
        assert_eq!(
            InitialSharePolicy::default(),
            InitialSharePolicy::FirstAssetAmount
        );
    }

    #[test]
    fn first_asset_amount_follows_argument_order() {
        let policy = InitialSharePolicy::FirstAssetAmount;
        assert_eq!(
            policy.initial_shares(Amount::new(10), Amount::new(20)),
            Shares::new(10)
        );
        assert_eq!(
            policy.initial_shares(Amount::new(20), Amount::new(10)),
            Shares::new(20)
        );
    }

    #[test]
    fn geometric_mean_is_symmetric() {
        let policy = InitialSharePolicy::GeometricMean;
        let a = policy.initial_shares(Amount::new(1_000), Amount::new(4_000));
        let b = policy.initial_shares(Amount::new(4_000), Amount::new(1_000));
        assert_eq!(a, Shares::new(2_000));
        assert_eq!(a, b);
    }

    #[test]
    fn geometric_mean_handles_wide_products() {
        let big = Amount::new(u128::MAX);
        assert_eq!(
            InitialSharePolicy::GeometricMean.initial_shares(big, big),
            Shares::new(u128::MAX)
        );
    }
}
