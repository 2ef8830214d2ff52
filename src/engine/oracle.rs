//! Read-only views: prices, reserves, shares and swap previews.
//!
//! Everything except [`PairEngine::share_balance`] reads the published
//! snapshot and never waits on a pair lock.

use super::{Orientation, PairEngine};
use crate::domain::{AccountId, Amount, AssetId, AssetPairKey, Price, Shares};
use crate::error::AmmError;
use crate::host::{Clock, TokenTransfer};
use crate::ledger::PoolSnapshot;
use crate::math::{quote_input, quote_output, spot_price};
use crate::traits::PriceOracle;

impl<T: TokenTransfer, C: Clock> PairEngine<T, C> {
    fn oriented_snapshot(
        &self,
        asset_x: AssetId,
        asset_y: AssetId,
    ) -> Result<(Orientation, PoolSnapshot), AmmError> {
        let side = Orientation::resolve(asset_x, asset_y)?;
        Ok((side, self.ledger.snapshot(&side.key)))
    }

    /// Current reserves in caller order: `(reserve of asset_x, reserve of
    /// asset_y)`.  Zero for unknown pairs.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`] if both assets are the same.
    pub fn reserves(&self, asset_x: AssetId, asset_y: AssetId) -> Result<(Amount, Amount), AmmError> {
        let (side, snapshot) = self.oriented_snapshot(asset_x, asset_y)?;
        Ok(side.to_caller(snapshot.reserve_low, snapshot.reserve_high))
    }

    /// Outstanding shares of the pair.  Zero for unknown pairs.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`] if both assets are the same.
    pub fn total_shares(&self, asset_x: AssetId, asset_y: AssetId) -> Result<Shares, AmmError> {
        let (_, snapshot) = self.oriented_snapshot(asset_x, asset_y)?;
        Ok(snapshot.total_shares)
    }

    /// Shares of the pair held by `holder`.  Zero for unknown pairs.
    ///
    /// Balances are not part of the snapshot, so this briefly takes the
    /// pair lock.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`] if both assets are the same.
    pub fn share_balance(
        &self,
        asset_x: AssetId,
        asset_y: AssetId,
        holder: AccountId,
    ) -> Result<Shares, AmmError> {
        let key = AssetPairKey::new(asset_x, asset_y)?;
        Ok(self
            .ledger
            .get(&key)
            .map_or(Shares::ZERO, |record| record.lock().share_balance(&holder)))
    }

    /// Output [`swap_exact_in`](crate::traits::SwapEngine::swap_exact_in)
    /// would deliver for `amount_in` at the current snapshot.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] if both assets are the same.
    /// - [`AmmError::InsufficientLiquidity`] if the pair is unseeded.
    /// - [`AmmError::InsufficientInputAmount`] if `amount_in` is zero.
    pub fn quote_swap(
        &self,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
    ) -> Result<Amount, AmmError> {
        let (side, snapshot) = self.oriented_snapshot(asset_in, asset_out)?;
        if !snapshot.has_liquidity() {
            return Err(AmmError::InsufficientLiquidity);
        }
        let (reserve_in, reserve_out) = snapshot.swap_reserves(side.direction());
        quote_output(amount_in, reserve_in, reserve_out)
    }

    /// Input [`swap_exact_out`](crate::traits::SwapEngine::swap_exact_out)
    /// would charge for `amount_out` at the current snapshot.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] if both assets are the same.
    /// - [`AmmError::InsufficientLiquidity`] if the pair is unseeded or
    ///   `amount_out` is not below the output reserve.
    /// - [`AmmError::InsufficientOutputAmount`] if `amount_out` is zero.
    pub fn quote_swap_exact_out(
        &self,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_out: Amount,
    ) -> Result<Amount, AmmError> {
        let (side, snapshot) = self.oriented_snapshot(asset_in, asset_out)?;
        if !snapshot.has_liquidity() {
            return Err(AmmError::InsufficientLiquidity);
        }
        let (reserve_in, reserve_out) = snapshot.swap_reserves(side.direction());
        quote_input(amount_out, reserve_in, reserve_out)
    }
}

impl<T: TokenTransfer, C: Clock> PriceOracle for PairEngine<T, C> {
    fn get_price(&self, of: AssetId, against: AssetId) -> Result<Price, AmmError> {
        let (side, snapshot) = self.oriented_snapshot(of, against)?;
        let (reserve_of, reserve_against) =
            side.to_caller(snapshot.reserve_low, snapshot.reserve_high);
        spot_price(reserve_of, reserve_against)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::domain::{AddLiquidity, Timestamp};
    use crate::host::{InMemoryBank, ManualClock};
    use crate::traits::LiquidityManager;

    const WAD: u128 = 1_000_000_000_000_000_000;

    fn usd() -> AssetId {
        AssetId::from_bytes([1u8; 32])
    }

    fn eur() -> AssetId {
        AssetId::from_bytes([2u8; 32])
    }

    fn lp() -> AccountId {
        AccountId::from_bytes([0x11; 32])
    }

    fn engine() -> PairEngine<InMemoryBank, ManualClock> {
        let bank = InMemoryBank::new();
        for asset in [usd(), eur()] {
            let Ok(()) = bank.mint(&asset, &lp(), Amount::new(100_000 * WAD)) else {
                panic!("mint");
            };
        }
        let Ok(config) = EngineConfig::default_with_custody(AccountId::from_bytes([0xCC; 32]))
        else {
            panic!("config");
        };
        let Ok(engine) = PairEngine::new(config, bank, ManualClock::new(Timestamp::from_secs(0)))
        else {
            panic!("engine");
        };
        engine
    }

    fn seed(engine: &PairEngine<InMemoryBank, ManualClock>) {
        let Ok(_) = engine.add_liquidity(
            lp(),
            &AddLiquidity {
                asset_x: eur(),
                asset_y: usd(),
                amount_x: Amount::new(20_000 * WAD),
                amount_y: Amount::new(10_000 * WAD),
                min_x: Amount::ZERO,
                min_y: Amount::ZERO,
                recipient: lp(),
                deadline: Timestamp::MAX,
            },
        ) else {
            panic!("seed");
        };
    }

    #[test]
    fn unseeded_price_fails() {
        let engine = engine();
        assert_eq!(
            engine.get_price(usd(), eur()),
            Err(AmmError::InsufficientLiquidity)
        );
        assert!(engine.ledger().is_empty());
    }

    #[test]
    fn identical_price_fails() {
        let engine = engine();
        assert_eq!(
            engine.get_price(usd(), usd()),
            Err(AmmError::IdenticalAssets)
        );
    }

    #[test]
    fn price_is_reserve_ratio() {
        let engine = engine();
        seed(&engine);
        assert_eq!(engine.get_price(usd(), eur()), Ok(Price::from_raw(2 * WAD)));
        assert_eq!(engine.get_price(eur(), usd()), Ok(Price::from_raw(WAD / 2)));
    }

    #[test]
    fn views_follow_caller_order() {
        let engine = engine();
        seed(&engine);
        assert_eq!(
            engine.reserves(usd(), eur()),
            Ok((Amount::new(10_000 * WAD), Amount::new(20_000 * WAD)))
        );
        assert_eq!(
            engine.reserves(eur(), usd()),
            Ok((Amount::new(20_000 * WAD), Amount::new(10_000 * WAD)))
        );
        assert_eq!(
            engine.total_shares(usd(), eur()),
            Ok(Shares::new(20_000 * WAD))
        );
        assert_eq!(
            engine.share_balance(eur(), usd(), lp()),
            Ok(Shares::new(20_000 * WAD))
        );
    }

    #[test]
    fn unknown_pair_views_are_zero() {
        let engine = engine();
        assert_eq!(engine.reserves(usd(), eur()), Ok((Amount::ZERO, Amount::ZERO)));
        assert_eq!(engine.total_shares(usd(), eur()), Ok(Shares::ZERO));
        assert_eq!(engine.share_balance(usd(), eur(), lp()), Ok(Shares::ZERO));
        assert!(engine.ledger().is_empty());
    }

    #[test]
    fn quotes_match_math() {
        let engine = engine();
        seed(&engine);
        let Ok(out) = engine.quote_swap(usd(), eur(), Amount::new(100 * WAD)) else {
            panic!("expected Ok");
        };
        assert_eq!(out.get() / WAD, 198);
        let Ok(needed) = engine.quote_swap_exact_out(usd(), eur(), out) else {
            panic!("expected Ok");
        };
        assert!(needed <= Amount::new(100 * WAD));
    }

    #[test]
    fn quote_on_empty_pair() {
        let engine = engine();
        assert_eq!(
            engine.quote_swap(usd(), eur(), Amount::new(1)),
            Err(AmmError::InsufficientLiquidity)
        );
    }
}
