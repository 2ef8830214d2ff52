//! Reserves and share accounting for a single pair.
//!
//! Mutations are two-phase.  A `plan_*` method validates the change with
//! checked arithmetic and returns a [`PoolUpdate`] holding the resulting
//! values; nothing is written.  [`PoolState::apply`] then installs the
//! update and cannot fail.  The engine runs all transfers between the
//! two phases.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, Amount, Shares, SwapDirection};
use crate::error::AmmError;
use crate::math::{widening_mul, CheckedArithmetic};

/// Consistent, copyable view of a pool's reserves and share supply.
///
/// Published as one unit after every committed mutation, so a reader
/// never observes reserves from one commit paired with shares from
/// another.  The default value is the empty pool.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub struct PoolSnapshot {
    /// Reserve of the low asset.
    pub reserve_low: Amount,
    /// Reserve of the high asset.
    pub reserve_high: Amount,
    /// Outstanding shares.
    pub total_shares: Shares,
}

impl PoolSnapshot {
    /// Returns `true` if both reserves are positive.
    #[must_use]
    pub const fn has_liquidity(&self) -> bool {
        !self.reserve_low.is_zero() && !self.reserve_high.is_zero()
    }

    /// Reserves as `(input side, output side)` for a swap in `direction`.
    #[must_use]
    pub fn swap_reserves(&self, direction: SwapDirection) -> (Amount, Amount) {
        direction.split(self.reserve_low, self.reserve_high)
    }

    /// Product `reserve_low × reserve_high` as `(high word, low word)`
    /// of a 256-bit value, comparable lexicographically.
    #[must_use]
    pub fn invariant(&self) -> (u128, u128) {
        widening_mul(self.reserve_low.get(), self.reserve_high.get())
    }
}

/// Validated, not-yet-applied result of a pool mutation.
///
/// Holds the absolute values the pool will have after
/// [`PoolState::apply`], not deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct PoolUpdate {
    reserve_low: Amount,
    reserve_high: Amount,
    total_shares: Shares,
    holder: Option<(AccountId, Shares)>,
}

impl PoolUpdate {
    /// Snapshot the pool will publish once this update is applied.
    pub const fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            reserve_low: self.reserve_low,
            reserve_high: self.reserve_high,
            total_shares: self.total_shares,
        }
    }
}

/// Mutable state of one pair: reserves, share supply, holder balances.
///
/// # Invariants
///
/// - `total_shares == Σ balances`.
/// - Zero balances are not stored.
/// - Both reserves are positive whenever `total_shares > 0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolState {
    reserve_low: Amount,
    reserve_high: Amount,
    total_shares: Shares,
    balances: HashMap<AccountId, Shares>,
}

impl PoolState {
    /// Creates an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve of the low asset.
    pub const fn reserve_low(&self) -> Amount {
        self.reserve_low
    }

    /// Reserve of the high asset.
    pub const fn reserve_high(&self) -> Amount {
        self.reserve_high
    }

    /// Outstanding shares.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Shares held by `holder`; zero if none.
    #[must_use]
    pub fn share_balance(&self, holder: &AccountId) -> Shares {
        self.balances.get(holder).copied().unwrap_or(Shares::ZERO)
    }

    /// Number of accounts with a positive balance.
    #[must_use]
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }

    /// Returns `true` if the pool has never been seeded or has been fully
    /// drained.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_shares.is_zero()
    }

    /// Current values as a [`PoolSnapshot`].
    #[must_use]
    pub const fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            reserve_low: self.reserve_low,
            reserve_high: self.reserve_high,
            total_shares: self.total_shares,
        }
    }

    /// Plans a deposit of `(add_low, add_high)` minting `shares` to
    /// `recipient`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientAmount`] if any quantity is zero.
    /// - [`AmmError::Overflow`] if a reserve, the supply or the balance
    ///   overflows.
    pub fn plan_mint(
        &self,
        recipient: AccountId,
        add_low: Amount,
        add_high: Amount,
        shares: Shares,
    ) -> Result<PoolUpdate, AmmError> {
        if add_low.is_zero() || add_high.is_zero() || shares.is_zero() {
            return Err(AmmError::InsufficientAmount(
                "deposit and minted shares must be positive",
            ));
        }
        let balance = self.share_balance(&recipient).safe_add(&shares)?;
        Ok(PoolUpdate {
            reserve_low: self.reserve_low.safe_add(&add_low)?,
            reserve_high: self.reserve_high.safe_add(&add_high)?,
            total_shares: self.total_shares.safe_add(&shares)?,
            holder: Some((recipient, balance)),
        })
    }

    /// Plans burning `shares` from `holder` while paying out
    /// `(out_low, out_high)`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientShareBalance`] if `holder` owns fewer
    ///   than `shares`.
    /// - [`AmmError::Overflow`] if a payout exceeds its reserve.
    pub fn plan_burn(
        &self,
        holder: AccountId,
        shares: Shares,
        out_low: Amount,
        out_high: Amount,
    ) -> Result<PoolUpdate, AmmError> {
        let held = self.share_balance(&holder);
        if held < shares {
            return Err(AmmError::InsufficientShareBalance {
                held,
                requested: shares,
            });
        }
        let balance = held.safe_sub(&shares)?;
        Ok(PoolUpdate {
            reserve_low: self.reserve_low.safe_sub(&out_low)?,
            reserve_high: self.reserve_high.safe_sub(&out_high)?,
            total_shares: self.total_shares.safe_sub(&shares)?,
            holder: Some((holder, balance)),
        })
    }

    /// Plans a swap selling `amount_in` for `amount_out` in `direction`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientLiquidity`] if `amount_out` would drain
    ///   the output reserve.
    /// - [`AmmError::Overflow`] if the input reserve overflows.
    pub fn plan_swap(
        &self,
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
    ) -> Result<PoolUpdate, AmmError> {
        let (reserve_in, reserve_out) = direction.split(self.reserve_low, self.reserve_high);
        if amount_out >= reserve_out {
            return Err(AmmError::InsufficientLiquidity);
        }
        let new_in = reserve_in.safe_add(&amount_in)?;
        let new_out = reserve_out.safe_sub(&amount_out)?;
        let (reserve_low, reserve_high) = if direction.input_is_low() {
            (new_in, new_out)
        } else {
            (new_out, new_in)
        };
        Ok(PoolUpdate {
            reserve_low,
            reserve_high,
            total_shares: self.total_shares,
            holder: None,
        })
    }

    /// Installs a planned update.
    ///
    /// The update must have been planned against the current state while
    /// the pair lock was held continuously.
    pub fn apply(&mut self, update: PoolUpdate) {
        self.reserve_low = update.reserve_low;
        self.reserve_high = update.reserve_high;
        self.total_shares = update.total_shares;
        if let Some((holder, balance)) = update.holder {
            if balance.is_zero() {
                self.balances.remove(&holder);
            } else {
                self.balances.insert(holder, balance);
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn alice() -> AccountId {
        AccountId::from_bytes([0xA1; 32])
    }

    fn bob() -> AccountId {
        AccountId::from_bytes([0xB0; 32])
    }

    fn seeded() -> PoolState {
        let mut pool = PoolState::new();
        let Ok(update) =
            pool.plan_mint(alice(), Amount::new(1_000), Amount::new(4_000), Shares::new(1_000))
        else {
            panic!("expected Ok");
        };
        pool.apply(update);
        pool
    }

    #[test]
    fn empty_pool() {
        let pool = PoolState::new();
        assert!(pool.is_empty());
        assert_eq!(pool.snapshot(), PoolSnapshot::default());
        assert!(!pool.snapshot().has_liquidity());
        assert_eq!(pool.share_balance(&alice()), Shares::ZERO);
    }

    #[test]
    fn mint_updates_everything() {
        let pool = seeded();
        assert_eq!(pool.reserve_low(), Amount::new(1_000));
        assert_eq!(pool.reserve_high(), Amount::new(4_000));
        assert_eq!(pool.total_shares(), Shares::new(1_000));
        assert_eq!(pool.share_balance(&alice()), Shares::new(1_000));
        assert_eq!(pool.holder_count(), 1);
    }

    #[test]
    fn planning_does_not_mutate() {
        let pool = seeded();
        let before = pool.clone();
        let Ok(update) = pool.plan_swap(SwapDirection::LowToHigh, Amount::new(10), Amount::new(39))
        else {
            panic!("expected Ok");
        };
        assert_eq!(pool, before);
        assert_eq!(update.snapshot().reserve_low, Amount::new(1_010));
        assert_eq!(update.snapshot().reserve_high, Amount::new(3_961));
    }

    #[test]
    fn full_burn_removes_holder() {
        let mut pool = seeded();
        let Ok(update) =
            pool.plan_burn(alice(), Shares::new(1_000), Amount::new(1_000), Amount::new(4_000))
        else {
            panic!("expected Ok");
        };
        pool.apply(update);
        assert!(pool.is_empty());
        assert_eq!(pool.holder_count(), 0);
        assert_eq!(pool.snapshot(), PoolSnapshot::default());
    }

    #[test]
    fn burn_more_than_held() {
        let pool = seeded();
        let Err(AmmError::InsufficientShareBalance { held, requested }) =
            pool.plan_burn(bob(), Shares::new(1), Amount::new(1), Amount::new(4))
        else {
            panic!("expected InsufficientShareBalance");
        };
        assert_eq!(held, Shares::ZERO);
        assert_eq!(requested, Shares::new(1));
    }

    #[test]
    fn swap_cannot_drain_output() {
        let pool = seeded();
        assert_eq!(
            pool.plan_swap(SwapDirection::HighToLow, Amount::new(1), Amount::new(1_000)),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    #[test]
    fn swap_high_to_low_orientation() {
        let mut pool = seeded();
        let Ok(update) = pool.plan_swap(SwapDirection::HighToLow, Amount::new(400), Amount::new(90))
        else {
            panic!("expected Ok");
        };
        pool.apply(update);
        assert_eq!(pool.reserve_low(), Amount::new(910));
        assert_eq!(pool.reserve_high(), Amount::new(4_400));
        assert_eq!(pool.total_shares(), Shares::new(1_000));
    }

    #[test]
    fn zero_mint_rejected() {
        let pool = PoolState::new();
        let Err(AmmError::InsufficientAmount(_)) =
            pool.plan_mint(alice(), Amount::new(1), Amount::new(1), Shares::ZERO)
        else {
            panic!("expected InsufficientAmount");
        };
    }

    #[test]
    fn invariant_widens() {
        let snap = PoolSnapshot {
            reserve_low: Amount::new(u128::MAX),
            reserve_high: Amount::new(2),
            total_shares: Shares::new(1),
        };
        assert_eq!(snap.invariant(), (1, u128::MAX - 1));

        let small = PoolSnapshot {
            reserve_low: Amount::new(10_000),
            reserve_high: Amount::new(20_000),
            total_shares: Shares::new(1),
        };
        assert_eq!(small.invariant(), (0, 200_000_000));
    }

    #[test]
    fn snapshot_serializes() {
        let Ok(json) = serde_json::to_value(seeded().snapshot()) else {
            panic!("serializable");
        };
        assert_eq!(json["reserve_high"], 4_000);
        assert_eq!(json["total_shares"], 1_000);
    }
}
