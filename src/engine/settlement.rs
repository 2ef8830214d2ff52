//! Transaction boundary around the transfers of one operation.
//!
//! A [`Settlement`] runs transfer legs in order and remembers the ones
//! that succeeded.  If it is dropped without [`Settlement::commit`], the
//! applied legs are reversed newest first, so a failure on the second
//! leg leaves balances as they were before the first.

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::AmmError;
use crate::host::TokenTransfer;

#[derive(Debug, Clone, Copy)]
struct Leg {
    asset: AssetId,
    from: AccountId,
    to: AccountId,
    amount: Amount,
}

/// Applied-but-uncommitted transfer legs.
///
/// Zero-amount legs are skipped entirely; they never reach the host.
#[derive(Debug)]
#[must_use = "dropping a settlement without commit reverses its transfers"]
pub(crate) struct Settlement<'a, T: TokenTransfer> {
    transfer: &'a T,
    applied: Vec<Leg>,
    committed: bool,
}

impl<'a, T: TokenTransfer> Settlement<'a, T> {
    pub(crate) fn new(transfer: &'a T) -> Self {
        Self {
            transfer,
            applied: Vec::with_capacity(2),
            committed: false,
        }
    }

    /// Moves `amount` of `asset` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TransferFailed`] if the host refuses the leg.
    /// Legs applied earlier stay recorded and are reversed on drop.
    pub(crate) fn transfer(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        if amount.is_zero() {
            return Ok(());
        }
        self.transfer.transfer(&asset, &from, &to, amount)?;
        self.applied.push(Leg {
            asset,
            from,
            to,
            amount,
        });
        Ok(())
    }

    /// Makes every applied leg final.
    pub(crate) fn commit(mut self) {
        self.committed = true;
    }
}

impl<T: TokenTransfer> Drop for Settlement<'_, T> {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        while let Some(leg) = self.applied.pop() {
            if let Err(e) = self
                .transfer
                .transfer(&leg.asset, &leg.to, &leg.from, leg.amount)
            {
                tracing::error!(
                    asset = %leg.asset,
                    from = %leg.to,
                    to = %leg.from,
                    amount = %leg.amount,
                    error = %e,
                    "compensating transfer failed"
                );
            }
        }
    }
}
