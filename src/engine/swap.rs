//! Exact-in and exact-out swaps.

use tracing::{debug, info};

use super::settlement::Settlement;
use super::{Orientation, PairEngine};
use crate::domain::{AccountId, Amount, SwapExactIn, SwapExactOut, Swapped};
use crate::error::AmmError;
use crate::host::{Clock, TokenTransfer};
use crate::ledger::PoolGuard;
use crate::math::{quote_input, quote_output};
use crate::traits::SwapEngine;

/// Fully priced swap, ready to settle.
struct Fill {
    amount_in: Amount,
    amount_out: Amount,
}

impl<T: TokenTransfer, C: Clock> PairEngine<T, C> {
    /// Runs `price` against the locked pool for `asset_in → asset_out`
    /// and settles the result.
    fn execute_swap(
        &self,
        caller: AccountId,
        side: Orientation,
        recipient: AccountId,
        price: impl FnOnce(Amount, Amount) -> Result<Fill, AmmError>,
    ) -> Result<Fill, AmmError> {
        let record = self
            .ledger
            .get(&side.key)
            .ok_or(AmmError::InsufficientLiquidity)?;
        let mut pool = record.lock();
        let snapshot = pool.snapshot();
        if !snapshot.has_liquidity() {
            return Err(AmmError::InsufficientLiquidity);
        }

        let direction = side.direction();
        let (reserve_in, reserve_out) = snapshot.swap_reserves(direction);
        let fill = price(reserve_in, reserve_out)?;
        self.settle_swap(&mut pool, caller, side, recipient, &fill)?;
        Ok(fill)
    }

    fn settle_swap(
        &self,
        pool: &mut PoolGuard<'_>,
        caller: AccountId,
        side: Orientation,
        recipient: AccountId,
        fill: &Fill,
    ) -> Result<(), AmmError> {
        let direction = side.direction();
        let update = pool.plan_swap(direction, fill.amount_in, fill.amount_out)?;

        let (asset_in, asset_out) = side.to_caller(side.key.low(), side.key.high());
        let custody = self.config.custody();
        let mut settlement = Settlement::new(&self.transfer);
        settlement.transfer(asset_in, caller, custody, fill.amount_in)?;
        settlement.transfer(asset_out, custody, recipient, fill.amount_out)?;
        settlement.commit();

        pool.apply(update);
        self.emit(Swapped {
            pair: side.key,
            caller,
            recipient,
            direction,
            amount_in: fill.amount_in,
            amount_out: fill.amount_out,
        });
        info!(
            pair = %side.key,
            caller = %caller,
            recipient = %recipient,
            direction = %direction,
            amount_in = %fill.amount_in,
            amount_out = %fill.amount_out,
            "swap executed"
        );
        Ok(())
    }

    fn try_swap_exact_in(
        &self,
        caller: AccountId,
        request: &SwapExactIn,
    ) -> Result<Amount, AmmError> {
        self.check_deadline(request.deadline)?;
        let side = Orientation::resolve(request.asset_in, request.asset_out)?;
        let fill = self.execute_swap(caller, side, request.recipient, |reserve_in, reserve_out| {
            let amount_out = quote_output(request.amount_in, reserve_in, reserve_out)?;
            if amount_out.is_zero() {
                return Err(AmmError::InsufficientOutputAmount(
                    "swap output rounds to zero",
                ));
            }
            if amount_out < request.amount_out_min {
                return Err(AmmError::SlippageExceeded {
                    quoted: amount_out,
                    limit: request.amount_out_min,
                });
            }
            Ok(Fill {
                amount_in: request.amount_in,
                amount_out,
            })
        })?;
        Ok(fill.amount_out)
    }

    fn try_swap_exact_out(
        &self,
        caller: AccountId,
        request: &SwapExactOut,
    ) -> Result<Amount, AmmError> {
        self.check_deadline(request.deadline)?;
        let side = Orientation::resolve(request.asset_in, request.asset_out)?;
        let fill = self.execute_swap(caller, side, request.recipient, |reserve_in, reserve_out| {
            let amount_in = quote_input(request.amount_out, reserve_in, reserve_out)?;
            if amount_in > request.amount_in_max {
                return Err(AmmError::SlippageExceeded {
                    quoted: amount_in,
                    limit: request.amount_in_max,
                });
            }
            Ok(Fill {
                amount_in,
                amount_out: request.amount_out,
            })
        })?;
        Ok(fill.amount_in)
    }
}

impl<T: TokenTransfer, C: Clock> SwapEngine for PairEngine<T, C> {
    fn swap_exact_in(&self, caller: AccountId, request: &SwapExactIn) -> Result<Amount, AmmError> {
        let result = self.try_swap_exact_in(caller, request);
        if let Err(e) = &result {
            debug!(caller = %caller, error = %e, "exact-in swap rejected");
        }
        result
    }

    fn swap_exact_out(
        &self,
        caller: AccountId,
        request: &SwapExactOut,
    ) -> Result<Amount, AmmError> {
        let result = self.try_swap_exact_out(caller, request);
        if let Err(e) = &result {
            debug!(caller = %caller, error = %e, "exact-out swap rejected");
        }
        result
    }
}
