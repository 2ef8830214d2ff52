//! Add and remove liquidity.

use tracing::{debug, info};

use super::settlement::Settlement;
use super::{Orientation, PairEngine};
use crate::domain::{
    AccountId, AddLiquidity, Amount, LiquidityAdded, LiquidityRemoved, RemoveLiquidity, Shares,
};
use crate::error::AmmError;
use crate::host::{Clock, TokenTransfer};
use crate::ledger::PoolRecord;
use crate::math::{plan_deposit, withdrawal_amounts, DepositPlan};
use crate::traits::LiquidityManager;

impl<T: TokenTransfer, C: Clock> PairEngine<T, C> {
    fn try_add_liquidity(
        &self,
        caller: AccountId,
        request: &AddLiquidity,
    ) -> Result<Shares, AmmError> {
        self.check_deadline(request.deadline)?;
        let side = Orientation::resolve(request.asset_x, request.asset_y)?;
        let record = self.ledger.get_or_create(side.key);
        let result = self.deposit(&record, side, caller, request);
        if result.is_err() {
            drop(record);
            self.ledger.remove_if_vacant(&side.key);
        }
        result
    }

    fn deposit(
        &self,
        record: &PoolRecord,
        side: Orientation,
        caller: AccountId,
        request: &AddLiquidity,
    ) -> Result<Shares, AmmError> {
        let mut pool = record.lock();

        if request.amount_x.is_zero() || request.amount_y.is_zero() {
            return Err(AmmError::InsufficientAmount(
                "both deposit amounts must be positive",
            ));
        }

        let plan = if pool.is_empty() {
            if request.amount_x < request.min_x || request.amount_y < request.min_y {
                return Err(AmmError::InsufficientAmount(
                    "initial deposit below minimum",
                ));
            }
            DepositPlan {
                amount_x: request.amount_x,
                amount_y: request.amount_y,
                shares: self
                    .config
                    .initial_share_policy()
                    .initial_shares(request.amount_x, request.amount_y),
            }
        } else {
            let (reserve_x, reserve_y) = side.to_caller(pool.reserve_low(), pool.reserve_high());
            plan_deposit(
                request.amount_x,
                request.amount_y,
                request.min_x,
                request.min_y,
                reserve_x,
                reserve_y,
                pool.total_shares(),
            )?
        };

        let (amount_low, amount_high) = side.to_canonical(plan.amount_x, plan.amount_y);
        let update = pool.plan_mint(request.recipient, amount_low, amount_high, plan.shares)?;

        let custody = self.config.custody();
        let mut settlement = Settlement::new(&self.transfer);
        settlement.transfer(request.asset_x, caller, custody, plan.amount_x)?;
        settlement.transfer(request.asset_y, caller, custody, plan.amount_y)?;
        settlement.commit();

        pool.apply(update);
        self.emit(LiquidityAdded {
            pair: side.key,
            provider: caller,
            recipient: request.recipient,
            amount_low,
            amount_high,
            shares: plan.shares,
        });
        info!(
            pair = %side.key,
            provider = %caller,
            recipient = %request.recipient,
            amount_x = %plan.amount_x,
            amount_y = %plan.amount_y,
            shares = %plan.shares,
            "liquidity added"
        );
        Ok(plan.shares)
    }

    fn try_remove_liquidity(
        &self,
        caller: AccountId,
        request: &RemoveLiquidity,
    ) -> Result<(Amount, Amount), AmmError> {
        self.check_deadline(request.deadline)?;
        let side = Orientation::resolve(request.asset_x, request.asset_y)?;

        if request.shares.is_zero() {
            return Err(AmmError::InsufficientAmount("shares to burn must be positive"));
        }

        let Some(record) = self.ledger.get(&side.key) else {
            return Err(AmmError::InsufficientShareBalance {
                held: Shares::ZERO,
                requested: request.shares,
            });
        };
        let mut pool = record.lock();

        let held = pool.share_balance(&caller);
        if held < request.shares {
            return Err(AmmError::InsufficientShareBalance {
                held,
                requested: request.shares,
            });
        }

        let (amount_low, amount_high) = withdrawal_amounts(
            request.shares,
            pool.reserve_low(),
            pool.reserve_high(),
            pool.total_shares(),
        )?;
        let (amount_x, amount_y) = side.to_caller(amount_low, amount_high);
        if amount_x < request.min_x {
            return Err(AmmError::InsufficientOutputAmount(
                "withdrawal of asset_x below minimum",
            ));
        }
        if amount_y < request.min_y {
            return Err(AmmError::InsufficientOutputAmount(
                "withdrawal of asset_y below minimum",
            ));
        }

        let update = pool.plan_burn(caller, request.shares, amount_low, amount_high)?;

        let custody = self.config.custody();
        let mut settlement = Settlement::new(&self.transfer);
        settlement.transfer(request.asset_x, custody, request.recipient, amount_x)?;
        settlement.transfer(request.asset_y, custody, request.recipient, amount_y)?;
        settlement.commit();

        pool.apply(update);
        self.emit(LiquidityRemoved {
            pair: side.key,
            provider: caller,
            recipient: request.recipient,
            amount_low,
            amount_high,
            shares: request.shares,
        });
        info!(
            pair = %side.key,
            provider = %caller,
            recipient = %request.recipient,
            amount_x = %amount_x,
            amount_y = %amount_y,
            shares = %request.shares,
            "liquidity removed"
        );
        Ok((amount_x, amount_y))
    }
}

impl<T: TokenTransfer, C: Clock> LiquidityManager for PairEngine<T, C> {
    fn add_liquidity(&self, caller: AccountId, request: &AddLiquidity) -> Result<Shares, AmmError> {
        let result = self.try_add_liquidity(caller, request);
        if let Err(e) = &result {
            debug!(provider = %caller, error = %e, "add liquidity rejected");
        }
        result
    }

    fn remove_liquidity(
        &self,
        caller: AccountId,
        request: &RemoveLiquidity,
    ) -> Result<(Amount, Amount), AmmError> {
        let result = self.try_remove_liquidity(caller, request);
        if let Err(e) = &result {
            debug!(provider = %caller, error = %e, "remove liquidity rejected");
        }
        result
    }
}
