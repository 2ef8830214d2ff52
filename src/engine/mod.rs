//! The pair engine: liquidity, swaps and prices over a [`PoolLedger`].
//!
//! [`PairEngine`] implements [`LiquidityManager`](crate::traits::LiquidityManager),
//! [`SwapEngine`](crate::traits::SwapEngine) and
//! [`PriceOracle`](crate::traits::PriceOracle).  Every mutating call
//! follows the same shape:
//!
//! 1. Check the deadline against the clock.
//! 2. Canonicalize the pair.
//! 3. Lock the pair and validate, producing a [`PoolUpdate`](crate::ledger::PoolUpdate).
//! 4. Run the transfers through a settlement, which reverses applied
//!    legs if a later one fails.
//! 5. Apply the update, publish the snapshot and emit the event, still
//!    under the pair lock.

mod liquidity;
mod oracle;
mod settlement;
mod swap;

use core::fmt;
use std::sync::Arc;

use crate::config::EngineConfig;
use crate::domain::{AssetId, AssetPairKey, PoolEvent, SwapDirection, Timestamp};
use crate::error::AmmError;
use crate::host::{Clock, EventSink, TokenTransfer};
use crate::ledger::PoolLedger;

/// Constant-product engine holding one pool per unordered asset pair.
///
/// Generic over the host's transfer capability `T` and clock `C`.  The
/// engine is `Sync` whenever they are, so one instance can be shared by
/// reference across threads; operations on different pairs never wait
/// on each other.
///
/// # Examples
///
/// ```
/// use pairswap::config::EngineConfig;
/// use pairswap::domain::{AccountId, AddLiquidity, Amount, AssetId, SwapExactIn, Timestamp};
/// use pairswap::engine::PairEngine;
/// use pairswap::host::{InMemoryBank, ManualClock};
/// use pairswap::traits::{LiquidityManager, SwapEngine};
///
/// let usd = AssetId::from_bytes([1u8; 32]);
/// let eur = AssetId::from_bytes([2u8; 32]);
/// let alice = AccountId::from_bytes([0xA1; 32]);
/// let custody = AccountId::from_bytes([0xCC; 32]);
///
/// let bank = InMemoryBank::new();
/// bank.mint(&usd, &alice, Amount::new(20_000)).expect("mint");
/// bank.mint(&eur, &alice, Amount::new(20_000)).expect("mint");
///
/// let config = EngineConfig::default_with_custody(custody).expect("valid");
/// let engine = PairEngine::new(config, bank.clone(), ManualClock::new(Timestamp::from_secs(0)))
///     .expect("engine");
///
/// engine
///     .add_liquidity(alice, &AddLiquidity {
///         asset_x: usd,
///         asset_y: eur,
///         amount_x: Amount::new(10_000),
///         amount_y: Amount::new(20_000),
///         min_x: Amount::ZERO,
///         min_y: Amount::ZERO,
///         recipient: alice,
///         deadline: Timestamp::MAX,
///     })
///     .expect("seeded");
///
/// let out = engine
///     .swap_exact_in(alice, &SwapExactIn {
///         asset_in: usd,
///         asset_out: eur,
///         amount_in: Amount::new(100),
///         amount_out_min: Amount::new(190),
///         recipient: alice,
///         deadline: Timestamp::MAX,
///     })
///     .expect("swapped");
/// assert_eq!(out, Amount::new(198));
/// ```
pub struct PairEngine<T, C> {
    config: EngineConfig,
    ledger: PoolLedger,
    transfer: T,
    clock: C,
    sink: Option<Arc<dyn EventSink>>,
}

impl<T: TokenTransfer, C: Clock> PairEngine<T, C> {
    /// Creates an engine with an empty ledger.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`EngineConfig::validate`].
    pub fn new(config: EngineConfig, transfer: T, clock: C) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            config,
            ledger: PoolLedger::new(),
            transfer,
            clock,
            sink: None,
        })
    }

    /// Attaches an event sink.  Without one, events are not reported.
    #[must_use]
    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Underlying pool ledger.
    #[must_use]
    pub const fn ledger(&self) -> &PoolLedger {
        &self.ledger
    }

    /// Transfer capability the engine settles through.
    #[must_use]
    pub const fn transfer(&self) -> &T {
        &self.transfer
    }

    /// Clock used for deadline checks.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    fn check_deadline(&self, deadline: Timestamp) -> Result<(), AmmError> {
        let now = self.clock.now();
        if now > deadline {
            return Err(AmmError::Expired { now, deadline });
        }
        Ok(())
    }

    fn emit(&self, event: impl Into<PoolEvent>) {
        if let Some(sink) = &self.sink {
            sink.emit(&event.into());
        }
    }
}

impl<T, C> fmt::Debug for PairEngine<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairEngine")
            .field("config", &self.config)
            .field("pairs", &self.ledger.len())
            .field("has_sink", &self.sink.is_some())
            .finish_non_exhaustive()
    }
}

/// Canonical key plus the mapping between the caller's `(x, y)` order
/// and the pool's `(low, high)` order.
#[derive(Debug, Clone, Copy)]
struct Orientation {
    key: AssetPairKey,
    x_is_low: bool,
}

impl Orientation {
    fn resolve(asset_x: AssetId, asset_y: AssetId) -> Result<Self, AmmError> {
        let key = AssetPairKey::new(asset_x, asset_y)?;
        Ok(Self {
            key,
            x_is_low: key.is_low(&asset_x),
        })
    }

    /// `(x, y)` → `(low, high)`.
    fn to_canonical<V>(self, x: V, y: V) -> (V, V) {
        if self.x_is_low {
            (x, y)
        } else {
            (y, x)
        }
    }

    /// `(low, high)` → `(x, y)`.
    fn to_caller<V>(self, low: V, high: V) -> (V, V) {
        // The permutation is its own inverse.
        self.to_canonical(low, high)
    }

    /// Direction of a swap selling `x` for `y`.
    const fn direction(self) -> SwapDirection {
        if self.x_is_low {
            SwapDirection::LowToHigh
        } else {
            SwapDirection::HighToLow
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::AccountId;
    use crate::host::{InMemoryBank, ManualClock};

    fn engine(now: u64) -> PairEngine<InMemoryBank, ManualClock> {
        let Ok(config) = EngineConfig::default_with_custody(AccountId::from_bytes([0xCC; 32]))
        else {
            panic!("valid config");
        };
        let Ok(engine) = PairEngine::new(
            config,
            InMemoryBank::new(),
            ManualClock::new(Timestamp::from_secs(now)),
        ) else {
            panic!("engine");
        };
        engine
    }

    #[test]
    fn deadline_equal_to_now_passes() {
        let engine = engine(100);
        assert!(engine.check_deadline(Timestamp::from_secs(100)).is_ok());
        assert_eq!(
            engine.check_deadline(Timestamp::from_secs(99)),
            Err(AmmError::Expired {
                now: Timestamp::from_secs(100),
                deadline: Timestamp::from_secs(99),
            })
        );
    }

    #[test]
    fn orientation_round_trips() {
        let a = AssetId::from_bytes([9u8; 32]);
        let b = AssetId::from_bytes([3u8; 32]);
        let Ok(o) = Orientation::resolve(a, b) else {
            panic!("distinct");
        };
        assert!(!o.x_is_low);
        assert_eq!(o.to_canonical(1, 2), (2, 1));
        assert_eq!(o.to_caller(2, 1), (1, 2));
        assert_eq!(o.direction(), SwapDirection::HighToLow);
        assert_eq!(o.key.low(), b);
    }

    #[test]
    fn orientation_rejects_identical() {
        let a = AssetId::from_bytes([9u8; 32]);
        let Err(AmmError::IdenticalAssets) = Orientation::resolve(a, a) else {
            panic!("expected IdenticalAssets");
        };
    }

    #[test]
    fn debug_does_not_require_host_debug() {
        let rendered = format!("{:?}", engine(0));
        assert!(rendered.contains("PairEngine"));
    }
}
