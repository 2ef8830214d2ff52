//! # pairswap
//!
//! Fee-less constant-product liquidity pool engine: one pool per
//! unordered pair of assets, proportional claim shares, and exact integer
//! swap math.
//!
//! The engine tracks reserves and shares only.  Moving value and reading
//! time are delegated to the host through two narrow capabilities,
//! [`TokenTransfer`](host::TokenTransfer) and [`Clock`](host::Clock).
//!
//! # Quick Start
//!
//! ```rust
//! use pairswap::prelude::*;
//!
//! let usd = AssetId::from_bytes([1u8; 32]);
//! let eur = AssetId::from_bytes([2u8; 32]);
//! let alice = AccountId::from_bytes([0xA1; 32]);
//!
//! // 1. Host capabilities: an in-memory bank and a fixed clock
//! let bank = InMemoryBank::new();
//! bank.mint(&usd, &alice, Amount::new(50_000)).expect("mint");
//! bank.mint(&eur, &alice, Amount::new(50_000)).expect("mint");
//! let clock = ManualClock::new(Timestamp::from_secs(1_700_000_000));
//!
//! // 2. Engine with all reserves held by a custody account
//! let config = EngineConfig::default_with_custody(AccountId::from_bytes([0xCC; 32]))
//!     .expect("valid config");
//! let engine = PairEngine::new(config, bank, clock).expect("engine");
//!
//! // 3. Seed the usd/eur pool at 1:2
//! let shares = engine
//!     .add_liquidity(alice, &AddLiquidity {
//!         asset_x: usd,
//!         asset_y: eur,
//!         amount_x: Amount::new(10_000),
//!         amount_y: Amount::new(20_000),
//!         min_x: Amount::ZERO,
//!         min_y: Amount::ZERO,
//!         recipient: alice,
//!         deadline: Timestamp::MAX,
//!     })
//!     .expect("seeded");
//! assert_eq!(shares, Shares::new(10_000));
//!
//! // 4. Price and swap
//! assert_eq!(engine.get_price(usd, eur).expect("price").integer_part(), 2);
//! let out = engine
//!     .swap_exact_in(alice, &SwapExactIn {
//!         asset_in: usd,
//!         asset_out: eur,
//!         amount_in: Amount::new(100),
//!         amount_out_min: Amount::ZERO,
//!         recipient: alice,
//!         deadline: Timestamp::MAX,
//!     })
//!     .expect("swapped");
//! assert_eq!(out, Amount::new(198));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │     Host      │  TokenTransfer, Clock, EventSink
//! └──────┬───────┘
//!        │ injected into
//!        ▼
//! ┌──────────────┐
//! │  PairEngine   │  LiquidityManager + SwapEngine + PriceOracle
//! └──────┬───────┘
//!        │ locks one pair, plans, settles, applies
//!        ▼
//! ┌──────────────┐
//! │  PoolLedger   │  AssetPairKey → PoolRecord (FairMutex<PoolState> + snapshot)
//! └──────┬───────┘
//!        │ pure arithmetic
//!        ▼
//! ┌──────────────┐
//! │     Math      │  quote_output, quote_input, spot_price, plan_deposit
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`AssetPairKey`](domain::AssetPairKey), requests, events |
//! | [`math`] | 256-bit `mul_div`, swap quotes, deposit/withdrawal sizing |
//! | [`ledger`] | [`PoolLedger`](ledger::PoolLedger), [`PoolState`](ledger::PoolState), published snapshots |
//! | [`host`] | Transfer, clock and event-sink capabilities plus in-memory implementations |
//! | [`traits`] | [`LiquidityManager`](traits::LiquidityManager), [`SwapEngine`](traits::SwapEngine), [`PriceOracle`](traits::PriceOracle) |
//! | [`engine`] | [`PairEngine`](engine::PairEngine), the implementation of all three traits |
//! | [`config`] | [`EngineConfig`](config::EngineConfig), [`InitialSharePolicy`](config::InitialSharePolicy) |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod host;
pub mod ledger;
pub mod math;
pub mod prelude;
pub mod traits;

#[cfg(test)]
mod proptest_properties;
