//! Operation traits implemented by [`PairEngine`](crate::engine::PairEngine).
//!
//! - [`LiquidityManager`] adds and removes liquidity.
//! - [`SwapEngine`] executes exact-in and exact-out swaps.
//! - [`PriceOracle`] reads spot prices.

mod liquidity_manager;
mod price_oracle;
mod swap_engine;

pub use liquidity_manager::LiquidityManager;
pub use price_oracle::PriceOracle;
pub use swap_engine::SwapEngine;
