//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use pairswap::prelude::*;
//! ```

pub use crate::domain::{
    AccountId, AddLiquidity, Amount, AssetId, AssetPairKey, PoolEvent, Price, RemoveLiquidity,
    Shares, SwapDirection, SwapExactIn, SwapExactOut, Timestamp,
};

pub use crate::traits::{LiquidityManager, PriceOracle, SwapEngine};

pub use crate::config::{EngineConfig, InitialSharePolicy};

pub use crate::engine::PairEngine;

pub use crate::host::{
    Clock, EventSink, InMemoryBank, ManualClock, RecordingSink, SystemClock, TokenTransfer,
    TransferError,
};

pub use crate::error::{AmmError, Result};
