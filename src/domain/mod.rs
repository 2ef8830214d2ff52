//! Fundamental domain value types used throughout the engine.
//!
//! Identifiers, quantities, prices, timestamps, request parameters and
//! event records.  Quantities are newtypes over `u128` with checked
//! arithmetic so that overflow surfaces as an error instead of a wrap.

mod amount;
mod asset_id;
mod direction;
mod events;
mod liquidity_request;
mod pair_key;
mod price;
mod rounding;
mod shares;
mod swap_request;
mod timestamp;

pub use amount::Amount;
pub use asset_id::{AccountId, AssetId};
pub use direction::SwapDirection;
pub use events::{LiquidityAdded, LiquidityRemoved, PoolEvent, Swapped};
pub use liquidity_request::{AddLiquidity, RemoveLiquidity};
pub use pair_key::AssetPairKey;
pub use price::Price;
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap_request::{SwapExactIn, SwapExactOut};
pub use timestamp::Timestamp;
