//! Pool storage.
//!
//! [`PoolLedger`] maps canonical pair keys to [`PoolRecord`]s.  Each
//! record owns one [`PoolState`] behind a fair mutex and publishes a
//! [`PoolSnapshot`] for lock-free readers.

mod pool_ledger;
mod pool_state;

pub use pool_ledger::{PoolGuard, PoolLedger, PoolRecord};
pub use pool_state::{PoolSnapshot, PoolState, PoolUpdate};
