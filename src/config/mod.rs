//! Engine configuration.
//!
//! [`EngineConfig`] is validated on construction and fixed for the
//! lifetime of an engine.  [`InitialSharePolicy`] selects how the first
//! deposit into an empty pool is converted into shares.

mod engine_config;
mod share_policy;

pub use engine_config::EngineConfig;
pub use share_policy::InitialSharePolicy;
