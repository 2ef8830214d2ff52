//! Integer arithmetic for pool calculations.
//!
//! Every function here is pure: inputs in, result out, no state.
//!
//! - [`CheckedArithmetic`] lifts quantity overflow into [`AmmError`](crate::error::AmmError).
//! - [`mul_div`] evaluates `a × b ÷ d` with a 256-bit intermediate.
//! - [`quote_output`], [`quote_input`], [`spot_price`], [`quote`] price
//!   swaps against a pair of reserves.
//! - [`plan_deposit`], [`withdrawal_amounts`] size liquidity changes.

mod checked;
mod full_math;
mod liquidity_math;
mod swap_math;

pub use checked::CheckedArithmetic;
pub use full_math::{mul_div, sqrt_of_product, widening_mul};
pub use liquidity_math::{plan_deposit, withdrawal_amounts, DepositPlan};
pub use swap_math::{quote, quote_input, quote_output, spot_price};
