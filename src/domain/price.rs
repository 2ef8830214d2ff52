//! Exchange rate as an 18-decimal fixed-point integer.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Exchange rate between two assets, scaled by [`Price::SCALE`].
///
/// A raw value of `2 * 10^18` means "two units of the quote asset per
/// unit of the base asset".  No floating point is involved: the value is
/// produced by floor division on integers.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Price;
///
/// let p = Price::from_raw(2_500_000_000_000_000_000);
/// assert_eq!(p.integer_part(), 2);
/// assert_eq!(p.to_string(), "2.500000000000000000");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u128);

impl Price {
    /// Number of fractional decimal digits.
    pub const DECIMALS: u32 = 18;

    /// Fixed-point scale (`10^18`).
    pub const SCALE: u128 = 1_000_000_000_000_000_000;

    /// Price ratio of 1:1.
    pub const ONE: Self = Self(Self::SCALE);

    /// Price ratio of zero.
    pub const ZERO: Self = Self(0);

    /// Wraps an already-scaled raw value.
    #[must_use]
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Returns the scaled raw value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Whole-unit part of the ratio.
    #[must_use]
    pub const fn integer_part(&self) -> u128 {
        self.0 / Self::SCALE
    }

    /// Fractional part, in units of `10^-18`.
    #[must_use]
    pub const fn fractional_part(&self) -> u128 {
        self.0 % Self::SCALE
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:018}",
            self.integer_part(),
            self.fractional_part()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(Price::ONE.get(), 10u128.pow(Price::DECIMALS));
        assert_eq!(Price::ZERO.get(), 0);
        assert!(Price::ZERO < Price::ONE);
    }

    #[test]
    fn parts() {
        let p = Price::from_raw(3 * Price::SCALE + 7);
        assert_eq!(p.integer_part(), 3);
        assert_eq!(p.fractional_part(), 7);
    }

    #[test]
    fn display_pads_fraction() {
        assert_eq!(Price::ONE.to_string(), "1.000000000000000000");
        assert_eq!(Price::from_raw(5).to_string(), "0.000000000000000005");
    }
}
