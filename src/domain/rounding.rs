//! Explicit rounding direction for integer division.

/// Rounding direction for every division performed by the engine.
///
/// All division in the crate takes an explicit `Rounding` so that the
/// direction of rounding loss is visible at the call site.  Amounts paid
/// out by a pool round [`Down`](Rounding::Down); amounts owed to a pool
/// round [`Up`](Rounding::Up).
///
/// # Examples
///
/// ```
/// use pairswap::domain::Rounding;
///
/// assert!(Rounding::Up.is_up());
/// assert!(Rounding::Down.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
