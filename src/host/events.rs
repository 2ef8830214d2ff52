//! Optional observer of committed pool mutations.

use parking_lot::Mutex;

use crate::domain::PoolEvent;

/// Receives every committed [`PoolEvent`].
///
/// Events for one pair arrive in commit order.  A sink must not call
/// back into the engine for the same pair: it runs while that pair's
/// lock is held.
pub trait EventSink: Send + Sync {
    /// Called once per committed mutation.
    fn emit(&self, event: &PoolEvent);
}

/// Sink that keeps every event in memory.
///
/// # Examples
///
/// ```
/// use pairswap::host::{EventSink, RecordingSink};
///
/// let sink = RecordingSink::new();
/// assert!(sink.events().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<PoolEvent>>,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all events recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<PoolEvent> {
        self.events.lock().clone()
    }

    /// Removes and returns all recorded events.
    #[must_use]
    pub fn drain(&self) -> Vec<PoolEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &PoolEvent) {
        self.events.lock().push(*event);
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{AccountId, Amount, AssetId, AssetPairKey, SwapDirection, Swapped};

    fn event(amount_in: u128) -> PoolEvent {
        let pair = AssetPairKey::new(AssetId::from_bytes([1u8; 32]), AssetId::from_bytes([2u8; 32]));
        let Ok(pair) = pair else {
            panic!("distinct assets");
        };
        Swapped {
            pair,
            caller: AccountId::from_bytes([3u8; 32]),
            recipient: AccountId::from_bytes([3u8; 32]),
            direction: SwapDirection::HighToLow,
            amount_in: Amount::new(amount_in),
            amount_out: Amount::new(1),
        }
        .into()
    }

    #[test]
    fn records_in_order_and_drains() {
        let sink = RecordingSink::new();
        sink.emit(&event(1));
        sink.emit(&event(2));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.events(), vec![event(1), event(2)]);
        assert_eq!(sink.drain().len(), 2);
        assert!(sink.is_empty());
    }
}
