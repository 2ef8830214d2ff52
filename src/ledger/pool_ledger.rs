//! Arena of pool records indexed by canonical pair key.
//!
//! The index is a `parking_lot::RwLock<HashMap<..>>` held only long
//! enough to clone an [`Arc<PoolRecord>`] out of it, so no caller ever
//! holds the index lock while waiting for a pair lock.

use std::collections::HashMap;
use std::ops::Deref;
use std::sync::Arc;

use parking_lot::{FairMutex, FairMutexGuard, RwLock};

use super::{PoolSnapshot, PoolState, PoolUpdate};
use crate::domain::AssetPairKey;

/// One pair's state behind its own lock, plus the last published
/// snapshot.
///
/// Writers serialize on a [`FairMutex`], which hands the lock to waiters
/// in arrival order.  Readers never touch that mutex: they copy the
/// snapshot, which is replaced only when an update is applied.
#[derive(Debug)]
pub struct PoolRecord {
    key: AssetPairKey,
    state: FairMutex<PoolState>,
    published: RwLock<PoolSnapshot>,
}

impl PoolRecord {
    fn new(key: AssetPairKey) -> Self {
        Self {
            key,
            state: FairMutex::new(PoolState::new()),
            published: RwLock::new(PoolSnapshot::default()),
        }
    }

    /// Pair this record belongs to.
    #[must_use]
    pub const fn key(&self) -> AssetPairKey {
        self.key
    }

    /// Last committed snapshot; never blocks on an in-flight mutation.
    #[must_use]
    pub fn snapshot(&self) -> PoolSnapshot {
        *self.published.read()
    }

    /// Acquires the pair lock, waiting in FIFO order behind earlier
    /// callers.
    pub fn lock(&self) -> PoolGuard<'_> {
        PoolGuard {
            record: self,
            state: self.state.lock(),
        }
    }
}

/// Exclusive access to one pool.
///
/// Dereferences to [`PoolState`] for reads and planning.  The only way to
/// mutate is [`PoolGuard::apply`], which also publishes the new snapshot,
/// so the published view can never lag a committed change.
#[derive(Debug)]
pub struct PoolGuard<'a> {
    record: &'a PoolRecord,
    state: FairMutexGuard<'a, PoolState>,
}

impl PoolGuard<'_> {
    /// Pair this guard locks.
    #[must_use]
    pub const fn key(&self) -> AssetPairKey {
        self.record.key
    }

    /// Commits `update` and publishes the resulting snapshot.
    pub fn apply(&mut self, update: PoolUpdate) {
        self.state.apply(update);
        *self.record.published.write() = self.state.snapshot();
    }
}

impl Deref for PoolGuard<'_> {
    type Target = PoolState;

    fn deref(&self) -> &PoolState {
        &self.state
    }
}

/// Mapping from [`AssetPairKey`] to pool records.
///
/// Records are created on first use.  A record holding no shares can be
/// dropped again with [`PoolLedger::remove_if_vacant`]; records with
/// outstanding shares are never removed.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{AssetId, AssetPairKey};
/// use pairswap::ledger::PoolLedger;
///
/// let ledger = PoolLedger::new();
/// let key = AssetPairKey::new(AssetId::from_bytes([2u8; 32]), AssetId::from_bytes([1u8; 32]))
///     .expect("distinct assets");
/// assert!(ledger.get(&key).is_none());
///
/// let record = ledger.get_or_create(key);
/// assert!(!record.snapshot().has_liquidity());
/// assert_eq!(ledger.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct PoolLedger {
    index: RwLock<HashMap<AssetPairKey, Arc<PoolRecord>>>,
}

impl PoolLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record for `key`, creating an empty one if needed.
    #[must_use]
    pub fn get_or_create(&self, key: AssetPairKey) -> Arc<PoolRecord> {
        if let Some(record) = self.index.read().get(&key) {
            return Arc::clone(record);
        }
        let mut index = self.index.write();
        Arc::clone(
            index
                .entry(key)
                .or_insert_with(|| Arc::new(PoolRecord::new(key))),
        )
    }

    /// Removes the record for `key` if it holds no shares and no caller
    /// other than the index still references it.  Returns `true` if a
    /// record was removed.
    ///
    /// Callers must drop their own `Arc` first.  A record cloned by a
    /// concurrent caller is kept, so an in-flight add is never orphaned.
    pub fn remove_if_vacant(&self, key: &AssetPairKey) -> bool {
        let mut index = self.index.write();
        let vacant = index.get(key).is_some_and(|record| {
            Arc::strong_count(record) == 1
                && record.state.try_lock().is_some_and(|state| state.is_empty())
        });
        if vacant {
            index.remove(key);
        }
        vacant
    }

    /// Returns the record for `key` without creating one.
    #[must_use]
    pub fn get(&self, key: &AssetPairKey) -> Option<Arc<PoolRecord>> {
        self.index.read().get(key).map(Arc::clone)
    }

    /// Published snapshot for `key`; the empty snapshot if absent.
    #[must_use]
    pub fn snapshot(&self, key: &AssetPairKey) -> PoolSnapshot {
        self.get(key)
            .map_or_else(PoolSnapshot::default, |record| record.snapshot())
    }

    /// All known pairs in canonical order.
    #[must_use]
    pub fn pairs(&self) -> Vec<AssetPairKey> {
        let mut keys: Vec<AssetPairKey> = self.index.read().keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Number of records, including empty ones not yet removed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.read().len()
    }

    /// Returns `true` if no record has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.read().is_empty()
    }
}
