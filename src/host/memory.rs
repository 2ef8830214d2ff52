//! In-memory balance book implementing [`TokenTransfer`].
//!
//! Suitable for:
//! - Unit and integration tests
//! - Simulations and demos
//! - Hosts whose balances live in the same process

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::{TokenTransfer, TransferError};
use crate::domain::{AccountId, Amount, AssetId};

/// Thread-safe `(asset, account) → balance` map.
///
/// Clones share the same balances.  Transfers refuse overdrafts and are
/// applied under one write lock, so a transfer is all-or-nothing.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{AccountId, Amount, AssetId};
/// use pairswap::host::{InMemoryBank, TokenTransfer};
///
/// let bank = InMemoryBank::new();
/// let usd = AssetId::from_bytes([1u8; 32]);
/// let alice = AccountId::from_bytes([0xA1; 32]);
/// let bob = AccountId::from_bytes([0xB0; 32]);
///
/// bank.mint(&usd, &alice, Amount::new(100)).expect("mint");
/// bank.transfer(&usd, &alice, &bob, Amount::new(40)).expect("transfer");
/// assert_eq!(bank.balance_of(&usd, &alice), Amount::new(60));
/// assert_eq!(bank.balance_of(&usd, &bob), Amount::new(40));
/// assert!(bank.transfer(&usd, &alice, &bob, Amount::new(61)).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryBank {
    balances: Arc<RwLock<HashMap<(AssetId, AccountId), Amount>>>,
}

impl InMemoryBank {
    /// Creates a bank with no balances.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` of `asset` to `account` out of thin air.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::Rejected`] if the balance would overflow.
    pub fn mint(
        &self,
        asset: &AssetId,
        account: &AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let mut balances = self.balances.write();
        let entry = balances.entry((*asset, *account)).or_default();
        *entry = entry
            .checked_add(&amount)
            .ok_or_else(|| TransferError::Rejected("balance overflow".to_string()))?;
        Ok(())
    }

    /// Balance of `asset` held by `account`; zero if never credited.
    pub fn balance_of(&self, asset: &AssetId, account: &AccountId) -> Amount {
        self.balances
            .read()
            .get(&(*asset, *account))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Sum of all balances of `asset`.
    ///
    /// Returns `None` if the sum overflows `u128`.
    #[must_use]
    pub fn total_supply(&self, asset: &AssetId) -> Option<Amount> {
        self.balances
            .read()
            .iter()
            .filter(|((a, _), _)| a == asset)
            .try_fold(Amount::ZERO, |acc, (_, v)| acc.checked_add(v))
    }
}

impl TokenTransfer for InMemoryBank {
    fn transfer(
        &self,
        asset: &AssetId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let mut balances = self.balances.write();
        let available = balances
            .get(&(*asset, *from))
            .copied()
            .unwrap_or(Amount::ZERO);
        let Some(debited) = available.checked_sub(&amount) else {
            return Err(TransferError::InsufficientBalance {
                asset: *asset,
                account: *from,
                available,
                requested: amount,
            });
        };
        if from == to || amount.is_zero() {
            return Ok(());
        }
        let credited = balances
            .get(&(*asset, *to))
            .copied()
            .unwrap_or(Amount::ZERO)
            .checked_add(&amount)
            .ok_or_else(|| TransferError::Rejected("balance overflow".to_string()))?;
        balances.insert((*asset, *from), debited);
        balances.insert((*asset, *to), credited);
        Ok(())
    }
}
