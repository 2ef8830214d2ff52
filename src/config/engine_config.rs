//! Engine-wide configuration.

use serde::{Deserialize, Serialize};

use super::InitialSharePolicy;
use crate::domain::AccountId;
use crate::error::AmmError;

/// Immutable parameters of a [`PairEngine`](crate::engine::PairEngine).
///
/// # Fields
///
/// - `custody`: account that holds every pool's reserves.  All deposits
///   and swap inputs are transferred to it; all payouts come from it.
/// - `initial_share_policy`: see [`InitialSharePolicy`].
///
/// # Validation
///
/// - `custody` must not be the all-zero account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    custody: AccountId,
    #[serde(default)]
    initial_share_policy: InitialSharePolicy,
}

impl EngineConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `custody` is the
    /// zero account.
    pub fn new(
        custody: AccountId,
        initial_share_policy: InitialSharePolicy,
    ) -> Result<Self, AmmError> {
        let config = Self {
            custody,
            initial_share_policy,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reference settings: the given custody account and
    /// [`InitialSharePolicy::FirstAssetAmount`].
    ///
    /// # Errors
    ///
    /// Same as [`EngineConfig::new`].
    pub fn default_with_custody(custody: AccountId) -> Result<Self, AmmError> {
        Self::new(custody, InitialSharePolicy::default())
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `custody` is the
    /// zero account.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.custody.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "custody account must not be zero",
            ));
        }
        Ok(())
    }

    /// Returns the custody account.
    #[must_use]
    pub const fn custody(&self) -> AccountId {
        self.custody
    }

    /// Returns the initial share policy.
    #[must_use]
    pub const fn initial_share_policy(&self) -> InitialSharePolicy {
        self.initial_share_policy
    }
}
