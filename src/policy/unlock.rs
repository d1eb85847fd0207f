// src/policy/unlock.rs

use crate::domain::{Community, UserTier};
use crate::errors::{LedgerError, UnlockError};
use std::fmt;
use tracing::{info, warn};

/// Whose credits get spent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(pub String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// External credit balance. One call, one settled outcome; retries are the
/// caller's business.
pub trait CreditLedger {
    fn debit(&mut self, account: &AccountId, amount: u32) -> Result<(), LedgerError>;
}

/// Spends `credits_required` and returns the unlocked copy.
///
/// Already-unlocked communities come back as-is with no debit. On failure the
/// input is untouched and the user can retry later.
pub fn unlock<L: CreditLedger>(
    community: &Community,
    tier: UserTier,
    account: &AccountId,
    ledger: &mut L,
) -> Result<Community, UnlockError> {
    if community.unlocked {
        info!(id = %community.id, %account, "community already unlocked, no debit");
        return Ok(community.clone());
    }

    match ledger.debit(account, community.credits_required) {
        Ok(()) => {
            info!(
                id = %community.id,
                %account,
                %tier,
                credits = community.credits_required,
                "community unlocked"
            );
            Ok(community.clone().into_unlocked())
        }
        Err(err) => {
            warn!(id = %community.id, %account, %tier, error = %err, "unlock failed");
            Err(err.into())
        }
    }
}
