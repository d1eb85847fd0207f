// src/ledger/memory.rs
use crate::errors::LedgerError;
use crate::policy::{AccountId, CreditLedger};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debit {
    pub account: AccountId,
    pub amount: u32,
}

/// In-process ledger: balances in a map plus the list of debits taken.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    balances: BTreeMap<AccountId, i64>,
    debits: Vec<Debit>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(account: &AccountId, credits: u32) -> Self {
        let mut ledger = Self::new();
        ledger.grant(account, credits);
        ledger
    }

    /// Balances only ever grow here; debits are the only way down.
    pub fn grant(&mut self, account: &AccountId, credits: u32) {
        *self.balances.entry(account.clone()).or_insert(0) += i64::from(credits);
    }

    /// Unknown accounts have a zero balance.
    pub fn balance(&self, account: &AccountId) -> i64 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    pub fn debits(&self) -> &[Debit] {
        &self.debits
    }
}

impl CreditLedger for MemoryLedger {
    fn debit(&mut self, account: &AccountId, amount: u32) -> Result<(), LedgerError> {
        if amount == 0 {
            return Ok(());
        }

        let available = self.balance(account);
        if available < i64::from(amount) {
            return Err(LedgerError::InsufficientCredits {
                required: amount,
                available,
            });
        }

        self.balances
            .insert(account.clone(), available - i64::from(amount));
        self.debits.push(Debit {
            account: account.clone(),
            amount,
        });
        Ok(())
    }
}
