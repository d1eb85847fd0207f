// src/errors.rs
use thiserror::Error;

/// Errors raised while loading catalog inputs (records, config).
/// The view pipeline itself never fails.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid community data: {0}")]
    InvalidRecords(String),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Failures reported by a credit ledger.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Insufficient credits: {required} required, {available} available")]
    InsufficientCredits { required: u32, available: i64 },
    #[error("Ledger error: {0}")]
    Backend(String),
}

/// Outcome of a failed unlock. The record is left untouched in every case.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnlockError {
    #[error("Insufficient credits: {required} required, {available} available")]
    InsufficientCredits { required: u32, available: i64 },
    #[error("Unknown community: {0}")]
    UnknownCommunity(String),
    #[error("Credit ledger unavailable: {0}")]
    Ledger(String),
}

impl From<LedgerError> for UnlockError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientCredits {
                required,
                available,
            } => UnlockError::InsufficientCredits {
                required,
                available,
            },
            LedgerError::Backend(msg) => UnlockError::Ledger(msg),
        }
    }
}
