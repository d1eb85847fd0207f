// src/ledger/sqlite.rs
use crate::errors::LedgerError;
use crate::policy::{AccountId, CreditLedger};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::info;

const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

fn db_err(what: &str) -> impl Fn(rusqlite::Error) -> LedgerError + '_ {
    move |e| LedgerError::Backend(format!("{what} failed: {e}"))
}

/// Credit balances kept in SQLite. Each debit checks and updates the balance
/// in a single transaction and leaves a row in `credit_debits`.
pub struct SqliteLedger {
    conn: Connection,
}

impl SqliteLedger {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        let conn = Connection::open(path.as_ref()).map_err(db_err("open ledger db"))?;
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self, LedgerError> {
        let conn = Connection::open_in_memory().map_err(db_err("open in-memory ledger"))?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, LedgerError> {
        conn.execute_batch(SCHEMA_SQL)
            .map_err(db_err("apply ledger schema"))?;
        info!("credit ledger schema ready");
        Ok(Self { conn })
    }

    /// Adds credits, creating the account on first grant.
    pub fn grant(&self, account: &AccountId, credits: u32) -> Result<(), LedgerError> {
        let now = Utc::now().naive_utc();
        self.conn
            .execute(
                r#"
                insert into credit_accounts (account_id, balance, updated_at)
                values (?1, ?2, ?3)
                on conflict(account_id) do update set
                    balance = balance + excluded.balance,
                    updated_at = excluded.updated_at
                "#,
                params![account.as_str(), credits, now],
            )
            .map_err(db_err("grant credits"))?;
        Ok(())
    }

    /// Unknown accounts have a zero balance.
    pub fn balance(&self, account: &AccountId) -> Result<i64, LedgerError> {
        let balance: Option<i64> = self
            .conn
            .query_row(
                "select balance from credit_accounts where account_id = ?",
                params![account.as_str()],
                |r| r.get(0),
            )
            .optional()
            .map_err(db_err("read balance"))?;
        Ok(balance.unwrap_or(0))
    }

    pub fn count_debits(&self, account: &AccountId) -> Result<i64, LedgerError> {
        self.conn
            .query_row(
                "select count(*) from credit_debits where account_id = ?",
                params![account.as_str()],
                |r| r.get(0),
            )
            .map_err(db_err("count debits"))
    }
}

impl CreditLedger for SqliteLedger {
    fn debit(&mut self, account: &AccountId, amount: u32) -> Result<(), LedgerError> {
        // Free unlocks need no account row and leave no debit.
        if amount == 0 {
            return Ok(());
        }

        let now = Utc::now().naive_utc();
        let tx = self.conn.transaction().map_err(db_err("begin debit"))?;

        let available: i64 = tx
            .query_row(
                "select balance from credit_accounts where account_id = ?",
                params![account.as_str()],
                |r| r.get(0),
            )
            .optional()
            .map_err(db_err("read balance"))?
            .unwrap_or(0);

        if available < i64::from(amount) {
            // Dropping the transaction rolls it back.
            return Err(LedgerError::InsufficientCredits {
                required: amount,
                available,
            });
        }

        tx.execute(
            "update credit_accounts set balance = balance - ?1, updated_at = ?2 where account_id = ?3",
            params![amount, now, account.as_str()],
        )
        .map_err(db_err("update balance"))?;

        tx.execute(
            "insert into credit_debits (account_id, amount, created_at) values (?, ?, ?)",
            params![account.as_str(), amount, now],
        )
        .map_err(db_err("record debit"))?;

        tx.commit().map_err(db_err("commit debit"))?;
        Ok(())
    }
}
