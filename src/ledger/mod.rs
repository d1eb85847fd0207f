pub mod memory;
pub mod sqlite;

pub use memory::{Debit, MemoryLedger};
pub use sqlite::SqliteLedger;
