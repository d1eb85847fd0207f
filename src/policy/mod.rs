pub mod access;
pub mod unlock;

pub use access::{visibility, AccessPolicy, Field, Visibility};
pub use unlock::{unlock, AccountId, CreditLedger};
