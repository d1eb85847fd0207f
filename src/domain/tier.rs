// src/domain/tier.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Subscription level. Declaration order is the tier order, so each tier
/// sees everything the tiers below it see.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UserTier {
    #[default]
    Basic,
    Pro,
    Intelligence,
}

impl UserTier {
    pub const ALL: [UserTier; 3] = [UserTier::Basic, UserTier::Pro, UserTier::Intelligence];

    /// The tier switcher cycles upward and wraps back to Basic.
    pub fn next(self) -> Self {
        match self {
            UserTier::Basic => UserTier::Pro,
            UserTier::Pro => UserTier::Intelligence,
            UserTier::Intelligence => UserTier::Basic,
        }
    }
}

impl fmt::Display for UserTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UserTier::Basic => "Basic",
            UserTier::Pro => "Pro",
            UserTier::Intelligence => "Intelligence",
        };
        f.write_str(name)
    }
}
