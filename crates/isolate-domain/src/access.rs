//! Access level (visibility tier) of an isolate record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Visibility tier of an isolate record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum AccessLevel {
    Public,
    Limited,
    Restricted,
}

impl AccessLevel {
    /// All levels in declaration order.
    pub const ALL: [AccessLevel; 3] = [AccessLevel::Public, AccessLevel::Limited, AccessLevel::Restricted];

    /// The display label, which doubles as the facet label.
    pub fn label(&self) -> &'static str {
        match self {
            AccessLevel::Public => "Public",
            AccessLevel::Limited => "Limited",
            AccessLevel::Restricted => "Restricted",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AccessLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "public" => Ok(AccessLevel::Public),
            "limited" => Ok(AccessLevel::Limited),
            "restricted" => Ok(AccessLevel::Restricted),
            _ => Err(DomainError::InvalidAccessLevel(s.to_string())),
        }
    }
}
