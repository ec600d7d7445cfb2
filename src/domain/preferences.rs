//! User-facing preferences kept in the store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which dashboard view is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Dashboard,
    Trading,
    Analytics,
    Portfolio,
    Contracts,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

impl RiskTolerance {
    /// Numeric level used by the on-chain profile (1 to 3).
    #[must_use]
    pub fn level(self) -> u8 {
        match self {
            Self::Conservative => 1,
            Self::Moderate => 2,
            Self::Aggressive => 3,
        }
    }
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Conservative => "Conservative",
            Self::Moderate => "Moderate",
            Self::Aggressive => "Aggressive",
        };
        f.write_str(label)
    }
}
