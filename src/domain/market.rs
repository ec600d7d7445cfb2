//! Market-wide telemetry: per-chain status and trading counters.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainActivity {
    Active,
    Slow,
}

impl fmt::Display for ChainActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("Active"),
            Self::Slow => f.write_str("Slow"),
        }
    }
}

/// Session trading counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradingMetrics {
    pub trades_executed: u32,
    pub success_rate: f64,
    pub total_profit: f64,
    pub gas_fees: f64,
}
