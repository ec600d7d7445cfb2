//! Market status and trading counter generators.

use std::collections::BTreeMap;

use super::random::RandomSource;
use crate::domain::{ChainActivity, TradingMetrics};
use crate::error::Result;

/// Chains reported in the market status panel and the draw each must beat
/// to report `Active`.
pub const STATUS_THRESHOLDS: [(&str, f64); 5] = [
    ("ethereum", 0.1),
    ("bsc", 0.05),
    ("polygon", 0.08),
    ("arbitrum", 0.15),
    ("optimism", 0.12),
];

pub fn generate_market_status<R>(random: &mut R) -> Result<BTreeMap<String, ChainActivity>>
where
    R: RandomSource + ?Sized,
{
    STATUS_THRESHOLDS
        .iter()
        .map(|&(chain, threshold)| -> Result<(String, ChainActivity)> {
            let activity = if random.unit()? > threshold {
                ChainActivity::Active
            } else {
                ChainActivity::Slow
            };
            Ok((chain.to_string(), activity))
        })
        .collect()
}

pub fn generate_trading_metrics<R>(random: &mut R) -> Result<TradingMetrics>
where
    R: RandomSource + ?Sized,
{
    Ok(TradingMetrics {
        trades_executed: random.whole(15, 20)?,
        success_rate: random.uniform(75.0, 20.0)?,
        total_profit: random.uniform(800.0, 1000.0)?,
        gas_fees: random.uniform(50.0, 150.0)?,
    })
}
