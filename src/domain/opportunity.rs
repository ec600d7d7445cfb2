//! Synthetic cross-venue arbitrage opportunities.
//!
//! An [`Opportunity`] pairs two [`Venue`] quotes for the same token pair.
//! Its profit potential is derived from the two prices and its [`Rating`] is a
//! pure function of that potential.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One side of an opportunity: a chain, the exchange quoting on it and the price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub chain: String,
    pub price: f64,
    pub exchange: String,
    pub icon: String,
}

/// Coarse risk bucket attached to every opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// All levels in draw order.
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        f.write_str(label)
    }
}

/// Qualitative rating derived from profit potential.
///
/// Thresholds are strict: a potential sitting exactly on a boundary gets the
/// lower rating (1.8 is `Good`, 1.2 is `Moderate`, 0.6 is `Low`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "LOW PRIORITY")]
    Low,
    #[serde(rename = "MODERATE")]
    Moderate,
    #[serde(rename = "GOOD TRADE")]
    Good,
    #[serde(rename = "PRIME OPPORTUNITY")]
    Prime,
}

impl Rating {
    pub const PRIME_ABOVE: f64 = 1.8;
    pub const GOOD_ABOVE: f64 = 1.2;
    pub const MODERATE_ABOVE: f64 = 0.6;

    /// Rate a profit potential expressed in percent.
    #[must_use]
    pub fn from_profit_potential(percent: f64) -> Self {
        if percent > Self::PRIME_ABOVE {
            Self::Prime
        } else if percent > Self::GOOD_ABOVE {
            Self::Good
        } else if percent > Self::MODERATE_ABOVE {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Prime => "PRIME OPPORTUNITY",
            Self::Good => "GOOD TRADE",
            Self::Moderate => "MODERATE",
            Self::Low => "LOW PRIORITY",
        };
        f.write_str(label)
    }
}

/// A hypothetical price discrepancy between two venues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: String,
    pub token_pair: String,
    pub chain_a: Venue,
    pub chain_b: Venue,
    /// Price spread as a percentage of the `chain_a` price, rounded to 3 places.
    pub profit_potential: f64,
    pub risk: RiskLevel,
    pub confidence: f64,
    pub estimated_gas: f64,
    pub time_window_secs: f64,
    pub rating: Rating,
    pub volume_24h: f64,
    pub liquidity: f64,
}

/// A price difference as a percentage of `base`, unrounded.
#[must_use]
pub fn spread_percent(diff: f64, base: f64) -> f64 {
    diff / base * 100.0
}

/// Round to three decimal places, half away from zero.
#[must_use]
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_thresholds() {
        assert_eq!(Rating::from_profit_potential(2.5), Rating::Prime);
        assert_eq!(Rating::from_profit_potential(1.5), Rating::Good);
        assert_eq!(Rating::from_profit_potential(0.9), Rating::Moderate);
        assert_eq!(Rating::from_profit_potential(0.1), Rating::Low);
        assert_eq!(Rating::from_profit_potential(-3.0), Rating::Low);
    }

    #[test]
    fn rating_boundaries_round_down() {
        assert_eq!(Rating::from_profit_potential(1.8), Rating::Good);
        assert_eq!(Rating::from_profit_potential(1.2), Rating::Moderate);
        assert_eq!(Rating::from_profit_potential(0.6), Rating::Low);

        assert_eq!(Rating::from_profit_potential(1.800_000_1), Rating::Prime);
        assert_eq!(Rating::from_profit_potential(1.200_000_1), Rating::Good);
        assert_eq!(Rating::from_profit_potential(0.600_000_1), Rating::Moderate);
    }

    #[test]
    fn rating_nan_is_low() {
        assert_eq!(Rating::from_profit_potential(f64::NAN), Rating::Low);
    }

    #[test]
    fn rating_orders_by_quality() {
        assert!(Rating::Prime > Rating::Good);
        assert!(Rating::Good > Rating::Moderate);
        assert!(Rating::Moderate > Rating::Low);
    }

    #[test]
    fn rating_serializes_as_label() {
        let json = serde_json::to_string(&Rating::Prime).unwrap();
        assert_eq!(json, "\"PRIME OPPORTUNITY\"");
        assert_eq!(Rating::Low.to_string(), "LOW PRIORITY");
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(0.052_857), 0.053);
        assert_eq!(round3(0.03), 0.03);
        assert_eq!(round3(0.1234), 0.123);
    }
}
