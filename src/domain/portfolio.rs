//! Portfolio snapshot types.

use serde::{Deserialize, Serialize};

/// A holding inside one portfolio snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: String,
    pub symbol: String,
    pub chain: String,
    pub amount: f64,
    pub value: f64,
    pub pnl: f64,
    pub pnl_percentage: f64,
    pub entry_price: f64,
    pub current_price: f64,
}

/// Trading performance figures recomputed with every snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    pub win_rate: f64,
    pub profit_factor: f64,
    pub sharpe_ratio: f64,
    pub max_drawdown: f64,
    pub total_trades: u32,
    /// Average hold time in minutes.
    pub avg_hold_time: u32,
}

/// Aggregate portfolio state. Replaced wholesale, never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub total_value: f64,
    pub total_pnl: f64,
    pub total_pnl_percentage: f64,
    pub daily_pnl: f64,
    pub positions: Vec<Position>,
    pub performance: Performance,
}

impl Portfolio {
    /// P&L as a percentage of the value before the P&L accrued.
    ///
    /// Returns 0 when that cost basis is zero.
    #[must_use]
    pub fn pnl_percentage(total_value: f64, pnl: f64) -> f64 {
        let basis = total_value - pnl;
        if basis == 0.0 {
            return 0.0;
        }
        pnl / basis * 100.0
    }

    /// Look up a position by id.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<&Position> {
        self.positions.iter().find(|p| p.id == id)
    }

    /// Drop the position with the given id. Returns whether one was removed.
    pub fn remove_position(&mut self, id: &str) -> bool {
        let before = self.positions.len();
        self.positions.retain(|p| p.id != id);
        self.positions.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(id: &str) -> Position {
        Position {
            id: id.to_string(),
            symbol: "ETH".to_string(),
            chain: "Ethereum".to_string(),
            amount: 1.0,
            value: 2000.0,
            pnl: 100.0,
            pnl_percentage: 5.0,
            entry_price: 1900.0,
            current_price: 2000.0,
        }
    }

    #[test]
    fn default_portfolio_is_zeroed() {
        let portfolio = Portfolio::default();
        assert_eq!(portfolio.total_value, 0.0);
        assert!(portfolio.positions.is_empty());
        assert_eq!(portfolio.performance.total_trades, 0);
    }

    #[test]
    fn pnl_percentage_uses_cost_basis() {
        // 150k value with 50k gain: basis is 100k, so +50%.
        assert_eq!(Portfolio::pnl_percentage(150_000.0, 50_000.0), 50.0);
        assert_eq!(Portfolio::pnl_percentage(90_000.0, -10_000.0), -10.0);
        assert_eq!(Portfolio::pnl_percentage(10.0, 10.0), 0.0);
    }

    #[test]
    fn remove_position_keeps_order() {
        let mut portfolio = Portfolio {
            positions: vec![position("pos-1"), position("pos-2"), position("pos-3")],
            ..Portfolio::default()
        };

        assert!(portfolio.remove_position("pos-2"));
        let ids: Vec<_> = portfolio.positions.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["pos-1", "pos-3"]);

        assert!(!portfolio.remove_position("pos-9"));
        assert_eq!(portfolio.positions.len(), 2);
        assert!(portfolio.position("pos-3").is_some());
    }
}
