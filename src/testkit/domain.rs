//! Builders for domain records used across tests.
//!
//! Values are fixed and simple so assertions can compare them directly.

use crate::domain::{
    Opportunity, Performance, Portfolio, Position, Rating, RiskLevel, Venue,
};

/// An opportunity with the given id and fixed ETH/USDC quotes.
pub fn opportunity(id: &str) -> Opportunity {
    Opportunity {
        id: id.to_string(),
        token_pair: "ETH/USDC".to_string(),
        chain_a: Venue {
            chain: "Ethereum".to_string(),
            price: 2000.0,
            exchange: "Uniswap".to_string(),
            icon: "🔷".to_string(),
        },
        chain_b: Venue {
            chain: "Polygon".to_string(),
            price: 2001.0,
            exchange: "QuickSwap".to_string(),
            icon: "🟣".to_string(),
        },
        profit_potential: 0.05,
        risk: RiskLevel::Low,
        confidence: 80.0,
        estimated_gas: 12.5,
        time_window_secs: 60.0,
        rating: Rating::Low,
        volume_24h: 100_000.0,
        liquidity: 50_000.0,
    }
}

/// A position with the given id.
pub fn position(id: &str) -> Position {
    Position {
        id: id.to_string(),
        symbol: "ETH".to_string(),
        chain: "Ethereum".to_string(),
        amount: 2.0,
        value: 4000.0,
        pnl: 200.0,
        pnl_percentage: 5.0,
        entry_price: 1900.0,
        current_price: 2000.0,
    }
}

/// A portfolio holding one [`position`] per id, in order.
pub fn portfolio_with_positions(ids: &[&str]) -> Portfolio {
    let positions: Vec<Position> = ids.iter().map(|id| position(id)).collect();
    let total_value = positions.iter().map(|p| p.value).sum();
    let total_pnl = positions.iter().map(|p| p.pnl).sum();
    Portfolio {
        total_value,
        total_pnl,
        total_pnl_percentage: Portfolio::pnl_percentage(total_value, total_pnl),
        daily_pnl: 50.0,
        positions,
        performance: Performance {
            win_rate: 70.0,
            profit_factor: 1.5,
            sharpe_ratio: 2.0,
            max_drawdown: -8.0,
            total_trades: 150,
            avg_hold_time: 45,
        },
    }
}
