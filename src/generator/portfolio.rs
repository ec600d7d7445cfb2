//! Portfolio snapshot generator.
//!
//! Numeric fields are drawn from the fixed ranges below. Each range is a
//! `(base, width)` pair and yields values in `[base, base + width)`.

use super::random::RandomSource;
use crate::domain::{Performance, Portfolio, Position};
use crate::error::Result;

/// Draws consumed per portfolio snapshot.
pub const DRAWS_PER_PORTFOLIO: usize = 27;

#[derive(Debug, Clone, Copy)]
struct Range {
    base: f64,
    width: f64,
}

const fn range(base: f64, width: f64) -> Range {
    Range { base, width }
}

impl Range {
    fn draw<R: RandomSource + ?Sized>(self, random: &mut R) -> Result<f64> {
        Ok(random.uniform(self.base, self.width)?)
    }
}

struct PositionFixture {
    id: &'static str,
    symbol: &'static str,
    chain: &'static str,
    amount: Range,
    value: Range,
    pnl: Range,
    pnl_percentage: Range,
    entry_price: Range,
    current_price: Range,
}

const POSITIONS: [PositionFixture; 3] = [
    PositionFixture {
        id: "pos-1",
        symbol: "ETH",
        chain: "Ethereum",
        amount: range(15.5, 20.0),
        value: range(45_000.0, 30_000.0),
        pnl: range(-2_000.0, 8_000.0),
        pnl_percentage: range(-5.0, 15.0),
        entry_price: range(2_200.0, 400.0),
        current_price: range(2_300.0, 500.0),
    },
    PositionFixture {
        id: "pos-2",
        symbol: "BTC",
        chain: "Bitcoin",
        amount: range(0.8, 1.5),
        value: range(35_000.0, 25_000.0),
        pnl: range(-1_500.0, 6_000.0),
        pnl_percentage: range(-4.0, 12.0),
        entry_price: range(38_000.0, 8_000.0),
        current_price: range(40_000.0, 10_000.0),
    },
    PositionFixture {
        id: "pos-3",
        symbol: "MATIC",
        chain: "Polygon",
        amount: range(5_000.0, 10_000.0),
        value: range(8_000.0, 5_000.0),
        pnl: range(-500.0, 2_000.0),
        pnl_percentage: range(-3.0, 10.0),
        entry_price: range(0.8, 0.4),
        current_price: range(0.9, 0.5),
    },
];

/// Symbols of the generated positions, in order.
pub const POSITION_SYMBOLS: [&str; 3] = ["ETH", "BTC", "MATIC"];

const TOTAL_VALUE: Range = range(100_000.0, 100_000.0);
const TOTAL_PNL: Range = range(-10_000.0, 30_000.0);
const DAILY_PNL: Range = range(-1_000.0, 3_000.0);

const WIN_RATE: Range = range(65.0, 25.0);
const PROFIT_FACTOR: Range = range(1.2, 1.5);
const SHARPE_RATIO: Range = range(1.5, 1.0);
const MAX_DRAWDOWN: Range = range(-15.0, 10.0);

/// Generate one portfolio snapshot with the ETH, BTC and MATIC positions.
pub fn generate_portfolio<R>(random: &mut R) -> Result<Portfolio>
where
    R: RandomSource + ?Sized,
{
    let total_value = TOTAL_VALUE.draw(random)?;
    let total_pnl = TOTAL_PNL.draw(random)?;
    let daily_pnl = DAILY_PNL.draw(random)?;

    let positions = POSITIONS
        .iter()
        .map(|fixture| generate_position(random, fixture))
        .collect::<Result<Vec<_>>>()?;

    let performance = Performance {
        win_rate: WIN_RATE.draw(random)?,
        profit_factor: PROFIT_FACTOR.draw(random)?,
        sharpe_ratio: SHARPE_RATIO.draw(random)?,
        max_drawdown: MAX_DRAWDOWN.draw(random)?,
        total_trades: random.whole(120, 100)?,
        avg_hold_time: random.whole(30, 60)?,
    };

    Ok(Portfolio {
        total_value,
        total_pnl,
        total_pnl_percentage: Portfolio::pnl_percentage(total_value, total_pnl),
        daily_pnl,
        positions,
        performance,
    })
}

fn generate_position<R>(random: &mut R, fixture: &PositionFixture) -> Result<Position>
where
    R: RandomSource + ?Sized,
{
    Ok(Position {
        id: fixture.id.to_string(),
        symbol: fixture.symbol.to_string(),
        chain: fixture.chain.to_string(),
        amount: fixture.amount.draw(random)?,
        value: fixture.value.draw(random)?,
        pnl: fixture.pnl.draw(random)?,
        pnl_percentage: fixture.pnl_percentage.draw(random)?,
        entry_price: fixture.entry_price.draw(random)?,
        current_price: fixture.current_price.draw(random)?,
    })
}
