//! Opportunity batch generator.

use super::random::RandomSource;
use crate::domain::{round3, spread_percent, Opportunity, Rating, RiskLevel, Venue};
use crate::error::Result;

/// Opportunities per batch.
pub const BATCH_SIZE: usize = 12;

/// Draws consumed per opportunity.
pub const DRAWS_PER_OPPORTUNITY: usize = 13;

pub const TOKEN_PAIRS: [&str; 8] = [
    "ETH/USDC",
    "BTC/USDT",
    "MATIC/USDC",
    "AVAX/USDT",
    "BNB/BUSD",
    "SOL/USDC",
    "ADA/USDT",
    "DOT/USDC",
];

/// Chain catalog: name and display icon.
pub const CHAINS: [(&str, &str); 6] = [
    ("Ethereum", "🔷"),
    ("BSC", "🟡"),
    ("Polygon", "🟣"),
    ("Arbitrum", "🔵"),
    ("Optimism", "🔴"),
    ("Avalanche", "⚪"),
];

pub const EXCHANGES: [&str; 6] = [
    "Uniswap",
    "PancakeSwap",
    "QuickSwap",
    "SushiSwap",
    "Curve",
    "Balancer",
];

/// Generate one batch of [`BATCH_SIZE`] opportunities.
///
/// Ids take the form `opp-<index>-<stamp>`; callers pass a timestamp (or any
/// batch counter) as `stamp` so ids differ between batches.
pub fn generate_opportunities<R>(random: &mut R, stamp: u64) -> Result<Vec<Opportunity>>
where
    R: RandomSource + ?Sized,
{
    (0..BATCH_SIZE)
        .map(|index| generate_opportunity(random, index, stamp))
        .collect()
}

fn generate_opportunity<R>(random: &mut R, index: usize, stamp: u64) -> Result<Opportunity>
where
    R: RandomSource + ?Sized,
{
    let token_pair = TOKEN_PAIRS[random.index(TOKEN_PAIRS.len())?];

    // Chain B comes from the catalog with chain A removed, so the two never match.
    let a = random.index(CHAINS.len())?;
    let mut b = random.index(CHAINS.len() - 1)?;
    if b >= a {
        b += 1;
    }

    let base_price = random.uniform(1000.0, 3000.0)?;
    let price_diff = random.uniform(0.3, 2.5)?;
    let exchange_a = EXCHANGES[random.index(EXCHANGES.len())?];
    let exchange_b = EXCHANGES[random.index(EXCHANGES.len())?];
    let risk = RiskLevel::ALL[random.index(RiskLevel::ALL.len())?];
    let confidence = random.uniform(65.0, 30.0)?;
    let estimated_gas = random.uniform(3.0, 25.0)?;
    let time_window_secs = random.uniform(20.0, 150.0)?;
    let volume_24h = random.uniform(50_000.0, 800_000.0)?;
    let liquidity = random.uniform(25_000.0, 300_000.0)?;

    let spread = spread_percent(price_diff, base_price);

    Ok(Opportunity {
        id: format!("opp-{index}-{stamp}"),
        token_pair: token_pair.to_string(),
        chain_a: venue(a, base_price, exchange_a),
        chain_b: venue(b, base_price + price_diff, exchange_b),
        profit_potential: round3(spread),
        risk,
        confidence,
        estimated_gas,
        time_window_secs,
        rating: Rating::from_profit_potential(spread),
        volume_24h,
        liquidity,
    })
}

fn venue(chain: usize, price: f64, exchange: &str) -> Venue {
    let (name, icon) = CHAINS[chain];
    Venue {
        chain: name.to_string(),
        price,
        exchange: exchange.to_string(),
        icon: icon.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, RandomError};
    use crate::generator::RngSource;
    use crate::testkit::random::ScriptedRandom;

    #[test]
    fn batch_has_twelve_distinct_ids() {
        let mut random = RngSource::seeded(42);
        let batch = generate_opportunities(&mut random, 3000).unwrap();
        assert_eq!(batch.len(), BATCH_SIZE);

        let mut ids: Vec<_> = batch.iter().map(|o| o.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), BATCH_SIZE);
        assert_eq!(batch[0].id, "opp-0-3000");
        assert_eq!(batch[11].id, "opp-11-3000");
    }

    #[test]
    fn consumes_fixed_number_of_draws() {
        let mut random = ScriptedRandom::repeat(0.5, BATCH_SIZE * DRAWS_PER_OPPORTUNITY);
        generate_opportunities(&mut random, 0).unwrap();
        assert_eq!(random.remaining(), 0);
        assert_eq!(random.drawn(), BATCH_SIZE * DRAWS_PER_OPPORTUNITY);
    }

    #[test]
    fn chain_b_skips_chain_a() {
        // Chain A at index 0 and chain B draw at 0 must land on index 1.
        let mut random = ScriptedRandom::blocks([0.0], DRAWS_PER_OPPORTUNITY);
        let opportunity = generate_opportunity(&mut random, 0, 0).unwrap();
        assert_eq!(opportunity.chain_a.chain, "Ethereum");
        assert_eq!(opportunity.chain_b.chain, "BSC");

        // Chain A last, chain B draw last: the last remaining chain is index 4.
        let mut random = ScriptedRandom::blocks([0.99], DRAWS_PER_OPPORTUNITY);
        let opportunity = generate_opportunity(&mut random, 0, 0).unwrap();
        assert_eq!(opportunity.chain_a.chain, "Avalanche");
        assert_eq!(opportunity.chain_b.chain, "Optimism");
    }

    #[test]
    fn rating_follows_unrounded_spread() {
        let mut random = RngSource::seeded(5);
        for opportunity in generate_opportunities(&mut random, 1).unwrap() {
            let spread = spread_percent(
                opportunity.chain_b.price - opportunity.chain_a.price,
                opportunity.chain_a.price,
            );
            assert!((round3(spread) - opportunity.profit_potential).abs() < 1e-9);
            assert_eq!(opportunity.rating, Rating::from_profit_potential(spread));
        }
    }

    #[test]
    fn short_source_fails_fast() {
        let mut random = ScriptedRandom::repeat(0.5, DRAWS_PER_OPPORTUNITY * 3);
        let err = generate_opportunities(&mut random, 0).unwrap_err();
        assert!(matches!(
            err,
            Error::Random(RandomError::Exhausted { drawn: 39 })
        ));
    }
}
