//! Random entity generators.
//!
//! Each generator is a plain function of an injected [`RandomSource`]: no
//! shared state, no side effects, and a fresh allocation per call. Seeding the
//! source (see [`RngSource::seeded`]) makes a run reproducible bit for bit.
//!
//! - [`generate_opportunities`] - batch of 12 opportunities
//! - [`generate_portfolio`] - portfolio snapshot with ETH, BTC and MATIC positions
//! - [`generate_ai_models`], [`generate_ai_metrics`] - model panel data
//! - [`generate_network_nodes`] - chain topology ring
//! - [`generate_market_status`], [`generate_trading_metrics`] - market telemetry

mod market;
mod model;
mod network;
mod opportunity;
mod portfolio;
mod random;

pub use market::{generate_market_status, generate_trading_metrics, STATUS_THRESHOLDS};
pub use model::{generate_ai_metrics, generate_ai_models, DRAWS_PER_MODEL_SET};
pub use network::{generate_network_nodes, NETWORK_CHAINS};
pub use opportunity::{
    generate_opportunities, BATCH_SIZE, CHAINS, DRAWS_PER_OPPORTUNITY, EXCHANGES, TOKEN_PAIRS,
};
pub use portfolio::{generate_portfolio, DRAWS_PER_PORTFOLIO, POSITION_SYMBOLS};
pub use random::{RandomSource, RngSource};
