//! Domain records produced by the generators and held by the store.

mod market;
mod model;
mod network;
mod opportunity;
mod portfolio;
mod preferences;

pub use market::{ChainActivity, TradingMetrics};
pub use model::{AiMetrics, AiModel, ModelKind, ModelStatus};
pub use network::NetworkNode;
pub use opportunity::{round3, spread_percent, Opportunity, Rating, RiskLevel, Venue};
pub use portfolio::{Performance, Portfolio, Position};
pub use preferences::{RiskTolerance, View};
