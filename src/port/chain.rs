//! Blockchain client port.
//!
//! The surface a real wallet/contract integration must provide. Failures are
//! reported in-band: `None` or `false` means the operation did not happen and
//! callers must not assume any partial effect.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parameters for registering an opportunity on-chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityParams {
    pub token_a: String,
    pub token_b: String,
    pub dex_a: String,
    pub dex_b: String,
    pub amount_in: Decimal,
    pub expected_profit: Decimal,
    /// Confidence in percent.
    pub confidence_score: u8,
    /// Unix timestamp (seconds) after which the opportunity lapses.
    pub deadline: i64,
}

/// Parameters for the on-chain user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileParams {
    /// 1 = conservative, 2 = moderate, 3 = aggressive.
    pub risk_tolerance: u8,
    pub auto_trading_enabled: bool,
    pub max_position_size: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_trades: u32,
    pub successful_trades: u32,
    pub total_profit: Decimal,
    pub win_rate: f64,
    pub risk_tolerance: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStats {
    pub accuracy: f64,
    pub total_predictions: u32,
    pub successful_predictions: u32,
    pub is_active: bool,
    /// Unix timestamp in milliseconds.
    pub last_updated: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformStats {
    pub total_volume: Decimal,
    pub total_profit: Decimal,
    /// Fee in percent.
    pub platform_fee: Decimal,
}

/// Contract events a client can deliver to listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainEvent {
    OpportunityCreated {
        opportunity_id: String,
    },
    ArbitrageExecuted {
        opportunity_id: String,
        max_slippage_bps: u32,
    },
}

pub type EventListener = Box<dyn Fn(&ChainEvent) + Send + Sync>;

#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Connect a wallet and return its address.
    async fn connect_wallet(&self) -> Option<String>;

    /// Register an opportunity and return its id.
    async fn create_arbitrage_opportunity(&self, params: &OpportunityParams) -> Option<String>;

    /// Execute a registered opportunity with a slippage cap in basis points.
    async fn execute_arbitrage(&self, opportunity_id: &str, max_slippage_bps: u32) -> bool;

    async fn update_user_profile(&self, params: &ProfileParams) -> bool;

    async fn get_user_stats(&self, address: &str) -> Option<UserStats>;

    async fn get_ai_model_stats(&self, model_name: &str) -> Option<ModelStats>;

    async fn get_platform_stats(&self) -> Option<PlatformStats>;

    fn on_arbitrage_executed(&self, listener: EventListener);

    fn on_opportunity_created(&self, listener: EventListener);

    fn remove_all_listeners(&self);

    /// Client name for logging.
    fn name(&self) -> &'static str;
}
