//! In-process stand-in for a wallet and contract client.
//!
//! Every call logs and resolves immediately with canned data. The configured
//! RPC endpoint and contract addresses are kept but never contacted.

use async_trait::async_trait;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::config::ChainConfig;
use crate::port::{
    ChainClient, ChainEvent, EventListener, ModelStats, OpportunityParams, PlatformStats,
    ProfileParams, UserStats,
};

pub const MOCK_WALLET_ADDRESS: &str = "0x742d35Cc6634C0532925a3b8D4C9db96590c6C87";

/// Model names with canned statistics.
pub const KNOWN_MODELS: [&str; 3] = ["ARBITRON_LSTM", "CROSS_CHAIN_GNN", "SENTIMENT_ANALYZER"];

/// Registered listeners, by event kind.
///
/// Listeners run under a read lock and must not register or remove listeners.
#[derive(Default)]
struct Listeners {
    arbitrage_executed: Vec<EventListener>,
    opportunity_created: Vec<EventListener>,
}

pub struct MockChainClient {
    config: ChainConfig,
    listeners: RwLock<Listeners>,
}

impl MockChainClient {
    #[must_use]
    pub fn new(config: ChainConfig) -> Self {
        info!(
            rpc_url = %config.rpc_url,
            chain_id = config.chain_id,
            "Mock chain client created"
        );
        Self {
            config,
            listeners: RwLock::new(Listeners::default()),
        }
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Registered listeners across both event kinds.
    pub fn listener_count(&self) -> usize {
        let listeners = self.listeners.read();
        listeners.arbitrage_executed.len() + listeners.opportunity_created.len()
    }

    fn emit(&self, event: &ChainEvent) {
        let listeners = self.listeners.read();
        let targets = match event {
            ChainEvent::ArbitrageExecuted { .. } => &listeners.arbitrage_executed,
            ChainEvent::OpportunityCreated { .. } => &listeners.opportunity_created,
        };
        for listener in targets {
            listener(event);
        }
    }
}

impl Default for MockChainClient {
    fn default() -> Self {
        Self::new(ChainConfig::default())
    }
}

#[async_trait]
impl ChainClient for MockChainClient {
    async fn connect_wallet(&self) -> Option<String> {
        info!(address = MOCK_WALLET_ADDRESS, "Mock wallet connected");
        Some(MOCK_WALLET_ADDRESS.to_string())
    }

    async fn create_arbitrage_opportunity(&self, params: &OpportunityParams) -> Option<String> {
        let id = format!("mock-opportunity-{}", chrono::Utc::now().timestamp_millis());
        info!(
            opportunity_id = %id,
            token_a = %params.token_a,
            token_b = %params.token_b,
            expected_profit = %params.expected_profit,
            "Mock opportunity created"
        );
        self.emit(&ChainEvent::OpportunityCreated {
            opportunity_id: id.clone(),
        });
        Some(id)
    }

    async fn execute_arbitrage(&self, opportunity_id: &str, max_slippage_bps: u32) -> bool {
        info!(
            opportunity_id,
            max_slippage_bps, "Mock arbitrage execution successful"
        );
        self.emit(&ChainEvent::ArbitrageExecuted {
            opportunity_id: opportunity_id.to_string(),
            max_slippage_bps,
        });
        true
    }

    async fn update_user_profile(&self, params: &ProfileParams) -> bool {
        info!(
            risk_tolerance = params.risk_tolerance,
            auto_trading = params.auto_trading_enabled,
            "Mock user profile update successful"
        );
        true
    }

    async fn get_user_stats(&self, address: &str) -> Option<UserStats> {
        debug!(address, "Fetching user stats");
        Some(UserStats {
            total_trades: 45,
            successful_trades: 38,
            total_profit: Decimal::new(245, 2),
            win_rate: 84.4,
            risk_tolerance: 2,
        })
    }

    async fn get_ai_model_stats(&self, model_name: &str) -> Option<ModelStats> {
        debug!(model = model_name, "Fetching AI model stats");
        let (accuracy, total_predictions, successful_predictions, is_active) = match model_name {
            "ARBITRON_LSTM" => (92.5, 1250, 1156, true),
            "CROSS_CHAIN_GNN" => (88.3, 980, 865, true),
            "SENTIMENT_ANALYZER" => (85.1, 2100, 1787, false),
            _ => return None,
        };
        Some(ModelStats {
            accuracy,
            total_predictions,
            successful_predictions,
            is_active,
            last_updated: chrono::Utc::now().timestamp_millis(),
        })
    }

    async fn get_platform_stats(&self) -> Option<PlatformStats> {
        debug!("Fetching platform stats");
        Some(PlatformStats {
            total_volume: Decimal::new(125_000_050, 2),
            total_profit: Decimal::new(4_567_890, 2),
            platform_fee: Decimal::new(5, 1),
        })
    }

    fn on_arbitrage_executed(&self, listener: EventListener) {
        self.listeners.write().arbitrage_executed.push(listener);
        info!("Mock arbitrage event listener registered");
    }

    fn on_opportunity_created(&self, listener: EventListener) {
        self.listeners.write().opportunity_created.push(listener);
        info!("Mock opportunity event listener registered");
    }

    fn remove_all_listeners(&self) {
        let mut listeners = self.listeners.write();
        listeners.arbitrage_executed.clear();
        listeners.opportunity_created.clear();
        info!("Mock event listeners removed");
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn canned_wallet_and_stats() {
        let client = MockChainClient::default();
        assert_eq!(
            client.connect_wallet().await.as_deref(),
            Some(MOCK_WALLET_ADDRESS)
        );

        let stats = client.get_user_stats(MOCK_WALLET_ADDRESS).await.unwrap();
        assert_eq!(stats.total_trades, 45);
        assert_eq!(stats.successful_trades, 38);
        assert_eq!(stats.total_profit, dec!(2.45));

        let platform = client.get_platform_stats().await.unwrap();
        assert_eq!(platform.total_volume, dec!(1250000.50));
        assert_eq!(platform.total_profit, dec!(45678.90));
        assert_eq!(platform.platform_fee, dec!(0.5));
    }

    #[tokio::test]
    async fn model_stats_for_known_names_only() {
        let client = MockChainClient::default();
        for name in KNOWN_MODELS {
            assert!(client.get_ai_model_stats(name).await.is_some(), "{name}");
        }
        let sentiment = client.get_ai_model_stats("SENTIMENT_ANALYZER").await.unwrap();
        assert!(!sentiment.is_active);
        assert_eq!(sentiment.successful_predictions, 1787);
        assert!(client.get_ai_model_stats("UNKNOWN").await.is_none());
    }

    #[test]
    fn keeps_configuration() {
        let config = ChainConfig {
            rpc_url: "http://node:8545".into(),
            ..ChainConfig::default()
        };
        let client = MockChainClient::new(config.clone());
        assert_eq!(client.config(), &config);
        assert_eq!(client.name(), "mock");
    }
}
