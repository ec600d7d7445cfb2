//! Contract-facing workflows built on a [`ChainClient`].
//!
//! These are thin sequences of client calls used at startup and by tests; they
//! never touch generated data.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::{info, warn};

use super::state::StateStore;
use crate::adapter::KNOWN_MODELS;
use crate::port::{
    ChainClient, ModelStats, OpportunityParams, PlatformStats, ProfileParams, UserStats,
};

/// Slippage cap used by [`execute_test_arbitrage`], in basis points.
pub const TEST_SLIPPAGE_BPS: u32 = 50;

/// How long a test opportunity stays open, in seconds.
pub const TEST_DEADLINE_SECS: i64 = 3600;

/// Everything read back from the contracts in one pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContractData {
    pub user: Option<UserStats>,
    pub platform: Option<PlatformStats>,
    /// Keyed by model name; models the client does not know are absent.
    pub models: BTreeMap<String, ModelStats>,
}

/// Read user, platform and per-model statistics.
///
/// User statistics are skipped when no wallet address is known.
pub async fn load_contract_data(client: &dyn ChainClient, address: Option<&str>) -> ContractData {
    let user = match address {
        Some(address) => client.get_user_stats(address).await,
        None => None,
    };
    let platform = client.get_platform_stats().await;

    let mut models = BTreeMap::new();
    for name in KNOWN_MODELS {
        if let Some(stats) = client.get_ai_model_stats(name).await {
            models.insert(name.to_string(), stats);
        }
    }

    info!(
        client = client.name(),
        has_user = user.is_some(),
        models = models.len(),
        "Contract data loaded"
    );
    ContractData {
        user,
        platform,
        models,
    }
}

/// Parameters for the fixed test opportunity, lapsing an hour from now.
pub fn test_opportunity_params() -> OpportunityParams {
    OpportunityParams {
        token_a: "0xA0b86a33E6441c8C06DD2b7c94b7E0e8b8b8b8b8".into(),
        token_b: "0xB0b86a33E6441c8C06DD2b7c94b7E0e8b8b8b8b8".into(),
        dex_a: "0xC0b86a33E6441c8C06DD2b7c94b7E0e8b8b8b8b8".into(),
        dex_b: "0xD0b86a33E6441c8C06DD2b7c94b7E0e8b8b8b8b8".into(),
        amount_in: dec!(1.0),
        expected_profit: dec!(0.05),
        confidence_score: 85,
        deadline: chrono::Utc::now().timestamp() + TEST_DEADLINE_SECS,
    }
}

/// Register the test opportunity and execute it.
///
/// Returns the new opportunity id when both calls succeed.
pub async fn execute_test_arbitrage(client: &dyn ChainClient) -> Option<String> {
    let params = test_opportunity_params();
    let Some(id) = client.create_arbitrage_opportunity(&params).await else {
        warn!(client = client.name(), "Test opportunity was not created");
        return None;
    };
    if client.execute_arbitrage(&id, TEST_SLIPPAGE_BPS).await {
        Some(id)
    } else {
        warn!(opportunity_id = %id, "Test arbitrage was not executed");
        None
    }
}

/// Profile parameters mirroring the store's trading preferences.
///
/// `None` when the position size has no decimal representation.
pub fn profile_params(store: &StateStore) -> Option<ProfileParams> {
    let snapshot = store.read();
    let max_position_size = Decimal::try_from(snapshot.max_position_size).ok()?;
    Some(ProfileParams {
        risk_tolerance: snapshot.risk_tolerance.level(),
        auto_trading_enabled: snapshot.auto_trading_enabled,
        max_position_size,
    })
}

/// Push the store's trading preferences to the on-chain profile.
pub async fn update_profile(client: &dyn ChainClient, store: &StateStore) -> bool {
    let Some(params) = profile_params(store) else {
        warn!(
            max_position_size = store.read().max_position_size,
            "Position size cannot be sent on-chain"
        );
        return false;
    };
    client.update_user_profile(&params).await
}
