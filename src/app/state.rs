//! Shared application state.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::adapter::LoggingExecutionHook;
use crate::config::TradingConfig;
use crate::domain::{
    AiModel, ChainActivity, NetworkNode, Opportunity, Portfolio, RiskTolerance, TradingMetrics,
    View,
};
use crate::error::Result;
use crate::port::ExecutionHook;

/// Everything the store holds at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub active_tab: View,
    pub is_loading: bool,
    pub opportunities: Vec<Opportunity>,
    pub portfolio: Portfolio,
    pub ai_models: Vec<AiModel>,
    pub network_nodes: Vec<NetworkNode>,
    pub auto_trading_enabled: bool,
    pub risk_tolerance: RiskTolerance,
    pub max_position_size: f64,
    pub market_status: BTreeMap<String, ChainActivity>,
    pub trading_metrics: TradingMetrics,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            active_tab: View::default(),
            is_loading: false,
            opportunities: Vec::new(),
            portfolio: Portfolio::default(),
            ai_models: Vec::new(),
            network_nodes: Vec::new(),
            auto_trading_enabled: false,
            risk_tolerance: RiskTolerance::default(),
            max_position_size: 1000.0,
            market_status: BTreeMap::new(),
            trading_metrics: TradingMetrics::default(),
        }
    }
}

impl Snapshot {
    #[must_use]
    pub fn opportunity(&self, id: &str) -> Option<&Opportunity> {
        self.opportunities.iter().find(|o| o.id == id)
    }

    /// Write the snapshot as pretty-printed JSON.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Latest snapshot of all published data plus UI preferences.
///
/// Each action replaces one top-level field; nothing is merged. Instances are
/// independent, so tests can build as many as they like.
pub struct StateStore {
    snapshot: RwLock<Snapshot>,
    execution: Arc<dyn ExecutionHook>,
}

impl StateStore {
    /// Empty store that hands executed opportunities to `execution`.
    pub fn new(execution: Arc<dyn ExecutionHook>) -> Self {
        Self {
            snapshot: RwLock::new(Snapshot::default()),
            execution,
        }
    }

    /// Empty store with trading preferences taken from configuration.
    pub fn from_config(trading: &TradingConfig, execution: Arc<dyn ExecutionHook>) -> Self {
        let store = Self::new(execution);
        {
            let mut snapshot = store.snapshot.write();
            snapshot.auto_trading_enabled = trading.auto_trading;
            snapshot.risk_tolerance = trading.risk_tolerance;
            snapshot.max_position_size = trading.max_position_size;
        }
        store
    }

    /// Owned copy of the current snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.read().clone()
    }

    /// Read access without copying.
    pub fn read(&self) -> RwLockReadGuard<'_, Snapshot> {
        self.snapshot.read()
    }

    pub fn set_active_tab(&self, tab: View) {
        self.snapshot.write().active_tab = tab;
    }

    pub fn set_loading(&self, loading: bool) {
        self.snapshot.write().is_loading = loading;
    }

    pub fn update_opportunities(&self, opportunities: Vec<Opportunity>) {
        self.snapshot.write().opportunities = opportunities;
    }

    pub fn update_portfolio(&self, portfolio: Portfolio) {
        self.snapshot.write().portfolio = portfolio;
    }

    pub fn update_ai_models(&self, models: Vec<AiModel>) {
        self.snapshot.write().ai_models = models;
    }

    pub fn update_network_nodes(&self, nodes: Vec<NetworkNode>) {
        self.snapshot.write().network_nodes = nodes;
    }

    /// Flip the auto-trading flag and return the new value.
    ///
    /// Only the flag changes; nothing is started or stopped.
    pub fn toggle_auto_trading(&self) -> bool {
        let mut snapshot = self.snapshot.write();
        snapshot.auto_trading_enabled = !snapshot.auto_trading_enabled;
        snapshot.auto_trading_enabled
    }

    pub fn set_risk_tolerance(&self, risk: RiskTolerance) {
        self.snapshot.write().risk_tolerance = risk;
    }

    pub fn set_max_position_size(&self, size: f64) {
        self.snapshot.write().max_position_size = size;
    }

    pub fn update_market_status(&self, status: BTreeMap<String, ChainActivity>) {
        self.snapshot.write().market_status = status;
    }

    pub fn update_trading_metrics(&self, metrics: TradingMetrics) {
        self.snapshot.write().trading_metrics = metrics;
    }

    /// Hand the opportunity with `id` to the execution hook.
    ///
    /// Does nothing unless auto-trading is enabled and the opportunity is in
    /// the current snapshot. The store itself is never modified.
    pub fn execute_arbitrage(&self, id: &str) {
        let opportunity = {
            let snapshot = self.snapshot.read();
            if !snapshot.auto_trading_enabled {
                return;
            }
            match snapshot.opportunity(id) {
                Some(opportunity) => opportunity.clone(),
                None => return,
            }
        };
        self.execution.execute(&opportunity);
    }

    /// Remove the position with `id` from the current portfolio, if present.
    pub fn close_position(&self, id: &str) {
        self.snapshot.write().portfolio.remove_position(id);
    }

    pub fn rebalance_portfolio(&self) {
        info!("Rebalancing portfolio");
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new(Arc::new(LoggingExecutionHook))
    }
}
