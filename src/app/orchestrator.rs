//! Application wiring: seed the store, run the scheduler, talk to the chain.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use super::contracts::load_contract_data;
use super::state::{Snapshot, StateStore};
use crate::adapter::{LoggingExecutionHook, MockChainClient};
use crate::config::Config;
use crate::error::Result;
use crate::generator::{
    generate_ai_metrics, generate_ai_models, generate_market_status, generate_network_nodes,
    generate_opportunities, generate_portfolio, generate_trading_metrics, RandomSource,
    RngSource,
};
use crate::port::{ChainClient, ChainEvent};
use crate::runtime::{drive, SchedulerHandle, SystemClock, UpdateScheduler};

/// Main application struct.
pub struct App {
    config: Config,
    store: Arc<StateStore>,
    client: Arc<dyn ChainClient>,
}

impl App {
    /// App with a logging execution hook and the mock chain client.
    pub fn new(config: Config) -> Self {
        let store = Arc::new(StateStore::from_config(
            &config.trading,
            Arc::new(LoggingExecutionHook),
        ));
        let client = Arc::new(MockChainClient::new(config.chain.clone()));
        Self::with_parts(config, store, client)
    }

    pub fn with_parts(config: Config, store: Arc<StateStore>, client: Arc<dyn ChainClient>) -> Self {
        Self {
            config,
            store,
            client,
        }
    }

    pub fn store(&self) -> &Arc<StateStore> {
        &self.store
    }

    /// Fill every store field once, with the loading flag raised meanwhile.
    ///
    /// The initial opportunity batch is stamped 0.
    pub fn load_initial<R: RandomSource + ?Sized>(&self, random: &mut R) -> Result<()> {
        self.store.set_loading(true);
        let loaded = self.generate_all(random);
        self.store.set_loading(false);
        loaded
    }

    fn generate_all<R: RandomSource + ?Sized>(&self, random: &mut R) -> Result<()> {
        self.store.update_opportunities(generate_opportunities(random, 0)?);
        self.store.update_portfolio(generate_portfolio(random)?);
        self.store.update_ai_models(generate_ai_models(random)?);
        self.store.update_network_nodes(generate_network_nodes(random)?);
        self.store.update_market_status(generate_market_status(random)?);
        self.store.update_trading_metrics(generate_trading_metrics(random)?);

        let metrics = generate_ai_metrics(random)?;
        info!(
            status = %metrics.neural_network_status,
            prediction_accuracy = metrics.prediction_accuracy,
            model_confidence = metrics.model_confidence,
            "Initial data loaded"
        );
        Ok(())
    }

    /// Run until `shutdown` flips to true, then return the final snapshot.
    pub async fn run(self, shutdown: watch::Receiver<bool>) -> Result<Snapshot> {
        let mut random = match self.config.updates.seed {
            Some(seed) => {
                info!(seed, "Using seeded random source");
                RngSource::seeded(seed)
            }
            None => RngSource::from_entropy(),
        };
        self.load_initial(&mut random)?;

        let handle = SchedulerHandle::new(UpdateScheduler::new(
            SystemClock::new(),
            random,
            self.config.updates.intervals(),
        )?);
        let (opportunities, portfolio) = (Arc::clone(&self.store), Arc::clone(&self.store));
        handle.start(
            move |batch| opportunities.update_opportunities(batch),
            move |snapshot| portfolio.update_portfolio(snapshot),
        );

        self.register_listeners();
        let address = self.client.connect_wallet().await;
        if address.is_none() {
            warn!(client = self.client.name(), "Wallet not connected");
        }
        let contracts = load_contract_data(self.client.as_ref(), address.as_deref()).await;
        info!(
            models = contracts.models.len(),
            platform = contracts.platform.is_some(),
            "Contracts ready"
        );

        let result = drive(handle.clone(), shutdown).await;
        handle.stop();
        self.client.remove_all_listeners();
        result?;

        info!("App stopped");
        Ok(self.store.snapshot())
    }

    fn register_listeners(&self) {
        self.client.on_opportunity_created(Box::new(|event| {
            if let ChainEvent::OpportunityCreated { opportunity_id } = event {
                info!(opportunity_id = %opportunity_id, "Opportunity created on-chain");
            }
        }));
        self.client.on_arbitrage_executed(Box::new(|event| {
            if let ChainEvent::ArbitrageExecuted {
                opportunity_id,
                max_slippage_bps,
            } = event
            {
                info!(
                    opportunity_id = %opportunity_id,
                    max_slippage_bps = *max_slippage_bps,
                    "Arbitrage executed on-chain"
                );
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::generator::{BATCH_SIZE, NETWORK_CHAINS};
    use crate::testkit::random::ScriptedRandom;

    fn fast_config() -> Config {
        let mut config = Config::default();
        config.updates.opportunity_interval_ms = 10;
        config.updates.portfolio_interval_ms = 25;
        config.updates.seed = Some(42);
        config
    }

    #[test]
    fn load_initial_fills_every_field() {
        let app = App::new(Config::default());
        app.load_initial(&mut RngSource::seeded(1)).unwrap();

        let snapshot = app.store().snapshot();
        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.opportunities.len(), BATCH_SIZE);
        assert!(snapshot.opportunities.iter().all(|o| o.id.ends_with("-0")));
        assert_eq!(snapshot.portfolio.positions.len(), 3);
        assert_eq!(snapshot.ai_models.len(), 4);
        assert_eq!(snapshot.network_nodes.len(), NETWORK_CHAINS.len());
        assert_eq!(snapshot.market_status.len(), 5);
        assert!(snapshot.trading_metrics.trades_executed >= 15);
    }

    #[test]
    fn load_initial_clears_loading_on_failure() {
        let app = App::new(Config::default());
        let mut random = ScriptedRandom::repeat(0.5, 3);
        assert!(app.load_initial(&mut random).is_err());
        assert!(!app.store().read().is_loading);
    }

    #[tokio::test]
    async fn run_publishes_until_shutdown() {
        let app = App::new(fast_config());
        let store = Arc::clone(app.store());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(app.run(shutdown_rx));

        tokio::time::sleep(Duration::from_millis(100)).await;
        shutdown_tx.send(true).unwrap();
        let snapshot = task.await.unwrap().unwrap();

        assert_eq!(snapshot.opportunities.len(), BATCH_SIZE);
        assert!(snapshot.opportunities.iter().all(|o| !o.id.ends_with("-0")));
        assert_eq!(snapshot, store.snapshot());
    }

    #[tokio::test]
    async fn run_removes_listeners_on_exit() {
        let client = Arc::new(MockChainClient::default());
        let app = App::with_parts(
            fast_config(),
            Arc::new(StateStore::default()),
            client.clone(),
        );
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(app.run(shutdown_rx));

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(client.listener_count(), 2);
        shutdown_tx.send(true).unwrap();
        task.await.unwrap().unwrap();
        assert_eq!(client.listener_count(), 0);
    }
}
