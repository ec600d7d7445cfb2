//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file. Every section has defaults, so
//! an empty file (or no file, via [`Config::default`]) gives a working local
//! setup. `ARBITRON_RPC_URL` overrides `[chain].rpc_url`.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::RiskTolerance;
use crate::error::{ConfigError, Result};
use crate::runtime::UpdateIntervals;

pub const RPC_URL_ENV: &str = "ARBITRON_RPC_URL";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub chain: ChainConfig,
    #[serde(default)]
    pub updates: UpdatesConfig,
    #[serde(default)]
    pub trading: TradingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Chain endpoint and deployed contract addresses.
///
/// Stored by the chain client; the mock client never dials it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChainConfig {
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    /// 1337 for a local development node.
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,
    #[serde(default)]
    pub contracts: ContractAddresses,
}

fn default_rpc_url() -> String {
    "http://localhost:8545".into()
}

const fn default_chain_id() -> u64 {
    1337
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            chain_id: default_chain_id(),
            contracts: ContractAddresses::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContractAddresses {
    pub arbitron_prime: String,
    pub flash_loan: String,
    pub governance: String,
    pub arbitron_token: String,
}

/// Addresses of a fresh local deployment.
impl Default for ContractAddresses {
    fn default() -> Self {
        Self {
            arbitron_prime: "0x5FbDB2315678afecb367f032d93F642f64180aa3".into(),
            flash_loan: "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512".into(),
            governance: "0x9fE46736679d2D9a65F0992F2272dE9f3c7fa6e0".into(),
            arbitron_token: "0xCf7Ed3AccA5a467e9e704C703E8D87F634fB0Fc9".into(),
        }
    }
}

impl ContractAddresses {
    fn iter(&self) -> [(&'static str, &str); 4] {
        [
            ("arbitron_prime", &self.arbitron_prime),
            ("flash_loan", &self.flash_loan),
            ("governance", &self.governance),
            ("arbitron_token", &self.arbitron_token),
        ]
    }
}

/// Publishing cadence and randomness.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UpdatesConfig {
    #[serde(default = "default_opportunity_interval_ms")]
    pub opportunity_interval_ms: u64,
    #[serde(default = "default_portfolio_interval_ms")]
    pub portfolio_interval_ms: u64,
    /// Fixed seed for a reproducible run; unset draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

const fn default_opportunity_interval_ms() -> u64 {
    3000
}

const fn default_portfolio_interval_ms() -> u64 {
    8000
}

impl Default for UpdatesConfig {
    fn default() -> Self {
        Self {
            opportunity_interval_ms: default_opportunity_interval_ms(),
            portfolio_interval_ms: default_portfolio_interval_ms(),
            seed: None,
        }
    }
}

impl UpdatesConfig {
    #[must_use]
    pub fn intervals(&self) -> UpdateIntervals {
        UpdateIntervals {
            opportunities: Duration::from_millis(self.opportunity_interval_ms),
            portfolio: Duration::from_millis(self.portfolio_interval_ms),
        }
    }
}

/// Initial trading preferences.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TradingConfig {
    #[serde(default)]
    pub auto_trading: bool,
    #[serde(default)]
    pub risk_tolerance: RiskTolerance,
    #[serde(default = "default_max_position_size")]
    pub max_position_size: f64,
}

const fn default_max_position_size() -> f64 {
    1000.0
}

impl Default for TradingConfig {
    fn default() -> Self {
        Self {
            auto_trading: false,
            risk_tolerance: RiskTolerance::default(),
            max_position_size: default_max_position_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// `pretty` or `json`.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "info".into()
}

fn default_format() -> String {
    "pretty".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    /// Parse TOML text, apply environment overrides and validate.
    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(RPC_URL_ENV) {
            if !url.trim().is_empty() {
                self.chain.rpc_url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.chain.rpc_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "rpc_url" }.into());
        }
        for (field, address) in self.chain.contracts.iter() {
            if !is_address(address) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("'{address}' is not a 0x-prefixed 20-byte hex address"),
                }
                .into());
            }
        }
        if self.updates.opportunity_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "opportunity_interval_ms",
                reason: "must be greater than zero".into(),
            }
            .into());
        }
        if self.updates.portfolio_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "portfolio_interval_ms",
                reason: "must be greater than zero".into(),
            }
            .into());
        }
        let size = self.trading.max_position_size;
        if !size.is_finite() || size <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "max_position_size",
                reason: format!("must be positive and finite, got {size}"),
            }
            .into());
        }
        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected 'pretty' or 'json', got '{other}'"),
            }
            .into()),
        }
    }

    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

fn is_address(value: &str) -> bool {
    value
        .strip_prefix("0x")
        .is_some_and(|hex| hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.chain.chain_id, 1337);
        assert_eq!(config.updates.intervals(), UpdateIntervals::default());
        assert_eq!(config.updates.seed, None);
        assert!(!config.trading.auto_trading);
        assert_eq!(config.trading.risk_tolerance, RiskTolerance::Moderate);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn default_addresses_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn address_check() {
        assert!(is_address("0x5FbDB2315678afecb367f032d93F642f64180aa3"));
        assert!(!is_address("5FbDB2315678afecb367f032d93F642f64180aa3"));
        assert!(!is_address("0x5FbDB2315678afecb367f032d93F642f64180aa"));
        assert!(!is_address("0xZZbDB2315678afecb367f032d93F642f64180aa3"));
    }

    #[test]
    fn rejects_bad_contract_address() {
        let toml = r#"
[chain.contracts]
arbitron_prime = "0x5FbDB2315678afecb367f032d93F642f64180aa3"
flash_loan = "not-an-address"
governance = "0x9fE46736679d2D9a65F0992F2272dE9f3c7fa6e0"
arbitron_token = "0xCf7Ed3AccA5a467e9e704C703E8D87F634fB0Fc9"
"#;
        assert!(matches!(
            Config::parse(toml),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "flash_loan",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_zero_interval() {
        let toml = "[updates]\nportfolio_interval_ms = 0\n";
        assert!(matches!(
            Config::parse(toml),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "portfolio_interval_ms",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_infinite_position_size() {
        for toml in [
            "[trading]\nmax_position_size = inf\n",
            "[trading]\nmax_position_size = nan\n",
            "[trading]\nmax_position_size = -5.0\n",
        ] {
            assert!(matches!(
                Config::parse(toml),
                Err(Error::Config(ConfigError::InvalidValue {
                    field: "max_position_size",
                    ..
                }))
            ));
        }
    }

    #[test]
    fn rejects_unknown_log_format() {
        let toml = "[logging]\nformat = \"xml\"\n";
        assert!(matches!(
            Config::parse(toml),
            Err(Error::Config(ConfigError::InvalidValue { field: "format", .. }))
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            Config::parse("[updates"),
            Err(Error::Config(ConfigError::Parse(_)))
        ));
    }
}
