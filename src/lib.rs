//! Arbitron - simulated cross-chain arbitrage feed.
//!
//! The crate produces plausible but fake market data for a trading dashboard:
//! arbitrage opportunities between chains, a portfolio snapshot, AI model
//! panels and chain telemetry. Data is regenerated on fixed timers and
//! published into a state store. Chain access goes through a client trait whose
//! only implementation is an in-process mock.
//!
//! # Architecture
//!
//! - **`generator`** - pure functions of an injected [`generator::RandomSource`]
//! - **`runtime`** - `UpdateScheduler` with two timers over an injectable clock
//! - **`app`** - `StateStore` plus the `App` that wires everything together
//! - **`port`** / **`adapter`** - `ChainClient` and `ExecutionHook` traits and
//!   their mock/logging implementations
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Opportunities, portfolios, models and telemetry records
//! - [`error`] - Error types for the crate
//! - [`testkit`] - Test helpers (requires `testkit` feature)
//!
//! # Example
//!
//! ```no_run
//! use arbitron::generator::{generate_opportunities, RngSource};
//!
//! let mut random = RngSource::seeded(7);
//! let batch = generate_opportunities(&mut random, 0).unwrap();
//! assert_eq!(batch.len(), 12);
//! ```

pub mod adapter;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod generator;
pub mod port;
pub mod runtime;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
