//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`random`] - `ScriptedRandom`, a [`RandomSource`](crate::generator::RandomSource)
//!   that replays a fixed list of draws.
//! - [`domain`] - Builders for opportunities, positions and portfolios.
//! - [`hook`] - `RecordingHook`, an execution hook that records what it was given.

pub mod domain;
pub mod hook;
pub mod random;
