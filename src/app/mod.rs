//! Application layer - orchestration, contract workflows, and shared state.

pub mod contracts;
mod orchestrator;
mod state;

pub use contracts::ContractData;
pub use orchestrator::App;
pub use state::{Snapshot, StateStore};
