//! Trait definitions (ports). Depend only on domain.
//!
//! - [`ChainClient`] - wallet and contract calls
//! - [`ExecutionHook`] - what the store does with an opportunity it executes

mod chain;
mod execution;

pub use chain::{
    ChainClient, ChainEvent, EventListener, ModelStats, OpportunityParams, PlatformStats,
    ProfileParams, UserStats,
};
pub use execution::ExecutionHook;
