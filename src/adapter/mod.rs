//! Implementations of ports.

mod execution;
mod mock_chain;

pub use execution::LoggingExecutionHook;
pub use mock_chain::{MockChainClient, KNOWN_MODELS, MOCK_WALLET_ADDRESS};
