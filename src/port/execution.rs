//! Extension point invoked by the store when auto-trading acts on an opportunity.

use crate::domain::Opportunity;

/// Receives opportunities the store decided to execute.
///
/// The store only calls this with auto-trading enabled and an opportunity
/// present in its current snapshot.
pub trait ExecutionHook: Send + Sync {
    fn execute(&self, opportunity: &Opportunity);
}
