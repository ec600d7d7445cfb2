//! Recording [`ExecutionHook`] for asserting what the store executed.

use parking_lot::Mutex;

use crate::domain::Opportunity;
use crate::port::ExecutionHook;

/// Collects the ids of every opportunity it is asked to execute.
#[derive(Debug, Default)]
pub struct RecordingHook {
    executed: Mutex<Vec<String>>,
}

impl RecordingHook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executed opportunity ids, in call order.
    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().clone()
    }
}

impl ExecutionHook for RecordingHook {
    fn execute(&self, opportunity: &Opportunity) {
        self.executed.lock().push(opportunity.id.clone());
    }
}
