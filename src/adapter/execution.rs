//! Default execution hook: record the decision in the log and nothing else.

use tracing::info;

use crate::domain::Opportunity;
use crate::port::ExecutionHook;

#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingExecutionHook;

impl ExecutionHook for LoggingExecutionHook {
    fn execute(&self, opportunity: &Opportunity) {
        info!(
            opportunity_id = %opportunity.id,
            token_pair = %opportunity.token_pair,
            profit_potential = opportunity.profit_potential,
            "Executing arbitrage"
        );
    }
}
