//! Fixed-interval publisher of generated opportunities and portfolios.
//!
//! [`UpdateScheduler`] is a two-state machine (`Stopped`, `Running`) holding
//! two independent timers. It never sleeps: [`UpdateScheduler::tick`] reads the
//! injected [`Clock`] and fires every timer period that has elapsed, so the
//! same code runs under real time (see [`super::driver`]) and virtual time.

use std::fmt;
use std::time::Duration;

use tracing::{debug, error, info};

use super::clock::Clock;
use crate::domain::{Opportunity, Portfolio};
use crate::error::{ConfigError, Error, Result};
use crate::generator::{generate_opportunities, generate_portfolio, RandomSource};

pub type OpportunityCallback = Box<dyn FnMut(Vec<Opportunity>) + Send>;
pub type PortfolioCallback = Box<dyn FnMut(Portfolio) + Send>;

/// Timer periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateIntervals {
    pub opportunities: Duration,
    pub portfolio: Duration,
}

impl Default for UpdateIntervals {
    fn default() -> Self {
        Self {
            opportunities: Duration::from_millis(3000),
            portfolio: Duration::from_millis(8000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Stopped,
    Running,
}

/// What a single [`UpdateScheduler::tick`] fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub opportunity_batches: usize,
    pub portfolio_snapshots: usize,
}

impl TickReport {
    #[must_use]
    pub fn fired(&self) -> usize {
        self.opportunity_batches + self.portfolio_snapshots
    }
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    period: Duration,
    next_due: Duration,
}

impl Timer {
    fn starting_at(now: Duration, period: Duration) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    fn due_at(&self, now: Duration) -> Option<Duration> {
        (self.next_due <= now).then_some(self.next_due)
    }

    /// Consume the current period and return its due time.
    fn fire(&mut self) -> Duration {
        let due = self.next_due;
        self.next_due += self.period;
        due
    }
}

struct Subscription {
    opportunities: Timer,
    portfolio: Timer,
    on_opportunities: OpportunityCallback,
    on_portfolio: PortfolioCallback,
}

/// Drives the opportunity and portfolio generators on two independent timers.
pub struct UpdateScheduler<C, R> {
    clock: C,
    random: R,
    intervals: UpdateIntervals,
    subscription: Option<Subscription>,
}

impl<C, R> fmt::Debug for UpdateScheduler<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateScheduler")
            .field("intervals", &self.intervals)
            .field("running", &self.subscription.is_some())
            .finish_non_exhaustive()
    }
}

impl<C: Clock, R: RandomSource> UpdateScheduler<C, R> {
    /// Create a stopped scheduler.
    ///
    /// Both intervals must be non-zero; a zero period would make `tick` spin.
    pub fn new(clock: C, random: R, intervals: UpdateIntervals) -> Result<Self> {
        for (field, period) in [
            ("opportunity_interval_ms", intervals.opportunities),
            ("portfolio_interval_ms", intervals.portfolio),
        ] {
            if period.is_zero() {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be greater than zero".into(),
                }
                .into());
            }
        }
        Ok(Self {
            clock,
            random,
            intervals,
            subscription: None,
        })
    }

    pub fn state(&self) -> SchedulerState {
        if self.subscription.is_some() {
            SchedulerState::Running
        } else {
            SchedulerState::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn intervals(&self) -> UpdateIntervals {
        self.intervals
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Start both timers, first firing one period from now.
    ///
    /// A running scheduler is stopped first; the previous callbacks are
    /// dropped and never invoked again.
    pub fn start<F, G>(&mut self, on_opportunities: F, on_portfolio: G)
    where
        F: FnMut(Vec<Opportunity>) + Send + 'static,
        G: FnMut(Portfolio) + Send + 'static,
    {
        if self.stop() {
            debug!("Restarting update scheduler");
        }

        let now = self.clock.now();
        self.subscription = Some(Subscription {
            opportunities: Timer::starting_at(now, self.intervals.opportunities),
            portfolio: Timer::starting_at(now, self.intervals.portfolio),
            on_opportunities: Box::new(on_opportunities),
            on_portfolio: Box::new(on_portfolio),
        });

        info!(
            opportunity_interval_ms = self.intervals.opportunities.as_millis() as u64,
            portfolio_interval_ms = self.intervals.portfolio.as_millis() as u64,
            "Update scheduler started"
        );
    }

    /// Cancel both timers. Returns whether the scheduler was running.
    ///
    /// Idempotent: stopping a stopped scheduler does nothing.
    pub fn stop(&mut self) -> bool {
        if self.subscription.take().is_some() {
            info!("Update scheduler stopped");
            true
        } else {
            false
        }
    }

    /// Earliest pending due time, if running.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.subscription
            .as_ref()
            .map(|s| s.opportunities.next_due.min(s.portfolio.next_due))
    }

    /// Time left until the next firing, if running.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_sub(self.clock.now()))
    }

    /// Fire every timer period that has elapsed, in due-time order.
    ///
    /// On equal due times the opportunity timer fires first. A generator
    /// failure stops the scheduler and is returned.
    pub fn tick(&mut self) -> Result<TickReport> {
        let now = self.clock.now();
        let mut report = TickReport::default();

        loop {
            let Some(subscription) = self.subscription.as_mut() else {
                break;
            };

            let fire_opportunities = match (
                subscription.opportunities.due_at(now),
                subscription.portfolio.due_at(now),
            ) {
                (None, None) => break,
                (Some(opportunities), Some(portfolio)) => opportunities <= portfolio,
                (Some(_), None) => true,
                (None, Some(_)) => false,
            };

            if fire_opportunities {
                let due = subscription.opportunities.fire();
                let stamp = u64::try_from(due.as_millis()).unwrap_or(u64::MAX);
                match generate_opportunities(&mut self.random, stamp) {
                    Ok(batch) => {
                        debug!(count = batch.len(), stamp, "Publishing opportunities");
                        (subscription.on_opportunities)(batch);
                        report.opportunity_batches += 1;
                    }
                    Err(err) => return Err(self.halt(err)),
                }
            } else {
                subscription.portfolio.fire();
                match generate_portfolio(&mut self.random) {
                    Ok(portfolio) => {
                        debug!(
                            total_value = portfolio.total_value,
                            positions = portfolio.positions.len(),
                            "Publishing portfolio"
                        );
                        (subscription.on_portfolio)(portfolio);
                        report.portfolio_snapshots += 1;
                    }
                    Err(err) => return Err(self.halt(err)),
                }
            }
        }

        Ok(report)
    }

    fn halt(&mut self, err: Error) -> Error {
        error!(error = %err, "Generator failed, stopping update scheduler");
        self.subscription = None;
        err
    }
}
