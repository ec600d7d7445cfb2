//! Timer-driven publishing of generated data.
//!
//! - [`clock`] - `Clock` trait, `SystemClock`, `ManualClock`
//! - [`scheduler`] - the two-timer `UpdateScheduler` state machine
//! - [`driver`] - tokio loop that ticks a shared scheduler in real time

pub mod clock;
pub mod driver;
pub mod scheduler;

pub use clock::{Clock, ManualClock, SystemClock};
pub use driver::{drive, spawn, SchedulerHandle};
pub use scheduler::{
    OpportunityCallback, PortfolioCallback, SchedulerState, TickReport, UpdateIntervals,
    UpdateScheduler,
};
