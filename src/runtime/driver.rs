//! Real-time driver for [`UpdateScheduler`].

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;
use tracing::info;

use super::clock::Clock;
use super::scheduler::{SchedulerState, TickReport, UpdateScheduler};
use crate::domain::{Opportunity, Portfolio};
use crate::error::Result;
use crate::generator::RandomSource;

/// Shared, lockable scheduler plus a wake-up signal for its driver.
///
/// Callbacks run with the scheduler lock held, so they must not call back
/// into the handle. Once [`stop`](Self::stop) returns, no callback is running
/// and none will run until the next `start`.
pub struct SchedulerHandle<C, R> {
    inner: Arc<Mutex<UpdateScheduler<C, R>>>,
    wake: Arc<Notify>,
}

impl<C, R> Clone for SchedulerHandle<C, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            wake: Arc::clone(&self.wake),
        }
    }
}

impl<C: Clock, R: RandomSource> SchedulerHandle<C, R> {
    pub fn new(scheduler: UpdateScheduler<C, R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(scheduler)),
            wake: Arc::new(Notify::new()),
        }
    }

    pub fn start<F, G>(&self, on_opportunities: F, on_portfolio: G)
    where
        F: FnMut(Vec<Opportunity>) + Send + 'static,
        G: FnMut(Portfolio) + Send + 'static,
    {
        self.inner.lock().start(on_opportunities, on_portfolio);
        self.wake.notify_one();
    }

    pub fn stop(&self) -> bool {
        let stopped = self.inner.lock().stop();
        self.wake.notify_one();
        stopped
    }

    pub fn state(&self) -> SchedulerState {
        self.inner.lock().state()
    }

    pub fn tick(&self) -> Result<TickReport> {
        self.inner.lock().tick()
    }

    fn time_until_next(&self) -> Option<Duration> {
        self.inner.lock().time_until_next()
    }
}

/// Sleep until the next due time, tick, repeat; exit on shutdown.
///
/// While the scheduler is stopped the driver parks until `start` or `stop`
/// wakes it. A generator failure ends the loop with that error.
pub async fn drive<C, R>(handle: SchedulerHandle<C, R>, mut shutdown: watch::Receiver<bool>) -> Result<()>
where
    C: Clock,
    R: RandomSource,
{
    loop {
        let wait = handle.time_until_next();
        let sleep = async move {
            match wait {
                Some(wait) => tokio::time::sleep(wait).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            result = shutdown.changed() => {
                match result {
                    Ok(()) => {
                        if *shutdown.borrow() {
                            info!("Shutdown signal received");
                            break;
                        }
                    }
                    Err(_) => {
                        info!("Shutdown channel closed");
                        break;
                    }
                }
            }
            () = handle.wake.notified() => {}
            () = sleep => {
                handle.tick()?;
            }
        }
    }

    Ok(())
}

/// Run [`drive`] on the tokio runtime.
pub fn spawn<C, R>(handle: SchedulerHandle<C, R>, shutdown: watch::Receiver<bool>) -> JoinHandle<Result<()>>
where
    C: Clock + 'static,
    R: RandomSource + Send + 'static,
{
    tokio::spawn(drive(handle, shutdown))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::generator::RngSource;
    use crate::runtime::clock::SystemClock;
    use crate::runtime::scheduler::UpdateIntervals;

    fn fast_handle() -> SchedulerHandle<SystemClock, RngSource<rand_chacha::ChaCha8Rng>> {
        SchedulerHandle::new(UpdateScheduler::new(
            SystemClock::new(),
            RngSource::seeded(17),
            UpdateIntervals {
                opportunities: Duration::from_millis(10),
                portfolio: Duration::from_millis(25),
            },
        )
        .unwrap())
    }

    #[tokio::test]
    async fn driver_publishes_until_shutdown() {
        let handle = fast_handle();
        let opportunities = Arc::new(AtomicUsize::new(0));
        let portfolios = Arc::new(AtomicUsize::new(0));
        let (o, p) = (Arc::clone(&opportunities), Arc::clone(&portfolios));
        handle.start(
            move |_| {
                o.fetch_add(1, Ordering::SeqCst);
            },
            move |_| {
                p.fetch_add(1, Ordering::SeqCst);
            },
        );

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = spawn(handle.clone(), shutdown_rx);

        tokio::time::sleep(Duration::from_millis(120)).await;
        shutdown_tx.send(true).unwrap();
        task.await.unwrap().unwrap();

        assert!(opportunities.load(Ordering::SeqCst) >= 2);
        assert!(portfolios.load(Ordering::SeqCst) >= 1);
    }

    #[tokio::test]
    async fn no_callbacks_after_stop() {
        let handle = fast_handle();
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        handle.start(
            move |_| {
                c.fetch_add(1, Ordering::SeqCst);
            },
            |_| {},
        );

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = spawn(handle.clone(), shutdown_rx);

        tokio::time::sleep(Duration::from_millis(40)).await;
        assert!(handle.stop());
        let after_stop = count.load(Ordering::SeqCst);

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(count.load(Ordering::SeqCst), after_stop);
        assert_eq!(handle.state(), SchedulerState::Stopped);

        shutdown_tx.send(true).unwrap();
        task.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn idle_driver_wakes_on_start() {
        let handle = fast_handle();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = spawn(handle.clone(), shutdown_rx);

        tokio::time::sleep(Duration::from_millis(20)).await;
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        handle.start(
            move |_| {
                c.fetch_add(1, Ordering::SeqCst);
            },
            |_| {},
        );

        tokio::time::sleep(Duration::from_millis(80)).await;
        shutdown_tx.send(true).unwrap();
        task.await.unwrap().unwrap();
        assert!(count.load(Ordering::SeqCst) >= 1);
    }
}
