use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use arbitron::app::StateStore;
use arbitron::generator::RngSource;
use arbitron::runtime::{ManualClock, SchedulerState, UpdateIntervals, UpdateScheduler};

fn scheduler(clock: &ManualClock, seed: u64) -> UpdateScheduler<ManualClock, RngSource<rand_chacha::ChaCha8Rng>> {
    UpdateScheduler::new(clock.clone(), RngSource::seeded(seed), UpdateIntervals::default())
        .unwrap()
}

fn publish_into(scheduler: &mut UpdateScheduler<ManualClock, RngSource<rand_chacha::ChaCha8Rng>>, store: &Arc<StateStore>) {
    let (opportunities, portfolio) = (Arc::clone(store), Arc::clone(store));
    scheduler.start(
        move |batch| opportunities.update_opportunities(batch),
        move |snapshot| portfolio.update_portfolio(snapshot),
    );
}

#[test]
fn publishes_into_store_over_virtual_time() {
    let clock = ManualClock::new();
    let mut scheduler = scheduler(&clock, 3);
    let store = Arc::new(StateStore::default());
    publish_into(&mut scheduler, &store);

    clock.advance_ms(3000);
    scheduler.tick().unwrap();
    assert_eq!(store.read().opportunities[0].id, "opp-0-3000");
    assert!(store.read().portfolio.positions.is_empty());

    clock.advance_ms(5000);
    scheduler.tick().unwrap();
    assert_eq!(store.read().opportunities[0].id, "opp-0-6000");
    assert_eq!(store.read().portfolio.positions.len(), 3);
}

#[test]
fn double_start_and_stop() {
    let clock = ManualClock::new();
    let mut scheduler = scheduler(&clock, 8);
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));

    let f = Arc::clone(&first);
    scheduler.start(
        move |_| {
            f.fetch_add(1, Ordering::SeqCst);
        },
        |_| {},
    );
    let s = Arc::clone(&second);
    scheduler.start(
        move |_| {
            s.fetch_add(1, Ordering::SeqCst);
        },
        |_| {},
    );

    clock.advance_ms(9000);
    scheduler.tick().unwrap();
    assert_eq!(first.load(Ordering::SeqCst), 0);
    assert_eq!(second.load(Ordering::SeqCst), 3);

    assert!(scheduler.stop());
    assert!(!scheduler.stop());
    assert_eq!(scheduler.state(), SchedulerState::Stopped);

    clock.advance_ms(60_000);
    assert_eq!(scheduler.tick().unwrap().fired(), 0);
    assert_eq!(second.load(Ordering::SeqCst), 3);
}

#[test]
fn same_seed_same_published_stream() {
    let run = |seed| {
        let clock = ManualClock::new();
        let mut scheduler = scheduler(&clock, seed);
        let store = Arc::new(StateStore::default());
        publish_into(&mut scheduler, &store);
        clock.advance_ms(24_000);
        scheduler.tick().unwrap();
        store.snapshot()
    };

    assert_eq!(run(11), run(11));
    assert_ne!(run(11).opportunities, run(12).opportunities);
}

#[test]
fn restart_resets_timers_from_now() {
    let clock = ManualClock::new();
    let mut scheduler = scheduler(&clock, 4);
    let count = Arc::new(AtomicUsize::new(0));

    scheduler.start(|_| {}, |_| {});
    clock.advance_ms(2000);
    let c = Arc::clone(&count);
    scheduler.start(
        move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        },
        |_| {},
    );

    clock.advance_ms(1000);
    scheduler.tick().unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 0);
    assert_eq!(
        scheduler.time_until_next(),
        Some(std::time::Duration::from_millis(2000))
    );

    clock.advance_ms(2000);
    scheduler.tick().unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 1);
}
