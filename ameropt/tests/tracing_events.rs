//! Diagnostics emitted through `tracing`.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use ameropt::prelude::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    Layer,
};

/// Counts `WARN` events seen by the subscriber.
#[derive(Clone, Default)]
struct WarnCounter(Arc<AtomicUsize>);

impl WarnCounter {
    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn with_counter<T>(f: impl FnOnce() -> T) -> (T, usize) {
    let counter = WarnCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, counter.count())
}

fn atm_put() -> VanillaOption {
    VanillaOption::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put, ExerciseType::American)
        .unwrap()
}

#[test]
fn explicit_refinement_warns_and_stays_accurate() {
    let put = atm_put();
    let (explicit, warnings) =
        with_counter(|| FdExplicitEngine.price(&put, &FdGridSize::new(50, 10)).unwrap());
    assert!(warnings >= 1, "expected a WARN event");
    assert!(explicit.is_finite());

    let cn = FdCrankNicolsonEngine.price(&put, &FdGridSize::new(50, 100)).unwrap();
    assert!((explicit - cn).abs() < 0.1, "explicit {explicit:.4} vs cn {cn:.4}");
}

#[test]
fn stable_grids_are_silent() {
    let put = atm_put();
    let (_, warnings) = with_counter(|| {
        FdExplicitEngine.price(&put, &FdGridSize::new(20, 200)).unwrap();
        FdImplicitEngine.price(&put, &FdGridSize::new(50, 10)).unwrap();
        BinomialEngine.price(&put, &BinomialParams::default()).unwrap();
    });
    assert_eq!(warnings, 0);
}
