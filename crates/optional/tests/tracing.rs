use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use optional::{ABSENT_TARGET, Optional};
use tracing::{Event, Subscriber};
use tracing_subscriber::{Registry, layer::Context, prelude::*};

/// Counts the events emitted on [`ABSENT_TARGET`].
#[derive(Clone, Default)]
struct AbsentCounter(Arc<AtomicUsize>);

impl AbsentCounter {
    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> tracing_subscriber::Layer<S> for AbsentCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().target() == ABSENT_TARGET {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Records the target of every event, whatever its level.
#[derive(Clone, Default)]
struct TargetRecorder(Arc<Mutex<Vec<String>>>);

impl<S: Subscriber> tracing_subscriber::Layer<S> for TargetRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.0.lock().unwrap().push(event.metadata().target().to_string());
    }
}

fn with_counter(f: impl FnOnce()) -> usize {
    let counter = AbsentCounter::default();
    let subscriber = Registry::default().with(counter.clone());
    tracing::subscriber::with_default(subscriber, f);
    counter.count()
}

#[test]
fn absent_retrievals_are_traced() {
    let count = with_counter(|| {
        let opt = Optional::<i32>::empty();
        assert!(opt.get().is_err());
        assert!(opt.get_or_default().1.is_err());
        assert!(opt.into_value().is_err());
    });
    assert_eq!(count, 3);
}

#[test]
fn present_retrievals_are_silent() {
    let count = with_counter(|| {
        let opt = Optional::new(String::from("Hello, World!"));
        assert!(opt.is_present());
        assert_eq!(opt.get().unwrap(), "Hello, World!");
        assert_eq!(opt.get_or_default().0, "Hello, World!");
        assert_eq!(opt.or_else(String::new()), "Hello, World!");
        assert!(opt.into_value().is_ok());
    });
    assert_eq!(count, 0);
}

#[test]
fn or_else_on_empty_is_silent() {
    let count = with_counter(|| {
        assert_eq!(Optional::<i32>::empty().or_else(100), 100);
        assert!(!Optional::<i32>::empty().is_present());
    });
    assert_eq!(count, 0);
}

#[test]
fn absent_retrieval_emits_nothing_else() {
    let recorder = TargetRecorder::default();
    let subscriber = Registry::default().with(recorder.clone());
    tracing::subscriber::with_default(subscriber, || {
        assert!(Optional::<i32>::empty().get().is_err());
    });
    assert_eq!(*recorder.0.lock().unwrap(), vec![ABSENT_TARGET.to_string()]);
}
