//! Capturing tracing events emitted while a closure runs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

struct LevelCounter {
    level: Level,
    count: Arc<AtomicUsize>,
}

impl<S: Subscriber> Layer<S> for LevelCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == self.level {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Runs `f` on the current thread and returns how many events at exactly
/// `level` it emitted. Events from other threads are not seen.
pub fn count_events<R>(level: Level, f: impl FnOnce() -> R) -> (R, usize) {
    let counter = LevelCounter {
        level,
        count: Arc::default(),
    };
    let count = Arc::clone(&counter.count);
    let subscriber = tracing_subscriber::registry().with(counter);
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, count.load(Ordering::SeqCst))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_only_requested_level() {
        let ((), infos) = count_events(Level::INFO, || {
            tracing::info!("one");
            tracing::debug!("skipped");
            tracing::info!("two");
        });
        assert_eq!(infos, 2);
    }
}
