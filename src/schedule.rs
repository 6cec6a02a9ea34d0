use std::time::Duration;

/// A one-shot task handed to a [`Scheduler`].
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Host timer facility.
///
/// Tasks run on the host's event loop, never synchronously from inside
/// `schedule`. Cancelling a handle whose task already ran is a no-op.
pub trait Scheduler: Clone + Send + Sync + 'static {
    type Handle: Send + 'static;

    /// Runs `task` once after `delay`. Returns `None` if the host refused the timer.
    fn schedule(&self, delay: Duration, task: Task) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

/// Browser timers via `window.setTimeout`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    type Handle = leptos::prelude::TimeoutHandle;

    fn schedule(&self, delay: Duration, task: Task) -> Option<Self::Handle> {
        match leptos::prelude::set_timeout_with_handle(task, delay) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("couldn't schedule timer: {e:?}");
                None
            }
        }
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.clear();
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use super::{Scheduler, Task};

    struct Entry {
        due: Duration,
        id: u64,
        task: Task,
    }

    #[derive(Default)]
    struct Inner {
        now: Duration,
        next_id: u64,
        queue: Vec<Entry>,
    }

    /// Virtual-time scheduler: nothing runs until the test advances the clock.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        inner: Arc<Mutex<Inner>>,
        ignore_cancel: bool,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        /// A scheduler whose `cancel` cannot stop an already queued task,
        /// like a timer that fired in the same turn as the teardown.
        pub fn ignoring_cancel() -> Self {
            Self {
                ignore_cancel: true,
                ..Self::default()
            }
        }

        pub fn now(&self) -> Duration {
            self.inner.lock().expect("should be able to lock scheduler").now
        }

        pub fn pending(&self) -> usize {
            self.inner
                .lock()
                .expect("should be able to lock scheduler")
                .queue
                .len()
        }

        /// Moves the clock forward by `by`, running every task that falls due.
        pub fn advance(&self, by: Duration) {
            let target = self.now() + by;
            while let Some(task) = self.pop_due(target) {
                task();
            }
            let mut inner = self.inner.lock().expect("should be able to lock scheduler");
            inner.now = target;
        }

        /// Jumps straight to the next queued task and runs it.
        /// Returns how far the clock moved, or `None` if nothing is queued.
        pub fn run_next(&self) -> Option<Duration> {
            let before = self.now();
            let task = self.pop_due(Duration::MAX)?;
            task();
            Some(self.now() - before)
        }

        fn pop_due(&self, limit: Duration) -> Option<Task> {
            let mut inner = self.inner.lock().expect("should be able to lock scheduler");
            let idx = inner
                .queue
                .iter()
                .enumerate()
                .filter(|(_, e)| e.due <= limit)
                .min_by_key(|(_, e)| (e.due, e.id))
                .map(|(i, _)| i)?;
            let entry = inner.queue.remove(idx);
            inner.now = entry.due;
            Some(entry.task)
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = u64;

        fn schedule(&self, delay: Duration, task: Task) -> Option<u64> {
            let mut inner = self.inner.lock().expect("should be able to lock scheduler");
            let id = inner.next_id;
            inner.next_id += 1;
            let due = inner.now + delay;
            inner.queue.push(Entry { due, id, task });
            Some(id)
        }

        fn cancel(&self, handle: u64) {
            if self.ignore_cancel {
                return;
            }
            let mut inner = self.inner.lock().expect("should be able to lock scheduler");
            inner.queue.retain(|e| e.id != handle);
        }
    }

    mod tests {
        use super::*;
        use std::sync::atomic::{AtomicUsize, Ordering};

        #[test]
        fn test_runs_in_due_order() {
            let scheduler = ManualScheduler::new();
            let order = Arc::new(Mutex::new(Vec::new()));
            for (delay, name) in [(30, "c"), (10, "a"), (20, "b")] {
                let order = order.clone();
                scheduler.schedule(
                    Duration::from_millis(delay),
                    Box::new(move || order.lock().unwrap().push(name)),
                );
            }
            scheduler.advance(Duration::from_millis(25));
            assert_eq!(*order.lock().unwrap(), vec!["a", "b"]);
            assert_eq!(scheduler.now(), Duration::from_millis(25));
            assert_eq!(scheduler.run_next(), Some(Duration::from_millis(5)));
            assert_eq!(*order.lock().unwrap(), vec!["a", "b", "c"]);
            assert_eq!(scheduler.run_next(), None);
        }

        #[test]
        fn test_cancel() {
            let scheduler = ManualScheduler::new();
            let count = Arc::new(AtomicUsize::new(0));
            let c = count.clone();
            let handle = scheduler
                .schedule(
                    Duration::from_millis(10),
                    Box::new(move || {
                        c.fetch_add(1, Ordering::SeqCst);
                    }),
                )
                .unwrap();
            scheduler.cancel(handle);
            scheduler.advance(Duration::from_secs(1));
            assert_eq!(count.load(Ordering::SeqCst), 0);
            assert_eq!(scheduler.pending(), 0);
        }
    }
}
