//! Typewriter effect: types a phrase out, holds it, deletes it, moves on.
//!
//! [`PhraseCycler`] is the pure state machine, advanced one transition at a
//! time. [`Typewriter`] owns a cycler plus the pending timer that drives it,
//! and stops the rotation when stopped or dropped.

use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use thiserror::Error;

use crate::schedule::Scheduler;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypewriterError {
    #[error("typewriter needs at least one phrase")]
    NoPhrases,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_interval: Duration,
    pub delete_interval: Duration,
    pub hold: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_interval: Duration::from_millis(100),
            delete_interval: Duration::from_millis(50),
            hold: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct PhraseCycler {
    phrases: Vec<String>,
    timing: TypewriterTiming,
    active_index: usize,
    text: String,
    phase: Phase,
}

impl PhraseCycler {
    pub fn new<I, S>(phrases: I, timing: TypewriterTiming) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(TypewriterError::NoPhrases);
        }
        Ok(Self {
            phrases,
            timing,
            active_index: 0,
            text: String::new(),
            phase: Phase::Typing,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of completed phrases. Never wraps; the phrase lookup does.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_deleting(&self) -> bool {
        self.phase == Phase::Deleting
    }

    pub fn timing(&self) -> TypewriterTiming {
        self.timing
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.active_index % self.phrases.len()]
    }

    /// Performs exactly one transition and returns how long to wait before
    /// the next one.
    pub fn advance(&mut self) -> Duration {
        match self.phase {
            Phase::Typing => {
                let phrase = &self.phrases[self.active_index % self.phrases.len()];
                // text is always a prefix of phrase, so its length is a char boundary
                if let Some(c) = phrase[self.text.len()..].chars().next() {
                    self.text.push(c);
                }
                if self.text.len() == phrase.len() {
                    self.phase = Phase::Holding;
                    self.timing.hold
                } else {
                    self.timing.type_interval
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.timing.delete_interval
            }
            Phase::Deleting => {
                self.text.pop();
                if self.text.is_empty() {
                    self.active_index += 1;
                    self.phase = Phase::Typing;
                    self.timing.type_interval
                } else {
                    self.timing.delete_interval
                }
            }
        }
    }
}

type OnChange = Arc<dyn Fn(&str) + Send + Sync>;

struct Shared<S: Scheduler> {
    cycler: PhraseCycler,
    pending: Option<S::Handle>,
    stopped: bool,
}

/// A running typewriter.
///
/// The only timer it ever owns is the one for its next transition. Stopping
/// (or dropping) cancels that timer and marks the instance stopped, so a
/// callback the host already queued finds nothing to do.
pub struct Typewriter<S: Scheduler> {
    shared: Arc<Mutex<Shared<S>>>,
    scheduler: S,
}

impl<S: Scheduler> Typewriter<S> {
    /// Starts cycling; `on_change` receives the new text whenever it changes.
    pub fn start<F>(cycler: PhraseCycler, scheduler: S, on_change: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let first_delay = cycler.timing().type_interval;
        let shared = Arc::new(Mutex::new(Shared {
            cycler,
            pending: None,
            stopped: false,
        }));
        let on_change: OnChange = Arc::new(on_change);
        let pending = schedule_tick(&shared, &scheduler, on_change, first_delay);
        shared
            .lock()
            .expect("should be able to lock typewriter")
            .pending = pending;
        Self { shared, scheduler }
    }

    pub fn text(&self) -> String {
        self.state().cycler.text().to_string()
    }

    pub fn active_index(&self) -> usize {
        self.state().cycler.active_index()
    }

    pub fn phase(&self) -> Phase {
        self.state().cycler.phase()
    }

    /// Stops the rotation. This is the last thing that happens to the instance.
    pub fn stop(self) {
        drop(self);
    }

    fn state(&self) -> std::sync::MutexGuard<'_, Shared<S>> {
        self.shared.lock().expect("should be able to lock typewriter")
    }
}

impl<S: Scheduler> Drop for Typewriter<S> {
    fn drop(&mut self) {
        let pending = {
            let mut state = self.state();
            state.stopped = true;
            state.pending.take()
        };
        if let Some(handle) = pending {
            self.scheduler.cancel(handle);
        }
    }
}

fn schedule_tick<S: Scheduler>(
    shared: &Arc<Mutex<Shared<S>>>,
    scheduler: &S,
    on_change: OnChange,
    delay: Duration,
) -> Option<S::Handle> {
    let weak = Arc::downgrade(shared);
    let next = scheduler.clone();
    let handle = scheduler.schedule(delay, Box::new(move || tick(weak, next, on_change)));
    if handle.is_none() {
        log::warn!("typewriter timer refused, rotation halted");
    }
    handle
}

fn tick<S: Scheduler>(weak: Weak<Mutex<Shared<S>>>, scheduler: S, on_change: OnChange) {
    let Some(shared) = weak.upgrade() else {
        return;
    };

    let (changed, text, delay) = {
        let mut state = shared.lock().expect("should be able to lock typewriter");
        if state.stopped {
            return;
        }
        state.pending = None;
        let before = state.cycler.text().len();
        let delay = state.cycler.advance();
        let text = state.cycler.text().to_string();
        (text.len() != before, text, delay)
    };

    // the lock is released here: on_change may tear the typewriter down
    if changed {
        on_change(&text);
    }

    let mut state = shared.lock().expect("should be able to lock typewriter");
    if state.stopped {
        return;
    }
    state.pending = schedule_tick(&shared, &scheduler, on_change, delay);
}
