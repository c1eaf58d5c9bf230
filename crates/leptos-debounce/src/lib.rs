//! Leptos Debounce Utilities
//!
//! Delays an action until input activity pauses for a fixed interval.
//! Uses a generation counter so only the latest pending action runs.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Generation counter shared between an input and its pending timers.
///
/// Every call to [`DebounceGate::arm`] hands out a new ticket and makes all
/// older tickets stale.
#[derive(Clone, Debug, Default)]
pub struct DebounceGate {
    generation: Arc<AtomicU64>,
}

impl DebounceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation and return its ticket
    pub fn arm(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `ticket` is still the latest generation
    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }

    /// Invalidate any pending action without scheduling a new one
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

/// Run `action(value)` after `delay_ms`, unless the gate is re-armed first.
pub fn debounce<T, F>(gate: &DebounceGate, delay_ms: u32, value: T, action: F)
where
    T: 'static,
    F: FnOnce(T) + 'static,
{
    let ticket = gate.arm();
    let gate = gate.clone();
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        if gate.is_current(ticket) {
            action(value);
        }
    });
}

/// Mirror `source` into a new signal that only updates once `source`
/// has been quiet for `delay_ms`.
///
/// The initial value is copied immediately; only later changes are delayed.
/// A pending update is dropped when the owning scope is cleaned up.
pub fn debounced_signal<T>(source: ReadSignal<T>, delay_ms: u32) -> ReadSignal<T>
where
    T: Clone + Send + Sync + 'static,
{
    let (debounced, set_debounced) = signal(source.get_untracked());
    let gate = DebounceGate::new();

    // A pending update must not land after the owner is gone
    on_cleanup({
        let gate = gate.clone();
        move || gate.cancel()
    });

    Effect::new(move |prev: Option<()>| {
        let value = source.get();
        if prev.is_some() {
            debounce(&gate, delay_ms, value, move |v| set_debounced.set(v));
        }
    });

    debounced
}
