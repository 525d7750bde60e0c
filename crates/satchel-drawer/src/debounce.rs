//! # Mutation Debouncer
//!
//! Coalesces rapid quantity edits into a single commit per line item.
//!
//! ## Why Debounce?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Quantity input fires on every keystroke:                               │
//! │                                                                         │
//! │    "2"      "25"     "250"                                              │
//! │     │        │        │                                                 │
//! │     ▼        ▼        ▼                                                 │
//! │   schedule schedule schedule      each replaces the previous timer     │
//! │     ╳        ╳        │                                                 │
//! │                       │  ◄── 350ms of quiet ──►                         │
//! │                       ▼                                                 │
//! │              ONE commit: set quantity 250                               │
//! │                                                                         │
//! │  INVARIANT: at most one pending timer per variant at any instant.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each slot carries a generation tag. A timer that wakes checks it still
//! owns its slot before committing, so a timer replaced between wake-up and
//! commit can never fire a stale quantity over a newer edit.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use satchel_core::VariantId;
use tokio::task::JoinHandle;
use tracing::trace;

// =============================================================================
// Timer Table
// =============================================================================

struct TimerSlot {
    generation: u64,
    handle: JoinHandle<()>,
}

struct DebouncerInner {
    timers: Mutex<HashMap<VariantId, TimerSlot>>,
    next_generation: AtomicU64,
}

impl Drop for DebouncerInner {
    fn drop(&mut self) {
        // Orphaned timers must not fire after the owning drawer is gone
        if let Ok(timers) = self.timers.lock() {
            for slot in timers.values() {
                slot.handle.abort();
            }
        }
    }
}

// =============================================================================
// Debouncer
// =============================================================================

/// Per-variant timer table. Handle-style: clones share one table.
#[derive(Clone)]
pub struct Debouncer {
    inner: Arc<DebouncerInner>,
}

impl Debouncer {
    pub fn new() -> Self {
        Debouncer {
            inner: Arc::new(DebouncerInner {
                timers: Mutex::new(HashMap::new()),
                next_generation: AtomicU64::new(0),
            }),
        }
    }

    /// Schedules `commit` to run after `delay`, cancelling any pending
    /// timer for the same variant.
    ///
    /// The commit runs only if the timer survives the whole delay
    /// uninterrupted; its slot is cleared just before it runs.
    pub fn schedule<F>(&self, variant: VariantId, delay: Duration, commit: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let generation = self.inner.next_generation.fetch_add(1, Ordering::Relaxed);
        let inner = Arc::clone(&self.inner);

        // Hold the table lock across spawn+insert so the new task can never
        // observe the table without its own slot in it.
        let mut timers = self.inner.timers.lock().expect("timer table poisoned");

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let owns_slot = {
                let mut timers = inner.timers.lock().expect("timer table poisoned");
                match timers.get(&variant) {
                    Some(slot) if slot.generation == generation => {
                        timers.remove(&variant);
                        true
                    }
                    // Replaced while waking up; the newer timer owns the edit
                    _ => false,
                }
            };

            if owns_slot {
                trace!(%variant, "debounce timer fired");
                commit.await;
            }
        });

        if let Some(previous) = timers.insert(variant, TimerSlot { generation, handle }) {
            trace!(%variant, "debounce timer replaced");
            previous.handle.abort();
        }
    }

    /// Cancels any pending timer for `variant`. Returns true when one was
    /// pending.
    pub fn cancel(&self, variant: VariantId) -> bool {
        let mut timers = self.inner.timers.lock().expect("timer table poisoned");
        match timers.remove(&variant) {
            Some(slot) => {
                slot.handle.abort();
                true
            }
            None => false,
        }
    }

    /// True while a timer for `variant` is pending (scheduled, not yet
    /// fired or cancelled).
    pub fn pending(&self, variant: VariantId) -> bool {
        self.inner
            .timers
            .lock()
            .expect("timer table poisoned")
            .contains_key(&variant)
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
