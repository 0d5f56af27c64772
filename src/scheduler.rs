//! One-shot timers.
//!
//! Everything runs on the page's single event loop, so tasks are plain
//! `FnOnce()` boxes without `Send` bounds.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::time::Duration;

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Run `task` once after `delay`.
    fn after(&self, delay: Duration, task: Task);

    /// Run `task` before the next repaint.
    fn next_frame(&self, task: Task) {
        self.after(Duration::ZERO, task);
    }
}

// ============================================================================
// Manual scheduler (headless hosts and tests)
// ============================================================================

struct Pending {
    due: Duration,
    seq: u64,
    task: Task,
}

/// Scheduler with a virtual clock that only moves on [`advance`].
///
/// [`advance`]: ManualScheduler::advance
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    seq: Cell<u64>,
    queue: RefCell<Vec<Pending>>,
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.now.get())
            .field("pending", &self.pending())
            .finish()
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Move the clock forward, running every task that falls due on the way
    /// in due order (ties in scheduling order). Tasks scheduled by a running
    /// task are picked up if they fall inside the window.
    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        while let Some(pending) = self.pop_due(target) {
            self.now.set(pending.due.max(self.now.get()));
            (pending.task)();
        }
        self.now.set(target);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    fn pop_due(&self, target: Duration) -> Option<Pending> {
        let mut queue = self.queue.borrow_mut();
        let index = queue
            .iter()
            .enumerate()
            .filter(|(_, pending)| pending.due <= target)
            .min_by_key(|(_, pending)| (pending.due, pending.seq))
            .map(|(index, _)| index)?;
        Some(queue.remove(index))
    }
}

impl Scheduler for ManualScheduler {
    fn after(&self, delay: Duration, task: Task) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.queue.borrow_mut().push(Pending {
            due: self.now.get() + delay,
            seq,
            task,
        });
    }
}

// ============================================================================
// Tokio scheduler (native hosts)
// ============================================================================

/// Scheduler backed by tokio timers.
///
/// Tasks are spawned with `spawn_local`, so this must be used from inside a
/// `tokio::task::LocalSet`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioScheduler;

#[cfg(not(target_arch = "wasm32"))]
impl Scheduler for TokioScheduler {
    fn after(&self, delay: Duration, task: Task) {
        tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}
