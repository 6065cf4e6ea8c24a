//! Deferred task scheduling on the journey's own event queue
//!
//! Nothing here spawns threads. Tasks are kept in a queue with a due time and
//! fired by whoever owns the queue (`Journey::run_due`, or the async `settle`
//! driver). Time comes from an injected `Clock` so tests can use a virtual one.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current time
pub trait Clock: std::fmt::Debug {
    fn now(&self) -> Instant;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that follows tokio's timer, including paused test time
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}

/// Virtual clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one copy and hand the
/// other to a journey.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        ManualClock {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Identifies one scheduled task, used to cancel it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

/// Work that can be deferred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    /// Move the journey to the finished phase
    Finish,
}

#[derive(Debug)]
struct Scheduled {
    handle: TaskHandle,
    due: Instant,
    task: DeferredTask,
}

/// Queue of cancellable deferred tasks
#[derive(Debug)]
pub struct Scheduler {
    clock: Box<dyn Clock>,
    next_handle: u64,
    pending: Vec<Scheduled>,
}

impl Scheduler {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Scheduler {
            clock,
            next_handle: 0,
            pending: Vec::new(),
        }
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Queue a task to run once `delay` has elapsed
    pub fn schedule(&mut self, delay: Duration, task: DeferredTask) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(Scheduled {
            handle,
            due: self.clock.now() + delay,
            task,
        });
        handle
    }

    /// Cancel a task. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.handle != handle);
        self.pending.len() != before
    }

    /// Cancel every pending task matching `predicate`, returning how many
    pub fn cancel_where(&mut self, predicate: impl Fn(DeferredTask) -> bool) -> usize {
        let before = self.pending.len();
        self.pending.retain(|s| !predicate(s.task));
        before - self.pending.len()
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.pending.iter().any(|s| s.handle == handle)
    }

    pub fn has_pending(&self, task: DeferredTask) -> bool {
        self.pending.iter().any(|s| s.task == task)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Earliest due time among pending tasks
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|s| s.due).min()
    }

    /// Remove and return every task that is due, in due order.
    ///
    /// Tasks due at the same instant come out in scheduling order.
    pub fn take_due(&mut self) -> Vec<(TaskHandle, DeferredTask)> {
        let now = self.clock.now();
        let (mut due, waiting): (Vec<Scheduled>, Vec<Scheduled>) =
            std::mem::take(&mut self.pending)
                .into_iter()
                .partition(|s| s.due <= now);
        self.pending = waiting;

        due.sort_by_key(|s| (s.due, s.handle));
        due.into_iter().map(|s| (s.handle, s.task)).collect()
    }
}
