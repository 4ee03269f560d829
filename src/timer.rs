//! Schedulers for deferred, paced actions.
//!
//! The engine never waits on a scheduler: it submits notification delivery
//! and carries on. Tests use [`Immediate`] or [`ManualScheduler`]; an
//! interactive front end uses [`TimerScheduler`], which runs actions on a
//! background thread once their delay has elapsed.

use std::cmp::Ordering;
use std::any::Any;
use std::collections::{BinaryHeap, VecDeque};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

/// A deferred action. Runs exactly once.
pub type Deferred = Box<dyn FnOnce() + Send + 'static>;

/// Runs actions after a delay.
///
/// Actions submitted with the same delay run in submission order.
pub trait Scheduler: Send + Sync {
    fn after(&self, delay: Duration, action: Deferred);
}

impl<S: Scheduler + ?Sized> Scheduler for Arc<S> {
    fn after(&self, delay: Duration, action: Deferred) {
        (**self).after(delay, action);
    }
}

/// Ignores the delay and runs the action on the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct Immediate;

impl Scheduler for Immediate {
    fn after(&self, _delay: Duration, action: Deferred) {
        action();
    }
}

/// Queues actions until [`run_pending`](ManualScheduler::run_pending) is called.
#[derive(Default)]
pub struct ManualScheduler {
    queue: Mutex<VecDeque<(Duration, Deferred)>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of actions waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.lock().len()
    }

    /// Delays of the waiting actions, in submission order.
    #[must_use]
    pub fn pending_delays(&self) -> Vec<Duration> {
        self.queue.lock().iter().map(|(delay, _)| *delay).collect()
    }

    /// Run every queued action in submission order; returns how many ran.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        // The lock is released before each action runs.
        while let Some((_, action)) = self.pop() {
            action();
            ran += 1;
        }
        ran
    }

    fn pop(&self) -> Option<(Duration, Deferred)> {
        self.queue.lock().pop_front()
    }
}

impl Scheduler for ManualScheduler {
    fn after(&self, delay: Duration, action: Deferred) {
        self.queue.lock().push_back((delay, action));
    }
}

/// Deadline used when `now + delay` is not representable.
const FAR_FUTURE: Duration = Duration::from_secs(60 * 60 * 24 * 365 * 30);

fn deadline(delay: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(delay)
        .or_else(|| now.checked_add(FAR_FUTURE))
        .unwrap_or(now)
}

struct Entry {
    due: Instant,
    seq: u64,
    action: Deferred,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // Reversed: the heap pops the earliest deadline, then the earliest submission.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Default)]
struct Queue {
    entries: BinaryHeap<Entry>,
    next_seq: u64,
    shutdown: bool,
}

#[derive(Default)]
struct Shared {
    queue: Mutex<Queue>,
    wake: Condvar,
}

/// Runs actions on a background thread once their delay has elapsed.
///
/// A panicking action is logged and does not stop later ones. Dropping the
/// scheduler runs whatever is still queued, without waiting for the
/// remaining delays, then joins the worker.
pub struct TimerScheduler {
    shared: Arc<Shared>,
    handle: Option<JoinHandle<()>>,
}

impl TimerScheduler {
    #[must_use]
    pub fn new() -> Self {
        let shared = Arc::new(Shared::default());
        let worker = Arc::clone(&shared);
        let handle = thread::spawn(move || run_worker(&worker));
        TimerScheduler {
            shared,
            handle: Some(handle),
        }
    }
}

impl Default for TimerScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for TimerScheduler {
    fn after(&self, delay: Duration, action: Deferred) {
        let mut queue = self.shared.queue.lock();
        let seq = queue.next_seq;
        queue.next_seq += 1;
        queue.entries.push(Entry {
            due: deadline(delay),
            seq,
            action,
        });
        self.shared.wake.notify_one();
    }
}

impl Drop for TimerScheduler {
    fn drop(&mut self) {
        self.shared.queue.lock().shutdown = true;
        self.shared.wake.notify_one();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                engine_debug!("timer worker exited by panic");
            }
        }
    }
}

fn run_worker(shared: &Shared) {
    let mut queue = shared.queue.lock();
    loop {
        let next_due = queue.entries.peek().map(|entry| entry.due);
        match next_due {
            Some(due) if queue.shutdown || due <= Instant::now() => {
                if let Some(entry) = queue.entries.pop() {
                    drop(queue);
                    run_isolated(entry.action, entry.seq);
                    queue = shared.queue.lock();
                }
            }
            Some(due) => {
                shared.wake.wait_until(&mut queue, due);
            }
            None if queue.shutdown => break,
            None => shared.wake.wait(&mut queue),
        }
    }
}

fn run_isolated(action: Deferred, seq: u64) {
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(action)) {
        engine_debug!("scheduled action {} panicked: {}", seq, panic_message(&*payload));
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic")
}
