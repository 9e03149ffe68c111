//! Rate-limited task scheduler.
//!
//! # Responsibilities
//! - Run at most one task at a time
//! - Keep at least `min_interval` between the start of any two tasks
//! - Start tasks in submission order
//!
//! # Design Decisions
//! - One lane shared by every key; spacing is global, not per wallet
//! - The lane is a `tokio::sync::Mutex`, whose FIFO wakeup gives submission ordering
//! - Task output is returned untouched; throttling is the caller's business
//!
//! ```text
//! schedule(key, task)
//!     → ticket issued (seq, key)
//!     → wait for lane (FIFO)
//!     → wait until last_start + min_interval
//!     → record start, run task, release lane
//! ```

pub mod ticket;

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{self, Instant};

pub use ticket::SchedulerTicket;

struct Lane {
    last_start: Option<Instant>,
    executed: u64,
}

/// Serializes tasks with a fixed minimum start-to-start spacing.
pub struct RateLimitedScheduler {
    min_interval: Duration,
    lane: Mutex<Lane>,
    next_seq: AtomicU64,
}

impl RateLimitedScheduler {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            lane: Mutex::new(Lane {
                last_start: None,
                executed: 0,
            }),
            next_seq: AtomicU64::new(0),
        }
    }

    /// Number of tasks that have started so far.
    pub async fn executed(&self) -> u64 {
        self.lane.lock().await.executed
    }

    /// Run `task` once its turn comes up and return whatever it produced.
    ///
    /// The lane stays held until the task's future completes, so the next
    /// ticket cannot start while this one is in flight.
    pub async fn schedule<F, Fut, T>(&self, key: &str, task: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let ticket = SchedulerTicket::new(self.next_seq.fetch_add(1, Ordering::Relaxed), key);
        tracing::trace!(seq = ticket.seq, key = %ticket.key, "Ticket queued");

        let mut lane = self.lane.lock().await;

        if let Some(last_start) = lane.last_start {
            let ready_at = last_start + self.min_interval;
            if ready_at > Instant::now() {
                time::sleep_until(ready_at).await;
            }
        }

        lane.last_start = Some(Instant::now());
        lane.executed += 1;

        tracing::debug!(
            seq = ticket.seq,
            key = %ticket.key,
            waited_ms = ticket.submitted_at.elapsed().as_millis() as u64,
            "Executing scheduled task"
        );

        task().await
    }
}
