//! Scheduler tickets.

use tokio::time::Instant;

/// One queued call. Lives from submission until its task settles.
#[derive(Debug, Clone)]
pub struct SchedulerTicket {
    /// Submission sequence number, unique per scheduler.
    pub seq: u64,
    /// Identity of the work, e.g. the wallet address.
    pub key: String,
    pub submitted_at: Instant,
}

impl SchedulerTicket {
    pub fn new(seq: u64, key: impl Into<String>) -> Self {
        Self {
            seq,
            key: key.into(),
            submitted_at: Instant::now(),
        }
    }
}
