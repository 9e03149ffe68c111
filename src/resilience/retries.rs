//! Retry orchestration.
//!
//! # States
//! - Pending: waiting to be handed to the scheduler
//! - InFlight: the API call is executing
//! - Succeeded: records received (possibly none)
//! - Failed: terminal error, not retried
//!
//! # State Transitions
//! ```text
//! Pending → InFlight: submitted to the scheduler
//! InFlight → Succeeded: success status, body decoded
//! InFlight → Pending: throttled, after `throttle_delay`
//! InFlight → Failed: other status, transport or decode error
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::client::AirdropSource;
use crate::error::{RequestError, TerminalRequestError};
use crate::observability::metrics;
use crate::scheduler::RateLimitedScheduler;
use crate::wallet::{AirdropRecord, WalletAddress};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletState {
    Pending,
    InFlight,
    Succeeded,
    Failed,
}

impl WalletState {
    pub fn is_terminal(self) -> bool {
        matches!(self, WalletState::Succeeded | WalletState::Failed)
    }
}

impl fmt::Display for WalletState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WalletState::Pending => "pending",
            WalletState::InFlight => "in_flight",
            WalletState::Succeeded => "succeeded",
            WalletState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Emitted on every state change when a subscriber is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateChange {
    pub wallet: WalletAddress,
    pub state: WalletState,
    /// 1-based number of the API call this change belongs to.
    pub attempt: u64,
}

/// Terminal result for one wallet.
#[derive(Debug)]
pub enum WalletOutcome {
    Succeeded {
        records: Vec<AirdropRecord>,
        attempts: u64,
    },
    Failed {
        error: TerminalRequestError,
        attempts: u64,
    },
}

impl WalletOutcome {
    pub fn state(&self) -> WalletState {
        match self {
            WalletOutcome::Succeeded { .. } => WalletState::Succeeded,
            WalletOutcome::Failed { .. } => WalletState::Failed,
        }
    }

    pub fn attempts(&self) -> u64 {
        match self {
            WalletOutcome::Succeeded { attempts, .. } | WalletOutcome::Failed { attempts, .. } => {
                *attempts
            }
        }
    }
}

/// Drives each wallet through the shared scheduler until a terminal outcome.
pub struct RetryOrchestrator<S> {
    scheduler: Arc<RateLimitedScheduler>,
    source: S,
    throttle_delay: Duration,
    transitions: Option<mpsc::UnboundedSender<StateChange>>,
}

impl<S: AirdropSource> RetryOrchestrator<S> {
    pub fn new(scheduler: Arc<RateLimitedScheduler>, source: S, throttle_delay: Duration) -> Self {
        Self {
            scheduler,
            source,
            throttle_delay,
            transitions: None,
        }
    }

    /// Receive every state change from now on.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<StateChange> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.transitions = Some(tx);
        rx
    }

    /// Process one wallet. Does not return while the API keeps throttling.
    pub async fn process(&self, wallet: &WalletAddress) -> WalletOutcome {
        let mut attempt: u64 = 0;
        self.transition(wallet, WalletState::Pending, attempt + 1);

        loop {
            attempt += 1;
            self.transition(wallet, WalletState::InFlight, attempt);

            let result = self
                .scheduler
                .schedule(wallet.as_str(), || self.source.fetch(wallet))
                .await;

            match result {
                Ok(records) => {
                    metrics::record_request("ok");
                    self.transition(wallet, WalletState::Succeeded, attempt);
                    return WalletOutcome::Succeeded {
                        records,
                        attempts: attempt,
                    };
                }
                Err(RequestError::Throttled) => {
                    metrics::record_request("throttled");
                    tracing::warn!(
                        wallet = %wallet,
                        attempt,
                        delay_ms = self.throttle_delay.as_millis() as u64,
                        "Failed due to rate limiting, will retry"
                    );
                    tokio::time::sleep(self.throttle_delay).await;
                    self.transition(wallet, WalletState::Pending, attempt + 1);
                }
                Err(RequestError::Terminal(error)) => {
                    metrics::record_request("failed");
                    tracing::error!(
                        wallet = %wallet,
                        attempt,
                        error = %error,
                        "Failed to fetch or parse data for wallet"
                    );
                    self.transition(wallet, WalletState::Failed, attempt);
                    return WalletOutcome::Failed {
                        error,
                        attempts: attempt,
                    };
                }
            }
        }
    }

    fn transition(&self, wallet: &WalletAddress, state: WalletState, attempt: u64) {
        tracing::trace!(wallet = %wallet, state = %state, attempt, "Wallet state change");
        if let Some(tx) = &self.transitions {
            // A dropped receiver only means nobody is watching.
            let _ = tx.send(StateChange {
                wallet: wallet.clone(),
                state,
                attempt,
            });
        }
    }
}
