//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Wallet lookup:
//!     → retries.rs (per-wallet state machine)
//!     → scheduler (pacing, one call in flight)
//!     → client (classify response)
//!     → on throttle: fixed delay, back to Pending
//!     → on anything else: Succeeded or Failed
//! ```
//!
//! # Design Decisions
//! - Only the throttle signal is retried; every other failure is terminal
//! - No attempt cap and no backoff growth on throttling
//! - State changes are observable through an optional channel

pub mod retries;
