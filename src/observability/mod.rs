//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! scheduler, orchestrator, batch runner produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (request/throttle/wallet counters)
//! ```
//!
//! # Design Decisions
//! - Structured fields (`wallet = %addr`) rather than formatted strings
//! - RUST_LOG overrides the configured level
//! - Metrics go through the `metrics` facade; no exporter is installed here

pub mod logging;
pub mod metrics;
