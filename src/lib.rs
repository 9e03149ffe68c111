//! Rate-limited airdrop eligibility checker library

pub mod aggregate;
pub mod batch;
pub mod client;
pub mod config;
pub mod error;
pub mod observability;
pub mod output;
pub mod resilience;
pub mod scheduler;
pub mod wallet;

pub use aggregate::ResultTable;
pub use batch::{BatchReport, BatchRunner};
pub use client::{AirdropSource, HttpAirdropClient};
pub use config::schema::CheckerConfig;
pub use resilience::retries::{RetryOrchestrator, WalletOutcome, WalletState};
pub use scheduler::RateLimitedScheduler;
pub use wallet::{AirdropRecord, WalletAddress};
