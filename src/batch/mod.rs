//! Batch processing.
//!
//! # Data Flow
//! ```text
//! wallets.txt
//!     → input.rs (split lines)
//!     → runner.rs (validate → RetryOrchestrator → ResultTable)
//!     → output (delimited text, overwrite result.csv)
//! ```
//!
//! # Design Decisions
//! - An unreadable wallet list aborts before anything is written
//! - An empty wallet list writes nothing
//! - Failed wallets are reported, never fatal

pub mod input;
pub mod runner;

use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};

use crate::client::HttpAirdropClient;
use crate::config::CheckerConfig;
use crate::error::AppError;
use crate::output::{to_delimited_text, write_output};
use crate::resilience::retries::RetryOrchestrator;
use crate::scheduler::RateLimitedScheduler;

pub use input::read_wallet_list;
pub use runner::{BatchReport, BatchRunner};

/// Run a full batch against the configured API.
///
/// Returns `Ok(None)` when the wallet list is empty.
pub async fn run(config: &CheckerConfig) -> Result<Option<BatchReport>, AppError> {
    let lines = read_wallet_list(&config.files.input_path).await?;
    if lines.is_empty() {
        tracing::info!(path = %config.files.input_path.display(), "No wallets found");
        return Ok(None);
    }

    let client = HttpAirdropClient::new(&config.api)?;
    let scheduler = Arc::new(RateLimitedScheduler::new(config.scheduler.min_interval()));
    let orchestrator = RetryOrchestrator::new(scheduler, client, config.retry.throttle_delay());

    tracing::info!(
        wallets = lines.len(),
        min_interval_ms = config.scheduler.min_interval_ms,
        throttle_delay_ms = config.retry.throttle_delay_ms,
        "Starting batch"
    );

    let report = BatchRunner::new(orchestrator)
        .with_progress(progress_bar(lines.len()))
        .run(&lines)
        .await;

    let text = to_delimited_text(report.table.rows());
    write_output(&config.files.output_path, &text).await?;

    Ok(Some(report))
}

fn progress_bar(total: usize) -> ProgressBar {
    let progress = ProgressBar::new(total as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    progress.set_style(style.progress_chars("█▓▒░"));
    progress
}
