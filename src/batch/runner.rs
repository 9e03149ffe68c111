//! Batch driver: validate, orchestrate, aggregate.

use indicatif::ProgressBar;

use crate::aggregate::ResultTable;
use crate::client::AirdropSource;
use crate::error::TerminalRequestError;
use crate::observability::metrics;
use crate::resilience::retries::{RetryOrchestrator, WalletOutcome};
use crate::wallet::WalletAddress;

/// Everything a finished batch produced.
#[derive(Debug)]
pub struct BatchReport {
    pub table: ResultTable,
    pub succeeded: Vec<WalletAddress>,
    pub failed: Vec<(WalletAddress, TerminalRequestError)>,
    /// Input lines that were not valid addresses, blank lines included.
    pub invalid: Vec<String>,
}

impl BatchReport {
    fn new() -> Self {
        Self {
            table: ResultTable::new(),
            succeeded: Vec::new(),
            failed: Vec::new(),
            invalid: Vec::new(),
        }
    }
}

pub struct BatchRunner<S> {
    orchestrator: RetryOrchestrator<S>,
    progress: ProgressBar,
}

impl<S: AirdropSource> BatchRunner<S> {
    /// Runner without a visible progress bar.
    pub fn new(orchestrator: RetryOrchestrator<S>) -> Self {
        Self {
            orchestrator,
            progress: ProgressBar::hidden(),
        }
    }

    /// Advance `progress` once per input line; it is finished when the run ends.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Process every line in order. Per-wallet failures never stop the batch.
    pub async fn run(&self, lines: &[String]) -> BatchReport {
        let total = lines.len();
        let mut report = BatchReport::new();

        for (index, line) in lines.iter().enumerate() {
            let processed = index + 1;
            match WalletAddress::parse(line) {
                Ok(wallet) => self.process_wallet(wallet, processed, total, &mut report).await,
                Err(e) => {
                    tracing::warn!(line = processed, processed, total, "{}", e);
                    metrics::record_wallet("invalid");
                    report.invalid.push(e.input);
                }
            }
            self.progress.inc(1);
        }
        self.progress.finish();

        tracing::info!(
            succeeded = report.succeeded.len(),
            failed = report.failed.len(),
            invalid = report.invalid.len(),
            records = report.table.record_count(),
            "Batch complete"
        );
        report
    }

    async fn process_wallet(
        &self,
        wallet: WalletAddress,
        processed: usize,
        total: usize,
        report: &mut BatchReport,
    ) {
        match self.orchestrator.process(&wallet).await {
            WalletOutcome::Succeeded { records, attempts } => {
                tracing::info!(
                    wallet = %wallet,
                    records = records.len(),
                    attempts,
                    processed,
                    total,
                    "Wallet processed"
                );
                metrics::record_wallet("succeeded");
                metrics::record_records(records.len());
                report.table.append(&records);
                report.succeeded.push(wallet);
            }
            WalletOutcome::Failed { error, attempts } => {
                tracing::info!(
                    wallet = %wallet,
                    attempts,
                    processed,
                    total,
                    "Wallet failed"
                );
                metrics::record_wallet("failed");
                report.failed.push((wallet, error));
            }
        }
    }
}
