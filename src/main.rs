//! Airdrop eligibility checker.
//!
//! Reads wallet addresses, asks the airdrop API about each one at a pace the
//! API tolerates, and writes every eligible airdrop to a delimited text file.
//!
//! ```text
//!  wallets.txt ──▶ validate ──▶ RetryOrchestrator ──▶ RateLimitedScheduler ──▶ HTTP API
//!                                   │   ▲  429: wait, resubmit                      │
//!                                   │   └──────────────────────────────────────────┘
//!                                   ▼
//!                              ResultTable ──▶ result.csv + console summary
//! ```

use std::path::PathBuf;

use clap::Parser;

use airdrop_checker::batch;
use airdrop_checker::config::loader::load_config;
use airdrop_checker::config::CheckerConfig;
use airdrop_checker::observability::logging;
use airdrop_checker::output::render_summary;

#[derive(Parser)]
#[command(name = "airdrop-checker")]
#[command(about = "Check airdrop eligibility for a list of wallets", long_about = None)]
struct Cli {
    /// Optional TOML config; built-in defaults are used without it
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => CheckerConfig::default(),
    };

    logging::init(&config.observability.log_level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        input = %config.files.input_path.display(),
        output = %config.files.output_path.display(),
        api = %config.api.base_url,
        "airdrop-checker starting"
    );

    let report = match batch::run(&config).await {
        Ok(Some(report)) => report,
        Ok(None) => return Ok(()),
        Err(e) => {
            tracing::error!(error = %e, "Batch aborted");
            return Err(e.into());
        }
    };

    print!("{}", render_summary(&report.table));
    Ok(())
}
