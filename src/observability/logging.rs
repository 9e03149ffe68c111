//! Structured logging.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies to this
/// crate and `warn` to everything else.
pub fn init(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directives(log_level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn default_directives(log_level: &str) -> String {
    format!("warn,airdrop_checker={}", log_level.to_ascii_lowercase())
}
