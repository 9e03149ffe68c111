//! Airdrop API access.
//!
//! # Responsibilities
//! - Define the `AirdropSource` seam used by the orchestrator
//! - Issue `GET {base_url}{wallet}` over HTTP
//! - Classify responses: records, throttle signal, or terminal error
//!
//! # Design Decisions
//! - Classification lives here; the orchestrator only matches on `RequestError`
//! - 429 Too Many Requests is the only throttle signal
//! - Timeouts are transport errors, and therefore terminal

pub mod http;

use std::future::Future;

use crate::error::RequestError;
use crate::wallet::{AirdropRecord, WalletAddress};

pub use http::HttpAirdropClient;

/// Something that can look up the airdrops a wallet is eligible for.
pub trait AirdropSource: Send + Sync {
    fn fetch(
        &self,
        wallet: &WalletAddress,
    ) -> impl Future<Output = Result<Vec<AirdropRecord>, RequestError>> + Send;
}
