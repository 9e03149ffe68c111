//! Metrics collection.
//!
//! # Metrics
//! - `airdrop_requests_total` (counter): API calls by outcome (ok, throttled, failed)
//! - `airdrop_throttled_total` (counter): throttle signals received
//! - `airdrop_wallets_total` (counter): wallets by terminal outcome (succeeded, failed, invalid)
//! - `airdrop_records_total` (counter): records appended to the result table

pub fn record_request(outcome: &'static str) {
    metrics::counter!("airdrop_requests_total", "outcome" => outcome).increment(1);
    if outcome == "throttled" {
        metrics::counter!("airdrop_throttled_total").increment(1);
    }
}

pub fn record_wallet(outcome: &'static str) {
    metrics::counter!("airdrop_wallets_total", "outcome" => outcome).increment(1);
}

pub fn record_records(count: usize) {
    metrics::counter!("airdrop_records_total").increment(count as u64);
}
