//! Result aggregation.

use crate::wallet::AirdropRecord;

pub const HEADER: [&str; 4] = ["Wallet", "Token", "Amount", "ClaimURL"];

/// Append-only table of result rows. Row 0 is always the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    rows: Vec<Vec<String>>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self {
            rows: vec![HEADER.iter().map(|h| h.to_string()).collect()],
        }
    }

    /// Append one row per record, keeping the order the API returned them in.
    pub fn append(&mut self, records: &[AirdropRecord]) {
        self.rows.extend(records.iter().map(AirdropRecord::to_row));
    }

    /// Header plus data rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Data rows only.
    pub fn records(&self) -> &[Vec<String>] {
        &self.rows[1..]
    }

    pub fn record_count(&self) -> usize {
        self.rows.len() - 1
    }
}

impl Default for ResultTable {
    fn default() -> Self {
        Self::new()
    }
}
