//! Airdrop records as returned by the API.

use serde::Deserialize;
use serde_json::Value;

/// Token block of an API element.
#[derive(Debug, Clone, Deserialize)]
struct ApiToken {
    name: String,
    symbol: String,
    #[serde(rename = "claimUrl", default)]
    claim_url: Option<String>,
}

/// One element of the API's JSON array.
#[derive(Debug, Clone, Deserialize)]
struct ApiAirdrop {
    #[serde(rename = "walletAddress")]
    wallet_address: String,
    #[serde(rename = "Token")]
    token: ApiToken,
    amount: Value,
}

/// One eligible airdrop for a wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirdropRecord {
    pub wallet: String,
    pub token_name: String,
    pub token_symbol: String,
    pub amount: String,
    pub claim_url: String,
}

impl AirdropRecord {
    /// Decode a successful response body. An empty array yields no records.
    pub fn parse_response(body: &[u8]) -> Result<Vec<Self>, serde_json::Error> {
        let items: Vec<ApiAirdrop> = serde_json::from_slice(body)?;
        Ok(items.into_iter().map(Self::from_api).collect())
    }

    /// Row layout: wallet, "name (symbol)", amount, claim URL.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.wallet.clone(),
            format!("{} ({})", self.token_name, self.token_symbol),
            self.amount.clone(),
            self.claim_url.clone(),
        ]
    }

    fn from_api(item: ApiAirdrop) -> Self {
        Self {
            wallet: item.wallet_address,
            token_name: item.token.name,
            token_symbol: item.token.symbol,
            amount: amount_text(&item.amount),
            claim_url: item.token.claim_url.unwrap_or_default(),
        }
    }
}

// Strings pass through unquoted; numbers and anything else use their JSON text.
fn amount_text(amount: &Value) -> String {
    match amount {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_elements_in_order() {
        let body = br#"[
            {"walletAddress":"0xaa","Token":{"name":"Arbitrum","symbol":"ARB","claimUrl":"https://arb.io"},"amount":"1250"},
            {"walletAddress":"0xaa","Token":{"name":"Optimism","symbol":"OP","claimUrl":"https://op.io"},"amount":42.5}
        ]"#;

        let records = AirdropRecord::parse_response(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].token_symbol, "ARB");
        assert_eq!(records[0].amount, "1250");
        assert_eq!(records[1].token_symbol, "OP");
        assert_eq!(records[1].amount, "42.5");
    }

    #[test]
    fn test_empty_array_is_success() {
        assert!(AirdropRecord::parse_response(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_non_array_body_is_error() {
        assert!(AirdropRecord::parse_response(b"{\"error\":\"nope\"}").is_err());
        assert!(AirdropRecord::parse_response(b"<html>").is_err());
    }

    #[test]
    fn test_row_layout() {
        let body = br#"[{"walletAddress":"0xbb","Token":{"name":"Uniswap","symbol":"UNI","claimUrl":null},"amount":400}]"#;
        let record = &AirdropRecord::parse_response(body).unwrap()[0];

        assert_eq!(record.to_row(), vec!["0xbb", "Uniswap (UNI)", "400", ""]);
    }
}
