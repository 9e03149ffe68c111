//! HTTP implementation of `AirdropSource`.

use reqwest::{Client, StatusCode};

use crate::client::AirdropSource;
use crate::config::ApiConfig;
use crate::error::{RequestError, TerminalRequestError};
use crate::wallet::{AirdropRecord, WalletAddress};

pub struct HttpAirdropClient {
    client: Client,
    base_url: String,
}

impl HttpAirdropClient {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("airdrop-checker/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn url_for(&self, wallet: &WalletAddress) -> String {
        format!("{}{}", self.base_url, wallet)
    }
}

impl AirdropSource for HttpAirdropClient {
    async fn fetch(&self, wallet: &WalletAddress) -> Result<Vec<AirdropRecord>, RequestError> {
        let url = self.url_for(wallet);
        tracing::debug!(wallet = %wallet, url = %url, "Requesting airdrops");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(TerminalRequestError::from)?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(RequestError::Throttled);
        }
        if !status.is_success() {
            return Err(TerminalRequestError::Status { status }.into());
        }

        let body = response.bytes().await.map_err(TerminalRequestError::from)?;
        let records = AirdropRecord::parse_response(&body).map_err(TerminalRequestError::from)?;

        tracing::debug!(wallet = %wallet, records = records.len(), "Airdrops received");
        Ok(records)
    }
}
