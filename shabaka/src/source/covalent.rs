use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tokio_retry::RetryIf;
use tracing::debug;
use tracing::warn;
use url::Url;

use super::TransactionSource;
use crate::Result;
use crate::config::SourceConfig;
use crate::error::SourceError;
use crate::model::TransactionRecord;
use crate::utils::calculate_backoff_with_jitter;

#[derive(Debug, Deserialize)]
pub(crate) struct CovalentResponse {
    pub data: Option<CovalentData>,
    #[serde(default)]
    pub error: bool,
    pub error_message: Option<String>,
    pub error_code: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CovalentData {
    #[serde(default)]
    pub items: Vec<TransactionRecord>,
}

impl CovalentResponse {
    pub(crate) fn into_items(self) -> std::result::Result<Vec<TransactionRecord>, SourceError> {
        if self.error {
            return Err(SourceError::ApiError {
                code: self.error_code,
                message: self.error_message.unwrap_or_else(|| "unknown error".to_string()),
            });
        }
        self.data.map(|data| data.items).ok_or(SourceError::MissingData)
    }
}

/// Client for Covalent's `transactions_v2` endpoint, one page per address.
pub struct CovalentClient {
    http_client: Client,
    config: Arc<SourceConfig>,
}

impl CovalentClient {
    pub fn new(config: SourceConfig) -> Result<Self> {
        let http_client = Client::builder().timeout(config.timeout()).build().map_err(SourceError::from)?;
        Ok(Self {
            http_client,
            config: Arc::new(config),
        })
    }

    pub fn transactions_url(
        &self,
        address: &str,
    ) -> std::result::Result<Url, SourceError> {
        let api_key = self.config.api_key.as_deref().ok_or(SourceError::MissingApiKey)?;
        let chain_id = self.config.chain_id.to_string();

        let mut url = Url::parse(&self.config.base_url)?;
        url.path_segments_mut()
            .map_err(|_| SourceError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(&["v1", chain_id.as_str(), "address", address, "transactions_v2", ""]);
        url.query_pairs_mut()
            .append_pair("quote-currency", &self.config.quote_currency)
            .append_pair("format", "JSON")
            .append_pair("block-signed-at-asc", "false")
            .append_pair("no-logs", "false")
            .append_pair("key", api_key);

        Ok(url)
    }

    async fn fetch_page(
        &self,
        url: &Url,
    ) -> std::result::Result<Vec<TransactionRecord>, SourceError> {
        let response = self.http_client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read response text>".to_string());
            return Err(SourceError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: CovalentResponse = response.json().await?;
        body.into_items()
    }
}

fn should_retry(err: &SourceError) -> bool {
    match err {
        SourceError::RequestError(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.as_u16() == 429 || s.is_server_error())
        },
        SourceError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
        _ => false,
    }
}

#[async_trait]
impl TransactionSource for CovalentClient {
    async fn fetch_transactions(
        &self,
        address: &str,
    ) -> Result<Vec<TransactionRecord>> {
        let url = self.transactions_url(address)?;
        let delays = (0..self.config.max_retries).map(|attempt| {
            calculate_backoff_with_jitter(attempt, self.config.base_retry_delay_ms, self.config.max_retry_delay_ms)
        });

        let items = RetryIf::spawn(
            delays,
            || self.fetch_page(&url),
            |err: &SourceError| {
                let retry = should_retry(err);
                if retry {
                    warn!("covalent::fetch_transactions::{}::retrying::{}", address, err);
                }
                retry
            },
        )
        .await?;

        debug!("covalent::fetch_transactions::{}::items::{}", address, items.len());
        Ok(items)
    }
}
