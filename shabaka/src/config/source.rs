use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::constants::COVALENT_BASE_URL;
use crate::constants::COVALENT_CHAIN_ID;
use crate::constants::COVALENT_QUOTE_CURRENCY;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub base_url: String,
    pub chain_id: u64,
    pub api_key: Option<String>,
    pub quote_currency: String,
    pub timeout_ms: u64,
    pub max_retries: usize,
    pub base_retry_delay_ms: u64,
    pub max_retry_delay_ms: u64,
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: COVALENT_BASE_URL.to_string(),
            chain_id: COVALENT_CHAIN_ID,
            api_key: None,
            quote_currency: COVALENT_QUOTE_CURRENCY.to_string(),
            timeout_ms: 10_000,
            max_retries: 3,
            base_retry_delay_ms: 500,
            max_retry_delay_ms: 5_000,
        }
    }
}
