use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::TransactionSource;
use super::covalent::CovalentResponse;
use crate::Context;
use crate::Result;
use crate::model::TransactionRecord;

/// Reads a saved Covalent `transactions_v2` response, or a bare JSON array of
/// items, from disk. Lets the graph be rebuilt offline from a captured page.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn parse(body: &str) -> Result<Vec<TransactionRecord>> {
        if body.trim_start().starts_with('[') {
            return Ok(serde_json::from_str(body)?);
        }
        let response: CovalentResponse = serde_json::from_str(body)?;
        Ok(response.into_items()?)
    }
}

#[async_trait]
impl TransactionSource for JsonFileSource {
    async fn fetch_transactions(
        &self,
        address: &str,
    ) -> Result<Vec<TransactionRecord>> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read transactions from {}", self.path.display()))?;
        let items = Self::parse(&body)?;
        debug!("file_source::{}::address::{}::items::{}", self.path.display(), address, items.len());
        Ok(items)
    }
}
