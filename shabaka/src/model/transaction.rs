use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// One transaction as returned by the address-indexing API.
///
/// Only the two address fields feed the graph. Both are optional at decode
/// time so that a malformed record reaches the builder, which rejects a
/// missing sender and tolerates a missing receiver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(default)]
    pub from_address: Option<String>,
    #[serde(default)]
    pub to_address: Option<String>,
    #[serde(default)]
    pub tx_hash: Option<String>,
    #[serde(default)]
    pub block_signed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub successful: Option<bool>,
}

impl TransactionRecord {
    pub fn new(
        from_address: impl Into<String>,
        to_address: impl Into<String>,
    ) -> Self {
        Self {
            from_address: Some(from_address.into()),
            to_address: Some(to_address.into()),
            ..Default::default()
        }
    }

    /// Sender address, `None` when absent or blank.
    pub fn sender(&self) -> Option<&str> {
        non_blank(self.from_address.as_deref())
    }

    /// Receiver address, `None` for contract creations and blank values.
    pub fn receiver(&self) -> Option<&str> {
        non_blank(self.to_address.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
