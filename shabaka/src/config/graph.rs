use serde::Deserialize;
use serde::Serialize;

use crate::constants::DEFAULT_TRANSACTION_LIMIT;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub transaction_limit: usize,
    pub annotations: Vec<AddressAnnotation>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            transaction_limit: DEFAULT_TRANSACTION_LIMIT,
            annotations: vec![],
        }
    }
}

/// Styling attached to a known address (exchange hot wallet, bridge, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressAnnotation {
    pub address: String,
    pub color: Option<String>,
    pub icon: Option<String>,
}
