pub mod covalent;
pub mod file;

use async_trait::async_trait;

pub use covalent::CovalentClient;
pub use file::JsonFileSource;

use crate::Result;
use crate::model::TransactionRecord;

/// Where a page of transactions for one address comes from.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn fetch_transactions(
        &self,
        address: &str,
    ) -> Result<Vec<TransactionRecord>>;
}
