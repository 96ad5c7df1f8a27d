use async_trait::async_trait;
use mockall::mock;

use crate::Result;
use crate::err_with_loc;
use crate::model::TransactionRecord;
use crate::source::TransactionSource;

// Mock for the transaction source
mock! {
    pub Source {}

    #[async_trait]
    impl TransactionSource for Source {
        async fn fetch_transactions(&self, address: &str) -> Result<Vec<TransactionRecord>>;
    }
}

/// Helper to create a mock source answering every address with `records`
pub fn create_mock_source(records: Vec<TransactionRecord>) -> MockSource {
    let mut mock = MockSource::new();

    mock.expect_fetch_transactions()
        .returning(move |_| Ok(records.clone()));

    mock
}

/// Create a mock source whose fetch always fails
pub fn create_failing_mock_source() -> MockSource {
    let mut mock = MockSource::new();

    mock.expect_fetch_transactions()
        .returning(|_| Err(err_with_loc!("Mock upstream failure")));

    mock
}
