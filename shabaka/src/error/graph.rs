use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Invalid transaction record at index {index}: missing from_address")]
    InvalidRecord { index: usize },
}
