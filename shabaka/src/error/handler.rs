use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    #[error("Search address is empty")]
    EmptyAddress,
    #[error("Search for {0} was superseded by a newer search")]
    Superseded(String),
}
