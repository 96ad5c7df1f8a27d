use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("[Covalent] Request failed: {0}")]
    RequestError(reqwest::Error),
    #[error("[Covalent] Unexpected HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("[Covalent] API error {code:?}: {message}")]
    ApiError { code: Option<i64>, message: String },
    #[error("[Covalent] Response carried no data")]
    MissingData,
    #[error("[Covalent] API key is not configured")]
    MissingApiKey,
    #[error("[Covalent] Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

// The request URL carries the API key in its query, so it never reaches an error
impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::RequestError(err.without_url())
    }
}
