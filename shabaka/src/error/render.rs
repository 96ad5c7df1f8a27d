use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Failed to load icon {src}: {reason}")]
    IconLoadFailure { src: String, reason: String },
    #[error("Failed to draw icon {src}: {reason}")]
    IconDrawFailure { src: String, reason: String },
}
