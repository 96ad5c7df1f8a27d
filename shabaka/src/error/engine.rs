use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to serialize graph: {0}")]
    SerializeGraphError(#[from] serde_json::Error),
    #[error("Failed to setup tracing: {0}")]
    SetupTracingError(String),
}
