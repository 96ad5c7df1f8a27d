pub mod config;
pub mod engine;
pub mod graph;
pub mod handler;
pub mod render;
pub mod simulation;
pub mod source;

pub use anyhow::Context;
pub use anyhow::Error;
pub use anyhow::Result;
pub use anyhow::anyhow;
pub use config::ConfigError;
pub use engine::EngineError;
pub use graph::GraphError;
pub use handler::HandlerError;
pub use render::RenderError;
pub use simulation::SimulationError;
pub use source::SourceError;

// For consistent error handling with location info
#[macro_export]
macro_rules! err_with_loc {
    ($err:expr) => {
        anyhow::anyhow!($err).context(format!("at {}:{}", file!(), line!()))
    };
}
