pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod graph;
pub mod handler;
pub mod model;
pub mod render;
pub mod simulation;
pub mod source;
pub mod tracing;
pub mod utils;

pub use error::*;

pub use graph::GraphBuilder;
pub use model::TransactionGraph;
pub use model::TransactionRecord;
