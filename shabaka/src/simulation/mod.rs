pub mod engine;
pub mod runner;

pub use engine::LayoutEngine;
pub use runner::Simulation;
pub use runner::SimulationState;
