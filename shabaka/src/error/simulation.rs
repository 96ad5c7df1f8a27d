use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Node {0} is not part of the running simulation")]
    UnknownNode(usize),
}
