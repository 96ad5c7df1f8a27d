pub mod address;
pub mod graph;
pub mod position;
pub mod transaction;

pub use address::abbreviate_address;
pub use graph::GraphData;
pub use graph::Link;
pub use graph::Node;
pub use graph::TransactionGraph;
pub use position::NodePosition;
pub use transaction::TransactionRecord;
