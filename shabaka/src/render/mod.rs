pub mod context;
pub mod frame;
pub mod node;

pub use context::DrawingContext;
pub use context::TextBaseline;
pub use frame::FrameStats;
pub use frame::paint_frame;
pub use node::NodePaint;
pub use node::effective_scale;
pub use node::paint_node;
