pub mod builder;

pub use builder::GraphBuilder;
pub use builder::build;
pub use builder::rebuild;
