pub mod explorer;

pub use explorer::ConfigOrigin;
pub use explorer::Explorer;
pub use explorer::ExplorerArgs;
