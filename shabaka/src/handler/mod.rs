pub mod search;

pub use search::SearchHandler;
