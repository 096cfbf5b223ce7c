pub mod chunker;
pub mod document;
pub mod store;
