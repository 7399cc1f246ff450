pub mod errors;
pub mod extractor;
pub mod models;
pub mod run_tool;
pub mod schedule;
pub mod selectors;
pub mod transport;
