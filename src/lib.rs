pub mod cli;
pub mod config;
pub mod display;
pub mod display_summary;
pub mod image;
pub mod integrity;
pub mod output;
pub mod pipeline;
pub mod plate;
pub mod types;

// Re-export commonly used functions
pub use display_summary::{print_outcome, print_summary};
