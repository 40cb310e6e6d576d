//! Tree formatting and display
//!
//! This module provides formatters for outputting tree structures:
//!
//! - `StreamingFormatter` - console output, printed as the walk progresses
//! - `TreeFormatter` - buffered formatter producing a `String`
//! - `print_json` - JSON output for a complete `TreeNode`

mod config;
mod json;
mod streaming;
mod tree;

// Re-export public types and functions
pub use config::OutputConfig;
pub use json::print_json;
pub use streaming::StreamingFormatter;
pub use tree::TreeFormatter;
