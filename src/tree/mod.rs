//! Directory tree walking logic
//!
//! This module provides tree walking capabilities for displaying directory
//! structures. It supports two main modes:
//!
//! - `TreeWalker`: Builds full tree in memory, required for JSON output
//! - `StreamingWalker`: Streams output directly, uses O(depth) memory for console output
//!
//! Both walk depth-first in lexicographic order, drop excluded names at
//! every level, and abort on the first unreadable directory.

mod config;
mod node;
mod streaming;
mod utils;
mod walker;

// Re-export public types
pub use config::{DEFAULT_EXCLUDES, WalkerConfig};
pub use node::TreeNode;
pub use streaming::{StreamingOutput, StreamingWalker};
pub use utils::{glob_match, is_excluded};
pub use walker::TreeWalker;
