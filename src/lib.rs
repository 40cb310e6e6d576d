//! Sprig - a tree command with a configurable exclusion set

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use output::{OutputConfig, StreamingFormatter, TreeFormatter, print_json};
pub use tree::{
    DEFAULT_EXCLUDES, StreamingOutput, StreamingWalker, TreeNode, TreeWalker, WalkerConfig,
};
