//! In-memory tree representation, serializable for JSON output

use std::path::PathBuf;

use serde::Serialize;

/// A node in the directory tree built by `TreeWalker`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    Dir {
        name: String,
        path: PathBuf,
        children: Vec<TreeNode>,
    },
    File {
        name: String,
        path: PathBuf,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::Dir { name, .. } => name,
            TreeNode::File { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }
}
