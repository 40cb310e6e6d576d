//! TreeWalker - builds full tree in memory for JSON output

use std::path::Path;

use tracing::trace;

use crate::error::{Result, TreeError};

use super::config::WalkerConfig;
use super::node::TreeNode;
use super::utils::{canonical_root, list_entries};

/// Tree walker that builds the full tree in memory.
/// Required for JSON output serialization.
/// For console output, use StreamingWalker instead.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk the tree rooted at `root` and return it as a `TreeNode`.
    ///
    /// The root is canonicalized first; failure to resolve it is a
    /// `TreeError::PathResolution`. Any unreadable directory below it aborts
    /// the walk with `TreeError::DirectoryRead`.
    pub fn walk(&self, root: &Path) -> Result<TreeNode> {
        let (root, name) = canonical_root(root)?;
        let children = self.walk_children(&root)?;
        Ok(TreeNode::Dir {
            name,
            path: root,
            children,
        })
    }

    fn walk_children(&self, path: &Path) -> Result<Vec<TreeNode>> {
        trace!(path = %path.display(), "descending");
        let mut children = Vec::new();
        for entry in list_entries(path, &self.config)? {
            if entry.is_dir {
                let grandchildren = self.walk_children(&entry.path)?;
                children.push(TreeNode::Dir {
                    name: entry.name,
                    path: entry.path,
                    children: grandchildren,
                });
            } else {
                children.push(TreeNode::File {
                    name: entry.name,
                    path: entry.path,
                });
            }
        }
        Ok(children)
    }
}
