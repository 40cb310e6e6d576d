//! StreamingWalker - renders while walking, without building a tree in memory

use std::path::Path;

use tracing::trace;

use crate::error::Result;

use super::config::WalkerConfig;
use super::utils::{canonical_root, list_entries};

/// Callback for streaming output - receives node information for display.
pub trait StreamingOutput {
    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
        is_root: bool,
    ) -> std::io::Result<()>;

    fn finish(&mut self, dir_count: usize, file_count: usize) -> std::io::Result<()>;
}

/// Streaming tree walker that emits entries as it encounters them.
/// Uses O(depth) memory instead of O(files) for the tree structure; each
/// recursive call fully completes, output included, before the caller moves
/// on to its next sibling.
pub struct StreamingWalker {
    config: WalkerConfig,
}

impl StreamingWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk the tree rooted at `root`, emitting one line per entry in
    /// depth-first lexicographic order. The root's base name is emitted
    /// first, unprefixed.
    pub fn walk_streaming<O: StreamingOutput>(&self, root: &Path, output: &mut O) -> Result<()> {
        let (root, name) = canonical_root(root)?;
        output.output_node(&name, true, true, "", true)?;
        let (dir_count, file_count) = self.walk_children(&root, "", output)?;
        output.finish(dir_count, file_count)?;
        Ok(())
    }

    fn walk_children<O: StreamingOutput>(
        &self,
        path: &Path,
        prefix: &str,
        output: &mut O,
    ) -> Result<(usize, usize)> {
        trace!(path = %path.display(), "descending");
        let entries = list_entries(path, &self.config)?;
        let total = entries.len();

        let mut dir_count = 0usize;
        let mut file_count = 0usize;

        for (i, entry) in entries.into_iter().enumerate() {
            let is_last = i + 1 == total;
            output.output_node(&entry.name, entry.is_dir, is_last, prefix, false)?;

            if entry.is_dir {
                dir_count += 1;
                // The continuation prefix this entry hands its children
                let child_prefix = if is_last {
                    format!("{prefix}    ")
                } else {
                    format!("{prefix}│   ")
                };
                let (d, f) = self.walk_children(&entry.path, &child_prefix, output)?;
                dir_count += d;
                file_count += f;
            } else {
                file_count += 1;
            }
        }

        Ok((dir_count, file_count))
    }
}
