//! Configuration types for tree walkers

/// Folder and file names excluded out of the box: version control,
/// dependency caches, and environment files.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    ".next",
    "node_modules",
    ".env",
    ".env.local",
    ".git",
    "gitignore",
];

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Literal base names to exclude. Compared against each entry's file
    /// name at every directory level; a matching directory is skipped
    /// entirely, its contents never enumerated.
    pub exclude_names: Vec<String>,
    /// Additional exclusions from the command line. Literal names or glob
    /// patterns, matched against base names only.
    pub ignore_patterns: Vec<String>,
}

impl WalkerConfig {
    /// Config with an empty exclusion set.
    pub fn empty() -> Self {
        Self {
            exclude_names: Vec::new(),
            ignore_patterns: Vec::new(),
        }
    }

    /// Add one literal name to the exclusion set.
    pub fn with_exclude(mut self, name: impl Into<String>) -> Self {
        self.exclude_names.push(name.into());
        self
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            exclude_names: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            ignore_patterns: Vec::new(),
        }
    }
}
