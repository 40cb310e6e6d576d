//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Append the trailing "N directories, M files" report. Off by default
    /// so the rendition is exactly one line per entry.
    pub show_report: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            show_report: false,
        }
    }
}
