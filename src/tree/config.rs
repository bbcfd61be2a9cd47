//! Configuration for tree rendering

/// Rendering flags, set once from the command line and read-only afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    /// List the files in each folder, not just the folder skeleton.
    pub show_files: bool,
    /// Draw ASCII connectors instead of Unicode box-drawing glyphs.
    pub use_ascii: bool,
}
