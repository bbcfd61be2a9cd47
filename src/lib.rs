//! Bough - a Windows-style `tree` command for any console
//!
//! Renders a directory hierarchy as a connector-drawn tree, optionally
//! listing the files in each folder, with Unicode box-drawing glyphs or an
//! ASCII fallback.

pub mod banner;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use banner::VolumeInfo;
pub use output::{EntryKind, GlyphSet, TreeRenderer};
pub use tree::{
    DirectoryEntry, DirectoryListing, RenderConfig, has_subdirectories, list_children,
};
