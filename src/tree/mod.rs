//! Directory enumeration
//!
//! This module provides the filesystem side of the tree walk:
//!
//! - `RenderConfig`: the two process-wide rendering flags
//! - `list_children`: one directory level, split into folders and files
//! - `has_subdirectories`: cheap probe used for file connector glyphs

mod config;
mod walker;

pub use config::RenderConfig;
pub use walker::{
    DirectoryEntry, DirectoryListing, SPACER_NAME, has_subdirectories, list_children,
};
