//! Tree drawing
//!
//! - `glyphs` - Unicode and ASCII connector glyph sets
//! - `tree` - the recursive renderer over an explicit indentation context

mod glyphs;
mod tree;

pub use glyphs::{ASCII, GlyphSet, UNICODE};
pub use tree::{EntryKind, TreeRenderer};
