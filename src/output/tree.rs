//! The recursive tree renderer
//!
//! Walks depth-first in pre-order, writing one line per entry. Indentation
//! is carried as an explicit per-level context (one flag per ancestor:
//! does a sibling section still follow at that column?) rather than by
//! re-scanning previously printed text. Recursion depth tracks filesystem
//! depth and is bounded only by the host stack.

use std::io::{self, Write};
use std::path::Path;

use crate::tree::{DirectoryEntry, RenderConfig, has_subdirectories, list_children};

use super::glyphs::GlyphSet;

/// Which sibling list is being drawn. Folder entries recurse; file entries
/// (including the spacer) never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folders,
    Files,
}

/// Depth-first tree renderer.
pub struct TreeRenderer {
    config: RenderConfig,
    glyphs: GlyphSet,
}

impl TreeRenderer {
    pub fn new(config: RenderConfig) -> Self {
        let glyphs = GlyphSet::for_config(&config);
        Self { config, glyphs }
    }

    /// Draw the whole tree rooted at `path`.
    ///
    /// The root itself is not printed; the caller owns the header line.
    pub fn draw<W: Write>(&self, path: &Path, out: &mut W) -> io::Result<()> {
        self.draw_dir(path, &[], out)
    }

    /// Render one directory level: files first (when enabled), then
    /// folders. Files always precede folders; this is fixed, not
    /// configurable.
    fn draw_dir<W: Write>(&self, path: &Path, context: &[bool], out: &mut W) -> io::Result<()> {
        let listing = list_children(path, self.config.show_files);

        if self.config.show_files {
            self.draw_entries(path, &listing.files, EntryKind::Files, context, out)?;
        }
        self.draw_entries(path, &listing.dirs, EntryKind::Folders, context, out)
    }

    /// Render a sibling list. An empty list renders nothing; this is the
    /// recursion's base case.
    fn draw_entries<W: Write>(
        &self,
        path: &Path,
        entries: &[DirectoryEntry],
        kind: EntryKind,
        context: &[bool],
        out: &mut W,
    ) -> io::Result<()> {
        // Probed once per sibling list: file rows carry a continuation bar
        // only when a folder section follows them at this level.
        let parent_has_subdirs = kind == EntryKind::Files && has_subdirectories(path);
        let prefix = self.indent_prefix(context);

        for (i, entry) in entries.iter().enumerate() {
            let is_last = i == entries.len() - 1;
            let connector = self.connector(kind, is_last, parent_has_subdirs);
            writeln!(out, "{prefix}{connector}{}", entry.name)?;

            if kind == EntryKind::Folders {
                let mut child_context = context.to_vec();
                child_context.push(!is_last);
                self.draw_dir(&path.join(&entry.name), &child_context, out)?;
            }
        }
        Ok(())
    }

    /// Four columns per ancestor level: a continuation bar under ancestors
    /// that still have siblings below, blank space otherwise.
    fn indent_prefix(&self, context: &[bool]) -> String {
        let mut prefix = String::with_capacity(context.len() * 4);
        for &continues in context {
            if continues {
                prefix.push(self.glyphs.vertical);
                prefix.push_str("   ");
            } else {
                prefix.push_str("    ");
            }
        }
        prefix
    }

    /// The connector segment between the indentation prefix and the name.
    ///
    /// File rows with no folder section below them get five blank columns,
    /// one more than the branch connectors.
    fn connector(&self, kind: EntryKind, is_last: bool, parent_has_subdirs: bool) -> String {
        match kind {
            EntryKind::Folders if is_last => self.glyphs.last_branch.to_string(),
            EntryKind::Folders => self.glyphs.branch.to_string(),
            EntryKind::Files if parent_has_subdirs => format!("{}   ", self.glyphs.vertical),
            EntryKind::Files => "     ".to_string(),
        }
    }
}
