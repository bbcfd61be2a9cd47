//! Volume banner printed before the tree body

use std::io::{self, Write};
use std::path::Path;

/// Volume information for the filesystem holding the traversal root.
#[derive(Debug, Clone)]
pub struct VolumeInfo {
    /// Volume label; empty on platforms that expose none.
    pub label: String,
    /// 32-bit volume serial, printed as two hex halves.
    pub serial: u32,
}

impl VolumeInfo {
    /// Look up volume information for `path`.
    ///
    /// Unix filesystems have no volume label, so the label is left empty
    /// and the serial is derived from the device id of the path's
    /// metadata. A path whose metadata cannot be read yields a zero
    /// serial rather than an error.
    pub fn for_path(path: &Path) -> Self {
        let serial = std::fs::metadata(path)
            .map(|meta| device_serial(&meta))
            .unwrap_or(0);
        Self {
            label: String::new(),
            serial,
        }
    }

    /// Write the two banner lines in the `tree.com` format.
    pub fn write_banner<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Folder PATH listing for volume {}", self.label)?;
        writeln!(
            out,
            "Volume serial number is {:X}-{:X}",
            self.serial >> 16,
            self.serial & 0xffff
        )
    }
}

#[cfg(unix)]
fn device_serial(meta: &std::fs::Metadata) -> u32 {
    use std::os::unix::fs::MetadataExt;
    meta.dev() as u32
}

#[cfg(not(unix))]
fn device_serial(_meta: &std::fs::Metadata) -> u32 {
    0
}
