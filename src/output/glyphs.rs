//! Connector glyph sets for tree drawing

use crate::tree::RenderConfig;

/// The connector glyphs used to draw one tree line.
///
/// `branch` and `last_branch` are four columns wide; `vertical` is the
/// single continuation character repeated under ancestors that still have
/// siblings below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    pub branch: &'static str,
    pub last_branch: &'static str,
    pub vertical: char,
}

/// Unicode box-drawing connectors (default).
pub const UNICODE: GlyphSet = GlyphSet {
    branch: "├───",
    last_branch: "└───",
    vertical: '│',
};

/// ASCII fallback for consoles without box-drawing characters.
pub const ASCII: GlyphSet = GlyphSet {
    branch: "+---",
    last_branch: "\\---",
    vertical: '|',
};

impl GlyphSet {
    pub fn for_config(config: &RenderConfig) -> Self {
        if config.use_ascii { ASCII } else { UNICODE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_selection() {
        let unicode = GlyphSet::for_config(&RenderConfig::default());
        assert_eq!(unicode, UNICODE);

        let ascii = GlyphSet::for_config(&RenderConfig {
            use_ascii: true,
            ..Default::default()
        });
        assert_eq!(ascii, ASCII);
    }

    #[test]
    fn test_branch_glyphs_are_four_columns() {
        assert_eq!(UNICODE.branch.chars().count(), 4);
        assert_eq!(UNICODE.last_branch.chars().count(), 4);
        assert_eq!(ASCII.branch.chars().count(), 4);
        assert_eq!(ASCII.last_branch.chars().count(), 4);
    }
}
