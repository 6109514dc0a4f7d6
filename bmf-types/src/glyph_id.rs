//! Glyph identifiers
//!
//! A glyph in a `.bmf` file is addressed by its slot in the glyph store. Text
//! refers to glyphs by codepoint; the two are related by the font's
//! `ascii_offset`.

/// The index of a glyph slot in a font's glyph store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphId(u16);

impl GlyphId {
    /// Construct a new `GlyphId`.
    pub const fn new(raw: u16) -> Self {
        GlyphId(raw)
    }

    /// The slot holding `codepoint` in a font whose first slot is `ascii_offset`.
    ///
    /// Returns `None` for codepoints below the offset, or too far above it
    /// to be addressed.
    pub fn from_codepoint(codepoint: u32, ascii_offset: u8) -> Option<Self> {
        codepoint
            .checked_sub(ascii_offset as u32)
            .and_then(|ix| u16::try_from(ix).ok())
            .map(GlyphId)
    }

    /// The codepoint displayed by this slot in a font starting at `ascii_offset`.
    pub const fn to_codepoint(self, ascii_offset: u8) -> u32 {
        self.0 as u32 + ascii_offset as u32
    }

    /// The identifier as a u16.
    pub const fn to_u16(self) -> u16 {
        self.0
    }

    /// The identifier as a usize, for indexing.
    pub const fn to_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u16> for GlyphId {
    fn from(raw: u16) -> Self {
        GlyphId(raw)
    }
}

impl std::fmt::Display for GlyphId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GID_{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codepoint_conversion() {
        let gid = GlyphId::from_codepoint('A' as u32, 32).unwrap();
        assert_eq!(gid, GlyphId::new(33));
        assert_eq!(gid.to_codepoint(32), 'A' as u32);
    }

    #[test]
    fn below_offset() {
        assert_eq!(GlyphId::from_codepoint('\n' as u32, 32), None);
        assert_eq!(GlyphId::from_codepoint(0x1_0000 + 32, 32), None);
    }

    #[test]
    fn display() {
        assert_eq!(GlyphId::new(7).to_string(), "GID_7");
    }
}
