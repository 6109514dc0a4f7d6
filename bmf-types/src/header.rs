//! The fixed three byte font header

use crate::bitmap::{glyph_size, row_stride};

/// Bit set in the first header byte when glyphs have variable width.
const VARIABLE_WIDTH_FLAG: u8 = 0x80;
const WIDTH_MASK: u8 = 0x7F;

/// The header at the start of every `.bmf` file.
///
/// | offset | meaning |
/// |---|---|
/// | 0 | bit 7: variable-width flag, bits 0-6: glyph width |
/// | 1 | glyph height |
/// | 2 | ascii offset (codepoint of the first glyph) |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "bytemuck",
    derive(bytemuck_derive::Pod, bytemuck_derive::Zeroable)
)]
#[repr(C)]
pub struct RawHeader {
    pub flags_and_width: u8,
    pub height: u8,
    pub ascii_offset: u8,
}

impl RawHeader {
    /// The encoded size of the header, in bytes.
    pub const RAW_BYTE_LEN: usize = 3;

    /// Construct a header.
    ///
    /// Only the low seven bits of `width` are stored; callers are expected
    /// to have validated it against [`MAX_GLYPH_WIDTH`](crate::MAX_GLYPH_WIDTH).
    pub const fn new(monospace: bool, width: u8, height: u8, ascii_offset: u8) -> Self {
        let flag = if monospace { 0 } else { VARIABLE_WIDTH_FLAG };
        RawHeader {
            flags_and_width: flag | (width & WIDTH_MASK),
            height,
            ascii_offset,
        }
    }

    pub const fn to_bytes(self) -> [u8; 3] {
        [self.flags_and_width, self.height, self.ascii_offset]
    }

    /// `true` if every glyph occupies the full declared width.
    pub const fn is_monospace(&self) -> bool {
        self.flags_and_width & VARIABLE_WIDTH_FLAG == 0
    }

    /// The declared (maximum) glyph width, in pixels.
    pub const fn width(&self) -> u8 {
        self.flags_and_width & WIDTH_MASK
    }

    /// Number of bytes used by a single row of a glyph.
    pub const fn row_stride(&self) -> usize {
        row_stride(self.width())
    }

    /// Number of bytes used by a single glyph.
    pub const fn glyph_size(&self) -> usize {
        glyph_size(self.width(), self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags() {
        let mono = RawHeader::new(true, 5, 7, 32);
        assert_eq!(mono.to_bytes(), [0x05, 0x07, 0x20]);
        assert!(mono.is_monospace());

        let prop = RawHeader::new(false, 12, 16, 0);
        assert_eq!(prop.to_bytes(), [0x8C, 0x10, 0x00]);
        assert!(!prop.is_monospace());
        assert_eq!(prop.width(), 12);
        assert_eq!(prop.row_stride(), 2);
        assert_eq!(prop.glyph_size(), 32);
    }
}
