//! Glyph widths and line metrics.
//!
//! Monospace fonts advance by the declared glyph width. Variable-width fonts
//! advance by the ink width of each glyph: the extent of its set pixels,
//! measured from the left edge of the cell.
//!
//! The ink width is measured over the whole byte aligned cell, padding
//! columns included, and a glyph with no set pixels is as wide as the cell.
//! This is what display firmware computes, so layouts match pixel for pixel.

use read_bmf::FontRef;

/// Vertical gap between lines, in pixels.
const LINE_GAP: u8 = 1;

/// Horizontal gap after each glyph of a variable-width font, in pixels.
const GLYPH_GAP: u8 = 1;

/// The ink width of a packed glyph.
///
/// This is one more than the column of the rightmost set pixel on any row, or
/// the cell capacity (`8 * row_stride`) if no pixel is set.
pub fn ink_width(glyph: &[u8], row_stride: usize) -> u8 {
    if row_stride == 0 {
        return 0;
    }
    let capacity = row_stride * 8;
    let width = glyph
        .chunks_exact(row_stride)
        .filter_map(|row| {
            let (byte_ix, byte) = row.iter().enumerate().rev().find(|(_, b)| **b != 0)?;
            Some(byte_ix * 8 + 8 - byte.trailing_zeros() as usize)
        })
        .max()
        .unwrap_or(capacity);
    width.min(u8::MAX as usize) as u8
}

/// Glyph specific metrics for a font.
#[derive(Clone, Copy, Debug)]
pub struct GlyphMetrics<'a> {
    font: FontRef<'a>,
}

impl<'a> GlyphMetrics<'a> {
    pub fn new(font: &FontRef<'a>) -> Self {
        GlyphMetrics { font: *font }
    }

    pub fn is_monospace(&self) -> bool {
        self.font.is_monospace()
    }

    /// Horizontal gap added after every glyph.
    pub fn spacing(&self) -> u8 {
        if self.is_monospace() {
            0
        } else {
            GLYPH_GAP
        }
    }

    /// Distance between the tops of consecutive lines.
    pub fn line_advance(&self) -> u32 {
        self.font.height() as u32 + LINE_GAP as u32
    }

    /// Returns the width of the glyph displayed by `codepoint`, not counting
    /// [spacing](Self::spacing).
    ///
    /// Returns `None` if the font has no glyph for `codepoint`.
    pub fn advance_width(&self, codepoint: u32) -> Option<u8> {
        let glyph = self.font.glyph_for_codepoint(codepoint)?;
        if self.is_monospace() {
            Some(self.font.width())
        } else {
            Some(ink_width(glyph.data(), glyph.row_stride()))
        }
    }
}
