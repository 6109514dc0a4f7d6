//! Glyph sheets: every glyph of a font laid out in a single image

use bmf_types::{row_stride, PixelMatrix};

use crate::validate::{ValidationCtx, ValidationReport};

/// An image holding a grid of glyph cells.
///
/// Cells are `8 * ceil(width / 8)` pixels wide, so each one starts on a byte
/// boundary, and `height` pixels tall. Glyphs are read left to right, top to
/// bottom; only the leftmost `width` columns of a cell belong to the glyph.
#[derive(Clone, Debug)]
pub struct GlyphSheet {
    pixels: PixelMatrix,
    width: u8,
    height: u8,
}

impl GlyphSheet {
    /// Wrap an image, checking that it is a whole number of cells wide.
    pub fn new(pixels: PixelMatrix, width: u8, height: u8) -> Result<Self, ValidationReport> {
        let mut ctx = ValidationCtx::default();
        let stride = row_stride(width) * 8;
        ctx.in_table("GlyphSheet", |ctx| {
            ctx.in_field("width", |ctx| {
                if stride == 0 || pixels.width() == 0 || pixels.width() % stride != 0 {
                    ctx.report(format!(
                        "sheet width {} is not aligned with glyph cells of {stride} pixels; \
                         make sure glyph and sheet widths are multiples of 8",
                        pixels.width()
                    ));
                }
            });
            ctx.in_field("height", |ctx| {
                if height == 0 || pixels.height() < height as usize {
                    ctx.report(format!(
                        "sheet height {} cannot hold a row of {height} pixel glyphs",
                        pixels.height()
                    ));
                }
            });
        });
        let sheet = GlyphSheet {
            pixels,
            width,
            height,
        };
        ctx.into_result(Some(sheet))
    }

    /// The width of one cell, in pixels.
    pub fn cell_width(&self) -> usize {
        row_stride(self.width) * 8
    }

    pub fn glyphs_per_row(&self) -> usize {
        self.pixels.width() / self.cell_width()
    }

    /// The number of glyph cells on the sheet.
    pub fn glyph_count(&self) -> usize {
        self.glyphs_per_row() * (self.pixels.height() / self.height as usize)
    }

    /// The pixels of the glyph in cell `index`, or `None` past the last cell.
    pub fn glyph(&self, index: usize) -> Option<PixelMatrix> {
        if index >= self.glyph_count() {
            return None;
        }
        let per_row = self.glyphs_per_row();
        let x = self.cell_width() * (index % per_row);
        let y = self.height as usize * (index / per_row);
        Some(self.pixels.crop(x, y, self.width as usize, self.height as usize))
    }
}
