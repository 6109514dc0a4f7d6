//! Drawing shaped text

use std::fmt;

use read_bmf::{types::PixelMatrix, FontRef};

use crate::shaper::DrawInstruction;

/// Interface for accepting the pixels of rendered glyphs.
pub trait Surface {
    /// Set the pixel at (x, y) to the foreground color.
    fn set_pixel(&mut self, x: i32, y: i32);
}

/// Records the position of every set pixel.
impl Surface for Vec<(i32, i32)> {
    fn set_pixel(&mut self, x: i32, y: i32) {
        self.push((x, y));
    }
}

/// Draw every instruction on `surface`, offset by `origin`.
///
/// Only pixels inside the declared glyph width are drawn. Instructions for
/// glyphs the font doesn't have are skipped.
pub fn render(
    font: &FontRef,
    instructions: &[DrawInstruction],
    origin: (i32, i32),
    surface: &mut impl Surface,
) {
    for draw in instructions {
        let Some(glyph) = font.glyph_for_codepoint(draw.glyph) else {
            log::trace!("no glyph for {:#04X}, not drawn", draw.glyph);
            continue;
        };
        let (x0, y0) = (origin.0 + draw.x, origin.1 + draw.y);
        for v in 0..glyph.height() as usize {
            for u in 0..glyph.width() as usize {
                if glyph.pixel(u, v) {
                    surface.set_pixel(x0 + u as i32, y0 + v as i32);
                }
            }
        }
    }
}

/// An in-memory monochrome surface.
///
/// Pixels outside the canvas are clipped. The [`Display`](fmt::Display)
/// implementation prints the canvas as text, with `#` for set pixels.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: PixelMatrix,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Canvas {
            pixels: PixelMatrix::new(width, height),
        }
    }

    /// A canvas large enough to hold `text` drawn at the origin.
    ///
    /// Every character is allowed a full glyph cell plus a one pixel gap,
    /// which is an upper bound for both monospace and variable-width fonts.
    pub fn for_text(font: &FontRef, text: &str) -> Self {
        let lines = text.split('\n');
        let line_count = lines.clone().count();
        let longest = lines.map(|line| line.chars().count()).max().unwrap_or(0);
        Canvas::new(
            (font.width() as usize + 1) * longest,
            (font.height() as usize + 1) * line_count,
        )
    }

    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &PixelMatrix {
        &self.pixels
    }

    pub fn into_pixels(self) -> PixelMatrix {
        self.pixels
    }
}

impl Surface for Canvas {
    fn set_pixel(&mut self, x: i32, y: i32) {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return;
        };
        if x < self.width() && y < self.height() {
            self.pixels.set(x, y, true);
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.pixels.rows() {
            let line: String = row.iter().map(|px| if *px { '#' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Canvas({}x{})", self.width(), self.height())?;
        fmt::Display::fmt(self, f)
    }
}
