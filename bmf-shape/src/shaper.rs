//! Placing glyphs along lines of text

use read_bmf::{Charmap, FontRef};

use crate::combining::CombiningTable;
use crate::diagnostic::Diagnostic;
use crate::metrics::GlyphMetrics;
use crate::preprocess::{preprocess, DrawToken};

/// Whether the next glyph starts a new cell or overlays the previous one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorState {
    #[default]
    Normal,
    /// A [`DrawToken::CombineMarker`] was seen; the next glyph is a mark.
    Combining,
}

/// The pen position while shaping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub x: i32,
    pub y: i32,
    pub state: CursorState,
    /// Advance of the last glyph that was not drawn as a mark.
    pub last_width: i32,
}

/// Draw the glyph displayed by `glyph` with its top left corner at `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DrawInstruction {
    pub glyph: u32,
    pub x: i32,
    pub y: i32,
}

impl DrawInstruction {
    pub fn new(glyph: u32, x: i32, y: i32) -> Self {
        DrawInstruction { glyph, x, y }
    }
}

/// The output of a [`TextShaper`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShapedText {
    pub instructions: Vec<DrawInstruction>,
    pub diagnostics: Vec<Diagnostic>,
    /// Where the next glyph would be drawn.
    pub cursor: Cursor,
}

/// Shapes text for a single font.
///
/// Glyphs are laid out left to right from `(0, 0)`. Variable-width fonts
/// leave a one pixel gap after each glyph and center combining marks over
/// the glyph they follow; monospace fonts draw marks in the same cell.
#[derive(Clone, Copy, Debug)]
pub struct TextShaper<'a> {
    font: FontRef<'a>,
    metrics: GlyphMetrics<'a>,
    charmap: &'a Charmap,
    combining: &'a CombiningTable,
}

impl<'a> TextShaper<'a> {
    pub fn new(font: FontRef<'a>, charmap: &'a Charmap, combining: &'a CombiningTable) -> Self {
        TextShaper {
            font,
            metrics: GlyphMetrics::new(&font),
            charmap,
            combining,
        }
    }

    pub fn font(&self) -> FontRef<'a> {
        self.font
    }

    /// Map `text` onto the font and shape the result.
    ///
    /// Diagnostics from both steps are returned, in that order.
    pub fn shape(&self, text: &str) -> ShapedText {
        let preprocessed = preprocess(text, self.charmap, self.combining);
        let mut shaped = self.shape_tokens(&preprocessed.tokens);
        let mut diagnostics = preprocessed.diagnostics;
        diagnostics.append(&mut shaped.diagnostics);
        shaped.diagnostics = diagnostics;
        shaped
    }

    /// Shape tokens that were already preprocessed.
    pub fn shape_tokens(&self, tokens: &[DrawToken]) -> ShapedText {
        let ascii_offset = self.font.ascii_offset() as u32;
        let spacing = self.metrics.spacing() as i32;
        let monospace = self.metrics.is_monospace();
        let mut out = ShapedText::default();
        let cursor = &mut out.cursor;

        for token in tokens {
            let codepoint = match *token {
                DrawToken::CombineMarker => {
                    cursor.x -= cursor.last_width + spacing;
                    cursor.state = CursorState::Combining;
                    continue;
                }
                DrawToken::LineBreak | DrawToken::ControlChar(0x0A) => {
                    cursor.x = 0;
                    cursor.y += self.metrics.line_advance() as i32;
                    cursor.last_width = 0;
                    cursor.state = CursorState::Normal;
                    continue;
                }
                DrawToken::Glyph(codepoint) | DrawToken::ControlChar(codepoint) => codepoint,
            };
            if codepoint < ascii_offset {
                continue;
            }
            let Some(width) = self.metrics.advance_width(codepoint) else {
                out.diagnostics.push(Diagnostic::GlyphOutOfRange { codepoint });
                continue;
            };

            let x = if cursor.state == CursorState::Combining && !monospace {
                cursor.x + cursor.last_width / 2
            } else {
                cursor.last_width = width as i32;
                cursor.x
            };
            out.instructions.push(DrawInstruction::new(codepoint, x, cursor.y));
            cursor.state = CursorState::Normal;
            cursor.x += cursor.last_width + spacing;
        }

        log::debug!(
            "shaped {} tokens into {} glyphs",
            tokens.len(),
            out.instructions.len()
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmf_test_data::latin_5x7;
    use pretty_assertions::assert_eq;

    fn charmap() -> Charmap {
        serde_json::from_str(latin_5x7::CHARMAP_JSON).unwrap()
    }

    fn shape(font_data: &[u8], text: &str) -> ShapedText {
        let _ = env_logger::builder().is_test(true).try_init();
        let font = FontRef::new(font_data).unwrap();
        let charmap = charmap();
        let combining = CombiningTable::latin();
        TextShaper::new(font, &charmap, &combining).shape(text)
    }

    fn draws(shaped: &ShapedText) -> Vec<(char, i32, i32)> {
        shaped
            .instructions
            .iter()
            .map(|draw| (char::from_u32(draw.glyph).unwrap(), draw.x, draw.y))
            .collect()
    }

    #[test]
    fn monospace_advance() {
        let shaped = shape(&latin_5x7::monospace(), "AB");
        assert_eq!(draws(&shaped), [('A', 0, 0), ('B', 5, 0)]);
        assert!(shaped.diagnostics.is_empty());
        assert_eq!(shaped.cursor.x, 10);
    }

    #[test]
    fn proportional_advance() {
        // 'a' is 3 wide, 'B' is 5, plus a gap of 1 after each
        let shaped = shape(&latin_5x7::proportional(), "aBa");
        assert_eq!(draws(&shaped), [('a', 0, 0), ('B', 4, 0), ('a', 10, 0)]);
    }

    #[test]
    fn proportional_combining_mark_is_centered() {
        let shaped = shape(&latin_5x7::proportional(), "án");
        assert_eq!(
            shaped.instructions,
            [
                DrawInstruction::new('a' as u32, 0, 0),
                DrawInstruction::new(latin_5x7::LOWERCASE_ACUTE, 1, 0),
                DrawInstruction::new('n' as u32, 4, 0),
            ]
        );
    }

    #[test]
    fn monospace_combining_mark_overlays() {
        let shaped = shape(&latin_5x7::monospace(), "ñA");
        assert_eq!(
            shaped.instructions,
            [
                DrawInstruction::new('n' as u32, 0, 0),
                DrawInstruction::new(latin_5x7::LOWERCASE_TILDE, 0, 0),
                DrawInstruction::new('A' as u32, 5, 0),
            ]
        );
    }

    #[test]
    fn mark_does_not_change_advance() {
        // the tilde is wider than 'a', but the next glyph follows 'a'
        let font_data = latin_5x7::proportional();
        let font = FontRef::new(&font_data).unwrap();
        let charmap = charmap();
        let combining = CombiningTable::new();
        let shaper = TextShaper::new(font, &charmap, &combining);
        let tokens = [
            DrawToken::Glyph('a' as u32),
            DrawToken::CombineMarker,
            DrawToken::Glyph(latin_5x7::LOWERCASE_TILDE),
            DrawToken::Glyph('B' as u32),
        ];
        let shaped = shaper.shape_tokens(&tokens);
        assert_eq!(shaped.instructions[1].x, 1);
        assert_eq!(shaped.instructions[2].x, 4);
        assert_eq!(shaped.cursor.state, CursorState::Normal);
    }

    #[test]
    fn newline() {
        let shaped = shape(&latin_5x7::proportional(), "A\nB");
        assert_eq!(draws(&shaped), [('A', 0, 0), ('B', 0, 8)]);
    }

    #[test]
    fn line_break_token() {
        let font_data = latin_5x7::monospace();
        let font = FontRef::new(&font_data).unwrap();
        let charmap = charmap();
        let combining = CombiningTable::new();
        let shaped = TextShaper::new(font, &charmap, &combining).shape_tokens(&[
            DrawToken::Glyph('A' as u32),
            DrawToken::LineBreak,
            DrawToken::LineBreak,
            DrawToken::Glyph('B' as u32),
        ]);
        assert_eq!(shaped.instructions[1], DrawInstruction::new('B' as u32, 0, 16));
    }

    #[test]
    fn unsupported_character_continues() {
        let shaped = shape(&latin_5x7::proportional(), "A€B");
        // the blank space glyph is as wide as its cell
        assert_eq!(draws(&shaped), [('A', 0, 0), (' ', 6, 0), ('B', 15, 0)]);
        assert_eq!(shaped.diagnostics.len(), 1);
        assert!(matches!(
            shaped.diagnostics[0],
            Diagnostic::UnsupportedCharacter { index: 1, character: '€' }
        ));
    }

    #[test]
    fn control_below_offset_is_ignored() {
        let shaped = shape(&latin_5x7::monospace(), "A\x08B");
        assert_eq!(draws(&shaped), [('A', 0, 0), ('B', 5, 0)]);
        assert!(shaped.diagnostics.is_empty());
    }

    #[test]
    fn glyph_out_of_range() {
        let font_data = latin_5x7::monospace();
        let font = FontRef::new(&font_data).unwrap();
        let charmap = charmap();
        let combining = CombiningTable::new();
        let shaped = TextShaper::new(font, &charmap, &combining).shape_tokens(&[
            DrawToken::Glyph(0x200),
            DrawToken::Glyph('A' as u32),
        ]);
        assert_eq!(shaped.instructions, [DrawInstruction::new('A' as u32, 0, 0)]);
        assert_eq!(shaped.diagnostics, [Diagnostic::GlyphOutOfRange { codepoint: 0x200 }]);
    }
}
