//! Mapping strings onto the glyphs of a font

use read_bmf::Charmap;

use crate::combining::CombiningTable;
use crate::diagnostic::Diagnostic;
use crate::COMBINE_MARKER;

const SPACE: u32 = ' ' as u32;

/// A single step for the shaper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawToken {
    /// Draw the glyph displayed by this codepoint.
    Glyph(u32),
    /// Overlay the next glyph on the previous one.
    CombineMarker,
    /// A control character passed through from the input.
    ControlChar(u32),
    /// Move to the start of the next line.
    LineBreak,
}

impl DrawToken {
    /// The token for a codepoint of a preprocessed byte string.
    pub fn from_codepoint(codepoint: u32) -> Self {
        match codepoint {
            COMBINE_MARKER => DrawToken::CombineMarker,
            0x0A | 0x08 => DrawToken::ControlChar(codepoint),
            _ => DrawToken::Glyph(codepoint),
        }
    }

    /// The codepoint that encodes this token in a preprocessed byte string.
    pub fn codepoint(self) -> u32 {
        match self {
            DrawToken::Glyph(codepoint) | DrawToken::ControlChar(codepoint) => codepoint,
            DrawToken::CombineMarker => COMBINE_MARKER,
            DrawToken::LineBreak => '\n' as u32,
        }
    }
}

/// The result of [`preprocess`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Preprocessed {
    pub tokens: Vec<DrawToken>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Preprocessed {
    /// The tokens as a codepoint string, the form drawn by display firmware.
    pub fn codepoints(&self) -> impl Iterator<Item = u32> + '_ {
        self.tokens.iter().map(|token| token.codepoint())
    }
}

/// Convert `text` into draw tokens for the font described by `charmap`.
///
/// Each character becomes, in order of preference:
///
/// * the glyph the charmap resolves it to;
/// * the glyphs of its decomposition in `combining`, separated by
///   [`DrawToken::CombineMarker`]. Components missing from the charmap are
///   drawn as a space;
/// * a [`DrawToken::ControlChar`] for `'\n'` and `'\b'`;
/// * a space.
///
/// Every replacement with a space is reported in the diagnostics. There is
/// at least one token per input character.
pub fn preprocess(text: &str, charmap: &Charmap, combining: &CombiningTable) -> Preprocessed {
    let mut out = Preprocessed::default();
    for (index, character) in text.chars().enumerate() {
        if let Some(codepoint) = charmap.resolve(character) {
            out.tokens.push(DrawToken::Glyph(codepoint));
            continue;
        }

        if let Some(components) = combining.get(character).filter(|c| !c.is_empty()) {
            for (i, component) in components.iter().enumerate() {
                if i > 0 {
                    out.tokens.push(DrawToken::CombineMarker);
                }
                let codepoint = match charmap.get(component) {
                    Some(entry) => entry.codepoint(),
                    None => {
                        out.diagnostics.push(Diagnostic::MissingCombiningComponent {
                            index,
                            character,
                            component: component.clone(),
                        });
                        SPACE
                    }
                };
                out.tokens.push(DrawToken::Glyph(codepoint));
            }
            continue;
        }

        match character {
            '\n' | '\x08' => out.tokens.push(DrawToken::ControlChar(character as u32)),
            _ => {
                out.diagnostics
                    .push(Diagnostic::UnsupportedCharacter { index, character });
                out.tokens.push(DrawToken::Glyph(SPACE));
            }
        }
    }
    log::trace!(
        "preprocessed {} tokens with {} diagnostics",
        out.tokens.len(),
        out.diagnostics.len()
    );
    out
}
