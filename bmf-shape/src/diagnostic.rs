//! Non-fatal problems found while shaping

use std::fmt;

/// A character or glyph that could not be displayed as requested.
///
/// Diagnostics are collected while shaping and never interrupt it; the
/// offending character is replaced with a space or skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// The font has no glyph for this character, and it has no decomposition.
    UnsupportedCharacter { index: usize, character: char },
    /// A component of a composed character is missing from the font.
    MissingCombiningComponent {
        index: usize,
        character: char,
        component: String,
    },
    /// The codepoint is past the last glyph slot of the font.
    GlyphOutOfRange { codepoint: u32 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnsupportedCharacter { index, character } => write!(
                f,
                "character {character:?} at {index} is not supported by this font, using ' ' instead"
            ),
            Diagnostic::MissingCombiningComponent {
                index,
                character,
                component,
            } => write!(
                f,
                "combined character {character:?} at {index} contains '{component}', \
                 which is not supported by this font, using ' ' instead"
            ),
            Diagnostic::GlyphOutOfRange { codepoint } => {
                write!(f, "no glyph for codepoint {codepoint:#04X}, skipping")
            }
        }
    }
}
