//! Errors that occur while interpreting font data

/// An error that occurs when reading font data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// A read past the end of the data.
    OutOfBounds,
    /// The data is shorter than the fixed header.
    TruncatedHeader { len: usize },
    /// The glyph store is not a whole number of glyphs.
    InvalidGlyphStoreLen {
        /// Position of the glyph store in the file.
        offset: usize,
        /// Size of a single glyph, as computed from the header.
        glyph_size: usize,
        /// Actual length of the glyph store.
        len: usize,
    },
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "An offset was out of bounds"),
            ReadError::TruncatedHeader { len } => {
                write!(f, "Font header requires 3 bytes, found {len}")
            }
            ReadError::InvalidGlyphStoreLen {
                offset,
                glyph_size,
                len,
            } => write!(
                f,
                "Glyph store at offset {offset} has length {len}, \
                 which is not a multiple of the glyph size {glyph_size}"
            ),
        }
    }
}

impl std::error::Error for ReadError {}
