//! Common data types used in packed bitmap (`.bmf`) font files
//!
//! A `.bmf` file is a three byte [header][RawHeader] followed by a run of
//! fixed-size glyph bitmaps. This crate holds the pieces shared by readers and
//! writers of that format: the raw header, glyph identifiers, and the
//! [packing][PixelMatrix::pack] of pixel rows into bytes.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod bitmap;
mod glyph_id;
mod header;

#[cfg(all(test, feature = "serde"))]
mod serde_test;

pub use bitmap::{glyph_size, row_stride, BitmapLenError, PixelMatrix};
pub use glyph_id::GlyphId;
pub use header::RawHeader;

/// The largest glyph width representable in a font header.
///
/// The high bit of the first header byte is used as the variable-width flag,
/// leaving seven bits for the width itself.
pub const MAX_GLYPH_WIDTH: u8 = 0x7F;

/// The ascii offset assumed when a font source does not declare one.
pub const DEFAULT_ASCII_OFFSET: u8 = 32;
