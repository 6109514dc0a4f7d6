//! Writing packed bitmap fonts
//!
//! This crate compiles fonts into the `.bmf` format read by [`read_bmf`].
//! A font is usually built in three steps:
//!
//! 1. a JSON [`FontSource`] names the glyph sheet, the glyph cell size and the
//!    glyph name of every slot;
//! 2. a [`FontBuilder`] slices the decoded glyph sheet into a [`BitmapFont`];
//! 3. [`dump_font`] validates the font and serializes it.
//!
//! The companion charmap is available from [`BitmapFont::charmap`].
//!
//! ```
//! use bmf_types::PixelMatrix;
//! use write_bmf::{dump_font, FontBuilder};
//!
//! let source = r#"{"glyphs": "dot.png", "width": 3, "height": 3,
//!                  "ascii_offset": 46, "monospace": true, "charmap": ["period"]}"#;
//! let sheet = PixelMatrix::from_art(&["........", "........", ".#......"]);
//! let font = FontBuilder::from_source_json(source, "dot")?.build(sheet)?;
//! let bytes = dump_font(&font)?;
//! assert_eq!(bytes, [0x03, 0x03, 0x2E, 0x00, 0x00, 0x40]);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod error;
mod font;
mod font_builder;
mod sheet;
mod source;
pub mod validate;
mod write;

pub use error::Error;
pub use font::{BitmapFont, Glyph};
pub use font_builder::FontBuilder;
pub use sheet::GlyphSheet;
pub use source::{FontConfig, FontSource};
pub use validate::{Validate, ValidationReport};
pub use write::{dump_font, FontWrite, FontWriter};

/// Public re-export of the read-bmf crate.
pub extern crate read_bmf as read;
/// Public re-export of the bmf-types crate.
pub extern crate bmf_types as types;
