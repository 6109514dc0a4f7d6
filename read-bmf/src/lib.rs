//! Reading packed bitmap fonts
//!
//! This crate provides zero-allocation parsing of `.bmf` files: a three byte
//! header describing the glyph cell, followed by every glyph bitmap in slot
//! order. See [`bmf_types::RawHeader`] for the header layout and
//! [`bmf_types::PixelMatrix`] for the bit order of glyph rows.
//!
//! The glyph names that give meaning to each slot are kept in a separate
//! [`Charmap`].
//!
//! # Example
//!
//! ```no_run
//! # let path_to_my_font_file = std::path::Path::new("");
//! use read_bmf::FontRef;
//! let font_bytes = std::fs::read(path_to_my_font_file).unwrap();
//! let font = FontRef::new(&font_bytes).expect("failed to read font data");
//! println!(
//!     "{}x{} font with {} glyphs",
//!     font.width(),
//!     font.height(),
//!     font.glyph_count()
//! );
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod charmap;
mod font;
mod font_data;
mod read;

pub use charmap::{Charmap, CharmapEntry};
pub use font::{FontRef, Glyph};
pub use font_data::FontData;
pub use read::ReadError;

/// Public re-export of the bmf-types crate.
pub extern crate bmf_types as types;
