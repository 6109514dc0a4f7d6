//! Text shaping for packed bitmap fonts.
//!
//! This crate sits above [`read_bmf`] and turns strings into positioned glyph
//! draws:
//!
//! * [`preprocess`] maps every character of a string onto a glyph of the font,
//!   decomposing accented characters through a [`CombiningTable`];
//! * [`TextShaper`] walks the resulting tokens with a cursor and produces
//!   [`DrawInstruction`]s, centering combining marks over their base glyph on
//!   variable-width fonts;
//! * [`render`] blits those instructions onto any [`Surface`].
//!
//! Characters the font can't display never stop shaping. They are replaced
//! with a space and reported as a [`Diagnostic`].
//!
//! ```no_run
//! use bmf_shape::{CombiningTable, TextShaper};
//! use read_bmf::{Charmap, FontRef};
//!
//! # fn load() -> (Vec<u8>, String) { unimplemented!() }
//! let (font_data, charmap_json) = load();
//! let font = FontRef::new(&font_data)?;
//! let charmap: Charmap = serde_json::from_str(&charmap_json)?;
//! let combining = CombiningTable::latin();
//! let shaped = TextShaper::new(font, &charmap, &combining).shape("añejo");
//! for diagnostic in &shaped.diagnostics {
//!     eprintln!("warning: {diagnostic}");
//! }
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod combining;
mod diagnostic;
pub mod metrics;
mod preprocess;
pub mod render;
mod shaper;

pub use combining::CombiningTable;
pub use diagnostic::Diagnostic;
pub use metrics::GlyphMetrics;
pub use preprocess::{preprocess, DrawToken, Preprocessed};
pub use render::{render, Canvas, Surface};
pub use shaper::{CursorState, DrawInstruction, ShapedText, TextShaper};

/// Expose our underlying parser crate.
pub extern crate read_bmf as raw;

/// Codepoint of the token that separates the components of a combined
/// character in a preprocessed byte string.
pub const COMBINE_MARKER: u32 = 0x1B;
