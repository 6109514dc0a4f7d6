//! Font source descriptions
//!
//! A font is described by a small JSON document pointing at a glyph sheet:
//!
//! ```json
//! {
//!     "name": "tiny",
//!     "glyphs": "tiny.png",
//!     "width": 4,
//!     "height": 3,
//!     "ascii_offset": 65,
//!     "monospace": true,
//!     "charmap": ["A", "B", null, "C"]
//! }
//! ```
//!
//! `glyphs`, `width`, `height` and `charmap` are required; the rest fall back
//! to defaults, with a warning.

use bmf_types::{DEFAULT_ASCII_OFFSET, MAX_GLYPH_WIDTH};

use crate::error::Error;
use crate::validate::{ValidationCtx, ValidationReport};

/// A font source as written by a user, before defaults are applied.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FontSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Path of the glyph sheet, relative to the source file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glyphs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ascii_offset: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monospace: Option<bool>,
    /// Glyph names in slot order; `null` marks an unused slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charmap: Option<Vec<Option<String>>>,
}

/// A validated font source with every default applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontConfig {
    pub name: String,
    pub glyphs: String,
    pub width: u8,
    pub height: u8,
    pub ascii_offset: u8,
    pub monospace: bool,
    pub charmap: Vec<Option<String>>,
}

impl FontSource {
    /// Parse a font source from JSON.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(Error::InvalidSource)
    }

    /// Check the source and apply defaults.
    ///
    /// `fallback_name` is used when the source has no name; this is usually
    /// the stem of the file the source was read from.
    ///
    /// Every missing required key is reported, not just the first.
    pub fn resolve(self, fallback_name: &str) -> Result<FontConfig, ValidationReport> {
        let mut ctx = ValidationCtx::default();
        let config = ctx.in_table("FontSource", |ctx| {
            let glyphs = ctx.in_field("glyphs", |ctx| required(ctx, self.glyphs));
            let width = ctx.in_field("width", |ctx| {
                let width = required(ctx, self.width)?;
                match u8::try_from(width) {
                    Ok(width) if (1..=MAX_GLYPH_WIDTH).contains(&width) => Some(width),
                    _ => {
                        ctx.report(format!(
                            "font width ({width}) must be in 1..={MAX_GLYPH_WIDTH}"
                        ));
                        None
                    }
                }
            });
            let height = ctx.in_field("height", |ctx| {
                let height = required(ctx, self.height)?;
                u8::try_from(height).ok().or_else(|| {
                    ctx.report(format!("font height ({height}) must be at most 255"));
                    None
                })
            });
            let charmap = ctx.in_field("charmap", |ctx| required(ctx, self.charmap));

            let name = self.name.unwrap_or_else(|| {
                log::warn!("No 'name' specified. Using '{fallback_name}'");
                fallback_name.to_owned()
            });
            let ascii_offset = self.ascii_offset.unwrap_or_else(|| {
                log::warn!("No 'ascii_offset' specified. Using default ({DEFAULT_ASCII_OFFSET})");
                DEFAULT_ASCII_OFFSET
            });
            let monospace = self.monospace.unwrap_or_else(|| {
                log::warn!("'monospace' not specified. Assuming variable-width font");
                false
            });

            Some(FontConfig {
                name,
                glyphs: glyphs?,
                width: width?,
                height: height?,
                ascii_offset,
                monospace,
                charmap: charmap?,
            })
        });
        ctx.into_result(config)
    }
}

fn required<T>(ctx: &mut ValidationCtx, value: Option<T>) -> Option<T> {
    if value.is_none() {
        ctx.report("missing mandatory key");
    }
    value
}
