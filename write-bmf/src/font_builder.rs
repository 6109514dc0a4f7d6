//! A builder for fonts from a source description and a glyph sheet

use bmf_types::PixelMatrix;

use crate::error::Error;
use crate::font::{BitmapFont, Glyph};
use crate::sheet::GlyphSheet;
use crate::source::{FontConfig, FontSource};
use crate::validate::ValidationCtx;

/// Build a font from a [`FontConfig`] and the image of its glyphs.
#[derive(Clone, Debug)]
pub struct FontBuilder {
    config: FontConfig,
}

impl FontBuilder {
    pub fn new(config: FontConfig) -> Self {
        FontBuilder { config }
    }

    /// Create a builder from a JSON font source.
    ///
    /// See [`FontSource::resolve`] for the meaning of `fallback_name`.
    pub fn from_source_json(json: &str, fallback_name: &str) -> Result<Self, Error> {
        let config = FontSource::from_json(json)?.resolve(fallback_name)?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &FontConfig {
        &self.config
    }

    /// Cut every charmap slot out of `sheet` and pack it.
    ///
    /// Unnamed slots are packed too, so that the glyph of slot `i` always
    /// lands at index `i` of the font.
    pub fn build(&self, sheet: PixelMatrix) -> Result<BitmapFont, Error> {
        let config = &self.config;
        let sheet = GlyphSheet::new(sheet, config.width, config.height)?;

        let mut ctx = ValidationCtx::default();
        ctx.in_table("FontBuilder", |ctx| {
            ctx.in_field("charmap", |ctx| {
                if config.charmap.len() > sheet.glyph_count() {
                    ctx.report(format!(
                        "charmap has {} slots but the sheet only holds {} glyphs",
                        config.charmap.len(),
                        sheet.glyph_count()
                    ));
                }
            })
        });
        ctx.into_result(Some(()))?;

        log::debug!(
            "building '{}': {} slots from a sheet of {} glyphs per row",
            config.name,
            config.charmap.len(),
            sheet.glyphs_per_row()
        );
        let mut font = BitmapFont::new(
            config.monospace,
            config.width,
            config.height,
            config.ascii_offset,
        );
        font.glyphs = config
            .charmap
            .iter()
            .enumerate()
            .filter_map(|(ix, name)| Some(Glyph::new(name.clone(), &sheet.glyph(ix)?)))
            .collect();
        Ok(font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dump_font;
    use pretty_assertions::assert_eq;
    use read_bmf::{CharmapEntry, FontRef};

    // the glyphs of MONO_4X3 plus a blank unused slot, two per row
    fn tiny_sheet() -> PixelMatrix {
        PixelMatrix::from_art(&[
            ".##.....###.....",
            "####....##......",
            "#..#....###.....",
            "........#####...",
            "........#.......",
            "........###.....",
        ])
    }

    #[test]
    fn build_tiny() {
        let builder = FontBuilder::from_source_json(bmf_test_data::MONO_4X3_SOURCE, "tiny").unwrap();
        let font = builder.build(tiny_sheet()).unwrap();
        assert_eq!(font.glyphs.len(), 4);
        assert_eq!(font.glyphs[2], Glyph::new(None, &PixelMatrix::new(4, 3)));

        let data = dump_font(&font).unwrap();
        let parsed = FontRef::new(&data).unwrap();
        assert!(parsed.is_monospace());
        assert_eq!(parsed.glyph_count(), 4);
        assert_eq!(&data[..9], &bmf_test_data::MONO_4X3[..9]);
        assert_eq!(&data[9..12], &[0, 0, 0]);
        // 'C' is in the fourth cell, but only the first four columns are kept
        assert_eq!(&data[12..], &[0xF0, 0x80, 0xE0]);
    }

    #[test]
    fn charmap_skips_null_slots() {
        let builder = FontBuilder::from_source_json(bmf_test_data::MONO_4X3_SOURCE, "tiny").unwrap();
        let charmap = builder.build(tiny_sheet()).unwrap().charmap();
        let entries: Vec<_> = charmap.iter().collect();
        assert_eq!(
            entries,
            [
                ("A", CharmapEntry::Char('A')),
                ("B", CharmapEntry::Char('B')),
                ("C", CharmapEntry::Char('D')),
            ]
        );
    }

    #[test]
    fn sheet_too_small() {
        let builder = FontBuilder::from_source_json(bmf_test_data::MONO_4X3_SOURCE, "tiny").unwrap();
        let sheet = tiny_sheet().crop(0, 0, 16, 3);
        let err = builder.build(sheet).unwrap_err();
        assert!(err.to_string().contains("only holds 2 glyphs"), "{err}");
    }

    #[test]
    fn invalid_source() {
        let err = FontBuilder::from_source_json(r#"{"width": 200}"#, "x").unwrap_err();
        match err {
            Error::ValidationFailed(report) => assert_eq!(report.len(), 4),
            other => panic!("unexpected error {other}"),
        }
    }
}
