//! The owned, writable form of a font

use bmf_types::{glyph_size, row_stride, PixelMatrix, RawHeader, MAX_GLYPH_WIDTH};
use read_bmf::{Charmap, CharmapEntry, FontRef};

use crate::validate::{Validate, ValidationCtx};
use crate::write::{FontWrite, FontWriter};

/// Highest codepoint a glyph slot may display.
///
/// Strings handed to the display driver are byte strings, so slots past this
/// point could never be drawn.
const MAX_CODEPOINT: usize = 0xFF;

/// A bitmap font that can be compiled into a `.bmf` file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitmapFont {
    pub monospace: bool,
    pub width: u8,
    pub height: u8,
    pub ascii_offset: u8,
    /// Every glyph slot, in order. Unnamed slots still take up space.
    pub glyphs: Vec<Glyph>,
}

/// A single glyph slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Glyph {
    /// The name of this glyph in the charmap, if the slot is used.
    pub name: Option<String>,
    /// The packed rows of the glyph.
    pub data: Vec<u8>,
    /// The `(width, height)` of the image the rows were packed from.
    ///
    /// This is `None` for glyphs that were never unpacked.
    pub size: Option<(usize, usize)>,
}

impl Glyph {
    /// Pack a glyph from its pixels.
    ///
    /// The image should be exactly as large as the font's glyph cell; this is
    /// checked when the font is validated.
    pub fn new(name: Option<String>, pixels: &PixelMatrix) -> Self {
        Glyph {
            name,
            data: pixels.pack(),
            size: Some((pixels.width(), pixels.height())),
        }
    }

    /// A glyph from already packed rows.
    pub fn from_packed(name: Option<String>, data: Vec<u8>) -> Self {
        Glyph {
            name,
            data,
            size: None,
        }
    }

    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<null>")
    }
}

/// The bits of the last byte of each row that lie past `width`.
fn padding_mask(width: u8) -> u8 {
    match width % 8 {
        0 => 0,
        used => 0xFF >> used,
    }
}

impl BitmapFont {
    pub fn new(monospace: bool, width: u8, height: u8, ascii_offset: u8) -> Self {
        BitmapFont {
            monospace,
            width,
            height,
            ascii_offset,
            glyphs: Vec::new(),
        }
    }

    /// Convert a parsed font into its owned equivalent.
    ///
    /// Font files do not store glyph names, so every slot is unnamed; see
    /// [`apply_charmap`](Self::apply_charmap).
    pub fn from_font_ref(font: &FontRef) -> Self {
        BitmapFont {
            monospace: font.is_monospace(),
            width: font.width(),
            height: font.height(),
            ascii_offset: font.ascii_offset(),
            glyphs: font
                .glyphs()
                .map(|glyph| Glyph::from_packed(None, glyph.data().to_vec()))
                .collect(),
        }
    }

    /// Name each slot after the charmap entry that displays it.
    ///
    /// Slots the charmap does not cover become unnamed.
    pub fn apply_charmap(&mut self, charmap: &Charmap) {
        let ascii_offset = self.ascii_offset as u32;
        for (ix, glyph) in self.glyphs.iter_mut().enumerate() {
            glyph.name = charmap
                .name_for(ascii_offset + ix as u32)
                .map(str::to_owned);
        }
    }

    /// Append a glyph slot.
    pub fn push_glyph(&mut self, glyph: Glyph) -> &mut Self {
        self.glyphs.push(glyph);
        self
    }

    /// Number of bytes used by each glyph.
    pub fn glyph_size(&self) -> usize {
        glyph_size(self.width, self.height)
    }

    fn header(&self) -> RawHeader {
        RawHeader::new(self.monospace, self.width, self.height, self.ascii_offset)
    }

    /// The charmap describing the named slots of this font.
    ///
    /// A slot displays codepoint `ascii_offset + index`.
    pub fn charmap(&self) -> Charmap {
        let ascii_offset = self.ascii_offset as u32;
        self.glyphs
            .iter()
            .enumerate()
            .filter_map(|(ix, glyph)| {
                let name = glyph.name.clone()?;
                Some((name, CharmapEntry::from_codepoint(ascii_offset + ix as u32)))
            })
            .collect()
    }
}

impl FontWrite for BitmapFont {
    fn write_into(&self, writer: &mut FontWriter) {
        self.header().write_into(writer);
        for glyph in &self.glyphs {
            writer.write_slice(&glyph.data);
        }
    }
}

impl Validate for BitmapFont {
    fn validate_impl(&self, ctx: &mut ValidationCtx) {
        ctx.in_table("BitmapFont", |ctx| {
            ctx.in_field("width", |ctx| {
                if !(1..=MAX_GLYPH_WIDTH).contains(&self.width) {
                    ctx.report(format!(
                        "glyph width must be in 1..={MAX_GLYPH_WIDTH}, found {}",
                        self.width
                    ));
                }
            });
            ctx.in_field("height", |ctx| {
                if self.height == 0 && !self.glyphs.is_empty() {
                    ctx.report("glyph height must be non-zero in a font with glyphs");
                }
            });
            ctx.in_field("glyphs", |ctx| {
                let last_codepoint = self.ascii_offset as usize + self.glyphs.len();
                if !self.glyphs.is_empty() && last_codepoint - 1 > MAX_CODEPOINT {
                    ctx.report(format!(
                        "{} glyphs starting at {} run past codepoint {MAX_CODEPOINT}",
                        self.glyphs.len(),
                        self.ascii_offset
                    ));
                }
                let expected = self.glyph_size();
                let stride = row_stride(self.width);
                let padding = padding_mask(self.width);
                let cell = (self.width as usize, self.height as usize);
                ctx.in_array(|ctx| {
                    for glyph in &self.glyphs {
                        ctx.array_item(|ctx| {
                            if let Some((w, h)) = glyph.size.filter(|size| *size != cell) {
                                ctx.report(format!(
                                    "glyph '{}' image is {w}x{h}, expected {}x{}",
                                    glyph.display_name(),
                                    cell.0,
                                    cell.1
                                ));
                            }
                            if glyph.data.len() != expected {
                                ctx.report(format!(
                                    "glyph '{}' has {} bytes, expected {expected}",
                                    glyph.display_name(),
                                    glyph.data.len()
                                ));
                            } else if stride > 0
                                && glyph
                                    .data
                                    .chunks_exact(stride)
                                    .any(|row| row[stride - 1] & padding != 0)
                            {
                                ctx.report(format!(
                                    "glyph '{}' has pixels set past its width of {}",
                                    glyph.display_name(),
                                    self.width
                                ));
                            }
                        })
                    }
                });
            });
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dump_font;
    use pretty_assertions::assert_eq;
    use read_bmf::types::GlyphId;

    fn tiny() -> BitmapFont {
        let mut font = BitmapFont::new(true, 4, 3, b'A');
        font.push_glyph(Glyph::new(
            Some("A".into()),
            &PixelMatrix::from_art(&[".##.", "####", "#..#"]),
        ))
        .push_glyph(Glyph::new(
            Some("B".into()),
            &PixelMatrix::from_art(&["###.", "##..", "###."]),
        ))
        .push_glyph(Glyph::new(
            Some("C".into()),
            &PixelMatrix::from_art(&[".###", "#...", ".###"]),
        ));
        font
    }

    #[test]
    fn encode() {
        assert_eq!(dump_font(&tiny()).unwrap(), bmf_test_data::MONO_4X3);
    }

    #[test]
    fn decode_encode() {
        let font = FontRef::new(bmf_test_data::PROP_10X2).unwrap();
        let owned = BitmapFont::from_font_ref(&font);
        assert!(!owned.monospace);
        assert_eq!(owned.glyphs.len(), 1);
        assert_eq!(dump_font(&owned).unwrap(), bmf_test_data::PROP_10X2);
    }

    #[test]
    fn encode_decode() {
        let data = dump_font(&tiny()).unwrap();
        let font = FontRef::new(&data).unwrap();
        assert_eq!(font.glyph_count(), 3);
        assert_eq!(
            font.glyph(GlyphId::new(2)).unwrap().to_pixels().unwrap(),
            PixelMatrix::from_art(&[".###", "#...", ".###"])
        );
    }

    #[test]
    fn width_too_large() {
        let mut font = BitmapFont::new(false, 128, 1, 32);
        font.push_glyph(Glyph::from_packed(None, vec![0; 16]));
        let report = dump_font(&font).unwrap_err();
        assert_eq!(
            report.messages().collect::<Vec<_>>(),
            ["glyph width must be in 1..=127, found 128"]
        );
    }

    #[test]
    fn wrong_glyph_size() {
        let mut font = tiny();
        font.glyphs[1].data.push(0);
        let report = dump_font(&font).unwrap_err();
        assert_eq!(report.len(), 1);
        assert!(report.to_string().contains("BitmapFont.glyphs[1]"));
    }

    #[test]
    fn image_size_mismatch() {
        // six columns still pack into a single byte per row
        let mut font = BitmapFont::new(false, 5, 1, 32);
        font.push_glyph(Glyph::new(
            Some("wide".into()),
            &PixelMatrix::from_art(&[".....#"]),
        ));
        let report = dump_font(&font).unwrap_err();
        assert_eq!(
            report.messages().collect::<Vec<_>>(),
            [
                "glyph 'wide' image is 6x1, expected 5x1",
                "glyph 'wide' has pixels set past its width of 5",
            ]
        );
    }

    #[test]
    fn padding_bits_set() {
        let mut font = BitmapFont::new(false, 5, 2, 32);
        font.push_glyph(Glyph::from_packed(None, vec![0xF8, 0x04]));
        let report = dump_font(&font).unwrap_err();
        assert_eq!(report.len(), 1);
        assert!(report.to_string().contains("BitmapFont.glyphs[0]"));

        font.glyphs[0].data[1] = 0x08;
        assert_eq!(dump_font(&font).unwrap(), [0x85, 0x02, 0x20, 0xF8, 0x08]);
    }

    #[test]
    fn too_many_glyphs() {
        let mut font = BitmapFont::new(true, 8, 1, 250);
        for _ in 0..6 {
            font.push_glyph(Glyph::from_packed(None, vec![0]));
        }
        assert!(font.validate().is_ok());
        font.push_glyph(Glyph::from_packed(None, vec![0]));
        assert!(font.validate().is_err());
    }

    #[test]
    fn charmap_from_slots() {
        let mut font = tiny();
        font.glyphs[1].name = None;
        font.ascii_offset = 0x7E;
        let charmap = font.charmap();
        assert_eq!(charmap.len(), 2);
        assert_eq!(charmap.get("A"), Some(CharmapEntry::Char('~')));
        assert_eq!(charmap.get("C"), Some(CharmapEntry::Codepoint(0x80)));
    }

    #[test]
    fn names_from_charmap() {
        let font = FontRef::new(bmf_test_data::MONO_4X3).unwrap();
        let mut owned = BitmapFont::from_font_ref(&font);
        let charmap: Charmap = [("A", CharmapEntry::Char('A')), ("C", CharmapEntry::Char('C'))]
            .into_iter()
            .collect();
        owned.apply_charmap(&charmap);
        let names: Vec<_> = owned.glyphs.iter().map(|g| g.name.as_deref()).collect();
        assert_eq!(names, [Some("A"), None, Some("C")]);
        assert_eq!(owned.charmap(), charmap);
    }
}
