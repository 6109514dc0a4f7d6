//! Decoding of whole font files

use bmf_types::{BitmapLenError, GlyphId, PixelMatrix, RawHeader};

use crate::font_data::FontData;
use crate::read::ReadError;

/// Reference to the content of a `.bmf` font file.
///
/// This is the decoded form of a font: the header fields, and the glyph store
/// borrowed from the underlying data. Construction validates that the glyph
/// store holds a whole number of glyphs, so every glyph slot can be accessed
/// without further checks on its length.
#[derive(Debug, Clone, Copy)]
pub struct FontRef<'a> {
    header: &'a RawHeader,
    glyphs: FontData<'a>,
}

impl<'a> FontRef<'a> {
    /// Creates a new reference to a font, validating its layout.
    pub fn new(data: &'a [u8]) -> Result<Self, ReadError> {
        Self::from_data(FontData::new(data))
    }

    pub fn from_data(data: FontData<'a>) -> Result<Self, ReadError> {
        let header: &RawHeader = data
            .read_ref_at(0)
            .map_err(|_| ReadError::TruncatedHeader { len: data.len() })?;
        let glyphs = data
            .split_off(RawHeader::RAW_BYTE_LEN)
            .ok_or(ReadError::OutOfBounds)?;
        let glyph_size = header.glyph_size();
        let whole_glyphs = match glyph_size {
            0 => glyphs.is_empty(),
            size => glyphs.len() % size == 0,
        };
        if !whole_glyphs {
            return Err(ReadError::InvalidGlyphStoreLen {
                offset: glyphs.position(),
                glyph_size,
                len: glyphs.len(),
            });
        }
        Ok(FontRef { header, glyphs })
    }

    /// The raw header of this font.
    pub fn header(&self) -> RawHeader {
        *self.header
    }

    /// `true` if every glyph occupies the full declared width.
    pub fn is_monospace(&self) -> bool {
        self.header.is_monospace()
    }

    /// The declared (maximum) glyph width, in pixels.
    pub fn width(&self) -> u8 {
        self.header.width()
    }

    /// The glyph height, in pixels.
    pub fn height(&self) -> u8 {
        self.header.height
    }

    /// The codepoint of the glyph in the first slot.
    pub fn ascii_offset(&self) -> u8 {
        self.header.ascii_offset
    }

    /// Number of bytes in each row of a glyph.
    pub fn row_stride(&self) -> usize {
        self.header.row_stride()
    }

    /// Number of bytes in each glyph.
    pub fn glyph_size(&self) -> usize {
        self.header.glyph_size()
    }

    /// The width of a glyph cell rounded up to a whole number of bytes, in pixels.
    pub fn capacity(&self) -> usize {
        self.row_stride() * 8
    }

    /// Number of glyph slots in the font, including unused ones.
    pub fn glyph_count(&self) -> usize {
        match self.glyph_size() {
            0 => 0,
            size => self.glyphs.len() / size,
        }
    }

    /// The packed glyph store, in slot order.
    pub fn glyph_data(&self) -> &'a [u8] {
        self.glyphs.as_bytes()
    }

    /// Returns the glyph in the given slot, if it exists.
    pub fn glyph(&self, glyph_id: GlyphId) -> Option<Glyph<'a>> {
        let size = self.glyph_size();
        let start = glyph_id.to_usize().checked_mul(size)?;
        let data = self.glyphs.slice(start..start.checked_add(size)?)?;
        // zero sized glyphs have no slots
        (size != 0).then_some(Glyph {
            glyph_id,
            width: self.width(),
            height: self.height(),
            data: data.as_bytes(),
        })
    }

    /// Returns the glyph displaying `codepoint`, if the font covers it.
    pub fn glyph_for_codepoint(&self, codepoint: u32) -> Option<Glyph<'a>> {
        GlyphId::from_codepoint(codepoint, self.ascii_offset()).and_then(|gid| self.glyph(gid))
    }

    /// Iterate over all glyph slots, in order.
    ///
    /// Only the first 65536 slots can be addressed by a [`GlyphId`]; any
    /// slots past those are not visited.
    pub fn glyphs(&self) -> impl Iterator<Item = Glyph<'a>> + 'a {
        let this = *self;
        (0..self.glyph_count())
            .map_while(|ix| u16::try_from(ix).ok())
            .filter_map(move |ix| this.glyph(GlyphId::new(ix)))
    }
}

/// A single packed glyph bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph<'a> {
    glyph_id: GlyphId,
    width: u8,
    height: u8,
    data: &'a [u8],
}

impl<'a> Glyph<'a> {
    pub fn glyph_id(&self) -> GlyphId {
        self.glyph_id
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// The packed rows of this glyph.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Number of bytes in each row.
    pub fn row_stride(&self) -> usize {
        bmf_types::row_stride(self.width)
    }

    /// Iterate over the packed rows of this glyph.
    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> + 'a {
        self.data.chunks_exact(self.row_stride().max(1))
    }

    /// Returns `true` if the pixel at `(x, y)` is set.
    ///
    /// Only pixels inside the declared width are considered; padding bits
    /// always read as clear.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        x < self.width as usize
            && y < self.height as usize
            && self.data[self.row_stride() * y + (x >> 3)] & (1 << (7 - (x & 7))) != 0
    }

    /// Decode this glyph into a pixel matrix.
    pub fn to_pixels(&self) -> Result<PixelMatrix, BitmapLenError> {
        PixelMatrix::unpack(self.data, self.width, self.height)
    }
}
