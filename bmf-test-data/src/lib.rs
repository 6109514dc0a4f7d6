//! test data shared between the various bmf crates.

use bmf_types::{PixelMatrix, RawHeader};

#[rustfmt::skip]
pub static MONO_4X3: &[u8] = &[
    0x04, 0x03, 0x41, // monospace, 4x3, first glyph 'A'
    0x60, 0xF0, 0x90, // 'A'  .##. / #### / #..#
    0xE0, 0xC0, 0xE0, // 'B'  ###. / ##.. / ###.
    0x70, 0x80, 0x70, // 'C'  .### / #... / .###
];

#[rustfmt::skip]
pub static PROP_10X2: &[u8] = &[
    0x8A, 0x02, 0x20, // variable width, 10x2, first glyph ' '
    0x80, 0x40,       // #........#
    0x00, 0x40,       // .........#
];

/// A valid font with no glyphs.
pub static EMPTY_5X7: &[u8] = &[0x05, 0x07, 0x20];

/// Font source describing [`MONO_4X3`], with a null slot before 'C'.
pub static MONO_4X3_SOURCE: &str = r#"{
    "name": "tiny",
    "glyphs": "tiny.png",
    "width": 4,
    "height": 3,
    "ascii_offset": 65,
    "monospace": true,
    "charmap": ["A", "B", null, "C"]
}"#;

/// A glyph described as text art, for building test fonts.
#[derive(Clone, Copy, Debug)]
pub struct GlyphArt {
    pub name: &'static str,
    pub codepoint: u32,
    pub rows: &'static [&'static str],
}

impl GlyphArt {
    pub fn pixels(&self) -> PixelMatrix {
        PixelMatrix::from_art(self.rows)
    }
}

/// Build a font whose slots run from `ascii_offset` to the highest codepoint
/// in `glyphs`; slots without art are blank.
pub fn build_font(
    monospace: bool,
    width: u8,
    height: u8,
    ascii_offset: u8,
    glyphs: &[GlyphArt],
) -> Vec<u8> {
    let header = RawHeader::new(monospace, width, height, ascii_offset);
    let glyph_size = header.glyph_size();
    let last = glyphs.iter().map(|g| g.codepoint).max().unwrap_or(0);
    let slots = (last + 1).saturating_sub(ascii_offset as u32) as usize;
    let mut out = header.to_bytes().to_vec();
    out.resize(RawHeader::RAW_BYTE_LEN + slots * glyph_size, 0);
    for glyph in glyphs {
        let start = RawHeader::RAW_BYTE_LEN
            + (glyph.codepoint - ascii_offset as u32) as usize * glyph_size;
        let pixels = glyph.pixels().crop(0, 0, width as usize, height as usize);
        out[start..start + glyph_size].copy_from_slice(&pixels.pack());
    }
    out
}

/// A 5x7 font with a handful of latin letters and combining marks.
pub mod latin_5x7 {
    use super::GlyphArt;

    pub const WIDTH: u8 = 5;
    pub const HEIGHT: u8 = 7;
    pub const ASCII_OFFSET: u8 = 32;

    pub const LOWERCASE_ACUTE: u32 = 0x80;
    pub const LOWERCASE_TILDE: u32 = 0x81;
    pub const DEGREE: u32 = 0x82;

    pub static CHARMAP_JSON: &str = r#"{
        "space": " ",
        "A": "A",
        "B": "B",
        "a": "a",
        "e": "e",
        "n": "n",
        "lowercase_acute": 128,
        "lowercase_tilde": 129,
        "degree": 130
    }"#;

    #[rustfmt::skip]
    pub static GLYPHS: &[GlyphArt] = &[
        GlyphArt { name: "space", codepoint: 0x20, rows: &[] },
        GlyphArt { name: "A", codepoint: 0x41, rows: &[
            ".###.",
            "#...#",
            "#...#",
            "#####",
            "#...#",
            "#...#",
            "#...#",
        ] },
        GlyphArt { name: "B", codepoint: 0x42, rows: &[
            "####.",
            "#...#",
            "#...#",
            "####.",
            "#...#",
            "#...#",
            "####.",
        ] },
        // ink width 3
        GlyphArt { name: "a", codepoint: 0x61, rows: &[
            ".....",
            ".....",
            "##...",
            "..#..",
            ".##..",
            "#.#..",
            ".##..",
        ] },
        // ink width 4
        GlyphArt { name: "e", codepoint: 0x65, rows: &[
            ".....",
            ".....",
            ".##..",
            "#..#.",
            "####.",
            "#....",
            ".###.",
        ] },
        // ink width 4
        GlyphArt { name: "n", codepoint: 0x6E, rows: &[
            ".....",
            ".....",
            "###..",
            "#..#.",
            "#..#.",
            "#..#.",
            "#..#.",
        ] },
        // ink width 3
        GlyphArt { name: "lowercase_acute", codepoint: LOWERCASE_ACUTE, rows: &[
            "..#..",
            ".#...",
        ] },
        // ink width 4
        GlyphArt { name: "lowercase_tilde", codepoint: LOWERCASE_TILDE, rows: &[
            ".#.#.",
            "#.#..",
        ] },
        // ink width 3
        GlyphArt { name: "degree", codepoint: DEGREE, rows: &[
            ".#...",
            "#.#..",
            ".#...",
        ] },
    ];

    /// The glyphs above, packed as a monospace font.
    pub fn monospace() -> Vec<u8> {
        super::build_font(true, WIDTH, HEIGHT, ASCII_OFFSET, GLYPHS)
    }

    /// The glyphs above, packed as a variable-width font.
    pub fn proportional() -> Vec<u8> {
        super::build_font(false, WIDTH, HEIGHT, ASCII_OFFSET, GLYPHS)
    }
}
