//! Packing of monochrome pixel rows into bytes
//!
//! Each row of a glyph is stored in `ceil(width / 8)` bytes, most significant
//! bit first, with the leftmost pixel in the high bit of the first byte. Bits
//! past the glyph width in the last byte of a row are zero when written and
//! ignored when read.

/// Number of bytes used to store one row of a glyph `width` pixels wide.
pub const fn row_stride(width: u8) -> usize {
    (width as usize).div_ceil(8)
}

/// Number of bytes used to store a single `width` by `height` glyph.
pub const fn glyph_size(width: u8, height: u8) -> usize {
    row_stride(width) * height as usize
}

/// An error returned when packed glyph data is shorter than its dimensions require.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapLenError {
    /// The number of bytes required by the glyph dimensions
    pub expected: usize,
    /// The number of bytes provided
    pub actual: usize,
}

impl std::fmt::Display for BitmapLenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "packed bitmap too short: expected {} bytes, found {}",
            self.expected, self.actual
        )
    }
}

impl std::error::Error for BitmapLenError {}

/// A monochrome image, stored row-major.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelMatrix {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl PixelMatrix {
    /// Create a matrix with every pixel clear.
    pub fn new(width: usize, height: usize) -> Self {
        PixelMatrix {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    /// Create a matrix by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        PixelMatrix {
            width,
            height,
            pixels,
        }
    }

    /// Create a matrix from rows of text, where `#` marks a set pixel.
    ///
    /// The width is that of the longest row; shorter rows are padded with
    /// clear pixels.
    ///
    /// ```
    /// # use bmf_types::PixelMatrix;
    /// let dot = PixelMatrix::from_art(&[".#.", "###", ".#."]);
    /// assert!(dot.get(1, 0));
    /// assert!(!dot.get(0, 0));
    /// ```
    pub fn from_art(rows: &[&str]) -> Self {
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        Self::from_fn(width, rows.len(), |x, y| rows[y].chars().nth(x) == Some('#'))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if the pixel at `(x, y)` is set.
    ///
    /// Coordinates outside the matrix are clear.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.pixels[y * self.width + x]
    }

    /// Set or clear the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the matrix.
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.pixels[y * self.width + x] = value;
    }

    /// Iterate over the rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        // chunks panics on zero, and a zero-width matrix has no pixels anyway
        self.pixels.chunks(self.width.max(1)).take(self.height)
    }

    /// Returns `true` if no pixel is set.
    pub fn is_blank(&self) -> bool {
        !self.pixels.iter().any(|px| *px)
    }

    /// Copy out the `width` by `height` region whose top left corner is `(x, y)`.
    ///
    /// Pixels of the region that fall outside this matrix are clear.
    pub fn crop(&self, x: usize, y: usize, width: usize, height: usize) -> PixelMatrix {
        PixelMatrix::from_fn(width, height, |u, v| self.get(x + u, y + v))
    }

    /// Pack the matrix into bytes, one run of `ceil(width / 8)` bytes per row.
    pub fn pack(&self) -> Vec<u8> {
        let stride = self.width.div_ceil(8);
        let mut out = vec![0u8; stride * self.height];
        for (v, row) in self.rows().enumerate() {
            let line = &mut out[v * stride..(v + 1) * stride];
            for (u, _) in row.iter().enumerate().filter(|(_, px)| **px) {
                line[u >> 3] |= 0x80 >> (u & 7);
            }
        }
        out
    }

    /// Unpack a `width` by `height` bitmap produced by [`pack`](Self::pack).
    ///
    /// Trailing bytes past the end of the bitmap are ignored.
    pub fn unpack(bytes: &[u8], width: u8, height: u8) -> Result<Self, BitmapLenError> {
        let expected = glyph_size(width, height);
        if bytes.len() < expected {
            return Err(BitmapLenError {
                expected,
                actual: bytes.len(),
            });
        }
        let stride = row_stride(width);
        Ok(Self::from_fn(width as usize, height as usize, |u, v| {
            bytes[stride * v + (u >> 3)] & (1 << (7 - (u & 7))) != 0
        }))
    }
}

impl std::fmt::Debug for PixelMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "PixelMatrix({}x{})", self.width, self.height)?;
        for row in self.rows() {
            let line: String = row.iter().map(|px| if *px { '#' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(1, 1)]
    #[case(7, 1)]
    #[case(8, 1)]
    #[case(9, 2)]
    #[case(16, 2)]
    #[case(127, 16)]
    fn stride(#[case] width: u8, #[case] expected: usize) {
        assert_eq!(row_stride(width), expected);
    }

    #[test]
    fn pack_msb_first() {
        let glyph = PixelMatrix::from_art(&["#....", "....#", ".#.#."]);
        assert_eq!(glyph.pack(), vec![0b1000_0000, 0b0000_1000, 0b0101_0000]);
    }

    #[test]
    fn pack_multi_byte_rows() {
        let glyph = PixelMatrix::from_art(&["#........#", ".........#"]);
        assert_eq!(glyph.pack(), vec![0x80, 0x40, 0x00, 0x40]);
    }

    #[test]
    fn unpack_ignores_padding_bits() {
        // width 5: the low three bits of each byte are padding
        let glyph = PixelMatrix::unpack(&[0b1000_0111, 0b0000_1111], 5, 2).unwrap();
        assert_eq!(glyph, PixelMatrix::from_art(&["#....", "....#"]));
        assert_eq!(glyph.pack(), vec![0b1000_0000, 0b0000_1000]);
    }

    #[test]
    fn unpack_short_buffer() {
        assert_eq!(
            PixelMatrix::unpack(&[0xff; 13], 9, 7),
            Err(BitmapLenError {
                expected: 14,
                actual: 13
            })
        );
    }

    #[test]
    fn round_trip_irregular_widths() {
        for width in [1u8, 3, 8, 11, 17] {
            let height = 5u8;
            let glyph = PixelMatrix::from_fn(width as usize, height as usize, |x, y| {
                (x * 7 + y * 3) % 5 < 2
            });
            let packed = glyph.pack();
            assert_eq!(packed.len(), glyph_size(width, height));
            assert_eq!(PixelMatrix::unpack(&packed, width, height).unwrap(), glyph);
        }
    }

    #[test]
    fn crop_outside_is_clear() {
        let sheet = PixelMatrix::from_art(&["##", "##"]);
        let cell = sheet.crop(1, 1, 2, 2);
        assert_eq!(cell, PixelMatrix::from_art(&["#.", ".."]));
    }

    #[test]
    fn zero_sized() {
        let empty = PixelMatrix::new(0, 4);
        assert!(empty.pack().is_empty());
        assert!(empty.is_blank());
        assert_eq!(PixelMatrix::unpack(&[], 0, 4).unwrap(), empty);
    }
}
