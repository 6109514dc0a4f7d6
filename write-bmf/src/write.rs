use bmf_types::RawHeader;

use crate::validate::{Validate, ValidationReport};

/// A type that can be written out as part of a font file.
pub trait FontWrite {
    /// Write our data into this [FontWriter].
    fn write_into(&self, writer: &mut FontWriter);
}

/// A growable buffer that font objects are serialized into.
#[derive(Debug, Default)]
pub struct FontWriter {
    bytes: Vec<u8>,
}

/// Attempt to serialize a font object.
///
/// If the object is malformed, this will return an Err([`ValidationReport`]),
/// otherwise it will return the encoded bytes.
pub fn dump_font<T: FontWrite + Validate>(font: &T) -> Result<Vec<u8>, ValidationReport> {
    font.validate()?;
    let mut writer = FontWriter::default();
    font.write_into(&mut writer);
    Ok(writer.into_data())
}

impl FontWriter {
    /// Write raw bytes.
    #[inline]
    pub fn write_slice(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes)
    }

    /// The number of bytes written so far.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub(crate) fn into_data(self) -> Vec<u8> {
        self.bytes
    }
}

impl FontWrite for u8 {
    fn write_into(&self, writer: &mut FontWriter) {
        writer.write_slice(&[*self])
    }
}

impl<T: FontWrite> FontWrite for [T] {
    fn write_into(&self, writer: &mut FontWriter) {
        self.iter().for_each(|item| item.write_into(writer))
    }
}

impl<T: FontWrite> FontWrite for Vec<T> {
    fn write_into(&self, writer: &mut FontWriter) {
        self.as_slice().write_into(writer)
    }
}

impl FontWrite for RawHeader {
    fn write_into(&self, writer: &mut FontWriter) {
        writer.write_slice(&self.to_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_header_and_bytes() {
        let mut writer = FontWriter::default();
        RawHeader::new(false, 5, 7, 32).write_into(&mut writer);
        vec![1u8, 2, 3].write_into(&mut writer);
        assert_eq!(writer.len(), 6);
        assert_eq!(writer.into_data(), vec![0x85, 0x07, 0x20, 1, 2, 3]);
    }
}
