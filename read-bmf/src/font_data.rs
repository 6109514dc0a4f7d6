//! raw font bytes

use std::ops::{Bound, RangeBounds};

use bytemuck::AnyBitPattern;

use crate::read::ReadError;

/// A reference to raw binary font data.
///
/// This is a wrapper around a byte slice, that provides convenience methods
/// for slicing and validating that data while remembering where in the
/// original file a given slice started.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FontData<'a> {
    total_pos: usize,
    bytes: &'a [u8],
}

impl<'a> FontData<'a> {
    /// Create a new `FontData` with these bytes.
    pub const fn new(bytes: &'a [u8]) -> Self {
        FontData {
            total_pos: 0,
            bytes,
        }
    }

    /// The length of the data, in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if the data has a length of zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The position of the start of this data in the file it was sliced from.
    pub fn position(&self) -> usize {
        self.total_pos
    }

    pub fn split_off(&self, pos: usize) -> Option<FontData<'a>> {
        self.bytes.get(pos..).map(|bytes| FontData {
            bytes,
            total_pos: self.total_pos.saturating_add(pos),
        })
    }

    pub fn slice(&self, range: impl RangeBounds<usize>) -> Option<FontData<'a>> {
        let start = match range.start_bound() {
            Bound::Unbounded => 0,
            Bound::Included(i) => *i,
            Bound::Excluded(i) => i.saturating_add(1),
        };

        let bounds = (range.start_bound().cloned(), range.end_bound().cloned());
        let total_pos = self.total_pos.saturating_add(start);
        self.bytes
            .get(bounds)
            .map(|bytes| FontData { bytes, total_pos })
    }

    /// Interpret the bytes at `offset` as a reference to some type `T`.
    ///
    /// `T` must have an alignment of one, which holds for the byte structs
    /// found in font files.
    pub fn read_ref_at<T: AnyBitPattern>(&self, offset: usize) -> Result<&'a T, ReadError> {
        let bytes = self
            .bytes
            .get(offset..offset + std::mem::size_of::<T>())
            .ok_or(ReadError::OutOfBounds)?;
        bytemuck::try_from_bytes(bytes).map_err(|_| ReadError::OutOfBounds)
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}
