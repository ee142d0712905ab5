//! Bounds-checked views over caller-owned memory.
//!
//! Converters never touch raw addresses. Writes go through a [`DestView`]
//! and reads through a [`SrcView`], both of which know the extent of the
//! underlying region and fail instead of walking past it.

use crate::error::ConvertError;

/// A writable window over a caller-supplied memory region.
///
/// The caller guarantees the region is at least `size_of(value)` bytes;
/// the view turns a violation of that obligation into
/// [`ConvertError::DestinationTooSmall`] rather than undefined behavior.
pub struct DestView<'a> {
    mem: &'a mut [u8],
    pos: usize,
}

impl<'a> DestView<'a> {
    /// Create a view over the whole region.
    #[must_use]
    pub fn new(mem: &'a mut [u8]) -> Self {
        Self { mem, pos: 0 }
    }

    /// Number of bytes written so far.
    #[inline]
    #[must_use]
    pub fn written(&self) -> usize {
        self.pos
    }

    /// Number of writable bytes left.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.mem.len() - self.pos
    }

    #[inline]
    fn ensure(&self, needed: usize) -> Result<(), ConvertError> {
        if needed > self.remaining() {
            return Err(ConvertError::DestinationTooSmall {
                needed,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    /// Write a 32-bit signed integer, little-endian.
    pub fn write_i32(&mut self, v: i32) -> Result<(), ConvertError> {
        self.write_slice(&v.to_le_bytes())
    }

    /// Write a byte slice verbatim.
    pub fn write_slice(&mut self, bytes: &[u8]) -> Result<(), ConvertError> {
        self.ensure(bytes.len())?;
        self.mem[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }
}

/// A readable window over a caller-supplied memory region.
pub struct SrcView<'a> {
    mem: &'a [u8],
    pos: usize,
}

impl<'a> SrcView<'a> {
    /// Create a view over the whole region.
    #[must_use]
    pub fn new(mem: &'a [u8]) -> Self {
        Self { mem, pos: 0 }
    }

    /// Number of readable bytes left.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.mem.len() - self.pos
    }

    #[inline]
    fn ensure(&self, needed: usize) -> Result<(), ConvertError> {
        if needed > self.remaining() {
            return Err(ConvertError::SourceTruncated {
                needed,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    /// Read a 32-bit signed integer, little-endian.
    pub fn read_i32(&mut self) -> Result<i32, ConvertError> {
        let bytes = self.read_slice(4)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read `len` bytes, borrowing them from the underlying region.
    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8], ConvertError> {
        self.ensure(len)?;
        let slice = &self.mem[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }
}
