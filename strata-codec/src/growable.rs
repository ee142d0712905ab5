//! Growable byte buffer converter.
//!
//! Wraps an already-accumulated [`BytesMut`] rather than a plain byte
//! sequence. The buffer's bytes are contiguous, so the payload is written
//! with a single bulk copy; the wire output is identical to copying it
//! unit by unit.

use ntex_bytes::BytesMut;

use strata_core::{ConvertError, DestView, SrcView};

use crate::convert::{
    copy_staged, read_record, write_record, BinaryConverter, MAX_PAYLOAD, RECORD_HEADER_SIZE,
};
use crate::pool::Staging;

const VERSION: i32 = 0;

/// Converter for growable byte buffers.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrowableBufConverter;

impl BinaryConverter for GrowableBufConverter {
    type Value = BytesMut;

    fn fixed_size(&self) -> usize {
        0
    }

    fn version(&self) -> i32 {
        VERSION
    }

    fn size_of(
        &self,
        value: &Self::Value,
        staging: Option<&mut Staging>,
    ) -> Result<usize, ConvertError> {
        if value.len() > MAX_PAYLOAD {
            return Err(ConvertError::SizeOverflow { len: value.len() });
        }
        // Leftover content from an earlier encode must not reach write_to
        if let Some(staging) = staging {
            staging.clear();
        }
        Ok(RECORD_HEADER_SIZE + value.len())
    }

    fn write_to(
        &self,
        value: &Self::Value,
        dst: &mut DestView<'_>,
        staging: Option<&Staging>,
    ) -> Result<usize, ConvertError> {
        if let Some(staged) = staging.and_then(Staging::rendered) {
            return copy_staged(dst, staged);
        }
        write_record(dst, VERSION, value)
    }

    fn read_from(&self, src: &mut SrcView<'_>) -> Result<Self::Value, ConvertError> {
        let payload = read_record(src, VERSION)?;
        let mut buf = BytesMut::with_capacity(payload.len());
        buf.extend_from_slice(payload);
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let converter = GrowableBufConverter;
        let mut value = BytesMut::new();
        value.extend_from_slice(&[1u8, 2, 3, 4, 5]);

        let size = converter.size_of(&value, None).unwrap();
        assert_eq!(size, RECORD_HEADER_SIZE + 5);

        let mut mem = vec![0u8; size];
        let written = converter
            .write_to(&value, &mut DestView::new(&mut mem), None)
            .unwrap();
        assert_eq!(written, size);

        let decoded = converter.read_from(&mut SrcView::new(&mem)).unwrap();
        assert_eq!(&decoded[..], &[1u8, 2, 3, 4, 5]);
    }

    #[test]
    fn test_header_invariant() {
        let converter = GrowableBufConverter;
        let mut value = BytesMut::new();
        value.extend_from_slice(b"payload");

        let mut mem = vec![0u8; RECORD_HEADER_SIZE + 7];
        converter
            .write_to(&value, &mut DestView::new(&mut mem), None)
            .unwrap();

        assert_eq!(&mem[0..4], &0i32.to_le_bytes());
        assert_eq!(&mem[4..8], &7i32.to_le_bytes());
        assert_eq!(&mem[8..], b"payload");
    }

    #[test]
    fn test_empty_buffer() {
        let converter = GrowableBufConverter;
        let value = BytesMut::new();

        let size = converter.size_of(&value, None).unwrap();
        assert_eq!(size, RECORD_HEADER_SIZE);

        let mut mem = vec![0u8; size];
        converter
            .write_to(&value, &mut DestView::new(&mut mem), None)
            .unwrap();

        let decoded = converter.read_from(&mut SrcView::new(&mem)).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_stale_staging_is_discarded() {
        use crate::pool::BufferPool;
        use crate::text::Utf8Converter;

        let pool = BufferPool::new();
        let mut staging = Staging::new(&pool);

        // A previous text encode leaves a rendered record behind
        Utf8Converter
            .size_of(&"stale".to_owned(), Some(&mut staging))
            .unwrap();

        let converter = GrowableBufConverter;
        let mut value = BytesMut::new();
        value.extend_from_slice(&[9u8, 8, 7]);

        let size = converter.size_of(&value, Some(&mut staging)).unwrap();
        let mut mem = vec![0u8; size];
        converter
            .write_to(&value, &mut DestView::new(&mut mem), Some(&staging))
            .unwrap();

        let decoded = converter.read_from(&mut SrcView::new(&mem)).unwrap();
        assert_eq!(&decoded[..], &[9u8, 8, 7]);
    }

    #[test]
    fn test_version_mismatch_rejected() {
        let converter = GrowableBufConverter;

        let mut mem = vec![0u8; 8];
        let mut dst = DestView::new(&mut mem);
        dst.write_i32(1).unwrap();
        dst.write_i32(0).unwrap();

        let err = converter.read_from(&mut SrcView::new(&mem)).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::UnsupportedVersion {
                found: 1,
                expected: 0
            }
        ));
    }
}
