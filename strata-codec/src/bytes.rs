//! Raw byte sequence converter.
//!
//! The identity case: the payload already is a byte sequence, so encoding
//! is a verbatim copy behind the record header. The other converters are
//! measured against this baseline.

use strata_core::{ConvertError, DestView, SrcView};

use crate::convert::{
    copy_staged, read_record, write_record, BinaryConverter, MAX_PAYLOAD, RECORD_HEADER_SIZE,
};
use crate::pool::Staging;

const VERSION: i32 = 0;

/// Converter for plain byte sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawBytesConverter;

impl BinaryConverter for RawBytesConverter {
    type Value = Vec<u8>;

    fn fixed_size(&self) -> usize {
        0
    }

    fn version(&self) -> i32 {
        VERSION
    }

    /// No staging is needed: the payload is copied directly on write.
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
        Ok(read_record(src, VERSION)?.to_vec())
    }
}
