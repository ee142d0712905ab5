//! UTF-8 text converter.
//!
//! Text is the general staged case: the caller usually needs the encoded
//! size before the destination exists, so `size_of` can render the whole
//! record into a [`Staging`] buffer and `write_to` degenerates to a raw
//! copy. When a destination is already known, `write_to` encodes straight
//! into it and the staging buffer is skipped entirely.
//!
//! Rust strings are stored as UTF-8, so the encoded payload length is
//! `value.len()` exactly; no transcoding pass or upper-bound working
//! buffer is required to compute it.

use strata_core::{ConvertError, DestView, SrcView};

use crate::convert::{
    copy_staged, read_record, write_record, BinaryConverter, MAX_PAYLOAD, RECORD_HEADER_SIZE,
};
use crate::pool::Staging;

const VERSION: i32 = 0;

/// Converter for UTF-8 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Converter;

impl BinaryConverter for Utf8Converter {
    type Value = String;

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
        if let Some(staging) = staging {
            staging.render(VERSION, value.as_bytes())?;
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
        write_record(dst, VERSION, value.as_bytes())
    }

    fn read_from(&self, src: &mut SrcView<'_>) -> Result<Self::Value, ConvertError> {
        let payload = read_record(src, VERSION)?;
        Ok(std::str::from_utf8(payload)?.to_owned())
    }
}
