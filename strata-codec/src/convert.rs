//! The binary converter contract.

use strata_core::{ConvertError, DestView, SrcView};

use crate::pool::Staging;

/// Size of the `[version][length]` record header in bytes.
pub const RECORD_HEADER_SIZE: usize = 8;

/// Maximum payload length representable in the record header.
pub const MAX_PAYLOAD: usize = i32::MAX as usize;

/// Common operation set implemented by every converter.
///
/// Converters are stateless and safe to share across concurrent callers;
/// the only mutable state they touch is the staging buffer the caller
/// lends them for the duration of one `size_of`/`write_to` pair.
pub trait BinaryConverter {
    /// The in-memory value type this converter handles.
    type Value;

    /// Constant encoded size in bytes, or 0 when the size varies per value.
    fn fixed_size(&self) -> usize;

    /// Whether the encoded size is constant.
    fn is_fixed_size(&self) -> bool {
        self.fixed_size() > 0
    }

    /// Version tag written into (and expected in) the record header.
    fn version(&self) -> i32;

    /// Exact number of bytes the encoded record will occupy.
    ///
    /// When `staging` is supplied and the converter needs to materialize
    /// the payload before the destination exists, the fully-rendered
    /// record (header included) is left in the staging buffer; passing
    /// the same staging buffer to [`write_to`](Self::write_to) then turns
    /// the write into a raw copy.
    ///
    /// Fails with [`ConvertError::SizeOverflow`] when the payload would
    /// not fit the 32-bit signed length field.
    fn size_of(
        &self,
        value: &Self::Value,
        staging: Option<&mut Staging>,
    ) -> Result<usize, ConvertError>;

    /// Write the encoded record at the view's cursor.
    ///
    /// With a rendered `staging` buffer the record is copied verbatim;
    /// otherwise the value is encoded directly into the destination.
    /// Returns the number of bytes written, which always equals
    /// [`size_of`](Self::size_of) for the same value.
    fn write_to(
        &self,
        value: &Self::Value,
        dst: &mut DestView<'_>,
        staging: Option<&Staging>,
    ) -> Result<usize, ConvertError>;

    /// Reconstruct a value from an encoded record at the view's cursor.
    ///
    /// Fails with [`ConvertError::UnsupportedVersion`] when the header
    /// version does not match [`version`](Self::version); the payload is
    /// not interpreted in that case. Never reads past `8 + length` bytes.
    fn read_from(&self, src: &mut SrcView<'_>) -> Result<Self::Value, ConvertError>;
}

/// Encode a whole record directly into the destination.
///
/// The length is validated and the destination capacity checked before
/// any byte is written, so a failure leaves the region untouched.
pub(crate) fn write_record(
    dst: &mut DestView<'_>,
    version: i32,
    payload: &[u8],
) -> Result<usize, ConvertError> {
    if payload.len() > MAX_PAYLOAD {
        return Err(ConvertError::SizeOverflow { len: payload.len() });
    }
    let total = RECORD_HEADER_SIZE + payload.len();
    if total > dst.remaining() {
        return Err(ConvertError::DestinationTooSmall {
            needed: total,
            available: dst.remaining(),
        });
    }
    dst.write_i32(version)?;
    dst.write_i32(payload.len() as i32)?;
    dst.write_slice(payload)?;
    Ok(total)
}

/// Copy a pre-rendered record (header included) verbatim.
pub(crate) fn copy_staged(dst: &mut DestView<'_>, staged: &[u8]) -> Result<usize, ConvertError> {
    dst.write_slice(staged)?;
    Ok(staged.len())
}

/// Validate the header and borrow the payload of the record at the cursor.
pub(crate) fn read_record<'a>(
    src: &mut SrcView<'a>,
    expected: i32,
) -> Result<&'a [u8], ConvertError> {
    let found = src.read_i32()?;
    if found != expected {
        return Err(ConvertError::UnsupportedVersion { found, expected });
    }
    let len = src.read_i32()?;
    let len = usize::try_from(len).map_err(|_| ConvertError::InvalidLength(len))?;
    src.read_slice(len)
}
