//! Error types for the Strata converter layer.

/// Errors raised by binary converters and memory views.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConvertError {
    /// Decoded header version does not match the converter's declared version.
    #[error("unsupported record version: found {found}, expected {expected}")]
    UnsupportedVersion {
        /// Version read from the record header
        found: i32,
        /// Version the converter declares
        expected: i32,
    },

    /// Payload length exceeds the 32-bit signed range of the record header.
    #[error("payload too large for record header: {len} bytes")]
    SizeOverflow {
        /// Actual payload length
        len: usize,
    },

    /// Record header carries a negative payload length.
    #[error("invalid record length: {0}")]
    InvalidLength(i32),

    /// Array converter constructed over an element type without a fixed size.
    #[error("unsupported element type (variable size): {type_name}")]
    UnsupportedElementType {
        /// Name of the offending element type
        type_name: &'static str,
    },

    /// Explicitly unimplemented payload path.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    /// Destination view ran out of writable bytes.
    #[error("destination too small: need {needed} bytes, have {available}")]
    DestinationTooSmall {
        /// Bytes required by the write
        needed: usize,
        /// Bytes left in the view
        available: usize,
    },

    /// Source view ran out of readable bytes mid-record.
    #[error("source truncated: need {needed} bytes, have {available}")]
    SourceTruncated {
        /// Bytes required by the read
        needed: usize,
        /// Bytes left in the view
        available: usize,
    },

    /// Decoded text payload is not valid UTF-8.
    #[error("invalid utf-8 payload: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}
