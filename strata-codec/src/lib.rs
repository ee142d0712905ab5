//! # strata-codec
//!
//! Typed binary converters that serialize values directly into and out of
//! caller-supplied memory regions, without a generic reflection-based
//! serializer in between.
//!
//! This crate provides:
//! - `BinaryConverter` - the shared converter contract
//! - `RawBytesConverter`, `Utf8Converter`, `GrowableBufConverter`,
//!   `FixedArrayConverter` - the concrete converters
//! - `BufferPool` / `Staging` - pooled and thread-local working buffers
//!
//! ## Record Format
//!
//! ```text
//! +-----------------+-----------------+-------------------+
//! | Version (4 LE)  | Length (4 LE)   | Payload (N bytes) |
//! +-----------------+-----------------+-------------------+
//! ```
//!
//! Version and length are 32-bit signed little-endian integers; the total
//! record size is `8 + length`.
//!
//! ## Emission strategies
//!
//! When the destination region already exists, a converter encodes
//! straight into it. When the destination must be sized first, the caller
//! passes a [`Staging`] buffer to [`BinaryConverter::size_of`]; the
//! converter renders the whole record into it, and the later
//! [`BinaryConverter::write_to`] degenerates to a single copy.

mod array;
mod bytes;
mod convert;
mod growable;
mod pool;
mod text;

pub use array::FixedArrayConverter;
pub use bytes::RawBytesConverter;
pub use convert::{BinaryConverter, MAX_PAYLOAD, RECORD_HEADER_SIZE};
pub use growable::GrowableBufConverter;
pub use pool::{BufferPool, PooledBuffer, Staging, SMALL_BUFFER_SIZE};
pub use text::Utf8Converter;

// Re-export for convenience
pub use ntex_bytes::BytesMut;
