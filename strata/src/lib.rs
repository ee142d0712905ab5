//! # Strata
//!
//! Typed binary converters for serializing values directly into and out
//! of caller-supplied memory regions.
//!
//! Strata provides:
//! - **A stable, versioned record layout** usable for memory-mapped or
//!   unmanaged storage: `[version: 4 LE][length: 4 LE][payload]`
//! - **Zero incidental allocation** on the hot path for variable-length
//!   types, via a thread-local scratch buffer and a shared buffer pool
//! - **Two emission strategies**: direct in-place writes when the total
//!   size is known up front, and staged writes through a pooled buffer
//!   when the size must be computed before the destination is sized
//!
//! ## Quick Start
//!
//! ```rust
//! use strata::{BinaryConverter, DestView, SrcView, Utf8Converter};
//!
//! let converter = Utf8Converter;
//! let value = "abc".to_owned();
//!
//! // Size, then write into a destination of exactly that size
//! let size = converter.size_of(&value, None).unwrap();
//! let mut region = vec![0u8; size];
//! converter
//!     .write_to(&value, &mut DestView::new(&mut region), None)
//!     .unwrap();
//!
//! // Read it back
//! let decoded = converter.read_from(&mut SrcView::new(&region)).unwrap();
//! assert_eq!(decoded, "abc");
//! ```
//!
//! ## Architecture
//!
//! Strata is composed of two crates:
//!
//! - `strata-core` - Error types, bounds-checked memory views, and the
//!   per-type fixed-size/version registry
//! - `strata-codec` - The converter contract, the buffer pool, and the
//!   concrete converters

// Re-export core types
pub use strata_core::{fixed_size_of, version_of, ConvertError, DestView, FixedSize, SrcView};

// Re-export the converter contract and converters
pub use strata_codec::{
    BinaryConverter, FixedArrayConverter, GrowableBufConverter, RawBytesConverter, Utf8Converter,
    MAX_PAYLOAD, RECORD_HEADER_SIZE,
};

// Re-export working buffers
pub use strata_codec::{BufferPool, BytesMut, PooledBuffer, Staging, SMALL_BUFFER_SIZE};

/// Prelude module for convenient imports.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BinaryConverter, BufferPool, ConvertError, DestView, FixedSize, SrcView, Staging,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
