//! Per-type encoded-size and version registry.
//!
//! The registry reports, for a value type, whether it has a constant
//! encoded size (and what it is) plus a wire-format version tag. Types
//! with no constant size register a `SIZE` of zero. The lookup is
//! resolved at compile time through associated constants, so there is
//! no runtime cache to initialize or invalidate.

/// Registry entry for a serializable type.
///
/// `SIZE == 0` means the encoded size varies per value.
pub trait FixedSize {
    /// Constant encoded size in bytes, or 0 when variable.
    const SIZE: usize;

    /// Wire-format version tag for the type.
    const VERSION: i32;
}

macro_rules! impl_fixed_size {
    ($($ty:ty => $size:expr),* $(,)?) => {
        $(
            impl FixedSize for $ty {
                const SIZE: usize = $size;
                const VERSION: i32 = 0;
            }
        )*
    };
}

impl_fixed_size! {
    u8 => 1,
    i8 => 1,
    u16 => 2,
    i16 => 2,
    u32 => 4,
    i32 => 4,
    u64 => 8,
    i64 => 8,
    f32 => 4,
    f64 => 8,
}

// Variable-size types register a size of zero.
impl_fixed_size! {
    String => 0,
    Vec<u8> => 0,
}

/// Constant encoded size of `T`, or 0 when variable.
#[must_use]
pub const fn fixed_size_of<T: FixedSize>() -> usize {
    T::SIZE
}

/// Wire-format version tag of `T`.
#[must_use]
pub const fn version_of<T: FixedSize>() -> i32 {
    T::VERSION
}
