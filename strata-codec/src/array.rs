//! Homogeneous array converter for fixed-size element types.
//!
//! Built generically over the [`FixedSize`] registry: the element's
//! constant encoded size and version come from its registry entry. Only
//! the size contract is implemented; the element payload path is an
//! extension point and reports [`ConvertError::NotImplemented`].

use std::marker::PhantomData;

use strata_core::{ConvertError, DestView, FixedSize, SrcView};

use crate::convert::{BinaryConverter, MAX_PAYLOAD};
use crate::pool::Staging;

/// Converter for arrays of a fixed-size element type.
#[derive(Debug)]
pub struct FixedArrayConverter<E: FixedSize> {
    _elem: PhantomData<fn() -> E>,
}

impl<E: FixedSize> Clone for FixedArrayConverter<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: FixedSize> Copy for FixedArrayConverter<E> {}

impl<E: FixedSize> Default for FixedArrayConverter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: FixedSize> FixedArrayConverter<E> {
    /// Create a converter for arrays of `E`.
    ///
    /// Variable-size element types are only rejected at first use; prefer
    /// [`try_new`](Self::try_new) to surface the configuration error at
    /// construction.
    #[must_use]
    pub const fn new() -> Self {
        Self { _elem: PhantomData }
    }

    /// Create a converter, rejecting element types without a fixed size.
    pub fn try_new() -> Result<Self, ConvertError> {
        if E::SIZE == 0 {
            return Err(ConvertError::UnsupportedElementType {
                type_name: std::any::type_name::<E>(),
            });
        }
        Ok(Self::new())
    }
}

impl<E: FixedSize> BinaryConverter for FixedArrayConverter<E> {
    type Value = Vec<E>;

    fn fixed_size(&self) -> usize {
        0
    }

    fn version(&self) -> i32 {
        E::VERSION
    }

    /// `element size x array length`, with no record header: fixed-size
    /// payloads omit it.
    fn size_of(
        &self,
        value: &Self::Value,
        staging: Option<&mut Staging>,
    ) -> Result<usize, ConvertError> {
        if E::SIZE == 0 {
            return Err(ConvertError::UnsupportedElementType {
                type_name: std::any::type_name::<E>(),
            });
        }
        // The size is known without rendering anything
        if let Some(staging) = staging {
            staging.clear();
        }
        let total = E::SIZE.saturating_mul(value.len());
        if total > MAX_PAYLOAD {
            return Err(ConvertError::SizeOverflow { len: total });
        }
        Ok(total)
    }

    fn write_to(
        &self,
        _value: &Self::Value,
        _dst: &mut DestView<'_>,
        _staging: Option<&Staging>,
    ) -> Result<usize, ConvertError> {
        Err(ConvertError::NotImplemented(
            "fixed-size element array payload",
        ))
    }

    fn read_from(&self, _src: &mut SrcView<'_>) -> Result<Self::Value, ConvertError> {
        Err(ConvertError::NotImplemented(
            "fixed-size element array payload",
        ))
    }
}
