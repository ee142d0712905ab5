//! # strata-core
//!
//! Core types for the Strata binary converter layer.
//!
//! This crate provides:
//! - Error types (`ConvertError`)
//! - Bounds-checked memory views (`DestView`, `SrcView`)
//! - The per-type fixed-size/version registry (`FixedSize`)

mod error;
mod typesize;
mod view;

pub use error::ConvertError;
pub use typesize::{fixed_size_of, version_of, FixedSize};
pub use view::{DestView, SrcView};
