//! Contiguous collection types. [`OwnedBuffer`] owns a single block of memory and [`Vector`]
//! builds a growable sequence on top of one.
#![warn(missing_docs)]

pub mod buffer;
pub mod vector;

#[doc(inline)]
pub use buffer::OwnedBuffer;
#[doc(inline)]
pub use vector::Vector;

#[doc(inline)]
pub use crate::util::error::{AllocError, CapacityOverflow, IndexOutOfBounds, OutOfMemory};
