//! A module containing [`OwnedBuffer`], the single-owner memory block underneath
//! [`Vector`](super::Vector).
//!
//! Borrowed iteration and bounds-checked indexing come from
//! [`Deref<Target = [T]>`](std::ops::Deref). There is no owned iterator, because the buffer doesn't
//! know which of its slots are in use.
//!
//! [`OwnedBuffer`] is also re-exported under the parent module.

mod buffer;

pub use buffer::*;
