//! A hand-written growable array, built from the allocator up.
//!
//! # Purpose
//! This crate implements [`Vector`](collections::contiguous::Vector), a contiguous, growable,
//! random-access sequence, on top of [`OwnedBuffer`](collections::contiguous::OwnedBuffer), a
//! single-owner handle to one block of memory. Neither type delegates to [`Vec`]: every allocation,
//! move and drop is done by hand with [`std::alloc`] and [`std::ptr`].
//!
//! # Method
//! The two layers are kept strictly apart. The buffer only knows how big its block is and how to
//! allocate, free and hand it over. The Vector owns exactly one buffer and decides when it needs a
//! bigger one, moving its elements across to the replacement before releasing the old block.
//!
//! # Error Handling
//! Much like a standard library, most methods panic rather than forcing a [`Result`] on every
//! call. Pushing into a Vector shouldn't need an error handler for the (practically impossible)
//! capacity overflow. Each growing method has a `try_` counterpart which reports an
//! [`AllocError`](collections::contiguous::AllocError) instead, leaving the Vector exactly as it
//! was.
//!
//! Errors are strongly typed: small structs that implement [`Error`](std::error::Error), unified
//! by enums for static dispatch.
//!
//! Contract violations, such as popping from an empty Vector or inserting past its end, are
//! programmer errors and always panic.
//!
//! # Dependencies
//! Some derive macros (`derive_more`) remove repetitive error boilerplate and the `log` facade
//! reports allocations at `trace` level. No logger is installed by this crate.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::missing_const_for_fn)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
