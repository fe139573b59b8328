//! A module containing [`Vector`] and associated types.
//!
//! Besides the Vector itself, this includes [`IntoIter`] for owned iteration and the growth policy,
//! [`next_cap`], which decides how much a full Vector grows by. [`IterMut`](std::slice::IterMut)
//! and [`Iter`](std::slice::Iter) from [`std::slice`] are used for borrowed iteration.
//!
//! [`Vector`] is also re-exported under the parent module.

mod growth;
mod iter;
mod tests;
mod vector;

pub use growth::*;
pub use iter::*;
pub use vector::*;
