use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::mem::{self, ManuallyDrop, MaybeUninit};
use std::ptr;
use std::slice;

use super::Vector;
use crate::collections::contiguous::OwnedBuffer;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        // The buffer is moved into the iterator, so the Vector must not drop its elements.
        let mut vec = ManuallyDrop::new(self);
        IntoIter {
            buf: mem::take(&mut vec.buf),
            start: 0,
            end: vec.len,
        }
    }
}

/// An owned type for owned iteration over a [`Vector`]. See [`Vector::into_iter`].
///
/// Holds on to the Vector's buffer and yields from both ends of the initialized range. Any
/// elements that haven't been yielded are dropped along with the iterator.
pub struct IntoIter<T> {
    pub(crate) buf: OwnedBuffer<MaybeUninit<T>>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the elements that are yet to be yielded as a slice.
    pub const fn as_slice(&self) -> &[T] {
        // SAFETY: [start, end) is initialized and within the buffer.
        unsafe {
            slice::from_raw_parts(
                self.buf.ptr.as_ptr().add(self.start).cast(),
                self.end - self.start,
            )
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Only the elements in [start, end) are still owned by the iterator.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.ptr.as_ptr().add(self.start).cast::<T>(),
                self.end - self.start,
            ));
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start is within the initialized range. Incrementing start afterwards means
            // the value is effectively moved out of the buffer.
            let value = unsafe { self.buf.get_unchecked(self.start).assume_init_read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The newly decremented end is within the initialized range and is now
            // outside of it, so it won't be read again.
            Some(unsafe { self.buf.get_unchecked(self.end).assume_init_read() })
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
