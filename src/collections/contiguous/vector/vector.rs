use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use log::trace;

use super::next_cap;
use crate::collections::contiguous::OwnedBuffer;
use crate::util::error::{AllocError, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A variable size contiguous collection, based on a single [`OwnedBuffer`].
///
/// The Vector tracks a length alongside the buffer's size, its capacity. Slots below the length
/// hold initialized elements, slots between the length and the capacity are uninitialized and
/// never read.
///
/// # Growth
/// When a push or insert finds the Vector full, the capacity grows according to
/// [`next_cap`]: to `1` from an empty Vector, and to double the length otherwise. Starting from
/// empty, repeated pushes produce capacities of `1, 2, 4, 8, ...`. Capacity never shrinks except
/// when the Vector is [taken](Vector::take) or exchanges its buffer through
/// [`swap_with`](Vector::swap_with).
///
/// Growing always allocates a new buffer, moves every element across and then frees the old one.
/// If the allocation fails, the Vector is left exactly as it was.
///
/// # References and Reallocation
/// Any reference into the Vector, including the ones returned by [`insert`](Vector::insert) and
/// [`erase`](Vector::erase), is invalidated by the next mutating method. The borrow checker
/// enforces this, so there is no way to observe a dangling position.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `push_unchecked` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)`*, `O(n)` |
/// | `remove` / `erase` | `O(n-i)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `resize` | `O(n)` |
/// | `swap_with` / `take` | `O(1)` |
/// | `clone` | `O(n)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, it has to be reallocated.
///
/// \** If the Vector already has the requested capacity, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) buf: OwnedBuffer<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            buf: OwnedBuffer::new(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value and length 0,
    /// allowing values to be added without reallocation.
    ///
    /// # Panics
    /// Panics if the allocation fails, see [`Vector::try_with_cap`].
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(100);
    /// vec.extend([1, 2, 3]);
    /// assert_eq!(vec.len(), 3);
    /// assert_eq!(vec.cap(), 100);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Self::try_with_cap(cap).throw()
    }

    /// Creates a new Vector with capacity exactly equal to the provided value and length 0.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the buffer can't be allocated.
    pub fn try_with_cap(cap: usize) -> Result<Vector<T>, AllocError> {
        Ok(Vector {
            buf: OwnedBuffer::<T>::try_new_uninit(cap)?,
            len: 0,
        })
    }

    /// Creates a new Vector holding `count` clones of `value`, with capacity equal to `count`.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Vector;
    /// let vec = Vector::repeat(7, 5);
    /// assert_eq!(&*vec, &[7, 7, 7, 7, 7]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn repeat(value: T, count: usize) -> Vector<T>
    where
        T: Clone,
    {
        let mut vec = Vector::with_cap(count);
        vec.fill_to(count, || value.clone());
        vec
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. Unlike [`Vec`], the capacity is always exactly
    /// what the growth policy or the last capacity request produced.
    pub const fn cap(&self) -> usize {
        self.buf.size()
    }

    /// Returns a reference to the element at `index`, or an [`IndexOutOfBounds`] error if the
    /// index isn't less than the length.
    ///
    /// Indexing with `vec[index]` is the unchecked counterpart, which panics instead.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Vector;
    /// let vec = Vector::from([1, 2, 3]);
    /// assert_eq!(vec.at(2), Ok(&3));
    /// assert!(vec.at(3).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        (**self).get(index).ok_or(IndexOutOfBounds {
            index,
            len: self.len,
        })
    }

    /// Returns a mutable reference to the element at `index`, or an [`IndexOutOfBounds`] error if
    /// the index isn't less than the length.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        (**self).get_mut(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the Vector needs to grow and the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Vector;
    /// let mut vec = Vector::new();
    /// vec.push(10);
    /// vec.push(20);
    /// assert_eq!(&*vec, &[10, 20]);
    /// assert_eq!(vec.cap(), 2);
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the Vector needs to grow and the allocation fails. The Vector
    /// is unchanged and `value` is dropped.
    pub fn try_push(&mut self, value: T) -> Result<(), AllocError> {
        if self.len == self.cap() {
            self.try_grow()?;
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
        Ok(())
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the provided
    /// value, using methods like [`reserve`](Vector::reserve) or [`with_cap`](Vector::with_cap).
    /// Using this method on a full Vector is undefined behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: The caller guarantees that len < cap, so the slot is within the buffer.
        unsafe { self.buf.get_unchecked_mut(self.len).write(value); }
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning it if the Vector wasn't empty.
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2]);
    /// assert_eq!(vec.pop(), Some(2));
    /// assert_eq!(vec.pop(), Some(1));
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading.
            self.len -= 1;

            // SAFETY: The slot at the old len - 1 is initialized, and is now outside of the
            // length, so it won't be read or dropped again.
            Some(unsafe { self.buf.get_unchecked(self.len).assume_init_read() })
        }
    }

    /// Removes and returns the last value of the Vector. Popping from an empty Vector is a
    /// contract violation, check [`is_empty`](Vector::is_empty) first or use
    /// [`pop`](Vector::pop).
    ///
    /// # Panics
    /// Panics if the Vector is empty.
    #[track_caller]
    pub fn pop_back(&mut self) -> T {
        assert!(!self.is_empty(), "Attempted to pop from an empty Vector!");
        // SAFETY: The Vector isn't empty, so pop returns Some.
        unsafe { self.pop().unwrap_unchecked() }
    }

    /// Inserts the provided value at `index`, shifting every following element up by one. An
    /// `index` equal to the length appends the value. Returns a reference to the inserted element.
    ///
    /// # Panics
    /// Panics if `index > len`, or if the Vector needs to grow and the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Vector;
    /// let mut vec = Vector::from([10, 20]);
    /// assert_eq!(*vec.insert(1, 15), 15);
    /// assert_eq!(&*vec, &[10, 15, 20]);
    /// assert_eq!(vec.cap(), 4);
    /// ```
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at `index`, shifting every following element up by one.
    ///
    /// When the Vector is full, the new element is written straight into the new buffer between
    /// the two halves of the old contents, rather than being shifted into place afterwards.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the Vector needs to grow and the allocation fails. The Vector
    /// is unchanged and `value` is dropped.
    ///
    /// # Panics
    /// Panics if `index > len`.
    #[track_caller]
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, AllocError> {
        self.check_insert_index(index);

        if self.len == self.cap() {
            let new_buf = OwnedBuffer::<T>::try_new_uninit(next_cap(self.len, self.cap())?)?;

            // SAFETY: new_buf has room for at least len + 1 elements and doesn't overlap with
            // self.buf. The old slots are moved bitwise and the old buffer only holds
            // MaybeUninit values, so nothing is dropped twice.
            unsafe {
                let src = self.buf.ptr.as_ptr();
                let dst = new_buf.ptr.as_ptr();
                ptr::copy_nonoverlapping(src, dst, index);
                dst.add(index).write(MaybeUninit::new(value));
                ptr::copy_nonoverlapping(src.add(index), dst.add(index + 1), self.len - index);
            }

            self.replace_buf(new_buf);
        } else {
            // SAFETY: len < cap, so shifting [index, len) up by one stays within the buffer.
            // ptr::copy handles the overlap.
            unsafe {
                let slot = self.buf.ptr.as_ptr().add(index);
                ptr::copy(slot, slot.add(1), self.len - index);
                slot.write(MaybeUninit::new(value));
            }
        }

        self.len += 1;

        // SAFETY: The value at index was just written.
        Ok(unsafe { self.buf.get_unchecked_mut(index).assume_init_mut() })
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        self.check_index(index);

        // SAFETY: index < len, so the slot is initialized. It is read exactly once before being
        // overwritten by the shift, which stays within [index, len).
        unsafe {
            let slot = self.buf.ptr.as_ptr().add(index);
            let value = slot.read().assume_init();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Drops the element at the provided index, moving all following values to fill in the gap.
    /// Returns a reference to the element that now occupies the erased slot, or [`None`] if the
    /// last element was erased. Capacity is never reduced.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Vector;
    /// let mut vec = Vector::from([10, 15, 20]);
    /// assert_eq!(vec.erase(0), Some(&mut 15));
    /// assert_eq!(vec.erase(1), None);
    /// assert_eq!(&*vec, &[15]);
    /// ```
    #[track_caller]
    pub fn erase(&mut self, index: usize) -> Option<&mut T> {
        drop(self.remove(index));
        (**self).get_mut(index)
    }

    /// Ensures that the Vector has a capacity of at least `new_cap`. If it doesn't, the buffer is
    /// reallocated with a capacity of exactly `new_cap`. Capacity is never reduced.
    ///
    /// Note that unlike [`Vec::reserve`], `new_cap` is a total capacity, not an additional one.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// vec.reserve(10);
    /// assert_eq!(vec.cap(), 10);
    /// vec.reserve(5);
    /// assert_eq!(vec.cap(), 10);
    /// ```
    pub fn reserve(&mut self, new_cap: usize) {
        self.try_reserve(new_cap).throw()
    }

    /// Ensures that the Vector has a capacity of at least `new_cap`.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the allocation fails, leaving the Vector unchanged.
    pub fn try_reserve(&mut self, new_cap: usize) -> Result<(), AllocError> {
        if new_cap <= self.cap() {
            return Ok(());
        }

        self.try_realloc(new_cap)
    }

    /// Resizes the Vector to `new_len`, filling new slots with [`T::default()`](Default).
    ///
    /// Shrinking drops the elements past `new_len` and keeps the capacity. Growing within the
    /// current capacity fills the spare slots in place. Growing past it reallocates to a capacity
    /// of exactly `new_len` first.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// vec.resize(5);
    /// assert_eq!(&*vec, &[1, 2, 3, 0, 0]);
    /// assert_eq!(vec.cap(), 5);
    /// vec.resize(1);
    /// assert_eq!(&*vec, &[1]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.try_resize(new_len).throw()
    }

    /// Resizes the Vector to `new_len`, filling new slots with [`T::default()`](Default).
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the allocation fails, leaving the Vector unchanged.
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), AllocError>
    where
        T: Default,
    {
        self.try_resize_with(new_len, T::default)
    }

    /// Resizes the Vector to `new_len`, filling new slots with values returned by `f`.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, f: F) {
        self.try_resize_with(new_len, f).throw()
    }

    /// Resizes the Vector to `new_len`, filling new slots with values returned by `f`.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the allocation fails, leaving the Vector unchanged.
    pub fn try_resize_with<F: FnMut() -> T>(
        &mut self,
        new_len: usize,
        f: F,
    ) -> Result<(), AllocError> {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }

        if new_len > self.cap() {
            self.try_realloc(new_len)?;
        }

        self.fill_to(new_len, f);
        Ok(())
    }

    /// Shortens the Vector to `new_len`, dropping the elements past it. Does nothing if the
    /// Vector is already no longer than `new_len`.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }

        let old_len = self.len;
        // Shorten first, so a panicking drop leaks the tail rather than dropping it twice.
        self.len = new_len;

        // SAFETY: [new_len, old_len) is initialized and now outside of the length.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.ptr.as_ptr().add(new_len).cast::<T>(),
                old_len - new_len,
            ));
        }
    }

    /// Drops every element, keeping the capacity.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Exchanges the contents of self and `other` in `O(1)`, without moving any elements.
    pub fn swap_with(&mut self, other: &mut Vector<T>) {
        self.buf.swap_with(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the contents out of self in `O(1)`, leaving it with length and capacity 0.
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Vector;
    /// let mut source = Vector::from([1, 2, 3]);
    /// let target = source.take();
    /// assert_eq!(&*target, &[1, 2, 3]);
    /// assert_eq!((source.len(), source.cap()), (0, 0));
    /// ```
    pub fn take(&mut self) -> Vector<T> {
        mem::take(self)
    }

    /// Pushes values from `f` until the length reaches `new_len`.
    ///
    /// The caller must ensure that `new_len <= cap`, which is checked in debug builds.
    pub(crate) fn fill_to<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) {
        debug_assert!(new_len <= self.cap());

        while self.len < new_len {
            // SAFETY: len < new_len <= cap. If f panics, len still only covers written slots.
            unsafe { self.push_unchecked(f()) }
        }
    }

    /// Grows the buffer to allow for the insertion of one more element, using [`next_cap`].
    pub(crate) fn try_grow(&mut self) -> Result<(), AllocError> {
        self.try_realloc(next_cap(self.len, self.cap())?)
    }

    /// Moves every element into a newly allocated buffer of `new_cap` elements and frees the old
    /// one. Nothing is changed if the allocation fails.
    pub(crate) fn try_realloc(&mut self, new_cap: usize) -> Result<(), AllocError> {
        debug_assert!(new_cap >= self.len);

        let new_buf = OwnedBuffer::<T>::try_new_uninit(new_cap)?;

        // SAFETY: Both buffers hold at least len elements and are separate allocations. The moved
        // slots are never dropped from the old buffer because it only holds MaybeUninit values.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.ptr.as_ptr(), new_buf.ptr.as_ptr(), self.len);
        }

        self.replace_buf(new_buf);
        Ok(())
    }

    /// Installs a buffer whose first len slots already hold the Vector's elements. The old buffer
    /// is freed without dropping anything.
    fn replace_buf(&mut self, mut new_buf: OwnedBuffer<MaybeUninit<T>>) {
        trace!(
            "reallocating Vector: {} -> {} slots ({} in use)",
            self.cap(),
            new_buf.size(),
            self.len,
        );
        self.buf.swap_with(&mut new_buf);
    }

    /// Checks that the provided index refers to an element.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[track_caller]
    pub(crate) fn check_index(&self, index: usize) {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            }).throw()
        }
    }

    /// Checks that the provided index is a valid insertion point, which includes `len`.
    ///
    /// # Panics
    /// Panics if `index > len`.
    #[track_caller]
    pub(crate) fn check_insert_index(&self, index: usize) {
        if index > self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            }).throw()
        }
    }
}

impl<T: Default> Vector<T> {
    /// Creates a new Vector of `len` default values, with capacity equal to `len`.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Vector;
    /// let vec: Vector<u32> = Vector::with_len(3);
    /// assert_eq!(&*vec, &[0, 0, 0]);
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn with_len(len: usize) -> Vector<T> {
        let mut vec = Vector::with_cap(len);
        vec.fill_to(len, T::default);
        vec
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);

        for item in iter {
            vec.push(item);
        }

        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    /// Creates a Vector holding the values of an array literal, with capacity equal to `N`.
    fn from(value: [T; N]) -> Self {
        let mut vec = Vector::with_cap(N);

        for item in value {
            // SAFETY: vec has been created with the right capacity.
            unsafe { vec.push_unchecked(item); }
        }

        vec
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(value: &[T]) -> Self {
        let mut vec = Vector::with_cap(value.len());

        for item in value {
            // SAFETY: vec has been created with the right capacity.
            unsafe { vec.push_unchecked(item.clone()); }
        }

        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: All values less than len are initialized and safe to drop.
        unsafe { ptr::drop_in_place(self.deref_mut() as *mut [T]) }

        // Implicitly drop self.buf, containing only MaybeUninit values with a no-op drop. Doing so
        // deallocates the owned memory.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within the buffer.
        unsafe {
            slice::from_raw_parts(
                // Reinterpret *mut MaybeUninit<T> as *mut T for all values < len.
                self.buf.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, and &mut self guarantees exclusive access for the lifetime.
        unsafe {
            slice::from_raw_parts_mut(
                self.buf.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: Clone> Clone for Vector<T> {
    /// Creates an independent copy in a new buffer, sized to the length of self rather than its
    /// capacity.
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.len);

        for value in self.iter() {
            // SAFETY: vec has capacity for exactly self.len values.
            unsafe { vec.push_unchecked(value.clone()); }
        }

        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialOrd> PartialOrd for Vector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (**self).partial_cmp(&**other)
    }
}

impl<T: Ord> Ord for Vector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (**self).cmp(&**other)
    }
}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
