use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use log::{debug, trace};

use crate::util::error::{AllocError, CapacityOverflow, OutOfMemory};
use crate::util::result::ResultExtension;

/// The exclusive owner of a single contiguous block of `size` elements. Similar to a
/// [`Box<[T]>`](Box<T>), minus everything that isn't allocation, deallocation, ownership transfer
/// or indexing.
///
/// An OwnedBuffer has no notion of length or capacity beyond the size of its block. Tracking which
/// slots are in use is left to the owning collection, which will usually hold an
/// `OwnedBuffer<MaybeUninit<T>>` for exactly that reason.
///
/// # Ownership
/// There is only ever one owner of a block. Moving an OwnedBuffer transfers the block in `O(1)`
/// and [`mem::take`] leaves an empty owner behind. An OwnedBuffer can't be cloned, because that
/// would leave two owners freeing the same memory:
/// ```compile_fail
/// # use simple_vector::collections::contiguous::OwnedBuffer;
/// let buf = OwnedBuffer::<u8>::new_uninit(4);
/// let copy = buf.clone();
/// ```
/// Duplicating the contents means allocating a new block and copying each element across, which
/// is what [`Vector`](super::super::Vector)'s `Clone` implementation does.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `try_new_uninit` | `O(1)` |
/// | `get_unchecked` | `O(1)` |
/// | `release` | `O(1)` |
/// | `swap_with` | `O(1)` |
/// | `drop` | `O(n)`* |
///
/// \* Dropping is `O(1)` when `T` doesn't need dropping, including any `MaybeUninit<T>`.
pub struct OwnedBuffer<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> OwnedBuffer<T> {
    /// Creates an empty OwnedBuffer, which holds no allocation.
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::OwnedBuffer;
    /// let buf: OwnedBuffer<u8> = OwnedBuffer::new();
    /// assert_eq!(buf.size(), 0);
    /// assert!(!buf.is_allocated());
    /// ```
    pub const fn new() -> OwnedBuffer<T> {
        OwnedBuffer {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements the block was allocated for.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns true if this OwnedBuffer currently holds memory from the allocator. Empty buffers
    /// and buffers of zero-sized types never do.
    pub const fn is_allocated(&self) -> bool {
        self.size != 0 && size_of::<T>() != 0
    }

    /// Allocates an uninitialized block for `size` elements of `T`.
    ///
    /// Requesting zero elements, or any number of a zero-sized type, doesn't touch the allocator
    /// and produces a buffer with a dangling pointer instead.
    ///
    /// # Errors
    /// - [`AllocError::CapacityOverflow`] if the block would exceed [`isize::MAX`] bytes.
    /// - [`AllocError::OutOfMemory`] if the global allocator can't satisfy the request.
    ///
    /// Either way, nothing has been allocated when an error is returned.
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::OwnedBuffer;
    /// let buf = OwnedBuffer::<u64>::try_new_uninit(8).unwrap();
    /// assert_eq!(buf.size(), 8);
    /// assert!(OwnedBuffer::<u64>::try_new_uninit(usize::MAX).unwrap_err().is_capacity_overflow());
    /// ```
    pub fn try_new_uninit(size: usize) -> Result<OwnedBuffer<MaybeUninit<T>>, AllocError> {
        let layout = OwnedBuffer::<MaybeUninit<T>>::make_layout(size)?;

        Ok(OwnedBuffer {
            ptr: OwnedBuffer::<MaybeUninit<T>>::make_ptr(layout)?,
            size,
            _phantom: PhantomData,
        })
    }

    /// Allocates an uninitialized block for `size` elements of `T`, panicking on failure.
    ///
    /// # Panics
    /// Panics if the allocation fails, see [`OwnedBuffer::try_new_uninit`].
    pub fn new_uninit(size: usize) -> OwnedBuffer<MaybeUninit<T>> {
        Self::try_new_uninit(size).throw()
    }

    /// Returns a reference to the element at `index` without any bounds checking.
    ///
    /// # Safety
    /// `index` must be less than [`size`](OwnedBuffer::size) and the element must be valid for a
    /// `T` (always true for a `MaybeUninit<T>`). Checking this is the job of the owning collection.
    pub const unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: The caller guarantees that index is within the block, which is properly aligned
        // and no larger than isize::MAX bytes.
        unsafe { self.ptr.add(index).as_ref() }
    }

    /// Returns a mutable reference to the element at `index` without any bounds checking.
    ///
    /// # Safety
    /// See [`OwnedBuffer::get_unchecked`].
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: The caller guarantees that index is within the block. Taking &mut self means no
        // other reference into the block exists.
        unsafe { self.ptr.add(index).as_mut() }
    }

    /// Hands ownership of the block to the caller without freeing it, leaving this OwnedBuffer
    /// empty. Returns the pointer to the block and the number of elements it holds.
    ///
    /// The caller becomes responsible for the block and its elements, and should eventually give
    /// them back with [`OwnedBuffer::from_parts`] so they are dropped and freed.
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::OwnedBuffer;
    /// let mut buf = OwnedBuffer::<u32>::new_uninit(3);
    /// let (ptr, size) = buf.release();
    /// assert_eq!(buf.size(), 0);
    /// // SAFETY: The parts came straight from release.
    /// let buf = unsafe { OwnedBuffer::from_parts(ptr, size) };
    /// assert_eq!(buf.size(), 3);
    /// ```
    #[must_use = "the released block is leaked unless it is rebuilt with from_parts"]
    pub const fn release(&mut self) -> (NonNull<T>, usize) {
        let parts = (self.ptr, self.size);
        self.ptr = NonNull::dangling();
        self.size = 0;
        parts
    }

    /// Takes ownership of a block previously handed out by [`OwnedBuffer::release`].
    ///
    /// # Safety
    /// Nothing is checked here. For the result to be valid:
    /// - `ptr` must have been allocated by the global allocator with the layout of `[T; size]`, or
    ///   be dangling if that layout has a size of zero.
    /// - `ptr` must point to `size` properly initialized values of `T`.
    /// - No other owner of the block may exist.
    pub const unsafe fn from_parts(ptr: NonNull<T>, size: usize) -> OwnedBuffer<T> {
        OwnedBuffer {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Exchanges the blocks owned by self and `other` in `O(1)`.
    pub fn swap_with(&mut self, other: &mut OwnedBuffer<T>) {
        mem::swap(self, other);
    }

    /// Interprets self as an `OwnedBuffer<MaybeUninit<T>>`, forgetting that its elements are
    /// initialized. They will no longer be dropped with the buffer.
    pub fn forget_init(self) -> OwnedBuffer<MaybeUninit<T>> {
        let mut this = mem::ManuallyDrop::new(self);
        let (ptr, size) = this.release();
        // SAFETY: MaybeUninit<T> has the same layout as T, so the block is still described by the
        // same layout and any T is a valid MaybeUninit<T>.
        unsafe { OwnedBuffer::from_parts(ptr.cast(), size) }
    }
}

impl<T> OwnedBuffer<T> {
    /// Creates the [`Layout`] of a block holding `size` elements of `T`.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow)
    }

    /// Allocates a block for `layout`. Returns a dangling pointer for a zero-sized layout.
    ///
    /// # Errors
    /// Returns [`OutOfMemory`] if the global allocator returns null.
    pub(crate) fn make_ptr(layout: Layout) -> Result<NonNull<T>, OutOfMemory> {
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        // SAFETY: Zero-sized layouts have been guarded against.
        let raw_ptr = unsafe { alloc::alloc(layout) };

        match NonNull::new(raw_ptr.cast()) {
            Some(ptr) => {
                trace!("allocated {} bytes at {:p}", layout.size(), ptr);
                Ok(ptr)
            },
            None => {
                debug!("allocation of {} bytes failed", layout.size());
                Err(OutOfMemory { layout })
            },
        }
    }
}

impl<T> OwnedBuffer<MaybeUninit<T>> {
    /// Assumes that every element of an `OwnedBuffer<MaybeUninit<T>>` is initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that all `size` elements are initialized. Failing to do
    /// so is undefined behavior.
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::OwnedBuffer;
    /// # use std::mem::MaybeUninit;
    /// let mut buf = OwnedBuffer::new_uninit(3);
    /// for i in 0..3 {
    ///     buf[i] = MaybeUninit::new(i * 10);
    /// }
    /// // SAFETY: Every slot was just written.
    /// assert_eq!(&*unsafe { buf.assume_init() }, &[0, 10, 20]);
    /// ```
    pub unsafe fn assume_init(self) -> OwnedBuffer<T> {
        let mut this = mem::ManuallyDrop::new(self);
        let (ptr, size) = this.release();
        // SAFETY: The layouts are identical and the caller guarantees initialization.
        unsafe { OwnedBuffer::from_parts(ptr.cast(), size) }
    }
}

impl<T> Default for OwnedBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OwnedBuffer<T> {
    fn drop(&mut self) {
        // SAFETY: Every element of an OwnedBuffer<T> is initialized, properly aligned and owned by
        // self. Dropping MaybeUninit values is a no-op.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }

        if self.is_allocated() {
            // SAFETY: The layout was valid when the block was allocated and size hasn't changed
            // since.
            let layout = unsafe {
                Layout::from_size_align_unchecked(size_of::<T>() * self.size, align_of::<T>())
            };
            trace!("freeing {} bytes at {:p}", layout.size(), self.ptr);
            // SAFETY: ptr was allocated in the global allocator with this layout, and zero-sized
            // layouts are never deallocated because they were never allocated.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Deref for OwnedBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The block uses Layout::array(size) and is therefore valid and properly aligned
        // for size elements, all of which are initialized (trivially so for MaybeUninit).
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for OwnedBuffer<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, and &mut self guarantees exclusive access for the lifetime.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

// SAFETY: An OwnedBuffer uniquely owns its block, so sending it sends the Ts along with it.
unsafe impl<T: Send> Send for OwnedBuffer<T> {}
// SAFETY: The safe API obeys the borrow checker and there is no interior mutability.
unsafe impl<T: Sync> Sync for OwnedBuffer<T> {}

impl<T> Debug for OwnedBuffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedBuffer")
            .field("ptr", &self.ptr)
            .field("size", &self.size)
            .finish()
    }
}
