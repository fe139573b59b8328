use std::cell::Cell;
use std::rc::Rc;

/// A unit type, used to check that collections never allocate for zero-sized elements.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZeroSizedType;

/// A value that increments a shared counter whenever any of its clones is dropped. Lets tests
/// check that every element is dropped exactly once.
#[derive(Debug, Default, Clone)]
pub struct CountedDrop(Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    /// Returns the number of drops recorded so far, resetting the counter to zero.
    pub fn take(&self) -> usize {
        self.0.take()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
