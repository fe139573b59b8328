#![cfg(test)]

use std::hash::{BuildHasher, RandomState};

use proptest::prelude::*;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::error::{AllocError, CapacityOverflow, IndexOutOfBounds};
use crate::util::panic::assert_panics;

#[test]
fn test_push_insert_erase_scenario() {
    let mut vec = Vector::new();
    vec.push(10);
    vec.push(20);
    assert_eq!((vec.len(), vec.cap()), (2, 2));
    assert_eq!(&*vec, &[10, 20]);

    assert_eq!(*vec.insert(1, 15), 15);
    assert_eq!(&*vec, &[10, 15, 20]);
    assert_eq!(
        (vec.len(), vec.cap()),
        (3, 4),
        "Insert into a full Vector should double from its length."
    );

    assert_eq!(vec.erase(0), Some(&mut 15));
    assert_eq!(&*vec, &[15, 20]);
    assert_eq!(vec.len(), 2);
    assert_eq!(vec.cap(), 4, "Erasing should never shrink capacity.");
}

#[test]
fn test_reserve_then_push() {
    let mut vec = Vector::new();
    vec.reserve(100);
    assert_eq!(vec.cap(), 100);

    let old_ptr = vec.buf.ptr;
    for i in 0..3 {
        vec.push(i);
    }
    assert_eq!(vec.len(), 3);
    assert_eq!(vec.cap(), 100);
    assert_eq!(vec.buf.ptr, old_ptr, "Pushing within capacity shouldn't reallocate.");

    vec.reserve(50);
    assert_eq!(vec.cap(), 100, "Reserve should never shrink.");
    vec.reserve(100);
    assert_eq!(vec.buf.ptr, old_ptr, "Reserving the current capacity should be a no-op.");
}

#[test]
fn test_construction() {
    let vec = Vector::repeat(7, 5);
    assert_eq!(&*vec, &[7; 5]);
    assert_eq!((vec.len(), vec.cap()), (5, 5));

    let vec = Vector::from([1, 2, 3]);
    assert_eq!(&*vec, &[1, 2, 3]);
    assert_eq!((vec.len(), vec.cap()), (3, 3));

    let vec: Vector<String> = Vector::with_len(4);
    assert!(vec.iter().all(String::is_empty));
    assert_eq!((vec.len(), vec.cap()), (4, 4));

    let vec: Vector<u8> = Vector::with_cap(6);
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), 6);

    let vec = Vector::from(&["a", "b"][..]);
    assert_eq!(&*vec, &["a", "b"]);
    assert_eq!(vec.cap(), 2);

    let vec: Vector<u8> = Vector::new();
    assert!(!vec.buf.is_allocated(), "An empty Vector shouldn't allocate.");
    let vec: Vector<u8> = Vector::repeat(1, 0);
    assert_eq!((vec.len(), vec.cap()), (0, 0));
}

#[test]
fn test_doubling_growth() {
    let mut vec = Vector::new();
    let mut caps = Vec::new();

    for i in 0..17 {
        vec.push(i);
        if caps.last() != Some(&vec.cap()) {
            caps.push(vec.cap());
        }
    }

    assert_eq!(caps, [1, 2, 4, 8, 16, 32]);
}

#[test]
fn test_next_cap() {
    assert_eq!(next_cap(0, 0), Ok(MIN_CAP));
    assert_eq!(next_cap(5, 5), Ok(10));
    assert_eq!(
        next_cap(3, 100),
        Ok(6),
        "Growth is keyed on the length, even when the capacity is larger."
    );
    assert_eq!(next_cap(usize::MAX / 2 + 1, usize::MAX), Err(CapacityOverflow));
}

#[test]
fn test_checked_access() {
    let mut vec = Vector::from([1, 2, 3]);
    assert_eq!(vec.at(2), Ok(&3));
    assert_eq!(vec.at(3), Err(IndexOutOfBounds { index: 3, len: 3 }));

    *vec.at_mut(0).unwrap() = 100;
    assert_eq!(vec[0], 100);
    assert!(vec.at_mut(5).is_err());

    let empty: Vector<u8> = Vector::new();
    assert_eq!(empty.at(0), Err(IndexOutOfBounds { index: 0, len: 0 }));

    assert_eq!(
        vec.at(10).unwrap_err().to_string(),
        "Index 10 out of bounds for collection with 3 elements!"
    );
}

#[test]
fn test_contract_violations() {
    assert_panics!({
        let mut vec: Vector<u8> = Vector::new();
        vec.pop_back();
    }, "Popping from an empty Vector should panic.");

    assert_panics!({
        let mut vec = Vector::from([1, 2]);
        vec.insert(3, 0);
    }, "Inserting past the end should panic.");

    assert_panics!({
        let mut vec = Vector::from([1, 2]);
        vec.remove(2);
    }, "Removing at the end should panic.");

    assert_panics!({
        let mut vec = Vector::from([1, 2]);
        vec.erase(5);
    }, "Erasing past the end should panic.");

    assert_panics!({
        let vec: Vector<u8> = Vector::with_len(4);
        let _ = vec[4];
    }, "Indexing past the end should panic.");

    assert_panics!({
        let mut vec: Vector<u64> = Vector::new();
        vec.reserve(usize::MAX);
    }, "A capacity overflow should panic in the panicking API.");
}

#[test]
fn test_failed_growth_leaves_vector_unchanged() {
    let mut vec: Vector<u8> = Vector::from([1, 2, 3]);
    let ptr = vec.buf.ptr;

    assert_eq!(
        vec.try_reserve(usize::MAX),
        Err(AllocError::CapacityOverflow(CapacityOverflow))
    );
    assert!(
        vec.try_reserve(isize::MAX as usize).is_err_and(|e| e.is_out_of_memory()),
        "Reserving isize::MAX bytes should reach the allocator and fail."
    );
    assert!(vec.try_resize(isize::MAX as usize).is_err_and(|e| e.is_out_of_memory()));

    assert_eq!(&*vec, &[1, 2, 3]);
    assert_eq!((vec.len(), vec.cap(), vec.buf.ptr), (3, 3, ptr));

    // A full Vector of ZSTs with more than usize::MAX / 2 elements can't double.
    let mut vec: Vector<ZeroSizedType> = Vector::with_cap(usize::MAX / 2 + 1);
    vec.len = vec.cap();

    assert_eq!(
        vec.try_push(ZeroSizedType),
        Err(AllocError::CapacityOverflow(CapacityOverflow))
    );
    assert!(vec.try_insert(0, ZeroSizedType).is_err_and(|e| e.is_capacity_overflow()));
    assert_eq!((vec.len(), vec.cap()), (usize::MAX / 2 + 1, usize::MAX / 2 + 1));

    vec.len = 0;
}

#[test]
fn test_pop() {
    let mut vec = Vector::from([1, 2, 3]);
    assert_eq!(vec.pop_back(), 3);
    assert_eq!(vec.pop(), Some(2));
    assert_eq!(vec.pop_back(), 1);
    assert_eq!(vec.pop(), None);
    assert_eq!(vec.cap(), 3, "Popping should never shrink capacity.");
}

#[test]
fn test_insert_positions() {
    let mut vec = Vector::from([0, 1, 2]);
    vec.insert(1, 100);
    vec.insert(1, 200);
    vec.insert(3, 300);
    vec.insert(0, 400);
    let len = vec.len();
    vec.insert(len, 500);
    assert_eq!(&*vec, &[400, 0, 200, 100, 300, 1, 2, 500]);

    let mut empty = Vector::new();
    empty.insert(0, 'a');
    assert_eq!(&*empty, &['a']);
    assert_eq!(empty.cap(), 1);
}

#[test]
fn test_remove_and_erase() {
    let mut vec: Vector<_> = (0..6).collect();
    assert_eq!(vec.remove(0), 0);
    assert_eq!(vec.remove(2), 3);
    assert_eq!(&*vec, &[1, 2, 4, 5]);

    assert_eq!(vec.erase(1), Some(&mut 4));
    assert_eq!(vec.erase(2), None, "Erasing the last element should return the end.");
    assert_eq!(&*vec, &[1, 4]);
}

#[test]
fn test_resize() {
    let mut vec = Vector::from([1, 2, 3, 4]);
    vec.reserve(8);
    let old_ptr = vec.buf.ptr;

    vec.resize(2);
    assert_eq!(&*vec, &[1, 2]);
    assert_eq!(vec.cap(), 8);

    vec.resize(6);
    assert_eq!(&*vec, &[1, 2, 0, 0, 0, 0]);
    assert_eq!(vec.buf.ptr, old_ptr, "Growing within capacity shouldn't reallocate.");

    vec.resize(11);
    assert_eq!(vec.len(), 11);
    assert_eq!(vec.cap(), 11, "Growing past capacity should allocate exactly the new length.");
    assert_eq!(&vec[..6], &[1, 2, 0, 0, 0, 0]);

    let mut next = 0;
    vec.resize_with(13, || {
        next += 1;
        next
    });
    assert_eq!(&vec[11..], &[1, 2]);
}

#[test]
fn test_clear_and_truncate() {
    let counter = CountedDrop::new();
    let mut vec = Vector::repeat(counter.clone(), 10);
    assert_eq!(counter.take(), 1, "The original value should be dropped by repeat.");

    vec.truncate(6);
    assert_eq!(counter.take(), 4);
    vec.truncate(8);
    assert_eq!(counter.take(), 0, "Truncating to a larger length should do nothing.");

    vec.clear();
    assert_eq!(counter.take(), 6);
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), 10, "Clearing should keep the capacity.");

    let mut vec = Vector::repeat(counter.clone(), 4);
    counter.take();
    vec.resize_with(1, || unreachable!());
    assert_eq!(counter.take(), 3, "Shrinking with resize should drop the removed elements.");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut vec = Vector::new();
    for _ in 0..10 {
        vec.push(counter.clone());
    }
    vec.insert(3, counter.clone());
    drop(vec.remove(0));
    assert_eq!(counter.take(), 1);
    drop(vec.erase(0));
    assert_eq!(counter.take(), 1);

    drop(vec);
    assert_eq!(counter.take(), 9, "All remaining elements should have been dropped once.");
}

#[test]
fn test_clone_is_independent() {
    let mut vec = Vector::from([String::from("a"), String::from("b")]);
    vec.reserve(10);

    let mut copy = vec.clone();
    assert_eq!(copy, vec);
    assert_eq!(copy.cap(), 2, "A clone should be sized to the length of the source.");
    assert_ne!(copy.buf.ptr, vec.buf.ptr);

    copy[0].push('!');
    copy.push(String::from("c"));
    assert_eq!(&*vec, &["a", "b"]);
    assert_eq!(&*copy, &["a!", "b", "c"]);
}

#[test]
fn test_take_and_swap() {
    let mut source = Vector::from([1, 2, 3]);
    let old_ptr = source.buf.ptr;

    let mut target = source.take();
    assert_eq!((source.len(), source.cap()), (0, 0));
    assert_eq!(&*target, &[1, 2, 3]);
    assert_eq!(target.buf.ptr, old_ptr, "Taking shouldn't copy the buffer.");

    source.push(9);
    source.swap_with(&mut target);
    assert_eq!(&*source, &[1, 2, 3]);
    assert_eq!(&*target, &[9]);
    assert_eq!((source.cap(), target.cap()), (3, 1));
}

#[test]
fn test_comparison_and_hash() {
    let a = Vector::from([1, 2, 3]);
    let b: Vector<_> = (1..=3).collect();
    assert_eq!(a, b, "Different construction methods should produce equal results.");
    assert_ne!(a, Vector::from([1, 2]));

    assert!(Vector::from([1, 2]) < a, "A prefix should compare as less.");
    assert!(Vector::from([1, 3]) > a);
    assert!(Vector::<i32>::new() < a);
    assert!(a <= b && a >= b);

    let state = RandomState::new();
    assert_eq!(state.hash_one(&a), state.hash_one(&b));
    assert_eq!(
        state.hash_one(&a),
        state.hash_one([1, 2, 3].as_slice()),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_iterators() {
    let mut vec: Vector<usize> = (0..5).collect();
    for i in &mut vec {
        *i *= 2;
    }
    assert_eq!(&*vec, &[0, 2, 4, 6, 8]);
    assert_eq!((&vec).into_iter().sum::<usize>(), 20);

    let mut iter = vec.clone().into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.as_slice(), &[2, 4, 6]);
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    let counter = CountedDrop::new();
    let vec = Vector::repeat(counter.clone(), 10);
    counter.take();
    let mut iter = vec.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    assert_eq!(counter.take(), 2);
    drop(iter);
    assert_eq!(counter.take(), 8, "Dropping an owned iterator should drop the rest.");
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..10 {
        vec.push(ZeroSizedType);
    }
    assert_eq!(vec.len(), 10);
    assert_eq!(vec.cap(), 16);
    assert!(!vec.buf.is_allocated(), "Zero-sized types should never allocate.");

    vec.insert(4, ZeroSizedType);
    assert_eq!(vec.remove(0), ZeroSizedType);
    assert_eq!(vec.into_iter().count(), 10);
}

#[test]
fn test_fmt() {
    let vec = Vector::from([1, 2]);
    assert_eq!(format!("{vec}"), "[1, 2]");
    assert_eq!(format!("{vec:?}"), "Vector { contents: [1, 2], len: 2, cap: 2 }");
}

proptest! {
    #[test]
    fn push_appends_and_grows_monotonically(
        items in prop::collection::vec(any::<i32>(), 0..64),
        value in any::<i32>(),
    ) {
        let mut vec: Vector<i32> = items.iter().copied().collect();
        let (len, cap) = (vec.len(), vec.cap());

        vec.push(value);
        prop_assert_eq!(vec.last(), Some(&value));
        prop_assert_eq!(vec.len(), len + 1);
        if len < cap {
            prop_assert_eq!(vec.cap(), cap);
        } else {
            prop_assert!(vec.cap() > cap);
        }
    }

    #[test]
    fn pushes_from_empty_grow_at_powers_of_two(count in 1_usize..300) {
        let mut vec = Vector::new();
        let mut prev_cap = 0;

        for i in 0..count {
            vec.push(i);
            if vec.cap() != prev_cap {
                prop_assert!(vec.cap().is_power_of_two());
                prop_assert_eq!(i, prev_cap, "Capacity should only change when full.");
                prev_cap = vec.cap();
            }
        }
    }

    #[test]
    fn clone_never_aliases(
        items in prop::collection::vec(any::<u16>(), 1..32),
        value in any::<u16>(),
    ) {
        let vec = Vector::from(items.as_slice());
        let mut copy = vec.clone();
        prop_assert_eq!(&copy, &vec);

        copy[0] = copy[0].wrapping_add(1);
        copy.push(value);
        prop_assert_eq!(&*vec, items.as_slice());
    }

    #[test]
    fn take_leaves_source_empty(items in prop::collection::vec(any::<u8>(), 0..32)) {
        let mut source = Vector::from(items.as_slice());
        let target = source.take();
        prop_assert_eq!((source.len(), source.cap()), (0, 0));
        prop_assert_eq!(&*target, items.as_slice());
    }

    #[test]
    fn erase_undoes_insert(
        items in prop::collection::vec(any::<i64>(), 0..32),
        position in any::<prop::sample::Index>(),
        value in any::<i64>(),
    ) {
        let mut vec = Vector::from(items.as_slice());
        let index = position.index(items.len() + 1);

        vec.insert(index, value);
        prop_assert_eq!(vec[index], value);
        vec.erase(index);
        prop_assert_eq!(&*vec, items.as_slice());
    }

    #[test]
    fn at_rejects_len(items in prop::collection::vec(any::<u8>(), 0..32)) {
        let vec = Vector::from(items.as_slice());
        prop_assert!(vec.at(vec.len()).is_err());
        if !vec.is_empty() {
            prop_assert_eq!(vec.at(vec.len() - 1), Ok(&items[items.len() - 1]));
        }
    }

    #[test]
    fn ordering_matches_slices(
        a in prop::collection::vec(any::<u8>(), 0..8),
        b in prop::collection::vec(any::<u8>(), 0..8),
    ) {
        let (va, vb) = (Vector::from(a.as_slice()), Vector::from(b.as_slice()));
        prop_assert_eq!(va.cmp(&vb), a.cmp(&b));
        prop_assert_eq!(va == vb, a == b);
    }
}
