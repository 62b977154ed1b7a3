//! The raw storage of the vector.
//!
//! A `RawVector` owns a block of memory suitable for `capacity` elements, and the allocator it was obtained from. It
//! knows nothing of which elements are alive: this is the responsibility of the `Vector`.

use super::root::{cmp, marker, mem, ptr};

use super::allocator::{Allocator, Layout};
use super::failure::{Failure, Result};

//  A gap to leave in the new storage, when relocating elements.
//
//  The elements before `index` are relocated to the same indexes, and the elements at or after `index` are relocated
//  `count` slots further.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Gap {
    pub index: usize,
    pub count: usize,
}

impl Gap {
    //  Creates a gap of `count` slots at `index`.
    pub fn at(index: usize, count: usize) -> Self {
        Self { index, count }
    }
}

//  The storage.
pub struct RawVector<T, A: Allocator> {
    //  Dangling if no memory is allocated.
    pointer: ptr::NonNull<T>,
    capacity: usize,
    allocator: A,
    _marker: marker::PhantomData<T>,
}

impl<T, A: Allocator> RawVector<T, A> {
    //  Creates an instance, without allocating.
    pub const fn new(allocator: A) -> Self {
        Self { pointer: ptr::NonNull::dangling(), capacity: 0, allocator, _marker: marker::PhantomData }
    }

    //  Creates an instance with exactly `capacity` slots.
    //
    //  #   Errors
    //
    //  Returns an error if the storage cannot be allocated.
    pub fn try_with_capacity(capacity: usize, allocator: A) -> Result<Self> {
        let mut result = Self::new(allocator);

        //  Safety:
        //  -   No element, no gap.
        unsafe { result.try_reallocate(0, capacity, Gap::default())? };

        Ok(result)
    }

    //  Returns the maximum number of slots a storage may have.
    pub fn max_capacity() -> usize {
        match mem::size_of::<T>() {
            0 => usize::MAX,
            size => isize::MAX as usize / size,
        }
    }

    //  Returns the number of slots.
    pub fn capacity(&self) -> usize { self.capacity }

    //  Returns a reference to the allocator.
    pub fn allocator(&self) -> &A { &self.allocator }

    //  Returns a pointer to the first slot.
    //
    //  The pointer is dangling, but non-null and well-aligned, if no memory is allocated.
    pub fn as_ptr(&self) -> *const T { self.pointer.as_ptr() }

    //  Returns a mutable pointer to the first slot.
    pub fn as_mut_ptr(&mut self) -> *mut T { self.pointer.as_ptr() }

    //  Returns the capacity to grow to, for at least `required` slots.
    //
    //  The capacity doubles, starting at 1, unless more is required.
    pub fn grown_capacity(&self, required: usize) -> usize {
        let doubled = cmp::min(self.capacity.saturating_mul(2), Self::max_capacity());

        cmp::max(cmp::max(doubled, required), 1)
    }

    //  Relocates the first `length` elements into a new storage of exactly `new_capacity` slots, leaving `gap` open.
    //
    //  On success, the former storage is released. On failure, nothing changes.
    //
    //  #   Errors
    //
    //  Returns an error if the new storage cannot be allocated.
    //
    //  #   Safety
    //
    //  -   Assumes that the first `length` slots are initialized.
    //  -   Assumes that `gap.index <= length`.
    //  -   Assumes that `length + gap.count <= new_capacity`.
    pub unsafe fn try_reallocate(&mut self, length: usize, new_capacity: usize, gap: Gap) -> Result<()> {
        debug_assert!(length <= self.capacity);
        debug_assert!(gap.index <= length);
        debug_assert!(length + gap.count <= new_capacity);

        if mem::size_of::<T>() == 0 {
            self.capacity = new_capacity;
            return Ok(());
        }

        if new_capacity == 0 {
            self.release();
            return Ok(());
        }

        let layout = Self::allocation_layout(new_capacity)?;

        //  Safety:
        //  -   The layout has a non-zero size, as both `T` and `new_capacity` are non-zero.
        let pointer = unsafe { self.allocator.allocate(layout) };

        let Some(pointer) = ptr::NonNull::new(pointer as *mut T) else {
            return Err(Failure::OutOfMemory);
        };

        let (source, destination) = (self.pointer.as_ptr(), pointer.as_ptr());

        //  Safety:
        //  -   Both ranges are within their respective storage, as `length + gap.count <= new_capacity`.
        //  -   The storages are distinct, hence do not overlap.
        unsafe {
            ptr::copy_nonoverlapping(source, destination, gap.index);
            ptr::copy_nonoverlapping(
                source.add(gap.index),
                destination.add(gap.index + gap.count),
                length - gap.index,
            );
        }

        tracing::trace!(old_capacity = self.capacity, new_capacity, length, "relocated storage");

        //  Safety:
        //  -   The elements were relocated, only the memory remains.
        unsafe { self.deallocate() };

        self.pointer = pointer;
        self.capacity = new_capacity;

        Ok(())
    }

    //  Releases the storage, if any.
    //
    //  Any element still within is forgotten, not dropped.
    pub fn release(&mut self) {
        if self.capacity == 0 {
            return;
        }

        tracing::trace!(capacity = self.capacity, "released storage");

        //  Safety:
        //  -   The pointer is reset right after.
        unsafe { self.deallocate() };

        self.pointer = ptr::NonNull::dangling();
        self.capacity = 0;
    }

    //  Deallocates the memory, if allocated, without resetting `self`.
    //
    //  #   Safety
    //
    //  -   Assumes that `self.pointer` is no longer used after this call.
    unsafe fn deallocate(&mut self) {
        if mem::size_of::<T>() == 0 || self.capacity == 0 {
            return;
        }

        let layout = match Self::allocation_layout(self.capacity) {
            Ok(layout) => layout,
            Err(_) => {
                //  Safety:
                //  -   Cannot error, it succeeded during the allocation.
                debug_assert!(false, "{} succeeded in allocation!", self.capacity);
                unsafe { core::hint::unreachable_unchecked() }
            }
        };

        //  Safety:
        //  -   The pointer matches the pointer of the allocation.
        //  -   The layout matches the layout of the allocation.
        unsafe { self.allocator.deallocate(self.pointer.as_ptr() as *mut u8, layout) };
    }

    //  Computes the layout for a given capacity.
    //
    //  #   Fails
    //
    //  -   If the necessary size overflows.
    fn allocation_layout(capacity: usize) -> Result<Layout> {
        Layout::array::<T>(capacity).map_err(|_| Failure::BytesOverflow)
    }
}

impl<T, A: Allocator> Drop for RawVector<T, A> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {

use super::*;

use crate::utils::tester::*;

#[test]
fn raw_allocation_layout() {
    fn allocation_layout<T>(capacity: usize) -> Result<usize> {
        match RawVector::<T, TestAllocator>::allocation_layout(capacity) {
            Ok(layout) => {
                assert_eq!(mem::align_of::<T>(), layout.align());
                Ok(layout.size())
            },
            Err(error) => Err(error),
        }
    }

    const CAPACITY_BOUNDARY: usize = isize::MAX as usize / 8;

    assert_eq!(Ok(8), allocation_layout::<u64>(1));
    assert_eq!(Ok(32), allocation_layout::<u64>(4));
    assert_eq!(Ok(32), allocation_layout::<[u64; 4]>(1));

    assert_eq!(
        Ok(CAPACITY_BOUNDARY * 8),
        allocation_layout::<u64>(CAPACITY_BOUNDARY)
    );
    assert_eq!(
        Err(Failure::BytesOverflow),
        allocation_layout::<u64>(CAPACITY_BOUNDARY + 1)
    );
}

#[test]
fn raw_max_capacity() {
    assert_eq!(isize::MAX as usize, RawVector::<u8, TestAllocator>::max_capacity());
    assert_eq!(isize::MAX as usize / 4, RawVector::<u32, TestAllocator>::max_capacity());
    assert_eq!(usize::MAX, RawVector::<(), TestAllocator>::max_capacity());
}

#[test]
fn raw_grown_capacity() {
    let allocator = TestAllocator::unlimited();

    let raw = RawVector::<u32, _>::new(&allocator);
    assert_eq!(1, raw.grown_capacity(0));
    assert_eq!(1, raw.grown_capacity(1));
    assert_eq!(5, raw.grown_capacity(5));

    let raw = RawVector::<u32, _>::try_with_capacity(3, &allocator).unwrap();
    assert_eq!(6, raw.grown_capacity(4));
    assert_eq!(9, raw.grown_capacity(9));
}

#[test]
fn raw_with_capacity_failure() {
    let allocator = TestAllocator::default();

    let raw = RawVector::<u32, _>::try_with_capacity(4, &allocator);

    assert_eq!(Some(Failure::OutOfMemory), raw.err());
    assert_eq!(0, allocator.allocations().len());
}

#[test]
fn raw_with_capacity_success() {
    let allocator = TestAllocator::new(1);

    let raw = RawVector::<u32, _>::try_with_capacity(4, &allocator).unwrap();

    assert_eq!(4, raw.capacity());
    assert_eq!(vec![16], allocator.allocation_sizes());

    drop(raw);

    assert_eq!(0, allocator.allocations().len());
}

#[test]
fn raw_with_capacity_zero() {
    let allocator = TestAllocator::default();

    let raw = RawVector::<u32, _>::try_with_capacity(0, &allocator).unwrap();

    assert_eq!(0, raw.capacity());
    assert_eq!(0, allocator.allocations().len());
}

#[test]
fn raw_zero_sized() {
    let allocator = TestAllocator::default();

    let mut raw = RawVector::<(), _>::try_with_capacity(7, &allocator).unwrap();
    assert_eq!(7, raw.capacity());

    unsafe { raw.try_reallocate(0, 12, Gap::default()).unwrap() };
    assert_eq!(12, raw.capacity());

    assert_eq!(0, allocator.allocations().len());
}

#[test]
fn raw_reallocate_with_gap() {
    let allocator = TestAllocator::unlimited();

    let mut raw = RawVector::<u32, _>::try_with_capacity(4, &allocator).unwrap();

    for i in 0..4 {
        unsafe { ptr::write(raw.as_mut_ptr().add(i), i as u32) };
    }

    unsafe { raw.try_reallocate(4, 8, Gap::at(1, 2)).unwrap() };

    assert_eq!(8, raw.capacity());
    assert_eq!(vec![32], allocator.allocation_sizes());

    let read = |i: usize| unsafe { ptr::read(raw.as_ptr().add(i)) };

    assert_eq!(0, read(0));
    assert_eq!(1, read(3));
    assert_eq!(2, read(4));
    assert_eq!(3, read(5));
}

#[test]
fn raw_reallocate_failure() {
    let allocator = TestAllocator::new(1);

    let mut raw = RawVector::<u32, _>::try_with_capacity(2, &allocator).unwrap();
    let before = raw.as_ptr();

    let result = unsafe { raw.try_reallocate(0, 4, Gap::default()) };

    assert_eq!(Err(Failure::OutOfMemory), result);
    assert_eq!(2, raw.capacity());
    assert_eq!(before, raw.as_ptr());
    assert_eq!(vec![8], allocator.allocation_sizes());
}

#[test]
fn raw_reallocate_to_zero() {
    let allocator = TestAllocator::new(1);

    let mut raw = RawVector::<u32, _>::try_with_capacity(2, &allocator).unwrap();

    unsafe { raw.try_reallocate(0, 0, Gap::default()).unwrap() };

    assert_eq!(0, raw.capacity());
    assert_eq!(0, allocator.allocations().len());
}

#[test]
fn raw_release() {
    let allocator = TestAllocator::new(1);

    let mut raw = RawVector::<u64, _>::try_with_capacity(3, &allocator).unwrap();
    assert_eq!(1, allocator.allocations().len());

    raw.release();

    assert_eq!(0, raw.capacity());
    assert_eq!(0, allocator.allocations().len());

    raw.release();

    assert_eq!(0, allocator.allocations().len());
}

} //  mod tests
