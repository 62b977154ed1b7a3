//! Guards over a gap within the live elements.
//!
//! Inserting or erasing in the middle of a vector temporarily leaves a gap of uninitialized slots between the live
//! elements. The user code run meanwhile (`Clone`, `Drop`, closures) may panic, in which case the gap must still be
//! closed so that no element is leaked, nor dropped twice.

use super::root::ptr;

//  Fills a gap of `count` slots at `index`, then closes whatever is left of it on drop.
//
//  While the filler exists, the length of the vector covers only the elements before the gap, so that a panic cannot
//  expose uninitialized slots.
pub struct GapFiller<'a, T> {
    base: *mut T,
    length: &'a mut usize,
    index: usize,
    count: usize,
    filled: usize,
    tail: usize,
}

impl<'a, T> GapFiller<'a, T> {
    //  Creates an instance.
    //
    //  #   Safety
    //
    //  -   Assumes that `base` points to a storage of at least `*length + count` slots.
    //  -   Assumes that `index <= *length`.
    //  -   Assumes that the slots `[0, index)` and `[index + count, *length + count)` are initialized.
    //  -   Assumes that the slots `[index, index + count)` are not.
    pub unsafe fn new(base: *mut T, length: &'a mut usize, index: usize, count: usize) -> Self {
        debug_assert!(index <= *length);

        let tail = *length - index;
        *length = index;

        Self { base, length, index, count, filled: 0, tail }
    }

    //  Returns whether the gap is filled.
    pub fn is_full(&self) -> bool { self.filled == self.count }

    //  Writes the next element of the gap.
    //
    //  #   Panics
    //
    //  If the gap is already filled.
    pub fn push(&mut self, value: T) {
        assert!(!self.is_full(), "Gap of {} already filled", self.count);

        //  Safety:
        //  -   The slot is within the gap, hence within bounds and uninitialized.
        unsafe { ptr::write(self.base.add(self.index + self.filled), value) };

        self.filled += 1;
    }
}

impl<'a, T> Drop for GapFiller<'a, T> {
    fn drop(&mut self) {
        if !self.is_full() {
            //  Safety:
            //  -   Both ranges are within bounds, and `ptr::copy` handles the overlap.
            unsafe {
                ptr::copy(
                    self.base.add(self.index + self.count),
                    self.base.add(self.index + self.filled),
                    self.tail,
                );
            }
        }

        *self.length = self.index + self.filled + self.tail;
    }
}

//  Closes the gap left by erasing the slots `[start, end)`, on drop.
//
//  While the closer exists, the length of the vector covers only the elements before the gap.
pub struct GapCloser<'a, T> {
    base: *mut T,
    length: &'a mut usize,
    start: usize,
    end: usize,
    tail: usize,
}

impl<'a, T> GapCloser<'a, T> {
    //  Creates an instance.
    //
    //  #   Safety
    //
    //  -   Assumes that `base` points to a storage of at least `*length` slots.
    //  -   Assumes that `start <= end <= *length`.
    //  -   Assumes that the slots `[start, end)` are dropped, or moved out, before the instance is.
    pub unsafe fn new(base: *mut T, length: &'a mut usize, start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        debug_assert!(end <= *length);

        let tail = *length - end;
        *length = start;

        Self { base, length, start, end, tail }
    }

    //  Returns the slots of the gap, still to be dropped.
    pub fn gap(&mut self) -> *mut [T] {
        //  Safety:
        //  -   `start` is within bounds.
        let first = unsafe { self.base.add(self.start) };

        ptr::slice_from_raw_parts_mut(first, self.end - self.start)
    }
}

impl<'a, T> Drop for GapCloser<'a, T> {
    fn drop(&mut self) {
        if self.start != self.end {
            //  Safety:
            //  -   Both ranges are within bounds, and `ptr::copy` handles the overlap.
            unsafe { ptr::copy(self.base.add(self.end), self.base.add(self.start), self.tail) };
        }

        *self.length = self.start + self.tail;
    }
}

//  mod tests
