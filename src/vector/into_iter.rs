//! The owning iterator of the Vector.

use super::root::{fmt, iter, ptr, slice};

use super::allocator::Allocator;
use super::raw_vector::RawVector;

/// An iterator moving the elements out of a `Vector`.
///
/// The elements not yet yielded are dropped along with the iterator.
///
/// #   Example
///
/// ```
/// use contigo::vector::Vector;
///
/// let vec: Vector<_> = ["a".to_string(), "b".to_string(), "c".to_string()].into();
///
/// let mut iterator = vec.into_iter();
///
/// assert_eq!(Some("a".to_string()), iterator.next());
/// assert_eq!(Some("c".to_string()), iterator.next_back());
/// assert_eq!(&["b".to_string()], iterator.as_slice());
/// ```
pub struct IntoIter<T, A: Allocator> {
    raw: RawVector<T, A>,
    //  The slots `[front, back)` are initialized, and not yet yielded.
    front: usize,
    back: usize,
}

impl<T, A: Allocator> IntoIter<T, A> {
    //  Creates an instance.
    //
    //  #   Safety
    //
    //  -   Assumes that the first `length` slots of `raw` are initialized, and owned.
    pub(super) unsafe fn new(raw: RawVector<T, A>, length: usize) -> Self {
        debug_assert!(length <= raw.capacity());

        Self { raw, front: 0, back: length }
    }

    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        //  Safety:
        //  -   `[front, back)` is within bounds, and initialized.
        unsafe { slice::from_raw_parts(self.raw.as_ptr().add(self.front), self.back - self.front) }
    }

    /// Returns the elements not yet yielded.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let (front, back) = (self.front, self.back);

        //  Safety:
        //  -   `[front, back)` is within bounds, and initialized.
        //  -   Exclusive access, as per &mut self.
        unsafe { slice::from_raw_parts_mut(self.raw.as_mut_ptr().add(front), back - front) }
    }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }

        let index = self.front;
        self.front += 1;

        //  Safety:
        //  -   `index` is initialized, and no longer reachable.
        Some(unsafe { ptr::read(self.raw.as_ptr().add(index)) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;

        (remaining, Some(remaining))
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;

        //  Safety:
        //  -   `back` is initialized, and no longer reachable.
        Some(unsafe { ptr::read(self.raw.as_ptr().add(self.back)) })
    }
}

impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: Allocator> iter::FusedIterator for IntoIter<T, A> {}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, A: Allocator> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        let remaining: *mut [T] = self.as_mut_slice();

        //  Mark as exhausted first: should a Drop panic, the other elements are not dropped twice.
        self.front = self.back;

        //  Safety:
        //  -   The remaining elements are initialized, and no longer reachable.
        //  -   The storage itself is released by `raw`.
        unsafe { ptr::drop_in_place(remaining) };
    }
}

unsafe impl<T: Send, A: Allocator + Send> Send for IntoIter<T, A> {}

unsafe impl<T: Sync, A: Allocator + Sync> Sync for IntoIter<T, A> {}

//  mod tests
