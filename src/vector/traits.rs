//! Standard traits of the Vector.

use super::root::{borrow, cmp, fmt, hash, iter, mem, ops, ptr, slice};

use super::allocator::Allocator;
use super::into_iter::IntoIter;
use super::vector::{panic_from_failure, Vector};

impl<T, A: Allocator + Default> Default for Vector<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Vector<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone, A: Allocator + Clone> Clone for Vector<T, A> {
    fn clone(&self) -> Self {
        let mut result = Self::with_capacity_in(self.len(), self.allocator().clone());
        result.extend_from_slice(self);
        result
    }

    //  Reuses the storage of `self` if large enough, and retains its allocator regardless.
    fn clone_from(&mut self, source: &Self) {
        if self.capacity() < source.len() {
            let mut fresh = Self::with_capacity_in(source.len(), self.allocator().clone());
            fresh.extend_from_slice(source);

            *self = fresh;
            return;
        }

        self.truncate(source.len());

        let (common, remainder) = source.split_at(self.len());

        self.as_mut_slice().clone_from_slice(common);

        for e in remainder {
            self.push_within_capacity(e.clone());
        }
    }
}

impl<T, A: Allocator> ops::Deref for Vector<T, A> {
    type Target = [T];

    fn deref(&self) -> &[T] { self.as_slice() }
}

impl<T, A: Allocator> ops::DerefMut for Vector<T, A> {
    fn deref_mut(&mut self) -> &mut [T] { self.as_mut_slice() }
}

impl<T, A: Allocator> AsRef<[T]> for Vector<T, A> {
    fn as_ref(&self) -> &[T] { self.as_slice() }
}

impl<T, A: Allocator> AsMut<[T]> for Vector<T, A> {
    fn as_mut(&mut self) -> &mut [T] { self.as_mut_slice() }
}

impl<T, A: Allocator> borrow::Borrow<[T]> for Vector<T, A> {
    fn borrow(&self) -> &[T] { self.as_slice() }
}

impl<T, A: Allocator> borrow::BorrowMut<[T]> for Vector<T, A> {
    fn borrow_mut(&mut self) -> &mut [T] { self.as_mut_slice() }
}

impl<T, I: slice::SliceIndex<[T]>, A: Allocator> ops::Index<I> for Vector<T, A> {
    type Output = I::Output;

    fn index(&self, index: I) -> &I::Output {
        ops::Index::index(self.as_slice(), index)
    }
}

impl<T, I: slice::SliceIndex<[T]>, A: Allocator> ops::IndexMut<I> for Vector<T, A> {
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        ops::IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

//
//  Comparisons
//

impl<T, U, A, B> PartialEq<Vector<U, B>> for Vector<T, A>
where
    T: PartialEq<U>,
    A: Allocator,
    B: Allocator,
{
    fn eq(&self, other: &Vector<U, B>) -> bool { self.as_slice() == other.as_slice() }
}

impl<T, U, A: Allocator> PartialEq<[U]> for Vector<T, A>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool { self.as_slice() == other }
}

impl<T, U, A: Allocator> PartialEq<&[U]> for Vector<T, A>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool { self.as_slice() == *other }
}

impl<T, U, A: Allocator, const N: usize> PartialEq<[U; N]> for Vector<T, A>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool { self.as_slice() == &other[..] }
}

impl<T, U, A: Allocator, const N: usize> PartialEq<&[U; N]> for Vector<T, A>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U; N]) -> bool { self.as_slice() == &other[..] }
}

impl<T: Eq, A: Allocator> Eq for Vector<T, A> {}

//  Lexicographic, a strict prefix comparing less.
impl<T: PartialOrd, A: Allocator> PartialOrd for Vector<T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, A: Allocator> Ord for Vector<T, A> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: hash::Hash, A: Allocator> hash::Hash for Vector<T, A> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

//
//  Conversions
//

impl<T, A: Allocator + Default, const N: usize> From<[T; N]> for Vector<T, A> {
    fn from(array: [T; N]) -> Self {
        let mut result = Self::with_capacity_in(N, A::default());
        result.extend(array);
        result
    }
}

impl<T: Clone, A: Allocator + Default> From<&[T]> for Vector<T, A> {
    fn from(elements: &[T]) -> Self {
        let mut result = Self::with_capacity_in(elements.len(), A::default());
        result.extend_from_slice(elements);
        result
    }
}

//
//  Iteration
//

impl<T, A: Allocator> Extend<T> for Vector<T, A> {
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = T>,
    {
        self.try_extend(collection).unwrap_or_else(panic_from_failure);
    }
}

impl<'a, T: Copy + 'a, A: Allocator> Extend<&'a T> for Vector<T, A> {
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = &'a T>,
    {
        self.extend(collection.into_iter().copied());
    }
}

impl<T, A: Allocator + Default> iter::FromIterator<T> for Vector<T, A> {
    fn from_iter<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = T>,
    {
        Self::from_iter_in(collection, A::default())
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a Vector<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut Vector<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<T, A: Allocator> IntoIterator for Vector<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> Self::IntoIter {
        let this = mem::ManuallyDrop::new(self);

        //  Safety:
        //  -   `this` is never dropped, hence `raw` is only dropped once, by the iterator.
        let raw = unsafe { ptr::read(&this.raw) };

        //  Safety:
        //  -   The first `length` slots of `raw` are initialized.
        unsafe { IntoIter::new(raw, this.length) }
    }
}

#[cfg(test)]
mod tests {

    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use crate::vector::Vector;

    use crate::utils::tester::*;

    fn hash_of<H: Hash + ?Sized>(value: &H) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn trait_debug() {
        let vec: Vector<_> = [1, 2, 3].into();

        assert_eq!("[1, 2, 3]", format!("{:?}", vec));
    }

    #[test]
    fn trait_default() {
        let vec: Vector<i32> = Vector::default();

        assert!(vec.is_empty());
        assert_eq!(0, vec.capacity());
    }

    #[test]
    fn trait_clone_exact_capacity() {
        let mut vec: Vector<_> = Vector::with_capacity(10);
        vec.extend([1, 2, 3]);

        let copy = vec.clone();

        assert_eq!(vec, copy);
        assert_eq!(3, copy.capacity());
        assert_ne!(vec.as_ptr(), copy.as_ptr());
    }

    #[test]
    fn trait_clone_allocator() {
        let allocator = TestAllocator::unlimited();

        let mut vec = Vector::new_in(&allocator);
        vec.extend([1, 2, 3]);

        let copy = vec.clone();

        assert_eq!(vec![12, 12], allocator.allocation_sizes());

        drop(copy);
        drop(vec);

        assert_eq!(0, allocator.allocations().len());
    }

    #[test]
    fn trait_clone_from_reuse() {
        let count = SpyCount::zero();

        let source: Vector<_> = (0..3).map(|i| SpyElement::new(&count, i)).collect();

        let mut target: Vector<_> = (10..15).map(|i| SpyElement::new(&count, i)).collect();
        let before = target.as_ptr();

        assert_eq!(8, count.get());

        target.clone_from(&source);

        assert_eq!(source, target);
        assert_eq!(5, target.capacity());
        assert_eq!(before, target.as_ptr());
        assert_eq!(6, count.get());
    }

    #[test]
    fn trait_clone_from_grow_remainder() {
        let source: Vector<_> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();

        let mut target: Vector<String> = Vector::with_capacity(6);
        target.push("z".to_string());

        target.clone_from(&source);

        assert_eq!(source, target);
        assert_eq!(6, target.capacity());
    }

    #[test]
    fn trait_clone_from_reallocate() {
        let allocator = TestAllocator::unlimited();

        let mut source = Vector::new_in(&allocator);
        source.extend([1u32, 2, 3, 4]);

        let mut target = Vector::with_capacity_in(2, &allocator);
        target.push(9u32);

        target.clone_from(&source);

        assert_eq!(source, target);
        assert_eq!(4, target.capacity());

        //  The former storage of `target` was released.
        assert_eq!(vec![16, 16], allocator.allocation_sizes());
    }

    #[test]
    fn trait_clone_panicky() {
        let count = SpyCount::zero();

        let mut source: Vector<_> = Vector::new();
        source.push(PanickyClone::new(&count, 0));
        source.push(PanickyClone::new(&count, 1));
        source.push(PanickyClone::panicky(&count, 2));

        let panicked = catch_unwind(AssertUnwindSafe(|| source.clone()));
        assert!(panicked.is_err());

        //  The partial clone was dropped.
        assert_eq!(3, count.get());

        let mut target: Vector<_> = Vector::with_capacity(4);
        target.push(PanickyClone::new(&count, 9));

        let panicked = catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
        assert!(panicked.is_err());

        assert_eq!(2, target.len());
        assert_eq!(vec![0, 1], target.iter().map(|e| e.value()).collect::<Vec<_>>());
        assert_eq!(5, count.get());

        drop(target);
        drop(source);

        assert_eq!(0, count.get());
    }

    #[test]
    fn trait_equality() {
        let a: Vector<_> = [1, 2, 3].into();
        let mut b: Vector<_> = [1, 2, 3].into();

        assert_eq!(a, b);
        assert_eq!(a, [1, 2, 3]);
        assert_eq!(a, &[1, 2, 3][..]);

        b[1] = 5;
        assert_ne!(a, b);

        let c: Vector<_> = [1, 2].into();
        assert_ne!(a, c);
    }

    #[test]
    fn trait_ordering() {
        let short: Vector<_> = [1, 2].into();
        let middle: Vector<_> = [1, 2, 3].into();
        let long: Vector<_> = [1, 2, 4].into();

        assert!(short < middle);
        assert!(middle < long);
        assert!(long > short);
        assert!(middle <= middle.clone());
        assert!(middle >= middle.clone());

        let empty: Vector<i32> = Vector::new();
        assert!(empty < short);
    }

    #[test]
    fn trait_hash() {
        let vec: Vector<_> = [1, 2, 3].into();

        assert_eq!(hash_of(&[1, 2, 3][..]), hash_of(&vec));
    }

    #[test]
    fn trait_index_range() {
        let mut vec: Vector<_> = [1, 2, 3, 4].into();

        assert_eq!(&[2, 3], &vec[1..3]);

        vec[2..].copy_from_slice(&[7, 8]);
        assert_eq!(vec, [1, 2, 7, 8]);
    }

    #[test]
    #[should_panic]
    fn trait_index_out_of_bounds() {
        let vec: Vector<_> = [1, 2, 3].into();

        let _ = vec[3];
    }

    #[test]
    fn trait_from_iterator() {
        let vec: Vector<_> = [1, 2, 3, 4, 5].iter().copied().collect();

        assert_eq!(5, vec.len());
        assert_eq!(5, vec.capacity());
    }

    #[test]
    fn trait_from_slice() {
        let vec: Vector<_> = Vector::from(&["a", "b"][..]);

        assert_eq!(vec, ["a", "b"]);
    }

    #[test]
    fn trait_extend_references() {
        let mut vec: Vector<_> = [1].into();

        vec.extend([2, 3].iter());

        assert_eq!(vec, [1, 2, 3]);
    }

    #[test]
    fn trait_extend_panicky() {
        let mut vec: Vector<u32> = Vector::new();

        let panicked = catch_unwind(AssertUnwindSafe(|| vec.extend(PanickyIterator::new(3))));
        assert!(panicked.is_err());

        assert_eq!(vec, [0, 1, 2]);
    }

    #[test]
    fn trait_into_iterator_references() {
        let mut vec: Vector<_> = [1, 2, 3].into();

        for e in &mut vec {
            *e *= 10;
        }

        let mut sum = 0;
        for e in &vec {
            sum += *e;
        }

        assert_eq!(60, sum);
    }
} //  mod tests
