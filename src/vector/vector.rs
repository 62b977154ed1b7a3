//! The Vector

use super::root::{iter, mem, ops, ptr, result, slice};

use super::allocator::Allocator;
use super::failure::{Failure, Result};
use super::gap::{GapCloser, GapFiller};
use super::raw_vector::{Gap, RawVector};

#[cfg(feature = "with-std")]
use super::allocator::DefaultAllocator;

//
//  Public Interface
//

/// `Vector`
#[cfg(not(feature = "with-std"))]
pub struct Vector<T, A: Allocator> {
    pub(super) raw: RawVector<T, A>,
    pub(super) length: usize,
}

/// `Vector`
#[cfg(feature = "with-std")]
pub struct Vector<T, A: Allocator = DefaultAllocator> {
    //  The storage, its capacity, and its allocator.
    pub(super) raw: RawVector<T, A>,
    //  The number of elements in the vector.
    //
    //  The first `length` slots of `raw` are initialized, the others are not.
    pub(super) length: usize,
}

#[cfg(feature = "with-std")]
impl<T> Vector<T> {
    /// Creates a new, empty, instance.
    ///
    /// No memory is allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let vec: Vector<i32> = Vector::new();
    ///
    /// assert_eq!(0, vec.len());
    /// assert_eq!(0, vec.capacity());
    /// ```
    pub const fn new() -> Self {
        Self::new_in(DefaultAllocator)
    }

    /// Creates a new, empty, instance with a capacity of exactly `capacity`.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let vec: Vector<i32> = Vector::with_capacity(5);
    ///
    /// assert_eq!(0, vec.len());
    /// assert_eq!(5, vec.capacity());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_in(capacity, DefaultAllocator)
    }

    /// Creates a new instance containing `count` clones of `value`.
    ///
    /// The capacity is exactly `count`.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let vec = Vector::from_elem(3, 42);
    ///
    /// assert_eq!(&[42, 42, 42], vec.as_slice());
    /// assert_eq!(3, vec.capacity());
    /// ```
    pub fn from_elem(count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_elem_in(count, value, DefaultAllocator)
    }

    /// Creates a new instance containing `count` default values.
    ///
    /// The capacity is exactly `count`.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let vec: Vector<String> = Vector::with_len(2);
    ///
    /// assert_eq!(2, vec.len());
    /// assert!(vec.iter().all(|s| s.is_empty()));
    /// ```
    pub fn with_len(count: usize) -> Self
    where
        T: Default,
    {
        let mut result = Self::with_capacity(count);
        result.fill_with(count, T::default);
        result
    }
}

impl<T, A: Allocator> Vector<T, A> {
    /// Creates a new, empty, instance using `allocator`.
    ///
    /// No memory is allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::allocator::DefaultAllocator;
    /// #   use contigo::vector::Vector;
    /// let vec: Vector<i32> = Vector::new_in(DefaultAllocator);
    ///
    /// assert!(vec.is_empty());
    /// ```
    pub const fn new_in(allocator: A) -> Self {
        Self { raw: RawVector::new(allocator), length: 0 }
    }

    /// Creates a new, empty, instance with a capacity of exactly `capacity`, using `allocator`.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::allocator::DefaultAllocator;
    /// #   use contigo::failure::Failure;
    /// #   use contigo::vector::Vector;
    /// let vec = Vector::<u64, _>::try_with_capacity_in(4, DefaultAllocator).unwrap();
    /// assert_eq!(4, vec.capacity());
    ///
    /// let vec = Vector::<u64, _>::try_with_capacity_in(usize::MAX, DefaultAllocator);
    /// assert_eq!(Some(Failure::BytesOverflow), vec.err());
    /// ```
    pub fn try_with_capacity_in(capacity: usize, allocator: A) -> Result<Self> {
        let raw = RawVector::try_with_capacity(capacity, allocator)?;

        Ok(Self { raw, length: 0 })
    }

    /// Creates a new, empty, instance with a capacity of exactly `capacity`, using `allocator`.
    ///
    /// Calling this method is equivalent to calling `try_with_capacity_in` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn with_capacity_in(capacity: usize, allocator: A) -> Self {
        Self::try_with_capacity_in(capacity, allocator).unwrap_or_else(panic_from_failure)
    }

    /// Creates a new instance containing `count` clones of `value`, using `allocator`.
    ///
    /// The capacity is exactly `count`.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn from_elem_in(count: usize, value: T, allocator: A) -> Self
    where
        T: Clone,
    {
        let mut result = Self::with_capacity_in(count, allocator);
        result.fill(count, value);
        result
    }

    /// Creates a new instance containing the elements of `collection`, in order, using `allocator`.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::allocator::DefaultAllocator;
    /// #   use contigo::vector::Vector;
    /// let vec = Vector::from_iter_in(1..4, DefaultAllocator);
    ///
    /// assert_eq!(&[1, 2, 3], vec.as_slice());
    /// ```
    pub fn from_iter_in<C>(collection: C, allocator: A) -> Self
    where
        C: IntoIterator<Item = T>,
    {
        let mut result = Self::new_in(allocator);
        result.extend(collection);
        result
    }

    /// Creates a new instance containing clones of the elements of `self`, using `allocator`.
    ///
    /// The capacity is exactly the length of `self`, which is left untouched.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    pub fn try_clone_in<B: Allocator>(&self, allocator: B) -> Result<Vector<T, B>>
    where
        T: Clone,
    {
        let mut result = Vector::try_with_capacity_in(self.length, allocator)?;
        result.try_extend_from_slice(self.as_slice())?;

        Ok(result)
    }

    /// Creates a new instance containing clones of the elements of `self`, using `allocator`.
    ///
    /// Calling this method is equivalent to calling `try_clone_in` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::allocator::DefaultAllocator;
    /// #   use contigo::vector::Vector;
    /// let mut vec: Vector<_> = Vector::with_capacity(8);
    /// vec.extend([1, 2, 3]);
    ///
    /// let copy = vec.clone_in(DefaultAllocator);
    ///
    /// assert_eq!(vec, copy);
    /// assert_eq!(3, copy.capacity());
    /// assert_eq!(8, vec.capacity());
    /// ```
    pub fn clone_in<B: Allocator>(&self, allocator: B) -> Vector<T, B>
    where
        T: Clone,
    {
        self.try_clone_in(allocator).unwrap_or_else(panic_from_failure)
    }

    /// Moves the elements of `self` into a new instance, using `allocator`.
    ///
    /// The capacity is exactly the length of `self`, whose storage is released.
    ///
    /// #   Errors
    ///
    /// Returns an error, alongside `self` untouched, if the memory cannot be allocated.
    pub fn try_move_in<B: Allocator>(self, allocator: B) -> result::Result<Vector<T, B>, (Failure, Self)> {
        let mut result = match Vector::try_with_capacity_in(self.length, allocator) {
            Ok(result) => result,
            Err(failure) => return Err((failure, self)),
        };

        for e in self {
            result.push_within_capacity(e);
        }

        Ok(result)
    }

    /// Moves the elements of `self` into a new instance, using `allocator`.
    ///
    /// Calling this method is equivalent to calling `try_move_in` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::allocator::DefaultAllocator;
    /// #   use contigo::vector::Vector;
    /// let vec: Vector<_> = ["a".to_string(), "b".to_string()].into();
    ///
    /// let moved = vec.move_in(DefaultAllocator);
    ///
    /// assert_eq!(moved, ["a", "b"]);
    /// ```
    pub fn move_in<B: Allocator>(self, allocator: B) -> Vector<T, B> {
        self.try_move_in(allocator).unwrap_or_else(|(failure, _)| panic_from_failure(failure))
    }

    /// Returns a reference to the allocator.
    pub fn allocator(&self) -> &A {
        self.raw.allocator()
    }

    /// Moves the elements out of `self`, into a new instance, leaving `self` empty.
    ///
    /// The storage is transferred as is, no element is moved. `self` retains a clone of its allocator, and can be
    /// reused.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let mut vec: Vector<_> = [1, 2, 3].into();
    ///
    /// let taken = vec.take();
    ///
    /// assert_eq!(&[1, 2, 3], taken.as_slice());
    /// assert_eq!(0, vec.len());
    /// assert_eq!(0, vec.capacity());
    ///
    /// vec.push(4);
    /// assert_eq!(&[4], vec.as_slice());
    /// ```
    pub fn take(&mut self) -> Self
    where
        A: Clone,
    {
        let empty = Self::new_in(self.raw.allocator().clone());

        mem::replace(self, empty)
    }

    /// Replaces the elements of `self` by those of `collection`.
    ///
    /// The current capacity is reused, if sufficient.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let mut vec: Vector<_> = [1, 2, 3, 4, 5].into();
    ///
    /// vec.assign([10, 20, 30]);
    ///
    /// assert_eq!(&[10, 20, 30], vec.as_slice());
    /// assert_eq!(5, vec.capacity());
    /// ```
    pub fn assign<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = T>,
    {
        self.clear();
        self.extend(collection);
    }

    /// Returns whether the instance contains any element, or not.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let mut vec: Vector<_> = Vector::new();
    /// assert!(vec.is_empty());
    ///
    /// vec.push(1);
    /// assert!(!vec.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of elements contained in the instance.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns the number of elements the instance can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Returns the maximum number of elements any instance can hold.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let vec: Vector<u32> = Vector::new();
    /// assert_eq!(isize::MAX as usize / 4, vec.max_len());
    /// ```
    pub fn max_len(&self) -> usize {
        RawVector::<T, A>::max_capacity()
    }

    /// Returns a reference to the ith element, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let vec: Vector<_> = [1].into();
    ///
    /// assert_eq!(Some(&1), vec.get(0));
    /// assert_eq!(None, vec.get(1));
    /// ```
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns a mutable reference to the ith element, if any.
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Returns a reference to the ith element.
    ///
    /// #   Safety
    ///
    /// -   Assumes that i is a valid index.
    pub unsafe fn get_unchecked(&self, i: usize) -> &T {
        debug_assert!(i < self.length);

        //  Safety:
        //  -   `i` is within bounds, as per pre-condition.
        unsafe { &*self.as_ptr().add(i) }
    }

    /// Returns a mutable reference to the ith element.
    ///
    /// #   Safety
    ///
    /// -   Assumes that i is a valid index.
    pub unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut T {
        debug_assert!(i < self.length);

        //  Safety:
        //  -   `i` is within bounds, as per pre-condition.
        unsafe { &mut *self.as_mut_ptr().add(i) }
    }

    /// Returns a reference to the element at `position`.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::OutOfRange` if `position` is not less than the length.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::failure::Failure;
    /// #   use contigo::vector::Vector;
    /// let vec: Vector<_> = [10, 20, 30].into();
    ///
    /// assert_eq!(Ok(&30), vec.at(2));
    /// assert_eq!(Err(Failure::OutOfRange { position: 3, length: 3 }), vec.at(3));
    /// ```
    pub fn at(&self, position: usize) -> Result<&T> {
        let length = self.length;

        self.get(position).ok_or(Failure::OutOfRange { position, length })
    }

    /// Returns a mutable reference to the element at `position`.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::OutOfRange` if `position` is not less than the length.
    pub fn at_mut(&mut self, position: usize) -> Result<&mut T> {
        let length = self.length;

        self.get_mut(position).ok_or(Failure::OutOfRange { position, length })
    }

    /// Returns a reference to the first element.
    ///
    /// #   Panics
    ///
    /// Panics if the instance is empty.
    pub fn front(&self) -> &T {
        self.as_slice().first().unwrap_or_else(|| panic_empty("front"))
    }

    /// Returns a mutable reference to the first element.
    ///
    /// #   Panics
    ///
    /// Panics if the instance is empty.
    pub fn front_mut(&mut self) -> &mut T {
        self.as_mut_slice().first_mut().unwrap_or_else(|| panic_empty("front_mut"))
    }

    /// Returns a reference to the last element.
    ///
    /// #   Panics
    ///
    /// Panics if the instance is empty.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let vec: Vector<_> = [1, 2, 3].into();
    ///
    /// assert_eq!(1, *vec.front());
    /// assert_eq!(3, *vec.back());
    /// ```
    pub fn back(&self) -> &T {
        self.as_slice().last().unwrap_or_else(|| panic_empty("back"))
    }

    /// Returns a mutable reference to the last element.
    ///
    /// #   Panics
    ///
    /// Panics if the instance is empty.
    pub fn back_mut(&mut self) -> &mut T {
        self.as_mut_slice().last_mut().unwrap_or_else(|| panic_empty("back_mut"))
    }

    /// Returns a pointer to the first element.
    ///
    /// The pointer is dangling, though non-null, if the capacity is 0. It is invalidated by any reallocation.
    pub fn as_ptr(&self) -> *const T {
        self.raw.as_ptr()
    }

    /// Returns a mutable pointer to the first element.
    ///
    /// The pointer is dangling, though non-null, if the capacity is 0. It is invalidated by any reallocation.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.raw.as_mut_ptr()
    }

    /// Returns a slice of the elements.
    pub fn as_slice(&self) -> &[T] {
        //  Safety:
        //  -   The pointer is non-null, and aligned.
        //  -   The first `length` elements are initialized.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.length) }
    }

    /// Returns a mutable slice of the elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let length = self.length;

        //  Safety:
        //  -   The pointer is non-null, and aligned.
        //  -   The first `length` elements are initialized.
        //  -   Exclusive access, as per &mut self.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), length) }
    }

    /// Returns an iterator over the elements, front to back.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a mutable iterator over the elements, front to back.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns an iterator over the elements, back to front.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let vec: Vector<_> = [1, 2, 3].into();
    ///
    /// let reversed: Vec<_> = vec.iter_rev().copied().collect();
    /// assert_eq!(vec![3, 2, 1], reversed);
    /// ```
    pub fn iter_rev(&self) -> iter::Rev<slice::Iter<'_, T>> {
        self.iter().rev()
    }

    /// Reserves memory for a total of `capacity` elements.
    ///
    /// If `capacity` exceeds the current capacity, the elements are relocated into a storage of exactly `capacity`
    /// slots; otherwise, this method has no effect. In case of error, the instance is left unchanged.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::failure::Failure;
    /// #   use contigo::vector::Vector;
    /// let mut vec: Vector<u64> = Vector::new();
    ///
    /// //  BytesOverflow signals that the size of the storage to allocate, in bytes, overflows `isize`.
    /// assert_eq!(Err(Failure::BytesOverflow), vec.try_reserve(usize::MAX / 4));
    ///
    /// assert_eq!(Ok(()), vec.try_reserve(6));
    /// assert_eq!(6, vec.capacity());
    ///
    /// //  Reserving less than the current capacity has no effect.
    /// assert_eq!(Ok(()), vec.try_reserve(2));
    /// assert_eq!(6, vec.capacity());
    /// ```
    pub fn try_reserve(&mut self, capacity: usize) -> Result<()> {
        if capacity <= self.raw.capacity() {
            return Ok(());
        }

        //  Safety:
        //  -   The first `length` slots are initialized.
        //  -   `length < capacity`.
        unsafe { self.raw.try_reallocate(self.length, capacity, Gap::default()) }
    }

    /// Reserves memory for a total of `capacity` elements.
    ///
    /// Calling this method is equivalent to calling `try_reserve` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn reserve(&mut self, capacity: usize) {
        self.try_reserve(capacity).unwrap_or_else(panic_from_failure);
    }

    /// Shrinks the capacity to the number of elements.
    ///
    /// If the instance is empty, its storage is released.
    ///
    /// #   Errors
    ///
    /// Returns an error if the smaller storage cannot be allocated, leaving the instance unchanged.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let mut vec: Vector<_> = Vector::with_capacity(8);
    /// vec.extend([1, 2, 3]);
    ///
    /// assert_eq!(Ok(()), vec.try_shrink_to_fit());
    /// assert_eq!(3, vec.capacity());
    /// ```
    pub fn try_shrink_to_fit(&mut self) -> Result<()> {
        if self.raw.capacity() == self.length {
            return Ok(());
        }

        //  Safety:
        //  -   The first `length` slots are initialized.
        unsafe { self.raw.try_reallocate(self.length, self.length, Gap::default()) }
    }

    /// Shrinks the capacity to the number of elements.
    ///
    /// Calling this method is equivalent to calling `try_shrink_to_fit` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn shrink_to_fit(&mut self) {
        self.try_shrink_to_fit().unwrap_or_else(panic_from_failure);
    }

    /// Drops all elements.
    ///
    /// The capacity is retained; use `shrink_to_fit` to release it.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let mut vec: Vector<_> = [1, 2, 3].into();
    ///
    /// vec.clear();
    /// assert_eq!(0, vec.len());
    /// assert_eq!(3, vec.capacity());
    /// ```
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drops the elements beyond the first `length`, if any.
    pub fn truncate(&mut self, length: usize) {
        if length >= self.length {
            return;
        }

        //  Safety:
        //  -   `length` is within bounds.
        let excess = unsafe {
            ptr::slice_from_raw_parts_mut(self.as_mut_ptr().add(length), self.length - length)
        };

        //  Shorten first: should a Drop panic, the excess elements are already out of the vector.
        self.length = length;

        //  Safety:
        //  -   The excess elements are initialized, and no longer reachable.
        unsafe { ptr::drop_in_place(excess) };
    }

    /// Appends an element to the back.
    ///
    /// If the capacity is exhausted, it is doubled first.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, in which case the value is dropped and the instance is left
    /// unchanged.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// assert_eq!(Ok(()), vec.try_push(3));
    /// assert_eq!(3, vec[0]);
    /// ```
    pub fn try_push(&mut self, value: T) -> Result<()> {
        self.try_make_room(1)?;
        self.push_within_capacity(value);

        Ok(())
    }

    /// Appends an element to the back.
    ///
    /// Calling this method is equivalent to calling `try_push` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let mut vec: Vector<_> = Vector::new();
    /// vec.push(1);
    /// vec.push(2);
    ///
    /// assert_eq!(&[1, 2], vec.as_slice());
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).unwrap_or_else(panic_from_failure);
    }

    /// Appends an element to the back, constructing it in place.
    ///
    /// Room is made before invoking `constructor`; should it panic, the elements are left unchanged.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, in which case `constructor` is not invoked.
    pub fn try_emplace_back<F>(&mut self, constructor: F) -> Result<&mut T>
    where
        F: FnOnce() -> T,
    {
        self.try_make_room(1)?;

        let index = self.length;

        //  Safety:
        //  -   `index` is within capacity, and uninitialized.
        unsafe { ptr::write(self.as_mut_ptr().add(index), constructor()) };

        self.length += 1;

        //  Safety:
        //  -   `index` is within bounds.
        Ok(unsafe { self.get_unchecked_mut(index) })
    }

    /// Appends an element to the back, constructing it in place.
    ///
    /// Calling this method is equivalent to calling `try_emplace_back` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let mut vec: Vector<String> = Vector::new();
    ///
    /// let last = vec.emplace_back(|| "A".repeat(5));
    /// last.push('!');
    ///
    /// assert_eq!("AAAAA!", vec[0]);
    /// ```
    pub fn emplace_back<F>(&mut self, constructor: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.try_emplace_back(constructor).unwrap_or_else(panic_from_failure)
    }

    /// Removes the last element, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let mut vec: Vector<_> = [1, 2].into();
    ///
    /// assert_eq!(Some(2), vec.pop());
    /// assert_eq!(Some(1), vec.pop());
    /// assert_eq!(None, vec.pop());
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.length == 0 {
            return None;
        }

        self.length -= 1;

        //  Safety:
        //  -   The element at `length` is initialized, and no longer reachable.
        Some(unsafe { ptr::read(self.as_ptr().add(self.length)) })
    }

    /// Inserts an element at `index`, shifting all elements after it to the right.
    ///
    /// Returns a reference to the inserted element.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, in which case the value is dropped and the instance is left
    /// unchanged.
    ///
    /// #   Panics
    ///
    /// Panics if `index` is greater than the length.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let mut vec: Vector<_> = [1, 3].into();
    ///
    /// assert_eq!(Ok(&mut 2), vec.try_insert(1, 2));
    /// assert_eq!(&[1, 2, 3], vec.as_slice());
    /// ```
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T> {
        self.try_emplace(index, || value)
    }

    /// Inserts an element at `index`, shifting all elements after it to the right.
    ///
    /// Calling this method is equivalent to calling `try_insert` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `index` is greater than the length, or if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let mut vec: Vector<_> = [1, 2, 3].into();
    ///
    /// assert_eq!(99, *vec.insert(1, 99));
    /// assert_eq!(&[1, 99, 2, 3], vec.as_slice());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.try_insert(index, value).unwrap_or_else(panic_from_failure)
    }

    /// Inserts an element at `index`, constructing it in place.
    ///
    /// Room is made before invoking `constructor`; should it panic, the elements are left unchanged.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, in which case `constructor` is not invoked.
    ///
    /// #   Panics
    ///
    /// Panics if `index` is greater than the length.
    pub fn try_emplace<F>(&mut self, index: usize, constructor: F) -> Result<&mut T>
    where
        F: FnOnce() -> T,
    {
        check_insertion_index(index, self.length);

        self.try_open_gap(index, 1)?;

        {
            //  Safety:
            //  -   A gap of 1 was opened at `index`.
            let mut filler = unsafe { GapFiller::new(self.raw.as_mut_ptr(), &mut self.length, index, 1) };
            filler.push(constructor());
        }

        //  Safety:
        //  -   `index` is within bounds.
        Ok(unsafe { self.get_unchecked_mut(index) })
    }

    /// Inserts an element at `index`, constructing it in place.
    ///
    /// Calling this method is equivalent to calling `try_emplace` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `index` is greater than the length, or if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let mut vec: Vector<String> = Vector::new();
    /// vec.push("Hello".to_string());
    ///
    /// vec.emplace(0, || "World".to_string());
    ///
    /// assert_eq!("World", vec[0]);
    /// ```
    pub fn emplace<F>(&mut self, index: usize, constructor: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.try_emplace(index, constructor).unwrap_or_else(panic_from_failure)
    }

    /// Inserts `count` clones of `value` at `index`.
    ///
    /// Returns the inserted elements.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, leaving the instance unchanged.
    ///
    /// #   Panics
    ///
    /// Panics if `index` is greater than the length.
    pub fn try_insert_n(&mut self, index: usize, count: usize, value: T) -> Result<&mut [T]>
    where
        T: Clone,
    {
        check_insertion_index(index, self.length);

        self.try_open_gap(index, count)?;

        {
            //  Safety:
            //  -   A gap of `count` was opened at `index`.
            let mut filler = unsafe { GapFiller::new(self.raw.as_mut_ptr(), &mut self.length, index, count) };

            if count > 0 {
                for _ in 1..count {
                    filler.push(value.clone());
                }

                filler.push(value);
            }
        }

        Ok(&mut self.as_mut_slice()[index..index + count])
    }

    /// Inserts `count` clones of `value` at `index`.
    ///
    /// Calling this method is equivalent to calling `try_insert_n` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `index` is greater than the length, or if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let mut vec: Vector<_> = [1, 2].into();
    ///
    /// assert_eq!(&[7, 7, 7], vec.insert_n(1, 3, 7));
    /// assert_eq!(&[1, 7, 7, 7, 2], vec.as_slice());
    /// ```
    pub fn insert_n(&mut self, index: usize, count: usize, value: T) -> &mut [T]
    where
        T: Clone,
    {
        self.try_insert_n(index, count, value).unwrap_or_else(panic_from_failure)
    }

    /// Inserts clones of the elements of `elements` at `index`, in order.
    ///
    /// Returns the inserted elements.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, leaving the instance unchanged.
    ///
    /// #   Panics
    ///
    /// Panics if `index` is greater than the length.
    pub fn try_insert_slice(&mut self, index: usize, elements: &[T]) -> Result<&mut [T]>
    where
        T: Clone,
    {
        check_insertion_index(index, self.length);

        let count = elements.len();

        self.try_open_gap(index, count)?;

        {
            //  Safety:
            //  -   A gap of `count` was opened at `index`.
            let mut filler = unsafe { GapFiller::new(self.raw.as_mut_ptr(), &mut self.length, index, count) };

            for e in elements {
                filler.push(e.clone());
            }
        }

        Ok(&mut self.as_mut_slice()[index..index + count])
    }

    /// Inserts clones of the elements of `elements` at `index`, in order.
    ///
    /// Calling this method is equivalent to calling `try_insert_slice` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `index` is greater than the length, or if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let mut vec: Vector<_> = [1, 4].into();
    ///
    /// vec.insert_slice(1, &[2, 3]);
    /// assert_eq!(&[1, 2, 3, 4], vec.as_slice());
    /// ```
    pub fn insert_slice(&mut self, index: usize, elements: &[T]) -> &mut [T]
    where
        T: Clone,
    {
        self.try_insert_slice(index, elements).unwrap_or_else(panic_from_failure)
    }

    /// Inserts the elements of `collection` at `index`, in order.
    ///
    /// The elements are first appended, then rotated into place; should the iterator panic, the elements already
    /// obtained remain at the back.
    ///
    /// Returns the inserted elements.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, in which case the elements already obtained are dropped and
    /// the instance is left unchanged.
    ///
    /// #   Panics
    ///
    /// Panics if `index` is greater than the length.
    pub fn try_insert_iter<C>(&mut self, index: usize, collection: C) -> Result<&mut [T]>
    where
        C: IntoIterator<Item = T>,
    {
        check_insertion_index(index, self.length);

        let before = self.length;

        if let Err(failure) = self.try_extend(collection) {
            self.truncate(before);
            return Err(failure);
        }

        let count = self.length - before;

        let inserted = &mut self.as_mut_slice()[index..];
        inserted.rotate_right(count);

        Ok(&mut inserted[..count])
    }

    /// Inserts the elements of `collection` at `index`, in order.
    ///
    /// Calling this method is equivalent to calling `try_insert_iter` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `index` is greater than the length, or if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let mut vec: Vector<_> = [1, 5].into();
    ///
    /// assert_eq!(&[2, 3, 4], vec.insert_iter(1, 2..5));
    /// assert_eq!(&[1, 2, 3, 4, 5], vec.as_slice());
    /// ```
    pub fn insert_iter<C>(&mut self, index: usize, collection: C) -> &mut [T]
    where
        C: IntoIterator<Item = T>,
    {
        self.try_insert_iter(index, collection).unwrap_or_else(panic_from_failure)
    }

    /// Drops the element at `index`, shifting all elements after it to the left.
    ///
    /// Returns the element now at `index`, if any.
    ///
    /// #   Panics
    ///
    /// Panics if `index` is not less than the length.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let mut vec: Vector<_> = [1, 2, 3].into();
    ///
    /// assert_eq!(Some(&mut 3), vec.erase(1));
    /// assert_eq!(None, vec.erase(1));
    /// assert_eq!(&[1], vec.as_slice());
    /// ```
    pub fn erase(&mut self, index: usize) -> Option<&mut T> {
        check_element_index(index, self.length);

        self.erase_range(index..index + 1)
    }

    /// Drops the elements within `range`, shifting all elements after it to the left.
    ///
    /// Returns the element now at the start of `range`, if any.
    ///
    /// #   Panics
    ///
    /// Panics if the start of `range` is greater than its end, or if its end is greater than the length.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let mut vec: Vector<_> = [1, 2, 3, 4, 5].into();
    ///
    /// assert_eq!(Some(&mut 4), vec.erase_range(1..3));
    /// assert_eq!(&[1, 4, 5], vec.as_slice());
    ///
    /// assert_eq!(None, vec.erase_range(1..));
    /// assert_eq!(&[1], vec.as_slice());
    /// ```
    pub fn erase_range<R>(&mut self, range: R) -> Option<&mut T>
    where
        R: ops::RangeBounds<usize>,
    {
        let (start, end) = resolve_range(range, self.length);

        {
            //  Safety:
            //  -   `start <= end <= length`, as per `resolve_range`.
            //  -   The gap is dropped right after.
            let mut closer = unsafe { GapCloser::new(self.raw.as_mut_ptr(), &mut self.length, start, end) };

            //  Safety:
            //  -   The elements of the gap are initialized, and no longer reachable.
            unsafe { ptr::drop_in_place(closer.gap()) };
        }

        self.get_mut(start)
    }

    /// Removes the element at `index`, shifting all elements after it to the left, and returns it.
    ///
    /// #   Panics
    ///
    /// Panics if `index` is not less than the length.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let mut vec: Vector<_> = [1, 2, 3].into();
    ///
    /// assert_eq!(2, vec.remove(1));
    /// assert_eq!(&[1, 3], vec.as_slice());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        check_element_index(index, self.length);

        let base = self.as_mut_ptr();

        //  Safety:
        //  -   `index` is within bounds.
        //  -   The tail is within bounds, and `ptr::copy` handles the overlap.
        let result = unsafe {
            let result = ptr::read(base.add(index));
            ptr::copy(base.add(index + 1), base.add(index), self.length - index - 1);
            result
        };

        self.length -= 1;

        result
    }

    /// Resizes the instance to `length` elements, appending clones of `value` or dropping the excess as needed.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, leaving the instance unchanged.
    pub fn try_resize(&mut self, length: usize, value: T) -> Result<()>
    where
        T: Clone,
    {
        if length <= self.length {
            self.truncate(length);
            return Ok(());
        }

        let extra = length - self.length;

        self.try_make_room(extra)?;
        self.fill(extra, value);

        Ok(())
    }

    /// Resizes the instance to `length` elements, appending clones of `value` or dropping the excess as needed.
    ///
    /// Calling this method is equivalent to calling `try_resize` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let mut vec: Vector<_> = [1, 2, 3].into();
    ///
    /// vec.resize(5, 7);
    /// assert_eq!(&[1, 2, 3, 7, 7], vec.as_slice());
    ///
    /// vec.resize(2, 0);
    /// assert_eq!(&[1, 2], vec.as_slice());
    /// ```
    pub fn resize(&mut self, length: usize, value: T)
    where
        T: Clone,
    {
        self.try_resize(length, value).unwrap_or_else(panic_from_failure);
    }

    /// Resizes the instance to `length` elements, appending values produced by `generator` or dropping the excess as
    /// needed.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, in which case `generator` is not invoked and the instance
    /// is left unchanged.
    pub fn try_resize_with<F>(&mut self, length: usize, generator: F) -> Result<()>
    where
        F: FnMut() -> T,
    {
        if length <= self.length {
            self.truncate(length);
            return Ok(());
        }

        let extra = length - self.length;

        self.try_make_room(extra)?;
        self.fill_with(extra, generator);

        Ok(())
    }

    /// Resizes the instance to `length` elements, appending values produced by `generator` or dropping the excess as
    /// needed.
    ///
    /// Calling this method is equivalent to calling `try_resize_with` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn resize_with<F>(&mut self, length: usize, generator: F)
    where
        F: FnMut() -> T,
    {
        self.try_resize_with(length, generator).unwrap_or_else(panic_from_failure);
    }

    /// Resizes the instance to `length` elements, appending default values or dropping the excess as needed.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let mut vec: Vector<_> = [1, 2].into();
    ///
    /// vec.resize_default(4);
    /// assert_eq!(&[1, 2, 0, 0], vec.as_slice());
    /// ```
    pub fn resize_default(&mut self, length: usize)
    where
        T: Default,
    {
        self.resize_with(length, T::default);
    }

    /// Appends clones of the elements of `elements`, in order.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, leaving the instance unchanged.
    pub fn try_extend_from_slice(&mut self, elements: &[T]) -> Result<()>
    where
        T: Clone,
    {
        self.try_make_room(elements.len())?;

        for e in elements {
            self.push_within_capacity(e.clone());
        }

        Ok(())
    }

    /// Appends clones of the elements of `elements`, in order.
    ///
    /// Calling this method is equivalent to calling `try_extend_from_slice` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn extend_from_slice(&mut self, elements: &[T])
    where
        T: Clone,
    {
        self.try_extend_from_slice(elements).unwrap_or_else(panic_from_failure);
    }

    /// Appends the elements of `collection`, in order.
    ///
    /// Room for the lower bound of the size hint is made upfront, the capacity then doubles as necessary.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated. The elements appended so far are retained, and the element
    /// which could not be stored is dropped.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::allocator::{Allocator, DefaultAllocator, Layout};
    /// #   use contigo::failure::Failure;
    /// #   use contigo::vector::Vector;
    /// //  An allocator which never succeeds.
    /// struct Exhausted;
    ///
    /// impl Allocator for Exhausted {
    ///     unsafe fn allocate(&self, _: Layout) -> *mut u8 { std::ptr::null_mut() }
    ///     unsafe fn deallocate(&self, _: *mut u8, _: Layout) {}
    /// }
    ///
    /// let mut vec = Vector::new_in(Exhausted);
    /// assert_eq!(Err(Failure::OutOfMemory), vec.try_extend([1, 2, 3]));
    /// assert!(vec.is_empty());
    ///
    /// let mut vec: Vector<_> = Vector::new_in(DefaultAllocator);
    /// assert_eq!(Ok(()), vec.try_extend(1..4));
    /// assert_eq!(&[1, 2, 3], vec.as_slice());
    /// ```
    pub fn try_extend<C>(&mut self, collection: C) -> Result<()>
    where
        C: IntoIterator<Item = T>,
    {
        let iterator = collection.into_iter();

        let (lower, _) = iterator.size_hint();
        self.try_make_room(lower)?;

        for e in iterator {
            if self.length == self.raw.capacity() {
                self.try_make_room(1)?;
            }

            self.push_within_capacity(e);
        }

        Ok(())
    }

    /// Exchanges the elements, capacity, and allocator of `self` and `other`.
    ///
    /// No element is moved, cloned, or dropped.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use contigo::vector::Vector;
    /// let mut a: Vector<_> = [1, 2].into();
    /// let mut b: Vector<_> = [3, 4, 5].into();
    ///
    /// a.swap_with(&mut b);
    ///
    /// assert_eq!(&[3, 4, 5], a.as_slice());
    /// assert_eq!(&[1, 2], b.as_slice());
    /// ```
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    //  Ensures there is room for `extra` more elements, growing the storage as necessary.
    //
    //  On failure, the instance is left unchanged.
    fn try_make_room(&mut self, extra: usize) -> Result<()> {
        let required = self.length.checked_add(extra).ok_or(Failure::ElementsOverflow)?;

        if required <= self.raw.capacity() {
            return Ok(());
        }

        let capacity = self.raw.grown_capacity(required);

        //  Safety:
        //  -   The first `length` slots are initialized.
        //  -   `length <= required <= capacity`.
        unsafe { self.raw.try_reallocate(self.length, capacity, Gap::at(self.length, 0)) }
    }

    //  Appends `value`.
    //
    //  #   Panics
    //
    //  In debug mode, if there is no room for it; room must have been made beforehand.
    pub(super) fn push_within_capacity(&mut self, value: T) {
        debug_assert!(self.length < self.raw.capacity());

        //  Safety:
        //  -   The slot at `length` is within capacity, and uninitialized.
        unsafe { ptr::write(self.as_mut_ptr().add(self.length), value) };

        self.length += 1;
    }

    //  Opens a gap of `count` slots at `index`, growing the storage as necessary.
    //
    //  On success, the slots `[index, index + count)` are uninitialized, and the former elements from `index` onwards
    //  have been shifted by `count`; the length is unchanged, and the caller is expected to immediately wrap the gap
    //  into a `GapFiller`.
    //
    //  On failure, the instance is left unchanged.
    fn try_open_gap(&mut self, index: usize, count: usize) -> Result<()> {
        debug_assert!(index <= self.length);

        let required = self.length.checked_add(count).ok_or(Failure::ElementsOverflow)?;

        if required > self.raw.capacity() {
            let capacity = self.raw.grown_capacity(required);

            //  Safety:
            //  -   The first `length` slots are initialized.
            //  -   `index <= length`.
            //  -   `length + count <= capacity`.
            return unsafe { self.raw.try_reallocate(self.length, capacity, Gap::at(index, count)) };
        }

        let base = self.as_mut_ptr();

        //  Safety:
        //  -   `index + count + (length - index) <= capacity`, hence both ranges are within bounds.
        //  -   `ptr::copy` handles the overlap, moving from the back.
        unsafe { ptr::copy(base.add(index), base.add(index + count), self.length - index) };

        Ok(())
    }

    //  Appends `count` clones of `value`, the last being `value` itself.
    //
    //  Room must have been made beforehand.
    fn fill(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        if count == 0 {
            return;
        }

        for _ in 1..count {
            self.push_within_capacity(value.clone());
        }

        self.push_within_capacity(value);
    }

    //  Appends `count` values produced by `generator`.
    //
    //  Room must have been made beforehand.
    fn fill_with<F>(&mut self, count: usize, mut generator: F)
    where
        F: FnMut() -> T,
    {
        for _ in 0..count {
            self.push_within_capacity(generator());
        }
    }
}

impl<T, A: Allocator> Drop for Vector<T, A> {
    fn drop(&mut self) {
        //  The storage itself is released by `raw`.
        self.clear();
    }
}

/// A `Vector<T>` can be `Send` across threads whenever a `Vec<T>` can.
///
/// #   Example of Send.
///
/// ```
/// # use contigo::vector::Vector;
/// fn ensure_send<T: Send>(_: T) {}
///
/// let mut vec: Vector<_> = Vector::new();
/// vec.push("Hello".to_string());
///
/// ensure_send(vec);
/// ```
///
/// #   Example of not Send.
///
/// ```compile_fail
/// # use std::rc::Rc;
/// # use contigo::vector::Vector;
/// fn ensure_send<T: Send>(_: T) {}
///
/// let mut vec: Vector<_> = Vector::new();
/// vec.push(Rc::new(3));
///
/// ensure_send(vec);
/// ```
unsafe impl<T: Send, A: Allocator + Send> Send for Vector<T, A> {}

/// A `Vector<T>` can be shared across threads whenever a `Vec<T>` can; all mutations require `&mut`.
unsafe impl<T: Sync, A: Allocator + Sync> Sync for Vector<T, A> {}

//
//  Implementation Details
//

//  Resolves `range` into `[start, end)` within `length`.
fn resolve_range<R>(range: R, length: usize) -> (usize, usize)
where
    R: ops::RangeBounds<usize>,
{
    use ops::Bound;

    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.checked_add(1).unwrap_or_else(|| panic_range(usize::MAX, length)),
        Bound::Unbounded => 0,
    };

    let end = match range.end_bound() {
        Bound::Included(&end) => end.checked_add(1).unwrap_or_else(|| panic_range(usize::MAX, length)),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => length,
    };

    if start > end {
        panic!("Range starts at {} but ends at {}", start, end);
    }

    if end > length {
        panic_range(end, length);
    }

    (start, end)
}

fn check_insertion_index(index: usize, length: usize) {
    if index > length {
        panic!("Insertion index {} is greater than length {}", index, length);
    }
}

fn check_element_index(index: usize, length: usize) {
    if index >= length {
        panic!("Index {} is out of bounds for length {}", index, length);
    }
}

#[cold]
#[inline(never)]
fn panic_range(end: usize, length: usize) -> ! {
    panic!("Range ends at {} but length is {}", end, length);
}

#[cold]
#[inline(never)]
fn panic_empty(operation: &str) -> ! {
    panic!("{} called on an empty Vector", operation);
}

#[cold]
#[inline(never)]
pub(super) fn panic_from_failure<R>(failure: Failure) -> R {
    panic!("{}", failure);
}

//  mod tests
