//! #   The Vector.
//!
//! The `Vector` is a contiguous, growable, array of elements, akin to `Vec`, with explicit control over its capacity
//! and its allocator.
//!
//! ##  Under the covers.
//!
//! Under the covers the `Vector` is a single block of memory, of `capacity` slots, of which the first `len` are
//! initialized.
//!
//! The main consequences are:
//!
//! -   Appending an element when the capacity is exhausted relocates all elements into a new block, typically twice
//!     as large, invalidating any pointer into the former one.
//! -   Inserting or erasing in the middle shifts all the elements after the insertion or erasure point.
//!
//! #   Example: basic
//!
//! General usage of `Vector` involve pushing elements, either using `push`, to push one element at a time, or
//! `extend`, to push multiple elements at once.
//!
//! The faillible equivalents exist too: `try_push` and `try_extend`, as well as every other allocating method, such as
//! `try_insert` or `try_resize`, will return a `Result` indicating whether the operation succeeded, and the cause of
//! its failure if it did not.
//!
//! ```
//! use contigo::vector::Vector;
//!
//! let mut vec: Vector<_> = Vector::new();
//! vec.push(1);
//! vec.push(2);
//!
//! assert_eq!(2, vec.len());
//! assert_eq!(1, vec[0]);
//!
//! vec.extend([3, 4, 5]);
//!
//! assert_eq!(5, vec.len());
//! assert_eq!(4, vec[3]);
//!
//! for x in &vec {
//!     println!("{}", x);
//! }
//! ```
//!
//! #   Example: accessing elements
//!
//! `Vector` provides multiple ways to access elements:
//!
//! -   The `get` and `get_mut` methods allow faillible scalar access.
//! -   The `at` and `at_mut` methods allow faillible scalar access, reporting the position and length on failure.
//! -   The `unsafe` `get_unchecked` and `get_unchecked_mut` methods allow infaillible and unchecked scalar access.
//! -   The `Index` and `IndexMut` traits are implemented to provide infaillible checked access.
//! -   The `front` and `back` methods, and their `_mut` counterparts, access either end.
//!
//! ```
//! use contigo::failure::Failure;
//! use contigo::vector::Vector;
//!
//! let mut vec: Vector<_> = [1, 2, 3, 4, 5].into();
//!
//! assert_eq!(Some(1), vec.get(0).copied());
//! assert_eq!(Some(2), vec.get_mut(1).copied());
//!
//! assert_eq!(None, vec.get(5));
//! assert_eq!(Err(Failure::OutOfRange { position: 5, length: 5 }), vec.at(5));
//!
//! assert_eq!(1, unsafe { *vec.get_unchecked(0) });
//! assert_eq!(2, unsafe { *vec.get_unchecked_mut(1) });
//!
//! assert_eq!(3, vec[2]);
//! vec[2] = 9;
//! assert_eq!(9, vec[2]);
//!
//! assert_eq!(&[2, 9], &vec[1..3]);
//!
//! *vec.back_mut() = 0;
//! assert_eq!((1, 0), (*vec.front(), *vec.back()));
//! ```
//!
//! #   Example: managing capacity
//!
//! `Vector` provides multiple ways to manage the capacity available:
//!
//! -   The constructor `with_capacity` allocates exactly the requested capacity.
//! -   The `reserve` and `try_reserve` calls allow growing the capacity to exactly the requested total in advance.
//! -   The `shrink_to_fit` call sheds excess capacity.
//!
//! ```
//! use contigo::failure::Failure;
//! use contigo::vector::Vector;
//!
//! let mut vec: Vector<u32> = Vector::with_capacity(3);
//! assert_eq!(3, vec.capacity());
//!
//! //  Attempting to reserve more than can be addressed is not possible, and leaves the capacity unchanged.
//! assert_eq!(Err(Failure::BytesOverflow), vec.try_reserve(usize::MAX));
//! assert_eq!(3, vec.capacity());
//!
//! vec.extend([1, 2, 3, 4, 5]);
//!
//! //  Shrinking sheds excess capacity.
//! vec.shrink_to_fit();
//! assert_eq!(5, vec.capacity());
//! ```
//!
//! #   Example: middle modifications
//!
//! ```
//! use contigo::vector::Vector;
//!
//! let mut vec: Vector<_> = [1, 2, 3].into();
//!
//! vec.insert(1, 99);
//! assert_eq!(&[1, 99, 2, 3], vec.as_slice());
//!
//! vec.erase(0);
//! assert_eq!(&[99, 2, 3], vec.as_slice());
//!
//! vec.resize(5, 7);
//! assert_eq!(&[99, 2, 3, 7, 7], vec.as_slice());
//! ```

mod gap;
mod into_iter;
mod raw_vector;
mod traits;
mod vector;

pub use self::into_iter::IntoIter;
pub use self::vector::Vector;

use super::allocator;
use super::failure;
use super::root;

use self::allocator::Allocator;

/// Exchanges the elements, capacity, and allocator of `left` and `right`.
///
/// #   Example
///
/// ```
/// use contigo::vector::{self, Vector};
///
/// let mut left: Vector<_> = [1, 2].into();
/// let mut right: Vector<_> = [3].into();
///
/// vector::swap(&mut left, &mut right);
///
/// assert_eq!(&[3], left.as_slice());
/// assert_eq!(&[1, 2], right.as_slice());
/// ```
pub fn swap<T, A: Allocator>(left: &mut Vector<T, A>, right: &mut Vector<T, A>) {
    left.swap_with(right);
}
