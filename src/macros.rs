//! Convenience macros.

/// Creates a `Vector` containing the arguments.
///
/// Similar to `vec!`, the macro comes in two forms:
///
/// -   A list of elements, the capacity matching their number.
/// -   An element and a count, the element being cloned as necessary.
///
/// #   Example
///
/// ```
/// use contigo::vector;
///
/// let vec = vector![1, 2, 3];
/// assert_eq!(&[1, 2, 3], vec.as_slice());
/// assert_eq!(3, vec.capacity());
///
/// let vec = vector!["a"; 2];
/// assert_eq!(&["a", "a"], vec.as_slice());
///
/// let vec: contigo::vector::Vector<u8> = vector![];
/// assert!(vec.is_empty());
/// ```
#[cfg(feature = "with-std")]
#[macro_export]
macro_rules! vector {
    () => {
        <$crate::vector::Vector<_>>::new()
    };
    ($elem:expr; $n:expr) => {
        <$crate::vector::Vector<_>>::from_elem($n, $elem)
    };
    //  `$(,)?` allows for a trailing comma.
    ($($elem:expr),+ $(,)?) => {
        <$crate::vector::Vector<_>>::from([$($elem),+])
    };
}

//  mod tests
