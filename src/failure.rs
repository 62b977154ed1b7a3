//! The Failure and Result types of this library.
//!
//! The `Vector` supports faillible allocations. Any method which attempts to allocate memory may fail, and checked
//! accesses fail when out of bounds. The cause of the error is then represented as a `Failure`.
//!
//! All inherent methods which allocate come in two versions:
//!
//! -   A faillible `try_xxx` version, which returns a `Result` with `Failure` as the error type.
//! -   A convenience `xxx` version, which invokes the `try_xxx` version and panics in case of error.
//!
//! The implementations of the standard traits, such as `Clone`, `Extend`, or `FromIterator`, have no faillible
//! counterpart, and panic in case of error.

use super::root::result;

/// Universal Failure type of this library.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, thiserror::Error)]
pub enum Failure {
    /// The number of bytes to allocate cannot be calculated due to overflowing.
    #[error("BytesOverflow")]
    BytesOverflow,
    /// The number of elements cannot be calculated due to overflowing.
    #[error("ElementsOverflow")]
    ElementsOverflow,
    /// The allocator could not allocate memory.
    #[error("OutOfMemory")]
    OutOfMemory,
    /// The position accessed is not that of an element.
    #[error("OutOfRange: position {position} is not less than length {length}")]
    OutOfRange {
        /// The position requested.
        position: usize,
        /// The length of the instance at the time of the request.
        length: usize,
    },
}

/// Universal Result type of this library.
pub type Result<T> = result::Result<T, Failure>;

//  mod tests
