//! Re-export core/std facilities under a unified name.

#[cfg(not(feature = "with-std"))]
pub use core::{alloc, borrow, cmp, fmt, hash, iter, marker, mem, ops, ptr, result, slice};

#[cfg(feature = "with-std")]
pub use std::{alloc, borrow, cmp, fmt, hash, iter, marker, mem, ops, ptr, result, slice};
