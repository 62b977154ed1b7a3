#![cfg_attr(not(feature = "with-std"), no_std)]
//  Lints
#![allow(clippy::module_inception)]

//! #   The Contigo Library
//!
//! A contiguous, growable array with a pluggable allocation strategy.
//!
//! -   The `Vector`: a `Vec`-like container, with explicit control over its capacity.
//!
//! Memory is acquired through the `Allocator` trait, on a per instance basis, and allocation failures may either be
//! handled through the `try_xxx` family of methods, or turned into panics by their infaillible counterparts.

pub mod allocator;
pub mod failure;
pub mod vector;

mod macros;
mod utils;

use self::utils::root;
