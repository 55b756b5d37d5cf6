//! Interface-completion engine for iterator-like cursors.
//!
//! A consumer type describes its position state and a small set of
//! primitives (dereference, one way to advance, optionally distance and
//! comparison). Wrapping it in [`Interface`] synthesizes the rest of the
//! iterator surface for the category the consumer declares, and the
//! [`ops`] layer supplies the free-standing arithmetic and comparison
//! operators.
//!
//! All capability resolution is done by trait bounds: an operation whose
//! primitive is missing is simply absent from the type, and there is no
//! runtime dispatch between strategies.
//!
//! # Components
//!
//! | Module | Role |
//! |--------|------|
//! | [`access`] | gateway to the consumer's private position state |
//! | [`probe`] | capability traits and strategy resolution |
//! | [`tag`], [`category`] | concept tags and category classification |
//! | [`proxy`] | arrow support for computed dereference results |
//! | [`interface`] | the [`Interface`] adapter (operation synthesis) |
//! | [`ops`] | operators and free functions |
//! | [`span`] | bridge to [`std::iter::Iterator`] |
//!
//! # Example
//!
//! ```
//! use iterface_core::{BaseReference, Cursor, Dereference, Interface, RandomAccess};
//! use std::ops::{AddAssign, Sub};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
//! struct Pos<'a> {
//!     data: &'a [u32],
//!     index: isize,
//! }
//!
//! impl<'a> Dereference for Pos<'a> {
//!     type Output = &'a u32;
//!     fn dereference(&self) -> &'a u32 {
//!         &self.data[self.index as usize]
//!     }
//! }
//!
//! impl AddAssign<isize> for Pos<'_> {
//!     fn add_assign(&mut self, n: isize) {
//!         self.index += n;
//!     }
//! }
//!
//! impl Sub for Pos<'_> {
//!     type Output = isize;
//!     fn sub(self, rhs: Self) -> isize {
//!         self.index - rhs.index
//!     }
//! }
//!
//! #[derive(Clone, Copy, Debug)]
//! struct Numbers<'a>(Pos<'a>);
//!
//! impl<'a> BaseReference for Numbers<'a> {
//!     type Base = Pos<'a>;
//!     fn base_reference(&self) -> &Pos<'a> {
//!         &self.0
//!     }
//!     fn base_reference_mut(&mut self) -> &mut Pos<'a> {
//!         &mut self.0
//!     }
//! }
//!
//! impl<'a> Cursor for Numbers<'a> {
//!     type Concept = RandomAccess;
//!     type Value = u32;
//!     type Reference = &'a u32;
//!     type Pointer = &'a u32;
//!     type Difference = isize;
//! }
//!
//! let data = [10, 20, 30, 40];
//! let first = Interface::new(Numbers(Pos { data: &data, index: 0 }));
//! let last = first + 4;
//!
//! assert_eq!(*first.at(2), 30);
//! assert_eq!(last - first, 4);
//! assert!(first < last);
//! assert_eq!(Interface::span(first, last).copied().sum::<u32>(), 100);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod access;
pub mod category;
pub mod cursor;
pub mod difference;
pub mod interface;
pub mod ops;
pub mod probe;
pub mod proxy;
pub mod sentinel;
pub mod span;
pub mod tag;

pub use access::{BaseReference, IteratorAccess};
pub use category::{
    classify, BidirectionalIterator, Borrowed, CategoryOf, Classify, Computed, ForwardIterator,
    InputIterator, IterReference, RandomAccessIterator, ReferenceKind,
};
pub use cursor::{
    Cursor, DefaultDifference, DefaultPointer, DefaultReference, PointerOf,
};
pub use difference::Difference;
pub use interface::Interface;
pub use probe::{BaseDistance, Decrement, Dereference, EqStrategy, Increment, OrdStrategy};
pub use proxy::{MakePointer, ProxyArrowResult};
pub use sentinel::{DefaultSentinel, Sentinel};
pub use span::Span;
pub use tag::{
    AtLeast, Bidirectional, Category, ConceptTag, Contiguous, Forward, Input, NoPointer, Output,
    PostIncrement, RandomAccess,
};
