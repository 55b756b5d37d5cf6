//! Reference cursors built on the iterface engine.
//!
//! Each type here implements only the primitives its traversal needs and
//! lets [`Interface`](iterface_core::Interface) supply the rest:
//!
//! - [`SliceCursor`]: contiguous random access over a slice, the
//!   pointer-like baseline.
//! - [`Filter`]: forward traversal of the elements matching a predicate;
//!   defines dereference and a single step only.
//! - [`RepeatedChars`]: random access over a byte string repeated forever;
//!   defines `+=` and distance only, so comparisons fall back to the
//!   distance.
//!
//! # Features
//!
//! - `tracing`: emit `tracing` debug events when a constructor rejects
//!   its input.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod filter;
pub mod repeat;
pub mod slice;

pub use error::AdaptorError;
pub use filter::{Filter, FilterPosition};
pub use repeat::{RepeatPosition, RepeatedChars};
pub use slice::{SliceCursor, SlicePosition};
