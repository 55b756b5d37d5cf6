//! iterface: full iterator interfaces from a minimal set of primitives.
//!
//! This is the top-level facade crate that re-exports the engine and the
//! reference cursors. For most users, adding `iterface` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use iterface::prelude::*;
//!
//! // Position state: an index that can step and measure distance.
//! #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
//! struct Countdown(isize);
//!
//! impl Dereference for Countdown {
//!     type Output = isize;
//!     fn dereference(&self) -> isize {
//!         10 - self.0
//!     }
//! }
//!
//! impl std::ops::AddAssign<isize> for Countdown {
//!     fn add_assign(&mut self, n: isize) {
//!         self.0 += n;
//!     }
//! }
//!
//! impl std::ops::Sub for Countdown {
//!     type Output = isize;
//!     fn sub(self, rhs: Self) -> isize {
//!         self.0 - rhs.0
//!     }
//! }
//!
//! #[derive(Clone, Copy, Debug)]
//! struct Launch(Countdown);
//!
//! impl BaseReference for Launch {
//!     type Base = Countdown;
//!     fn base_reference(&self) -> &Countdown { &self.0 }
//!     fn base_reference_mut(&mut self) -> &mut Countdown { &mut self.0 }
//! }
//!
//! impl Cursor for Launch {
//!     type Concept = RandomAccess;
//!     type Value = isize;
//!     type Reference = isize;
//!     type Pointer = ProxyArrowResult<isize>;
//!     type Difference = DefaultDifference;
//! }
//!
//! let first = Interface::new(Launch(Countdown(0)));
//! let last = first + 4;
//! let ticks: Vec<isize> = first.span(last).collect();
//! assert_eq!(ticks, [10, 9, 8, 7]);
//! assert_eq!(first.at(9), 1);
//! assert_eq!(Interface::<Launch>::CATEGORY, Category::Input);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`engine`] | `iterface-core` | cursor traits, capability traits, `Interface`, operators |
//! | [`adaptors`] | `iterface-adaptors` | `SliceCursor`, `Filter`, `RepeatedChars` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The engine (`iterface-core`).
///
/// Implement [`engine::BaseReference`] and [`engine::Cursor`] on a type,
/// add primitives from [`engine::probe`] on its position state, and wrap
/// it in [`engine::Interface`].
pub use iterface_core as engine;

/// Reference cursors (`iterface-adaptors`).
///
/// [`adaptors::SliceCursor`], [`adaptors::Filter`] and
/// [`adaptors::RepeatedChars`].
pub use iterface_adaptors as adaptors;

/// Re-exported so the opt-in comparison macros resolve through the facade.
pub use iterface_core::{
    computed_reference, distance_comparisons, equality_by_distance, ordering_by_distance,
};

/// Common imports for typical iterface usage.
///
/// ```rust
/// use iterface::prelude::*;
/// ```
pub mod prelude {
    // Consumer side
    pub use iterface_core::{
        BaseReference, Cursor, DefaultDifference, DefaultPointer, DefaultReference,
    };

    // Primitives
    pub use iterface_core::{
        BaseDistance, Decrement, Dereference, EqStrategy, Increment, OrdStrategy,
    };

    // Tags and classification
    pub use iterface_core::{
        Bidirectional, Category, Contiguous, Forward, Input, Output, RandomAccess,
    };
    pub use iterface_core::{
        BidirectionalIterator, ForwardIterator, InputIterator, RandomAccessIterator,
    };

    // Adapter
    pub use iterface_core::{DefaultSentinel, Interface, ProxyArrowResult, Sentinel, Span};

    // Reference cursors
    pub use iterface_adaptors::{AdaptorError, Filter, RepeatedChars, SliceCursor};
}
