//! Operation synthesizer: the [`Interface`] adapter.
//!
//! `Interface<C>` wraps a [`Cursor`] and exposes every iterator operation
//! its base's primitives can support. Each method carries the bounds of
//! the primitive it is built from, so an operation the base cannot back
//! is not part of the surface and using it fails to type-check.
//!
//! Operators (`+`, `-`, `+=`, `-=`, comparisons) live in
//! [`ops`](crate::ops).
//!
//! A base with only a single step has no indexing:
//!
//! ```compile_fail
//! use iterface_core::{BaseReference, Cursor, Dereference, Forward, Increment, Interface};
//!
//! #[derive(Clone, PartialEq)]
//! struct Step(usize);
//!
//! impl Dereference for Step {
//!     type Output = usize;
//!     fn dereference(&self) -> usize {
//!         self.0
//!     }
//! }
//!
//! impl Increment<isize> for Step {
//!     fn increment(&mut self) {
//!         self.0 += 1;
//!     }
//! }
//!
//! #[derive(Clone)]
//! struct Walk(Step);
//!
//! impl BaseReference for Walk {
//!     type Base = Step;
//!     fn base_reference(&self) -> &Step {
//!         &self.0
//!     }
//!     fn base_reference_mut(&mut self) -> &mut Step {
//!         &mut self.0
//!     }
//! }
//!
//! impl Cursor for Walk {
//!     type Concept = Forward;
//!     type Value = usize;
//!     type Reference = usize;
//!     type Pointer = iterface_core::ProxyArrowResult<usize>;
//!     type Difference = isize;
//! }
//!
//! let it = Interface::new(Walk(Step(0)));
//! let _ = it.at(3);
//! ```

use crate::access::{BaseReference, IteratorAccess};
use crate::category::{classify, IterReference, ReferenceKind};
use crate::cursor::{Cursor, PointerOf};
use crate::probe::{Decrement, Dereference, Increment};
use crate::proxy::MakePointer;
use crate::span::Span;
use crate::tag::{Category, ConceptTag, PostIncrement};
use std::hash::{Hash, Hasher};
use std::ops::AddAssign;

/// A full iterator synthesized from a minimal cursor.
///
/// `Clone`, `Copy`, `Default` and `Debug` follow the wrapped cursor.
/// `Hash` follows the base, like equality does.
#[derive(Clone, Copy, Debug, Default)]
pub struct Interface<C> {
    cursor: C,
}

impl<C> Hash for Interface<C>
where
    C: BaseReference,
    C::Base: Hash,
{
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        IteratorAccess::base(&self.cursor).hash(state);
    }
}

impl<C> Interface<C> {
    /// Wrap `cursor`.
    #[inline]
    pub const fn new(cursor: C) -> Self {
        Self { cursor }
    }

    /// Unwrap the cursor.
    #[inline]
    pub fn into_inner(self) -> C {
        self.cursor
    }

    /// The wrapped cursor, for its own public API.
    #[inline]
    pub fn get_ref(&self) -> &C {
        &self.cursor
    }

    /// The wrapped cursor, mutably.
    #[inline]
    pub fn get_mut(&mut self) -> &mut C {
        &mut self.cursor
    }
}

impl<C> From<C> for Interface<C> {
    #[inline]
    fn from(cursor: C) -> Self {
        Self::new(cursor)
    }
}

impl<C: Cursor> Interface<C> {
    /// The classified category: the declared tag when dereference yields
    /// an actual reference, [`Category::Input`] otherwise.
    pub const CATEGORY: Category = classify(
        <C::Concept as ConceptTag>::CATEGORY,
        <<C::Reference as IterReference>::Kind as ReferenceKind>::IS_REFERENCE,
    );

    /// Position state, through the access gateway.
    #[inline(always)]
    pub fn base(&self) -> &C::Base {
        IteratorAccess::base(&self.cursor)
    }

    #[inline(always)]
    pub(crate) fn base_mut(&mut self) -> &mut C::Base {
        IteratorAccess::base_mut(&mut self.cursor)
    }

    /// `*it`: the element at the current position.
    #[inline(always)]
    pub fn get(&self) -> C::Reference
    where
        C::Base: Dereference<Output = C::Reference>,
    {
        self.base().dereference()
    }

    /// `it->`: pointer to the current element.
    ///
    /// A real pointer (`&T`, `*const T`) is taken from the reference; a
    /// [`ProxyArrowResult`](crate::ProxyArrowResult) pointer holds the
    /// computed value. Output cursors have no pointer and no arrow.
    #[inline(always)]
    pub fn arrow(&self) -> PointerOf<C>
    where
        C::Base: Dereference<Output = C::Reference>,
        PointerOf<C>: MakePointer<C::Reference>,
    {
        <PointerOf<C> as MakePointer<C::Reference>>::make_pointer(self.get())
    }

    /// `it[n]`: dereference of `it + n`. Not bounds-checked beyond what
    /// the base's own dereference does.
    #[inline]
    pub fn at(&self, n: C::Difference) -> C::Reference
    where
        C: Clone,
        C::Base: Dereference<Output = C::Reference> + AddAssign<C::Difference>,
    {
        let mut it = self.clone();
        *it.base_mut() += n;
        it.get()
    }

    /// `++it`. Uses `+= 1` when the base has it, the base's own step
    /// otherwise.
    #[inline(always)]
    pub fn inc(&mut self) -> &mut Self
    where
        C::Base: Increment<C::Difference>,
    {
        Increment::<C::Difference>::increment(self.base_mut());
        self
    }

    /// `it++`.
    ///
    /// Returns the prior position for every tag except
    /// [`Input`](crate::Input), where it returns `()`: a single-pass
    /// cursor cannot promise a readable copy of where it was, so the
    /// result cannot be read:
    ///
    /// ```compile_fail
    /// use iterface_core::{BaseReference, Cursor, Dereference, Increment, Input, Interface};
    ///
    /// struct Left(u32);
    ///
    /// impl Dereference for Left {
    ///     type Output = u32;
    ///     fn dereference(&self) -> u32 {
    ///         self.0
    ///     }
    /// }
    ///
    /// impl Increment<isize> for Left {
    ///     fn increment(&mut self) {
    ///         self.0 -= 1;
    ///     }
    /// }
    ///
    /// struct Stream(Left);
    ///
    /// impl BaseReference for Stream {
    ///     type Base = Left;
    ///     fn base_reference(&self) -> &Left {
    ///         &self.0
    ///     }
    ///     fn base_reference_mut(&mut self) -> &mut Left {
    ///         &mut self.0
    ///     }
    /// }
    ///
    /// impl Cursor for Stream {
    ///     type Concept = Input;
    ///     type Value = u32;
    ///     type Reference = u32;
    ///     type Pointer = iterface_core::ProxyArrowResult<u32>;
    ///     type Difference = isize;
    /// }
    ///
    /// let mut it = Interface::new(Stream(Left(3)));
    /// let prior = it.post_inc();
    /// let _ = prior.get();
    /// ```
    #[inline]
    pub fn post_inc(&mut self) -> <C::Concept as PostIncrement<Self>>::Output
    where
        C::Base: Increment<C::Difference>,
        C::Concept: PostIncrement<Self>,
    {
        <C::Concept as PostIncrement<Self>>::post_increment(self, |it| {
            it.inc();
        })
    }

    /// `--it`. Uses `+= -1` when the base has `+=`, the base's own step
    /// back otherwise.
    #[inline(always)]
    pub fn dec(&mut self) -> &mut Self
    where
        C::Base: Decrement<C::Difference>,
    {
        Decrement::<C::Difference>::decrement(self.base_mut());
        self
    }

    /// `it--`: always returns the prior position.
    #[inline]
    pub fn post_dec(&mut self) -> Self
    where
        C: Clone,
        C::Base: Decrement<C::Difference>,
    {
        let prior = self.clone();
        self.dec();
        prior
    }

    /// The range `[self, last)` as a Rust iterator.
    #[inline]
    pub fn span<S>(self, last: S) -> Span<Self, S> {
        Span::new(self, last)
    }
}
