//! Capability prober: which primitive expressions a base supports.
//!
//! Every primitive the engine can build on is a trait on the base
//! (position state). Whether a base supports an expression is answered by
//! trait resolution, so probing is free at runtime and a missing primitive
//! removes the synthesized operation from the surface at compile time.
//!
//! | Expression | Capability |
//! |------------|------------|
//! | `*base` | [`Dereference`] |
//! | `++base` | [`Increment`] |
//! | `--base` | [`Decrement`] |
//! | `base += n` | [`AddAssign<D>`](std::ops::AddAssign) |
//! | `base - other` | [`BaseDistance`] (from [`Sub`]) |
//! | `base == other` | [`EqStrategy`] |
//! | `base <=> other` | [`OrdStrategy`] |
//!
//! # Priority
//!
//! Where two derivations exist, the higher-priority primitive provides a
//! blanket impl of the capability trait. A base may implement the
//! capability directly only when it lacks that primitive; having both is
//! a coherence error. The resulting order is:
//!
//! - increment and decrement: `+=` first, then the direct step;
//! - equality: base `==` first, then `distance == 0`;
//! - ordering: base `partial_cmp` first, then the sign of the distance.
//!
//! Bases with only a distance opt into the fallbacks through
//! [`equality_by_distance!`](crate::equality_by_distance),
//! [`ordering_by_distance!`](crate::ordering_by_distance) or
//! [`distance_comparisons!`](crate::distance_comparisons).

use crate::difference::Difference;
use std::cmp::Ordering;
use std::ops::{AddAssign, Sub};

/// `*base`: read the element at the current position.
///
/// `Output` is the cursor's reference type. It is produced by value and
/// may not borrow from `self`: a borrowed reference points into the
/// underlying sequence, a computed one is a fresh value.
pub trait Dereference {
    /// What dereference yields.
    type Output;

    /// Read the current element.
    fn dereference(&self) -> Self::Output;
}

/// `++base`: single forward step.
///
/// Provided for every base with `+= D`; implement directly only for
/// bases that step without a compound add. Doing both is rejected:
///
/// ```compile_fail
/// use iterface_core::Increment;
/// use std::ops::AddAssign;
///
/// struct Both(isize);
///
/// impl AddAssign<isize> for Both {
///     fn add_assign(&mut self, n: isize) {
///         self.0 += n;
///     }
/// }
///
/// impl Increment<isize> for Both {
///     fn increment(&mut self) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait Increment<D> {
    /// Advance one position.
    fn increment(&mut self);
}

impl<B, D> Increment<D> for B
where
    B: AddAssign<D>,
    D: Difference,
{
    #[inline(always)]
    fn increment(&mut self) {
        *self += D::ONE;
    }
}

/// `--base`: single backward step.
///
/// Provided for every base with `+= D` (as `+= -1`); implement directly
/// only for bases that step without a compound add.
pub trait Decrement<D> {
    /// Retreat one position.
    fn decrement(&mut self);
}

impl<B, D> Decrement<D> for B
where
    B: AddAssign<D>,
    D: Difference,
{
    #[inline(always)]
    fn decrement(&mut self) {
        *self += -D::ONE;
    }
}

/// `base - origin`: signed distance from `origin` to `self`.
///
/// Derived from `Clone + Sub<Rhs, Output = D>`. Never computed by
/// stepping.
pub trait BaseDistance<Rhs, D> {
    /// Distance from `origin` to `self`.
    fn base_distance(&self, origin: &Rhs) -> D;
}

impl<B, Rhs, D> BaseDistance<Rhs, D> for B
where
    B: Clone + Sub<Rhs, Output = D>,
    Rhs: Clone,
{
    #[inline(always)]
    fn base_distance(&self, origin: &Rhs) -> D {
        self.clone() - origin.clone()
    }
}

/// Equality strategy between two bases.
///
/// Provided from `PartialEq<Rhs>`; bases without it may use
/// [`equality_by_distance!`](crate::equality_by_distance).
pub trait EqStrategy<Rhs: ?Sized = Self> {
    /// Do the two positions coincide?
    fn base_eq(&self, rhs: &Rhs) -> bool;
}

impl<B, Rhs> EqStrategy<Rhs> for B
where
    B: PartialEq<Rhs> + ?Sized,
    Rhs: ?Sized,
{
    #[inline(always)]
    fn base_eq(&self, rhs: &Rhs) -> bool {
        self == rhs
    }
}

/// Ordering strategy between two bases.
///
/// Provided from `PartialOrd<Rhs>`; bases without it may use
/// [`ordering_by_distance!`](crate::ordering_by_distance).
pub trait OrdStrategy<Rhs: ?Sized = Self>: EqStrategy<Rhs> {
    /// Relative order of the two positions.
    fn base_cmp(&self, rhs: &Rhs) -> Option<Ordering>;
}

impl<B, Rhs> OrdStrategy<Rhs> for B
where
    B: PartialOrd<Rhs> + ?Sized,
    Rhs: ?Sized,
{
    #[inline(always)]
    fn base_cmp(&self, rhs: &Rhs) -> Option<Ordering> {
        self.partial_cmp(rhs)
    }
}

/// Implement [`EqStrategy`] for a base through `distance == 0`.
///
/// The base must implement `Clone + Sub<Output = D>` for a
/// [`Difference`] `D` and must not implement `PartialEq`. Generic
/// parameters go in brackets before the type:
///
/// ```
/// use iterface_core::{equality_by_distance, EqStrategy};
/// use std::ops::Sub;
///
/// #[derive(Clone, Copy)]
/// struct Pos<'a>(&'a str, isize);
///
/// impl Sub for Pos<'_> {
///     type Output = isize;
///     fn sub(self, rhs: Self) -> isize {
///         self.1 - rhs.1
///     }
/// }
///
/// equality_by_distance!(['a] Pos<'a>);
///
/// assert!(Pos("x", 2).base_eq(&Pos("y", 2)));
/// ```
#[macro_export]
macro_rules! equality_by_distance {
    ([$($generics:tt)*] $base:ty) => {
        impl<$($generics)*> $crate::probe::EqStrategy for $base {
            #[inline(always)]
            fn base_eq(&self, rhs: &Self) -> bool {
                $crate::ops::eq_by_distance(self, rhs)
            }
        }
    };
    ($base:ty) => {
        $crate::equality_by_distance!([] $base);
    };
}

/// Implement [`OrdStrategy`] for a base through the sign of the distance.
///
/// Same requirements as [`equality_by_distance!`](crate::equality_by_distance),
/// with `PartialOrd` absent instead of `PartialEq`. The base also needs
/// [`EqStrategy`], either from `PartialEq` or from the equality macro.
#[macro_export]
macro_rules! ordering_by_distance {
    ([$($generics:tt)*] $base:ty) => {
        impl<$($generics)*> $crate::probe::OrdStrategy for $base {
            #[inline(always)]
            fn base_cmp(&self, rhs: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some($crate::ops::compare_by_distance(self, rhs))
            }
        }
    };
    ($base:ty) => {
        $crate::ordering_by_distance!([] $base);
    };
}

/// Both [`equality_by_distance!`](crate::equality_by_distance) and
/// [`ordering_by_distance!`](crate::ordering_by_distance).
#[macro_export]
macro_rules! distance_comparisons {
    ([$($generics:tt)*] $base:ty) => {
        $crate::equality_by_distance!([$($generics)*] $base);
        $crate::ordering_by_distance!([$($generics)*] $base);
    };
    ($base:ty) => {
        $crate::distance_comparisons!([] $base);
    };
}
