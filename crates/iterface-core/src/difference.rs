//! Signed distance types.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Add, Neg, Sub};

/// A signed count of positions between two cursors over the same sequence.
///
/// Implemented for the built-in signed integers. `ZERO` and `ONE` are the
/// only constants the engine needs: `+= ONE` is the single step and the
/// sign relative to `ZERO` drives the distance-based ordering fallback.
pub trait Difference:
    Copy
    + Ord
    + Hash
    + Debug
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + 'static
{
    /// No distance.
    const ZERO: Self;

    /// One step.
    const ONE: Self;
}

macro_rules! difference_impl {
    ($($t:ty),+) => {
        $(
            impl Difference for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
            }
        )+
    };
}

difference_impl!(i8, i16, i32, i64, i128, isize);
