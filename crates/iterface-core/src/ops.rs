//! Operators and free functions over synthesized iterators.
//!
//! Everything here is generic over the cursor, so a cursor defined in any
//! crate picks these up as soon as its base provides the primitives.
//!
//! | Operation | Needs on the base |
//! |-----------|-------------------|
//! | `it += n`, `it -= n`, `it + n`, `n + it`, `it - n` | `AddAssign<D>` |
//! | `it2 - it1` | `Clone + Sub<Output = D>` |
//! | `==`, `!=` | [`EqStrategy`] |
//! | `<`, `<=`, `>`, `>=` | [`OrdStrategy`] |
//!
//! Scalar `n + it` and `it - n` are implemented for every built-in signed
//! difference type separately: a single impl generic over the cursor's
//! difference would overlap with `it2 - it1`.

use crate::cursor::Cursor;
use crate::difference::Difference;
use crate::interface::Interface;
use crate::probe::{BaseDistance, EqStrategy, OrdStrategy};
use crate::sentinel::Sentinel;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// ── Compound assignment ─────────────────────────────────────────

impl<C> AddAssign<C::Difference> for Interface<C>
where
    C: Cursor,
    C::Base: AddAssign<C::Difference>,
{
    #[inline(always)]
    fn add_assign(&mut self, n: C::Difference) {
        *self.base_mut() += n;
    }
}

impl<C> SubAssign<C::Difference> for Interface<C>
where
    C: Cursor,
    C::Base: AddAssign<C::Difference>,
{
    #[inline(always)]
    fn sub_assign(&mut self, n: C::Difference) {
        *self.base_mut() += -n;
    }
}

// ── Binary arithmetic ───────────────────────────────────────────

impl<C> Add<C::Difference> for Interface<C>
where
    C: Cursor,
    C::Base: AddAssign<C::Difference>,
{
    type Output = Self;

    #[inline(always)]
    fn add(mut self, n: C::Difference) -> Self {
        self += n;
        self
    }
}

macro_rules! scalar_ops {
    ($($d:ty),+) => {
        $(
            impl<C> Add<Interface<C>> for $d
            where
                C: Cursor<Difference = $d>,
                C::Base: AddAssign<$d>,
            {
                type Output = Interface<C>;

                #[inline(always)]
                fn add(self, it: Interface<C>) -> Interface<C> {
                    it + self
                }
            }

            impl<C> Sub<$d> for Interface<C>
            where
                C: Cursor<Difference = $d>,
                C::Base: AddAssign<$d>,
            {
                type Output = Self;

                #[inline(always)]
                fn sub(mut self, n: $d) -> Self {
                    self -= n;
                    self
                }
            }
        )+
    };
}

scalar_ops!(i8, i16, i32, i64, i128, isize);

impl<C, C2> Sub<Interface<C2>> for Interface<C>
where
    C: Cursor,
    C2: Cursor,
    C::Base: BaseDistance<C2::Base, C::Difference>,
{
    type Output = C::Difference;

    /// Signed distance from `origin` to `self`, from the base subtraction.
    #[inline(always)]
    fn sub(self, origin: Interface<C2>) -> C::Difference {
        BaseDistance::<C2::Base, C::Difference>::base_distance(self.base(), origin.base())
    }
}

// ── Equality ────────────────────────────────────────────────────

impl<C, C2> PartialEq<Interface<C2>> for Interface<C>
where
    C: Cursor,
    C2: Cursor,
    C::Base: EqStrategy<C2::Base>,
{
    #[inline(always)]
    fn eq(&self, other: &Interface<C2>) -> bool {
        self.base().base_eq(other.base())
    }
}

impl<C> Eq for Interface<C>
where
    C: Cursor,
    C::Base: Eq,
{
}

impl<C, S> PartialEq<Sentinel<S>> for Interface<C>
where
    C: Cursor,
    C::Base: EqStrategy<S>,
{
    #[inline(always)]
    fn eq(&self, end: &Sentinel<S>) -> bool {
        self.base().base_eq(&end.0)
    }
}

impl<C, S> PartialEq<Interface<C>> for Sentinel<S>
where
    C: Cursor,
    C::Base: EqStrategy<S>,
{
    #[inline(always)]
    fn eq(&self, it: &Interface<C>) -> bool {
        it.base().base_eq(&self.0)
    }
}

// ── Ordering ────────────────────────────────────────────────────

impl<C, C2> PartialOrd<Interface<C2>> for Interface<C>
where
    C: Cursor,
    C2: Cursor,
    C::Base: OrdStrategy<C2::Base>,
{
    #[inline(always)]
    fn partial_cmp(&self, other: &Interface<C2>) -> Option<Ordering> {
        self.base().base_cmp(other.base())
    }
}

// ── Free functions ──────────────────────────────────────────────

/// Move `it` by `n` positions in constant time.
#[inline]
pub fn advance<C>(it: &mut Interface<C>, n: C::Difference)
where
    C: Cursor,
    C::Base: AddAssign<C::Difference>,
{
    *it += n;
}

/// `it` moved forward by `n`.
#[inline]
pub fn next<C>(it: Interface<C>, n: C::Difference) -> Interface<C>
where
    C: Cursor,
    C::Base: AddAssign<C::Difference>,
{
    it + n
}

/// `it` moved back by `n`.
#[inline]
pub fn prev<C>(mut it: Interface<C>, n: C::Difference) -> Interface<C>
where
    C: Cursor,
    C::Base: AddAssign<C::Difference>,
{
    it -= n;
    it
}

/// Signed number of steps from `first` to `last`.
#[inline]
pub fn distance<C, C2>(first: &Interface<C2>, last: &Interface<C>) -> C::Difference
where
    C: Cursor,
    C2: Cursor,
    C::Base: BaseDistance<C2::Base, C::Difference>,
{
    BaseDistance::<C2::Base, C::Difference>::base_distance(last.base(), first.base())
}

/// Three-way comparison of two positions.
#[inline]
pub fn compare<C, C2>(a: &Interface<C>, b: &Interface<C2>) -> Option<Ordering>
where
    C: Cursor,
    C2: Cursor,
    C::Base: OrdStrategy<C2::Base>,
{
    a.partial_cmp(b)
}

/// Do the two positions coincide?
#[inline]
pub fn equal<L, R>(a: &L, b: &R) -> bool
where
    L: PartialEq<R> + ?Sized,
    R: ?Sized,
{
    a == b
}

/// Equality fallback: the distance between the two bases is zero.
#[inline(always)]
pub fn eq_by_distance<B>(lhs: &B, rhs: &B) -> bool
where
    B: Clone + Sub<Output: Difference>,
{
    lhs.clone() - rhs.clone() == <B::Output as Difference>::ZERO
}

/// Ordering fallback: the sign of `lhs - rhs`.
#[inline(always)]
pub fn compare_by_distance<B>(lhs: &B, rhs: &B) -> Ordering
where
    B: Clone + Sub<Output: Difference>,
{
    (lhs.clone() - rhs.clone()).cmp(&<B::Output as Difference>::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::BaseReference;
    use crate::probe::Dereference;
    use crate::tag::RandomAccess;
    use proptest::prelude::*;

    // ── Fixtures ────────────────────────────────────────────────

    /// Position with every primitive: `PartialOrd` and `Sub` both present.
    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    struct Full(i64);

    impl Dereference for Full {
        type Output = i64;

        fn dereference(&self) -> i64 {
            self.0 * 10
        }
    }

    impl AddAssign<i64> for Full {
        fn add_assign(&mut self, n: i64) {
            self.0 += n;
        }
    }

    impl Sub for Full {
        type Output = i64;

        fn sub(self, rhs: Self) -> i64 {
            self.0 - rhs.0
        }
    }

    /// Position with `+=` and `-` only; comparisons go through distance.
    #[derive(Clone, Copy, Debug)]
    struct Bare(i32);

    impl Dereference for Bare {
        type Output = i32;

        fn dereference(&self) -> i32 {
            self.0
        }
    }

    impl AddAssign<i32> for Bare {
        fn add_assign(&mut self, n: i32) {
            self.0 += n;
        }
    }

    impl Sub for Bare {
        type Output = i32;

        fn sub(self, rhs: Self) -> i32 {
            self.0 - rhs.0
        }
    }

    crate::distance_comparisons!(Bare);

    impl PartialEq<usize> for Full {
        fn eq(&self, end: &usize) -> bool {
            self.0 == *end as i64
        }
    }

    macro_rules! cursor {
        ($name:ident, $base:ty, $d:ty) => {
            #[derive(Clone, Copy, Debug)]
            struct $name($base);

            impl BaseReference for $name {
                type Base = $base;

                fn base_reference(&self) -> &$base {
                    &self.0
                }

                fn base_reference_mut(&mut self) -> &mut $base {
                    &mut self.0
                }
            }

            impl Cursor for $name {
                type Concept = RandomAccess;
                type Value = $d;
                type Reference = $d;
                type Pointer = crate::proxy::ProxyArrowResult<$d>;
                type Difference = $d;
            }
        };
    }

    cursor!(FullCursor, Full, i64);
    cursor!(BareCursor, Bare, i32);

    fn full(n: i64) -> Interface<FullCursor> {
        Interface::new(FullCursor(Full(n)))
    }

    fn bare(n: i32) -> Interface<BareCursor> {
        Interface::new(BareCursor(Bare(n)))
    }

    // ── Arithmetic ──────────────────────────────────────────────

    #[test]
    fn compound_assignment() {
        let mut it = full(3);
        it += 4;
        assert_eq!(it.get(), 70);
        it -= 6;
        assert_eq!(it.get(), 10);
    }

    #[test]
    fn binary_add_and_subtract_copy() {
        let it = bare(5);
        assert_eq!((it + 2).get(), 7);
        assert_eq!((2i32 + it).get(), 7);
        assert_eq!((it - 5i32).get(), 0);
        assert_eq!(it.get(), 5);
    }

    #[test]
    fn difference_uses_base_subtraction() {
        assert_eq!(full(9) - full(2), 7);
        assert_eq!(bare(2) - bare(9), -7);
    }

    #[test]
    fn free_functions() {
        let mut it = bare(0);
        advance(&mut it, 3);
        assert_eq!(it.get(), 3);
        assert_eq!(next(it, 2).get(), 5);
        assert_eq!(prev(it, 1).get(), 2);
        assert_eq!(distance(&bare(1), &bare(4)), 3);
        assert_eq!(compare(&bare(1), &bare(4)), Some(Ordering::Less));
        assert!(equal(&bare(4), &next(bare(1), 3)));
    }

    // ── Comparison ──────────────────────────────────────────────

    #[test]
    fn equality_through_distance() {
        assert_eq!(bare(3), bare(3));
        assert_ne!(bare(3), bare(4));
    }

    #[test]
    fn ordering_through_distance() {
        assert!(bare(1) < bare(2));
        assert!(bare(2) >= bare(2));
        assert!(bare(3) > bare(2));
    }

    #[test]
    fn sentinel_equality_in_both_orders() {
        let end = Sentinel(4usize);
        assert!(full(4) == end);
        assert!(end == full(4));
        assert!(full(3) != end);
    }

    #[test]
    fn fallbacks_directly() {
        assert!(eq_by_distance(&Bare(2), &Bare(2)));
        assert_eq!(compare_by_distance(&Bare(1), &Bare(0)), Ordering::Greater);
    }

    // ── Laws ────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn add_is_associative(start in -1000i64..1000, n in -1000i64..1000, m in -1000i64..1000) {
            prop_assert_eq!((full(start) + n) + m, full(start) + (n + m));
        }

        #[test]
        fn difference_inverts_add(start in -1000i32..1000, n in -1000i32..1000) {
            let it1 = bare(start);
            let it2 = it1 + n;
            prop_assert_eq!(it2 - it1, n);
        }

        #[test]
        fn less_iff_negative_distance(a in -1000i32..1000, b in -1000i32..1000) {
            prop_assert_eq!(bare(a) < bare(b), (bare(a) - bare(b)) < 0);
        }

        #[test]
        fn strategies_agree(a in -1000i64..1000, b in -1000i64..1000) {
            let direct = full(a).partial_cmp(&full(b));
            let by_distance = compare_by_distance(&Full(a), &Full(b));
            prop_assert_eq!(direct, Some(by_distance));
            prop_assert_eq!(full(a) == full(b), eq_by_distance(&Full(a), &Full(b)));
        }

        #[test]
        fn at_matches_advanced_get(start in -100i64..100, n in -100i64..100) {
            let it = full(start);
            prop_assert_eq!(it.at(n), (it + n).get());
        }
    }
}
