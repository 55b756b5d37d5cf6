//! Iterator law checkers.
//!
//! These functions verify that a synthesized iterator satisfies the
//! algebraic laws its category promises. Reused by the engine's own
//! integration tests and by every adaptor.

use indexmap::IndexSet;
use iterface_core::{
    BaseDistance, Cursor, Dereference, Difference, EqStrategy, Increment, Interface, OrdStrategy,
    PostIncrement, Sentinel,
};
use smallvec::SmallVec;
use std::fmt::Debug;
use std::ops::AddAssign;

/// Positions sampled from a range.
pub type Window<C> = SmallVec<[Interface<C>; 16]>;

/// Every position in `[first, last)`, in order.
pub fn positions<C>(first: &Interface<C>, last: &Interface<C>) -> Window<C>
where
    C: Cursor + Clone,
    C::Base: Increment<C::Difference> + EqStrategy,
{
    let mut out = Window::new();
    let mut it = first.clone();
    while it != *last {
        out.push(it.clone());
        it.inc();
    }
    out
}

/// Assert that two passes over `[first, last)` read the same elements.
pub fn assert_multipass<C>(first: &Interface<C>, last: &Interface<C>)
where
    C: Cursor + Clone,
    C::Base: Dereference<Output = C::Reference> + Increment<C::Difference> + EqStrategy,
    C::Reference: PartialEq + Debug,
{
    let a: SmallVec<[C::Reference; 16]> = first.clone().span(last.clone()).collect();
    let b: SmallVec<[C::Reference; 16]> = first.clone().span(last.clone()).collect();
    assert_eq!(a, b, "second pass read different elements");
}

/// Assert that `prior = it.post_inc()` keeps `prior` where `it` was and
/// moves `it` exactly one step.
pub fn assert_post_inc_keeps_prior<C>(it: &Interface<C>)
where
    C: Cursor + Clone,
    C::Base: Dereference<Output = C::Reference> + Increment<C::Difference> + EqStrategy,
    C::Concept: PostIncrement<Interface<C>, Output = Interface<C>>,
    C::Reference: PartialEq + Debug,
{
    let before = it.get();
    let mut moved = it.clone();
    let prior = moved.post_inc();
    assert_eq!(prior.get(), before, "post_inc disturbed the prior position");
    assert!(prior == *it, "post_inc returned a different position");

    let mut stepped = it.clone();
    stepped.inc();
    assert!(moved == stepped, "post_inc did not advance exactly one step");
}

/// Assert reflexivity, symmetry and transitivity of `==` over `window`.
#[allow(clippy::eq_op)]
pub fn assert_equality_equivalence<C>(window: &[Interface<C>])
where
    C: Cursor,
    C::Base: EqStrategy,
{
    for (i, a) in window.iter().enumerate() {
        assert!(a == a, "equality is not reflexive at index {i}");
        for (j, b) in window.iter().enumerate() {
            assert_eq!(a == b, b == a, "equality is not symmetric for ({i}, {j})");
            for (k, c) in window.iter().enumerate() {
                if a == b && b == c {
                    assert!(a == c, "equality is not transitive for ({i}, {j}, {k})");
                }
            }
        }
    }
}

/// Assert that `==` between iterators and `end` is symmetric, and
/// transitive through iterator equality, over `window`.
///
/// Exactly one position in `window` may equal `end` unless the
/// positions themselves compare equal.
pub fn assert_sentinel_equivalence<C, S>(window: &[Interface<C>], end: &Sentinel<S>)
where
    C: Cursor,
    C::Base: EqStrategy + EqStrategy<S>,
{
    for (i, a) in window.iter().enumerate() {
        assert_eq!(*a == *end, *end == *a, "sentinel equality is not symmetric at index {i}");
        for (j, b) in window.iter().enumerate() {
            if a == b && *b == *end {
                assert!(*a == *end, "sentinel equality is not transitive for ({i}, {j})");
            }
            if *a == *end && *b == *end {
                assert!(a == b, "({i}, {j}) both reach the end but differ");
            }
        }
    }
}

/// Assert that `it.at(n) == (it + n).get()` for every offset.
pub fn assert_index_matches_advance<C>(it: &Interface<C>, offsets: &[C::Difference])
where
    C: Cursor + Clone,
    C::Base: Dereference<Output = C::Reference> + AddAssign<C::Difference>,
    C::Reference: PartialEq + Debug,
{
    for &n in offsets {
        assert_eq!(
            it.at(n),
            (it.clone() + n).get(),
            "at({n:?}) differs from dereference of it + {n:?}"
        );
    }
}

/// Assert that `(it + n) + m == it + (n + m)` for every pair of offsets.
pub fn assert_add_associative<C>(it: &Interface<C>, offsets: &[C::Difference])
where
    C: Cursor + Clone,
    C::Base: AddAssign<C::Difference> + EqStrategy,
{
    for &n in offsets {
        for &m in offsets {
            assert!(
                (it.clone() + n) + m == it.clone() + (n + m),
                "(it + {n:?}) + {m:?} != it + ({n:?} + {m:?})"
            );
        }
    }
}

/// Assert that `(it + n) - it == n` for every offset.
pub fn assert_difference_inverts_add<C>(it: &Interface<C>, offsets: &[C::Difference])
where
    C: Cursor + Clone,
    C::Base: AddAssign<C::Difference> + BaseDistance<C::Base, C::Difference>,
{
    for &n in offsets {
        let moved = it.clone() + n;
        assert_eq!(moved - it.clone(), n, "(it + {n:?}) - it != {n:?}");
    }
}

/// Assert that `a < b` exactly when `a - b` is negative, over `window`.
pub fn assert_ordering_matches_distance<C>(window: &[Interface<C>])
where
    C: Cursor + Clone,
    C::Base: OrdStrategy + BaseDistance<C::Base, C::Difference>,
{
    for (i, a) in window.iter().enumerate() {
        for (j, b) in window.iter().enumerate() {
            let negative = a.clone() - b.clone() < <C::Difference as Difference>::ZERO;
            assert_eq!(a < b, negative, "ordering disagrees with distance for ({i}, {j})");
        }
    }
}

/// Assert that stepping from `first` to `last` visits distinct positions
/// at distances `0, 1, 2, ...` from `first`.
pub fn assert_steps_are_unit_distance<C>(first: &Interface<C>, last: &Interface<C>)
where
    C: Cursor + Clone,
    C::Base: Increment<C::Difference> + EqStrategy + BaseDistance<C::Base, C::Difference>,
{
    let seen: IndexSet<C::Difference> = positions(first, last)
        .into_iter()
        .map(|it| it - first.clone())
        .collect();
    let mut expected = <C::Difference as Difference>::ZERO;
    for (i, d) in seen.iter().enumerate() {
        assert_eq!(*d, expected, "step {i} is not at distance {expected:?}");
        expected = expected + <C::Difference as Difference>::ONE;
    }
    assert_eq!(
        seen.len(),
        positions(first, last).len(),
        "stepping revisited a position"
    );
}

/// Run the forward-iterator checks on `[first, last)`.
pub fn run_forward_laws<C>(first: &Interface<C>, last: &Interface<C>)
where
    C: Cursor + Clone,
    C::Base: Dereference<Output = C::Reference> + Increment<C::Difference> + EqStrategy,
    C::Concept: PostIncrement<Interface<C>, Output = Interface<C>>,
    C::Reference: PartialEq + Debug,
{
    assert_multipass(first, last);
    let window = positions(first, last);
    assert_equality_equivalence(&window);
    for it in &window {
        assert_post_inc_keeps_prior(it);
    }
}

/// Run the random-access checks on `[first, last)`, using `offsets` for
/// the jump laws. Offsets must keep `first` inside the sequence.
pub fn run_random_access_laws<C>(
    first: &Interface<C>,
    last: &Interface<C>,
    offsets: &[C::Difference],
) where
    C: Cursor + Clone,
    C::Base: Dereference<Output = C::Reference>
        + AddAssign<C::Difference>
        + OrdStrategy
        + BaseDistance<C::Base, C::Difference>,
    C::Concept: PostIncrement<Interface<C>, Output = Interface<C>>,
    C::Reference: PartialEq + Debug,
{
    run_forward_laws(first, last);
    assert_index_matches_advance(first, offsets);
    assert_add_associative(first, offsets);
    assert_difference_inverts_add(first, offsets);
    assert_ordering_matches_distance(&positions(first, last));
    assert_steps_are_unit_distance(first, last);
}
