//! Forward cursor skipping elements that fail a predicate.
//!
//! The position only knows how to dereference and how to step to the
//! next match; equality, post-increment and the `Iterator` bridge all
//! come from the engine.

use iterface_core::{BaseReference, Cursor, Dereference, Forward, Increment, Interface};
use std::fmt;

/// Index of the current match in the filtered slice.
pub struct FilterPosition<'a, T, P> {
    slice: &'a [T],
    index: usize,
    pred: P,
}

impl<'a, T, P> FilterPosition<'a, T, P>
where
    P: Fn(&T) -> bool,
{
    /// First match at or after `from`, or the end of the slice.
    fn seek(&self, from: usize) -> usize {
        let rest = self.slice.get(from..).unwrap_or_default();
        rest.iter()
            .position(|x| (self.pred)(x))
            .map_or(self.slice.len(), |k| from + k)
    }
}

impl<T, P: Clone> Clone for FilterPosition<'_, T, P> {
    fn clone(&self) -> Self {
        Self {
            slice: self.slice,
            index: self.index,
            pred: self.pred.clone(),
        }
    }
}

impl<T, P: Copy> Copy for FilterPosition<'_, T, P> {}

impl<T, P> fmt::Debug for FilterPosition<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterPosition")
            .field("index", &self.index)
            .field("len", &self.slice.len())
            .finish_non_exhaustive()
    }
}

impl<'a, T, P> Dereference for FilterPosition<'a, T, P> {
    type Output = &'a T;

    #[inline]
    fn dereference(&self) -> &'a T {
        let slice: &'a [T] = self.slice;
        &slice[self.index]
    }
}

impl<T, P> Increment<isize> for FilterPosition<'_, T, P>
where
    P: Fn(&T) -> bool,
{
    #[inline]
    fn increment(&mut self) {
        self.index = self.seek(self.index + 1);
    }
}

impl<T, P> PartialEq for FilterPosition<'_, T, P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

/// Forward cursor over the elements of a slice that satisfy `pred`.
///
/// # Examples
///
/// ```
/// use iterface_adaptors::Filter;
///
/// let data = [1, 2, 3, 4, 10, 11, 101, 200, 0];
/// let even = |x: &i32| x % 2 == 0;
/// let kept: Vec<i32> = Filter::new(&data, even)
///     .span(Filter::end(&data, even))
///     .copied()
///     .collect();
/// assert_eq!(kept, [2, 4, 10, 200, 0]);
/// ```
pub struct Filter<'a, T, P> {
    pos: FilterPosition<'a, T, P>,
}

impl<'a, T, P> Filter<'a, T, P>
where
    P: Fn(&T) -> bool,
{
    /// Iterator at the first element satisfying `pred`.
    pub fn new(slice: &'a [T], pred: P) -> Interface<Self> {
        let mut pos = FilterPosition {
            slice,
            index: 0,
            pred,
        };
        pos.index = pos.seek(0);
        Interface::new(Self { pos })
    }

    /// Iterator past the last element.
    pub fn end(slice: &'a [T], pred: P) -> Interface<Self> {
        Interface::new(Self {
            pos: FilterPosition {
                slice,
                index: slice.len(),
                pred,
            },
        })
    }
}

impl<T, P> Filter<'_, T, P> {
    /// Index of the current element in the underlying slice.
    ///
    /// This is the adaptor's own accessor, independent of the engine's
    /// access to position state.
    pub fn base(&self) -> usize {
        self.pos.index
    }
}

impl<T, P: Clone> Clone for Filter<'_, T, P> {
    fn clone(&self) -> Self {
        Self {
            pos: self.pos.clone(),
        }
    }
}

impl<T, P: Copy> Copy for Filter<'_, T, P> {}

impl<T, P> fmt::Debug for Filter<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("pos", &self.pos).finish()
    }
}

impl<'a, T, P> BaseReference for Filter<'a, T, P> {
    type Base = FilterPosition<'a, T, P>;

    #[inline(always)]
    fn base_reference(&self) -> &Self::Base {
        &self.pos
    }

    #[inline(always)]
    fn base_reference_mut(&mut self) -> &mut Self::Base {
        &mut self.pos
    }
}

impl<'a, T, P> Cursor for Filter<'a, T, P> {
    type Concept = Forward;
    type Value = T;
    type Reference = &'a T;
    type Pointer = &'a T;
    type Difference = isize;
}

#[cfg(test)]
mod tests {
    use super::*;
    use iterface_core::{Category, ForwardIterator};

    fn forward<I: ForwardIterator>() {}

    fn is_even(x: &i32) -> bool {
        x % 2 == 0
    }

    const DATA: [i32; 9] = [1, 2, 3, 4, 10, 11, 101, 200, 0];

    #[test]
    fn classified_as_forward() {
        forward::<Interface<Filter<'static, i32, fn(&i32) -> bool>>>();
        assert_eq!(
            Interface::<Filter<'static, i32, fn(&i32) -> bool>>::CATEGORY,
            Category::Forward
        );
    }

    #[test]
    fn new_skips_to_first_match() {
        let it = Filter::new(&DATA, is_even);
        assert_eq!(*it.get(), 2);
        assert_eq!(it.get_ref().base(), 1);
    }

    #[test]
    fn step_skips_failures() {
        let mut it = Filter::new(&DATA, is_even);
        it.inc().inc();
        assert_eq!(*it.get(), 10);
        let prior = it.post_inc();
        assert_eq!(*prior.get(), 10);
        assert_eq!(*it.get(), 200);
    }

    #[test]
    fn no_match_starts_at_end() {
        let odd = [1, 3, 5];
        assert!(Filter::new(&odd, is_even) == Filter::end(&odd, is_even));
    }

    #[test]
    fn empty_slice() {
        let empty: [i32; 0] = [];
        assert_eq!(Filter::new(&empty, is_even).span(Filter::end(&empty, is_even)).count(), 0);
    }

    #[test]
    fn stepping_at_end_stays_at_end() {
        let mut it = Filter::end(&DATA, is_even);
        it.inc();
        assert!(it == Filter::end(&DATA, is_even));
    }

    #[test]
    fn arrow_yields_reference() {
        let it = Filter::new(&DATA, is_even);
        assert!(std::ptr::eq(it.arrow(), &DATA[1]));
    }
}
