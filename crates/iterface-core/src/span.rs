//! Bridge from an iterator/sentinel pair to [`std::iter::Iterator`].

use crate::cursor::Cursor;
use crate::interface::Interface;
use crate::probe::{Decrement, Dereference, Increment};
use std::iter::FusedIterator;

/// The half-open range `[first, last)`.
///
/// Yields `first.get()` and steps `first` until it compares equal to
/// `last`. `last` may be another iterator or a
/// [`Sentinel`](crate::Sentinel). When both ends are the same
/// bidirectional iterator the range can also be consumed from the back.
#[derive(Clone, Copy, Debug)]
pub struct Span<I, S> {
    first: I,
    last: S,
}

impl<I, S> Span<I, S> {
    /// Range from `first` up to, not including, `last`.
    #[inline]
    pub const fn new(first: I, last: S) -> Self {
        Self { first, last }
    }

    /// The current front and the end marker.
    #[inline]
    pub fn into_parts(self) -> (I, S) {
        (self.first, self.last)
    }
}

impl<C, S> Iterator for Span<Interface<C>, S>
where
    C: Cursor,
    C::Base: Dereference<Output = C::Reference> + Increment<C::Difference>,
    Interface<C>: PartialEq<S>,
{
    type Item = C::Reference;

    #[inline]
    fn next(&mut self) -> Option<C::Reference> {
        if self.first == self.last {
            return None;
        }
        let item = self.first.get();
        self.first.inc();
        Some(item)
    }
}

impl<C> DoubleEndedIterator for Span<Interface<C>, Interface<C>>
where
    C: Cursor,
    C::Base: Dereference<Output = C::Reference>
        + Increment<C::Difference>
        + Decrement<C::Difference>,
    Interface<C>: PartialEq,
{
    #[inline]
    fn next_back(&mut self) -> Option<C::Reference> {
        if self.first == self.last {
            return None;
        }
        self.last.dec();
        Some(self.last.get())
    }
}

impl<C, S> FusedIterator for Span<Interface<C>, S>
where
    C: Cursor,
    C::Base: Dereference<Output = C::Reference> + Increment<C::Difference>,
    Interface<C>: PartialEq<S>,
{
}
