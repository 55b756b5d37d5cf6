//! End markers of a different type than the iterator.

/// Wraps a value that marks the end of a range.
///
/// `Interface<C> == Sentinel<S>` (in either order) is available when the
/// cursor's base implements [`EqStrategy<S>`](crate::EqStrategy), which
/// includes any base with `PartialEq<S>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sentinel<S>(pub S);

/// Sentinel carrying no state, for cursors that know their own end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DefaultSentinel;

impl<S> Sentinel<S> {
    /// The wrapped marker.
    #[inline]
    pub fn get(&self) -> &S {
        &self.0
    }
}
