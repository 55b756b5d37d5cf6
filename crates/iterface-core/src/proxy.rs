//! Arrow support for computed references.
//!
//! When dereference yields a value instead of a reference there is no
//! stored object to point at. [`ProxyArrowResult`] holds the computed
//! value so member access through `arrow()` still works:
//! `it.arrow().len()` reads the temporary held by the proxy.

use std::ops::{Deref, DerefMut};

/// A single computed value standing in for a pointer.
///
/// References obtained through it borrow the proxy, which is itself a
/// temporary of the `arrow()` call, so they cannot outlive the
/// expression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ProxyArrowResult<T> {
    value: T,
}

impl<T> ProxyArrowResult<T> {
    /// Take ownership of `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Give the held value back.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for ProxyArrowResult<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for ProxyArrowResult<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

/// Build a cursor's pointer from its reference.
///
/// Real pointers are taken from the reference; a
/// [`ProxyArrowResult`] wraps it.
pub trait MakePointer<R> {
    /// Convert a dereference result into the pointer type.
    fn make_pointer(reference: R) -> Self;
}

impl<'a, T: ?Sized> MakePointer<&'a T> for &'a T {
    #[inline(always)]
    fn make_pointer(reference: &'a T) -> Self {
        reference
    }
}

impl<'a, T: ?Sized> MakePointer<&'a mut T> for &'a mut T {
    #[inline(always)]
    fn make_pointer(reference: &'a mut T) -> Self {
        reference
    }
}

impl<'a, T: ?Sized> MakePointer<&'a T> for *const T {
    #[inline(always)]
    fn make_pointer(reference: &'a T) -> Self {
        reference
    }
}

impl<'a, T: ?Sized> MakePointer<&'a mut T> for *mut T {
    #[inline(always)]
    fn make_pointer(reference: &'a mut T) -> Self {
        reference
    }
}

impl<R> MakePointer<R> for ProxyArrowResult<R> {
    #[inline(always)]
    fn make_pointer(reference: R) -> Self {
        ProxyArrowResult::new(reference)
    }
}
