//! The access gateway: how the engine reaches a cursor's position state.
//!
//! A cursor grants the engine access by implementing [`BaseReference`].
//! The engine never calls that trait directly; it goes through
//! [`IteratorAccess`], which is the single place position state is read
//! or mutated from. The extension point is named `base_reference` so it
//! does not collide with a public `base()` accessor the cursor may offer.

/// Extension point exposing a cursor's position state ("base").
///
/// The base is where the capability traits in [`probe`](crate::probe)
/// are looked up: dereference, increment, `+=`, `-` and comparison all
/// act on it.
pub trait BaseReference {
    /// The position state type.
    type Base;

    /// Shared access to the position state.
    fn base_reference(&self) -> &Self::Base;

    /// Exclusive access to the position state.
    fn base_reference_mut(&mut self) -> &mut Self::Base;
}

/// Gateway used by the engine to reach a cursor's base.
#[derive(Clone, Copy, Debug, Default)]
pub struct IteratorAccess;

impl IteratorAccess {
    /// Shared access to `d`'s base.
    #[inline(always)]
    pub fn base<D: BaseReference + ?Sized>(d: &D) -> &D::Base {
        d.base_reference()
    }

    /// Exclusive access to `d`'s base.
    #[inline(always)]
    pub fn base_mut<D: BaseReference + ?Sized>(d: &mut D) -> &mut D::Base {
        d.base_reference_mut()
    }
}
