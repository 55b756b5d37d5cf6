//! The consumer-facing trait: what a cursor declares about itself.

use crate::access::BaseReference;
use crate::category::IterReference;
use crate::difference::Difference;
use crate::tag::ConceptTag;

/// A minimal iterator definition.
///
/// A cursor names its concept tag and associated types once, grants the
/// engine access to its position state through [`BaseReference`], and
/// implements the primitives it has on that state. Wrapping it in
/// [`Interface`](crate::Interface) yields every operation those
/// primitives can support.
///
/// The conventional choices are available as aliases:
/// [`DefaultReference`], [`DefaultPointer`] and [`DefaultDifference`].
pub trait Cursor: BaseReference {
    /// Declared minimum category.
    type Concept: ConceptTag;

    /// Element type.
    type Value;

    /// What dereference yields: `&Value` for stored elements, or a
    /// computed value.
    type Reference: IterReference;

    /// What the arrow operation yields. Replaced by
    /// [`NoPointer`](crate::NoPointer) for output cursors, see
    /// [`PointerOf`].
    type Pointer;

    /// Signed distance between positions.
    type Difference: Difference;
}

/// Reference to a stored value.
pub type DefaultReference<'a, V> = &'a V;

/// Pointer to a stored value.
pub type DefaultPointer<'a, V> = &'a V;

/// Distance between positions.
pub type DefaultDifference = isize;

/// The pointer an [`Interface`](crate::Interface) over `C` exposes.
pub type PointerOf<C> = <<C as Cursor>::Concept as ConceptTag>::Pointer<<C as Cursor>::Pointer>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::{Forward, NoPointer, Output};
    use std::any::TypeId;

    struct Sink(usize);

    impl BaseReference for Sink {
        type Base = usize;

        fn base_reference(&self) -> &usize {
            &self.0
        }

        fn base_reference_mut(&mut self) -> &mut usize {
            &mut self.0
        }
    }

    impl Cursor for Sink {
        type Concept = Output;
        type Value = u8;
        type Reference = ();
        type Pointer = &'static u8;
        type Difference = DefaultDifference;
    }

    struct Reader(usize);

    impl BaseReference for Reader {
        type Base = usize;

        fn base_reference(&self) -> &usize {
            &self.0
        }

        fn base_reference_mut(&mut self) -> &mut usize {
            &mut self.0
        }
    }

    impl Cursor for Reader {
        type Concept = Forward;
        type Value = u8;
        type Reference = DefaultReference<'static, u8>;
        type Pointer = DefaultPointer<'static, u8>;
        type Difference = DefaultDifference;
    }

    #[test]
    fn output_cursor_has_no_pointer() {
        assert_eq!(TypeId::of::<PointerOf<Sink>>(), TypeId::of::<NoPointer>());
    }

    #[test]
    fn readable_cursor_keeps_declared_pointer() {
        assert_eq!(TypeId::of::<PointerOf<Reader>>(), TypeId::of::<&'static u8>());
    }
}
