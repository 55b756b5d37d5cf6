//! Category classifier.
//!
//! The category of a cursor is derived, never declared: it is the
//! declared concept tag when dereference yields an actual reference, and
//! [`Input`] when dereference computes a value. `Contiguous` is treated
//! as `RandomAccess`, and a tag is never promoted beyond what it declares.

use crate::cursor::Cursor;
use crate::difference::Difference;
use crate::interface::Interface;
use crate::probe::{BaseDistance, Decrement, Dereference, EqStrategy, Increment, OrdStrategy};
use crate::tag::{AtLeast, Bidirectional, Category, ConceptTag, Forward, Input, RandomAccess};
use std::ops::AddAssign;

/// Whether a reference type is an actual reference.
pub trait ReferenceKind {
    /// `true` for [`Borrowed`].
    const IS_REFERENCE: bool;
}

/// Dereference yields a reference into the sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Borrowed;

/// Dereference computes a fresh value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Computed;

impl ReferenceKind for Borrowed {
    const IS_REFERENCE: bool = true;
}

impl ReferenceKind for Computed {
    const IS_REFERENCE: bool = false;
}

/// A type usable as a cursor's `Reference`.
///
/// `&T` and `&mut T` are [`Borrowed`]; the scalar built-ins are
/// [`Computed`]. Other value types declare themselves with
/// [`computed_reference!`](crate::computed_reference).
pub trait IterReference {
    /// Reference or computed value.
    type Kind: ReferenceKind + Classify;
}

impl<T: ?Sized> IterReference for &T {
    type Kind = Borrowed;
}

impl<T: ?Sized> IterReference for &mut T {
    type Kind = Borrowed;
}

/// Declare value types as computed (non-reference) cursor references.
///
/// ```
/// use iterface_core::{computed_reference, Computed, IterReference};
///
/// #[derive(Clone, Debug)]
/// struct Pixel(u8, u8, u8);
///
/// computed_reference!(Pixel);
///
/// fn kind<R: IterReference<Kind = Computed>>() {}
/// kind::<Pixel>();
/// ```
///
/// Generic types take their parameters in brackets, one type per call:
///
/// ```
/// use iterface_core::{computed_reference, Computed, IterReference};
///
/// struct Labelled<'a, T> {
///     label: &'a str,
///     value: T,
/// }
///
/// computed_reference!(['a, T] Labelled<'a, T>);
///
/// fn kind<R: IterReference<Kind = Computed>>() {}
/// kind::<Labelled<'static, f32>>();
/// ```
#[macro_export]
macro_rules! computed_reference {
    ([$($generics:tt)*] $t:ty) => {
        impl<$($generics)*> $crate::category::IterReference for $t {
            type Kind = $crate::category::Computed;
        }
    };
    ($($t:ty),+ $(,)?) => {
        $(
            $crate::computed_reference!([] $t);
        )+
    };
}

computed_reference!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
);

/// Type-level classification: maps a declared tag to the derived one.
pub trait Classify {
    /// Derived category for the declared tag `T`.
    type Category<T: ConceptTag>: ConceptTag;
}

impl Classify for Borrowed {
    type Category<T: ConceptTag> = T::Capped;
}

impl Classify for Computed {
    type Category<T: ConceptTag> = Input;
}

/// The derived category tag of a cursor.
pub type CategoryOf<C> = <<<C as Cursor>::Reference as IterReference>::Kind as Classify>::Category<
    <C as Cursor>::Concept,
>;

/// Value-level classification.
///
/// A computed reference always classifies as [`Category::Input`]; an
/// actual reference keeps the declared category.
pub const fn classify(declared: Category, is_reference: bool) -> Category {
    if is_reference {
        declared
    } else {
        Category::Input
    }
}

/// Readable, single-pass traversal.
///
/// The concept-checking traits below look at the declared concept tag
/// and the primitive set, not at the derived category: a cursor whose
/// dereference computes values still satisfies the concept it declares,
/// while its classified category (used by [`CategoryOf`]) drops to
/// [`Input`].
pub trait InputIterator {}

/// Multi-pass traversal: copies are independent and comparable.
pub trait ForwardIterator: InputIterator {}

/// Multi-pass traversal in both directions.
pub trait BidirectionalIterator: ForwardIterator {}

/// Constant-time jumps, distance and ordering.
pub trait RandomAccessIterator: BidirectionalIterator {}

impl<C> InputIterator for Interface<C>
where
    C: Cursor,
    C::Base: Dereference<Output = C::Reference> + Increment<C::Difference>,
    C::Concept: AtLeast<Input>,
{
}

impl<C> ForwardIterator for Interface<C>
where
    C: Cursor + Clone,
    C::Base: Dereference<Output = C::Reference> + Increment<C::Difference> + EqStrategy,
    C::Concept: AtLeast<Input> + AtLeast<Forward>,
{
}

impl<C> BidirectionalIterator for Interface<C>
where
    C: Cursor + Clone,
    C::Base: Dereference<Output = C::Reference>
        + Increment<C::Difference>
        + Decrement<C::Difference>
        + EqStrategy,
    C::Concept: AtLeast<Input> + AtLeast<Forward> + AtLeast<Bidirectional>,
{
}

impl<C> RandomAccessIterator for Interface<C>
where
    C: Cursor + Clone,
    C::Base: Dereference<Output = C::Reference>
        + AddAssign<C::Difference>
        + BaseDistance<C::Base, C::Difference>
        + OrdStrategy,
    C::Difference: Difference,
    C::Concept:
        AtLeast<Input> + AtLeast<Forward> + AtLeast<Bidirectional> + AtLeast<RandomAccess>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::{Contiguous, Output};

    #[test]
    fn computed_reference_is_input() {
        assert_eq!(classify(Category::RandomAccess, false), Category::Input);
        assert_eq!(classify(Category::Bidirectional, false), Category::Input);
    }

    #[test]
    fn actual_reference_keeps_declared_tag() {
        assert_eq!(classify(Category::Bidirectional, true), Category::Bidirectional);
        assert_eq!(classify(Category::Forward, true), Category::Forward);
    }

    #[test]
    fn type_level_matches_value_level() {
        fn derived<K: Classify, T: ConceptTag>() -> Category {
            <K::Category<T> as ConceptTag>::CATEGORY
        }
        assert_eq!(derived::<Borrowed, Contiguous>(), Category::RandomAccess);
        assert_eq!(derived::<Borrowed, Bidirectional>(), Category::Bidirectional);
        assert_eq!(derived::<Computed, RandomAccess>(), Category::Input);
        assert_eq!(derived::<Borrowed, Output>(), Category::Output);
    }

    #[test]
    fn reference_kinds() {
        assert!(<<&u8 as IterReference>::Kind as ReferenceKind>::IS_REFERENCE);
        assert!(<<&mut str as IterReference>::Kind as ReferenceKind>::IS_REFERENCE);
        assert!(!<<char as IterReference>::Kind as ReferenceKind>::IS_REFERENCE);
    }
}
