//! Concept tags: the declared minimum category of a cursor.
//!
//! Tags are zero-sized markers chosen once, as the `Concept` associated
//! type of a [`Cursor`](crate::Cursor). They are never inferred upward
//! from the primitives a cursor happens to provide.

use std::fmt;

/// Traversal strength, weakest first.
///
/// `Output` sits outside the input chain; the remaining variants form a
/// chain in which each is a strict superset of the previous guarantees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Write-only traversal.
    Output,
    /// Single-pass read traversal.
    Input,
    /// Multi-pass read traversal.
    Forward,
    /// Multi-pass traversal in both directions.
    Bidirectional,
    /// Constant-time jumps, distance and ordering.
    RandomAccess,
}

impl Category {
    /// Returns `true` if `self` carries every guarantee of `other`.
    ///
    /// `Output` only includes itself.
    pub const fn includes(self, other: Category) -> bool {
        match (self, other) {
            (Category::Output, Category::Output) => true,
            (Category::Output, _) | (_, Category::Output) => false,
            _ => self as u8 >= other as u8,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Output => "output",
            Self::Input => "input",
            Self::Forward => "forward",
            Self::Bidirectional => "bidirectional",
            Self::RandomAccess => "random-access",
        };
        f.write_str(name)
    }
}

/// Marker absent-pointer type, used as the pointer of output-only cursors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NoPointer;

/// A declared concept tag.
pub trait ConceptTag: Copy + Default + fmt::Debug + 'static {
    /// The category this tag declares.
    const CATEGORY: Category;

    /// Category used by the classifier when the reference is an actual
    /// reference: the tag itself, with `Contiguous` capped to `RandomAccess`.
    type Capped: ConceptTag;

    /// The pointer type exposed for a declared pointer `P`.
    ///
    /// `P` for every tag except [`Output`], which has no pointer.
    type Pointer<P>;
}

/// Write-only tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Output;

/// Single-pass read tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Input;

/// Multi-pass read tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Forward;

/// Multi-pass, two-way tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bidirectional;

/// Constant-time jump tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RandomAccess;

/// Random access over contiguous storage. Classified as [`RandomAccess`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Contiguous;

impl ConceptTag for Output {
    const CATEGORY: Category = Category::Output;
    type Capped = Output;
    type Pointer<P> = NoPointer;
}

macro_rules! readable_concept_tag {
    ($tag:ty, $category:expr, $capped:ty) => {
        impl ConceptTag for $tag {
            const CATEGORY: Category = $category;
            type Capped = $capped;
            type Pointer<P> = P;
        }
    };
}

readable_concept_tag!(Input, Category::Input, Input);
readable_concept_tag!(Forward, Category::Forward, Forward);
readable_concept_tag!(Bidirectional, Category::Bidirectional, Bidirectional);
readable_concept_tag!(RandomAccess, Category::RandomAccess, RandomAccess);
readable_concept_tag!(Contiguous, Category::RandomAccess, RandomAccess);

/// Type-level "`Self` carries every guarantee of `T`".
///
/// Used as a bound by the concept-checking traits in
/// [`category`](crate::category).
pub trait AtLeast<T: ConceptTag>: ConceptTag {}

macro_rules! at_least {
    ($tag:ty => $($weaker:ty),+) => {
        $(impl AtLeast<$weaker> for $tag {})+
    };
}

at_least!(Output => Output);
at_least!(Input => Input);
at_least!(Forward => Input, Forward);
at_least!(Bidirectional => Input, Forward, Bidirectional);
at_least!(RandomAccess => Input, Forward, Bidirectional, RandomAccess);
at_least!(Contiguous => Input, Forward, Bidirectional, RandomAccess, Contiguous);

/// What post-increment returns for a tag.
///
/// Single-pass cursors cannot promise a stable copy of the prior
/// position, so for [`Input`] the result is `()` and nothing can be read
/// from it. Every other tag clones, advances the original and returns the
/// clone.
pub trait PostIncrement<I> {
    /// Result of post-increment.
    type Output;

    /// Advance `it` with `step` and build the post-increment result.
    fn post_increment<F: FnOnce(&mut I)>(it: &mut I, step: F) -> Self::Output;
}

impl<I> PostIncrement<I> for Input {
    type Output = ();

    #[inline]
    fn post_increment<F: FnOnce(&mut I)>(it: &mut I, step: F) {
        step(it);
    }
}

macro_rules! copying_post_increment {
    ($($tag:ty),+) => {
        $(
            impl<I: Clone> PostIncrement<I> for $tag {
                type Output = I;

                #[inline]
                fn post_increment<F: FnOnce(&mut I)>(it: &mut I, step: F) -> I {
                    let prior = it.clone();
                    step(it);
                    prior
                }
            }
        )+
    };
}

copying_post_increment!(Output, Forward, Bidirectional, RandomAccess, Contiguous);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_follows_the_input_chain() {
        assert!(Category::RandomAccess.includes(Category::Input));
        assert!(Category::Bidirectional.includes(Category::Forward));
        assert!(Category::Forward.includes(Category::Forward));
        assert!(!Category::Forward.includes(Category::Bidirectional));
        assert!(!Category::Input.includes(Category::Forward));
    }

    #[test]
    fn output_is_outside_the_chain() {
        assert!(Category::Output.includes(Category::Output));
        assert!(!Category::Output.includes(Category::Input));
        assert!(!Category::RandomAccess.includes(Category::Output));
    }

    #[test]
    fn contiguous_declares_random_access() {
        assert_eq!(Contiguous::CATEGORY, Category::RandomAccess);
        assert_eq!(
            <<Contiguous as ConceptTag>::Capped as ConceptTag>::CATEGORY,
            Category::RandomAccess
        );
    }

    #[test]
    fn input_post_increment_discards_prior() {
        let mut n = 5u32;
        let () = <Input as PostIncrement<u32>>::post_increment(&mut n, |n| *n += 1);
        assert_eq!(n, 6);
    }

    #[test]
    fn forward_post_increment_returns_prior() {
        let mut n = 5u32;
        let prior = <Forward as PostIncrement<u32>>::post_increment(&mut n, |n| *n += 1);
        assert_eq!(prior, 5);
        assert_eq!(n, 6);
    }

    #[test]
    fn display_names() {
        assert_eq!(Category::RandomAccess.to_string(), "random-access");
        assert_eq!(Category::Input.to_string(), "input");
    }
}
