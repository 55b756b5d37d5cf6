//! Random-access cursor over a byte string repeated indefinitely.

use crate::error::AdaptorError;
use iterface_core::{
    distance_comparisons, BaseReference, Cursor, Dereference, Interface, ProxyArrowResult,
    RandomAccess,
};
use std::ops::{AddAssign, Sub};

/// Position in the infinite repetition of `source`.
///
/// Has no `PartialEq`/`PartialOrd` of its own: comparisons go through
/// the distance between positions. The source is never empty.
#[derive(Clone, Copy, Debug)]
pub struct RepeatPosition<'a> {
    source: &'a [u8],
    pos: isize,
}

impl Dereference for RepeatPosition<'_> {
    type Output = char;

    #[inline]
    fn dereference(&self) -> char {
        let len = self.source.len() as isize;
        char::from(self.source[self.pos.rem_euclid(len) as usize])
    }
}

impl AddAssign<isize> for RepeatPosition<'_> {
    #[inline(always)]
    fn add_assign(&mut self, n: isize) {
        self.pos += n;
    }
}

impl Sub for RepeatPosition<'_> {
    type Output = isize;

    #[inline(always)]
    fn sub(self, origin: Self) -> isize {
        self.pos - origin.pos
    }
}

distance_comparisons!(['a] RepeatPosition<'a>);

/// `source` repeated forever: `b"foo"` reads `f o o f o o f ...`.
///
/// Dereference computes a `char`, so although the cursor declares
/// random access its classified category is input.
///
/// # Examples
///
/// ```
/// use iterface_adaptors::RepeatedChars;
///
/// let first = RepeatedChars::new(b"foo", 0)?;
/// let last = RepeatedChars::new(b"foo", 7)?;
/// let text: String = first.span(last).collect();
/// assert_eq!(text, "foofoof");
/// # Ok::<(), iterface_adaptors::AdaptorError>(())
/// ```
///
/// There is no default position; every instance comes from [`new`](Self::new):
///
/// ```compile_fail
/// use iterface_adaptors::RepeatedChars;
/// use iterface_core::Interface;
///
/// let it = Interface::<RepeatedChars<'static>>::default();
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RepeatedChars<'a> {
    pos: RepeatPosition<'a>,
}

impl<'a> RepeatedChars<'a> {
    /// Iterator at `position` in the repetition of `source`.
    ///
    /// Returns `Err(AdaptorError::EmptySource)` if `source` is empty.
    pub fn new(source: &'a [u8], position: isize) -> Result<Interface<Self>, AdaptorError> {
        if source.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(position, "repeated chars over an empty source");
            return Err(AdaptorError::EmptySource);
        }
        Ok(Interface::new(Self {
            pos: RepeatPosition {
                source,
                pos: position,
            },
        }))
    }

    /// Absolute position in the repetition.
    pub fn position(&self) -> isize {
        self.pos.pos
    }
}

impl<'a> BaseReference for RepeatedChars<'a> {
    type Base = RepeatPosition<'a>;

    #[inline(always)]
    fn base_reference(&self) -> &Self::Base {
        &self.pos
    }

    #[inline(always)]
    fn base_reference_mut(&mut self) -> &mut Self::Base {
        &mut self.pos
    }
}

impl Cursor for RepeatedChars<'_> {
    type Concept = RandomAccess;
    type Value = char;
    type Reference = char;
    type Pointer = ProxyArrowResult<char>;
    type Difference = isize;
}
