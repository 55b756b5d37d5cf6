//! Contiguous random-access cursor over a slice.

use crate::error::AdaptorError;
use iterface_core::{BaseReference, Contiguous, Cursor, Dereference, Interface};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{AddAssign, Sub};

/// Index into a borrowed slice.
///
/// Positions compare by index only; comparing positions over different
/// slices is meaningless. Dereferencing an index outside the slice
/// panics.
pub struct SlicePosition<'a, T> {
    slice: &'a [T],
    index: isize,
}

impl<T> Clone for SlicePosition<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SlicePosition<'_, T> {}

impl<T> Default for SlicePosition<'_, T> {
    fn default() -> Self {
        Self {
            slice: &[],
            index: 0,
        }
    }
}

impl<T> fmt::Debug for SlicePosition<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlicePosition")
            .field("index", &self.index)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<'a, T> Dereference for SlicePosition<'a, T> {
    type Output = &'a T;

    #[inline(always)]
    fn dereference(&self) -> &'a T {
        let slice: &'a [T] = self.slice;
        &slice[self.index as usize]
    }
}

impl<T> AddAssign<isize> for SlicePosition<'_, T> {
    #[inline(always)]
    fn add_assign(&mut self, n: isize) {
        self.index += n;
    }
}

impl<T> Sub for SlicePosition<'_, T> {
    type Output = isize;

    #[inline(always)]
    fn sub(self, origin: Self) -> isize {
        self.index - origin.index
    }
}

impl<T> PartialEq for SlicePosition<'_, T> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for SlicePosition<'_, T> {}

/// An index used as an end marker, for `Sentinel(len)`.
impl<T> PartialEq<usize> for SlicePosition<'_, T> {
    #[inline(always)]
    fn eq(&self, end: &usize) -> bool {
        self.index == *end as isize
    }
}

impl<T> PartialOrd for SlicePosition<'_, T> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for SlicePosition<'_, T> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

/// Random-access cursor over `&'a [T]`, the analogue of a raw pointer.
///
/// # Examples
///
/// ```
/// use iterface_adaptors::SliceCursor;
///
/// let data = [3, 1, 4, 1, 5];
/// let first = SliceCursor::begin(&data);
/// let last = SliceCursor::end(&data);
///
/// assert_eq!(last - first, 5);
/// assert_eq!(*first.at(2), 4);
/// assert_eq!(first.span(last).max(), Some(&5));
/// ```
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    pos: SlicePosition<'a, T>,
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> Default for SliceCursor<'_, T> {
    fn default() -> Self {
        Self {
            pos: SlicePosition::default(),
        }
    }
}

impl<'a, T> SliceCursor<'a, T> {
    /// Iterator at the first element.
    pub fn begin(slice: &'a [T]) -> Interface<Self> {
        Interface::new(Self {
            pos: SlicePosition { slice, index: 0 },
        })
    }

    /// Iterator one past the last element.
    pub fn end(slice: &'a [T]) -> Interface<Self> {
        Interface::new(Self {
            pos: SlicePosition {
                slice,
                index: slice.len() as isize,
            },
        })
    }

    /// Iterator at `position`, which may equal the length (the end).
    ///
    /// Returns `Err(AdaptorError::PositionOutOfRange)` outside `0..=len`.
    pub fn with_position(slice: &'a [T], position: isize) -> Result<Interface<Self>, AdaptorError> {
        if position < 0 || position as usize > slice.len() {
            #[cfg(feature = "tracing")]
            tracing::debug!(position, len = slice.len(), "slice cursor position out of range");
            return Err(AdaptorError::PositionOutOfRange {
                position,
                len: slice.len(),
            });
        }
        Ok(Interface::new(Self {
            pos: SlicePosition {
                slice,
                index: position,
            },
        }))
    }

    /// Current index into the slice.
    pub fn index(&self) -> isize {
        self.pos.index
    }
}

impl<'a, T> BaseReference for SliceCursor<'a, T> {
    type Base = SlicePosition<'a, T>;

    #[inline(always)]
    fn base_reference(&self) -> &Self::Base {
        &self.pos
    }

    #[inline(always)]
    fn base_reference_mut(&mut self) -> &mut Self::Base {
        &mut self.pos
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Concept = Contiguous;
    type Value = T;
    type Reference = &'a T;
    type Pointer = &'a T;
    type Difference = isize;
}
