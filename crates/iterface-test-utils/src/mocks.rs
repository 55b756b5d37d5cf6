//! Instrumented positions.
//!
//! Every primitive on these positions appends a [`Primitive`] to a shared
//! [`Journal`], so a test can assert not only what a synthesized
//! operation returned but which primitive produced it.
//!
//! | Position | Primitives | Concept |
//! |----------|------------|---------|
//! | [`RecordingPosition`] | `*`, `+=`, `-`, `==`, `partial_cmp` | random access |
//! | [`SteppingPosition`] | `*`, direct `++`/`--`, `==` | bidirectional |
//! | [`DistancePosition`] | `*`, `+=`, `-` | random access |
//! | [`SinglePassPosition`] | `*`, direct `++`, `== end` | input, not `Clone` |

use iterface_core::{
    distance_comparisons, BaseReference, Bidirectional, Cursor, Decrement, DefaultSentinel,
    Dereference, Increment, Input, Interface, ProxyArrowResult, RandomAccess,
};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::cmp::Ordering;
use std::ops::{AddAssign, Sub};
use std::rc::Rc;

/// A primitive that ran on a mock position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    Dereference,
    Increment,
    Decrement,
    AddAssign,
    Sub,
    Eq,
    Cmp,
}

/// Shared, append-only record of primitive calls.
///
/// Clones share the same record, so every copy of a position writes to
/// the journal it was built with.
#[derive(Clone, Debug, Default)]
pub struct Journal(Rc<RefCell<SmallVec<[Primitive; 8]>>>);

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, primitive: Primitive) {
        self.0.borrow_mut().push(primitive);
    }

    /// Drain and return everything recorded so far.
    pub fn take(&self) -> SmallVec<[Primitive; 8]> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    /// How many times `primitive` ran.
    pub fn count(&self, primitive: Primitive) -> usize {
        self.0.borrow().iter().filter(|&&p| p == primitive).count()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

// ── Positions ───────────────────────────────────────────────────

/// Has every primitive. Dereference yields the position times ten.
#[derive(Clone, Debug)]
pub struct RecordingPosition {
    pub at: i64,
    journal: Journal,
}

impl RecordingPosition {
    pub fn new(at: i64, journal: &Journal) -> Self {
        Self {
            at,
            journal: journal.clone(),
        }
    }
}

impl Dereference for RecordingPosition {
    type Output = i64;

    fn dereference(&self) -> i64 {
        self.journal.record(Primitive::Dereference);
        self.at * 10
    }
}

impl AddAssign<isize> for RecordingPosition {
    fn add_assign(&mut self, n: isize) {
        self.journal.record(Primitive::AddAssign);
        self.at += n as i64;
    }
}

impl Sub for RecordingPosition {
    type Output = isize;

    fn sub(self, rhs: Self) -> isize {
        self.journal.record(Primitive::Sub);
        (self.at - rhs.at) as isize
    }
}

impl PartialEq for RecordingPosition {
    fn eq(&self, other: &Self) -> bool {
        self.journal.record(Primitive::Eq);
        self.at == other.at
    }
}

impl PartialOrd for RecordingPosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.journal.record(Primitive::Cmp);
        self.at.partial_cmp(&other.at)
    }
}

/// Steps one position at a time; no `+=`, no distance.
#[derive(Clone, Debug)]
pub struct SteppingPosition {
    pub at: i64,
    journal: Journal,
}

impl SteppingPosition {
    pub fn new(at: i64, journal: &Journal) -> Self {
        Self {
            at,
            journal: journal.clone(),
        }
    }
}

impl Dereference for SteppingPosition {
    type Output = i64;

    fn dereference(&self) -> i64 {
        self.journal.record(Primitive::Dereference);
        self.at
    }
}

impl Increment<isize> for SteppingPosition {
    fn increment(&mut self) {
        self.journal.record(Primitive::Increment);
        self.at += 1;
    }
}

impl Decrement<isize> for SteppingPosition {
    fn decrement(&mut self) {
        self.journal.record(Primitive::Decrement);
        self.at -= 1;
    }
}

impl PartialEq for SteppingPosition {
    fn eq(&self, other: &Self) -> bool {
        self.journal.record(Primitive::Eq);
        self.at == other.at
    }
}

/// Only `+=` and `-`; comparisons fall back to the distance.
#[derive(Clone, Debug)]
pub struct DistancePosition {
    pub at: i64,
    journal: Journal,
}

impl DistancePosition {
    pub fn new(at: i64, journal: &Journal) -> Self {
        Self {
            at,
            journal: journal.clone(),
        }
    }
}

impl Dereference for DistancePosition {
    type Output = i64;

    fn dereference(&self) -> i64 {
        self.journal.record(Primitive::Dereference);
        self.at
    }
}

impl AddAssign<isize> for DistancePosition {
    fn add_assign(&mut self, n: isize) {
        self.journal.record(Primitive::AddAssign);
        self.at += n as i64;
    }
}

impl Sub for DistancePosition {
    type Output = isize;

    fn sub(self, rhs: Self) -> isize {
        self.journal.record(Primitive::Sub);
        (self.at - rhs.at) as isize
    }
}

distance_comparisons!(DistancePosition);

/// Move-only countdown that knows its own end.
#[derive(Debug)]
pub struct SinglePassPosition {
    pub remaining: u32,
    journal: Journal,
}

impl SinglePassPosition {
    pub fn new(remaining: u32, journal: &Journal) -> Self {
        Self {
            remaining,
            journal: journal.clone(),
        }
    }
}

impl Dereference for SinglePassPosition {
    type Output = u32;

    fn dereference(&self) -> u32 {
        self.journal.record(Primitive::Dereference);
        self.remaining
    }
}

impl Increment<isize> for SinglePassPosition {
    fn increment(&mut self) {
        self.journal.record(Primitive::Increment);
        self.remaining = self.remaining.saturating_sub(1);
    }
}

impl PartialEq<DefaultSentinel> for SinglePassPosition {
    fn eq(&self, _: &DefaultSentinel) -> bool {
        self.journal.record(Primitive::Eq);
        self.remaining == 0
    }
}

// ── Cursors ─────────────────────────────────────────────────────

/// Cursor over any of the mock positions.
#[derive(Clone, Debug)]
pub struct Mock<P> {
    pos: P,
}

impl<P> Mock<P> {
    pub fn new(pos: P) -> Self {
        Self { pos }
    }
}

impl<P> BaseReference for Mock<P> {
    type Base = P;

    fn base_reference(&self) -> &P {
        &self.pos
    }

    fn base_reference_mut(&mut self) -> &mut P {
        &mut self.pos
    }
}

macro_rules! mock_cursor {
    ($pos:ty, $concept:ty, $value:ty) => {
        impl Cursor for Mock<$pos> {
            type Concept = $concept;
            type Value = $value;
            type Reference = $value;
            type Pointer = ProxyArrowResult<$value>;
            type Difference = isize;
        }
    };
}

mock_cursor!(RecordingPosition, RandomAccess, i64);
mock_cursor!(SteppingPosition, Bidirectional, i64);
mock_cursor!(DistancePosition, RandomAccess, i64);
mock_cursor!(SinglePassPosition, Input, u32);

pub fn recording(at: i64, journal: &Journal) -> Interface<Mock<RecordingPosition>> {
    Interface::new(Mock::new(RecordingPosition::new(at, journal)))
}

pub fn stepping(at: i64, journal: &Journal) -> Interface<Mock<SteppingPosition>> {
    Interface::new(Mock::new(SteppingPosition::new(at, journal)))
}

pub fn distance_only(at: i64, journal: &Journal) -> Interface<Mock<DistancePosition>> {
    Interface::new(Mock::new(DistancePosition::new(at, journal)))
}

pub fn single_pass(remaining: u32, journal: &Journal) -> Interface<Mock<SinglePassPosition>> {
    Interface::new(Mock::new(SinglePassPosition::new(remaining, journal)))
}
