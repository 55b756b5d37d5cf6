//! Which primitive actually runs when more than one strategy applies.

use iterface_core::{ops, DefaultSentinel, Sentinel};
use iterface_test_utils::mocks::{distance_only, recording, single_pass, stepping};
use iterface_test_utils::{Journal, Primitive};

// ── Stepping ────────────────────────────────────────────────────

#[test]
fn compound_add_drives_increment_and_decrement() {
    let journal = Journal::new();
    let mut it = recording(0, &journal);
    it.inc();
    it.dec();
    it.dec();
    assert_eq!(journal.take().as_slice(), &[Primitive::AddAssign; 3]);
    assert_eq!(it.base().at, -1);
}

#[test]
fn direct_steps_without_compound_add() {
    let journal = Journal::new();
    let mut it = stepping(5, &journal);
    it.inc().inc();
    it.dec();
    assert_eq!(
        journal.take().as_slice(),
        &[Primitive::Increment, Primitive::Increment, Primitive::Decrement]
    );
    assert_eq!(it.base().at, 6);
}

#[test]
fn post_inc_steps_once() {
    let journal = Journal::new();
    let mut it = recording(2, &journal);
    let prior = it.post_inc();
    assert_eq!(journal.count(Primitive::AddAssign), 1);
    assert_eq!(prior.base().at, 2);
    assert_eq!(it.base().at, 3);
}

// ── Comparison ──────────────────────────────────────────────────

#[test]
fn ordering_prefers_base_comparison_over_distance() {
    let journal = Journal::new();
    let a = recording(1, &journal);
    let b = recording(4, &journal);
    journal.clear();
    assert!(a < b);
    assert!(b >= a);
    assert_eq!(journal.count(Primitive::Cmp), 2);
    assert_eq!(journal.count(Primitive::Sub), 0);
}

#[test]
fn equality_prefers_base_equality_over_distance() {
    let journal = Journal::new();
    let a = recording(3, &journal);
    let b = recording(3, &journal);
    journal.clear();
    assert!(a == b);
    assert_eq!(journal.take().as_slice(), &[Primitive::Eq]);
}

#[test]
fn distance_fallback_when_base_has_no_comparison() {
    let journal = Journal::new();
    let a = distance_only(1, &journal);
    let b = distance_only(4, &journal);
    journal.clear();
    assert!(a < b);
    assert!(a != b);
    assert_eq!(journal.take().as_slice(), &[Primitive::Sub, Primitive::Sub]);
}

#[test]
fn difference_never_steps() {
    let journal = Journal::new();
    let a = recording(0, &journal);
    let b = recording(1000, &journal);
    journal.clear();
    assert_eq!(b - a, 1000);
    assert_eq!(journal.take().as_slice(), &[Primitive::Sub]);
}

#[test]
fn indexing_is_one_jump_and_one_read() {
    let journal = Journal::new();
    let it = recording(0, &journal);
    journal.clear();
    assert_eq!(it.at(7), 70);
    assert_eq!(
        journal.take().as_slice(),
        &[Primitive::AddAssign, Primitive::Dereference]
    );
}

#[test]
fn free_functions_use_compound_add() {
    let journal = Journal::new();
    let first = distance_only(0, &journal);
    let last = ops::next(first.clone(), 3);
    assert_eq!(ops::distance(&first, &last), 3);
    journal.clear();
    assert!(ops::equal(&ops::prev(last, 3), &first));
    assert_eq!(journal.count(Primitive::AddAssign), 1);
}

// ── Single pass ─────────────────────────────────────────────────

#[test]
fn single_pass_runs_against_sentinel() {
    let journal = Journal::new();
    let mut it = single_pass(3, &journal);
    let end = Sentinel(DefaultSentinel);
    let mut seen = Vec::new();
    while it != end {
        seen.push(it.get());
        let () = it.post_inc();
    }
    assert_eq!(seen, [3, 2, 1]);
    assert!(end == it);
}

#[test]
fn single_pass_span_consumes_once() {
    let journal = Journal::new();
    let total: u32 = single_pass(4, &journal).span(Sentinel(DefaultSentinel)).sum();
    assert_eq!(total, 10);
    assert_eq!(journal.count(Primitive::Increment), 4);
}
