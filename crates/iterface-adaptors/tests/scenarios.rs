//! End-to-end scenarios across the reference cursors.

use iterface_adaptors::{Filter, RepeatedChars, SliceCursor};
use iterface_core::ops::{distance, next};
use iterface_core::{Interface, Sentinel};
use iterface_test_utils::laws;
use proptest::prelude::*;

// ── Filter ──────────────────────────────────────────────────────

#[test]
fn even_filter_yields_expected_sequence() {
    let data = [1, 2, 3, 4, 10, 11, 101, 200, 0];
    let even = |x: &i32| x % 2 == 0;
    let mut it = Filter::new(&data, even);
    let end = Filter::end(&data, even);
    let mut seen = Vec::new();
    while it != end {
        seen.push(*it.get());
        it.inc();
    }
    assert_eq!(seen, [2, 4, 10, 200, 0]);
}

#[test]
fn filter_satisfies_forward_laws() {
    let data = [5, 8, 2, 7, 7, 6, 1];
    let even = |x: &i32| x % 2 == 0;
    laws::run_forward_laws(&Filter::new(&data, even), &Filter::end(&data, even));
}

#[test]
fn filter_public_base_tracks_slice_index() {
    let data = [1, 2, 3, 4];
    let even = |x: &i32| x % 2 == 0;
    let mut it = Filter::new(&data, even);
    assert_eq!(it.get_ref().base(), 1);
    it.inc();
    assert_eq!(it.get_ref().base(), 3);
}

// ── Repeated chars ──────────────────────────────────────────────

#[test]
fn repeated_foo_scenario() {
    let first = RepeatedChars::new(b"foo", 0).unwrap();
    let last = RepeatedChars::new(b"foo", 7).unwrap();
    let text: String = first.span(last).collect();
    assert_eq!(text.len(), 7);
    assert_eq!(text, "foofoof");

    let three = RepeatedChars::new(b"foo", 3).unwrap();
    assert_eq!(distance(&first, &three), 3);
    assert!(next(first, 3) == three);
}

#[test]
fn repeated_chars_satisfy_random_access_laws() {
    let first = RepeatedChars::new(b"abcd", 0).unwrap();
    let last = RepeatedChars::new(b"abcd", 9).unwrap();
    laws::run_random_access_laws(&first, &last, &[-5, -1, 0, 2, 11]);
}

// ── Slice ───────────────────────────────────────────────────────

#[test]
fn slice_satisfies_random_access_laws() {
    let data: Vec<u16> = (0..12).collect();
    laws::run_random_access_laws(
        &SliceCursor::begin(&data),
        &SliceCursor::end(&data),
        &[0, 1, 5, 11],
    );
}

#[test]
fn slice_against_index_sentinel() {
    let data = [9, 8, 7];
    let total: i32 = SliceCursor::begin(&data).span(Sentinel(data.len())).sum();
    assert_eq!(total, 24);
}

#[test]
fn slice_sentinel_equality_is_an_equivalence() {
    let data = [9, 8, 7, 6];
    let end = SliceCursor::end(&data);
    let mut window = laws::positions(&SliceCursor::begin(&data), &end);
    window.push(end);
    window.push(SliceCursor::begin(&data) + 2);

    laws::assert_sentinel_equivalence(&window, &Sentinel(data.len()));
    laws::assert_sentinel_equivalence(&window, &Sentinel(2usize));
    laws::assert_sentinel_equivalence(&window, &Sentinel(99usize));
}

#[test]
fn begin_and_end_compare() {
    let data = [1u8; 5];
    let first: Interface<SliceCursor<'_, u8>> = SliceCursor::begin(&data);
    let last = SliceCursor::end(&data);
    assert!(first < last);
    assert_eq!(last - first, 5);
    assert_eq!(first + 5, last);
}

proptest! {
    #[test]
    fn filter_matches_std_filter(data in proptest::collection::vec(-100i32..100, 0..40)) {
        let pred = |x: &i32| x % 3 == 0;
        let ours: Vec<i32> = Filter::new(&data, pred)
            .span(Filter::end(&data, pred))
            .copied()
            .collect();
        let expected: Vec<i32> = data.iter().copied().filter(|x| pred(x)).collect();
        prop_assert_eq!(ours, expected);
    }

    #[test]
    fn repeated_index_matches_modulo(n in -1000isize..1000) {
        let source = b"xyz";
        let it = RepeatedChars::new(source, 0).unwrap();
        let expected = char::from(source[n.rem_euclid(3) as usize]);
        prop_assert_eq!(it.at(n), expected);
    }
}
