//! Workloads shared by the iterface benchmarks and demos.
//!
//! Each workload comes in two forms: a hand-written loop over the raw
//! data, and the same traversal through cursors synthesized by
//! [`Interface`](iterface_core::Interface). The benchmarks compare them;
//! the tests pin down that they compute the same thing.
//!
//! - [`sample_data`]: deterministic pseudo-random input
//! - [`hand_sum_even`] / [`interface_sum_even`]: filtered reduction
//! - [`hand_repeat`] / [`interface_repeat`]: repeated-sequence extraction
//! - [`hand_strided_sum`] / [`interface_strided_sum`]: random-access jumps

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use iterface_adaptors::{AdaptorError, Filter, RepeatedChars, SliceCursor};

/// `len` deterministic values in `-1000..1000`.
pub fn sample_data(len: usize) -> Vec<i64> {
    (0..len as u64)
        .map(|i| (i.wrapping_mul(6364136223846793007) >> 33) as i64 % 2000 - 1000)
        .collect()
}

fn is_even(x: &i64) -> bool {
    x % 2 == 0
}

/// Sum of the even values, hand-written.
pub fn hand_sum_even(data: &[i64]) -> i64 {
    let mut total = 0;
    for &x in data {
        if is_even(&x) {
            total += x;
        }
    }
    total
}

/// Sum of the even values through [`Filter`].
pub fn interface_sum_even(data: &[i64]) -> i64 {
    Filter::new(data, is_even)
        .span(Filter::end(data, is_even))
        .sum()
}

/// The first `n` characters of `source` repeated, hand-written.
pub fn hand_repeat(source: &[u8], n: usize) -> String {
    (0..n).map(|i| char::from(source[i % source.len()])).collect()
}

/// The first `n` characters of `source` repeated, through
/// [`RepeatedChars`].
pub fn interface_repeat(source: &[u8], n: usize) -> Result<String, AdaptorError> {
    let first = RepeatedChars::new(source, 0)?;
    let last = RepeatedChars::new(source, n as isize)?;
    Ok(first.span(last).collect())
}

/// Sum of every `stride`-th value, hand-written.
pub fn hand_strided_sum(data: &[i64], stride: usize) -> i64 {
    data.iter().step_by(stride).sum()
}

/// Sum of every `stride`-th value, jumping a [`SliceCursor`] with `+=`.
pub fn interface_strided_sum(data: &[i64], stride: usize) -> i64 {
    let mut it = SliceCursor::begin(data);
    let last = SliceCursor::end(data);
    let mut total = 0;
    while it < last {
        total += *it.get();
        it += stride as isize;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_data_is_deterministic_and_bounded() {
        let a = sample_data(256);
        assert_eq!(a, sample_data(256));
        assert!(a.iter().all(|x| (-1000..1000).contains(x)));
    }

    #[test]
    fn filtered_sum_matches() {
        let data = sample_data(1000);
        assert_eq!(hand_sum_even(&data), interface_sum_even(&data));
    }

    #[test]
    fn repeat_matches() {
        assert_eq!(hand_repeat(b"foo", 7), "foofoof");
        assert_eq!(interface_repeat(b"foo", 7).unwrap(), "foofoof");
        assert_eq!(hand_repeat(b"abcde", 123), interface_repeat(b"abcde", 123).unwrap());
    }

    #[test]
    fn strided_sum_matches() {
        let data = sample_data(1000);
        for stride in [1, 3, 7, 1000, 2000] {
            assert_eq!(
                hand_strided_sum(&data, stride),
                interface_strided_sum(&data, stride)
            );
        }
    }

    #[test]
    fn empty_source_is_an_error() {
        assert!(interface_repeat(b"", 3).is_err());
    }
}
