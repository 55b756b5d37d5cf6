//! Extract a prefix of an infinitely repeated byte string.

use iterface_adaptors::{AdaptorError, RepeatedChars};
use iterface_core::ops::distance;

fn main() -> Result<(), AdaptorError> {
    let target = b"foo";
    let len = 7;

    let first = RepeatedChars::new(target, 0)?;
    let last = RepeatedChars::new(target, len)?;

    let extracted: String = first.span(last).collect();
    assert_eq!(extracted.len(), len as usize);
    println!("{extracted}");

    println!("distance(first, last) = {}", distance(&first, &last));
    println!("first[10] = {:?}", first.at(10));
    println!("category = {}", iterface_core::Interface::<RepeatedChars<'_>>::CATEGORY);
    Ok(())
}
