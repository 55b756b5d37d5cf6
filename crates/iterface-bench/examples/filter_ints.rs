//! Walk the even values of a slice with a predicate-filtering cursor.
//!
//! The cursor defines only dereference and a single step; everything else
//! comes from the engine.

use iterface_adaptors::Filter;

fn main() {
    let data = [1, 2, 3, 4, 10, 11, 101, 200, 0];
    let even = |x: &i32| x % 2 == 0;

    let mut it = Filter::new(&data, even);
    let end = Filter::end(&data, even);

    // Print until the terminating zero, like a sentinel-driven loop.
    while it != end && *it.get() != 0 {
        print!("{} ", it.get());
        it.inc();
    }
    println!();

    let all: Vec<i32> = Filter::new(&data, even).span(end).copied().collect();
    println!("all even values: {all:?}");
    println!("stopped at slice index {}", it.get_ref().base());
}
