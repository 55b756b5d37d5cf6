//! Arrow access on a cursor whose dereference computes a value.

use iterface_core::{
    computed_reference, BaseReference, Cursor, Dereference, Interface, ProxyArrowResult,
    RandomAccess,
};
use std::ops::{AddAssign, Sub};

#[derive(Clone, Debug)]
struct Reading {
    celsius: f64,
}

impl Reading {
    fn fahrenheit(&self) -> f64 {
        self.celsius * 9.0 / 5.0 + 32.0
    }
}

computed_reference!(Reading);

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
struct Hour(isize);

impl Dereference for Hour {
    type Output = Reading;

    fn dereference(&self) -> Reading {
        Reading {
            celsius: 12.0 + (self.0 as f64 * 0.5),
        }
    }
}

impl AddAssign<isize> for Hour {
    fn add_assign(&mut self, n: isize) {
        self.0 += n;
    }
}

impl Sub for Hour {
    type Output = isize;

    fn sub(self, rhs: Self) -> isize {
        self.0 - rhs.0
    }
}

#[derive(Clone, Copy, Debug)]
struct Forecast(Hour);

impl BaseReference for Forecast {
    type Base = Hour;

    fn base_reference(&self) -> &Hour {
        &self.0
    }

    fn base_reference_mut(&mut self) -> &mut Hour {
        &mut self.0
    }
}

impl Cursor for Forecast {
    type Concept = RandomAccess;
    type Value = Reading;
    type Reference = Reading;
    type Pointer = ProxyArrowResult<Reading>;
    type Difference = isize;
}

fn main() {
    let mut it = Interface::new(Forecast(Hour(0)));
    for _ in 0..4 {
        // `arrow()` holds the computed reading for the duration of the call.
        assert_eq!(it.arrow().fahrenheit(), it.get().fahrenheit());
        println!("hour {:>2}: {:.1} F", it.base().0, it.arrow().fahrenheit());
        it += 6;
    }
}
