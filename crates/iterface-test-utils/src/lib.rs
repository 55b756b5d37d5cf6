//! Test utilities for iterface development.
//!
//! - [`laws`]: reusable assertions for the algebraic laws a synthesized
//!   iterator must satisfy, with `run_*` aggregators per category.
//! - [`mocks`]: instrumented positions that journal which primitive ran,
//!   used to pin down strategy priority.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod laws;
pub mod mocks;

pub use mocks::{Journal, Mock, Primitive};
