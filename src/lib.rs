//! # u-seq
//!
//! Sequence utilities for the U-Engine ecosystem.
//!
//! Small, stateless helpers over an ordered, in-memory slice: aggregates,
//! positional selection, random sampling, deduplication, grouping and
//! reshaping. Every function borrows its input and returns a new value; the
//! caller's slice is never modified.
//!
//! ## Modules
//!
//! - [`stats`] — Sum, average, median, min and max over `f64` slices
//! - [`select`] — First/last access and take/skip pagination
//! - [`random`] — Uniform choice, shuffling and range sampling with an injectable RNG
//! - [`collections`] — Unique, distinct-by, union, group/count-by, chunk, flatten, compact
//! - [`error`] — The single error type, raised for invalid parameters
//!
//! ## Design Philosophy
//!
//! - **Empty is not an error**: empty input yields `0.0`, `None` or an empty `Vec`
//! - **Injected randomness**: every random operation has a `*_with` form taking `R: Rng`
//! - **Property-based testing**: structural invariants verified via proptest

pub mod collections;
pub mod error;
pub mod random;
pub mod select;
pub mod stats;

pub use collections::{
    chunk, compact, compact_by, count_by, distinct_by, flatten, group_by, is_unique, remove,
    reversed, union, unique, Falsy, Nested,
};
pub use error::{Result, SeqError};
pub use select::{first, first_and_last, last, skip, take, FirstAndLast};
