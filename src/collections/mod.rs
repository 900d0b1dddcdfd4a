//! Structural operations over sequences.
//!
//! - [`dedup`]: value and key based deduplication, removal, union
//! - [`grouping`]: group and count by a key function
//! - [`reshape`]: reverse, flatten, chunk and compact

pub mod dedup;
pub mod grouping;
pub mod reshape;

pub use dedup::{distinct_by, is_unique, remove, union, unique};
pub use grouping::{count_by, group_by};
pub use reshape::{chunk, compact, compact_by, flatten, reversed, Falsy, Nested};
