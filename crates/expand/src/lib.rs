//! The `${...}` substitution language: token grammar and transforms.
//!
//! This crate is string-level only. It scans text into literal runs and
//! substitution tokens, peels escaped tokens, and applies the named
//! transform functions. Resolving token keys against a button's
//! inheritance chain lives in `switchboard-resolve`, which drives this
//! scanner.

pub use scan::{Escaped, Segment, Token, scan};
pub use transform::Transform;

mod scan;
mod transform;
