//! Various procedures for mutating a context.
//!
//! For the most part these are methods accessed via a context, and primarily placed here for documentation.

pub mod assign;
pub mod bcp;
pub mod cleaner;
pub mod probing;
pub mod scope;
