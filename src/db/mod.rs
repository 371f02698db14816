//! Databases for holding information relevant to simplification.
//!
//!   - [The clause database](crate::db::clause)
//!     + Clauses of three or more literals, each indexed by a [ClauseKey]. \
//!       Clauses are either original (added from some external source) or learned (added by some procedure).
//!
//!   - [The watch lists](crate::db::watches)
//!     + For each literal, the constraints to examine when the literal is made true. \
//!       Binary clauses exist only here.
//!
//!   - [The atom database](crate::db::atom)
//!     + Properties of atoms.
//!       * Valuation
//!       * Sources of values
//!       * Elimination
//!
//!   - [The trail](crate::db::trail)
//!     + The sequence of assignments, together with scope boundaries and the queue head of propagation.

pub mod atom;
pub mod clause;
mod keys;
pub use keys::*;
pub mod trail;
pub mod watches;
