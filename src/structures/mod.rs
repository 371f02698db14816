//! Abstract elements of a formula and their canonical representations.
//!
//! - [Atoms](atom), aka. variables.
//! - [Literals](literal), an atom paired with a polarity.
//! - [Clauses](clause), disjunctions of literals.
//!
//! A valuation is a partial map from atoms to booleans, represented as `Option<bool>` per atom in the [atom database](crate::db::atom).

pub mod atom;
pub mod clause;
pub mod literal;
