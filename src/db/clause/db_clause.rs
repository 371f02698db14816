//! A struct holding a clause and associated metadata.
//!
//! A [DBClause] contains:
//! - A clause, with at least three literals when active.
//! - The [key](ClauseKey) used to access the clause.
//! - Flags for whether the clause is frozen and whether the clause was learned.
//!
//! # Watched literals
//!
//! Long clauses are watched on the literals at positions 0 and 1.
//! In order to preserve this invariant the order of literals in the clause is mutated as needed, through [literals_mut](DBClause::literals_mut).
//! Ternary clauses are watched on every literal, and so order is irrelevant.
//!
//! # Frozen clauses
//!
//! A frozen clause is protected from deletion by the cleaner while it has at least two literals, and is not watched.
//! As a frozen clause is not watched, a frozen clause may be reduced to a single literal or the empty clause by the cleaner, in which case the clause asserts its literal or signals a conflict.

use std::ops::Deref;

use crate::{
    db::keys::ClauseKey,
    structures::{clause::CClause, literal::CLiteral},
};

/// A clause together with some metadata.
#[derive(Clone, Debug)]
pub struct DBClause {
    /// A key for accessing the clause.
    key: ClauseKey,

    /// The clause.
    clause: CClause,

    /// Whether the clause is frozen.
    frozen: bool,

    /// Whether the clause was learned.
    learned: bool,
}

impl DBClause {
    pub(super) fn new(key: ClauseKey, clause: CClause, learned: bool, frozen: bool) -> Self {
        DBClause {
            key,
            clause,
            frozen,
            learned,
        }
    }

    /// The key of the clause.
    pub fn key(&self) -> ClauseKey {
        self.key
    }

    /// The literals of the clause.
    pub fn literals(&self) -> &[CLiteral] {
        &self.clause
    }

    /// Mutable access to the literals of the clause, e.g. for reordering.
    pub fn literals_mut(&mut self) -> &mut [CLiteral] {
        &mut self.clause
    }

    pub fn size(&self) -> usize {
        self.clause.len()
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn is_learned(&self) -> bool {
        self.learned
    }

    pub(super) fn set_frozen(&mut self, frozen: bool) {
        self.frozen = frozen;
    }

    /// Keeps the first `size` literals of the clause.
    pub fn shrink(&mut self, size: usize) {
        self.clause.truncate(size);
    }
}

impl Deref for DBClause {
    type Target = [CLiteral];

    fn deref(&self) -> &Self::Target {
        &self.clause
    }
}

impl std::fmt::Display for DBClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: [", self.key)?;
        for (index, literal) in self.clause.iter().enumerate() {
            match index {
                0 => write!(f, "{literal}")?,
                _ => write!(f, " {literal}")?,
            }
        }
        write!(f, "]")
    }
}
