/*!
A database of clauses with at least three literals.

Unit clauses are assignments (see the [trail](crate::db::trail)) and binary clauses are stored only in [watch lists](crate::db::watches).
All other clauses are stored in an arena and accessed through a [ClauseKey].

Clauses are distinguished by whether they are original or learned, and the keys of each are kept in separate lists.
Fields of the database are private to ensure the use of methods which uphold the relation between the arena and the lists.
*/

pub mod db_clause;

use db_clause::DBClause;
use slotmap::SlotMap;

use crate::{
    db::keys::ClauseKey,
    misc::log::targets::{self},
    structures::clause::CClause,
    types::err::{self},
};

/// The smallest clause stored in the database.
pub const MIN_STORED_SIZE: usize = 3;

/// A database of clauses.
#[derive(Default)]
pub struct ClauseDB {
    /// The clauses.
    clauses: SlotMap<ClauseKey, DBClause>,

    /// Keys to original clauses.
    original: Vec<ClauseKey>,

    /// Keys to learned clauses.
    learned: Vec<ClauseKey>,
}

impl ClauseDB {
    /// Stores a clause, returning the key of the clause.
    ///
    /// The clause is not watched.
    pub fn store(
        &mut self,
        clause: CClause,
        learned: bool,
        frozen: bool,
    ) -> Result<ClauseKey, err::ClauseDBError> {
        if clause.len() < MIN_STORED_SIZE {
            log::error!(target: targets::CLAUSE_DB, "Attempt to store a clause of size {}", clause.len());
            return Err(err::ClauseDBError::ShortClause);
        }

        let key = self
            .clauses
            .insert_with_key(|key| DBClause::new(key, clause, learned, frozen));

        match learned {
            true => self.learned.push(key),
            false => self.original.push(key),
        }

        log::trace!(target: targets::CLAUSE_DB, "Stored {key}");
        Ok(key)
    }

    /// The clause at `key`, if the clause exists.
    pub fn get(&self, key: ClauseKey) -> Result<&DBClause, err::ClauseDBError> {
        self.clauses.get(key).ok_or(err::ClauseDBError::Missing)
    }

    /// The clause at `key`, mutably, if the clause exists.
    pub fn get_mut(&mut self, key: ClauseKey) -> Result<&mut DBClause, err::ClauseDBError> {
        self.clauses.get_mut(key).ok_or(err::ClauseDBError::Missing)
    }

    /// Whether a clause exists at `key`.
    pub fn contains(&self, key: ClauseKey) -> bool {
        self.clauses.contains_key(key)
    }

    /// Removes the clause at `key` from the arena, returning the clause if it existed.
    ///
    /// The key remains in the original or learned list until the list is next rebuilt.
    /// Watches of the clause are untouched.
    pub fn remove(&mut self, key: ClauseKey) -> Option<DBClause> {
        log::trace!(target: targets::CLAUSE_DB, "Removed {key}");
        self.clauses.remove(key)
    }

    /// Removes the clause at `key` from the arena and from the original or learned list.
    pub fn delete(&mut self, key: ClauseKey) -> Option<DBClause> {
        let clause = self.remove(key)?;
        match clause.is_learned() {
            true => self.learned.retain(|k| *k != key),
            false => self.original.retain(|k| *k != key),
        }
        Some(clause)
    }

    /// Sets whether the clause at `key` is frozen.
    pub fn set_frozen(&mut self, key: ClauseKey, frozen: bool) -> Result<(), err::ClauseDBError> {
        self.get_mut(key)?.set_frozen(frozen);
        Ok(())
    }

    /// Takes the list of original or learned keys, to be rebuilt and restored with [restore_keys](ClauseDB::restore_keys).
    pub fn take_keys(&mut self, learned: bool) -> Vec<ClauseKey> {
        match learned {
            true => std::mem::take(&mut self.learned),
            false => std::mem::take(&mut self.original),
        }
    }

    /// Restores a list of keys taken by [take_keys](ClauseDB::take_keys).
    pub fn restore_keys(&mut self, learned: bool, keys: Vec<ClauseKey>) {
        match learned {
            true => self.learned = keys,
            false => self.original = keys,
        }
    }

    /// Keys to original clauses.
    pub fn original_keys(&self) -> &[ClauseKey] {
        &self.original
    }

    /// Keys to learned clauses.
    pub fn learned_keys(&self) -> &[ClauseKey] {
        &self.learned
    }

    /// An iterator over all clauses, original and learned, in no particular order.
    pub fn all_clauses(&self) -> impl Iterator<Item = &DBClause> {
        self.clauses.values()
    }

    /// A count of all clauses.
    pub fn count(&self) -> usize {
        self.clauses.len()
    }
}
