use crate::{
    context::{Conflict, Context},
    db::{atom::AssignmentSource, ClauseKey},
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

use super::ClauseOk;

impl Context {
    /// Returns a fresh atom.
    ///
    /// For a practical alternative, see [fresh_or_max_atom](Context::fresh_or_max_atom).
    pub fn fresh_atom(&mut self) -> Result<Atom, err::AtomDBError> {
        let atom = self.atom_db.fresh_atom()?;
        self.watches.fresh_atom();
        Ok(atom)
    }

    /// Returns a fresh atom, or the maximum atom.
    ///
    /// In short, a safe alternative to unwrapping the result of [fresh_atom](Context::fresh_atom), by defaulting to the maximum limit of an atom.
    pub fn fresh_or_max_atom(&mut self) -> Atom {
        match self.fresh_atom() {
            Ok(atom) => atom,
            Err(err::AtomDBError::AtomsExhausted) => ATOM_MAX,
        }
    }

    /// Ensure `atom` is present in the context, by introducing as many atoms as required to ensure atoms form a contiguous block: [0..`atom`].
    pub fn ensure_atom(&mut self, atom: Atom) -> Result<(), err::AtomDBError> {
        while self.atom_db.count() <= atom as usize {
            self.fresh_atom()?;
        }
        Ok(())
    }

    /// Returns a fresh literal with value true, or the maximum atom with value true.
    pub fn fresh_or_max_literal(&mut self) -> CLiteral {
        CLiteral::new(self.fresh_or_max_atom(), true)
    }

    /// Returns a vector containing `count` literals with either a fresh atom or the maximum atom and valued true.
    pub fn fresh_or_max_literals(&mut self, count: usize) -> Vec<CLiteral> {
        (0..count).map(|_| self.fresh_or_max_literal()).collect()
    }
}

impl Context {
    /// Adds an original clause to the context.
    ///
    /// For details on how the clause is added, see [builder](crate::builder).
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, ErrorKind> {
        self.add_clause_fundamental(clause.canonical(), false)
    }

    /// Adds a learned clause to the context.
    ///
    /// Learned clauses are kept apart from original clauses, though are otherwise treated in the same way.
    /// A learned binary clause is marked as learned in the watch lists.
    pub fn add_learned_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, ErrorKind> {
        self.add_clause_fundamental(clause.canonical(), true)
    }

    fn add_clause_fundamental(
        &mut self,
        mut clause: CClause,
        learned: bool,
    ) -> Result<ClauseOk, ErrorKind> {
        if self.trail.level() > 0 {
            log::error!(target: targets::BUILD, "Clause added within a scope");
            return Err(err::StateError::NotAtBase.into());
        }

        clause.sort_unstable();
        clause.dedup();

        // Literals on the same atom are adjacent.
        if clause.windows(2).any(|pair| pair[0] == -pair[1]) {
            return Ok(ClauseOk::Tautology);
        }

        for literal in &clause {
            self.ensure_atom(literal.atom())?;
        }

        if clause
            .iter()
            .any(|literal| self.value_of_literal(*literal) == Some(true))
        {
            return Ok(ClauseOk::Satisfied);
        }
        clause.retain(|literal| self.value_of_literal(*literal).is_none());

        log::trace!(target: targets::BUILD, "Adding {}", clause.as_dimacs(true));

        match clause[..] {
            [] => {
                self.set_conflict(Conflict::EmptyClause);
                Ok(ClauseOk::Added)
            }

            [literal] => {
                self.assign(literal, AssignmentSource::Free);
                Ok(ClauseOk::Added)
            }

            [a, b] => {
                self.watches.add_binary(a, b, learned);
                Ok(ClauseOk::Added)
            }

            [a, b, c] => {
                let key = self.clause_db.store(clause, learned, false)?;
                self.watches.attach_ternary(key, [a, b, c]);
                Ok(ClauseOk::Stored(key))
            }

            [..] => {
                let key = self.clause_db.store(clause, learned, false)?;
                let stored = self.clause_db.get(key)?;
                self.watches.attach_long(key, stored.literals());
                Ok(ClauseOk::Stored(key))
            }
        }
    }

    /// Removes every watch on the stored clause.
    fn detach_clause(&mut self, key: ClauseKey) -> Result<(), err::ClauseDBError> {
        let clause = self.clause_db.get(key)?;
        for literal in clause.literals() {
            self.watches.unwatch(*literal, key);
        }
        Ok(())
    }

    /// Freezes a stored clause, detaching the clause from the watch lists.
    ///
    /// A frozen clause is kept in the clause database, and revised by the [cleaner](crate::procedures::cleaner), though is not used for propagation.
    pub fn freeze_clause(&mut self, key: ClauseKey) -> Result<(), ErrorKind> {
        if self.clause_db.get(key)?.is_frozen() {
            return Ok(());
        }
        self.detach_clause(key)?;
        self.clause_db.set_frozen(key, true)?;
        log::trace!(target: targets::BUILD, "Froze {key}");
        Ok(())
    }

    /// Melts a frozen clause, attaching the clause to the watch lists.
    ///
    /// The literals of the clause are reordered so the watched literals are not false, if possible.
    /// And, if the clause asserts some literal or conflicts with the current valuation, this is noted.
    pub fn melt_clause(&mut self, key: ClauseKey) -> Result<(), ErrorKind> {
        if self.trail.level() > 0 {
            return Err(err::StateError::NotAtBase.into());
        }

        let clause = self.clause_db.get_mut(key)?;
        if !clause.is_frozen() {
            return Ok(());
        }

        let atom_db = &self.atom_db;
        clause
            .literals_mut()
            .sort_by_key(|literal| match atom_db.value_of_literal(*literal) {
                Some(true) => 0,
                None => 1,
                Some(false) => 2,
            });

        let literals = clause.literals();
        let first = literals[0];
        let open = literals
            .iter()
            .filter(|literal| atom_db.value_of_literal(**literal) != Some(false))
            .count();

        let source = match literals {
            [a, b, c] => {
                self.watches.attach_ternary(key, [*a, *b, *c]);
                AssignmentSource::Ternary(key)
            }
            _ => {
                self.watches.attach_long(key, literals);
                AssignmentSource::Long(key)
            }
        };
        self.clause_db.set_frozen(key, false)?;
        log::trace!(target: targets::BUILD, "Melted {key}");

        match (open, source) {
            (0, AssignmentSource::Ternary(_)) => self.set_conflict(Conflict::Ternary(key)),
            (0, _) => self.set_conflict(Conflict::Long(key)),
            (1, source) => self.assign(first, source),
            _ => {}
        }
        Ok(())
    }

    /// Deletes a stored clause from the context.
    pub fn delete_clause(&mut self, key: ClauseKey) -> Result<(), ErrorKind> {
        if !self.clause_db.get(key)?.is_frozen() {
            self.detach_clause(key)?;
        }
        self.clause_db.delete(key);
        log::trace!(target: targets::BUILD, "Deleted {key}");
        Ok(())
    }
}
