/*!
Removal of satisfied clauses and falsified literals.

See [Context::clean] for the relevant context method.

# Overview

After some atoms have been valued outside of any scope, some clauses are satisfied and some literals are false for good.
The cleaner:
1. Clears the watch lists of each valued atom, with the exception of external watches, and trims the binary watches of each other atom to those with an unvalued literal.
2. Deletes each satisfied clause, and removes each false literal from every other clause.
3. Routes each revised clause by its size: the empty clause is a conflict, a unit clause is an assignment, a binary clause is moved to the watch lists, and any other clause is attached to fresh watches.

As each watch on a ternary or long clause is dropped before the clauses are revised, after a clean the watched literals of each clause are unvalued.

# Throttling

The cleaner does nothing if no atom has been valued since the last clean.
In addition, each clean adds the size of each examined clause to a counter, and an unforced clean does nothing while the counter is positive.
The counter is [decayed](Cleaner::decay) by the caller, e.g. once per conflict.

```rust
# use otter_simplify::context::Context;
# use otter_simplify::config::Config;
# use otter_simplify::structures::literal::{CLiteral, Literal};
let mut the_context = Context::from_config(Config::default());
let p = the_context.fresh_or_max_literal();
let q = the_context.fresh_or_max_literal();
let r = the_context.fresh_or_max_literal();
let s = the_context.fresh_or_max_literal();

assert!(the_context.add_clause(vec![p, q, r, s]).is_ok());
assert!(the_context.add_clause(-p).is_ok());

assert_eq!(the_context.clean(true), Ok(true));
assert_eq!(the_context.clause_db.count(), 1);
assert!(the_context.clause_db.all_clauses().all(|clause| clause.size() == 3));

// Nothing has been valued since the last clean.
assert_eq!(the_context.clean(true), Ok(false));
```
*/

use std::time::{Duration, Instant};

use crate::{
    context::{Conflict, Context},
    db::{atom::AssignmentSource, watches::Watch},
    misc::log::targets::{self},
    reports::Statistics,
    types::err::{self, ErrorKind},
};

/// Counts related to the cleaner.
#[derive(Clone, Debug, Default)]
pub struct CleanerStats {
    /// Clauses deleted as satisfied.
    pub elim_clauses: usize,

    /// Literals removed as false.
    pub elim_literals: usize,

    /// Cleans which did some work.
    pub runs: usize,

    /// Total time spent cleaning.
    pub time: Duration,
}

/// The state of the cleaner.
#[derive(Default)]
pub struct Cleaner {
    /// The length of the trail at the most recent clean.
    last_num_units: usize,

    /// The size of each clause examined by recent cleans, less decay.
    cleanup_counter: usize,

    pub stats: CleanerStats,
}

impl Cleaner {
    /// Decrements the cleanup counter.
    pub fn decay(&mut self) {
        self.cleanup_counter = self.cleanup_counter.saturating_sub(1);
    }

    /// The cleanup counter, which must be zero for an unforced clean to proceed.
    pub fn cost(&self) -> usize {
        self.cleanup_counter
    }

    pub fn collect_statistics(&self, statistics: &mut Statistics) {
        statistics.update("elim clauses", self.stats.elim_clauses as u64);
        statistics.update("elim literals", self.stats.elim_literals as u64);
        statistics.update("cleaner cost", self.cleanup_counter as u64);
        statistics.update("cleaner runs", self.stats.runs as u64);
        statistics.update("cleaner time (ms)", self.stats.time.as_millis() as u64);
    }
}

impl Context {
    /// Cleans the watch lists and the clause database, returning true if the cleaner did some work.
    ///
    /// For documentation see [procedures::cleaner](crate::procedures::cleaner).
    ///
    /// # Errors
    /// - [StateError::NotAtBase](err::StateError::NotAtBase) if some scope is open.
    /// - A [CleanerError](err::CleanerError) if the watches or clauses show a missed propagation.
    pub fn clean(&mut self, force: bool) -> Result<bool, ErrorKind> {
        if self.trail.level() > 0 {
            log::error!(target: targets::CLEANER, "Clean called within a scope");
            return Err(err::StateError::NotAtBase.into());
        }

        let trail_length = self.trail.len();
        self.propagate()?;

        if self.inconsistent() {
            return Ok(false);
        }
        if self.cleaner.last_num_units == trail_length {
            return Ok(false);
        }
        if !force && self.cleaner.cleanup_counter > 0 {
            return Ok(false);
        }

        let start = Instant::now();
        let elim_clauses = self.cleaner.stats.elim_clauses;
        let elim_literals = self.cleaner.stats.elim_literals;

        self.cleaner.last_num_units = trail_length;
        self.cleaner.cleanup_counter = 0;

        self.clean_watches()?;
        self.clean_clauses(false)?;
        self.clean_clauses(true)?;
        self.propagate()?;

        let elapsed = start.elapsed();
        self.cleaner.stats.runs += 1;
        self.cleaner.stats.time += elapsed;

        log::info!(target: targets::CLEANER,
            "elim-literals {} elim-clauses {} cost {} time {:.2}",
            self.cleaner.stats.elim_literals - elim_literals,
            self.cleaner.stats.elim_clauses - elim_clauses,
            self.cleaner.cleanup_counter,
            elapsed.as_secs_f64(),
        );

        Ok(true)
    }

    /// Clears the watch lists of valued literals and trims the rest.
    fn clean_watches(&mut self) -> Result<(), err::CleanerError> {
        let atom_db = &self.atom_db;

        for (owner, list) in self.watches.lists_mut() {
            if atom_db.value_of_literal(owner).is_some() {
                list.retain(|watch| matches!(watch, Watch::External(_)));
                continue;
            }

            let mut falsified = false;
            list.retain(|watch| match watch {
                Watch::Binary { literal, .. } => match atom_db.value_of_literal(*literal) {
                    None => true,
                    Some(true) => false,
                    Some(false) => {
                        falsified = true;
                        true
                    }
                },
                Watch::Ternary { .. } | Watch::Long { .. } => false,
                Watch::External(_) => true,
            });

            if falsified {
                log::error!(target: targets::CLEANER, "Binary watch on {owner} with a false literal");
                return Err(err::CleanerError::FalsifiedBinary);
            }
        }

        Ok(())
    }

    /// Revises the original or learned clauses, with respect to the current valuation.
    fn clean_clauses(&mut self, learned: bool) -> Result<(), err::CleanerError> {
        let keys = self.clause_db.take_keys(learned);
        let mut retained = Vec::with_capacity(keys.len());
        let mut outcome = Ok(());

        for (index, &key) in keys.iter().enumerate() {
            let Ok(clause) = self.clause_db.get_mut(key) else {
                continue;
            };

            let size = clause.size();
            self.cleaner.cleanup_counter += size;

            let mut satisfied = false;
            let mut falsified = 0;
            for literal in clause.literals() {
                match self.atom_db.value_of_literal(*literal) {
                    Some(true) => {
                        satisfied = true;
                        break;
                    }
                    Some(false) => falsified += 1,
                    None => {}
                }
            }
            self.cleaner.stats.elim_literals += falsified;

            if satisfied {
                self.cleaner.stats.elim_clauses += 1;
                self.clause_db.remove(key);
                continue;
            }

            let revised_size = size - falsified;
            if revised_size < 2 && !clause.is_frozen() {
                log::error!(target: targets::CLEANER, "{key} was not propagated");
                retained.extend_from_slice(&keys[index..]);
                outcome = Err(err::CleanerError::UnpropagatedClause(key));
                break;
            }

            // Compaction follows the size check, so a clause found unpropagated is left intact.
            let literals = clause.literals_mut();
            let mut kept = 0;
            for position in 0..size {
                let literal = literals[position];
                if self.atom_db.value_of_literal(literal).is_none() {
                    literals[kept] = literal;
                    kept += 1;
                }
            }

            match revised_size {
                0 => {
                    self.clause_db.remove(key);
                    self.set_conflict(Conflict::EmptyClause);
                }

                1 => {
                    let unit = clause.literals()[0];
                    self.clause_db.remove(key);
                    self.assign(unit, AssignmentSource::Free);
                }

                2 => {
                    let (a, b) = (clause.literals()[0], clause.literals()[1]);
                    let is_learned = clause.is_learned();
                    self.clause_db.remove(key);
                    self.watches.add_binary(a, b, is_learned);
                }

                _ => {
                    clause.shrink(revised_size);
                    if !clause.is_frozen() {
                        match revised_size {
                            3 => {
                                let literals = clause.literals();
                                let triple = [literals[0], literals[1], literals[2]];
                                self.watches.attach_ternary(key, triple);
                            }
                            _ => self.watches.attach_long(key, clause.literals()),
                        }
                    }
                    retained.push(key);
                }
            }
        }

        self.clause_db.restore_keys(learned, retained);
        outcome
    }

    /// Checks the watched literals of each clause are unvalued, and each valued literal watches only external constraints.
    ///
    /// Holds after a clean which did some work.
    pub fn check_clean_invariant(&self) -> Result<(), err::CleanerError> {
        for clause in self.clause_db.all_clauses() {
            if clause.is_frozen() {
                continue;
            }
            let watched = match clause.size() {
                3 => 3,
                _ => 2,
            };
            if clause.literals()[..watched]
                .iter()
                .any(|literal| self.value_of_literal(*literal).is_some())
            {
                return Err(err::CleanerError::AssignedWatch(clause.key()));
            }
        }

        for (owner, list) in self.watches.lists() {
            if self.value_of_literal(owner).is_some() {
                if let Some(watch) = list.iter().find(|w| !matches!(w, Watch::External(_))) {
                    log::error!(target: targets::CLEANER, "{watch:?} remains on {owner}");
                    return Err(err::CleanerError::AssignedList(owner));
                }
            }
        }

        Ok(())
    }
}
