/*!
The context --- to which clauses are added and within which simplification takes place.

A context bundles the [databases](crate::db) together with the state of the [cleaner](crate::procedures::cleaner) and [prober](crate::procedures::probing), and all procedures are methods on a context.
There is a single thread of control through a context, and no procedure is reentrant.

# Example
```rust
# use otter_simplify::context::Context;
# use otter_simplify::config::Config;
# use otter_simplify::reports::Report;
# use otter_simplify::structures::literal::{CLiteral, Literal};
let mut the_context = Context::from_config(Config::default());

let p = the_context.fresh_or_max_literal();
let q = the_context.fresh_or_max_literal();

assert!(the_context.add_clause(vec![p, q]).is_ok());
assert!(the_context.add_clause(-p).is_ok());
assert!(the_context.propagate().is_ok());

assert_eq!(the_context.value_of(p.atom()), Some(false));
assert_eq!(the_context.value_of(q.atom()), Some(true));
assert_eq!(the_context.report(), Report::Satisfiable);
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;

use callbacks::{CallbackExternal, CallbackTerminate};

use crate::{
    config::Config,
    db::{
        atom::{AssignmentSource, AtomDB},
        clause::ClauseDB,
        trail::{LevelIndex, Trail},
        watches::{ExternalConstraint, Watch, Watches},
        ClauseKey,
    },
    misc::log::targets::{self},
    procedures::{cleaner::Cleaner, probing::Prober},
    reports::{Report, Statistics},
    structures::{
        atom::{Atom, TOP_ATOM},
        literal::{CLiteral, Literal},
    },
};

/// The source of a conflict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conflict {
    /// A binary clause with both literals false.
    Binary(CLiteral, CLiteral),

    /// A ternary clause with each literal false.
    Ternary(ClauseKey),

    /// A long clause with each literal false.
    Long(ClauseKey),

    /// An external constraint.
    External(ExternalConstraint),

    /// An assignment to a literal which is already false.
    Assignment(CLiteral),

    /// A clause reduced to the empty clause.
    EmptyClause,
}

/// A context.
pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The watch lists of each literal.
    /// See [db::watches](crate::db::watches) for details.
    pub watches: Watches,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The trail of assignments.
    pub trail: Trail,

    /// The conflict noted, if the context is inconsistent.
    pub conflict: Option<Conflict>,

    /// The scope level at which the conflict was noted.
    pub(crate) conflict_level: LevelIndex,

    /// The state of the cleaner.
    pub cleaner: Cleaner,

    /// The state of the prober.
    pub prober: Prober,

    /// Terminates procedures, if true.
    pub(super) callback_terminate: Option<Box<CallbackTerminate>>,

    /// Consulted on examination of an external watch.
    pub(super) callback_external: Option<Box<CallbackExternal>>,
}

impl Context {
    /// Creates a context from some given configuration.
    ///
    /// The context contains the atom [TOP_ATOM], valued true.
    pub fn from_config(config: Config) -> Self {
        let mut the_context = Self {
            config,
            counters: Counters::default(),

            atom_db: AtomDB::default(),
            watches: Watches::default(),
            clause_db: ClauseDB::default(),
            trail: Trail::default(),

            conflict: None,
            conflict_level: 0,

            cleaner: Cleaner::default(),
            prober: Prober::default(),

            callback_terminate: None,
            callback_external: None,
        };

        let top = the_context.fresh_or_max_atom();
        debug_assert_eq!(top, TOP_ATOM);
        the_context.assign(CLiteral::new(top, true), AssignmentSource::Free);
        the_context
    }

    /// The value of an atom, if the atom has a value.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.atom_db.value_of(atom)
    }

    /// The value of a literal, if the atom of the literal has a value.
    pub fn value_of_literal(&self, literal: CLiteral) -> Option<bool> {
        self.atom_db.value_of_literal(literal)
    }

    /// A count of atoms in the context, including [TOP_ATOM].
    pub fn atom_count(&self) -> usize {
        self.atom_db.count()
    }

    /// Whether the atom has been eliminated.
    pub fn was_eliminated(&self, atom: Atom) -> bool {
        self.atom_db.was_eliminated(atom)
    }

    /// Notes the atom has been eliminated by some external procedure.
    /// Eliminated atoms are not probed.
    pub fn eliminate_atom(&mut self, atom: Atom) {
        self.atom_db.eliminate(atom);
    }

    /// True if a conflict has been noted.
    pub fn inconsistent(&self) -> bool {
        self.conflict.is_some()
    }

    /// Notes a conflict, if no conflict has already been noted.
    pub fn set_conflict(&mut self, conflict: Conflict) {
        if self.conflict.is_none() {
            log::trace!(target: targets::PROPAGATION, "Conflict: {conflict:?}");
            self.counters.conflicts += 1;
            self.conflict = Some(conflict);
            self.conflict_level = self.trail.level();
        }
    }

    /// A report on the context.
    ///
    /// - Unsatisfiable, if a conflict has been noted outside of any scope.
    /// - Satisfiable, if every atom is valued, every clause contains a true literal, and no external constraint is watched.
    /// - Unknown, otherwise.
    pub fn report(&self) -> Report {
        if self.inconsistent() {
            return match self.trail.level() {
                0 => Report::Unsatisfiable,
                _ => Report::Unknown,
            };
        }

        if self.atom_db.valuation().iter().any(|value| value.is_none()) {
            return Report::Unknown;
        }

        let satisfied = |literals: &[CLiteral]| {
            literals
                .iter()
                .any(|literal| self.value_of_literal(*literal) == Some(true))
        };

        let clauses_satisfied = self
            .clause_db
            .all_clauses()
            .all(|clause| satisfied(clause.literals()));
        let binaries_satisfied = self
            .watches
            .binary_clauses()
            .all(|(a, b, _)| satisfied(&[a, b][..]));
        let external = self
            .watches
            .lists()
            .any(|(_, list)| list.iter().any(|watch| matches!(watch, Watch::External(_))));

        match clauses_satisfied && binaries_satisfied && !external {
            true => Report::Satisfiable,
            false => Report::Unknown,
        }
    }

    /// Statistics on the context and procedures.
    pub fn collect_statistics(&self, statistics: &mut Statistics) {
        statistics.update("propagations", self.counters.propagations as u64);
        statistics.update("conflicts", self.counters.conflicts as u64);
        statistics.update("scopes", self.counters.scopes as u64);
        statistics.update("clauses", self.clause_db.count() as u64);
        statistics.update("binary clauses", self.watches.binary_clauses().count() as u64);
        self.cleaner.collect_statistics(statistics);
        self.prober.collect_statistics(statistics);
    }
}
