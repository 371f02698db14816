/*!
Boolean constraint propagation.

See [Context::bcp] and [Context::propagate] for the relevant context methods.

# Overview
Propagates a literal being made true.

This is done by examining the watches of the literal, i.e. the constraints containing the negation of the literal, and for each:
- Noting the constraint is satisfied, if possible.
- Otherwise, updating the watches of the constraint, if possible.
- Otherwise, assigning the literal asserted by the constraint, or noting the constraint conflicts with the current valuation.

# Complications

The watch list of the literal is taken from the watch database for the duration of the examination, and restored after.
This avoids simultaneous mutable borrows of the list and the watch database, as an update to the watches of a long clause adds a watch to some other list.
The other list is never the taken list, as the new watch is on a literal which is not false, while the taken list is for the literal which has been made false.

# Heuristics

Watches on binary and ternary clauses, and blockers on watches of long clauses, are examined without a trip to the clause database.
*/

use crate::{
    context::{callbacks::ExternalOutcome, Conflict, Context},
    db::{atom::AssignmentSource, watches::Watch},
    misc::log::targets::{self},
    structures::literal::CLiteral,
    types::err::{self, ErrorKind},
};

/// What follows from the examination of a watch.
enum Examination {
    /// Nothing.
    Keep,

    /// The watch is no longer needed.
    Drop,

    /// The literal follows.
    Assert(CLiteral, AssignmentSource),

    /// A conflict follows.
    Conflict(Conflict),
}

impl Context {
    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    ///
    /// A conflict is noted on the context, and ends the examination.
    /// An error is returned only if some corrupt watch is found.
    pub fn bcp(&mut self, literal: CLiteral) -> Result<(), err::BCPError> {
        let false_literal = -literal;
        let mut list = self.watches.take(literal);

        let mut kept = 0;
        let mut index = 0;
        let mut outcome = Ok(());

        while index < list.len() {
            let watch = list[index];
            index += 1;

            let examination = match watch {
                Watch::Binary { literal: other, .. } => match self.value_of_literal(other) {
                    Some(true) => Examination::Keep,
                    None => Examination::Assert(other, AssignmentSource::Binary(false_literal)),
                    Some(false) => Examination::Conflict(Conflict::Binary(false_literal, other)),
                },

                Watch::Ternary { key, others: [a, b] } => {
                    if !self.clause_db.contains(key) {
                        Examination::Drop
                    } else {
                        match (self.value_of_literal(a), self.value_of_literal(b)) {
                            (Some(true), _) | (_, Some(true)) | (None, None) => Examination::Keep,
                            (Some(false), None) => {
                                Examination::Assert(b, AssignmentSource::Ternary(key))
                            }
                            (None, Some(false)) => {
                                Examination::Assert(a, AssignmentSource::Ternary(key))
                            }
                            (Some(false), Some(false)) => {
                                Examination::Conflict(Conflict::Ternary(key))
                            }
                        }
                    }
                }

                Watch::Long { key, blocker } => {
                    if self.atom_db.value_of_literal(blocker) == Some(true) {
                        Examination::Keep
                    } else {
                        match self.clause_db.get_mut(key) {
                            Err(_) => Examination::Drop,

                            Ok(clause) => {
                                let literals = clause.literals_mut();
                                if literals[0] == false_literal {
                                    literals.swap(0, 1);
                                }

                                if literals[1] != false_literal {
                                    log::error!(target: targets::PROPAGATION, "Watch of {key} on {false_literal} is not at a watched position");
                                    outcome = Err(err::BCPError::CorruptWatch(key));
                                    list[kept] = watch;
                                    kept += 1;
                                    break;
                                }

                                let first = literals[0];
                                if self.atom_db.value_of_literal(first) == Some(true) {
                                    list[kept] = Watch::Long {
                                        key,
                                        blocker: first,
                                    };
                                    kept += 1;
                                    continue;
                                }

                                let mut replacement = None;
                                for position in 2..literals.len() {
                                    if self.atom_db.value_of_literal(literals[position])
                                        != Some(false)
                                    {
                                        literals.swap(1, position);
                                        replacement = Some(literals[1]);
                                        break;
                                    }
                                }

                                match replacement {
                                    Some(candidate) => {
                                        self.watches.watch(
                                            candidate,
                                            Watch::Long {
                                                key,
                                                blocker: first,
                                            },
                                        );
                                        Examination::Drop
                                    }

                                    None => match self.atom_db.value_of_literal(first) {
                                        None => {
                                            Examination::Assert(first, AssignmentSource::Long(key))
                                        }
                                        _ => Examination::Conflict(Conflict::Long(key)),
                                    },
                                }
                            }
                        }
                    }
                }

                Watch::External(constraint) => {
                    let verdict = match &mut self.callback_external {
                        Some(callback) => callback(literal, constraint, self.atom_db.valuation()),
                        None => ExternalOutcome::Keep,
                    };

                    match verdict {
                        ExternalOutcome::Keep => Examination::Keep,
                        ExternalOutcome::Propagate(asserted) => {
                            match self.value_of_literal(asserted) {
                                Some(true) => Examination::Keep,
                                None => Examination::Assert(
                                    asserted,
                                    AssignmentSource::External(constraint),
                                ),
                                Some(false) => {
                                    Examination::Conflict(Conflict::External(constraint))
                                }
                            }
                        }
                        ExternalOutcome::Conflict => {
                            Examination::Conflict(Conflict::External(constraint))
                        }
                    }
                }
            };

            match examination {
                Examination::Drop => {}

                Examination::Keep => {
                    list[kept] = watch;
                    kept += 1;
                }

                Examination::Assert(asserted, source) => {
                    list[kept] = watch;
                    kept += 1;
                    self.assign(asserted, source);
                }

                Examination::Conflict(conflict) => {
                    list[kept] = watch;
                    kept += 1;
                    self.set_conflict(conflict);
                    break;
                }
            }
        }

        // Any watches not examined are kept.
        while index < list.len() {
            list[kept] = list[index];
            kept += 1;
            index += 1;
        }
        list.truncate(kept);
        self.watches.restore(literal, list);

        outcome
    }

    /// Propagates literals on the trail until the trail is exhausted or a conflict is noted.
    ///
    /// In the case of conflict the conflict is noted on the context, and Ok is returned.
    pub fn propagate(&mut self) -> Result<(), ErrorKind> {
        while !self.inconsistent() {
            let Some(&literal) = self.trail.literals.get(self.trail.q_head) else {
                break;
            };
            self.trail.q_head += 1;
            self.counters.propagations += 1;

            log::trace!(target: targets::PROPAGATION, "BCP on {literal}");
            self.bcp(literal)?;
        }
        Ok(())
    }
}
