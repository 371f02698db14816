/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

Things include:
- A current (often partial) valuation.
- The source of the value of each valued atom.
- A record of which atoms have been eliminated from the formula by some external procedure.
*/

use crate::{
    db::{watches::ExternalConstraint, ClauseKey},
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        literal::{CLiteral, Literal},
    },
    types::err::AtomDBError,
};

/// The source of an assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignmentSource {
    /// An assignment made without justification.
    /// E.g. a unit clause, a speculative assignment within a scope, or a literal forced by probing.
    Free,

    /// Propagation through a binary clause, with the other literal of the clause.
    Binary(CLiteral),

    /// Propagation through a ternary clause.
    Ternary(ClauseKey),

    /// Propagation through a long clause.
    Long(ClauseKey),

    /// Propagation by an external constraint.
    External(ExternalConstraint),
}

/// The atom database.
#[derive(Default)]
pub struct AtomDB {
    /// A current (often partial) valuation.
    valuation: Vec<Option<bool>>,

    /// The source of the value of each valued atom.
    sources: Vec<AssignmentSource>,

    /// Whether an atom has been eliminated from the formula.
    eliminated: Vec<bool>,
}

impl AtomDB {
    /// A count of atoms in the [AtomDB].
    pub fn count(&self) -> usize {
        self.valuation.len()
    }

    /// The current valuation, indexed by atom.
    pub fn valuation(&self) -> &[Option<bool>] {
        &self.valuation
    }

    /// A fresh atom --- on Ok the atom is part of the language of the context.
    pub fn fresh_atom(&mut self) -> Result<Atom, AtomDBError> {
        let atom = match self.valuation.len().try_into() {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => return Err(AtomDBError::AtomsExhausted),
        };

        self.valuation.push(None);
        self.sources.push(AssignmentSource::Free);
        self.eliminated.push(false);

        Ok(atom)
    }

    /// The value of an atom, if the atom has a value.
    ///
    /// # Panics
    /// If the atom is not part of the database.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation[atom as usize]
    }

    /// The value of a literal, if the atom of the literal has a value.
    pub fn value_of_literal(&self, literal: CLiteral) -> Option<bool> {
        self.valuation[literal.atom() as usize].map(|value| value == literal.polarity())
    }

    /// The source of the value of an atom.
    /// Meaningful only if the atom has a value.
    pub fn source_of(&self, atom: Atom) -> AssignmentSource {
        self.sources[atom as usize]
    }

    /// Values the atom of `literal` to match the polarity of `literal`.
    pub fn set_value(&mut self, literal: CLiteral, source: AssignmentSource) {
        log::trace!(target: targets::VALUATION, "Set {literal} from {source:?}");
        self.valuation[literal.atom() as usize] = Some(literal.polarity());
        self.sources[literal.atom() as usize] = source;
    }

    /// Clears the value of an atom.
    pub fn drop_value(&mut self, atom: Atom) {
        log::trace!(target: targets::VALUATION, "Clear {atom}");
        self.valuation[atom as usize] = None;
        self.sources[atom as usize] = AssignmentSource::Free;
    }

    /// Whether the atom has been eliminated.
    pub fn was_eliminated(&self, atom: Atom) -> bool {
        self.eliminated[atom as usize]
    }

    /// Notes the atom has been eliminated.
    pub fn eliminate(&mut self, atom: Atom) {
        self.eliminated[atom as usize] = true;
    }
}
