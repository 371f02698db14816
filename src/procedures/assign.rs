//! Assignment of values to atoms.
//!
//! All assignments pass through [assign](Context::assign), which values the atom of a literal and records the literal on the trail.
//! The literal is then queued for [propagation](crate::procedures::bcp), as the queue is the part of the trail after the queue head.

use crate::{
    context::{Conflict, Context},
    db::atom::AssignmentSource,
    structures::literal::CLiteral,
};

impl Context {
    /// Assigns `literal` to be true.
    ///
    /// - If the atom of the literal has no value, the atom is valued and the literal is recorded on the trail.
    /// - If the literal is already true, nothing happens.
    /// - If the literal is false, a [Conflict::Assignment] is noted.
    pub fn assign(&mut self, literal: CLiteral, source: AssignmentSource) {
        match self.atom_db.value_of_literal(literal) {
            None => {
                self.atom_db.set_value(literal, source);
                self.trail.store_assignment(literal);
            }

            Some(true) => {}

            Some(false) => self.set_conflict(Conflict::Assignment(literal)),
        }
    }
}
