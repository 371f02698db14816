/*!
Callbacks associated with a context.

- A terminate callback is polled at coarse checkpoints of long running procedures, and a return of `true` requests the procedure stops.
  Procedures stop at a point from which they may be resumed, with no open scopes.
- An external callback is consulted whenever an external watch is examined during [BCP](crate::procedures::bcp).
*/

use crate::{
    db::watches::{ExternalConstraint, Watch},
    structures::literal::CLiteral,
};

use super::Context;

/// The verdict of an external constraint on being notified of an assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExternalOutcome {
    /// Nothing follows.
    Keep,

    /// The given literal follows.
    Propagate(CLiteral),

    /// The constraint conflicts with the current valuation.
    Conflict,
}

/// Called with the literal made true, the constraint watching the negation of the literal, and the current valuation.
pub type CallbackExternal = dyn FnMut(CLiteral, ExternalConstraint, &[Option<bool>]) -> ExternalOutcome;

pub type CallbackTerminate = dyn FnMut() -> bool;

impl Context {
    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.callback_terminate = Some(callback);
    }

    pub fn set_callback_external(&mut self, callback: Box<CallbackExternal>) {
        self.callback_external = Some(callback);
    }

    /// A cooperative cancellation point, which polls the terminate callback, if set.
    /// Returns true if the caller should stop, and false otherwise.
    pub fn checkpoint(&mut self) -> bool {
        if let Some(callback) = &mut self.callback_terminate {
            callback()
        } else {
            false
        }
    }

    /// Registers `constraint` to be consulted when `literal` is made false.
    pub fn watch_external(&mut self, literal: CLiteral, constraint: ExternalConstraint) {
        self.watches.watch(literal, Watch::External(constraint));
    }
}
