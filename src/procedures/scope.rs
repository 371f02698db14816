/*!
Scopes, for speculative assignment with guaranteed rollback.

A scope is pushed by recording the length of the trail, and popped by clearing every assignment made since the scope was pushed.
As watches on clauses are only required to be correct with respect to the literals of a clause which are not false, watches need not be restored on a pop.

Popping a scope also clears any conflict noted within the popped scopes, as the conflict followed from assignments which are no longer present.
A conflict noted outside of the popped scopes remains.

```rust
# use otter_simplify::context::Context;
# use otter_simplify::config::Config;
# use otter_simplify::db::atom::AssignmentSource;
# use otter_simplify::structures::literal::Literal;
let mut the_context = Context::from_config(Config::default());
let p = the_context.fresh_or_max_literal();
let q = the_context.fresh_or_max_literal();
assert!(the_context.add_clause(vec![-p, q]).is_ok());

the_context.push();
the_context.assign(p, AssignmentSource::Free);
assert!(the_context.propagate().is_ok());
assert_eq!(the_context.value_of(q.atom()), Some(true));

assert!(the_context.pop(1).is_ok());
assert_eq!(the_context.scope_level(), 0);
assert_eq!(the_context.value_of(q.atom()), None);
```
*/

use crate::{
    context::Context,
    db::trail::LevelIndex,
    misc::log::targets::{self},
    structures::literal::Literal,
    types::err::{self},
};

impl Context {
    /// Opens a fresh scope.
    pub fn push(&mut self) {
        self.trail.open_level();
        self.counters.scopes += 1;
        log::trace!(target: targets::SCOPE, "Push to {}", self.trail.level());
    }

    /// Closes the top `count` scopes, clearing the value of each atom assigned within those scopes.
    pub fn pop(&mut self, count: LevelIndex) -> Result<(), err::ScopeError> {
        if count == 0 {
            return Ok(());
        }

        let level = self.trail.level();
        if count > level {
            log::error!(target: targets::SCOPE, "Pop of {count} from {level}");
            return Err(err::ScopeError::Underflow);
        }

        let target = level - count;
        for literal in self.trail.clear_assignments_above(target) {
            self.atom_db.drop_value(literal.atom());
        }
        if self.conflict_level > target {
            self.conflict = None;
        }

        log::trace!(target: targets::SCOPE, "Pop to {}", self.trail.level());
        Ok(())
    }

    /// The count of open scopes.
    pub fn scope_level(&self) -> LevelIndex {
        self.trail.level()
    }
}
