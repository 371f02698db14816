/*!
Tools for building a context.

# Basic methods

The library has two basic methods for building a context:
- [fresh_atom](crate::context::Context::fresh_atom), to obtain a fresh atom.
- [add_clause](crate::context::Context::add_clause), to add a clause.

A clause is normalised when added:
- Duplicate literals are removed, and a tautology is skipped.
- A clause with a true literal is skipped, and each false literal is removed.

And the remaining literals are routed by size:
- The empty clause is a conflict.
- A unit clause is an assignment.
- A binary clause is added to the watch lists.
- Any other clause is stored in the clause database, and watched.

Clauses may only be added outside of any scope.

# Examples

```rust
# use otter_simplify::context::Context;
# use otter_simplify::config::Config;
# use otter_simplify::builder::ClauseOk;
# use otter_simplify::structures::{clause::CClause, literal::{CLiteral, Literal}};
#
let mut the_context = Context::from_config(Config::default());
let p = the_context.fresh_or_max_atom();
let q = the_context.fresh_or_max_atom();
let r = the_context.fresh_or_max_atom();

let clause_a = CClause::from([CLiteral::new(p, true), CLiteral::new(q, false)]);
let clause_b = CClause::from([CLiteral::new(p, false), CLiteral::new(p, true)]);
let clause_c = CClause::from([CLiteral::new(p, true), CLiteral::new(q, true), CLiteral::new(r, true)]);

assert_eq!(the_context.add_clause(clause_a), Ok(ClauseOk::Added));
assert_eq!(the_context.add_clause(clause_b), Ok(ClauseOk::Tautology));
assert!(matches!(the_context.add_clause(clause_c), Ok(ClauseOk::Stored(_))));
```
*/

mod dimacs;
mod structures;

use crate::db::ClauseKey;

/// Ok results when adding a clause to the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the context, as an assignment, a conflict, or a binary clause.
    Added,

    /// The clause was stored in the clause database, with the given key.
    Stored(ClauseKey),

    /// The clause was a tautology (and so was not added to the context).
    Tautology,

    /// The clause was satisfied by the current valuation (and so was not added to the context).
    Satisfied,
}
