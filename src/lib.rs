//! A library for simplifying boolean formulas written in conjunctive normal form.
//!
//! otter_simplify maintains a formula over a watched-literal clause database, together with a trail of assignments and scopes for speculative assignment.
//! On this base, two simplification procedures are provided:
//! - A [cleaner](crate::procedures::cleaner), which removes satisfied clauses and false literals after atoms have been valued outside of any scope.
//! - A [prober](crate::procedures::probing), which finds failed literals, and literals implied by both literals of an atom, with a bounded cost.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config).
//! Clauses may be added though the [DIMACS](crate::context::Context::read_dimacs) representation of a formula or [programatically](crate::context::Context::add_clause).
//!
//! Internally, a context is a handful of databases:
//! - Stored clauses are kept in a [clause database](crate::db::clause).
//! - A valuation is kept in an [atom database](crate::db::atom).
//! - Assignments, in order, are kept on a [trail](crate::db::trail).
//! - Binary clauses, and the watches of every other clause, are kept in [watch lists](crate::db::watches).
//!
//! All procedures are methods on a context, and the single thread of control through a context is not reentrant.
//!
//! # Examples
//!
//! ```rust
//! # use otter_simplify::config::Config;
//! # use otter_simplify::context::Context;
//! # use otter_simplify::procedures::probing::ProbeOutcome;
//! # use otter_simplify::structures::literal::{CLiteral, Literal};
//! let mut the_context = Context::from_config(Config::default());
//! let p = the_context.fresh_or_max_literal();
//! let q = the_context.fresh_or_max_literal();
//! let r = the_context.fresh_or_max_literal();
//!
//! // -q implies -p, and so both r and -r.
//! assert!(the_context.add_clause(vec![-p, q]).is_ok());
//! assert!(the_context.add_clause(vec![p, q, r]).is_ok());
//! assert!(the_context.add_clause(vec![p, q, -r]).is_ok());
//!
//! assert_eq!(the_context.probe(true), Ok(ProbeOutcome::Complete));
//! assert_eq!(the_context.value_of_literal(q), Some(true));
//! assert_eq!(the_context.value_of_literal(p), None);
//!
//! // Each clause is satisfied by q.
//! assert_eq!(the_context.clean(true), Ok(true));
//! assert_eq!(the_context.clause_db.count(), 0);
//! ```

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
