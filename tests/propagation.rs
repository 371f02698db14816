use otter_simplify::{
    builder::ClauseOk,
    config::Config,
    context::{callbacks::ExternalOutcome, Conflict, Context},
    db::{
        atom::AssignmentSource,
        watches::{ExternalConstraint, Watch},
        ClauseKey,
    },
    reports::Report,
    structures::literal::{CLiteral, Literal},
};

fn stored_key(outcome: Result<ClauseOk, otter_simplify::types::err::ErrorKind>) -> ClauseKey {
    match outcome {
        Ok(ClauseOk::Stored(key)) => key,
        _ => panic!("Clause not stored"),
    }
}

mod clauses {
    use super::*;

    #[test]
    fn ternary() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r] = *ctx.fresh_or_max_literals(3).as_slice() else {
            panic!("Insufficient literals");
        };
        let key = stored_key(ctx.add_clause(vec![p, q, r]));

        ctx.push();
        ctx.assign(-p, AssignmentSource::Free);
        assert!(ctx.propagate().is_ok());
        assert_eq!(ctx.value_of_literal(r), None);

        ctx.assign(-r, AssignmentSource::Free);
        assert!(ctx.propagate().is_ok());
        assert_eq!(ctx.value_of_literal(q), Some(true));
        assert_eq!(ctx.atom_db.source_of(q.atom()), AssignmentSource::Ternary(key));
    }

    #[test]
    fn long() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r, s] = *ctx.fresh_or_max_literals(4).as_slice() else {
            panic!("Insufficient literals");
        };
        let key = stored_key(ctx.add_clause(vec![p, q, r, s]));

        ctx.push();
        for literal in [-p, -q, -r] {
            assert_eq!(ctx.value_of_literal(s), None);
            ctx.assign(literal, AssignmentSource::Free);
            assert!(ctx.propagate().is_ok());
        }

        assert_eq!(ctx.value_of_literal(s), Some(true));
        assert_eq!(ctx.atom_db.source_of(s.atom()), AssignmentSource::Long(key));

        // The watches moved with the assignments, and survive the scope.
        assert!(ctx.pop(1).is_ok());
        ctx.push();
        for literal in [-s, -r, -q] {
            ctx.assign(literal, AssignmentSource::Free);
            assert!(ctx.propagate().is_ok());
        }
        assert_eq!(ctx.value_of_literal(p), Some(true));
    }

    #[test]
    fn long_conflict() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r, s] = *ctx.fresh_or_max_literals(4).as_slice() else {
            panic!("Insufficient literals");
        };
        let key = stored_key(ctx.add_clause(vec![p, q, r, s]));

        // Each literal is false before any is propagated.
        ctx.push();
        for literal in [-p, -q, -r, -s] {
            ctx.assign(literal, AssignmentSource::Free);
        }
        assert!(ctx.propagate().is_ok());

        assert_eq!(ctx.conflict, Some(Conflict::Long(key)));
        assert_eq!(ctx.report(), Report::Unknown);

        assert!(ctx.pop(1).is_ok());
        assert!(!ctx.inconsistent());
    }

    #[test]
    fn base_conflict() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };
        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![p, -q]).is_ok());
        assert!(ctx.add_clause(-p).is_ok());

        assert!(ctx.propagate().is_ok());
        assert!(ctx.inconsistent());
        assert_eq!(ctx.report(), Report::Unsatisfiable);
        assert_eq!(ctx.counters.conflicts, 1);
    }

    #[test]
    fn satisfiable() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r] = *ctx.fresh_or_max_literals(3).as_slice() else {
            panic!("Insufficient literals");
        };
        assert!(ctx.add_clause(vec![p, q, r]).is_ok());
        assert!(ctx.add_clause(vec![-p, q]).is_ok());
        assert!(ctx.add_clause(vec![-q, -r]).is_ok());
        assert!(ctx.add_clause(p).is_ok());

        assert!(ctx.propagate().is_ok());
        assert_eq!(ctx.value_of_literal(q), Some(true));
        assert_eq!(ctx.value_of_literal(r), Some(false));
        assert_eq!(ctx.report(), Report::Satisfiable);
    }
}

mod stale_keys {
    use super::*;

    #[test]
    fn removed_long() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r, s] = *ctx.fresh_or_max_literals(4).as_slice() else {
            panic!("Insufficient literals");
        };
        let key = stored_key(ctx.add_clause(vec![p, q, r, s]));

        assert!(ctx.watches.list(-p).iter().any(|watch| watch.key() == Some(key)));
        assert!(ctx.clause_db.remove(key).is_some());

        ctx.push();
        for literal in [-p, -q, -r] {
            ctx.assign(literal, AssignmentSource::Free);
            assert!(ctx.propagate().is_ok());
        }

        assert_eq!(ctx.value_of_literal(s), None);
        assert!(ctx.watches.list(-p).iter().all(|watch| watch.key() != Some(key)));
    }

    #[test]
    fn removed_ternary() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r] = *ctx.fresh_or_max_literals(3).as_slice() else {
            panic!("Insufficient literals");
        };
        let key = stored_key(ctx.add_clause(vec![p, q, r]));
        assert!(ctx.clause_db.remove(key).is_some());

        ctx.push();
        ctx.assign(-p, AssignmentSource::Free);
        ctx.assign(-q, AssignmentSource::Free);
        assert!(ctx.propagate().is_ok());

        assert_eq!(ctx.value_of_literal(r), None);
        assert!(ctx.watches.list(-p).is_empty());
        assert!(ctx.watches.list(-q).is_empty());
    }

    #[test]
    fn deleted() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r, s] = *ctx.fresh_or_max_literals(4).as_slice() else {
            panic!("Insufficient literals");
        };
        let key = stored_key(ctx.add_clause(vec![p, q, r, s]));

        assert!(ctx.delete_clause(key).is_ok());
        assert_eq!(ctx.clause_db.count(), 0);
        assert!(ctx.clause_db.original_keys().is_empty());
        assert!(ctx
            .watches
            .lists()
            .all(|(_, list)| list.iter().all(|watch| watch.key() != Some(key))));

        assert!(ctx.delete_clause(key).is_err());
    }
}

mod external {
    use super::*;

    const CONSTRAINT: ExternalConstraint = 7;

    #[test]
    fn propagates() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        // The constraint p ∨ q, watched on p.
        ctx.watch_external(p, CONSTRAINT);
        ctx.set_callback_external(Box::new(
            move |literal: CLiteral, constraint: ExternalConstraint, valuation: &[Option<bool>]| {
                assert_eq!(literal, -p);
                assert_eq!(constraint, CONSTRAINT);
                assert_eq!(valuation[p.atom() as usize], Some(false));
                ExternalOutcome::Propagate(q)
            },
        ));

        ctx.push();
        ctx.assign(-p, AssignmentSource::Free);
        assert!(ctx.propagate().is_ok());

        assert_eq!(ctx.value_of_literal(q), Some(true));
        assert_eq!(
            ctx.atom_db.source_of(q.atom()),
            AssignmentSource::External(CONSTRAINT)
        );

        // The watch persists.
        assert!(ctx.pop(1).is_ok());
        assert_eq!(ctx.watches.list(-p), &[Watch::External(CONSTRAINT)]);
    }

    #[test]
    fn conflicts() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_literal();

        ctx.watch_external(p, CONSTRAINT);
        ctx.set_callback_external(Box::new(
            |_: CLiteral, _: ExternalConstraint, _: &[Option<bool>]| ExternalOutcome::Conflict,
        ));

        ctx.push();
        ctx.assign(-p, AssignmentSource::Free);
        assert!(ctx.propagate().is_ok());
        assert_eq!(ctx.conflict, Some(Conflict::External(CONSTRAINT)));

        // As an external watch remains, the report is unknown.
        assert!(ctx.pop(1).is_ok());
        ctx.assign(p, AssignmentSource::Free);
        assert!(ctx.propagate().is_ok());
        assert_eq!(ctx.report(), Report::Unknown);
    }

    #[test]
    fn without_callback() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_literal();

        ctx.watch_external(p, CONSTRAINT);
        ctx.push();
        ctx.assign(-p, AssignmentSource::Free);
        assert!(ctx.propagate().is_ok());
        assert!(!ctx.inconsistent());
    }
}

mod frozen {
    use super::*;

    #[test]
    fn freeze_and_melt() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r, s] = *ctx.fresh_or_max_literals(4).as_slice() else {
            panic!("Insufficient literals");
        };
        let key = stored_key(ctx.add_clause(vec![p, q, r, s]));

        assert!(ctx.freeze_clause(key).is_ok());
        assert!(ctx.clause_db.get(key).is_ok_and(|clause| clause.is_frozen()));
        assert!(ctx.watches.lists().all(|(_, list)| list.is_empty()));

        ctx.push();
        for literal in [-p, -q, -r] {
            ctx.assign(literal, AssignmentSource::Free);
            assert!(ctx.propagate().is_ok());
        }
        assert_eq!(ctx.value_of_literal(s), None);
        assert!(ctx.pop(1).is_ok());

        assert!(ctx.melt_clause(key).is_ok());
        assert!(ctx.clause_db.get(key).is_ok_and(|clause| !clause.is_frozen()));

        ctx.push();
        for literal in [-p, -q, -r] {
            ctx.assign(literal, AssignmentSource::Free);
            assert!(ctx.propagate().is_ok());
        }
        assert_eq!(ctx.value_of_literal(s), Some(true));
    }

    #[test]
    fn melt_asserts() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r] = *ctx.fresh_or_max_literals(3).as_slice() else {
            panic!("Insufficient literals");
        };
        let key = stored_key(ctx.add_clause(vec![p, q, r]));
        assert!(ctx.freeze_clause(key).is_ok());

        assert!(ctx.add_clause(-p).is_ok());
        assert!(ctx.add_clause(-r).is_ok());
        assert!(ctx.propagate().is_ok());
        assert_eq!(ctx.value_of_literal(q), None);

        assert!(ctx.melt_clause(key).is_ok());
        assert_eq!(ctx.value_of_literal(q), Some(true));
        assert_eq!(ctx.atom_db.source_of(q.atom()), AssignmentSource::Ternary(key));
    }

    #[test]
    fn melt_conflicts() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r, s] = *ctx.fresh_or_max_literals(4).as_slice() else {
            panic!("Insufficient literals");
        };
        let key = stored_key(ctx.add_clause(vec![p, q, r, s]));
        assert!(ctx.freeze_clause(key).is_ok());

        for literal in [-p, -q, -r, -s] {
            assert!(ctx.add_clause(literal).is_ok());
        }

        assert!(ctx.melt_clause(key).is_ok());
        assert_eq!(ctx.conflict, Some(Conflict::Long(key)));
    }
}
