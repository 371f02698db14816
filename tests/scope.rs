use otter_simplify::{
    config::Config,
    context::{Conflict, Context},
    db::atom::AssignmentSource,
    reports::Report,
    structures::literal::Literal,
    types::err::ScopeError,
};

#[test]
fn push_pop() {
    let mut ctx = Context::from_config(Config::default());

    let [p, q, r] = *ctx.fresh_or_max_literals(3).as_slice() else {
        panic!("Insufficient literals");
    };
    assert!(ctx.add_clause(vec![-p, q]).is_ok());
    assert!(ctx.add_clause(r).is_ok());
    assert!(ctx.propagate().is_ok());
    let base_length = ctx.trail.len();

    ctx.push();
    assert_eq!(ctx.scope_level(), 1);

    ctx.assign(p, AssignmentSource::Free);
    assert!(ctx.propagate().is_ok());
    assert_eq!(ctx.value_of(q.atom()), Some(true));
    assert_eq!(
        ctx.atom_db.source_of(q.atom()),
        AssignmentSource::Binary(-p)
    );

    assert!(ctx.pop(1).is_ok());
    assert_eq!(ctx.scope_level(), 0);
    assert_eq!(ctx.trail.len(), base_length);
    assert!(ctx.trail.is_propagated());

    assert_eq!(ctx.value_of(p.atom()), None);
    assert_eq!(ctx.value_of(q.atom()), None);
    assert_eq!(ctx.value_of(r.atom()), Some(true));
}

#[test]
fn nested() {
    let mut ctx = Context::from_config(Config::default());

    let [p, q, r] = *ctx.fresh_or_max_literals(3).as_slice() else {
        panic!("Insufficient literals");
    };

    ctx.push();
    ctx.assign(p, AssignmentSource::Free);
    ctx.push();
    ctx.assign(q, AssignmentSource::Free);
    ctx.push();
    ctx.assign(r, AssignmentSource::Free);
    assert_eq!(ctx.scope_level(), 3);

    assert!(ctx.pop(1).is_ok());
    assert_eq!(ctx.value_of(r.atom()), None);
    assert_eq!(ctx.value_of(q.atom()), Some(true));

    assert!(ctx.pop(2).is_ok());
    assert_eq!(ctx.scope_level(), 0);
    assert_eq!(ctx.value_of(q.atom()), None);
    assert_eq!(ctx.value_of(p.atom()), None);
}

#[test]
fn underflow() {
    let mut ctx = Context::from_config(Config::default());
    let p = ctx.fresh_or_max_literal();

    assert_eq!(ctx.pop(1), Err(ScopeError::Underflow));

    ctx.push();
    ctx.assign(p, AssignmentSource::Free);
    assert_eq!(ctx.pop(2), Err(ScopeError::Underflow));

    // Nothing was popped.
    assert_eq!(ctx.scope_level(), 1);
    assert_eq!(ctx.value_of(p.atom()), Some(true));

    // And popping nothing does nothing.
    assert!(ctx.pop(0).is_ok());
    assert_eq!(ctx.scope_level(), 1);
}

#[test]
fn pop_clears_conflict() {
    let mut ctx = Context::from_config(Config::default());

    let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
        panic!("Insufficient literals");
    };
    assert!(ctx.add_clause(vec![-p, q]).is_ok());
    assert!(ctx.add_clause(vec![-p, -q]).is_ok());

    ctx.push();
    ctx.assign(p, AssignmentSource::Free);
    assert!(ctx.propagate().is_ok());
    assert!(ctx.inconsistent());
    assert!(matches!(ctx.conflict, Some(Conflict::Binary(_, _))));

    assert!(ctx.pop(1).is_ok());
    assert!(!ctx.inconsistent());
    assert_eq!(ctx.conflict, None);
    assert_eq!(ctx.value_of(p.atom()), None);
    assert_eq!(ctx.value_of(q.atom()), None);
}

#[test]
fn base_conflict_survives_pop() {
    let mut ctx = Context::from_config(Config::default());
    let p = ctx.fresh_or_max_literal();

    assert!(ctx.add_clause(p).is_ok());
    assert!(ctx.add_clause(-p).is_ok());
    assert!(ctx.inconsistent());

    ctx.push();
    assert!(ctx.pop(1).is_ok());

    assert!(ctx.inconsistent());
    assert_eq!(ctx.conflict, Some(Conflict::EmptyClause));
    assert_eq!(ctx.report(), Report::Unsatisfiable);
}

#[test]
fn conflict_below_popped_scopes() {
    let mut ctx = Context::from_config(Config::default());
    let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
        panic!("Insufficient literals");
    };

    ctx.push();
    ctx.assign(p, AssignmentSource::Free);
    ctx.assign(-p, AssignmentSource::Free);
    assert!(ctx.inconsistent());

    ctx.push();
    ctx.assign(q, AssignmentSource::Free);
    assert!(ctx.pop(1).is_ok());
    assert!(ctx.inconsistent());

    assert!(ctx.pop(1).is_ok());
    assert!(!ctx.inconsistent());
}

#[test]
fn conflicting_assignment() {
    let mut ctx = Context::from_config(Config::default());
    let p = ctx.fresh_or_max_literal();

    ctx.push();
    ctx.assign(p, AssignmentSource::Free);
    ctx.assign(p, AssignmentSource::Free);
    assert!(!ctx.inconsistent());

    ctx.assign(-p, AssignmentSource::Free);
    assert_eq!(ctx.conflict, Some(Conflict::Assignment(-p)));

    assert!(ctx.pop(1).is_ok());
    assert!(!ctx.inconsistent());
}
