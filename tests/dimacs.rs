use otter_simplify::{
    config::Config,
    context::Context,
    procedures::probing::ProbeOutcome,
    reports::Report,
    structures::literal::{CLiteral, Literal},
    types::err::{ConfigError, ErrorKind, ParseError},
};

mod read {
    use super::*;

    #[test]
    fn identity_mapping() {
        let mut ctx = Context::from_config(Config::default());
        let dimacs = b"c A comment
p cnf 5 3
 1 -2  3 0
-1  4    0
 2  3 -5 4 0
";
        let Ok(atom_map) = ctx.read_dimacs(dimacs.as_slice()) else {
            panic!("Failed to read");
        };

        assert_eq!(atom_map.len(), 5);
        assert!(atom_map.iter().all(|(dimacs, atom)| *dimacs == *atom as isize));
        assert_eq!(ctx.atom_count(), 6);

        assert_eq!(ctx.clause_db.count(), 2);
        assert!(ctx.watches.has_binary(CLiteral::new(1, false), CLiteral::new(4, true)));
    }

    #[test]
    fn without_problem_line() {
        let mut ctx = Context::from_config(Config::default());
        let dimacs = b"1 -2 0
2 3 0
";
        let Ok(atom_map) = ctx.read_dimacs(dimacs.as_slice()) else {
            panic!("Failed to read");
        };

        assert_eq!(atom_map.len(), 3);
        assert_eq!(atom_map.get(&3), Some(&3));
        assert!(ctx.watches.has_binary(CLiteral::new(1, true), CLiteral::new(2, false)));
        assert!(ctx.watches.has_binary(CLiteral::new(2, true), CLiteral::new(3, true)));
    }

    #[test]
    fn trailing_clause_and_end_marker() {
        let mut ctx = Context::from_config(Config::default());
        let dimacs = b"p cnf 4 2
1 2 0
3 -4
%
0
";
        assert!(ctx.read_dimacs(dimacs.as_slice()).is_ok());

        assert!(ctx.watches.has_binary(CLiteral::new(1, true), CLiteral::new(2, true)));
        assert!(ctx.watches.has_binary(CLiteral::new(3, true), CLiteral::new(4, false)));
        assert_eq!(ctx.watches.binary_clauses().count(), 2);
    }

    #[test]
    fn zero_variants_end_clauses() {
        let mut ctx = Context::from_config(Config::default());
        let dimacs = b"p cnf 2 2
1 2 -0
-1 00
";
        let Ok(atom_map) = ctx.read_dimacs(dimacs.as_slice()) else {
            panic!("Failed to read");
        };

        assert_eq!(atom_map.len(), 2);
        assert_eq!(ctx.atom_count(), 3);
        assert!(ctx.watches.has_binary(CLiteral::new(1, true), CLiteral::new(2, true)));
        assert_eq!(ctx.value_of(1), Some(false));
    }

    #[test]
    fn probed() {
        let mut ctx = Context::from_config(Config::default());
        let dimacs = b"p cnf 3 4
 1  2 0
 1 -2 0
-1  3 0
-3  2 -1 0
";
        assert!(ctx.read_dimacs(dimacs.as_slice()).is_ok());

        assert_eq!(ctx.probe(true), Ok(ProbeOutcome::Complete));
        assert_eq!(ctx.value_of(1), Some(true));
        assert_eq!(ctx.value_of(2), Some(true));
        assert_eq!(ctx.value_of(3), Some(true));
        assert_eq!(ctx.report(), Report::Satisfiable);
    }
}

mod errors {
    use super::*;

    #[test]
    fn bad_literal() {
        let mut ctx = Context::from_config(Config::default());
        let dimacs = b"p cnf 2 2
1 2 0
1 x 0
";
        assert_eq!(
            ctx.read_dimacs(dimacs.as_slice()),
            Err(ErrorKind::Parse(ParseError::Literal(3)))
        );
    }

    #[test]
    fn literal_out_of_range() {
        let mut ctx = Context::from_config(Config::default());
        let dimacs = b"p cnf 2 2
1 2 0
-9223372036854775808 0
";
        assert_eq!(
            ctx.read_dimacs(dimacs.as_slice()),
            Err(ErrorKind::Parse(ParseError::Literal(3)))
        );
    }

    #[test]
    fn bad_problem_line() {
        let mut ctx = Context::from_config(Config::default());
        let dimacs = b"p cnf many 2
1 2 0
";
        assert_eq!(
            ctx.read_dimacs(dimacs.as_slice()),
            Err(ErrorKind::Parse(ParseError::ProblemSpecification))
        );
    }

    #[test]
    fn misplaced_problem_line() {
        let mut ctx = Context::from_config(Config::default());
        let dimacs = b"p cnf 2 2
1 2 0
p cnf 2 2
";
        assert_eq!(
            ctx.read_dimacs(dimacs.as_slice()),
            Err(ErrorKind::Parse(ParseError::ProblemSpecification))
        );
    }
}

mod write {
    use super::*;

    #[test]
    fn simplified() {
        let mut ctx = Context::from_config(Config::default());
        let dimacs = b"p cnf 4 3
 1 0
-1 2 3 0
 2 3 4 0
";
        assert!(ctx.read_dimacs(dimacs.as_slice()).is_ok());

        assert_eq!(
            ctx.simplified_dimacs(),
            "p cnf 4 3
1 0
2 3 0
2 3 4 0
"
        );
    }

    #[test]
    fn after_clean() {
        let mut ctx = Context::from_config(Config::default());
        let dimacs = b"p cnf 4 3
 1 2 3 4 0
 1 2 -4 0
-1 0
";
        assert!(ctx.read_dimacs(dimacs.as_slice()).is_ok());
        assert_eq!(ctx.clean(true), Ok(true));

        assert_eq!(
            ctx.simplified_dimacs(),
            "p cnf 4 3
-1 0
2 -4 0
2 3 4 0
"
        );
    }

    #[test]
    fn unsatisfiable() {
        let mut ctx = Context::from_config(Config::default());
        let dimacs = b"p cnf 2 2
 1 0
-1 0
";
        assert!(ctx.read_dimacs(dimacs.as_slice()).is_ok());
        assert!(ctx.inconsistent());
        assert_eq!(ctx.simplified_dimacs(), "p cnf 2 1\n0\n");
    }
}

mod config {
    use super::*;

    #[test]
    fn set_by_name() {
        let mut config = Config::default();

        assert!(config.set("probing", "false").is_ok());
        assert!(!config.probing.enabled.value);

        assert!(config.set("probing_cache_limit", "16").is_ok());
        assert_eq!(config.probing.cache_limit_bytes(), 16 * 1024 * 1024);

        assert_eq!(
            config.set("probing", "maybe"),
            Err(ConfigError::UnreadableValue("probing".to_string()))
        );
        assert_eq!(
            config.set("probing_limit", "4294967295"),
            Err(ConfigError::OutOfBounds("probing_limit".to_string()))
        );
        assert_eq!(
            config.set("cleaning", "true"),
            Err(ConfigError::UnknownOption("cleaning".to_string()))
        );
    }

    #[test]
    fn disabled_by_name() {
        let mut config = Config::default();
        assert!(config.set("probing", "false").is_ok());

        let mut ctx = Context::from_config(config);
        let [x, y] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };
        assert!(ctx.add_clause(vec![-x, y]).is_ok());
        assert!(ctx.add_clause(vec![-x, -y]).is_ok());

        assert_eq!(ctx.probe(true), Ok(ProbeOutcome::Skipped));
    }
}
