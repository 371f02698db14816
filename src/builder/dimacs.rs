use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, TOP_ATOM},
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

use std::{collections::HashMap, io::BufRead};

impl Context {
    /// Reads a DIMACS file into the context, returning a map from each DIMACS atom to the atom of the context.
    ///
    /// If the file has a problem line, atoms are introduced for each declared DIMACS atom, so the DIMACS atom *n* is the atom *n* of a context to which nothing has been added.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// ```rust
    /// # use otter_simplify::context::Context;
    /// # use otter_simplify::config::Config;
    /// # use otter_simplify::reports::Report;
    /// # use std::io::Write;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// p cnf 4 4
    ///  1  2       0
    ///  1 -2       0
    /// -1  2 -3    0
    ///  1  2  3 -4 0
    /// ");
    ///
    /// assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
    /// assert!(the_context.probe(true).is_ok());
    /// assert_eq!(the_context.value_of(1), Some(true));
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<HashMap<isize, Atom>, ErrorKind> {
        let mut atom_map = HashMap::<isize, Atom>::default();
        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: CClause = Vec::default();

        let mut line_counter = 0;
        let mut clause_counter = 0;

        // First, read until the formula begins.
        'preamble_loop: loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'preamble_loop,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter).into()),
            }

            match buffer.trim_start().chars().next() {
                Some('c') | None => {
                    buffer.clear();
                    continue;
                }

                Some('p') => {
                    let mut problem_details = buffer.split_whitespace();
                    let atom_count: isize = match problem_details.nth(2).map(str::parse) {
                        Some(Ok(count)) => count,
                        _ => return Err(err::ParseError::ProblemSpecification.into()),
                    };
                    let clause_count: usize = match problem_details.next().map(str::parse) {
                        Some(Ok(count)) => count,
                        _ => return Err(err::ParseError::ProblemSpecification.into()),
                    };
                    log::info!(target: targets::BUILD, "Expecting {atom_count} atoms and {clause_count} clauses");

                    for dimacs_atom in 1..=atom_count {
                        atom_map.insert(dimacs_atom, self.fresh_atom()?);
                    }

                    buffer.clear();
                    break 'preamble_loop;
                }

                // The formula began without a problem line.
                _ => break 'preamble_loop,
            }
        }

        // Second, read until the formula ends.
        'formula_loop: loop {
            match buffer.trim_start().chars().next() {
                Some('%') => break 'formula_loop,
                Some('c') => {}
                Some('p') => return Err(err::ParseError::ProblemSpecification.into()),
                _ => {
                    for item in buffer.split_whitespace() {
                        let parsed_int = match item.parse::<isize>() {
                            Ok(int) => int,
                            Err(_) => return Err(err::ParseError::Literal(line_counter).into()),
                        };

                        if parsed_int == 0 {
                            let the_clause = std::mem::take(&mut clause_buffer);
                            self.add_clause(the_clause)?;
                            clause_counter += 1;
                            continue;
                        }

                        let Some(dimacs_atom) = parsed_int.checked_abs() else {
                            return Err(err::ParseError::Literal(line_counter).into());
                        };

                        let the_literal = match atom_map.get(&dimacs_atom) {
                            Some(atom) => CLiteral::new(*atom, parsed_int.is_positive()),
                            None => {
                                let fresh_atom = self.fresh_atom()?;
                                atom_map.insert(dimacs_atom, fresh_atom);
                                CLiteral::new(fresh_atom, parsed_int.is_positive())
                            }
                        };

                        clause_buffer.push(the_literal);
                    }
                }
            }

            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'formula_loop,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter).into()),
            }
        }

        // A final clause without a delimiter.
        if !clause_buffer.is_empty() {
            self.add_clause(clause_buffer)?;
            clause_counter += 1;
        }

        log::info!(target: targets::BUILD, "Read {clause_counter} clauses over {} atoms", atom_map.len());
        Ok(atom_map)
    }

    /// The formula of the context, in DIMACS form.
    ///
    /// The formula is given over the atoms of the context, and contains:
    /// - Each literal valued outside of any scope, as a unit clause.
    /// - Each binary clause.
    /// - Each stored clause, original and learned.
    ///
    /// If a conflict has been noted outside of any scope, the formula is the empty clause.
    pub fn simplified_dimacs(&self) -> String {
        let atoms = self.atom_count().saturating_sub(1);

        if self.inconsistent() && self.trail.level() == 0 {
            return format!("p cnf {atoms} 1\n0\n");
        }

        let base_assignments = match self.trail.level_indicies.first() {
            Some(&start) => &self.trail.literals[..start],
            None => &self.trail.literals[..],
        };

        let mut clauses: Vec<String> = Vec::default();
        for literal in base_assignments {
            if literal.atom() != TOP_ATOM {
                clauses.push(Clause::as_dimacs(literal, true));
            }
        }
        for (a, b, _) in self.watches.binary_clauses() {
            clauses.push([a, b].as_slice().as_dimacs(true));
        }
        for key in self
            .clause_db
            .original_keys()
            .iter()
            .chain(self.clause_db.learned_keys())
        {
            if let Ok(clause) = self.clause_db.get(*key) {
                clauses.push(clause.literals().as_dimacs(true));
            }
        }

        let mut the_string = format!("p cnf {atoms} {}\n", clauses.len());
        for clause in clauses {
            the_string.push_str(&clause);
            the_string.push('\n');
        }
        the_string
    }
}
