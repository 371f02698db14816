//! Literals are atoms paired with a (boolean) polarity.
//!
//! The canonical representation is [CLiteral], which packs the pair into a single integer code:
//! `2 * atom` for the positive literal and `2 * atom + 1` for the negative literal.
//! The code doubles as the [index](CLiteral::index) of the literal, e.g. into the watch lists of a context.
//!
//! ```rust
//! # use otter_simplify::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert_eq!(literal.index(), 158);
//!
//! assert!(!(-literal).polarity());
//! assert_eq!((-literal).index(), 159);
//! assert_eq!(-(-literal), literal);
//! ```
//!
//! Literals are ordered by index, so all literals of an atom are adjacent and the positive literal comes first.

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in it's integer form, with sign indicating polarity.
    fn as_int(&self) -> isize;
}

/// The canonical representation of a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CLiteral {
    code: u32,
}

impl CLiteral {
    /// The index of the literal, unique to the (atom, polarity) pair.
    pub fn index(&self) -> usize {
        self.code as usize
    }

    /// The literal with the given index.
    pub fn from_index(index: usize) -> Self {
        Self { code: index as u32 }
    }

    /// The literal as a DIMACS string, with the atom as the DIMACS variable.
    pub fn as_dimacs(&self) -> String {
        format!("{}", self.as_int())
    }
}

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        Self {
            code: (atom << 1) | (!polarity as u32),
        }
    }

    fn negate(&self) -> Self {
        Self {
            code: self.code ^ 1,
        }
    }

    fn atom(&self) -> Atom {
        self.code >> 1
    }

    fn polarity(&self) -> bool {
        self.code & 1 == 0
    }

    fn as_int(&self) -> isize {
        match self.polarity() {
            true => self.atom() as isize,
            false => -(self.atom() as isize),
        }
    }
}

impl std::ops::Neg for CLiteral {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_int())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_pairs() {
        let p = CLiteral::new(3, true);
        let not_p = -p;

        assert_eq!(p.index() + 1, not_p.index());
        assert_eq!(p.index() / 2, not_p.index() / 2);
        assert_eq!(CLiteral::from_index(not_p.index()), not_p);
    }

    #[test]
    fn ordering_by_index() {
        let p = CLiteral::new(1, true);
        let q = CLiteral::new(2, false);

        assert!(p < -p);
        assert!(-p < q);
        assert_eq!(p.cmp(&q), p.index().cmp(&q.index()));
    }

    #[test]
    fn int_form() {
        assert_eq!(CLiteral::new(7, true).as_int(), 7);
        assert_eq!(CLiteral::new(7, false).as_int(), -7);
        assert_eq!(format!("{}", -CLiteral::new(2, true)), "-2");
    }
}
