/*!
Watch lists, one for each literal.

# Theory

A core part of a solve is [Boolean Constraint Propagation](crate::procedures::bcp) (BCP).
In short, BCP is the observation that some literal in a clause must be true due to all other literals in the clause being false.

Note, BCP only applies when:
- There is exactly one literal without a value.
- All other literals conflict with the background valuation.

So, a clause need only be examined when one of a few distinguished literals is made false, and the watch list of a literal records which clauses to examine.

# Implementation

The watch list at the [index](CLiteral::index) of a literal *l* holds the watches to examine when *l* is made *true*.
That is, the watches of clauses containing -*l*.
To watch a literal *l* of a clause, then, a watch is added to the list of -*l*.

A watch is one of the variants of [Watch]:
- Binary clauses are not stored in the clause database, and exist only as a pair of watches, each holding the *other* literal of the clause.
- Ternary clauses are watched on each of their three literals, and each watch holds the two other literals of the clause.
  So, a ternary watch may be examined without a trip to the clause database.
- Long clauses are watched on the two literals at the front of the clause, and each watch holds some literal of the clause as a 'blocker'.
  If the blocker is true the clause is satisfied, and again there is no need for a trip to the clause database.
- External watches hold an identifier of some constraint external to the clause database, which is consulted on examination.

Watches on ternary and long clauses hold the key of the clause, though no effort is made to remove watches when a clause is removed from the database.
Instead, the watch is dropped when examined, as the key no longer refers to a clause.

Frozen clauses are never watched.
*/

use crate::{
    db::ClauseKey,
    structures::literal::{CLiteral, Literal},
};

/// An identifier for a constraint external to the clause database.
pub type ExternalConstraint = u32;

/// A watch, distinguished by the kind of the watching constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Watch {
    /// A binary clause together with the *other* literal in the clause.
    Binary { literal: CLiteral, learned: bool },

    /// A ternary clause together with the *other* two literals in the clause.
    Ternary {
        key: ClauseKey,
        others: [CLiteral; 2],
    },

    /// A long clause together with some literal of the clause.
    Long { key: ClauseKey, blocker: CLiteral },

    /// Some external constraint.
    External(ExternalConstraint),
}

impl Watch {
    /// The key of the watching clause, if the clause is stored in the clause database.
    pub fn key(&self) -> Option<ClauseKey> {
        match self {
            Self::Ternary { key, .. } | Self::Long { key, .. } => Some(*key),
            Self::Binary { .. } | Self::External(_) => None,
        }
    }
}

/// The watch lists of each literal, indexed by the index of the literal.
#[derive(Default)]
pub struct Watches {
    lists: Vec<Vec<Watch>>,
}

impl Watches {
    /// Extends the watch lists to cover both literals of a fresh atom.
    pub fn fresh_atom(&mut self) {
        self.lists.push(Vec::default());
        self.lists.push(Vec::default());
    }

    /// A count of the watch lists, which is twice the count of atoms.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// True if there are no watch lists.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// The watches to examine when `literal` is made true.
    pub fn list(&self, literal: CLiteral) -> &[Watch] {
        &self.lists[literal.index()]
    }

    /// The watches to examine when `literal` is made true, mutably.
    pub fn list_mut(&mut self, literal: CLiteral) -> &mut Vec<Watch> {
        &mut self.lists[literal.index()]
    }

    /// Takes the watch list of `literal`, leaving an empty list until the list is restored.
    /// To be used in conjunction with [restore](Watches::restore).
    pub fn take(&mut self, literal: CLiteral) -> Vec<Watch> {
        std::mem::take(&mut self.lists[literal.index()])
    }

    /// Restores a list taken by [take](Watches::take).
    /// Any watches added to the list in the interim are kept.
    pub fn restore(&mut self, literal: CLiteral, mut list: Vec<Watch>) {
        let interim = std::mem::take(&mut self.lists[literal.index()]);
        list.extend(interim);
        self.lists[literal.index()] = list;
    }

    /// Watches `literal`, by adding `watch` to the list of the negation of `literal`.
    pub fn watch(&mut self, literal: CLiteral, watch: Watch) {
        self.lists[literal.negate().index()].push(watch);
    }

    /// Adds the binary clause `a` ∨ `b`.
    pub fn add_binary(&mut self, a: CLiteral, b: CLiteral, learned: bool) {
        self.watch(a, Watch::Binary { literal: b, learned });
        self.watch(b, Watch::Binary { literal: a, learned });
    }

    /// Watches each literal of the ternary clause `literals`.
    pub fn attach_ternary(&mut self, key: ClauseKey, literals: [CLiteral; 3]) {
        let [a, b, c] = literals;
        self.watch(a, Watch::Ternary { key, others: [b, c] });
        self.watch(b, Watch::Ternary { key, others: [a, c] });
        self.watch(c, Watch::Ternary { key, others: [a, b] });
    }

    /// Watches the first two literals of the long clause `literals`.
    ///
    /// # Panics
    /// If the clause has fewer than two literals.
    pub fn attach_long(&mut self, key: ClauseKey, literals: &[CLiteral]) {
        let (a, b) = (literals[0], literals[1]);
        self.watch(a, Watch::Long { key, blocker: b });
        self.watch(b, Watch::Long { key, blocker: a });
    }

    /// Removes any watch for the clause `key` on `literal`.
    pub fn unwatch(&mut self, literal: CLiteral, key: ClauseKey) {
        self.lists[literal.negate().index()].retain(|watch| watch.key() != Some(key));
    }

    /// Clears every watch list.
    pub fn clear(&mut self) {
        for list in self.lists.iter_mut() {
            list.clear();
        }
    }

    /// An iterator over the watch lists, paired with the literal of each list.
    pub fn lists(&self) -> impl Iterator<Item = (CLiteral, &[Watch])> {
        self.lists
            .iter()
            .enumerate()
            .map(|(index, list)| (CLiteral::from_index(index), list.as_slice()))
    }

    /// Mutable access to every watch list, paired with the literal of each list.
    pub fn lists_mut(&mut self) -> impl Iterator<Item = (CLiteral, &mut Vec<Watch>)> {
        self.lists
            .iter_mut()
            .enumerate()
            .map(|(index, list)| (CLiteral::from_index(index), list))
    }

    /// An iterator over each binary clause, with each clause appearing once with the least literal first.
    pub fn binary_clauses(&self) -> impl Iterator<Item = (CLiteral, CLiteral, bool)> + '_ {
        self.lists().flat_map(|(owner, list)| {
            list.iter().filter_map(move |watch| match watch {
                Watch::Binary { literal, learned } if -owner < *literal => {
                    Some((-owner, *literal, *learned))
                }
                _ => None,
            })
        })
    }

    /// Whether the binary clause `a` ∨ `b` is watched.
    pub fn has_binary(&self, a: CLiteral, b: CLiteral) -> bool {
        self.list(-a)
            .iter()
            .any(|watch| matches!(watch, Watch::Binary { literal, .. } if *literal == b))
    }
}
