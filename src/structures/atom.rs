/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

So, the atoms of a context are [0..*m*) for some *m*, and may be used directly as indicies of the atom database.

The atom `0` is fixed internally with a value of true, and is never probed.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The atom `0` is fixed internally with a value of true.
pub const TOP_ATOM: Atom = 0;

/// The maximum instance of an atom.
///
/// Literals pack an atom with a polarity bit, and so the top bit of the atom is unavailable.
pub const ATOM_MAX: Atom = Atom::MAX >> 1;
