//! The trail of assignments.
//!
//! Literals are stored in the order they were assigned, and the index at which each scope begins is recorded.
//! So, the literals assigned within the top scope are those at and after the last recorded index.
//!
//! The queue head marks how much of the trail has been examined by [BCP](crate::procedures::bcp).
//! Each literal before the queue head has been propagated, and the trail is fully propagated exactly when the queue head is the length of the trail.

use crate::structures::literal::CLiteral;

/// The index of a scope, with zero as the base (no scope).
pub type LevelIndex = u32;

#[derive(Default)]
pub struct Trail {
    /// Assigned literals, in order of assignment.
    pub literals: Vec<CLiteral>,

    /// The index in `literals` at which each scope begins.
    pub level_indicies: Vec<usize>,

    /// The index of the next literal to propagate.
    pub q_head: usize,
}

impl Trail {
    /// Stores an assignment to the top scope.
    pub fn store_assignment(&mut self, literal: CLiteral) {
        self.literals.push(literal);
    }

    /// The number of assignments made.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// True if no assignments have been made.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// True if every assignment has been propagated.
    pub fn is_propagated(&self) -> bool {
        self.q_head == self.literals.len()
    }

    /// The current level.
    pub fn level(&self) -> LevelIndex {
        self.level_indicies.len() as LevelIndex
    }

    /// Opens a scope above the current assignments.
    pub fn open_level(&mut self) {
        self.level_indicies.push(self.literals.len());
    }

    /// The assignments made at the (current) top level, in order of assignment.
    pub fn top_level_assignments(&self) -> &[CLiteral] {
        if let Some(&level_start) = self.level_indicies.last() {
            &self.literals[level_start..]
        } else {
            &self.literals
        }
    }

    /// The assignments made since the trail had length `start`.
    pub fn assignments_since(&self, start: usize) -> &[CLiteral] {
        match self.literals.get(start..) {
            Some(assignments) => assignments,
            None => &[],
        }
    }

    /// Removes levels at and above the given level index, if they exist, returning the assignments made within those levels.
    /// The queue head is moved back to the end of the remaining assignments, if needed.
    ///
    /// # Soundness
    /// Does not clear the *valuation* of the removed assignments.
    pub fn clear_assignments_above(&mut self, level: LevelIndex) -> Vec<CLiteral> {
        // level_indicies stores with zero-indexing.
        // So, the assignments of scope i + 1 begin at literals[level_indicies[i]].
        if let Some(&level_start) = self.level_indicies.get(level as usize) {
            self.level_indicies.truncate(level as usize);
            self.q_head = std::cmp::min(self.q_head, level_start);
            self.literals.split_off(level_start)
        } else {
            Vec::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::Literal;

    #[test]
    fn levels() {
        let mut trail = Trail::default();
        let [p, q, r] = [1, 2, 3].map(|atom| CLiteral::new(atom, true));

        trail.store_assignment(p);
        trail.open_level();
        trail.store_assignment(q);
        trail.open_level();
        trail.store_assignment(r);
        trail.q_head = 3;

        assert_eq!(trail.level(), 2);
        assert_eq!(trail.top_level_assignments(), &[r]);

        let cleared = trail.clear_assignments_above(0);
        assert_eq!(cleared, vec![q, r]);
        assert_eq!(trail.level(), 0);
        assert_eq!(trail.q_head, 1);
        assert!(trail.is_propagated());
        assert_eq!(trail.top_level_assignments(), &[p]);
    }

    #[test]
    fn clear_missing_level() {
        let mut trail = Trail::default();
        trail.store_assignment(CLiteral::new(1, false));

        assert!(trail.clear_assignments_above(0).is_empty());
        assert_eq!(trail.len(), 1);
    }
}
