slotmap::new_key_type! {
    /// A key to access a clause stored in the clause database.
    ///
    /// Keys are versioned by the underlying arena, so a key to a deleted clause never refers to some later clause stored at the same index.
    /// In particular, watches may hold keys to deleted clauses, and such keys are identified (and the watch dropped) on access.
    pub struct ClauseKey;
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Clause({:?})", self.0)
    }
}
