/*!
Reports for the context.
*/

use std::collections::BTreeMap;

/// High-level reports regarding a context.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula of the context is satisfiable.
    Satisfiable,

    /// The formula of the context is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula of the context is unknown, for some reason.
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Named counts, ordered by name.
///
/// Updates to the same name accumulate, so statistics from a number of sources may be collected together.
#[derive(Clone, Debug, Default)]
pub struct Statistics {
    entries: BTreeMap<&'static str, u64>,
}

impl Statistics {
    /// Adds `value` to the count of `name`.
    pub fn update(&mut self, name: &'static str, value: u64) {
        *self.entries.entry(name).or_insert(0) += value;
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.entries.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.entries.iter().map(|(name, value)| (*name, *value))
    }
}

impl std::fmt::Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, value) in self.iter() {
            writeln!(f, "c {name:<24} {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updates_accumulate() {
        let mut statistics = Statistics::default();
        statistics.update("elim clauses", 2);
        statistics.update("elim clauses", 3);
        statistics.update("probing assigned", 0);

        assert_eq!(statistics.get("elim clauses"), Some(5));
        assert_eq!(statistics.get("probing assigned"), Some(0));
        assert_eq!(statistics.get("elim literals"), None);

        let names = statistics.iter().map(|(name, _)| name).collect::<Vec<_>>();
        assert_eq!(names, vec!["elim clauses", "probing assigned"]);
    }
}
