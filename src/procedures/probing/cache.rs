/*!
A cache of the literals implied by each literal.

If some literal *l* implies *p* through propagation, then -*l* ∨ *p* is a consequence of the formula, and remains so as the formula grows.
So, a cache entry may be used long after it was stored, though the entry is only as strong as the formula when stored.

# Eviction

The cache keeps a count of its footprint in bytes, and entries are evicted on two triggers:
- Stale entries, by [evict](ProbeCache::evict), when the atom of the owning literal has been valued or eliminated.
- Everything, by [relieve_pressure](ProbeCache::relieve_pressure), when the footprint exceeds a limit.

In addition, [store](ProbeCache::store) refuses an entry while the footprint is at or above the limit.
*/

use crate::structures::literal::CLiteral;

/// The literals implied by some literal.
#[derive(Clone, Debug, Default)]
struct CacheEntry {
    available: bool,
    literals: Vec<CLiteral>,
}

#[derive(Default)]
pub struct ProbeCache {
    entries: Vec<CacheEntry>,
    footprint: usize,
}

impl ProbeCache {
    /// Stores `implied` as the literals implied by `literal`, replacing any existing entry.
    ///
    /// Returns false, and stores nothing, if the footprint of the cache is at or above `limit` bytes.
    pub fn store(&mut self, literal: CLiteral, implied: &[CLiteral], limit: usize) -> bool {
        if self.footprint >= limit {
            return false;
        }

        if self.entries.len() <= literal.index() {
            self.entries.resize_with(literal.index() + 1, CacheEntry::default);
        }

        let entry = &mut self.entries[literal.index()];
        self.footprint -= entry.literals.len() * std::mem::size_of::<CLiteral>();
        entry.literals.clear();
        entry.literals.extend_from_slice(implied);
        entry.available = true;
        self.footprint += entry.literals.len() * std::mem::size_of::<CLiteral>();

        true
    }

    /// The literals implied by `literal`, if stored.
    pub fn implied_by(&self, literal: CLiteral) -> Option<&[CLiteral]> {
        match self.entries.get(literal.index()) {
            Some(entry) if entry.available => Some(&entry.literals),
            _ => None,
        }
    }

    /// Evicts the entry of `literal`, if any.
    pub fn evict(&mut self, literal: CLiteral) {
        if let Some(entry) = self.entries.get_mut(literal.index()) {
            self.footprint -= entry.literals.len() * std::mem::size_of::<CLiteral>();
            entry.available = false;
            entry.literals = Vec::default();
        }
    }

    /// Clears the cache if the footprint exceeds `limit` bytes, returning true if so.
    pub fn relieve_pressure(&mut self, limit: usize) -> bool {
        match self.footprint > limit {
            true => {
                self.clear();
                true
            }
            false => false,
        }
    }

    /// Evicts every entry, and releases the memory of the cache.
    pub fn clear(&mut self) {
        self.entries = Vec::default();
        self.footprint = 0;
    }

    /// The size in bytes of the literals stored.
    pub fn footprint(&self) -> usize {
        self.footprint
    }

    /// A count of available entries.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|entry| entry.available).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
