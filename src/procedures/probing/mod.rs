/*!
Failed literal probing.

See [Context::probe] for the relevant context method.

# Overview

A literal *l* is *failed* if propagating *l* leads to a conflict, in which case -*l* is a consequence of the formula.
And, if propagating *l* and propagating -*l* each make some literal *p* true, then *p* is a consequence of the formula.

A pass of the prober visits each atom *a* once, round-robin from the atom at which the previous pass stopped, and [processes](Context::process) each unvalued atom:
1. The literal *a* is propagated within a fresh scope.
   If a conflict follows, the scope is popped and -*a* is asserted.
   Otherwise the literals made true are noted (and cached), and the scope is popped.
2. The literal -*a* is [tried](Context::try_literal): if -*a* fails *a* is asserted, and otherwise each literal made true by both *a* and -*a* is asserted.
3. If binary probing is configured, each unvalued literal *q* for which -*a* implies *q* through a binary clause is tried in the same way, as *q* is implied by -*a*.
   The cache of *q* is used, if available.

All assertions are made outside of any scope, without justification.

# Cost

Each propagation within a scope costs one unit, and the pass suspends when the cost exceeds the configured limit.
The cost of processing an atom is waived if some literal was asserted.
At the end of a pass the cost is kept as a counter which must be [decayed](Prober::decay) to zero before an unforced pass proceeds, and the counter is doubled if the pass asserted nothing.

# Cancellation

The terminate callback is polled once for each processed atom.
If termination is requested the pass is interrupted, with no scope open, and the next pass resumes from the atom at which the pass was interrupted.

```rust
# use otter_simplify::context::Context;
# use otter_simplify::config::Config;
# use otter_simplify::procedures::probing::ProbeOutcome;
# use otter_simplify::structures::literal::{CLiteral, Literal};
let mut the_context = Context::from_config(Config::default());
let x = the_context.fresh_or_max_literal();
let y = the_context.fresh_or_max_literal();

// x implies both y and -y, so x fails.
assert!(the_context.add_clause(vec![-x, y]).is_ok());
assert!(the_context.add_clause(vec![-x, -y]).is_ok());

assert_eq!(the_context.probe(true), Ok(ProbeOutcome::Complete));
assert_eq!(the_context.value_of_literal(x), Some(false));
assert_eq!(the_context.scope_level(), 0);
```
*/

mod cache;
pub use cache::ProbeCache;

use std::{
    collections::HashSet,
    time::{Duration, Instant},
};

use crate::{
    context::Context,
    db::{atom::AssignmentSource, watches::Watch},
    misc::log::targets::{self},
    reports::Statistics,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// How a call to [probe](Context::probe) ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Probing was disabled, not required, or not possible due to a conflict.
    Skipped,

    /// Each atom was visited, or the pass ended on a conflict.
    Complete,

    /// The cost limit was exceeded, and the next pass resumes from the atom at which the pass stopped.
    Suspended,

    /// Termination was requested, and the next pass resumes from the atom at which the pass stopped.
    Interrupted,
}

#[derive(Clone, Debug, Default)]
pub struct ProbingStats {
    /// Literals asserted by probing.
    pub assigned: usize,

    /// Passes which were not skipped.
    pub passes: usize,

    /// Total time spent probing.
    pub time: Duration,
}

/// The state of the prober.
#[derive(Default)]
pub struct Prober {
    /// The atom from which the next pass starts.
    stopped_at: Atom,

    /// During a pass, the (negated) cost of the pass. Otherwise, the cost still to decay.
    counter: i64,

    cache: ProbeCache,

    /// The literals made true by the atom being processed.
    implied: HashSet<CLiteral>,

    to_assert: Vec<CLiteral>,

    neighbours: Vec<CLiteral>,

    pub stats: ProbingStats,
}

impl Prober {
    /// Decrements the cost counter, if positive.
    pub fn decay(&mut self) {
        if self.counter > 0 {
            self.counter -= 1;
        }
    }

    /// The cost counter, which must be zero or less for an unforced pass to proceed.
    pub fn cost(&self) -> i64 {
        self.counter
    }

    /// The atom from which the next pass starts.
    pub fn stopped_at(&self) -> Atom {
        self.stopped_at
    }

    pub fn cache(&self) -> &ProbeCache {
        &self.cache
    }

    /// Releases the scratch structures of a pass.
    fn free_scratch(&mut self) {
        self.implied = HashSet::default();
        self.to_assert = Vec::default();
        self.neighbours = Vec::default();
    }

    pub fn collect_statistics(&self, statistics: &mut Statistics) {
        statistics.update("probing assigned", self.stats.assigned as u64);
        statistics.update("probing cost", self.counter.max(0) as u64);
        statistics.update("probing stopped at", self.stopped_at as u64);
        statistics.update("probing passes", self.stats.passes as u64);
        statistics.update("probing time (ms)", self.stats.time.as_millis() as u64);
    }
}

impl Context {
    /// A pass of the prober.
    ///
    /// For documentation see [procedures::probing](crate::procedures::probing).
    ///
    /// # Errors
    /// - [StateError::NotAtBase](err::StateError::NotAtBase) if some scope is open.
    /// - Any error from [propagation](Context::propagate).
    pub fn probe(&mut self, force: bool) -> Result<ProbeOutcome, ErrorKind> {
        if !self.config.probing.enabled.value {
            return Ok(ProbeOutcome::Skipped);
        }

        if self.trail.level() > 0 {
            log::error!(target: targets::PROBING, "Probe called within a scope");
            return Err(err::StateError::NotAtBase.into());
        }

        self.propagate()?;
        if self.inconsistent() {
            return Ok(ProbeOutcome::Skipped);
        }
        if !force && self.prober.counter > 0 {
            return Ok(ProbeOutcome::Skipped);
        }

        let caching = self.config.probing.cache.value;
        let cache_limit = self.config.probing.cache_limit_bytes();
        if caching && self.prober.cache.relieve_pressure(cache_limit) {
            log::info!(target: targets::PROBING, "Cache cleared");
        }

        let start = Instant::now();
        let assigned = self.prober.stats.assigned;
        let limit = -i64::from(self.config.probing.limit.value);
        let atom_count = self.atom_count() as Atom;

        self.prober.counter = 0;
        let mut outcome = ProbeOutcome::Complete;

        for offset in 0..atom_count {
            let atom = (self.prober.stopped_at + offset) % atom_count;

            if self.prober.counter < limit {
                self.prober.stopped_at = atom;
                outcome = ProbeOutcome::Suspended;
                break;
            }

            if self.inconsistent() {
                break;
            }

            if self.value_of(atom).is_some() || self.was_eliminated(atom) {
                if caching {
                    self.prober.cache.evict(CLiteral::new(atom, true));
                    self.prober.cache.evict(CLiteral::new(atom, false));
                }
                continue;
            }

            if self.checkpoint() {
                log::info!(target: targets::PROBING, "Interrupted at {atom}");
                self.prober.stopped_at = atom;
                outcome = ProbeOutcome::Interrupted;
                break;
            }

            self.process(atom)?;
        }

        if outcome == ProbeOutcome::Complete {
            self.prober.stopped_at = 0;
        }

        self.prober.counter = -self.prober.counter;
        if self.prober.stats.assigned == assigned {
            self.prober.counter = self.prober.counter.saturating_mul(2);
        }

        if caching && self.prober.cache.relieve_pressure(cache_limit) {
            log::info!(target: targets::PROBING, "Cache cleared");
        }
        self.prober.free_scratch();

        let elapsed = start.elapsed();
        self.prober.stats.passes += 1;
        self.prober.stats.time += elapsed;

        log::info!(target: targets::PROBING,
            "probing-assigned {} cost {} stopped-at {} time {:.2}",
            self.prober.stats.assigned - assigned,
            self.prober.counter,
            self.prober.stopped_at,
            elapsed.as_secs_f64(),
        );

        Ok(outcome)
    }

    /// Probes both literals of `atom`, together with the binary neighbours of the negative literal, if configured.
    ///
    /// The cost of processing is waived if some literal was asserted.
    ///
    /// Requires the context to be fully propagated, outside of any scope.
    /// Returns without doing anything if the context is inconsistent or the atom has a value.
    pub fn process(&mut self, atom: Atom) -> Result<(), ErrorKind> {
        self.require_base()?;
        if self.inconsistent() || self.value_of(atom).is_some() {
            return Ok(());
        }

        let counter = self.prober.counter;
        let assigned = self.prober.stats.assigned;

        self.process_core(atom)?;

        if self.prober.stats.assigned > assigned {
            self.prober.counter = counter;
        }
        Ok(())
    }

    fn process_core(&mut self, atom: Atom) -> Result<(), ErrorKind> {
        log::trace!(target: targets::PROBING, "Processing {atom} with cost {}", -self.prober.counter);

        let literal = CLiteral::new(atom, true);
        self.prober.counter -= 1;

        self.push();
        self.assign(literal, AssignmentSource::Free);
        let start = self.trail.len();
        self.propagate_speculation()?;

        if self.inconsistent() {
            self.pop(1)?;
            return self.assert_failed(literal);
        }

        self.prober.implied.clear();
        self.prober
            .implied
            .extend(self.trail.assignments_since(start).iter().copied());
        self.cache_implied(literal, start);
        self.pop(1)?;

        if !self.try_literal(-literal, true)? {
            return Ok(());
        }

        if self.config.probing.binary.value {
            let mut neighbours = std::mem::take(&mut self.prober.neighbours);
            neighbours.clear();
            neighbours.extend(self.watches.list(-literal).iter().filter_map(|watch| match watch {
                Watch::Binary { literal: other, .. } if literal.index() <= other.index() => {
                    Some(*other)
                }
                _ => None,
            }));

            for &neighbour in &neighbours {
                if self.value_of_literal(neighbour).is_some() {
                    continue;
                }
                if !self.try_literal(neighbour, false)? || self.inconsistent() {
                    break;
                }
            }

            self.prober.neighbours = neighbours;
        }

        Ok(())
    }

    /// Tries `literal`, asserting each literal implied by both `literal` and the atom being processed, or the negation of `literal` if `literal` fails.
    ///
    /// The literals implied by `literal` are taken from the cache, if available and `update_cache` is false.
    /// Otherwise, `literal` is propagated within a scope and, if `update_cache` is true, the literals implied are cached.
    ///
    /// Returns true if the context is consistent and `literal` did not fail.
    pub fn try_literal(&mut self, literal: CLiteral, update_cache: bool) -> Result<bool, ErrorKind> {
        self.require_base()?;
        if self.inconsistent() {
            return Ok(false);
        }
        if self.value_of_literal(literal).is_some() {
            return Ok(!self.inconsistent());
        }

        self.prober.to_assert.clear();

        let cached = match !update_cache && self.config.probing.cache.value {
            true => self.prober.cache.implied_by(literal),
            false => None,
        };

        match cached {
            Some(implied) => {
                log::trace!(target: targets::PROBING, "Cache hit on {literal}");
                self.prober.to_assert.extend(
                    implied
                        .iter()
                        .filter(|implied| self.prober.implied.contains(*implied)),
                );
            }

            None => {
                self.push();
                self.assign(literal, AssignmentSource::Free);
                self.prober.counter -= 1;
                let start = self.trail.len();
                self.propagate_speculation()?;

                if self.inconsistent() {
                    self.pop(1)?;
                    self.assert_failed(literal)?;
                    return Ok(false);
                }

                self.prober.to_assert.extend(
                    self.trail
                        .assignments_since(start)
                        .iter()
                        .filter(|implied| self.prober.implied.contains(*implied)),
                );

                if update_cache {
                    self.cache_implied(literal, start);
                }
                self.pop(1)?;
            }
        }

        let to_assert = std::mem::take(&mut self.prober.to_assert);
        for &implied in &to_assert {
            if self.value_of_literal(implied).is_none() {
                self.prober.stats.assigned += 1;
            }
            log::trace!(target: targets::PROBING, "Asserting {implied} from {literal}");
            self.assign(implied, AssignmentSource::Free);
        }
        self.prober.to_assert = to_assert;

        self.propagate()?;
        Ok(!self.inconsistent())
    }

    /// Caches the literals on the trail from `start` as implied by `literal`, if caching is configured.
    fn cache_implied(&mut self, literal: CLiteral, start: usize) {
        if !self.config.probing.cache.value {
            return;
        }
        let limit = self.config.probing.cache_limit_bytes();
        let implied = self.trail.assignments_since(start);
        if !self.prober.cache.store(literal, implied, limit) {
            log::trace!(target: targets::PROBING, "Cache full, {literal} not cached");
        }
    }

    /// Propagates within the scope of a speculation, closing the scope if propagation fails.
    fn propagate_speculation(&mut self) -> Result<(), ErrorKind> {
        if let Err(e) = self.propagate() {
            self.pop(1)?;
            return Err(e);
        }
        Ok(())
    }

    /// Asserts the negation of a failed literal, outside of any scope.
    fn assert_failed(&mut self, literal: CLiteral) -> Result<(), ErrorKind> {
        log::trace!(target: targets::PROBING, "Failed literal {literal}");
        if self.value_of_literal(-literal).is_none() {
            self.prober.stats.assigned += 1;
        }
        self.assign(-literal, AssignmentSource::Free);
        self.propagate()
    }

    fn require_base(&self) -> Result<(), err::StateError> {
        if self.trail.level() > 0 {
            return Err(err::StateError::NotAtBase);
        }
        if !self.trail.is_propagated() && !self.inconsistent() {
            return Err(err::StateError::Unpropagated);
        }
        Ok(())
    }
}
