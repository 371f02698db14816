//! Configuration of probing.

use super::ConfigOption;

/// Bytes to a megabyte, for the cache limit.
pub const BYTES_PER_MEGABYTE: usize = 1024 * 1024;

/// Configuration for [probing](crate::procedures::probing).
#[derive(Clone, Debug)]
pub struct ProbingConfig {
    /// Permit probing.
    pub enabled: ConfigOption<bool>,

    /// The cost of a single pass, in speculative propagations, before the pass is suspended.
    pub limit: ConfigOption<u32>,

    /// Cache the literals implied by a probe, for reuse when probing related literals.
    pub cache: ConfigOption<bool>,

    /// Probe the literals reached by binary clauses from a probed atom.
    pub binary: ConfigOption<bool>,

    /// The size of the cache, in megabytes, above which caching stops and the cache is cleared.
    pub cache_limit: ConfigOption<u32>,
}

impl ProbingConfig {
    /// The cache limit, in bytes.
    pub fn cache_limit_bytes(&self) -> usize {
        (self.cache_limit.value as usize).saturating_mul(BYTES_PER_MEGABYTE)
    }
}

impl Default for ProbingConfig {
    fn default() -> Self {
        ProbingConfig {
            enabled: ConfigOption {
                name: "probing",
                min: false,
                max: true,
                value: true,
            },

            limit: ConfigOption {
                name: "probing_limit",
                min: 0,
                max: i32::MAX as u32,
                value: 5_000_000,
            },

            cache: ConfigOption {
                name: "probing_cache",
                min: false,
                max: true,
                value: true,
            },

            binary: ConfigOption {
                name: "probing_binary",
                min: false,
                max: true,
                value: true,
            },

            cache_limit: ConfigOption {
                name: "probing_cache_limit",
                min: 0,
                max: u32::MAX,
                value: 1024,
            },
        }
    }
}
