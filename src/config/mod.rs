/*!
Configuration of a context.

All configuration for a context is contained within a [Config], and procedures read the configuration from the context when called.
So, revisions to the configuration of a context take effect from the next call to a procedure.

Options may be set directly, or by name:

```rust
# use otter_simplify::config::Config;
let mut config = Config::default();
assert!(config.set("probing_limit", "1000").is_ok());
assert_eq!(config.probing.limit.value, 1000);

assert!(config.set("probing_binary", "false").is_ok());
assert!(!config.probing.binary.value);

assert!(config.set("probing_vigour", "11").is_err());
```
*/

mod config_option;
pub use config_option::ConfigOption;

pub mod probing;
use probing::ProbingConfig;

use crate::types::err::ConfigError;

/// The primary configuration structure.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Configuration of probing.
    pub probing: ProbingConfig,
}

impl Config {
    /// Sets the option named `name` to the value read from `value`.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let probing = &mut self.probing;
        match name {
            n if n == probing.enabled.name => probing.enabled.set_from_str(value),
            n if n == probing.limit.name => probing.limit.set_from_str(value),
            n if n == probing.cache.name => probing.cache.set_from_str(value),
            n if n == probing.binary.name => probing.binary.set_from_str(value),
            n if n == probing.cache_limit.name => probing.cache_limit.set_from_str(value),
            _ => {
                log::error!("Unknown option: {name}");
                Err(ConfigError::UnknownOption(name.to_string()))
            }
        }
    }
}
