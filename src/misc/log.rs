/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided by the library.
The binary installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature, and so output may be narrowed by target, e.g. `RUST_LOG=probing=info`.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [BCP](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to a valuation
    pub const VALUATION: &str = "valuation";

    /// Logs related to [scopes](crate::procedures::scope)
    pub const SCOPE: &str = "scope";

    /// Logs related to the [cleaner](crate::procedures::cleaner)
    pub const CLEANER: &str = "cleaner";

    /// Logs related to [probing](crate::procedures::probing)
    pub const PROBING: &str = "probing";

    /// Logs related to reading a formula
    pub const BUILD: &str = "build";
}
