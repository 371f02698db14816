/// Counts for various things which count, roughly.
#[derive(Default)]
pub struct Counters {
    /// A count of every literal examined by BCP.
    pub propagations: usize,

    /// A count of every conflict noted.
    pub conflicts: usize,

    /// A count of every scope pushed.
    pub scopes: usize,
}
