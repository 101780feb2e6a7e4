//! Configuration management for the relationship network analyzer

/// Default configuration for the relationship network analyzer
pub struct Config {
    /// Number of top-connected people reported
    pub central_limit: usize,

    /// Connection count at or below which a person counts as isolated
    pub isolation_threshold: usize,

    /// Hard cap on the number of simple paths enumerated per query
    pub enumeration_cap: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            central_limit: 5,
            isolation_threshold: 1,
            enumeration_cap: 10_000,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(central_limit: usize, isolation_threshold: usize, enumeration_cap: usize) -> Self {
        Self {
            central_limit,
            isolation_threshold,
            enumeration_cap,
        }
    }
}
