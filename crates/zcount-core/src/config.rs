//! Per-invocation run configuration.

use crate::counter::UNLIMITED;

/// Default corruption threshold: a single zero-byte is suspicious
pub const DEFAULT_LOWER: u64 = 1;

/// Settings collected from the command line before any source is scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of `-v` flags seen
    pub verbosity: u8,
    /// Stop counting after this many zero-bytes (0 = unlimited)
    pub upper: u64,
    /// Zero-byte count at which a source is reported as corrupted
    pub lower: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            verbosity: 0,
            upper: UNLIMITED,
            lower: DEFAULT_LOWER,
        }
    }
}

impl RunConfig {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the verbosity level
    pub fn verbosity(mut self, level: u8) -> Self {
        self.verbosity = level;
        self
    }

    /// Sets the upper limit on counted zero-bytes
    pub fn upper(mut self, upper: u64) -> Self {
        self.upper = upper;
        self
    }

    /// Sets the corruption threshold
    pub fn lower(mut self, lower: u64) -> Self {
        self.lower = lower;
        self
    }

    /// Threshold actually used for classification.
    ///
    /// A capped count can never exceed `upper`, so a larger `lower` is pulled
    /// down to `upper` whenever a cap is set.
    pub fn effective_lower(&self) -> u64 {
        if self.upper != UNLIMITED && self.lower > self.upper {
            self.upper
        } else {
            self.lower
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::new();
        assert_eq!(config.verbosity, 0);
        assert_eq!(config.upper, 0);
        assert_eq!(config.lower, 1);
    }

    #[test]
    fn test_builder() {
        let config = RunConfig::new().verbosity(2).upper(100).lower(3);
        assert_eq!(config.verbosity, 2);
        assert_eq!(config.upper, 100);
        assert_eq!(config.lower, 3);
    }

    #[test]
    fn test_effective_lower_clamps_to_upper() {
        assert_eq!(RunConfig::new().upper(5).lower(10).effective_lower(), 5);
        assert_eq!(RunConfig::new().upper(5).lower(5).effective_lower(), 5);
        assert_eq!(RunConfig::new().upper(5).lower(2).effective_lower(), 2);
    }

    #[test]
    fn test_effective_lower_unlimited_upper() {
        assert_eq!(RunConfig::new().lower(1000).effective_lower(), 1000);
    }
}
