//! Severity levels recognised by section loggers.

use std::fmt;

use tracing_subscriber::filter::LevelFilter;

/// Severity of a log line, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Detailed trace output.
    Trace,
    /// Diagnostic information useful during development.
    Debug,
    /// General informational messages.
    Info,
    /// Failures that require attention.
    Error,
}

impl Level {
    /// Filter directive understood by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Mappings onto the backend are kept exhaustive so a new level cannot
// silently fall through.

impl From<Level> for tracing::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => tracing::Level::TRACE,
            Level::Debug => tracing::Level::DEBUG,
            Level::Info => tracing::Level::INFO,
            Level::Error => tracing::Level::ERROR,
        }
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        LevelFilter::from_level(tracing::Level::from(level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_order_by_verbosity() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Error);
    }

    #[test]
    fn test_backend_mapping_is_total() {
        assert_eq!(tracing::Level::from(Level::Trace), tracing::Level::TRACE);
        assert_eq!(tracing::Level::from(Level::Debug), tracing::Level::DEBUG);
        assert_eq!(tracing::Level::from(Level::Info), tracing::Level::INFO);
        assert_eq!(tracing::Level::from(Level::Error), tracing::Level::ERROR);
        assert_eq!(LevelFilter::from(Level::Trace), LevelFilter::TRACE);
        assert_eq!(LevelFilter::from(Level::Error), LevelFilter::ERROR);
    }

    #[test]
    fn test_directive_strings() {
        assert_eq!(Level::Trace.as_str(), "trace");
        assert_eq!(Level::Error.to_string(), "error");
    }
}
