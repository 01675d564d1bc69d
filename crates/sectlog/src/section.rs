//! The section logger facade.

use std::fmt;

use crate::level::Level;

/// A logger that tags every line with a fixed section label.
///
/// The label is stored verbatim at construction and prepended to each
/// message as `[section] `. All instances forward to the process-wide
/// backend installed by [`crate::init`], and are gated by the shared
/// severity threshold ([`crate::set_level`]).
///
/// # Example
///
/// ```
/// use sectlog::SectionLogger;
///
/// let log = SectionLogger::new("Net");
/// log.info("listener up");
/// log.error(404);
/// ```
#[derive(Debug, Clone)]
pub struct SectionLogger {
    section: String,
}

impl SectionLogger {
    /// Create a logger for the given section label. Any label is accepted.
    pub fn new(section: impl Into<String>) -> Self {
        Self {
            section: section.into(),
        }
    }

    /// The section label this logger tags lines with.
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Emit `message` at `level`, prefixed with the section label.
    ///
    /// One line is handed to the backend's sinks, subject to the current
    /// process-wide threshold. The format macros route through here, so
    /// `section_trace!(log, "{}", x)` and `log.trace(x)` render identically.
    pub fn log(&self, level: Level, message: impl fmt::Display) {
        match level {
            Level::Trace => tracing::trace!("[{}] {}", self.section, message),
            Level::Debug => tracing::debug!("[{}] {}", self.section, message),
            Level::Info => tracing::info!("[{}] {}", self.section, message),
            Level::Error => tracing::error!("[{}] {}", self.section, message),
        }
    }

    /// Emit `message` at trace level.
    pub fn trace(&self, message: impl fmt::Display) {
        self.log(Level::Trace, message);
    }

    /// Emit `message` at debug level.
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Level::Debug, message);
    }

    /// Emit `message` at info level.
    pub fn info(&self, message: impl fmt::Display) {
        self.log(Level::Info, message);
    }

    /// Emit `message` at error level.
    pub fn error(&self, message: impl fmt::Display) {
        self.log(Level::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_stored_verbatim() {
        let log = SectionLogger::new("  Build/Stage-1 ");
        assert_eq!(log.section(), "  Build/Stage-1 ");
    }

    #[test]
    fn test_empty_label_accepted() {
        let log = SectionLogger::new("");
        assert_eq!(log.section(), "");
    }

    #[test]
    fn test_clone_keeps_label() {
        let log = SectionLogger::new("Net");
        assert_eq!(log.clone().section(), "Net");
    }
}
