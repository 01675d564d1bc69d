//! Test capture mode for deterministic logging assertions
//!
//! This module provides a test-only subscriber layer that records every
//! emitted line in memory, so tests can assert on the rendered
//! `[section] message` text and its severity.

use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::Visit;
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{reload, EnvFilter, Layer};

use crate::init::{env_or, register_level_handle, Profile};
use crate::level::Level;

/// A captured log line with its rendered message text.
#[derive(Clone, Debug)]
pub struct CapturedLine {
    pub level: tracing::Level,
    pub target: String,
    pub message: String,
}

// The message field arrives as `format_args!` output, whose Debug
// rendering is the plain formatted text.
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        }
    }
}

/// Capture layer that collects rendered lines.
pub struct CaptureLayer {
    lines: Arc<Mutex<Vec<CapturedLine>>>,
}

impl CaptureLayer {
    pub fn new() -> (Self, LogCapture) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let layer = Self {
            lines: lines.clone(),
        };
        let capture = LogCapture { lines };
        (layer, capture)
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = MessageVisitor { message: None };
        event.record(&mut visitor);

        let captured = CapturedLine {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.message.unwrap_or_default(),
        };

        self.lines
            .lock()
            .map(|mut lines| lines.push(captured))
            .ok();
    }
}

/// Handle for inspecting captured lines in tests.
pub struct LogCapture {
    lines: Arc<Mutex<Vec<CapturedLine>>>,
}

impl LogCapture {
    /// All lines captured so far.
    pub fn lines(&self) -> Vec<CapturedLine> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Whether a line with exactly this severity and message was captured.
    pub fn contains_line(&self, level: Level, message: &str) -> bool {
        let level = tracing::Level::from(level);
        self.lines()
            .iter()
            .any(|l| l.level == level && l.message == message)
    }

    /// Assert that a line with exactly this severity and message was captured.
    ///
    /// # Panics
    ///
    /// Panics if no such line was captured.
    pub fn assert_line(&self, level: Level, message: &str) {
        assert!(
            self.contains_line(level, message),
            "Expected line level={} message={:?} not found in {} captured lines",
            level,
            message,
            self.lines().len()
        );
    }

    /// Count captured lines matching a predicate.
    pub fn count_lines<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedLine) -> bool,
    {
        self.lines().iter().filter(|l| predicate(l)).count()
    }

    /// Clear all captured lines.
    pub fn clear(&self) {
        self.lines.lock().map(|mut l| l.clear()).ok();
    }
}

impl Clone for LogCapture {
    fn clone(&self) -> Self {
        Self {
            lines: self.lines.clone(),
        }
    }
}

static GLOBAL_CAPTURE: OnceLock<LogCapture> = OnceLock::new();

/// Initialize capture mode and return the shared capture handle.
///
/// Installs the capture layer together with the same reloadable threshold
/// filter the standard [`crate::init`] path uses, so [`crate::set_level`]
/// works in tests. Safe to call from multiple tests in one process; they
/// all share the global capture instance.
///
/// # Example
///
/// ```
/// use sectlog::test_capture::init_capture;
/// use sectlog::{Level, SectionLogger};
///
/// let capture = init_capture();
/// SectionLogger::new("Build").info("ready");
/// capture.assert_line(Level::Info, "[Build] ready");
/// ```
pub fn init_capture() -> LogCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (filter, handle) =
                reload::Layer::new(env_or(Profile::Test.default_directive()));
            let (layer, capture) = CaptureLayer::new();
            tracing_subscriber::registry().with(filter).with(layer).init();
            register_level_handle(handle);
            capture
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_line_clone() {
        let line = CapturedLine {
            level: tracing::Level::INFO,
            target: "sectlog::tests".to_string(),
            message: "[Build] ready".to_string(),
        };

        let cloned = line.clone();
        assert_eq!(cloned.level, line.level);
        assert_eq!(cloned.message, line.message);
    }
}
