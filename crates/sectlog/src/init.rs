//! Backend initialization and the process-wide severity threshold.
//!
//! Provides a single explicit initialization point for the shared
//! `tracing` subscriber all section loggers emit through.

use std::sync::{Once, OnceLock};

use crate::level::Level;
use tracing_subscriber::{
    layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Capture mode for deterministic testing
    Test,
}

impl Profile {
    pub(crate) fn default_directive(self) -> &'static str {
        match self {
            Profile::Development => "debug",
            Profile::Production => "info",
            Profile::Test => "trace",
        }
    }
}

static INIT_ONCE: Once = Once::new();
static LEVEL_HANDLE: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

pub(crate) fn register_level_handle(handle: reload::Handle<EnvFilter, Registry>) {
    let _ = LEVEL_HANDLE.set(handle);
}

pub(crate) fn env_or(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Initialize the shared logging backend.
///
/// This function should be called once at application startup, before any
/// section logger emits. Later calls are no-ops. The severity threshold
/// starts at the profile default unless `RUST_LOG` overrides it, and can be
/// changed at runtime with [`set_level`].
///
/// # Profiles
///
/// - **Development**: Human-readable logs with debug threshold
/// - **Production**: JSON structured logs with info threshold
/// - **Test**: Capture mode for test assertions
///
/// # Example
///
/// ```
/// use sectlog::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let (filter, handle) = reload::Layer::new(env_or(profile.default_directive()));
        match profile {
            Profile::Development => {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(tracing_subscriber::fmt::layer())
                    .init();
            }
            Profile::Production => {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(tracing_subscriber::fmt::layer().json())
                    .init();
            }
            Profile::Test => {
                // Capture is installed separately via init_capture()
                tracing_subscriber::registry().with(filter).init();
            }
        }
        register_level_handle(handle);
    });
}

/// Set the minimum severity emitted by all section loggers.
///
/// Process-wide: takes effect immediately for subsequent calls on every
/// instance, with no effect on lines already emitted. Calling this before
/// the backend is initialized is a no-op, as is a failed reload.
pub fn set_level(level: Level) {
    if let Some(handle) = LEVEL_HANDLE.get() {
        handle.reload(EnvFilter::new(level.as_str())).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        // Multiple calls should not panic
        init(Profile::Test);
        init(Profile::Test);
        init(Profile::Test);
    }

    #[test]
    fn test_profile_equality() {
        assert_eq!(Profile::Development, Profile::Development);
        assert_ne!(Profile::Development, Profile::Production);
    }

    #[test]
    fn test_profile_default_directives() {
        assert_eq!(Profile::Development.default_directive(), "debug");
        assert_eq!(Profile::Production.default_directive(), "info");
        assert_eq!(Profile::Test.default_directive(), "trace");
    }
}
