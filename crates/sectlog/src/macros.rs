//! Format-style logging macros
//!
//! These macros give section loggers printf-style variadic formatting on
//! top of the single-value methods.

/// Log at an explicit level with format arguments.
///
/// # Example
///
/// ```
/// use sectlog::{section_log, Level, SectionLogger};
///
/// let log = SectionLogger::new("Build");
/// section_log!(log, Level::Info, "starting {}", "compile");
/// ```
#[macro_export]
macro_rules! section_log {
    ($logger:expr, $level:expr, $($arg:tt)*) => {
        $logger.log($level, ::core::format_args!($($arg)*))
    };
}

/// Log at trace level with format arguments.
///
/// # Example
///
/// ```
/// use sectlog::{section_trace, SectionLogger};
///
/// let log = SectionLogger::new("Net");
/// section_trace!(log, "frame {} of {}", 3, 9);
/// ```
#[macro_export]
macro_rules! section_trace {
    ($logger:expr, $($arg:tt)*) => {
        $logger.trace(::core::format_args!($($arg)*))
    };
}

/// Log at debug level with format arguments.
#[macro_export]
macro_rules! section_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(::core::format_args!($($arg)*))
    };
}

/// Log at info level with format arguments.
///
/// # Example
///
/// ```
/// use sectlog::{section_info, SectionLogger};
///
/// let log = SectionLogger::new("Build");
/// section_info!(log, "starting {}", "compile");
/// ```
#[macro_export]
macro_rules! section_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(::core::format_args!($($arg)*))
    };
}

/// Log at error level with format arguments.
#[macro_export]
macro_rules! section_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(::core::format_args!($($arg)*))
    };
}
