//! Section-tagged logging facade over `tracing`.
//!
//! Each [`SectionLogger`] carries a short label naming the subsystem it logs
//! for, and prefixes every line it emits with `[label] ` before handing it to
//! the process-wide subscriber. All instances share one backend, installed by
//! an explicit [`init`] call; the minimum severity emitted is process-wide
//! state adjusted at any time with [`set_level`].
//!
//! ```
//! use sectlog::{init, Profile, SectionLogger, section_info};
//!
//! init(Profile::Development);
//!
//! let log = SectionLogger::new("Build");
//! section_info!(log, "starting {}", "compile"); // emits: [Build] starting compile
//! log.error(404);                               // emits: [Build] 404
//! ```

pub mod init;
pub mod level;
mod macros;
pub mod section;
pub mod test_capture;

// Re-export commonly used types
pub use init::{init, set_level, Profile};
pub use level::Level;
pub use section::SectionLogger;
