// Process-wide severity threshold behavior.
//
// Kept in its own test binary: set_level mutates global state, so these
// steps run as one sequence instead of racing parallel tests.

use sectlog::test_capture::init_capture;
use sectlog::{set_level, Level, SectionLogger};

#[test]
fn test_set_level_gates_all_sections_process_wide() {
    // Before init there is nothing to reconfigure; must not panic.
    set_level(Level::Error);

    let capture = init_capture();
    let build = SectionLogger::new("Build");
    let net = SectionLogger::new("Net");

    build.info("visible under default threshold");
    capture.assert_line(Level::Info, "[Build] visible under default threshold");

    set_level(Level::Error);

    build.info("suppressed info");
    net.debug("suppressed debug");
    build.trace("suppressed trace");
    net.error("errors still flow");

    assert!(!capture.contains_line(Level::Info, "[Build] suppressed info"));
    assert!(!capture.contains_line(Level::Debug, "[Net] suppressed debug"));
    assert!(!capture.contains_line(Level::Trace, "[Build] suppressed trace"));
    capture.assert_line(Level::Error, "[Net] errors still flow");

    // Lowering the threshold re-enables emission for every instance.
    set_level(Level::Trace);

    net.trace("visible again");
    capture.assert_line(Level::Trace, "[Net] visible again");
}
