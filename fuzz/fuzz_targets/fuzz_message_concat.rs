#![no_main]
use libfuzzer_sys::fuzz_target;
use taglog::options::{level, sink};
use taglog::{Level, Logger, MemorySink};

fuzz_target!(|data: (&str, i64, &str)| {
    let (a, n, b) = data;
    let out = MemorySink::new();
    let logger = Logger::with_options(a, [sink(out.clone()), level(Level::Debug)]);
    logger.info(&[&a, &n, &b]);
    // One call, one terminating newline
    assert!(out.contents().ends_with('\n'));
});
