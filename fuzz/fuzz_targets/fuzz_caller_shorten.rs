#![no_main]
use libfuzzer_sys::fuzz_target;
use taglog::caller::shorten;

fuzz_target!(|data: &str| {
    // The shortened name is always a substring of the input
    let short = shorten(data);
    assert!(data.contains(short.as_str()));
});
