#![no_main]
use libfuzzer_sys::fuzz_target;
use taglog::{Config, Logger};

fuzz_target!(|data: &str| {
    // Any parseable config must yield a logger without panicking
    if let Ok(config) = Config::from_toml(data) {
        let _ = Logger::from_config("fuzz", &config);
        for tag in config.tags.keys() {
            let _ = config.for_tag(tag).parse_level();
        }
    }
});
