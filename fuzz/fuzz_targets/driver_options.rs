//! Fuzz target for driver option building.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_driver_options
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quarry_driver::{BuildOptions, DriverOptions};

#[derive(Debug, Arbitrary)]
struct FuzzOptions {
    url: Option<String>,
    explicit: Vec<(String, String)>,
    use_sid: bool,
}

fuzz_target!(|input: FuzzOptions| {
    let mut options = DriverOptions::new();
    if let Some(url) = input.url {
        options.insert("url", url);
    }
    for (key, value) in &input.explicit {
        options.insert(key.as_str(), value.as_str());
    }

    let before = options.clone();
    if let Ok(built) = options.build(BuildOptions::new().use_sid(input.use_sid)) {
        // Explicit options survive the merge unchanged.
        for (key, value) in before.iter() {
            assert_eq!(built.get(key), Some(value));
        }
    }
    assert_eq!(options, before);
});
