//! Fuzz target for the connection URL parser.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_connection_url
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use quarry_driver::parse_connection_url;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // The parser should never panic, only return errors
        if let Ok(parsed) = parse_connection_url(input) {
            assert!(input.contains("//"));
            assert!(input.contains('@'));
            assert_ne!(parsed.database.as_deref(), Some(""));
        }
    }
});
