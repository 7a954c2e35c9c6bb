//! Fuzz target for column alias generation.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_column_alias
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quarry_driver::build_column_alias;

#[derive(Debug, Arbitrary)]
struct FuzzAlias {
    max: Option<u8>,
    prefix: String,
    column: String,
}

fuzz_target!(|input: FuzzAlias| {
    let max = input.max.map(usize::from);
    let alias = build_column_alias(max, &input.prefix, &input.column);
    let candidate = format!("{}_{}", input.prefix, input.column);

    match max {
        Some(max) if max > 0 && candidate.chars().count() > max => {
            assert_eq!(alias.chars().count(), max);
        }
        _ => assert_eq!(alias, candidate),
    }
});
