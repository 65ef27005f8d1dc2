//! Fuzz target for host-supplied unit listings.
//!
//! Goal: parsing should **never panic** on any input. Errors are fine.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_unit_listing
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = prolayout_repo::fuzz::parse_units(text);
    }
});
