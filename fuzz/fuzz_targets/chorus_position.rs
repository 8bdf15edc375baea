#![no_main]

use libfuzzer_sys::fuzz_target;
use tenzi::ChorusPosition;

/// Chorus position strings.
///
/// Any accepted string must display as a canonical form that parses back to
/// the same position.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(position) = s.parse::<ChorusPosition>() {
            let canonical = position.to_string();
            assert_eq!(canonical.parse::<ChorusPosition>(), Ok(position));
            assert_ne!(position, ChorusPosition::AfterVerse(0));
        }
    }
});
