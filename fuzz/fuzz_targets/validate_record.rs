#![no_main]

use libfuzzer_sys::fuzz_target;
use tenzi::validate;

/// Structural validation over arbitrary JSON.
///
/// Must never panic, and a report is valid exactly when it carries no errors.
fuzz_target!(|data: &[u8]| {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        let report = validate(&value);
        assert_eq!(report.is_valid, report.errors.is_empty());

        // Wrapping the same value in an array is never a valid record
        let wrapped = serde_json::Value::Array(vec![value]);
        assert!(!validate(&wrapped).is_valid);
    }
});
