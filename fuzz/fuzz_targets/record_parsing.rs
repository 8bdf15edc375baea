#![no_main]

use libfuzzer_sys::fuzz_target;
use tenzi::{validate, Hymn, HymnInfo};

/// Typed record parsing.
///
/// Anything that parses as a `Hymn` with a title and non-empty verses must
/// also pass structural validation, and its derived index entry must agree
/// with the record.
fuzz_target!(|data: &[u8]| {
    let Ok(hymn) = serde_json::from_slice::<Hymn>(data) else {
        return;
    };

    let info = HymnInfo::from_hymn(&hymn, "fuzz.json");
    assert_eq!(info.verse_count, hymn.verses.len());
    assert_eq!(info.has_chorus, hymn.has_chorus());

    let well_formed = !hymn.title.is_empty()
        && !hymn.verses.is_empty()
        && hymn.verses.iter().all(|v| !v.text.is_empty());
    let Ok(value) = serde_json::to_value(&hymn) else {
        return;
    };
    if well_formed {
        assert!(validate(&value).is_valid);
    }

    // Sung order never drops a verse
    let sung = hymn.sung_order();
    assert!(sung.len() >= hymn.verses.len());
});
