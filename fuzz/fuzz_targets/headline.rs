#![no_main]

use libfuzzer_sys::fuzz_target;

use veracity::headline::parse::first_h1;

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let html = String::from_utf8_lossy(data);

    // The parser should never panic regardless of input
    if let Some(headline) = first_h1(&html) {
        // Whitespace is collapsed and blank headings are dropped
        assert!(!headline.is_empty());
        assert!(!headline.contains("  "));
        assert!(!headline.contains('\n'));
    }
});
