#![no_main]

use libfuzzer_sys::fuzz_target;
use testig::PanicMatcher;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Arbitrary patterns must compile or be rejected, never panic
        if let Ok(matcher) = PanicMatcher::regexp(s) {
            let _ = matcher.matches(s);
            let _ = matcher.describe();
        }
    }
});
