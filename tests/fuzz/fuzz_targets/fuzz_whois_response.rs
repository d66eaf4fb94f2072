#![no_main]
use libfuzzer_sys::fuzz_target;
use rpsl_parser::{ErrorPolicy, RpslParser};
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        let parser = RpslParser::new()
            .error_policy(ErrorPolicy::SkipMalformed)
            .validate_rfc2622(true);
        if let Ok(response) = parser.parse_whois_response(s) {
            let _ = response.to_string();
        }
    }
});
