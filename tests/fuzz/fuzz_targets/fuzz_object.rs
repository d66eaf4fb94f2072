#![no_main]
use libfuzzer_sys::fuzz_target;
use rpsl_parser::parse_rpsl_object;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(object) = parse_rpsl_object(s) {
            let _ = object.to_string();
            let _ = object.validate_rfc2622();
        }
    }
});
