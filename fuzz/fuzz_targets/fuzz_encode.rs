#![no_main]
use libfuzzer_sys::fuzz_target;
use yamlish::{Value, encode};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(s) {
            if let Ok(value) = Value::from_json(&json) {
                let out = encode(&value);
                assert!(!out.ends_with('\n'));
                assert_eq!(out, encode(&value));
            }
        }
    }
});
