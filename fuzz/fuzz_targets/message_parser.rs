//! Fuzz target for line parsing and dispatch
//!
//! Feeds randomly generated input through the full parse-and-dispatch path
//! and ensures it never panics; tolerance over strictness is the crate's
//! core contract.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;
use tmi_proto::{Dispatcher, ParsedMessage};

fuzz_target!(|data: &[u8]| {
    // Only fuzz valid UTF-8 strings to focus on protocol-level issues
    if let Ok(input) = str::from_utf8(data) {
        // Skip very long inputs; tag sections cap at 8 KiB on real servers
        if input.len() > 9000 {
            return;
        }

        // Parsing and dispatch are total - neither may panic
        let msg = ParsedMessage::parse(input);
        let dispatcher = Dispatcher::new();
        let events = dispatcher.dispatch(&msg);
        assert!(events.len() <= 2);
    }
});
