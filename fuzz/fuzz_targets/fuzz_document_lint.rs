//! Fuzz target for document parsing and evaluation.
//!
//! Goal: parsing and linting should **never panic** on any input.
//! They may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_document_lint
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use speclint_app::{LintInput, parse_document, run_lint};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(document) = parse_document(text, None) else {
        return;
    };
    let _ = run_lint(LintInput {
        document: &document,
        config_text: "",
        overrides: Default::default(),
    });
});
