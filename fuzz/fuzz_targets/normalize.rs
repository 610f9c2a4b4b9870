//! Fuzz target for the buffer normalization pipeline.
//!
//! # Invariants
//!
//! - The normalized buffer always starts with the protected prefix
//! - After canonicalization only ASCII digits follow the prefix
//! - The national part never exceeds the country's cap
//! - Paste outcomes obey the same rules and keep the caret inside the buffer

#![no_main]

use arbitrary::Arbitrary;
use input_core::{
    SelectionRange, apply_paste, canonicalize, digits_only, enforce_max_length,
    max_national_length, normalize, protected_prefix,
};
use libfuzzer_sys::fuzz_target;
use phone_input::{Country, Directory};

#[derive(Debug, Arbitrary)]
struct Input {
    country: u8,
    proposed: String,
    previous_digits: String,
    pasted: String,
    selection: (u8, u8),
}

fn check_buffer(buffer: &str, country: &Country) {
    let prefix = protected_prefix(country.dial_code);
    let rest = buffer
        .strip_prefix(prefix.as_str())
        .unwrap_or_else(|| panic!("{buffer:?} lost prefix {prefix:?}"));
    assert!(
        rest.bytes().all(|b| b.is_ascii_digit()),
        "non-digit national part in {buffer:?}"
    );
    let max = max_national_length(country);
    if max > 0 {
        assert!(rest.len() <= max, "{buffer:?} exceeds cap {max}");
    }
}

fuzz_target!(|input: Input| {
    let all = Directory::global().all();
    let country = &all[input.country as usize % all.len()];
    let prefix = protected_prefix(country.dial_code);

    let previous = format!("{prefix}{}", digits_only(&input.previous_digits));
    let previous = canonicalize(&enforce_max_length(previous, country), country);
    check_buffer(&previous, country);

    let normalized = normalize(&input.proposed, country, &previous);
    assert!(
        normalized.starts_with(prefix.as_str()),
        "{:?} normalized to {normalized:?} without prefix",
        input.proposed
    );
    let committed = canonicalize(&enforce_max_length(normalized, country), country);
    check_buffer(&committed, country);

    let (a, b) = input.selection;
    let selection = SelectionRange::new(a as usize, b as usize).clamped(committed.len());
    let outcome = apply_paste(&input.pasted, &committed, selection, country);
    check_buffer(&outcome.buffer, country);
    assert!(outcome.caret <= outcome.buffer.len());
});
