//! Fuzz target for the phone input machine driven through a headless control.
//!
//! # Strategy
//!
//! - Random sequences of typing, replacement, keys, pastes, selections,
//!   country picks, clears and external values
//! - Deferred tasks are drained after some events and held across others
//!
//! # Invariants
//!
//! - The buffer always starts with the current country's protected prefix
//! - Only ASCII digits follow the prefix, within the country's cap
//! - The current country is always in the filtered list
//! - Locked inputs never change their buffer

#![no_main]

use arbitrary::Arbitrary;
use input_core::{MemoryControl, max_national_length, protected_prefix};
use libfuzzer_sys::fuzz_target;
use phone_input::{Key, KeyOutcome, Modifiers, PhoneInput, PhoneInputConfig, SelectionRange};

const KEYS: &[&str] = &[
    "Backspace", "Delete", "ArrowLeft", "ArrowRight", "Home", "End", "a", "c", "x", "5", "+",
];
const COUNTRIES: &[&str] = &["US", "GB", "DE", "BD", "CA", "FR", "JP", "IN", "zz", ""];

#[derive(Debug, Arbitrary)]
enum Op {
    Type(String),
    Replace(String),
    Key { key: u8, ctrl: bool, shift: bool },
    Paste(String),
    Select(u8, u8),
    Focus,
    Click,
    Country(u8),
    Clear,
    External(String),
    Drain,
}

#[derive(Debug, Arbitrary)]
struct Input {
    initial_value: Option<String>,
    initial_country: Option<u8>,
    only_na: bool,
    controlled: bool,
    disabled: bool,
    ops: Vec<Op>,
}

fn check(input: &PhoneInput) {
    let country = input.country();
    let prefix = protected_prefix(country.dial_code);
    let buffer = input.buffer();
    let rest = buffer
        .strip_prefix(prefix.as_str())
        .unwrap_or_else(|| panic!("{buffer:?} lost prefix {prefix:?}"));
    assert!(rest.bytes().all(|b| b.is_ascii_digit()), "{buffer:?}");
    let max = max_national_length(country);
    if max > 0 {
        assert!(rest.len() <= max, "{buffer:?} exceeds cap {max}");
    }
    assert!(
        input.countries().is_empty() || input.countries().find(country.iso2).is_some(),
        "{} is not in the filtered list",
        country.iso2
    );
}

fuzz_target!(|data: Input| {
    let mut config = PhoneInputConfig {
        initial_value: data.initial_value,
        initial_country: data
            .initial_country
            .map(|i| COUNTRIES[i as usize % COUNTRIES.len()].to_string()),
        controlled: data.controlled,
        disabled: data.disabled,
        ..PhoneInputConfig::default()
    };
    if data.only_na {
        config.filter.only_countries = vec!["US".into(), "CA".into(), "MX".into()];
    }

    let mut input = PhoneInput::new(config);
    let mut control = MemoryControl::new(input.buffer());
    let mounted = input.buffer().to_string();
    check(&input);

    for op in data.ops {
        let mut drain = true;
        match op {
            Op::Type(text) => {
                control.insert_text(&text);
                input.text_changed(control.value(), Some(control.caret()));
            }
            Op::Replace(text) => {
                control.replace_all(&text);
                input.text_changed(control.value(), Some(control.caret()));
            }
            Op::Key { key, ctrl, shift } => {
                let key = Key::from_key_name(KEYS[key as usize % KEYS.len()]);
                let mods = Modifiers {
                    ctrl,
                    shift,
                    ..Modifiers::NONE
                };
                match input.key_pressed(key, mods, control.selection()) {
                    KeyOutcome::Default => {
                        match key {
                            Key::Backspace => control.backspace(),
                            Key::Delete => control.delete(),
                            Key::Character(ch) if !ctrl => {
                                control.insert_text(ch.encode_utf8(&mut [0u8; 4]))
                            }
                            _ => {}
                        }
                        input.text_changed(control.value(), Some(control.caret()));
                    }
                    KeyOutcome::Suppress => {}
                    KeyOutcome::Select(sel) => control.set_selection(sel),
                }
            }
            Op::Paste(text) => input.pasted(&text, control.selection()),
            Op::Select(a, b) => {
                control.set_selection(SelectionRange::new(a as usize, b as usize));
                if let Some(fixed) = input.selection_changed(control.selection()) {
                    control.set_selection(fixed);
                }
            }
            Op::Focus => input.focus(&mut control),
            Op::Click => input.clicked(),
            Op::Country(i) => input.country_selected(COUNTRIES[i as usize % COUNTRIES.len()]),
            Op::Clear => input.clear(),
            Op::External(value) => {
                input.set_external_value(&value);
                drain = false;
            }
            Op::Drain => {}
        }

        control.set_value(input.buffer());
        if drain {
            input.run_deferred(&mut control);
            control.set_value(input.buffer());
        }
        check(&input);
        if data.disabled && !data.controlled {
            assert_eq!(input.buffer(), mounted, "locked input changed");
        }
    }
});
