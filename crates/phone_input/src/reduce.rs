//! Pure transition function of the phone input.
//!
//! `reduce` never touches observers, the deferred queue or the host control;
//! it maps `(state, list, edit)` to the next state plus the notifications the
//! shell must deliver.

use countries::{Country, CountryList, Directory};
use input_core::{
    SelectionRange, apply_paste, build_buffer, canonicalize, caret_after_edit, detect_autofill,
    enforce_max_length, extract_national_digits, normalize, protected_prefix_length,
    truncate_national,
};

/// The mutable part of a phone input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhoneState {
    /// Active country; always a member of the filtered list (or the directory
    /// fallback when that list is empty).
    pub country: &'static Country,
    /// `"+<dial> <digits>"`.
    pub buffer: String,
    /// Caret to apply once the host has rendered `buffer`.
    pub caret_target: Option<usize>,
}

impl PhoneState {
    /// Length of the protected prefix of the current buffer.
    #[inline]
    pub fn protected_len(&self) -> usize {
        protected_prefix_length(self.country.dial_code)
    }

    /// National digits of the current buffer.
    pub fn national_digits(&self) -> String {
        extract_national_digits(&self.buffer, self.country.dial_code)
    }
}

/// A value-level edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edit<'a> {
    /// The host's text after its default editing; `caret` is its caret, if known.
    TextChanged { text: &'a str, caret: Option<usize> },
    /// A paste over `selection`; the host's default paste is suppressed.
    Pasted {
        text: &'a str,
        selection: SelectionRange,
    },
    /// A country picked from the list (or set programmatically).
    CountrySelected { iso2: &'a str },
    /// Reset to the bare prefix.
    Clear,
    /// Controlled-mode value pushed by the owner.
    External { value: &'a str },
}

/// Result of a committed edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: PhoneState,
    /// Deliver `country_changed` (before `value_changed`).
    pub country_changed: bool,
    /// Deliver `value_changed`.
    pub value_changed: bool,
}

impl Transition {
    fn value(state: PhoneState) -> Self {
        Self {
            state,
            country_changed: false,
            value_changed: true,
        }
    }

    fn country(state: PhoneState) -> Self {
        Self {
            state,
            country_changed: true,
            value_changed: true,
        }
    }

    fn silent(state: PhoneState) -> Self {
        Self {
            state,
            country_changed: false,
            value_changed: false,
        }
    }
}

/// Compute the next state; `None` means the edit changes nothing.
pub fn reduce(
    state: &PhoneState,
    list: &CountryList,
    directory: &Directory,
    edit: Edit<'_>,
) -> Option<Transition> {
    match edit {
        Edit::TextChanged { text, caret } => Some(text_changed(state, list, directory, text, caret)),
        Edit::Pasted { text, selection } => Some(pasted(state, text, selection)),
        Edit::CountrySelected { iso2 } => country_selected(state, list, iso2),
        Edit::Clear => Some(Transition::value(PhoneState {
            country: state.country,
            buffer: build_buffer(state.country, ""),
            caret_target: Some(state.protected_len()),
        })),
        Edit::External { value } => external(state, value),
    }
}

fn text_changed(
    state: &PhoneState,
    list: &CountryList,
    directory: &Directory,
    text: &str,
    caret: Option<usize>,
) -> Transition {
    if let Some(autofill) = detect_autofill(text, state.country, list, directory) {
        let same_country = autofill.country.is(state.country.iso2);
        let next = PhoneState {
            caret_target: Some(autofill.buffer.len()),
            country: autofill.country,
            buffer: autofill.buffer,
        };
        if same_country {
            return Transition::value(next);
        }
        log::debug!(
            target: "phone_input.reduce",
            "autofill switched {} -> {}",
            state.country.iso2,
            next.country.iso2
        );
        return Transition::country(next);
    }

    let country = state.country;
    let normalized = enforce_max_length(normalize(text, country, &state.buffer), country);
    let buffer = canonicalize(&normalized, country);
    let caret_target = Some(caret_after_edit(text, caret, &buffer, country));

    Transition::value(PhoneState {
        country,
        buffer,
        caret_target,
    })
}

fn pasted(state: &PhoneState, text: &str, selection: SelectionRange) -> Transition {
    let outcome = apply_paste(text, &state.buffer, selection, state.country);
    Transition::value(PhoneState {
        country: state.country,
        buffer: outcome.buffer,
        caret_target: Some(outcome.caret),
    })
}

fn country_selected(state: &PhoneState, list: &CountryList, iso2: &str) -> Option<Transition> {
    let country = list.find(iso2)?;
    if country.is(state.country.iso2) {
        return None;
    }

    let digits = state.national_digits();
    let buffer = build_buffer(country, truncate_national(&digits, country));
    let caret_target = Some(buffer.len());

    Some(Transition::country(PhoneState {
        country,
        buffer,
        caret_target,
    }))
}

fn external(state: &PhoneState, value: &str) -> Option<Transition> {
    let digits = extract_national_digits(value, state.country.dial_code);
    let buffer = build_buffer(state.country, truncate_national(&digits, state.country));
    if buffer == state.buffer {
        return None;
    }
    Some(Transition::silent(PhoneState {
        country: state.country,
        buffer,
        caret_target: state.caret_target,
    }))
}
