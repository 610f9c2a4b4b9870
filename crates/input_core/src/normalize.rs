//! Edit normalizer: turns an arbitrary proposed buffer into a valid one.
//!
//! Hosts report the whole text after their default editing ran; this module
//! decides what the committed buffer becomes. The result always starts with
//! the protected prefix of the active country.

use crate::codec::{
    build_buffer, extract_national_digits, max_national_length, protected_prefix,
    protected_prefix_length, truncate_national,
};
use crate::selection::SelectionRange;
use crate::text::{clamp_to_char_boundary, digits_only};
use countries::{Country, CountryList, Directory};

/// Repair `proposed` so it carries `country`'s protected prefix.
///
/// 1. Already prefixed: accepted as-is.
/// 2. Empty or whitespace-only: the bare prefix.
/// 3. `+` followed by the dial code: prefix plus the remainder, leading
///    whitespace trimmed.
/// 4. Otherwise the digits of `proposed`; if they start with the dial code the
///    rest is kept, else the national digits of `previous` are restored.
pub fn normalize(proposed: &str, country: &Country, previous: &str) -> String {
    let prefix = protected_prefix(country.dial_code);

    if proposed.starts_with(&prefix) {
        return proposed.to_string();
    }

    if proposed.trim().is_empty() {
        return prefix;
    }

    if let Some(rest) = proposed
        .strip_prefix('+')
        .and_then(|r| r.strip_prefix(country.dial_code))
    {
        return prefix + rest.trim_start();
    }

    let digits = digits_only(proposed);
    if let Some(national) = digits.strip_prefix(country.dial_code) {
        return prefix + national;
    }

    log::trace!(
        target: "input_core.normalize",
        "rolling back unrecognized edit {proposed:?} for +{}",
        country.dial_code
    );
    prefix + &extract_national_digits(previous, country.dial_code)
}

/// Truncate the national digits to the country's cap, rebuilding the buffer
/// only when the cap is exceeded.
pub fn enforce_max_length(buffer: String, country: &Country) -> String {
    let max = max_national_length(country);
    if max == 0 {
        return buffer;
    }
    let digits = extract_national_digits(&buffer, country.dial_code);
    if digits.len() <= max {
        return buffer;
    }
    build_buffer(country, truncate_national(&digits, country))
}

/// Collapse a normalized buffer to `"+dial digits"`.
///
/// Separators and stray characters typed after the prefix are dropped, so the
/// committed buffer carries digits only after its single space.
pub fn canonicalize(buffer: &str, country: &Country) -> String {
    build_buffer(country, &extract_national_digits(buffer, country.dial_code))
}

/// Caret for a committed text edit.
///
/// `hint` is the host caret in `proposed` (end of `committed` if unknown).
/// When the edit was rewritten, the caret follows the number of national
/// digits that preceded it. The result is clamped to `[protected, len]`.
pub fn caret_after_edit(
    proposed: &str,
    hint: Option<usize>,
    committed: &str,
    country: &Country,
) -> usize {
    let protected = protected_prefix_length(country.dial_code);
    let len = committed.len();

    let caret = match hint {
        None => len,
        Some(hint) if proposed == committed => hint,
        Some(hint) => {
            let prefix = protected_prefix(country.dial_code);
            match proposed.strip_prefix(prefix.as_str()) {
                Some(rest) => {
                    let upto = clamp_to_char_boundary(rest, hint.saturating_sub(protected));
                    protected + rest[..upto].bytes().filter(u8::is_ascii_digit).count()
                }
                None => hint,
            }
        }
    };

    caret.clamp(protected.min(len), len)
}

/// `true` when `raw` looks like a full international number for some other
/// calling code than `country`'s.
pub fn is_autofill_candidate(raw: &str, country: &Country) -> bool {
    raw.starts_with('+')
        && !raw
            .strip_prefix('+')
            .is_some_and(|r| r.starts_with(country.dial_code))
}

/// A recognized autofill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Autofill {
    /// The country to switch to; always a member of the filtered list.
    pub country: &'static Country,
    /// Length-enforced buffer for `country`.
    pub buffer: String,
}

/// Detect a browser-supplied international number.
///
/// Returns `None` unless `raw` is an autofill candidate whose leading digits
/// resolve to a country present in `list`.
pub fn detect_autofill(
    raw: &str,
    current: &Country,
    list: &CountryList,
    directory: &Directory,
) -> Option<Autofill> {
    if !is_autofill_candidate(raw, current) {
        return None;
    }

    let guessed = directory.guess_from_leading_digits(raw)?;
    let Some(country) = list.find(guessed.iso2) else {
        log::debug!(
            target: "input_core.normalize",
            "autofill guessed {} which is not in the country list",
            guessed.iso2
        );
        return None;
    };

    let digits = digits_only(raw);
    let national = digits.get(country.dial_code.len()..).unwrap_or_default();
    let buffer = build_buffer(country, truncate_national(national, country));
    Some(Autofill { country, buffer })
}

/// Splice a paste into `buffer`.
///
/// Only the digits of `pasted` are used. A selection starting inside the
/// protected zone appends them to the existing national digits; otherwise
/// they replace the (clamped) selection.
pub fn sanitize_paste(
    pasted: &str,
    buffer: &str,
    selection: SelectionRange,
    country: &Country,
) -> String {
    let pasted = digits_only(pasted);
    let protected = protected_prefix_length(country.dial_code);

    if selection.start < protected {
        let mut out = build_buffer(country, &extract_national_digits(buffer, country.dial_code));
        out.push_str(&pasted);
        return out;
    }

    let start = clamp_to_char_boundary(buffer, selection.start);
    let end = clamp_to_char_boundary(buffer, selection.end.max(start));

    let mut out = String::with_capacity(buffer.len() + pasted.len());
    out.push_str(&buffer[..start]);
    out.push_str(&pasted);
    out.push_str(&buffer[end..]);
    out
}

/// Buffer and caret after a paste.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasteOutcome {
    pub buffer: String,
    pub caret: usize,
}

/// [`sanitize_paste`] followed by length enforcement and caret placement.
///
/// The caret goes to the end when the paste point was protected, else right
/// after the pasted digits (never past the end).
pub fn apply_paste(
    pasted: &str,
    buffer: &str,
    selection: SelectionRange,
    country: &Country,
) -> PasteOutcome {
    let spliced = sanitize_paste(pasted, buffer, selection, country);
    let buffer = canonicalize(&enforce_max_length(spliced, country), country);
    let protected = protected_prefix_length(country.dial_code);

    let caret = if selection.start < protected {
        buffer.len()
    } else {
        let pasted_digits = pasted.bytes().filter(u8::is_ascii_digit).count();
        (selection.start + pasted_digits).min(buffer.len())
    };

    PasteOutcome { buffer, caret }
}

#[cfg(test)]
mod tests {
    use super::*;
    use countries::{FilterConfig, filtered_countries};

    fn c(iso2: &str) -> &'static Country {
        Directory::global().by_iso2(iso2).unwrap()
    }

    #[test]
    fn prefixed_input_is_accepted() {
        assert_eq!(normalize("+1 5551234", c("US"), "+1 "), "+1 5551234");
    }

    #[test]
    fn empty_input_becomes_bare_prefix() {
        assert_eq!(normalize("", c("US"), "+1 555"), "+1 ");
        assert_eq!(normalize("   ", c("GB"), "+44 20"), "+44 ");
    }

    #[test]
    fn missing_space_is_restored() {
        assert_eq!(normalize("+15551234", c("US"), "+1 "), "+1 5551234");
        assert_eq!(normalize("+4420", c("GB"), "+44 "), "+44 20");
        assert_eq!(normalize("+44\t20", c("GB"), "+44 "), "+44 20");
    }

    #[test]
    fn extra_spaces_after_prefix_are_kept_until_canonicalized() {
        let gb = c("GB");
        let normalized = normalize("+44   20", gb, "+44 ");
        assert_eq!(normalized, "+44   20");
        assert_eq!(canonicalize(&normalized, gb), "+44 20");
    }

    #[test]
    fn damaged_prefix_salvages_digits() {
        // "+" deleted: the digits still start with the dial code.
        assert_eq!(normalize("1 5551234", c("US"), "+1 5551234"), "+1 5551234");
        assert_eq!(normalize("44 20", c("GB"), "+44 "), "+44 20");
    }

    #[test]
    fn unrecognized_edit_rolls_back() {
        assert_eq!(normalize("+ 555", c("GB"), "+44 2079"), "+44 2079");
        assert_eq!(normalize("abc", c("US"), "+1 12"), "+1 12");
    }

    #[test]
    fn normalize_is_idempotent_on_valid_buffers() {
        for b in ["+1 ", "+1 5551234", "+880 1712345678"] {
            let country = Directory::global().guess_from_leading_digits(b).unwrap();
            assert_eq!(normalize(b, country, b), b);
        }
    }

    #[test]
    fn enforcement_truncates_only_when_over() {
        assert_eq!(enforce_max_length("+1 555123456789".into(), c("US")), "+1 5551234567");
        assert_eq!(enforce_max_length("+1 555".into(), c("US")), "+1 555");
    }

    #[test]
    fn canonicalize_drops_separators() {
        assert_eq!(canonicalize("+1 555-12 3", c("US")), "+1 555123");
        assert_eq!(canonicalize("+1 ", c("US")), "+1 ");
    }

    #[test]
    fn caret_follows_hint_or_digits() {
        let us = c("US");
        assert_eq!(caret_after_edit("+1 5551", Some(6), "+1 5551", us), 6);
        assert_eq!(caret_after_edit("+1 5551", None, "+1 5551", us), 7);
        // Letter typed after the second digit is dropped.
        assert_eq!(caret_after_edit("+1 55a51", Some(6), "+1 5551", us), 5);
        // A hint inside the prefix is clamped to the boundary.
        assert_eq!(caret_after_edit("+1 5551", Some(1), "+1 5551", us), 3);
        assert_eq!(caret_after_edit("+1 5551", Some(40), "+1 5551", us), 7);
    }

    #[test]
    fn autofill_candidate_requires_foreign_plus() {
        assert!(is_autofill_candidate("+14155551234", c("BD")));
        assert!(!is_autofill_candidate("+880 17", c("BD")));
        assert!(!is_autofill_candidate("4155551234", c("BD")));
    }

    #[test]
    fn autofill_switches_to_listed_country() {
        let dir = Directory::global();
        let list = filtered_countries(dir, &FilterConfig::default());
        let hit = detect_autofill("+14155551234", c("BD"), &list, dir).unwrap();
        assert_eq!(hit.country.iso2, "US");
        assert_eq!(hit.buffer, "+1 4155551234");
    }

    #[test]
    fn autofill_enforces_new_country_length() {
        let dir = Directory::global();
        let list = filtered_countries(dir, &FilterConfig::default());
        let hit = detect_autofill("+1 415 555 1234 999", c("GB"), &list, dir).unwrap();
        assert_eq!(hit.buffer, "+1 4155551234");
    }

    #[test]
    fn autofill_ignores_countries_outside_list() {
        let dir = Directory::global();
        let config = FilterConfig {
            only_countries: vec!["BD".into(), "GB".into()],
            ..FilterConfig::default()
        };
        let list = filtered_countries(dir, &config);
        assert!(detect_autofill("+14155551234", c("BD"), &list, dir).is_none());
    }

    #[test]
    fn paste_into_protected_zone_appends() {
        let out = apply_paste("555-1234", "+1 ", SelectionRange::caret(0), c("US"));
        assert_eq!(out.buffer, "+1 5551234");
        assert_eq!(out.caret, 10);
    }

    #[test]
    fn paste_replaces_selection() {
        let out = apply_paste("99", "+1 5551234", SelectionRange::new(4, 6), c("US"));
        assert_eq!(out.buffer, "+1 5991234");
        assert_eq!(out.caret, 6);
    }

    #[test]
    fn paste_is_length_enforced() {
        let out = apply_paste("123456789", "+1 5551", SelectionRange::caret(7), c("US"));
        assert_eq!(out.buffer, "+1 5551123456");
        assert_eq!(out.caret, out.buffer.len());
    }

    #[test]
    fn paste_selection_is_clamped() {
        let out = sanitize_paste("7", "+1 55", SelectionRange::new(4, 99), c("US"));
        assert_eq!(out, "+1 57");
    }
}
