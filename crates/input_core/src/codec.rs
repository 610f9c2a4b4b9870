//! Buffer codec: the `"+<dial> <digits>"` representation and the structured
//! value derived from it.
//!
//! Every function here is pure. The buffer is the single source of truth; the
//! [`PhoneValue`] is recomputed from it on demand.

use crate::text::{digits_only, strip_plus, take_digits};
use countries::{Country, Directory};
use serde::Serialize;

/// Minimum number of national digits for [`PhoneValue::is_valid`].
pub const MIN_VALID_NATIONAL_DIGITS: usize = 4;

/// Per-country national length caps that take precedence over the format mask.
const LENGTH_OVERRIDES: &[(&str, usize)] = &[
    ("US", 10),
    ("CA", 10),
    ("GB", 10),
    ("IN", 10),
    ("BD", 10),
    ("DE", 11),
    ("AU", 9),
    ("CN", 11),
    ("JP", 10),
    ("FR", 9),
];

/// `"+" + dial_code + " "`. A leading `+` on `dial_code` is tolerated.
pub fn protected_prefix(dial_code: &str) -> String {
    format!("+{} ", strip_plus(dial_code))
}

/// Byte length of [`protected_prefix`]: `1 + len(dial_code) + 1`.
#[inline]
pub fn protected_prefix_length(dial_code: &str) -> usize {
    strip_plus(dial_code).len() + 2
}

/// `"+dial digits"`, or the bare prefix `"+dial "` when `national` has no digits.
pub fn build_buffer(country: &Country, national: &str) -> String {
    let digits = digits_only(national);
    let mut out = String::with_capacity(country.dial_code.len() + 2 + digits.len());
    out.push('+');
    out.push_str(country.dial_code);
    out.push(' ');
    out.push_str(&digits);
    out
}

/// National digits of `buffer` for `dial_code`.
///
/// With the expected prefix present this is the digits after it. Otherwise
/// the first occurrence of `"+dial"` is removed and the digits of what
/// remains are returned.
pub fn extract_national_digits(buffer: &str, dial_code: &str) -> String {
    let dial = strip_plus(dial_code);
    let plus_dial = format!("+{dial}");

    if let Some(rest) = buffer
        .strip_prefix(plus_dial.as_str())
        .and_then(|r| r.strip_prefix(' '))
    {
        return digits_only(rest).into_owned();
    }

    digits_only(&buffer.replacen(plus_dial.as_str(), "", 1)).into_owned()
}

/// Count of `.` positions in the mask after its dial-code token.
///
/// Returns 0 (unlimited) for countries without a format.
pub fn format_max_length(country: &Country) -> usize {
    country
        .national_format_tokens()
        .map(|tok| tok.bytes().filter(|&b| b == b'.').count())
        .sum()
}

/// Effective national length cap; 0 means unlimited.
///
/// The override table wins over the mask.
pub fn max_national_length(country: &Country) -> usize {
    LENGTH_OVERRIDES
        .iter()
        .find(|(iso2, _)| country.is(iso2))
        .map(|&(_, len)| len)
        .unwrap_or_else(|| format_max_length(country))
}

/// Cut `digits` to the country's cap. Non-digits are assumed absent.
pub fn truncate_national<'a>(digits: &'a str, country: &Country) -> &'a str {
    match max_national_length(country) {
        0 => digits,
        max => take_digits(digits, max),
    }
}

/// Rendering options for [`format_national`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Drop `(` and `)` from the mask.
    pub disable_parentheses: bool,
}

/// Render national digits through the country's mask for display.
///
/// The mask tokens after the dial-code token are walked with single spaces
/// between them; each `.` consumes one digit and every other character is
/// copied literally. Rendering stops as soon as the digits run out, and
/// digits beyond the mask capacity are dropped. The result is trimmed.
pub fn format_national(digits: &str, country: &Country, options: FormatOptions) -> String {
    if digits.is_empty() {
        return String::new();
    }
    if country.format.is_none() {
        return digits.to_string();
    }

    let mask = country.national_format_tokens().collect::<Vec<_>>().join(" ");
    if mask.is_empty() {
        return digits.to_string();
    }

    let mut out = String::with_capacity(mask.len());
    let mut remaining = digits.chars();
    let mut next = remaining.next();

    for ch in mask.chars() {
        let Some(digit) = next else { break };
        match ch {
            '.' => {
                out.push(digit);
                next = remaining.next();
            }
            '(' | ')' if options.disable_parentheses => {}
            other => out.push(other),
        }
    }

    out.trim().to_string()
}

/// Result of [`split_international`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitNumber {
    /// Dial code digits without `+`.
    pub dial_code: &'static str,
    pub national_digits: String,
    /// The country resolved from a `+dial` prefix, if one was recognized.
    pub detected: Option<&'static Country>,
}

/// Split text that may carry its own `+dial` prefix.
///
/// Non-digits other than `+` are dropped first. A leading `+` followed by a
/// known calling code (longest of four down to one digits) yields that
/// country; otherwise `current` is kept and every digit is national.
pub fn split_international(
    text: &str,
    current: &'static Country,
    directory: &Directory,
) -> SplitNumber {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if let Some(digits) = cleaned.strip_prefix('+') {
        let max = countries::MAX_DIAL_CODE_LEN.min(digits.len());
        for len in (1..=max).rev() {
            // `digits` may still contain a stray `+`; only pure digit prefixes count.
            let Some(code) = digits.get(..len) else { continue };
            if let Some(country) = directory.best_for_dial_code(code) {
                return SplitNumber {
                    dial_code: country.dial_code,
                    national_digits: digits_only(&digits[len..]).into_owned(),
                    detected: Some(country),
                };
            }
        }
    }

    SplitNumber {
        dial_code: current.dial_code,
        national_digits: digits_only(&cleaned).into_owned(),
        detected: None,
    }
}

/// Structured value handed to observers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneValue {
    /// `"+" + dial + digits`, or `"+" + dial` without digits.
    pub full_number: String,
    /// National digits only.
    pub phone_number: String,
    /// Dial code with `+`.
    pub dial_code: String,
    /// Dial code without `+`.
    pub raw_dial_code: String,
    /// iso2 of the active country.
    pub country_code: String,
    pub country: Option<&'static Country>,
    pub is_valid: bool,
}

impl PhoneValue {
    /// The value reported when no country is available; `full_number` carries
    /// the raw buffer.
    pub fn without_country(buffer: &str) -> Self {
        Self {
            full_number: buffer.to_string(),
            phone_number: String::new(),
            dial_code: String::new(),
            raw_dial_code: String::new(),
            country_code: String::new(),
            country: None,
            is_valid: false,
        }
    }
}

/// Derive the [`PhoneValue`] for `buffer`.
pub fn to_phone_value(buffer: &str, country: Option<&'static Country>) -> PhoneValue {
    let Some(country) = country else {
        return PhoneValue::without_country(buffer);
    };

    let digits = extract_national_digits(buffer, country.dial_code);
    let dial_code = country.plus_dial_code();
    let full_number = format!("{dial_code}{digits}");

    PhoneValue {
        full_number,
        is_valid: digits.len() >= MIN_VALID_NATIONAL_DIGITS,
        phone_number: digits,
        dial_code,
        raw_dial_code: country.dial_code.to_string(),
        country_code: country.iso2.to_string(),
        country: Some(country),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(iso2: &str) -> &'static Country {
        Directory::global().by_iso2(iso2).unwrap()
    }

    #[test]
    fn prefix_length_counts_plus_and_space() {
        assert_eq!(protected_prefix_length("1"), 3);
        assert_eq!(protected_prefix_length("+44"), 4);
        assert_eq!(protected_prefix_length("880"), 5);
        assert_eq!(protected_prefix("+880"), "+880 ");
    }

    #[test]
    fn build_buffer_keeps_trailing_space() {
        assert_eq!(build_buffer(c("US"), ""), "+1 ");
        assert_eq!(build_buffer(c("US"), "(555) 123"), "+1 555123");
        assert_eq!(build_buffer(c("BD"), "abc"), "+880 ");
    }

    #[test]
    fn extract_with_and_without_prefix() {
        assert_eq!(extract_national_digits("+1 5551234", "1"), "5551234");
        assert_eq!(extract_national_digits("+1 ", "1"), "");
        // Missing space: the first "+1" is removed.
        assert_eq!(extract_national_digits("+15551234", "1"), "5551234");
        // Foreign prefix: nothing to remove, every digit is national.
        assert_eq!(extract_national_digits("+44 20", "1"), "4420");
    }

    #[test]
    fn extract_inverts_build() {
        for (iso2, national) in [("US", "5551234567"), ("GB", ""), ("BD", "17-12")] {
            let country = c(iso2);
            let buffer = build_buffer(country, national);
            assert_eq!(
                extract_national_digits(&buffer, country.dial_code),
                digits_only(national)
            );
        }
    }

    #[test]
    fn override_table_wins_over_mask() {
        static SHORT_MASK_US: Country = Country {
            name: "United States",
            iso2: "us",
            dial_code: "1",
            priority: 0,
            area_codes: &[],
            format: Some("+. ..."),
        };
        assert_eq!(format_max_length(&SHORT_MASK_US), 3);
        assert_eq!(max_national_length(&SHORT_MASK_US), 10);
        assert_eq!(max_national_length(c("DE")), 11);
        assert_eq!(format_max_length(c("BD")), 10);
    }

    #[test]
    fn no_format_means_unlimited() {
        static BARE: Country = Country {
            name: "Nowhere",
            iso2: "XN",
            dial_code: "999",
            priority: 0,
            area_codes: &[],
            format: None,
        };
        assert_eq!(max_national_length(&BARE), 0);
        assert_eq!(truncate_national("1234567890123456", &BARE), "1234567890123456");
        assert_eq!(
            format_national("12345", &BARE, FormatOptions::default()),
            "12345"
        );
    }

    #[test]
    fn mask_length_without_override() {
        let nl = c("NL");
        assert_eq!(max_national_length(nl), format_max_length(nl));
        assert!(format_max_length(nl) > 0);
    }

    #[test]
    fn truncate_respects_cap() {
        assert_eq!(truncate_national("555123456789", c("US")), "5551234567");
        assert_eq!(truncate_national("555", c("US")), "555");
    }

    #[test]
    fn format_national_walks_mask() {
        assert_eq!(
            format_national("4155551234", c("US"), FormatOptions::default()),
            "(415) 555-1234"
        );
        assert_eq!(
            format_national(
                "4155551234",
                c("US"),
                FormatOptions {
                    disable_parentheses: true
                }
            ),
            "415 555-1234"
        );
        // Stops when digits run out.
        assert_eq!(format_national("415", c("US"), FormatOptions::default()), "(415");
        assert_eq!(format_national("", c("US"), FormatOptions::default()), "");
    }

    #[test]
    fn split_detects_leading_dial_code() {
        let dir = Directory::global();
        let split = split_international("+44 20 7946 0958", c("US"), dir);
        assert_eq!(split.dial_code, "44");
        assert_eq!(split.national_digits, "2079460958");
        assert_eq!(split.detected.map(|c| c.iso2), Some("GB"));

        let split = split_international("(415) 555", c("US"), dir);
        assert_eq!(split.dial_code, "1");
        assert_eq!(split.national_digits, "415555");
        assert!(split.detected.is_none());
    }

    #[test]
    fn phone_value_fields() {
        let v = to_phone_value("+1 5551234", Some(c("US")));
        assert_eq!(v.full_number, "+15551234");
        assert_eq!(v.phone_number, "5551234");
        assert_eq!(v.dial_code, "+1");
        assert_eq!(v.raw_dial_code, "1");
        assert_eq!(v.country_code, "US");
        assert!(v.is_valid);

        let empty = to_phone_value("+1 ", Some(c("US")));
        assert_eq!(empty.full_number, "+1");
        assert!(!empty.is_valid);
    }

    #[test]
    fn validity_flips_at_four_digits() {
        assert!(!to_phone_value("+1 555", Some(c("US"))).is_valid);
        assert!(to_phone_value("+1 5551", Some(c("US"))).is_valid);
    }

    #[test]
    fn value_without_country_keeps_raw_buffer() {
        let v = to_phone_value("+9 12", None);
        assert_eq!(v.full_number, "+9 12");
        assert!(v.country.is_none());
        assert!(!v.is_valid);
    }

    #[test]
    fn phone_value_serializes_camel_case() {
        let v = to_phone_value("+44 2079", Some(c("GB")));
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["fullNumber"], "+442079");
        assert_eq!(json["rawDialCode"], "44");
        assert_eq!(json["countryCode"], "GB");
        assert_eq!(json["isValid"], true);
        assert_eq!(json["country"]["iso2"], "GB");
    }
}
