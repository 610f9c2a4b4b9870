//! The country record stored in the dialing directory.

use serde::Serialize;

/// One entry of the dialing directory.
///
/// Records are `'static` and never mutated; the rest of the workspace passes
/// them around as `&'static Country`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// English display name.
    pub name: &'static str,
    /// ISO 3166-1 alpha-2 code, upper case in the table.
    pub iso2: &'static str,
    /// Calling code digits without the leading `+`.
    pub dial_code: &'static str,
    /// Tie-breaker among countries sharing a dial code; lower wins.
    pub priority: i32,
    /// Area code prefixes. Informational only.
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub area_codes: &'static [&'static str],
    /// Display mask, e.g. `"+.. .... ......"`. Each `.` is one digit; the first
    /// whitespace-delimited token covers the dial code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,
}

impl Country {
    /// Dial code with the leading `+`.
    pub fn plus_dial_code(&self) -> String {
        format!("+{}", self.dial_code)
    }

    /// Case-insensitive iso2 comparison.
    #[inline]
    pub fn is(&self, iso2: &str) -> bool {
        self.iso2.eq_ignore_ascii_case(iso2.trim())
    }

    /// Tokens of the format mask after the dial-code token.
    pub fn national_format_tokens(&self) -> impl Iterator<Item = &'static str> {
        self.format
            .into_iter()
            .flat_map(|f| f.split_whitespace().skip(1))
    }
}

pub(crate) const fn country(
    name: &'static str,
    iso2: &'static str,
    dial_code: &'static str,
    format: &'static str,
) -> Country {
    Country {
        name,
        iso2,
        dial_code,
        priority: 0,
        area_codes: &[],
        format: Some(format),
    }
}

pub(crate) const fn ranked(
    name: &'static str,
    iso2: &'static str,
    dial_code: &'static str,
    priority: i32,
    format: &'static str,
) -> Country {
    Country {
        name,
        iso2,
        dial_code,
        priority,
        area_codes: &[],
        format: Some(format),
    }
}

pub(crate) const fn with_area_codes(
    name: &'static str,
    iso2: &'static str,
    dial_code: &'static str,
    priority: i32,
    format: &'static str,
    area_codes: &'static [&'static str],
) -> Country {
    Country {
        name,
        iso2,
        dial_code,
        priority,
        area_codes,
        format: Some(format),
    }
}
