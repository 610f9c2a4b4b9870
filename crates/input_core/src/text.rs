//! Low-level text helpers for the phone buffer.
//!
//! Offsets are byte indices. A committed buffer is ASCII, but proposed values
//! coming from IME composition or autofill may not be, so every offset that
//! reaches a slice goes through [`clamp_to_char_boundary`] first.

use std::borrow::Cow;

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// If `index` is beyond the string length, it is clamped to `s.len()`.
/// If `index` falls in the middle of a multi-byte character, it is
/// adjusted backwards to the start of that character.
///
/// # Examples
///
/// ```
/// use input_core::clamp_to_char_boundary;
///
/// let s = "a€b"; // '€' is 3 bytes
/// assert_eq!(clamp_to_char_boundary(s, 0), 0);
/// assert_eq!(clamp_to_char_boundary(s, 2), 1); // mid '€' -> start of '€'
/// assert_eq!(clamp_to_char_boundary(s, 4), 4);
/// assert_eq!(clamp_to_char_boundary(s, 100), 5);
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Previous character boundary before `i` (0 at the start).
pub(crate) fn prev_char_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[..i].char_indices().last().map(|(idx, _)| idx).unwrap_or(0)
}

/// Next character boundary after `i` (`s.len()` at the end).
pub(crate) fn next_char_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[i..].chars().next().map(|c| i + c.len_utf8()).unwrap_or(s.len())
}

/// Keep only ASCII digits.
///
/// Returns a `Cow::Borrowed` if the string is already all digits (fast path).
///
/// # Examples
///
/// ```
/// use input_core::digits_only;
///
/// assert_eq!(digits_only("5551234"), "5551234");
/// assert_eq!(digits_only("(555) 123-4"), "5551234");
/// assert_eq!(digits_only("+1 ٣"), "1"); // non-ASCII digits are dropped
/// ```
pub fn digits_only(s: &str) -> Cow<'_, str> {
    if s.bytes().all(|b| b.is_ascii_digit()) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(char::is_ascii_digit).collect())
}

/// Strip one leading `+` (after surrounding whitespace), if present.
///
/// # Examples
///
/// ```
/// use input_core::strip_plus;
///
/// assert_eq!(strip_plus("+880"), "880");
/// assert_eq!(strip_plus(" 44 "), "44");
/// ```
#[inline]
pub fn strip_plus(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix('+').unwrap_or(s)
}

/// Byte length of the longest prefix of `s` made of whole characters and at
/// most `max_digits` ASCII digits.
///
/// Used to cut national digits to a length cap without reallocating.
pub(crate) fn take_digits(s: &str, max_digits: usize) -> &str {
    match s.char_indices().filter(|(_, c)| c.is_ascii_digit()).nth(max_digits) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
