//! Shared fixtures for phone input integration tests.
//!
//! Scenario files are TOML documents listing cases; each case has a mount
//! config (kept as a raw table so this crate stays independent of the
//! machine), a list of steps and per-step expectations.

pub mod scenario;

pub use scenario::{Expect, SCENARIO_FORMAT_V1, Scenario, ScenarioFile, Step, load_scenarios};

use std::fmt::Write;

/// Quote `text` for a single-line event log entry.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            ch if ch < ' ' => {
                let _ = write!(&mut out, "\\u{{{:02X}}}", ch as u32);
            }
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

/// Human-readable diff of two event logs around the first mismatch.
///
/// Returns an empty string when the logs are equal.
pub fn diff_lines(expected: &[String], actual: &[String]) -> String {
    if expected == actual {
        return String::new();
    }

    let max = expected.len().max(actual.len());

    let first = (0..max)
        .find(|&i| line(expected, i) != line(actual, i))
        .unwrap_or(max);

    let mut out = String::new();
    if first < max {
        let start = first.saturating_sub(2);
        let end = (first + 3).min(max);
        let _ = writeln!(&mut out, "first mismatch at entry {}:", first + 1);
        for i in start..end {
            let marker = if i == first { ">" } else { " " };
            let _ = writeln!(&mut out, "{marker} {:>3}  expected: {}", i + 1, line(expected, i));
            let _ = writeln!(&mut out, "{marker} {:>3}    actual: {}", i + 1, line(actual, i));
        }
    }
    let _ = writeln!(
        &mut out,
        "expected {} entries, actual {} entries",
        expected.len(),
        actual.len()
    );
    out
}

fn line(lines: &[String], i: usize) -> &str {
    lines.get(i).map(String::as_str).unwrap_or("<missing>")
}
