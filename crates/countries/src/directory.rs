//! Read-only dialing directory with iso2 and dial-code indices.
//!
//! The directory is built once per process (see [`Directory::global`]) and is
//! never mutated afterwards, so it can be shared by any number of widgets
//! without synchronization.

use crate::country::Country;
use crate::data::COUNTRIES;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Longest calling code in the table ("1264", "1876", ...).
pub const MAX_DIAL_CODE_LEN: usize = 4;

/// Country table plus secondary indices.
#[derive(Debug)]
pub struct Directory {
    countries: &'static [Country],
    by_iso2: HashMap<String, usize>,
    by_dial_code: HashMap<&'static str, Vec<usize>>,
}

static GLOBAL: OnceLock<Directory> = OnceLock::new();

impl Directory {
    /// Build a directory over an arbitrary static table.
    ///
    /// Later duplicates of an iso2 are ignored by [`Directory::by_iso2`]; the
    /// bundled table has none.
    pub fn new(countries: &'static [Country]) -> Self {
        let mut by_iso2 = HashMap::with_capacity(countries.len());
        let mut by_dial_code: HashMap<&'static str, Vec<usize>> = HashMap::new();

        for (idx, c) in countries.iter().enumerate() {
            by_iso2.entry(c.iso2.to_ascii_uppercase()).or_insert(idx);
            by_dial_code.entry(c.dial_code).or_default().push(idx);
        }

        Self {
            countries,
            by_iso2,
            by_dial_code,
        }
    }

    /// The process-wide directory over the bundled table.
    pub fn global() -> &'static Directory {
        GLOBAL.get_or_init(|| Directory::new(&COUNTRIES))
    }

    /// All countries in canonical order.
    #[inline]
    pub fn all(&self) -> &'static [Country] {
        self.countries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// First entry in canonical order; the last-resort fallback country.
    #[inline]
    pub fn first(&self) -> Option<&'static Country> {
        self.countries.first()
    }

    /// [`Directory::first`], or the first bundled entry for an empty table.
    #[inline]
    pub fn first_or_bundled(&self) -> &'static Country {
        self.countries.first().unwrap_or(&COUNTRIES[0])
    }

    /// Case-insensitive lookup by ISO 3166-1 alpha-2 code.
    pub fn by_iso2(&self, code: &str) -> Option<&'static Country> {
        let key = code.trim().to_ascii_uppercase();
        self.by_iso2.get(&key).map(|&idx| &self.countries[idx])
    }

    /// All countries using `code` (leading `+` allowed), in directory order.
    pub fn by_dial_code(&self, code: &str) -> Vec<&'static Country> {
        let code = strip_plus(code);
        self.by_dial_code
            .get(code)
            .map(|idxs| idxs.iter().map(|&idx| &self.countries[idx]).collect())
            .unwrap_or_default()
    }

    /// The preferred country for a shared dial code.
    ///
    /// Lowest `priority` wins; equal priorities resolve to directory order.
    pub fn best_for_dial_code(&self, code: &str) -> Option<&'static Country> {
        let code = strip_plus(code);
        let idxs = self.by_dial_code.get(code)?;
        // `min_by_key` keeps the first of equal keys, and the index list is in
        // directory order.
        idxs.iter()
            .map(|&idx| &self.countries[idx])
            .min_by_key(|c| c.priority)
    }

    /// Returns `true` if some country uses this dial code.
    pub fn is_valid_dial_code(&self, code: &str) -> bool {
        self.by_dial_code.contains_key(strip_plus(code))
    }

    /// Guess a country from the leading digits of a phone number.
    ///
    /// Non-digits are dropped (a `+` is kept and then stripped once from the
    /// front), and prefixes of four down to one digits are tried in turn. The
    /// longest matching calling code wins, so `"+1264..."` resolves to
    /// Anguilla rather than the `"1"` NANP default.
    pub fn guess_from_leading_digits(&self, text: &str) -> Option<&'static Country> {
        let cleaned: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        let digits = cleaned.strip_prefix('+').unwrap_or(&cleaned);

        let max = MAX_DIAL_CODE_LEN.min(digits.len());
        (1..=max)
            .rev()
            .find_map(|len| self.best_for_dial_code(&digits[..len]))
    }

    /// Search the whole directory. See [`search`].
    pub fn search(&self, query: &str) -> Vec<&'static Country> {
        search(query, self.countries.iter())
    }
}

/// Filter `list` by a free-text query, preserving order.
///
/// The query is trimmed, lowercased and stripped of one leading `+`. A country
/// matches when the query is a substring of its name (case-insensitive), its
/// iso2 (case-insensitive) or its dial code. An empty query matches
/// everything.
pub fn search<I>(query: &str, list: I) -> Vec<&'static Country>
where
    I: IntoIterator<Item = &'static Country>,
{
    let needle = query.trim().to_lowercase();
    let needle = needle.strip_prefix('+').unwrap_or(&needle);

    list.into_iter()
        .filter(|c| {
            c.name.to_lowercase().contains(needle)
                || c.iso2.to_ascii_lowercase().contains(needle)
                || c.dial_code.contains(needle)
        })
        .collect()
}

#[inline]
fn strip_plus(code: &str) -> &str {
    let code = code.trim();
    code.strip_prefix('+').unwrap_or(code)
}
