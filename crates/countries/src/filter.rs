//! Derives the working country list from the directory and a filter config.

use crate::country::Country;
use crate::directory::{Directory, search};
use serde::Deserialize;
use std::collections::HashSet;

/// Allow/deny/ordering knobs for the country list.
///
/// All iso2 comparisons are ASCII case-insensitive.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Countries pinned to the top, in this order.
    pub preferred_countries: Vec<String>,
    /// Allow-list. Empty means "all".
    pub only_countries: Vec<String>,
    /// Deny-list.
    pub exclude_countries: Vec<String>,
    /// Keep one country per dial code (first survivor in directory order).
    pub distinct: bool,
}

impl FilterConfig {
    pub fn is_unfiltered(&self) -> bool {
        self.preferred_countries.is_empty()
            && self.only_countries.is_empty()
            && self.exclude_countries.is_empty()
            && !self.distinct
    }
}

/// Ordered result of [`filtered_countries`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountryList {
    items: Vec<&'static Country>,
}

impl CountryList {
    /// The entry with this iso2, if it survived filtering.
    pub fn find(&self, iso2: &str) -> Option<&'static Country> {
        self.items.iter().copied().find(|c| c.is(iso2))
    }

    pub fn contains(&self, iso2: &str) -> bool {
        self.find(iso2).is_some()
    }

    #[inline]
    pub fn first(&self) -> Option<&'static Country> {
        self.items.first().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Country> + '_ {
        self.items.iter().copied()
    }

    /// Free-text search within this list; order is preserved.
    pub fn search(&self, query: &str) -> Vec<&'static Country> {
        search(query, self.iter())
    }
}

impl<'a> IntoIterator for &'a CountryList {
    type Item = &'static Country;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, &'static Country>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter().copied()
    }
}

/// Apply allow-list, deny-list, distinct and preferred ordering, in that order.
///
/// The result is empty only when `only_countries` matches nothing in the
/// directory; callers decide the fallback.
pub fn filtered_countries(directory: &Directory, config: &FilterConfig) -> CountryList {
    let only = upper_set(&config.only_countries);
    let exclude = upper_set(&config.exclude_countries);

    let mut seen_dial_codes = HashSet::new();
    let mut items: Vec<&'static Country> = directory
        .all()
        .iter()
        .filter(|c| only.is_empty() || only.contains(&c.iso2.to_ascii_uppercase()))
        .filter(|c| !exclude.contains(&c.iso2.to_ascii_uppercase()))
        .filter(|c| !config.distinct || seen_dial_codes.insert(c.dial_code))
        .collect();

    if !config.preferred_countries.is_empty() {
        let rank = |c: &Country| {
            config
                .preferred_countries
                .iter()
                .position(|p| c.is(p))
        };
        let (mut preferred, others): (Vec<_>, Vec<_>) =
            items.into_iter().partition(|c| rank(*c).is_some());
        // Stable sort: duplicate entries in the preferred list keep the first index.
        preferred.sort_by_key(|c| rank(*c));
        preferred.extend(others);
        items = preferred;
    }

    if items.is_empty() {
        log::warn!(
            target: "countries.filter",
            "country filter produced an empty list (only_countries={:?}, exclude_countries={:?})",
            config.only_countries,
            config.exclude_countries
        );
    } else {
        log::trace!(
            target: "countries.filter",
            "filtered country list: {} of {} entries",
            items.len(),
            directory.len()
        );
    }

    CountryList { items }
}

fn upper_set(codes: &[String]) -> HashSet<String> {
    codes
        .iter()
        .map(|c| c.trim().to_ascii_uppercase())
        .filter(|c| !c.is_empty())
        .collect()
}
