//! # countries
//!
//! Static dialing directory for phone-number input.
//!
//! - [`Country`]: one immutable directory record
//! - [`Directory`]: the canonical table plus iso2 / dial-code indices
//! - [`filtered_countries`]: allow-list, deny-list, distinct and preferred ordering
//!
//! The bundled table is exposed through [`Directory::global`], which is built
//! once and never mutated.

mod country;
mod data;
mod directory;
mod filter;

pub use country::Country;
pub use directory::{Directory, MAX_DIAL_CODE_LEN, search};
pub use filter::{CountryList, FilterConfig, filtered_countries};
