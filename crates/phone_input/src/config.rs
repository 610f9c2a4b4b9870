//! Mount-time configuration.

use countries::FilterConfig;
use serde::Deserialize;

/// Fallback country used when nothing else resolves.
pub const DEFAULT_FALLBACK_COUNTRY: &str = "US";

/// Everything a [`PhoneInput`](crate::PhoneInput) needs at mount.
///
/// Field names match the TOML keys; every field is optional there.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PhoneInputConfig {
    /// Initial text; may carry its own `+dial` prefix.
    pub initial_value: Option<String>,
    /// iso2 override for the initial country.
    pub initial_country: Option<String>,
    /// Dial-code override for the initial country (leading `+` allowed).
    pub initial_dial_code: Option<String>,
    /// iso2 tried before the directory's first entry.
    pub fallback_country: String,
    #[serde(flatten)]
    pub filter: FilterConfig,
    pub disabled: bool,
    pub read_only: bool,
    /// External value changes are reconciled through
    /// [`PhoneInput::set_external_value`](crate::PhoneInput::set_external_value).
    pub controlled: bool,
}

impl Default for PhoneInputConfig {
    fn default() -> Self {
        Self {
            initial_value: None,
            initial_country: None,
            initial_dial_code: None,
            fallback_country: DEFAULT_FALLBACK_COUNTRY.to_string(),
            filter: FilterConfig::default(),
            disabled: false,
            read_only: false,
            controlled: false,
        }
    }
}

impl PhoneInputConfig {
    /// Parse and validate a TOML document.
    ///
    /// ```
    /// use phone_input::PhoneInputConfig;
    ///
    /// let config = PhoneInputConfig::from_toml_str(r#"
    ///     initial_country = "gb"
    ///     preferred_countries = ["GB", "US"]
    /// "#).unwrap();
    /// assert_eq!(config.initial_country.as_deref(), Some("gb"));
    /// assert_eq!(config.fallback_country, "US");
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: PhoneInputConfig = toml::from_str(s).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the shape of every iso2 and dial-code entry.
    ///
    /// Unknown but well-formed codes are accepted; they simply match nothing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(code) = &self.initial_country {
            check_iso2("initial_country", code)?;
        }
        check_iso2("fallback_country", &self.fallback_country)?;
        if let Some(code) = &self.initial_dial_code {
            check_dial_code(code)?;
        }

        let lists = [
            ("preferred_countries", &self.filter.preferred_countries),
            ("only_countries", &self.filter.only_countries),
            ("exclude_countries", &self.filter.exclude_countries),
        ];
        for (field, list) in lists {
            for code in list {
                check_iso2(field, code)?;
            }
        }
        Ok(())
    }

    /// Mutation events are ignored.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.disabled || self.read_only
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(toml::de::Error),
    InvalidIso2 { field: &'static str, value: String },
    InvalidDialCode { value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(err) => write!(f, "invalid phone input config: {err}"),
            ConfigError::InvalidIso2 { field, value } => {
                write!(f, "{field}: {value:?} is not a two-letter country code")
            }
            ConfigError::InvalidDialCode { value } => {
                write!(f, "initial_dial_code: {value:?} is not a 1-4 digit calling code")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

fn check_iso2(field: &'static str, code: &str) -> Result<(), ConfigError> {
    let trimmed = code.trim();
    if trimmed.len() == 2 && trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(ConfigError::InvalidIso2 {
            field,
            value: code.to_string(),
        })
    }
}

fn check_dial_code(code: &str) -> Result<(), ConfigError> {
    let digits = input_core::strip_plus(code);
    let ok = (1..=countries::MAX_DIAL_CODE_LEN).contains(&digits.len())
        && digits.bytes().all(|b| b.is_ascii_digit());
    if ok {
        Ok(())
    } else {
        Err(ConfigError::InvalidDialCode {
            value: code.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fall_back_to_us() {
        let config = PhoneInputConfig::from_toml_str("").unwrap();
        assert_eq!(config, PhoneInputConfig::default());
        assert_eq!(config.fallback_country, "US");
        assert!(config.filter.is_unfiltered());
    }

    #[test]
    fn filter_keys_are_flattened() {
        let config = PhoneInputConfig::from_toml_str(
            r#"
            initial_value = "+44 20 7946 0958"
            only_countries = ["GB", "US"]
            distinct = true
            controlled = true
            "#,
        )
        .unwrap();
        assert_eq!(config.filter.only_countries, vec!["GB", "US"]);
        assert!(config.filter.distinct);
        assert!(config.controlled);
        assert!(!config.is_locked());
    }

    #[test]
    fn malformed_iso2_is_rejected() {
        let err = PhoneInputConfig::from_toml_str(r#"exclude_countries = ["USA"]"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidIso2 {
                field: "exclude_countries",
                ..
            }
        ));
        assert!(err.to_string().contains("USA"));
    }

    #[test]
    fn malformed_dial_code_is_rejected() {
        for bad in ["+", "12345", "4a"] {
            let doc = format!("initial_dial_code = {bad:?}");
            let err = PhoneInputConfig::from_toml_str(&doc).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidDialCode { .. }), "{bad}");
        }
        assert!(PhoneInputConfig::from_toml_str(r#"initial_dial_code = "+880""#).is_ok());
    }

    #[test]
    fn toml_syntax_errors_keep_their_source() {
        let err = PhoneInputConfig::from_toml_str("disabled = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
