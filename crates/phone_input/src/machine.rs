//! The stateful shell around [`reduce`]: mode and echo bookkeeping, the
//! deferred queue and observer dispatch.

use crate::config::PhoneInputConfig;
use crate::deferred::{DeferredQueue, DeferredTask};
use crate::notify::{Callbacks, PhoneInputObserver};
use crate::reduce::{Edit, PhoneState, Transition, reduce};
use countries::{Country, CountryList, Directory, filtered_countries};
use input_core::{
    FormatOptions, PhoneValue, SelectionRange, build_buffer, extract_national_digits,
    format_national, to_phone_value, truncate_national,
};

/// Read-only view of a phone input for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot<'a> {
    pub country: &'static Country,
    pub buffer: &'a str,
    pub caret_target: Option<usize>,
}

/// One phone-number widget.
///
/// Hosts forward their events to the methods here, render [`buffer`](Self::buffer),
/// and then call [`run_deferred`](Self::run_deferred) with their text control.
pub struct PhoneInput {
    pub(crate) config: PhoneInputConfig,
    pub(crate) directory: &'static Directory,
    pub(crate) countries: CountryList,
    pub(crate) state: PhoneState,
    pub(crate) observer: Box<dyn PhoneInputObserver>,
    pub(crate) deferred: DeferredQueue,
    /// Last external value taken into account (controlled mode).
    last_external: Option<String>,
    /// `(full_number, buffer)` of the last value-changed emission.
    last_emitted: Option<(String, String)>,
}

impl std::fmt::Debug for PhoneInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhoneInput")
            .field("country", &self.state.country.iso2)
            .field("buffer", &self.state.buffer)
            .field("caret_target", &self.state.caret_target)
            .field("deferred", &self.deferred.len())
            .finish_non_exhaustive()
    }
}

impl PhoneInput {
    /// Mount with no observer over the global directory.
    pub fn new(config: PhoneInputConfig) -> Self {
        Self::with_observer(config, Callbacks::default())
    }

    /// Mount over the global directory.
    pub fn with_observer(config: PhoneInputConfig, observer: impl PhoneInputObserver + 'static) -> Self {
        Self::with_directory(config, Directory::global(), observer)
    }

    /// Mount over an arbitrary directory.
    pub fn with_directory(
        config: PhoneInputConfig,
        directory: &'static Directory,
        observer: impl PhoneInputObserver + 'static,
    ) -> Self {
        let countries = filtered_countries(directory, &config.filter);
        let country = resolve_initial_country(&config, directory, &countries);

        let digits = config
            .initial_value
            .as_deref()
            .map(|v| extract_national_digits(v, country.dial_code))
            .unwrap_or_default();
        let buffer = build_buffer(country, truncate_national(&digits, country));

        log::debug!(
            target: "phone_input.machine",
            "mounted {} with {:?} ({} countries, controlled={})",
            country.iso2,
            buffer,
            countries.len(),
            config.controlled
        );

        let last_external = config
            .controlled
            .then(|| config.initial_value.clone())
            .flatten();

        Self {
            config,
            directory,
            countries,
            state: PhoneState {
                country,
                buffer,
                caret_target: None,
            },
            observer: Box::new(observer),
            deferred: DeferredQueue::new(),
            last_external,
            last_emitted: None,
        }
    }

    /// Replace the observer.
    pub fn set_observer(&mut self, observer: impl PhoneInputObserver + 'static) {
        self.observer = Box::new(observer);
    }

    // =========================================================================
    // Read access
    // =========================================================================

    #[inline]
    pub fn country(&self) -> &'static Country {
        self.state.country
    }

    #[inline]
    pub fn buffer(&self) -> &str {
        &self.state.buffer
    }

    #[inline]
    pub fn caret_target(&self) -> Option<usize> {
        self.state.caret_target
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            country: self.state.country,
            buffer: &self.state.buffer,
            caret_target: self.state.caret_target,
        }
    }

    /// The filtered, ordered country list offered to the user.
    #[inline]
    pub fn countries(&self) -> &CountryList {
        &self.countries
    }

    #[inline]
    pub fn config(&self) -> &PhoneInputConfig {
        &self.config
    }

    #[inline]
    pub fn protected_len(&self) -> usize {
        self.state.protected_len()
    }

    /// The derived value of the current buffer.
    pub fn value(&self) -> PhoneValue {
        to_phone_value(&self.state.buffer, Some(self.state.country))
    }

    /// National digits rendered through the country mask, for display.
    pub fn formatted_national(&self, options: FormatOptions) -> String {
        format_national(&self.state.national_digits(), self.state.country, options)
    }

    /// Number of queued deferred tasks.
    #[inline]
    pub fn pending_tasks(&self) -> usize {
        self.deferred.len()
    }

    // =========================================================================
    // Value-level events
    // =========================================================================

    /// The host's text after its default editing.
    ///
    /// `caret` is the host caret in `text`; `None` puts the caret at the end.
    pub fn text_changed(&mut self, text: &str, caret: Option<usize>) {
        self.mutate(Edit::TextChanged { text, caret });
    }

    /// A paste over `selection`. The host must suppress its default paste.
    pub fn pasted(&mut self, text: &str, selection: SelectionRange) {
        self.mutate(Edit::Pasted { text, selection });
    }

    /// A country picked from the list.
    pub fn country_selected(&mut self, iso2: &str) {
        self.mutate(Edit::CountrySelected { iso2 });
    }

    /// Programmatic country change; same rules as [`country_selected`](Self::country_selected).
    pub fn set_country(&mut self, iso2: &str) {
        self.country_selected(iso2);
    }

    /// Reset to the bare prefix with the caret at the boundary.
    pub fn clear(&mut self) {
        self.mutate(Edit::Clear);
    }

    /// Controlled-mode value from the owner. Applied on the next
    /// [`run_deferred`](Self::run_deferred) or event, whichever comes first.
    pub fn set_external_value(&mut self, value: &str) {
        if !self.config.controlled {
            log::debug!(
                target: "phone_input.machine",
                "external value {value:?} ignored: input is uncontrolled"
            );
            return;
        }
        self.deferred.push(DeferredTask::Reconcile(value.to_string()));
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Apply pending reconciliations; caret work stays queued for the drain.
    pub(crate) fn begin_event(&mut self) {
        for value in self.deferred.take_for_new_event() {
            self.reconcile(&value);
        }
    }

    fn mutate(&mut self, edit: Edit<'_>) {
        self.begin_event();
        if self.config.is_locked() {
            log::trace!(target: "phone_input.machine", "ignored {edit:?}: input is locked");
            return;
        }
        match reduce(&self.state, &self.countries, self.directory, edit) {
            Some(transition) => self.commit(transition),
            None => log::trace!(target: "phone_input.machine", "no-op {edit:?}"),
        }
    }

    pub(crate) fn reconcile(&mut self, value: &str) {
        if self.last_external.as_deref() == Some(value) {
            return;
        }
        let echo = self
            .last_emitted
            .as_ref()
            .is_some_and(|(full, buffer)| value == full || value == buffer);
        self.last_external = Some(value.to_string());
        if echo {
            log::trace!(target: "phone_input.machine", "external echo {value:?} ignored");
            return;
        }

        if let Some(transition) = reduce(
            &self.state,
            &self.countries,
            self.directory,
            Edit::External { value },
        ) {
            self.commit(transition);
        }
    }

    fn commit(&mut self, transition: Transition) {
        let Transition {
            state,
            country_changed,
            value_changed,
        } = transition;

        log::trace!(
            target: "phone_input.machine",
            "{} {:?} -> {} {:?}",
            self.state.country.iso2,
            self.state.buffer,
            state.country.iso2,
            state.buffer
        );

        self.state = state;
        if self.state.caret_target.is_some() {
            self.deferred.push(DeferredTask::ApplyCaret);
        }

        if country_changed {
            self.observer.country_changed(self.state.country);
        }
        if value_changed {
            let value = self.value();
            self.last_emitted = Some((value.full_number.clone(), self.state.buffer.clone()));
            self.observer.value_changed(&value);
        }
    }
}

/// Initial country: iso2 override, dial-code override, guess from the
/// initial value, configured fallback, directory first; then clamped to the
/// filtered list.
pub(crate) fn resolve_initial_country(
    config: &PhoneInputConfig,
    directory: &Directory,
    list: &CountryList,
) -> &'static Country {
    let resolved = config
        .initial_country
        .as_deref()
        .and_then(|iso2| directory.by_iso2(iso2))
        .or_else(|| {
            config
                .initial_dial_code
                .as_deref()
                .and_then(|code| directory.best_for_dial_code(code))
        })
        .or_else(|| {
            config
                .initial_value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .and_then(|v| directory.guess_from_leading_digits(v))
        })
        .or_else(|| directory.by_iso2(&config.fallback_country))
        .unwrap_or_else(|| directory.first_or_bundled());

    if let Some(listed) = list.find(resolved.iso2) {
        return listed;
    }
    if let Some(first) = list.first() {
        log::debug!(
            target: "phone_input.machine",
            "initial country {} is filtered out; using {}",
            resolved.iso2,
            first.iso2
        );
        return first;
    }

    let fallback = directory.first_or_bundled();
    log::warn!(
        target: "phone_input.machine",
        "country list is empty; falling back to {}",
        fallback.iso2
    );
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use countries::FilterConfig;

    fn config() -> PhoneInputConfig {
        PhoneInputConfig::default()
    }

    fn resolve(config: &PhoneInputConfig) -> &'static str {
        let dir = Directory::global();
        let list = filtered_countries(dir, &config.filter);
        resolve_initial_country(config, dir, &list).iso2
    }

    #[test]
    fn resolution_priority() {
        let mut c = config();
        assert_eq!(resolve(&c), "US");

        c.initial_value = Some("+880 1712".into());
        assert_eq!(resolve(&c), "BD");

        c.initial_dial_code = Some("+44".into());
        assert_eq!(resolve(&c), "GB");

        c.initial_country = Some("de".into());
        assert_eq!(resolve(&c), "DE");

        c.initial_country = Some("zz".into());
        assert_eq!(resolve(&c), "GB");
    }

    #[test]
    fn configurable_fallback() {
        let c = PhoneInputConfig {
            fallback_country: "BD".into(),
            ..config()
        };
        assert_eq!(resolve(&c), "BD");
    }

    #[test]
    fn filtered_out_country_clamps_to_first_listed() {
        let c = PhoneInputConfig {
            initial_country: Some("US".into()),
            filter: FilterConfig {
                only_countries: vec!["GB".into(), "DE".into()],
                ..FilterConfig::default()
            },
            ..config()
        };
        // Directory order: Germany before the United Kingdom.
        assert_eq!(resolve(&c), "DE");
    }

    #[test]
    fn empty_list_falls_back_to_directory_first() {
        let c = PhoneInputConfig {
            filter: FilterConfig {
                only_countries: vec!["XX".into()],
                ..FilterConfig::default()
            },
            ..config()
        };
        assert_eq!(resolve(&c), "AF");
    }

    #[test]
    fn mount_builds_length_enforced_buffer() {
        let input = PhoneInput::new(PhoneInputConfig {
            initial_value: Some("+1 (415) 555-1234 ext 99".into()),
            ..config()
        });
        assert_eq!(input.country().iso2, "US");
        assert_eq!(input.buffer(), "+1 4155551234");
        assert_eq!(input.caret_target(), None);
        assert_eq!(input.pending_tasks(), 0);
    }

    #[test]
    fn formatted_national_uses_mask() {
        let input = PhoneInput::new(PhoneInputConfig {
            initial_value: Some("+14155551234".into()),
            ..config()
        });
        assert_eq!(input.formatted_national(FormatOptions::default()), "(415) 555-1234");
    }

    #[test]
    fn snapshot_reflects_committed_state() {
        let mut input = PhoneInput::new(config());
        input.text_changed("+1 55", Some(5));

        let snap = input.snapshot();
        assert_eq!(snap.country.iso2, "US");
        assert_eq!(snap.buffer, "+1 55");
        assert_eq!(snap.caret_target, Some(5));
    }

    #[test]
    fn debug_output_is_compact() {
        let input = PhoneInput::new(config());
        let dbg = format!("{input:?}");
        assert!(dbg.starts_with("PhoneInput { country: \"US\", buffer: \"+1 \""));
    }
}
