//! Change notifications.
//!
//! Observers are invoked synchronously from the event that caused the change,
//! country first, then value.

use countries::Country;
use input_core::PhoneValue;
use std::sync::mpsc::Sender;

/// Receives committed changes of a [`PhoneInput`](crate::PhoneInput).
pub trait PhoneInputObserver {
    /// The derived value after every committed user or programmatic edit.
    fn value_changed(&mut self, value: &PhoneValue);

    /// The active country changed. Always followed by [`value_changed`](Self::value_changed).
    fn country_changed(&mut self, _country: &'static Country) {}
}

/// Message form of the notifications, for [`Sender`] observers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhoneInputEvent {
    CountryChanged { country: &'static Country },
    ValueChanged { value: PhoneValue },
}

impl PhoneInputObserver for Sender<PhoneInputEvent> {
    fn value_changed(&mut self, value: &PhoneValue) {
        let event = PhoneInputEvent::ValueChanged {
            value: value.clone(),
        };
        if self.send(event).is_err() {
            log::trace!(target: "phone_input.notify", "value event dropped: receiver gone");
        }
    }

    fn country_changed(&mut self, country: &'static Country) {
        if self.send(PhoneInputEvent::CountryChanged { country }).is_err() {
            log::trace!(target: "phone_input.notify", "country event dropped: receiver gone");
        }
    }
}

type ValueFn = Box<dyn FnMut(&PhoneValue)>;
type CountryFn = Box<dyn FnMut(&'static Country)>;

/// Closure-based observer; unset callbacks are skipped.
///
/// ```
/// use phone_input::{Callbacks, PhoneInput, PhoneInputConfig};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// let callbacks = Callbacks::new().on_change(move |v| sink.borrow_mut().push(v.full_number.clone()));
///
/// let mut input = PhoneInput::with_observer(PhoneInputConfig::default(), callbacks);
/// input.text_changed("+1 555", None);
/// assert_eq!(*seen.borrow(), vec!["+1555".to_string()]);
/// ```
#[derive(Default)]
pub struct Callbacks {
    on_change: Option<ValueFn>,
    on_country_change: Option<CountryFn>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_change(mut self, f: impl FnMut(&PhoneValue) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn on_country_change(mut self, f: impl FnMut(&'static Country) + 'static) -> Self {
        self.on_country_change = Some(Box::new(f));
        self
    }
}

impl std::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_change", &self.on_change.is_some())
            .field("on_country_change", &self.on_country_change.is_some())
            .finish()
    }
}

impl PhoneInputObserver for Callbacks {
    fn value_changed(&mut self, value: &PhoneValue) {
        if let Some(f) = self.on_change.as_mut() {
            f(value);
        }
    }

    fn country_changed(&mut self, country: &'static Country) {
        if let Some(f) = self.on_country_change.as_mut() {
            f(country);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use countries::Directory;
    use input_core::to_phone_value;
    use std::sync::mpsc;

    #[test]
    fn sender_forwards_events_in_order() {
        let (mut tx, rx) = mpsc::channel();
        let us = Directory::global().by_iso2("US").unwrap();
        tx.country_changed(us);
        tx.value_changed(&to_phone_value("+1 5551", Some(us)));

        let events: Vec<_> = rx.try_iter().collect();
        assert!(matches!(events[0], PhoneInputEvent::CountryChanged { country } if country.iso2 == "US"));
        assert!(
            matches!(&events[1], PhoneInputEvent::ValueChanged { value } if value.full_number == "+15551")
        );
    }

    #[test]
    fn sender_survives_dropped_receiver() {
        let (mut tx, rx) = mpsc::channel::<PhoneInputEvent>();
        drop(rx);
        tx.value_changed(&to_phone_value("+1 ", None));
    }

    #[test]
    fn unset_callbacks_are_skipped() {
        let mut callbacks = Callbacks::new();
        callbacks.value_changed(&to_phone_value("+1 ", None));
        assert_eq!(
            format!("{callbacks:?}"),
            "Callbacks { on_change: false, on_country_change: false }"
        );
    }
}
