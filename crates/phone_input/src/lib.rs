//! # phone_input
//!
//! State machine behind a phone-number text box with a country picker.
//!
//! The buffer always reads `"+<dial code> <national digits>"`. The dial-code
//! prefix cannot be destroyed by keystrokes, pastes, autofill or selection;
//! the national digits are freely editable up to the country's length cap.
//!
//! ## Integration
//!
//! ```
//! use phone_input::{PhoneInput, PhoneInputConfig};
//! use input_core::{MemoryControl, SelectionRange};
//!
//! let mut input = PhoneInput::new(PhoneInputConfig::default());
//! let mut control = MemoryControl::new(input.buffer());
//!
//! // The host applies its default editing, then reports the new text.
//! control.insert_text("5");
//! input.text_changed(control.value(), Some(control.caret()));
//! control.set_value(input.buffer());
//! input.run_deferred(&mut control);
//!
//! assert_eq!(input.value().full_number, "+15");
//! assert_eq!(control.selection(), SelectionRange::caret(4));
//! ```

mod config;
mod control;
mod deferred;
mod machine;
mod notify;
pub mod reduce;

pub use config::{ConfigError, DEFAULT_FALLBACK_COUNTRY, PhoneInputConfig};
pub use control::KeyOutcome;
pub use deferred::{DeferredQueue, DeferredTask};
pub use machine::{PhoneInput, Snapshot};
pub use notify::{Callbacks, PhoneInputEvent, PhoneInputObserver};
pub use reduce::{Edit, PhoneState, Transition, reduce};

pub use countries::{Country, CountryList, Directory, FilterConfig};
pub use input_core::{Key, Modifiers, PhoneValue, SelectionRange, TextControl};
