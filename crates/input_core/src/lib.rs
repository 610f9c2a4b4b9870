//! # input_core
//!
//! UI-agnostic editing layer for a phone-number text box whose leading
//! `"+<dial code> "` span must never be destroyed by the user.
//!
//! This crate provides the fundamental building blocks:
//! - [`codec`]: the `"+dial digits"` buffer, length caps and the derived [`PhoneValue`]
//! - [`normalize`]: repairing proposed text, autofill detection and paste splicing
//! - [`protect`]: key verdicts, caret repair and Home/select-all commands
//! - [`SelectionRange`]: a text selection with start/end byte offsets
//! - [`TextControl`]: the host widget seam, with [`MemoryControl`] as a headless implementation
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any graphics or DOM framework
//! - Layout or hit-testing systems
//! - Platform-specific APIs
//!
//! Every function is a pure transformation over strings and offsets, so the
//! whole policy can be tested without a host.

pub mod codec;
pub mod normalize;
pub mod protect;
mod selection;
mod store;
mod text;
mod traits;

pub use codec::{
    FormatOptions, MIN_VALID_NATIONAL_DIGITS, PhoneValue, SplitNumber, build_buffer,
    extract_national_digits, format_max_length, format_national, max_national_length,
    protected_prefix, protected_prefix_length, split_international, to_phone_value,
    truncate_national,
};
pub use normalize::{
    Autofill, PasteOutcome, apply_paste, canonicalize, caret_after_edit, detect_autofill,
    enforce_max_length, is_autofill_candidate, normalize, sanitize_paste,
};
pub use protect::{Key, KeyCommand, Modifiers, Verdict, classify_key, key_command, repair_selection};
pub use selection::SelectionRange;
pub use store::MemoryControl;
pub use text::{clamp_to_char_boundary, digits_only, strip_plus};
pub use traits::TextControl;
