//! Protection policy for discrete key and selection events.
//!
//! Decides which keystrokes may reach the host's default editing and where the
//! caret or selection must be moved so the protected prefix stays intact.

use crate::selection::SelectionRange;

/// Logical key, independent of the host's key-event type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Character(char),
    Backspace,
    Delete,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Tab,
    Enter,
    Escape,
    /// Anything else the host reports.
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name.
    ///
    /// Single-character names become [`Key::Character`].
    pub fn from_key_name(name: &str) -> Key {
        match name {
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "Home" => Key::Home,
            "End" => Key::End,
            "Tab" => Key::Tab,
            "Enter" => Key::Enter,
            "Escape" => Key::Escape,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Key::Character(ch),
                    _ => Key::Other,
                }
            }
        }
    }

    #[inline]
    pub fn is_navigation(self) -> bool {
        matches!(
            self,
            Key::ArrowLeft
                | Key::ArrowRight
                | Key::ArrowUp
                | Key::ArrowDown
                | Key::Home
                | Key::End
                | Key::Tab
        )
    }

    /// Case-insensitive character match, for shortcut detection.
    #[inline]
    fn is_char(self, c: char) -> bool {
        matches!(self, Key::Character(k) if k.eq_ignore_ascii_case(&c))
    }
}

/// Modifier keys held during a key event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        meta: false,
        shift: false,
        alt: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ..Modifiers::NONE
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };

    /// Ctrl or Cmd (meta).
    #[inline]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Whether a key event may reach the host's default handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Block,
}

/// Protection verdict for a key event against the current selection.
pub fn classify_key(
    key: Key,
    modifiers: Modifiers,
    selection: SelectionRange,
    buffer_len: usize,
    protected_len: usize,
) -> Verdict {
    let SelectionRange { start, end } = selection;

    if key.is_navigation() || (modifiers.command() && key.is_char('c')) {
        return Verdict::Allow;
    }

    let deleting = matches!(key, Key::Backspace | Key::Delete);
    if deleting && selection.covers_all(buffer_len) {
        return Verdict::Block;
    }

    let blocked = match key {
        Key::Backspace => (start <= protected_len && start == end) || start < protected_len,
        Key::Delete => start < protected_len,
        _ if modifiers.command() && key.is_char('x') => start < protected_len,
        _ => false,
    };

    if blocked {
        log::trace!(
            target: "input_core.protect",
            "blocked {key:?} at {start}..{end} (protected={protected_len})"
        );
        Verdict::Block
    } else {
        Verdict::Allow
    }
}

/// Where a selection must move so it does not start inside the prefix.
///
/// Returns `None` when no change is needed. A caret before the boundary snaps
/// to it; a range straddling the boundary keeps its end and has its start
/// clamped. A range wholly inside the prefix is left alone.
pub fn repair_selection(selection: SelectionRange, protected_len: usize) -> Option<SelectionRange> {
    let SelectionRange { start, end } = selection;
    if start >= protected_len {
        return None;
    }
    if selection.is_collapsed() {
        return Some(SelectionRange::caret(protected_len));
    }
    if end > protected_len {
        return Some(SelectionRange::new(protected_len, end));
    }
    None
}

/// Selection produced by a key command that replaces the default effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    /// Home: caret to the boundary.
    CaretToBoundary(SelectionRange),
    /// Shift+Home: select from the boundary to the current end.
    SelectToBoundary(SelectionRange),
    /// Ctrl/Cmd+A: select the national part only.
    SelectNational(SelectionRange),
}

impl KeyCommand {
    /// The selection to apply.
    #[inline]
    pub fn selection(self) -> SelectionRange {
        match self {
            KeyCommand::CaretToBoundary(s)
            | KeyCommand::SelectToBoundary(s)
            | KeyCommand::SelectNational(s) => s,
        }
    }
}

/// Home / Shift+Home / select-all overrides; `None` for every other key.
pub fn key_command(
    key: Key,
    modifiers: Modifiers,
    selection: SelectionRange,
    buffer_len: usize,
    protected_len: usize,
) -> Option<KeyCommand> {
    match key {
        Key::Home if modifiers.shift => Some(KeyCommand::SelectToBoundary(SelectionRange::new(
            protected_len,
            selection.end.max(protected_len),
        ))),
        Key::Home => Some(KeyCommand::CaretToBoundary(SelectionRange::caret(
            protected_len,
        ))),
        _ if modifiers.command() && key.is_char('a') => Some(KeyCommand::SelectNational(
            SelectionRange::new(protected_len, buffer_len.max(protected_len)),
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // "+1 5551234": protected = 3, len = 10.
    const P: usize = 3;
    const LEN: usize = 10;

    fn verdict(key: Key, mods: Modifiers, sel: SelectionRange) -> Verdict {
        classify_key(key, mods, sel, LEN, P)
    }

    #[test]
    fn key_names_map() {
        assert_eq!(Key::from_key_name("Backspace"), Key::Backspace);
        assert_eq!(Key::from_key_name("a"), Key::Character('a'));
        assert_eq!(Key::from_key_name("€"), Key::Character('€'));
        assert_eq!(Key::from_key_name("F5"), Key::Other);
        assert_eq!(Key::from_key_name(""), Key::Other);
    }

    #[test]
    fn navigation_and_copy_always_allowed() {
        for key in [Key::ArrowLeft, Key::Home, Key::End, Key::Tab, Key::ArrowUp] {
            assert_eq!(verdict(key, Modifiers::NONE, SelectionRange::caret(0)), Verdict::Allow);
        }
        assert_eq!(
            verdict(Key::Character('C'), Modifiers::CTRL, SelectionRange::new(0, LEN)),
            Verdict::Allow
        );
    }

    #[test]
    fn backspace_at_caret_zero_is_blocked() {
        assert_eq!(
            verdict(Key::Backspace, Modifiers::NONE, SelectionRange::caret(0)),
            Verdict::Block
        );
    }

    #[test]
    fn backspace_at_boundary_is_blocked_but_after_is_allowed() {
        assert_eq!(
            verdict(Key::Backspace, Modifiers::NONE, SelectionRange::caret(P)),
            Verdict::Block
        );
        assert_eq!(
            verdict(Key::Backspace, Modifiers::NONE, SelectionRange::caret(P + 1)),
            Verdict::Allow
        );
        // A range starting exactly at the boundary deletes national digits only.
        assert_eq!(
            verdict(Key::Backspace, Modifiers::NONE, SelectionRange::new(P, 6)),
            Verdict::Allow
        );
        assert_eq!(
            verdict(Key::Backspace, Modifiers::NONE, SelectionRange::new(2, 6)),
            Verdict::Block
        );
    }

    #[test]
    fn delete_blocked_only_inside_prefix() {
        assert_eq!(
            verdict(Key::Delete, Modifiers::NONE, SelectionRange::caret(2)),
            Verdict::Block
        );
        assert_eq!(
            verdict(Key::Delete, Modifiers::NONE, SelectionRange::caret(P)),
            Verdict::Allow
        );
    }

    #[test]
    fn whole_buffer_delete_is_blocked() {
        assert_eq!(
            verdict(Key::Delete, Modifiers::NONE, SelectionRange::new(0, LEN)),
            Verdict::Block
        );
        // Typing over a full selection is left to the normalizer.
        assert_eq!(
            verdict(Key::Character('5'), Modifiers::NONE, SelectionRange::new(0, LEN)),
            Verdict::Allow
        );
    }

    #[test]
    fn cut_blocked_inside_prefix() {
        let cmd = Modifiers {
            meta: true,
            ..Modifiers::NONE
        };
        assert_eq!(
            verdict(Key::Character('x'), cmd, SelectionRange::new(1, 5)),
            Verdict::Block
        );
        assert_eq!(
            verdict(Key::Character('x'), cmd, SelectionRange::new(P, 5)),
            Verdict::Allow
        );
    }

    #[test]
    fn repair_snaps_caret_and_clamps_range() {
        assert_eq!(
            repair_selection(SelectionRange::caret(1), P),
            Some(SelectionRange::caret(P))
        );
        assert_eq!(
            repair_selection(SelectionRange::new(0, 7), P),
            Some(SelectionRange::new(P, 7))
        );
        assert_eq!(repair_selection(SelectionRange::caret(5), P), None);
        assert_eq!(repair_selection(SelectionRange::new(0, P), P), None);
    }

    #[test]
    fn home_commands() {
        let sel = SelectionRange::new(5, 8);
        assert_eq!(
            key_command(Key::Home, Modifiers::NONE, sel, LEN, P).map(KeyCommand::selection),
            Some(SelectionRange::caret(P))
        );
        assert_eq!(
            key_command(Key::Home, Modifiers::SHIFT, sel, LEN, P).map(KeyCommand::selection),
            Some(SelectionRange::new(P, 8))
        );
        assert_eq!(
            key_command(Key::Home, Modifiers::SHIFT, SelectionRange::caret(1), LEN, P)
                .map(KeyCommand::selection),
            Some(SelectionRange::caret(P))
        );
    }

    #[test]
    fn select_all_selects_national_part() {
        assert_eq!(
            key_command(Key::Character('a'), Modifiers::CTRL, SelectionRange::caret(4), LEN, P),
            Some(KeyCommand::SelectNational(SelectionRange::new(P, LEN)))
        );
        assert_eq!(
            key_command(Key::Character('a'), Modifiers::NONE, SelectionRange::caret(4), LEN, P),
            None
        );
    }
}
