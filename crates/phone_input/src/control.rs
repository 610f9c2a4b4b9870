//! Host-control events: keys, selection, focus and the deferred drain.
//!
//! None of these mutate the buffer, so they stay active while the input is
//! disabled or read-only.

use crate::deferred::DeferredTask;
use crate::machine::PhoneInput;
use input_core::{
    Key, Modifiers, SelectionRange, TextControl, Verdict, classify_key, key_command,
    repair_selection,
};

/// What the host must do with a key event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Let the default handling run.
    Default,
    /// Suppress the default handling.
    Suppress,
    /// Suppress the default handling and apply this selection instead.
    Select(SelectionRange),
}

impl PhoneInput {
    /// Protection verdict and Home/select-all commands for a key event.
    pub fn key_pressed(
        &mut self,
        key: Key,
        modifiers: Modifiers,
        selection: SelectionRange,
    ) -> KeyOutcome {
        self.begin_event();

        let len = self.state.buffer.len();
        let protected = self.protected_len();

        if classify_key(key, modifiers, selection, len, protected) == Verdict::Block {
            return KeyOutcome::Suppress;
        }

        key_command(key, modifiers, selection, len, protected)
            .map_or(KeyOutcome::Default, |cmd| KeyOutcome::Select(cmd.selection()))
    }

    /// Synchronous caret repair; `Some` is the selection the host must apply.
    pub fn selection_changed(&mut self, selection: SelectionRange) -> Option<SelectionRange> {
        self.begin_event();
        repair_selection(selection, self.protected_len())
    }

    /// The control gained focus; the caret is repaired on the next drain.
    pub fn focused(&mut self) {
        self.begin_event();
        self.deferred.push(DeferredTask::RepairCaret);
    }

    /// The control was clicked; the caret is repaired on the next drain.
    pub fn clicked(&mut self) {
        self.begin_event();
        self.deferred.push(DeferredTask::RepairCaret);
    }

    /// Focus `control` and schedule the focus caret repair.
    pub fn focus(&mut self, control: &mut dyn TextControl) {
        control.focus();
        self.focused();
    }

    pub fn blur(&mut self, control: &mut dyn TextControl) {
        control.blur();
    }

    /// Run every queued task against `control`, in order.
    ///
    /// Call after the host has rendered [`buffer`](PhoneInput::buffer) and
    /// finished its own default handling.
    pub fn run_deferred(&mut self, control: &mut dyn TextControl) {
        while let Some(task) = self.deferred.pop() {
            match task {
                DeferredTask::ApplyCaret => {
                    if let Some(target) = self.state.caret_target.take() {
                        let len = self.state.buffer.len();
                        let pos = target.clamp(self.protected_len().min(len), len);
                        control.set_caret(pos);
                    }
                }
                DeferredTask::RepairCaret => {
                    if let Some(fixed) = repair_selection(control.selection(), self.protected_len()) {
                        control.set_selection(fixed);
                    }
                }
                DeferredTask::Reconcile(value) => self.reconcile(&value),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PhoneInputConfig;
    use input_core::MemoryControl;

    fn input(value: &str) -> PhoneInput {
        PhoneInput::new(PhoneInputConfig {
            initial_value: Some(value.into()),
            ..PhoneInputConfig::default()
        })
    }

    #[test]
    fn blocked_backspace_is_suppressed() {
        let mut input = input("+1 5551234");
        let out = input.key_pressed(Key::Backspace, Modifiers::NONE, SelectionRange::caret(0));
        assert_eq!(out, KeyOutcome::Suppress);
        assert_eq!(input.buffer(), "+1 5551234");
    }

    #[test]
    fn home_selects_boundary() {
        let mut input = input("+1 5551234");
        let out = input.key_pressed(Key::Home, Modifiers::NONE, SelectionRange::caret(7));
        assert_eq!(out, KeyOutcome::Select(SelectionRange::caret(3)));
        let out = input.key_pressed(Key::Character('a'), Modifiers::CTRL, SelectionRange::caret(7));
        assert_eq!(out, KeyOutcome::Select(SelectionRange::new(3, 10)));
        let out = input.key_pressed(Key::Character('5'), Modifiers::NONE, SelectionRange::caret(7));
        assert_eq!(out, KeyOutcome::Default);
    }

    #[test]
    fn focus_repairs_caret_on_drain() {
        let mut input = input("+1 555");
        let mut control = MemoryControl::new(input.buffer());
        control.set_selection(SelectionRange::caret(0));

        input.focus(&mut control);
        assert!(control.has_focus());
        assert_eq!(control.selection(), SelectionRange::caret(0));

        input.run_deferred(&mut control);
        assert_eq!(control.selection(), SelectionRange::caret(3));
        assert_eq!(input.pending_tasks(), 0);

        input.blur(&mut control);
        assert!(!control.has_focus());
    }

    #[test]
    fn focus_repair_survives_an_undrained_key_event() {
        let mut input = input("+1 555");
        let mut control = MemoryControl::new(input.buffer());
        control.set_selection(SelectionRange::caret(0));

        input.focus(&mut control);
        let out = input.key_pressed(Key::ArrowRight, Modifiers::NONE, control.selection());
        assert_eq!(out, KeyOutcome::Default);
        assert_eq!(input.pending_tasks(), 1);

        input.run_deferred(&mut control);
        assert_eq!(control.selection(), SelectionRange::caret(3));
    }

    #[test]
    fn repeated_clicks_queue_one_repair() {
        let mut input = input("+1 555");
        input.clicked();
        input.clicked();
        assert_eq!(input.pending_tasks(), 1);
    }

    #[test]
    fn selection_change_is_answered_synchronously() {
        let mut input = input("+1 555");
        assert_eq!(
            input.selection_changed(SelectionRange::new(1, 5)),
            Some(SelectionRange::new(3, 5))
        );
        assert_eq!(input.selection_changed(SelectionRange::caret(4)), None);
    }

    #[test]
    fn caret_target_is_applied_once() {
        let mut input = input("+1 555");
        let mut control = MemoryControl::new(input.buffer());
        input.clear();
        control.set_value(input.buffer());
        control.set_selection(SelectionRange::caret(0));

        input.run_deferred(&mut control);
        assert_eq!(control.selection(), SelectionRange::caret(3));
        assert_eq!(input.caret_target(), None);
    }
}
