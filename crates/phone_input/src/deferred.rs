//! Work that must wait until the host has finished its own event handling.

use std::collections::VecDeque;

/// One unit of deferred work.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeferredTask {
    /// Move the host caret to the state's `caret_target`.
    ApplyCaret,
    /// Read the host selection and repair it against the protected prefix.
    RepairCaret,
    /// Reconcile a controlled-mode external value.
    Reconcile(String),
}

/// FIFO of [`DeferredTask`]s owned by one phone input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeferredQueue {
    tasks: VecDeque<DeferredTask>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue `task`. A second [`DeferredTask::ApplyCaret`] or
    /// [`DeferredTask::RepairCaret`] is coalesced into the one already queued.
    pub fn push(&mut self, task: DeferredTask) {
        let caret_task = matches!(task, DeferredTask::ApplyCaret | DeferredTask::RepairCaret);
        if caret_task && self.tasks.contains(&task) {
            return;
        }
        self.tasks.push_back(task);
    }

    pub fn pop(&mut self) -> Option<DeferredTask> {
        self.tasks.pop_front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Hand back pending reconciliations in order, leaving caret work queued.
    ///
    /// Called at the start of every event: reconciliation must land before
    /// the event is reduced. Caret tasks stay for the next drain, so a repair
    /// scheduled by event N still runs if event N+1 arrives first.
    pub fn take_for_new_event(&mut self) -> Vec<String> {
        let mut values = Vec::new();
        self.tasks.retain(|task| match task {
            DeferredTask::Reconcile(value) => {
                values.push(value.clone());
                false
            }
            DeferredTask::ApplyCaret | DeferredTask::RepairCaret => true,
        });
        if !values.is_empty() {
            log::trace!(
                target: "phone_input.deferred",
                "applying {} pending reconciliation(s) before the event",
                values.len()
            );
        }
        values
    }
}
