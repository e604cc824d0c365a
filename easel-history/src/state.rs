// Linear, bounded undo/redo state. Pure transitions, no timing concerns.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Maximum number of committed checkpoints retained behind `present`.
/// When the bound is exceeded the oldest checkpoint is dropped.
pub const MAX_HISTORY_SIZE: usize = 25;

/// Committed undo/redo state for one logical field.
///
/// `past` holds checkpoints strictly older than `present`, oldest first.
/// `future` holds undone checkpoints, nearest redo first. `present` is
/// always defined; both stacks may be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryState<T> {
    past: Vec<T>,
    present: T,
    future: Vec<T>,
}

impl<T: Clone + PartialEq> HistoryState<T> {
    /// Create a history whose sole checkpoint is `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            past: Vec::new(),
            present: initial,
            future: Vec::new(),
        }
    }

    /// Commit a new checkpoint.
    ///
    /// A value equal to the current `present` is a no-op: history length is a
    /// function of distinct committed values, not call count. Otherwise the old
    /// present moves onto `past` (trimmed from the front at the size bound),
    /// and any redo branch is discarded.
    ///
    /// Returns whether a checkpoint was actually recorded.
    pub fn commit(&mut self, value: T) -> bool {
        if value == self.present {
            trace!("commit skipped: value equals present");
            return false;
        }

        let old = std::mem::replace(&mut self.present, value);
        self.past.push(old);
        if self.past.len() > MAX_HISTORY_SIZE {
            let overflow = self.past.len() - MAX_HISTORY_SIZE;
            self.past.drain(..overflow);
        }
        self.future.clear();

        debug!(
            past_len = self.past.len(),
            "checkpoint committed, redo branch cleared"
        );
        true
    }

    /// Step back one checkpoint. No-op (returns `false`) when `past` is empty.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop() else {
            trace!("undo skipped: past is empty");
            return false;
        };

        let old = std::mem::replace(&mut self.present, previous);
        self.future.insert(0, old);

        debug!(
            past_len = self.past.len(),
            future_len = self.future.len(),
            "undo applied"
        );
        true
    }

    /// Step forward one checkpoint. No-op (returns `false`) when `future` is empty.
    pub fn redo(&mut self) -> bool {
        if self.future.is_empty() {
            trace!("redo skipped: future is empty");
            return false;
        }

        let next = self.future.remove(0);
        let old = std::mem::replace(&mut self.present, next);
        self.past.push(old);
        if self.past.len() > MAX_HISTORY_SIZE {
            let overflow = self.past.len() - MAX_HISTORY_SIZE;
            self.past.drain(..overflow);
        }

        debug!(
            past_len = self.past.len(),
            future_len = self.future.len(),
            "redo applied"
        );
        true
    }

    /// Replace the history wholesale: both stacks cleared, `present = value`.
    ///
    /// This is for identity changes (loading a preset), not ordinary undo.
    pub fn reset(&mut self, value: T) {
        self.past.clear();
        self.future.clear();
        self.present = value;
        debug!("history reset");
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn present(&self) -> &T {
        &self.present
    }

    /// Committed checkpoints older than `present`, oldest first.
    pub fn past(&self) -> &[T] {
        &self.past
    }

    /// Undone checkpoints available for redo, nearest first.
    pub fn future(&self) -> &[T] {
        &self.future
    }
}
