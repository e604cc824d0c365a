// Debounced commit controller: mediates between high-frequency edits and the
// append-only history store using a quiet-period deadline.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::state::HistoryState;

/// Quiet period after the last edit before the live value becomes a checkpoint.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Wraps one [`HistoryState`] and coalesces a burst of `set` calls into a
/// single checkpoint per quiet period.
///
/// The controller tracks a `live` value that the UI renders immediately on
/// every edit, separate from the committed `present`. Each `set` restarts a
/// single pending deadline; the host event loop calls [`tick`](Self::tick)
/// (once per frame is fine) and the live value is committed on the first tick
/// after the deadline passes undisturbed.
///
/// Undo, redo and reset cancel the pending deadline before touching the
/// store: a not-yet-committed live edit is discarded on history navigation,
/// never committed first. Dropping the controller drops the deadline with it,
/// so nothing commits after the owning widget is gone.
pub struct DebouncedHistory<T, C: Clock = SystemClock> {
    store: HistoryState<T>,
    live: T,
    deadline: Option<Instant>,
    quiet_period: Duration,
    clock: C,
}

impl<T: Clone + PartialEq> DebouncedHistory<T> {
    /// Create a controller with the default quiet period and the system clock.
    pub fn new(initial: T) -> Self {
        Self::with_clock(initial, DEFAULT_QUIET_PERIOD, SystemClock)
    }

    /// Create a controller with a custom quiet period.
    pub fn with_quiet_period(initial: T, quiet_period: Duration) -> Self {
        Self::with_clock(initial, quiet_period, SystemClock)
    }
}

impl<T: Clone + PartialEq, C: Clock> DebouncedHistory<T, C> {
    /// Create a controller with an explicit clock (used by tests).
    pub fn with_clock(initial: T, quiet_period: Duration, clock: C) -> Self {
        Self {
            live: initial.clone(),
            store: HistoryState::new(initial),
            deadline: None,
            quiet_period,
            clock,
        }
    }

    /// Propose a new live value.
    ///
    /// The value is visible through [`value`](Self::value) immediately; the
    /// quiet-period deadline restarts, superseding any pending one.
    pub fn set(&mut self, value: T) {
        self.live = value;
        self.restart_deadline();
    }

    /// Functional-update form of [`set`](Self::set): computes the next value
    /// from the current live value, so queued updates never race a stale read.
    pub fn set_with(&mut self, f: impl FnOnce(&T) -> T) {
        self.live = f(&self.live);
        self.restart_deadline();
    }

    /// Drive the quiet-period timer.
    ///
    /// Commits the live value once the deadline has passed. Returns whether a
    /// checkpoint was recorded (a live value equal to `present` expires into
    /// a no-op).
    pub fn tick(&mut self) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if self.clock.now() < deadline {
            return false;
        }

        self.deadline = None;
        let committed = self.store.commit(self.live.clone());
        debug!(committed, "quiet period elapsed");
        committed
    }

    /// Step back one checkpoint, discarding any pending live edit first.
    ///
    /// The live value always snaps to the store's `present` afterwards, even
    /// when the navigation itself was a no-op.
    pub fn undo(&mut self) -> bool {
        self.cancel_pending();
        let moved = self.store.undo();
        self.live = self.store.present().clone();
        moved
    }

    /// Step forward one checkpoint, discarding any pending live edit first.
    pub fn redo(&mut self) -> bool {
        self.cancel_pending();
        let moved = self.store.redo();
        self.live = self.store.present().clone();
        moved
    }

    /// Replace the field's identity: pending edit discarded, history cleared.
    pub fn reset(&mut self, value: T) {
        self.cancel_pending();
        self.live = value.clone();
        self.store.reset(value);
    }

    /// The immediately-visible value (may be ahead of the committed `present`).
    pub fn value(&self) -> &T {
        &self.live
    }

    pub fn can_undo(&self) -> bool {
        self.store.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.store.can_redo()
    }

    /// Raw committed-history snapshot, for diagnostics and tests.
    pub fn history(&self) -> &HistoryState<T> {
        &self.store
    }

    /// Whether an edit is waiting out its quiet period.
    pub fn has_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Deadline of the pending edit, if any, so hosts can schedule a wakeup
    /// instead of polling blind.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    fn restart_deadline(&mut self) {
        let superseded = self.deadline.is_some();
        self.deadline = Some(self.clock.now() + self.quiet_period);
        trace!(superseded, "quiet-period deadline restarted");
    }

    fn cancel_pending(&mut self) {
        if self.deadline.take().is_some() {
            debug!("pending edit discarded");
        }
    }
}
