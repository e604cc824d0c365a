// Shared handle so several widgets bound to one logical field (a slider and
// its numeric readout, say) drive a single controller instance.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::clock::{Clock, SystemClock};
use crate::debounce::DebouncedHistory;
use crate::state::HistoryState;

/// Cloneable handle to one [`DebouncedHistory`].
///
/// Clones point at the same controller, so every widget sees the same live
/// value, the same `can_undo`/`can_redo` flags, and the same single pending
/// timer. Execution is cooperative and single-threaded; `Rc<RefCell<_>>` is
/// the whole synchronization story.
pub struct SharedHistory<T, C: Clock = SystemClock> {
    inner: Rc<RefCell<DebouncedHistory<T, C>>>,
}

impl<T, C: Clock> Clone for SharedHistory<T, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + PartialEq> SharedHistory<T> {
    pub fn new(initial: T) -> Self {
        Self::from_controller(DebouncedHistory::new(initial))
    }

    pub fn with_quiet_period(initial: T, quiet_period: Duration) -> Self {
        Self::from_controller(DebouncedHistory::with_quiet_period(initial, quiet_period))
    }
}

impl<T: Clone + PartialEq, C: Clock> SharedHistory<T, C> {
    pub fn from_controller(controller: DebouncedHistory<T, C>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(controller)),
        }
    }

    pub fn set(&self, value: T) {
        self.inner.borrow_mut().set(value);
    }

    pub fn set_with(&self, f: impl FnOnce(&T) -> T) {
        self.inner.borrow_mut().set_with(f);
    }

    pub fn undo(&self) -> bool {
        self.inner.borrow_mut().undo()
    }

    pub fn redo(&self) -> bool {
        self.inner.borrow_mut().redo()
    }

    pub fn reset(&self, value: T) {
        self.inner.borrow_mut().reset(value);
    }

    pub fn tick(&self) -> bool {
        self.inner.borrow_mut().tick()
    }

    /// Clone of the current live value. Widgets edit the clone and write it
    /// back through [`set`](Self::set) when it changes.
    pub fn value(&self) -> T {
        self.inner.borrow().value().clone()
    }

    /// Borrow the live value without cloning.
    pub fn with_value<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(self.inner.borrow().value())
    }

    pub fn can_undo(&self) -> bool {
        self.inner.borrow().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.inner.borrow().can_redo()
    }

    pub fn has_pending(&self) -> bool {
        self.inner.borrow().has_pending()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.inner.borrow().next_deadline()
    }

    /// Clone of the committed-history snapshot, for diagnostics.
    pub fn history_snapshot(&self) -> HistoryState<T> {
        self.inner.borrow().history().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_one_controller() {
        let slider = SharedHistory::with_quiet_period(50u32, Duration::ZERO);
        let readout = slider.clone();

        slider.set(75);
        assert_eq!(readout.value(), 75);

        readout.tick();
        assert!(slider.can_undo());
        assert!(readout.can_undo());

        slider.undo();
        assert_eq!(readout.value(), 50);
        assert!(slider.can_redo());
        assert!(readout.can_redo());
    }

    #[test]
    fn test_zero_quiet_period_commits_on_next_tick() {
        let h = SharedHistory::with_quiet_period("".to_string(), Duration::ZERO);
        h.set("x".into());
        assert!(h.tick());
        assert_eq!(h.history_snapshot().present(), "x");
    }
}
