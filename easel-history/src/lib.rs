//! easel-history: debounced undo/redo history for parameter-editing UIs.
//!
//! Design rules:
//! - History is linear and bounded; committing after an undo truncates the redo branch.
//! - High-frequency edits (keystrokes, slider drags) coalesce into one checkpoint
//!   per quiet period; the UI always sees the live value immediately.
//! - Everything is single-threaded and cooperative: the host event loop drives
//!   timers by calling `tick()`, and cancellation is just dropping a deadline.
//! - One controller per logical field; widgets bound to the same field share a
//!   `SharedHistory` handle, never independent controllers.

pub mod clock;
pub mod debounce;
pub mod shared;
pub mod shortcuts;
pub mod state;

pub use clock::{Clock, SystemClock};
pub use debounce::{DebouncedHistory, DEFAULT_QUIET_PERIOD};
pub use shared::SharedHistory;
pub use shortcuts::{KeyChord, ShortcutAction, ShortcutRouter, UndoRedo};
pub use state::{HistoryState, MAX_HISTORY_SIZE};
