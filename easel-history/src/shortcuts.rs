// Global keyboard-shortcut matching and dispatch.
//
// Recognized combinations are exactly Ctrl-or-Meta+Z (undo) and
// Ctrl-or-Meta+Y (redo), Shift unset in both. The router fans a press out to
// either the focused field or, when nothing is focused, to every registered
// field, which is how the reference UI behaves with its fixed set of fields.

use tracing::{debug, trace};

use crate::clock::Clock;
use crate::debounce::DebouncedHistory;
use crate::shared::SharedHistory;

/// A pressed key plus modifier state, as reported by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub key: char,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyChord {
    pub fn new(key: char, ctrl: bool, meta: bool, shift: bool) -> Self {
        Self {
            key,
            ctrl,
            meta,
            shift,
        }
    }
}

/// History navigation requested by a shortcut press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Undo,
    Redo,
}

/// Map a chord to a history action, or `None` for anything unrecognized.
///
/// Shift must be unset: Ctrl+Shift+Z is left to the host (some platforms bind
/// it to redo, which this UI does not).
pub fn action_for(chord: &KeyChord) -> Option<ShortcutAction> {
    if !(chord.ctrl || chord.meta) || chord.shift {
        return None;
    }
    match chord.key {
        'z' | 'Z' => Some(ShortcutAction::Undo),
        'y' | 'Y' => Some(ShortcutAction::Redo),
        _ => None,
    }
}

/// The slice of a controller the shortcut router needs.
pub trait UndoRedo {
    fn undo(&mut self) -> bool;
    fn redo(&mut self) -> bool;
    fn can_undo(&self) -> bool;
    fn can_redo(&self) -> bool;
}

impl<T: Clone + PartialEq, C: Clock> UndoRedo for DebouncedHistory<T, C> {
    fn undo(&mut self) -> bool {
        DebouncedHistory::undo(self)
    }

    fn redo(&mut self) -> bool {
        DebouncedHistory::redo(self)
    }

    fn can_undo(&self) -> bool {
        DebouncedHistory::can_undo(self)
    }

    fn can_redo(&self) -> bool {
        DebouncedHistory::can_redo(self)
    }
}

impl<T: Clone + PartialEq, C: Clock> UndoRedo for SharedHistory<T, C> {
    fn undo(&mut self) -> bool {
        SharedHistory::undo(self)
    }

    fn redo(&mut self) -> bool {
        SharedHistory::redo(self)
    }

    fn can_undo(&self) -> bool {
        SharedHistory::can_undo(self)
    }

    fn can_redo(&self) -> bool {
        SharedHistory::can_redo(self)
    }
}

/// Process-wide shortcut dispatcher.
///
/// Each logical field registers its shared controller under an id. When a
/// field has focus the press goes only to it; otherwise every field reacts
/// (all stacks are independent, so a broadcast undo per field matches what
/// the user sees as "undo everywhere").
#[derive(Default)]
pub struct ShortcutRouter {
    targets: Vec<(String, Box<dyn UndoRedo>)>,
    focus: Option<String>,
}

impl ShortcutRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: impl Into<String>, target: impl UndoRedo + 'static) {
        let id = id.into();
        debug!(field = %id, "shortcut target registered");
        self.targets.push((id, Box::new(target)));
    }

    /// Route subsequent presses to one field only, or back to broadcast with
    /// `None`. Unknown ids clear the focus.
    pub fn set_focus(&mut self, id: Option<&str>) {
        self.focus = id
            .filter(|id| self.targets.iter().any(|(t, _)| t == id))
            .map(str::to_owned);
        trace!(focus = ?self.focus, "shortcut focus changed");
    }

    pub fn focus(&self) -> Option<&str> {
        self.focus.as_deref()
    }

    /// Whether any in-scope field (focused, or all when unfocused) can undo.
    /// Backs the enabled state of undo affordances.
    pub fn can_undo_any(&self) -> bool {
        self.in_scope().any(|t| t.can_undo())
    }

    /// Whether any in-scope field can redo.
    pub fn can_redo_any(&self) -> bool {
        self.in_scope().any(|t| t.can_redo())
    }

    fn in_scope(&self) -> impl Iterator<Item = &dyn UndoRedo> + '_ {
        self.targets
            .iter()
            .filter(|(id, _)| match &self.focus {
                Some(focus) => id == focus,
                None => true,
            })
            .map(|(_, t)| t.as_ref())
    }

    /// Dispatch a raw chord. Returns whether any field's history changed, so
    /// the host knows to suppress the platform default for the combination.
    pub fn dispatch(&mut self, chord: &KeyChord) -> bool {
        match action_for(chord) {
            Some(action) => self.handle(action),
            None => false,
        }
    }

    /// Dispatch an already-decoded action.
    pub fn handle(&mut self, action: ShortcutAction) -> bool {
        let mut changed = false;
        for (id, target) in &mut self.targets {
            if let Some(focus) = &self.focus {
                if id != focus {
                    continue;
                }
            }
            let moved = match action {
                ShortcutAction::Undo => target.can_undo() && target.undo(),
                ShortcutAction::Redo => target.can_redo() && target.redo(),
            };
            if moved {
                debug!(field = %id, ?action, "shortcut applied");
                changed = true;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chord(key: char, ctrl: bool, meta: bool, shift: bool) -> KeyChord {
        KeyChord::new(key, ctrl, meta, shift)
    }

    #[test]
    fn test_chord_matching_is_exact() {
        assert_eq!(
            action_for(&chord('z', true, false, false)),
            Some(ShortcutAction::Undo)
        );
        assert_eq!(
            action_for(&chord('Z', false, true, false)),
            Some(ShortcutAction::Undo)
        );
        assert_eq!(
            action_for(&chord('y', true, false, false)),
            Some(ShortcutAction::Redo)
        );
        assert_eq!(
            action_for(&chord('Y', false, true, false)),
            Some(ShortcutAction::Redo)
        );

        // Shift, missing modifier, or another key: not ours.
        assert_eq!(action_for(&chord('z', true, false, true)), None);
        assert_eq!(action_for(&chord('z', false, false, false)), None);
        assert_eq!(action_for(&chord('x', true, false, false)), None);
    }

    #[test]
    fn test_broadcast_reaches_every_field() {
        let prompt = SharedHistory::with_quiet_period("".to_string(), std::time::Duration::ZERO);
        let batch = SharedHistory::with_quiet_period(1u32, std::time::Duration::ZERO);

        prompt.set("cat".into());
        prompt.tick();
        batch.set(4);
        batch.tick();

        let mut router = ShortcutRouter::new();
        router.register("prompt", prompt.clone());
        router.register("batch", batch.clone());

        assert!(router.can_undo_any());
        assert!(router.dispatch(&chord('z', true, false, false)));
        assert_eq!(prompt.value(), "");
        assert_eq!(batch.value(), 1);
        assert!(!router.can_undo_any());
        assert!(router.can_redo_any());
    }

    #[test]
    fn test_focus_limits_dispatch_to_one_field() {
        let prompt = SharedHistory::with_quiet_period("".to_string(), std::time::Duration::ZERO);
        let batch = SharedHistory::with_quiet_period(1u32, std::time::Duration::ZERO);

        prompt.set("cat".into());
        prompt.tick();
        batch.set(4);
        batch.tick();

        let mut router = ShortcutRouter::new();
        router.register("prompt", prompt.clone());
        router.register("batch", batch.clone());
        router.set_focus(Some("batch"));

        assert!(router.handle(ShortcutAction::Undo));
        assert_eq!(prompt.value(), "cat");
        assert_eq!(batch.value(), 1);
    }

    #[test]
    fn test_press_with_nothing_to_undo_reports_unhandled() {
        let prompt = SharedHistory::with_quiet_period("".to_string(), std::time::Duration::ZERO);
        let mut router = ShortcutRouter::new();
        router.register("prompt", prompt);

        assert!(!router.handle(ShortcutAction::Undo));
        assert!(!router.handle(ShortcutAction::Redo));
    }

    #[test]
    fn test_unknown_focus_id_falls_back_to_broadcast() {
        let prompt = SharedHistory::with_quiet_period("".to_string(), std::time::Duration::ZERO);
        prompt.set("cat".into());
        prompt.tick();

        let mut router = ShortcutRouter::new();
        router.register("prompt", prompt.clone());
        router.set_focus(Some("no-such-field"));
        assert_eq!(router.focus(), None);

        assert!(router.handle(ShortcutAction::Undo));
        assert_eq!(prompt.value(), "");
    }
}
