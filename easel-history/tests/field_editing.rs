use std::time::Duration;

use easel_history::{KeyChord, SharedHistory, ShortcutRouter};

// A slider and its numeric readout share one controller; a zero quiet period
// makes every tick a commit boundary so the flow reads like the real UI.
#[test]
fn slider_and_readout_edit_one_history() {
    let slider = SharedHistory::with_quiet_period(512u32, Duration::ZERO);
    let readout = slider.clone();

    // Drag: a burst of live updates, one tick after the drag ends.
    for w in [520, 560, 600, 640] {
        slider.set(w);
    }
    assert_eq!(readout.value(), 640);
    assert!(slider.tick());
    assert_eq!(slider.history_snapshot().past(), [512]);

    // Typing into the readout goes through the same stack.
    readout.set(1024);
    assert!(readout.tick());
    assert_eq!(slider.history_snapshot().past(), [512, 640]);

    // Ctrl+Z twice walks both widgets back together.
    let mut router = ShortcutRouter::new();
    router.register("width", slider.clone());

    let undo = KeyChord::new('z', true, false, false);
    assert!(router.dispatch(&undo));
    assert_eq!(slider.value(), 640);
    assert!(router.dispatch(&undo));
    assert_eq!(readout.value(), 512);
    assert!(!router.dispatch(&undo));

    // Ctrl+Y brings the first checkpoint back.
    assert!(router.dispatch(&KeyChord::new('y', true, false, false)));
    assert_eq!(slider.value(), 640);
}

#[test]
fn preset_load_resets_every_field() {
    let prompt = SharedHistory::with_quiet_period(String::new(), Duration::ZERO);
    let batch = SharedHistory::with_quiet_period(1u32, Duration::ZERO);

    prompt.set("castle at dusk".into());
    prompt.tick();
    batch.set(4);
    batch.tick();
    assert!(prompt.can_undo());
    assert!(batch.can_undo());

    // Loading a preset replaces each field's identity; old stacks are gone.
    prompt.reset("preset prompt".into());
    batch.reset(8);

    assert_eq!(prompt.value(), "preset prompt");
    assert_eq!(batch.value(), 8);
    assert!(!prompt.can_undo() && !prompt.can_redo());
    assert!(!batch.can_undo() && !batch.can_redo());
}
