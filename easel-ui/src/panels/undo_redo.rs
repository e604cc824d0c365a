// Floating undo/redo buttons, anchored bottom-right over the whole form.

use easel_history::{ShortcutAction, ShortcutRouter};

pub struct UndoRedoPanel;

impl UndoRedoPanel {
    /// Draw the floating buttons and feed clicks through the router, same
    /// path the keyboard shortcuts take.
    pub fn ui(ctx: &egui::Context, router: &mut ShortcutRouter) {
        egui::Window::new("undo_redo")
            .title_bar(false)
            .resizable(false)
            .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let undo = ui
                        .add_enabled(router.can_undo_any(), egui::Button::new("\u{27f2} Undo"))
                        .on_hover_text("Undo (Ctrl+Z)");
                    if undo.clicked() {
                        router.handle(ShortcutAction::Undo);
                    }

                    let redo = ui
                        .add_enabled(router.can_redo_any(), egui::Button::new("\u{27f3} Redo"))
                        .on_hover_text("Redo (Ctrl+Y)");
                    if redo.clicked() {
                        router.handle(ShortcutAction::Redo);
                    }
                });
            });
    }
}
