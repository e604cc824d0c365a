// Prompt and negative-prompt editors. Each text area is its own logical
// field with its own undo stack.

use easel_history::SharedHistory;
use tracing::trace;

pub struct PromptsPanel {
    prompt: SharedHistory<String>,
    negative: SharedHistory<String>,
}

impl PromptsPanel {
    pub fn new(prompt: SharedHistory<String>, negative: SharedHistory<String>) -> Self {
        Self { prompt, negative }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.label("Prompt");
        let mut text = self.prompt.value();
        let response = ui.add(
            egui::TextEdit::multiline(&mut text)
                .hint_text("What do you want to see?")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            trace!(len = text.len(), "prompt edited");
            self.prompt.set(text);
        }

        ui.add_space(8.0);

        ui.label("Negative prompt");
        let mut negative = self.negative.value();
        let response = ui.add(
            egui::TextEdit::multiline(&mut negative)
                .hint_text("What should stay out of the image?")
                .desired_rows(2)
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            trace!(len = negative.len(), "negative prompt edited");
            self.negative.set(negative);
        }
    }
}
