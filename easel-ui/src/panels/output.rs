// Output quantity and seed controls. Batch settings and the seed are
// separate logical fields with independent undo stacks.

use easel_history::SharedHistory;
use easel_params::{BatchSettings, Seed, MAX_BATCH_COUNT, MAX_BATCH_SIZE};
use tracing::trace;

pub struct OutputPanel {
    batch: SharedHistory<BatchSettings>,
    seed: SharedHistory<Seed>,
}

impl OutputPanel {
    pub fn new(batch: SharedHistory<BatchSettings>, seed: SharedHistory<Seed>) -> Self {
        Self { batch, seed }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.label("Output quantity");

        let mut batch = self.batch.value();
        let mut changed = false;

        ui.horizontal(|ui| {
            changed |= ui
                .add(egui::Slider::new(&mut batch.size, 1..=MAX_BATCH_SIZE).text("Batch size"))
                .changed();
            ui.weak("Optimal level: 4\u{2013}7");
        });
        ui.horizontal(|ui| {
            changed |= ui
                .add(egui::Slider::new(&mut batch.count, 1..=MAX_BATCH_COUNT).text("Batch count"))
                .changed();
            ui.weak("Optimal level: 1\u{2013}3");
        });

        if changed {
            trace!(size = batch.size, count = batch.count, "batch edited");
            self.batch.set(batch.clamped());
        }

        ui.add_space(8.0);

        let mut seed = self.seed.value();
        ui.horizontal(|ui| {
            ui.label("Seed");
            if ui
                .add(egui::DragValue::new(&mut seed.0).range(-1..=i64::MAX))
                .changed()
            {
                trace!(seed = seed.0, "seed edited");
                self.seed.set(seed);
            }
            if ui
                .button("Randomize")
                .on_hover_text("Use a new random seed for every generation")
                .clicked()
            {
                self.seed.set(Seed::RANDOM);
            }
            if seed.is_random() {
                ui.weak("random");
            }
        });
    }
}
