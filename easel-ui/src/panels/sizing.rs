// Width/height inputs. The pair is one logical field: a sizing tweak undoes
// as a unit, and both inputs share one controller.

use easel_history::SharedHistory;
use easel_params::{Dimensions, DIMENSION_STEP, MAX_DIMENSION, MIN_DIMENSION};
use tracing::trace;

pub struct SizingPanel {
    dimensions: SharedHistory<Dimensions>,
}

impl SizingPanel {
    pub fn new(dimensions: SharedHistory<Dimensions>) -> Self {
        Self { dimensions }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.label("Sizing");

        let mut dims = self.dimensions.value();
        let mut changed = false;

        ui.horizontal(|ui| {
            ui.label("Width");
            changed |= ui
                .add(
                    egui::DragValue::new(&mut dims.width)
                        .range(MIN_DIMENSION..=MAX_DIMENSION)
                        .speed(DIMENSION_STEP as f64)
                        .suffix(" px"),
                )
                .changed();

            ui.label("Height");
            changed |= ui
                .add(
                    egui::DragValue::new(&mut dims.height)
                        .range(MIN_DIMENSION..=MAX_DIMENSION)
                        .speed(DIMENSION_STEP as f64)
                        .suffix(" px"),
                )
                .changed();
        });

        if changed {
            let snapped = dims.clamped();
            trace!(width = snapped.width, height = snapped.height, "sizing edited");
            self.dimensions.set(snapped);
        }
    }
}
