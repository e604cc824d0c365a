// Top-level settings form: one shared controller per logical field, one
// shortcut router, cooperative timer driving.

use std::time::Instant;

use easel_history::{SharedHistory, ShortcutAction, ShortcutRouter};
use easel_params::{BatchSettings, Dimensions, GenerationSettings, Seed};
use tracing::{debug, info};

use crate::panels::{OutputPanel, PromptsPanel, SizingPanel, UndoRedoPanel};

/// The EASEL settings form.
///
/// Each logical field (prompt, negative prompt, width/height pair, batch,
/// seed) owns an independent history; undoing one never touches another.
/// A single press of Ctrl/Cmd+Z goes through one router for all of them.
///
/// Call [`ui`](Self::ui) once per frame from any egui host.
pub struct EaselApp {
    prompt: SharedHistory<String>,
    negative: SharedHistory<String>,
    dimensions: SharedHistory<Dimensions>,
    batch: SharedHistory<BatchSettings>,
    seed: SharedHistory<Seed>,

    router: ShortcutRouter,

    prompts_panel: PromptsPanel,
    sizing_panel: SizingPanel,
    output_panel: OutputPanel,
}

impl EaselApp {
    pub fn new(initial: GenerationSettings) -> Self {
        info!("creating settings form");
        let initial = initial.clamped();

        let prompt = SharedHistory::new(initial.prompt);
        let negative = SharedHistory::new(initial.negative_prompt);
        let dimensions = SharedHistory::new(initial.dimensions);
        let batch = SharedHistory::new(initial.batch);
        let seed = SharedHistory::new(initial.seed);

        let mut router = ShortcutRouter::new();
        router.register("prompt", prompt.clone());
        router.register("negative_prompt", negative.clone());
        router.register("sizing", dimensions.clone());
        router.register("output", batch.clone());
        router.register("seed", seed.clone());

        Self {
            prompts_panel: PromptsPanel::new(prompt.clone(), negative.clone()),
            sizing_panel: SizingPanel::new(dimensions.clone()),
            output_panel: OutputPanel::new(batch.clone(), seed.clone()),
            prompt,
            negative,
            dimensions,
            batch,
            seed,
            router,
        }
    }

    /// Render one frame.
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.handle_shortcuts(ctx);
        self.tick_fields();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Generation settings");
            ui.separator();
            self.prompts_panel.ui(ui);
            ui.add_space(12.0);
            self.sizing_panel.ui(ui);
            ui.add_space(12.0);
            self.output_panel.ui(ui);
        });

        UndoRedoPanel::ui(ctx, &mut self.router);

        // A pending edit needs a frame at its deadline even if the user goes idle.
        if let Some(deadline) = self.earliest_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }

    /// Combined snapshot of every field's live value.
    pub fn settings(&self) -> GenerationSettings {
        GenerationSettings {
            prompt: self.prompt.value(),
            negative_prompt: self.negative.value(),
            dimensions: self.dimensions.value(),
            batch: self.batch.value(),
            seed: self.seed.value(),
        }
    }

    /// Apply a preset: every field's identity changes, so every stack resets.
    pub fn apply_preset(&mut self, settings: &GenerationSettings) {
        info!("applying preset to settings form");
        let settings = settings.clone().clamped();
        self.prompt.reset(settings.prompt);
        self.negative.reset(settings.negative_prompt);
        self.dimensions.reset(settings.dimensions);
        self.batch.reset(settings.batch);
        self.seed.reset(settings.seed);
    }

    /// Load a preset file and apply it to the form.
    pub fn load_preset_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let preset = easel_params::load_preset(path)?;
        info!(name = %preset.name, "loaded preset");
        self.apply_preset(&preset.settings);
        Ok(())
    }

    /// Save the form's current live values as a named preset.
    pub fn save_preset_file(
        &self,
        path: impl AsRef<std::path::Path>,
        name: &str,
    ) -> anyhow::Result<()> {
        let preset = easel_params::PresetV1::new(name, self.settings().clamped())?;
        easel_params::save_preset(path, &preset)?;
        info!(name, "saved preset");
        Ok(())
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // consume_key suppresses the default action and requires the exact
        // modifier set, so Ctrl+Shift+Z stays with the host.
        let undo = ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Z));
        let redo = ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Y));

        if undo {
            let changed = self.router.handle(ShortcutAction::Undo);
            debug!(changed, "undo shortcut");
        }
        if redo {
            let changed = self.router.handle(ShortcutAction::Redo);
            debug!(changed, "redo shortcut");
        }
    }

    fn tick_fields(&mut self) {
        self.prompt.tick();
        self.negative.tick();
        self.dimensions.tick();
        self.batch.tick();
        self.seed.tick();
    }

    fn earliest_deadline(&self) -> Option<Instant> {
        [
            self.prompt.next_deadline(),
            self.negative.next_deadline(),
            self.dimensions.next_deadline(),
            self.batch.next_deadline(),
            self.seed.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_snapshot_tracks_live_values() {
        let app = EaselApp::new(GenerationSettings::default());
        app.prompt.set("castle".into());
        app.batch.set(BatchSettings { size: 4, count: 1 });

        let s = app.settings();
        assert_eq!(s.prompt, "castle");
        assert_eq!(s.batch.size, 4);
        // Untouched fields keep their defaults.
        assert_eq!(s.dimensions, Dimensions::default());
        assert!(s.seed.is_random());
    }

    #[test]
    fn test_apply_preset_resets_all_stacks() {
        let mut app = EaselApp::new(GenerationSettings::default());
        app.prompt.set("castle".into());

        let preset = GenerationSettings {
            prompt: "pillar".into(),
            seed: Seed(7),
            ..GenerationSettings::default()
        };
        app.apply_preset(&preset);

        assert_eq!(app.settings().prompt, "pillar");
        assert_eq!(app.settings().seed, Seed(7));
        assert!(!app.prompt.can_undo());
        assert!(!app.prompt.has_pending());
    }

    #[test]
    fn test_new_clamps_out_of_bounds_initial_settings() {
        let app = EaselApp::new(GenerationSettings {
            dimensions: Dimensions {
                width: 10_000,
                height: 10,
            },
            batch: BatchSettings { size: 99, count: 0 },
            ..GenerationSettings::default()
        });

        let s = app.settings();
        assert_eq!(s.dimensions.width, 2048);
        assert_eq!(s.dimensions.height, 64);
        assert_eq!(s.batch.size, 8);
        assert_eq!(s.batch.count, 1);
    }
}
