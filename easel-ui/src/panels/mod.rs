// Settings-form panels for the EASEL UI.

pub mod output;
pub mod prompts;
pub mod sizing;
pub mod undo_redo;

pub use output::OutputPanel;
pub use prompts::PromptsPanel;
pub use sizing::SizingPanel;
pub use undo_redo::UndoRedoPanel;
