//! easel-params: generation-parameter schema for EASEL.
//!
//! Design rules:
//! - Every numeric field is bounded and clamped; out-of-range input from a
//!   widget or a preset file never survives past the model layer.
//! - Fields are grouped by undo granularity: each struct here is one logical
//!   field with its own history stack (width/height undo as a pair, prompt
//!   text undoes independently, and so on).
//! - All structs are serializable for preset save/load.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Schema version for forward compatibility.
pub const PARAM_SCHEMA_VERSION: &str = "1.0";

/// Image dimension bounds, in pixels. Dimensions snap to the step grid the
/// way the sizing inputs step.
pub const MIN_DIMENSION: u32 = 64;
pub const MAX_DIMENSION: u32 = 2048;
pub const DIMENSION_STEP: u32 = 64;

/// Batch bounds: images per batch and batches per run.
pub const MAX_BATCH_SIZE: u32 = 8;
pub const MAX_BATCH_COUNT: u32 = 25;

/// Output image dimensions. Width and height form one logical field: a user
/// adjusting size thinks of it as one edit, so they undo as a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
        }
    }
}

impl Dimensions {
    /// Clamp both axes into bounds and snap them to the step grid.
    pub fn clamped(self) -> Self {
        Self {
            width: clamp_dimension(self.width),
            height: clamp_dimension(self.height),
        }
    }
}

/// Clamp one axis to `[MIN_DIMENSION, MAX_DIMENSION]`, snapped down to a
/// multiple of `DIMENSION_STEP`.
pub fn clamp_dimension(value: u32) -> u32 {
    let clamped = value.clamp(MIN_DIMENSION, MAX_DIMENSION);
    clamped - clamped % DIMENSION_STEP
}

/// Images per batch and number of batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSettings {
    pub size: u32,
    pub count: u32,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self { size: 1, count: 1 }
    }
}

impl BatchSettings {
    pub fn clamped(self) -> Self {
        Self {
            size: self.size.clamp(1, MAX_BATCH_SIZE),
            count: self.count.clamp(1, MAX_BATCH_COUNT),
        }
    }
}

/// Generation seed. `-1` means "pick a random seed at generation time".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seed(pub i64);

impl Seed {
    pub const RANDOM: Seed = Seed(-1);

    pub fn is_random(self) -> bool {
        self.0 < 0
    }
}

impl Default for Seed {
    fn default() -> Self {
        Seed::RANDOM
    }
}

/// The full parameter set the form edits. This is a snapshot type: the UI
/// assembles it from per-field live values and tears it apart again when a
/// preset is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSettings {
    pub prompt: String,
    pub negative_prompt: String,
    pub dimensions: Dimensions,
    pub batch: BatchSettings,
    pub seed: Seed,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            negative_prompt: String::new(),
            dimensions: Dimensions::default(),
            batch: BatchSettings::default(),
            seed: Seed::RANDOM,
        }
    }
}

impl GenerationSettings {
    /// Clamp every bounded field.
    pub fn clamped(mut self) -> Self {
        self.dimensions = self.dimensions.clamped();
        self.batch = self.batch.clamped();
        self
    }

    /// Validate without clamping, for preset files where silently rewriting
    /// the user's numbers would be surprising.
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (axis, value) in [
            ("width", self.dimensions.width),
            ("height", self.dimensions.height),
        ] {
            if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
                tracing::error!(axis, value, "dimension out of range");
                return Err(SettingsError::DimensionOutOfRange {
                    axis: axis.to_string(),
                    value,
                });
            }
            if value % DIMENSION_STEP != 0 {
                tracing::error!(axis, value, "dimension off the step grid");
                return Err(SettingsError::DimensionOffGrid {
                    axis: axis.to_string(),
                    value,
                });
            }
        }

        if !(1..=MAX_BATCH_SIZE).contains(&self.batch.size) {
            tracing::error!(size = self.batch.size, "batch size out of range");
            return Err(SettingsError::BatchSizeOutOfRange {
                value: self.batch.size,
            });
        }
        if !(1..=MAX_BATCH_COUNT).contains(&self.batch.count) {
            tracing::error!(count = self.batch.count, "batch count out of range");
            return Err(SettingsError::BatchCountOutOfRange {
                value: self.batch.count,
            });
        }

        Ok(())
    }
}

/// Errors related to parameter bounds. Keep it simple stupid.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("{axis} must be in [{MIN_DIMENSION}, {MAX_DIMENSION}], got {value}")]
    DimensionOutOfRange { axis: String, value: u32 },

    #[error("{axis} must be a multiple of {DIMENSION_STEP}, got {value}")]
    DimensionOffGrid { axis: String, value: u32 },

    #[error("batch size must be in [1, {MAX_BATCH_SIZE}], got {value}")]
    BatchSizeOutOfRange { value: u32 },

    #[error("batch count must be in [1, {MAX_BATCH_COUNT}], got {value}")]
    BatchCountOutOfRange { value: u32 },
}

pub mod preset;

pub use preset::{load_preset, save_preset, PresetError, PresetV1, PRESET_FILE_EXT};
