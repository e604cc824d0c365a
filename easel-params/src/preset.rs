//! Preset save/load for EASEL (v1).
//!
//! Presets are the durable unit of configuration: a named snapshot of the
//! full settings form. Applying one is an identity change for every field,
//! which is what resets the per-field undo stacks.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

use crate::{GenerationSettings, SettingsError, PARAM_SCHEMA_VERSION};

/// File extension recommended for saved presets.
pub const PRESET_FILE_EXT: &str = "easel.json";

/// v1 preset object. Save/load this as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetV1 {
    pub preset_id: Uuid,
    pub name: String,
    pub schema_version: String,
    pub settings: GenerationSettings,
    pub notes: Option<String>,
}

impl PresetV1 {
    /// Create a preset with a fresh id, rejecting empty names and
    /// out-of-bounds settings.
    pub fn new(name: impl Into<String>, settings: GenerationSettings) -> Result<Self, PresetError> {
        let name = name.into();
        if name.trim().is_empty() {
            tracing::error!("preset name cannot be empty");
            return Err(PresetError::EmptyName);
        }
        settings.validate()?;

        let preset_id = Uuid::new_v4();
        tracing::info!(preset_id = %preset_id, name = %name, "creating preset");

        Ok(Self {
            preset_id,
            name,
            schema_version: PARAM_SCHEMA_VERSION.to_string(),
            settings,
            notes: None,
        })
    }
}

/// Preset-level errors.
#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    #[error("preset name cannot be empty")]
    EmptyName,

    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] SettingsError),
}

/// Save a preset to disk as pretty JSON.
pub fn save_preset(path: impl AsRef<Path>, preset: &PresetV1) -> anyhow::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        // fs::write does NOT create directories; tests may run with missing `target/`
        fs::create_dir_all(parent)
            .with_context(|| format!("create parent dir: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(preset).context("serialize preset to json")?;
    fs::write(path, json).with_context(|| format!("write preset file: {}", path.display()))?;
    Ok(())
}

/// Load a preset from disk, validating its settings before handing it back.
pub fn load_preset(path: impl AsRef<Path>) -> anyhow::Result<PresetV1> {
    let path = path.as_ref();
    let data =
        fs::read_to_string(path).with_context(|| format!("read preset file: {}", path.display()))?;
    let preset: PresetV1 = serde_json::from_str(&data).context("parse preset json")?;
    preset
        .settings
        .validate()
        .with_context(|| format!("preset {} has out-of-bounds settings", preset.name))?;
    Ok(preset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_rejected() {
        let p = PresetV1::new("  ", GenerationSettings::default());
        assert!(matches!(p, Err(PresetError::EmptyName)));
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut settings = GenerationSettings::default();
        settings.batch.count = 999;
        assert!(matches!(
            PresetV1::new("broken", settings),
            Err(PresetError::InvalidSettings(_))
        ));
    }
}
