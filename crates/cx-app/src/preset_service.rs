//! View presets: a saved filter plus scale settings, stored as YAML.

use cx_chart::ScaleConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::pipeline::ViewState;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewPreset {
    pub filter: String,
    pub scale: ScaleConfig,
}

impl ViewPreset {
    pub fn from_state(state: &ViewState) -> Self {
        Self {
            filter: state.filter_text.clone(),
            scale: state.scale.clone(),
        }
    }

    /// Copy the preset into `state`, keeping the entry index and strictness.
    pub fn apply_to(&self, state: &mut ViewState) {
        state.filter_text = self.filter.clone();
        state.scale = self.scale.clone();
    }
}

pub fn load_preset(path: &Path) -> AppResult<ViewPreset> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::PresetFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let preset: ViewPreset = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Preset(format!("Failed to parse preset YAML: {}", e)))?;

    Ok(preset)
}

pub fn save_preset(path: &Path, preset: &ViewPreset) -> AppResult<()> {
    let content = serde_yaml::to_string(preset)
        .map_err(|e| AppError::Preset(format!("Failed to serialize preset: {}", e)))?;

    std::fs::write(path, content).map_err(|e| AppError::PresetFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!(path = %path.display(), "preset saved");
    Ok(())
}
