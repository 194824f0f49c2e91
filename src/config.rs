use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::state::Tool;
use crate::style::ShapeStyle;

/// Document file used when nothing else is configured
pub const DEFAULT_DOCUMENT: &str = "shapes.txt";

/// User settings that outlive a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Style given to newly drawn shapes
    pub default_style: ShapeStyle,
    /// Tool armed at start-up
    pub initial_tool: Tool,
    /// Where Open and Save read and write the drawing
    pub document_path: PathBuf,
    /// `env_logger` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_style: ShapeStyle::default(),
            initial_tool: Tool::default(),
            document_path: PathBuf::from(DEFAULT_DOCUMENT),
            log_filter: "info".to_owned(),
        }
    }
}

impl EditorConfig {
    /// Reads a JSON config, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
