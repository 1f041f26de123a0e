use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path to the SeetaFace detection model file.
    pub model_path: PathBuf,
    /// JPEG output quality (1-100).
    pub jpeg_quality: u8,
    /// Print specification used when a job does not name one.
    pub default_spec: String,
    /// Whether to add the printed white border when a job does not say.
    pub add_border: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            model_path: PathBuf::from("seeta_fd_frontal_v1.0.bin"),
            jpeg_quality: 95,
            default_spec: String::from("1inch"),
            add_border: true,
        }
    }
}

impl Settings {
    pub fn from_yaml(yaml: &str) -> crate::error::Result<Self> {
        serde_yml::from_str(yaml).map_err(|e| {
            crate::error::IdPhotoError::config(format!("Failed to parse settings YAML: {e}"))
        })
    }

    pub fn from_file(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}
