pub mod job;
pub mod merged;
pub mod settings;

use settings::Settings;
use std::path::Path;

/// Load the settings that apply to a job file.
///
/// A `settings.yaml` in the same directory as the job file is loaded when
/// present; otherwise defaults are used.
pub fn load_settings_for_job(job_file_path: &Path) -> crate::error::Result<Settings> {
    let dir = job_file_path.parent().ok_or_else(|| {
        crate::error::IdPhotoError::config("Cannot determine job file directory")
    })?;

    let settings_path = dir.join("settings.yaml");

    if settings_path.exists() {
        Settings::from_file(&settings_path)
    } else {
        Ok(Settings::default())
    }
}
