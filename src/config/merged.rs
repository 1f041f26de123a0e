use super::job::{BackgroundChoice, Job, parse_background};
use super::settings::Settings;
use crate::spec::PhotoSpec;

/// A job with all settings fallbacks applied and symbolic values resolved.
#[derive(Debug, Clone)]
pub struct MergedConfig {
    pub spec: &'static PhotoSpec,
    pub remove_background: bool,
    pub background: BackgroundChoice,
    pub add_border: bool,
}

impl MergedConfig {
    /// Job `Option` values win over settings defaults; spec and background
    /// names are resolved here so the pipeline only sees typed values.
    pub fn new(settings: &Settings, job: &Job) -> crate::error::Result<Self> {
        let spec_name = job.spec.as_deref().unwrap_or(&settings.default_spec);
        let spec = PhotoSpec::by_name(spec_name).ok_or_else(|| {
            crate::error::IdPhotoError::config(format!("Unknown photo spec: '{spec_name}'"))
        })?;

        let background = match job.background.as_deref() {
            Some(s) => parse_background(s)?,
            None => BackgroundChoice::None,
        };

        let remove_background = job.remove_background.unwrap_or(false);
        if remove_background && background == BackgroundChoice::None {
            return Err(crate::error::IdPhotoError::config(format!(
                "Job '{}' removes the background but names no replacement color",
                job.input
            )));
        }

        Ok(MergedConfig {
            spec,
            remove_background,
            background,
            add_border: job.add_border.unwrap_or(settings.add_border),
        })
    }
}
