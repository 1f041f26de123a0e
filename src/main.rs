use std::path::{Path, PathBuf};
use std::process::ExitCode;

use id_photo_maker::config::job::JobFile;
use id_photo_maker::config::merged::MergedConfig;
use id_photo_maker::config::{self};
use id_photo_maker::pipeline::orchestrator::run_all_requests;
use id_photo_maker::pipeline::processor::{Pipeline, ProcessingRequest};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        eprintln!("Usage: id_photo_maker <jobs.yaml>...");
        eprintln!("  Generate ID photos according to job specifications.");
        return if args.is_empty() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        };
    }

    if args.iter().any(|a| a == "--version" || a == "-V") {
        eprintln!("id_photo_maker {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let mut has_error = false;

    for job_file_arg in &args {
        let job_file_path = Path::new(job_file_arg);

        // Load settings from the same directory as the job file.
        let settings = match config::load_settings_for_job(job_file_path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("ERROR: Failed to load settings for {job_file_arg}: {e}");
                return ExitCode::FAILURE;
            }
        };

        // Read and parse the job YAML file.
        let yaml_content = match std::fs::read_to_string(job_file_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("ERROR: Failed to read job file {job_file_arg}: {e}");
                return ExitCode::FAILURE;
            }
        };

        let job_file: JobFile = match serde_yml::from_str(&yaml_content) {
            Ok(jf) => jf,
            Err(e) => {
                eprintln!("ERROR: Failed to parse job file {job_file_arg}: {e}");
                return ExitCode::FAILURE;
            }
        };

        // Resolve job file directory for relative paths.
        let job_dir = job_file_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        // Merge settings with each job and construct requests.
        let mut requests: Vec<ProcessingRequest> = Vec::new();
        for job in &job_file.jobs {
            let merged = match MergedConfig::new(&settings, job) {
                Ok(m) => m,
                Err(e) => {
                    eprintln!("ERROR: {e}");
                    return ExitCode::FAILURE;
                }
            };

            requests.push(ProcessingRequest {
                source_path: resolve_path(&job_dir, &job.input),
                spec: merged.spec,
                remove_background: merged.remove_background,
                background: merged.background,
                add_border: merged.add_border,
            });
        }

        let pipeline = match build_pipeline(&settings) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("ERROR: {e}");
                return ExitCode::FAILURE;
            }
        };

        // Run all requests of this job file through the pipeline.
        let results = run_all_requests(&pipeline, &requests);

        for (request, result) in requests.iter().zip(&results) {
            match result {
                Ok(photo) => {
                    eprintln!(
                        "OK: {} -> {} ({}x{}{})",
                        request.source_path.display(),
                        photo.output_path.display(),
                        photo.width,
                        photo.height,
                        if photo.fallback_used {
                            ", no face detected, centered crop used"
                        } else {
                            ""
                        }
                    );
                }
                Err(e) => {
                    eprintln!("ERROR: {}: {e}", request.source_path.display());
                    has_error = true;
                }
            }
        }
    }

    if has_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(feature = "rustface")]
fn build_pipeline(
    settings: &id_photo_maker::config::settings::Settings,
) -> id_photo_maker::error::Result<Pipeline> {
    let detector =
        id_photo_maker::detect::rustface_backend::SeetaDetector::from_file(&settings.model_path)?;
    Ok(Pipeline::new(Box::new(detector)).with_jpeg_quality(settings.jpeg_quality))
}

#[cfg(not(feature = "rustface"))]
fn build_pipeline(
    _settings: &id_photo_maker::config::settings::Settings,
) -> id_photo_maker::error::Result<Pipeline> {
    Err(id_photo_maker::error::IdPhotoError::detection_model(
        "built without the `rustface` feature; no face detector backend available",
    ))
}

/// Resolve a potentially relative path against a base directory.
/// If the path is already absolute, return it as-is.
fn resolve_path(base_dir: &Path, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base_dir.join(p)
    }
}
