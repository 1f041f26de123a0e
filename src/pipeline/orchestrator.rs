// Batch execution of independent pipeline runs.

use rayon::prelude::*;

use crate::pipeline::processor::{Pipeline, ProcessedPhoto, ProcessingRequest};

/// Run every request through the pipeline, collecting per-request results.
/// One request's failure does NOT prevent the others from running.
///
/// Requests run in parallel but share only the immutable pipeline; each
/// run is internally sequential (no fan-out within a request).
pub fn run_all_requests(
    pipeline: &Pipeline,
    requests: &[ProcessingRequest],
) -> Vec<crate::error::Result<ProcessedPhoto>> {
    requests.par_iter().map(|r| pipeline.process(r)).collect()
}
