//! Bundle building orchestration.
//!
//! Build phases:
//! - **Stamp** - Render the release stamp once for the whole run
//! - **Process** - Parse each manifest strictly, compress and write bundles
//! - **Finalize** - Log run totals

use anyhow::{Context, Result};
use std::time::Instant;

use crate::{
    bundle::{BundleProcessor, MinifyCompressor, ProcessSummary},
    config::ToolConfig,
    core::{ReleaseStamp, SystemClock},
    debug, log,
    utils::plural_count,
};

/// Build every configured bundle.
///
/// Manifests are processed in config order, the JavaScript list first. The
/// release stamp is rendered once up front so all bundles of a run share the
/// same timestamp.
pub fn build_bundles(config: &ToolConfig) -> Result<ProcessSummary> {
    let started = Instant::now();

    if config.build.js_manifests.is_empty() && config.build.css_manifests.is_empty() {
        log!("build"; "nothing to do: no bundle manifests configured");
        return Ok(ProcessSummary::default());
    }

    let stamp = ReleaseStamp::render(&config.build.release, &SystemClock);
    if let Some(ref stamp) = stamp {
        debug!("build"; "release stamp `{stamp}`");
    }

    let mut processor = BundleProcessor::new(
        &MinifyCompressor,
        &config.build.source,
        &config.build.target,
        stamp.as_ref(),
        config.build.deny_collisions,
    );

    let mut summary = ProcessSummary::default();
    for manifest in config.build.manifests() {
        let processed = processor
            .process_manifest(manifest)
            .with_context(|| format!("failed to build bundles from `{}`", manifest.display()))?;
        summary.bundles += processed.bundles;
        summary.inputs += processed.inputs;
    }

    log!(
        "build";
        "finished: {} from {} in {:.2?}",
        plural_count(summary.bundles, "bundle"),
        plural_count(summary.inputs, "input"),
        started.elapsed()
    );

    Ok(summary)
}
