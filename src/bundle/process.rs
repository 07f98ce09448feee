//! Bundle processing: the strict write path.
//!
//! One [`BundleProcessor`] lives for a whole run. It parses each manifest in
//! Strict mode, resolves every bundle against the configured roots, feeds
//! inputs through the compressor in declaration order and writes the
//! concatenated result under the target root. The first error aborts the run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::ReleaseStamp;
use crate::manifest::{self, Bundle, ParseMode};
use crate::utils::plural_count;
use crate::{debug, log};

use super::compress::{CompressError, Compressor};
use super::route::BundleRoute;

/// Errors aborting a strict processing run.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error(transparent)]
    Manifest(#[from] manifest::ManifestError),

    #[error("missing input `{}`", .path.display())]
    MissingInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to compress `{}`", .path.display())]
    Compress {
        path: PathBuf,
        #[source]
        source: CompressError,
    },

    #[error("cannot write bundle output `{}`", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("output `{}` already written by bundle `{first}`", .path.display())]
    Collision { path: PathBuf, first: String },
}

/// Totals for one processed manifest file.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessSummary {
    pub bundles: usize,
    pub inputs: usize,
}

/// Strict processing pipeline shared by a whole run.
///
/// Collision tracking spans manifests: every resolved output path written
/// during the run is remembered, and a second bundle resolving to the same
/// path warns (last-writer-wins) or aborts under `deny_collisions`.
pub struct BundleProcessor<'a> {
    compressor: &'a dyn Compressor,
    source_root: &'a Path,
    target_root: &'a Path,
    stamp: Option<&'a ReleaseStamp>,
    deny_collisions: bool,
    written: FxHashMap<PathBuf, String>,
}

impl<'a> BundleProcessor<'a> {
    pub fn new(
        compressor: &'a dyn Compressor,
        source_root: &'a Path,
        target_root: &'a Path,
        stamp: Option<&'a ReleaseStamp>,
        deny_collisions: bool,
    ) -> Self {
        Self {
            compressor,
            source_root,
            target_root,
            stamp,
            deny_collisions,
            written: FxHashMap::default(),
        }
    }

    /// Parse one manifest in Strict mode and write all of its bundles.
    pub fn process_manifest(&mut self, manifest_path: &Path) -> Result<ProcessSummary, BundleError> {
        let manifest = manifest::parse_file(manifest_path, ParseMode::Strict)?;

        let mut summary = ProcessSummary::default();
        for bundle in &manifest.bundles {
            self.process_bundle(bundle)?;
            summary.bundles += 1;
            summary.inputs += bundle.inputs.len();
        }

        log!("build"; "{}: wrote {} from {}",
            manifest_path.display(),
            plural_count(summary.bundles, "bundle"),
            plural_count(summary.inputs, "input"));
        Ok(summary)
    }

    /// Compress and write a single bundle, returning the output path.
    pub fn process_bundle(&mut self, bundle: &Bundle) -> Result<PathBuf, BundleError> {
        let route = BundleRoute::resolve(bundle, self.source_root, self.target_root, self.stamp);

        if let Some(first) = self.written.get(&route.output) {
            if self.deny_collisions {
                return Err(BundleError::Collision {
                    path: route.output,
                    first: first.clone(),
                });
            }
            log!("warning"; "output `{}` already written by bundle `{}`, overwriting",
                route.output.display(), first);
        }

        let mut chunks = Vec::with_capacity(route.inputs.len());
        for input in &route.inputs {
            chunks.push(self.compress_input(bundle, input)?);
        }

        if let Some(parent) = route.output.parent() {
            fs::create_dir_all(parent).map_err(|source| BundleError::Write {
                path: route.output.clone(),
                source,
            })?;
        }
        fs::write(&route.output, chunks.join("\n")).map_err(|source| BundleError::Write {
            path: route.output.clone(),
            source,
        })?;

        self.written
            .insert(route.output.clone(), bundle.name.clone());
        debug!("bundle"; "wrote `{}` ({})",
            route.output.display(), plural_count(route.inputs.len(), "input"));
        Ok(route.output)
    }

    /// Read and compress one input file.
    fn compress_input(&self, bundle: &Bundle, input: &Path) -> Result<String, BundleError> {
        let source = fs::read_to_string(input).map_err(|source| BundleError::MissingInput {
            path: input.to_path_buf(),
            source,
        })?;

        // Skip already minified .min.js/.min.css
        let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        if stem.ends_with(".min") {
            debug!("bundle"; "`{}` is pre-minified, appended as-is", input.display());
            return Ok(source);
        }

        let compressed = self
            .compressor
            .compress(bundle.kind, &source)
            .map_err(|source| BundleError::Compress {
                path: input.to_path_buf(),
                source,
            })?;
        for warning in &compressed.warnings {
            log!("warning"; "{}: {}", input.display(), warning);
        }
        Ok(compressed.code)
    }
}
