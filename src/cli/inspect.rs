//! Bundle plan reporting.
//!
//! Parses every configured manifest in Tolerant mode and prints the resolved
//! plan: each bundle's output path and its inputs, with missing files marked.
//! An unreadable manifest is skipped, a stray line is dropped; inspection
//! never fails the run.

use std::path::{Path, PathBuf};

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::{
    bundle::BundleRoute,
    config::ToolConfig,
    core::{ReleaseStamp, SystemClock},
    debug, log,
    manifest::{self, Manifest, ParseMode},
    utils::plural_count,
};

/// The effective bundle plan after merging all manifests.
#[derive(Debug, Serialize)]
struct InspectReport {
    /// Rendered release stamp, absent when stamping is disabled.
    release: Option<String>,
    source: PathBuf,
    target: PathBuf,
    /// Manifests that could be read, in processing order.
    manifests: Vec<PathBuf>,
    bundles: Vec<BundleReport>,
}

#[derive(Debug, Serialize)]
struct BundleReport {
    kind: &'static str,
    name: String,
    output: PathBuf,
    inputs: Vec<InputReport>,
    /// Name of an earlier bundle this one overwrites, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    replaces: Option<String>,
}

#[derive(Debug, Serialize)]
struct InputReport {
    path: PathBuf,
    exists: bool,
    preminified: bool,
}

impl InputReport {
    fn new(path: &Path) -> Self {
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        Self {
            path: path.to_path_buf(),
            exists: path.is_file(),
            preminified: stem.ends_with(".min"),
        }
    }
}

/// Report the bundle plan for the current configuration.
pub fn inspect_bundles(config: &ToolConfig, json: bool) -> Result<()> {
    let stamp = ReleaseStamp::render(&config.build.release, &SystemClock);
    let report = build_report(config, stamp.as_ref());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, config);
    }
    Ok(())
}

/// Resolve every bundle from every readable manifest into one merged plan.
///
/// When two bundles resolve to the same output path the later definition
/// wins, mirroring what a build would physically write. The winning entry
/// records the name it replaced.
fn build_report(config: &ToolConfig, stamp: Option<&ReleaseStamp>) -> InspectReport {
    let manifests = collect_manifests(config);

    let mut bundles: Vec<BundleReport> = Vec::new();
    for manifest in &manifests {
        for bundle in &manifest.bundles {
            let route = BundleRoute::resolve(
                bundle,
                &config.build.source,
                &config.build.target,
                stamp,
            );

            let mut entry = BundleReport {
                kind: bundle.kind.extension(),
                name: bundle.name.clone(),
                output: route.output,
                inputs: route.inputs.iter().map(|p| InputReport::new(p)).collect(),
                replaces: None,
            };

            if let Some(pos) = bundles.iter().position(|b| b.output == entry.output) {
                let earlier = bundles.remove(pos);
                log!("warning"; "output `{}` defined by both `{}` and `{}`, keeping the later definition",
                    entry.output.display(), earlier.name, entry.name);
                entry.replaces = Some(earlier.name);
            }
            bundles.push(entry);
        }
    }

    InspectReport {
        release: stamp.map(|s| s.as_str().to_string()),
        source: config.build.source.clone(),
        target: config.build.target.clone(),
        manifests: manifests.into_iter().map(|m| m.source).collect(),
        bundles,
    }
}

/// Tolerantly parse every configured manifest, skipping unreadable files.
fn collect_manifests(config: &ToolConfig) -> Vec<Manifest> {
    let mut manifests = Vec::new();
    for path in config.build.manifests() {
        match manifest::parse_file(path, ParseMode::Tolerant) {
            Ok(manifest) => manifests.push(manifest),
            Err(err) => {
                debug!("inspect"; "skipping `{}`: {}", path.display(), err);
            }
        }
    }
    manifests
}

fn print_report(report: &InspectReport, config: &ToolConfig) {
    log!(
        "inspect";
        "{} resolved from {}",
        plural_count(report.bundles.len(), "bundle"),
        plural_count(report.manifests.len(), "manifest")
    );
    if let Some(release) = &report.release {
        log!("inspect"; "release stamp `{}`", release);
    }

    for bundle in &report.bundles {
        println!();
        println!(
            "{} ({}, {})",
            config.root_relative(&bundle.output).display().bold(),
            bundle.kind,
            plural_count(bundle.inputs.len(), "input")
        );
        if let Some(replaces) = &bundle.replaces {
            println!(
                "  {} overwrites earlier bundle `{replaces}`",
                "!".bright_yellow()
            );
        }
        for input in &bundle.inputs {
            let path = config.root_relative(&input.path).display();
            if !input.exists {
                println!("  + {path} {}", "(missing)".bright_red());
            } else if input.preminified {
                println!("  + {path} {}", "(pre-minified)".dimmed());
            } else {
                println!("  + {path}");
            }
        }
    }
}

// ============================================================================
// tests
// ============================================================================
