//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! source = "src/main/webapp"      # Root for manifest input paths (relative to project root)
//! target = "target"               # Root for resolved bundle outputs (relative to project root)
//! js_manifests = ["js.bundles"]   # JavaScript bundle manifests, processed in order
//! css_manifests = ["css.bundles"] # Stylesheet bundle manifests, processed after the JS list
//! release = "2.5.0-timestamp"     # Stamped into bundle filenames ("" disables stamping)
//! deny_collisions = false         # Error instead of overwrite when two bundles share a path
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Web source root; manifest input paths are resolved against it.
    pub source: PathBuf,

    /// Output root; `-output:` bundle names are resolved against it.
    pub target: PathBuf,

    /// JavaScript bundle manifests.
    pub js_manifests: Vec<PathBuf>,

    /// Stylesheet bundle manifests.
    pub css_manifests: Vec<PathBuf>,

    /// Release identifier spliced into bundle filenames. May contain the
    /// `datestamp` / `timestamp` substitution tokens. Empty disables stamping.
    pub release: String,

    /// Treat resolved output path collisions as errors instead of overwriting.
    pub deny_collisions: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            source: "src/main/webapp".into(),
            target: "target".into(),
            js_manifests: Vec::new(),
            css_manifests: Vec::new(),
            release: String::new(),
            deny_collisions: false,
        }
    }
}

impl BuildSectionConfig {
    /// All bundle manifests in processing order: the JavaScript list first,
    /// then the stylesheet list.
    pub fn manifests(&self) -> impl Iterator<Item = &PathBuf> {
        self.js_manifests.iter().chain(self.css_manifests.iter())
    }

    /// Validate paths for a real build. Call after normalization.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, manifests) in [
            (FieldPath::new("build.js_manifests"), &self.js_manifests),
            (FieldPath::new("build.css_manifests"), &self.css_manifests),
        ] {
            for manifest in manifests {
                if !manifest.is_file() {
                    diag.error_with_hint(
                        field,
                        format!("manifest `{}` not found", manifest.display()),
                        "manifest paths are resolved relative to the config file",
                    );
                }
            }
        }

        if !self.source.is_dir() {
            diag.hint(
                FieldPath::new("build.source"),
                format!(
                    "source directory `{}` does not exist",
                    self.source.display()
                ),
            );
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_build_defaults() {
        let config = test_parse_config("");

        assert_eq!(config.build.source, PathBuf::from("src/main/webapp"));
        assert_eq!(config.build.target, PathBuf::from("target"));
        assert!(config.build.js_manifests.is_empty());
        assert!(config.build.css_manifests.is_empty());
        assert_eq!(config.build.release, "");
        assert!(!config.build.deny_collisions);
    }

    #[test]
    fn test_build_section_parsing() {
        let config = test_parse_config(
            r#"
            [build]
            source = "web"
            target = "dist"
            js_manifests = ["js.bundles", "admin/js.bundles"]
            css_manifests = ["css.bundles"]
            release = "2.5.0-timestamp"
            deny_collisions = true
            "#,
        );

        assert_eq!(config.build.source, PathBuf::from("web"));
        assert_eq!(config.build.target, PathBuf::from("dist"));
        assert_eq!(config.build.release, "2.5.0-timestamp");
        assert!(config.build.deny_collisions);

        // JS manifests come first in processing order
        let manifests: Vec<_> = config.build.manifests().collect();
        assert_eq!(manifests.len(), 3);
        assert_eq!(manifests[0], &PathBuf::from("js.bundles"));
        assert_eq!(manifests[2], &PathBuf::from("css.bundles"));
    }

    #[test]
    fn test_missing_manifest_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("js.bundles");
        std::fs::write(&present, "-output: app.js\n").unwrap();

        let config = BuildSectionConfig {
            source: dir.path().to_path_buf(),
            target: dir.path().join("out"),
            js_manifests: vec![present, dir.path().join("gone.bundles")],
            ..Default::default()
        };

        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);

        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("gone.bundles"));
    }
}
