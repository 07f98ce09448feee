//! Bundle route: declared bundle to resolved filesystem paths.

use std::path::{Path, PathBuf};

use crate::core::ReleaseStamp;
use crate::manifest::Bundle;

use super::BundleKind;
use super::resolve::resolve_output_path;

/// Resolved filesystem mapping for one bundle.
///
/// Computed per bundle at processing time and discarded once the output has
/// been written.
#[derive(Debug, Clone)]
pub struct BundleRoute {
    /// Artifact kind.
    pub kind: BundleKind,
    /// Final output path under the target root.
    pub output: PathBuf,
    /// Input paths joined to the source root, in declaration order.
    pub inputs: Vec<PathBuf>,
}

impl BundleRoute {
    /// Resolve a declared bundle against the configured roots.
    pub fn resolve(
        bundle: &Bundle,
        source_root: &Path,
        target_root: &Path,
        stamp: Option<&ReleaseStamp>,
    ) -> Self {
        Self {
            kind: bundle.kind,
            output: resolve_output_path(target_root, &bundle.name, bundle.kind, stamp),
            // Input paths are always relative to the source root, even when
            // declared with a leading separator.
            inputs: bundle
                .inputs
                .iter()
                .map(|i| source_root.join(i.strip_prefix("/").unwrap_or(i)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_joins_roots() {
        let bundle = Bundle {
            name: "js/app.js".to_string(),
            kind: BundleKind::Js,
            inputs: vec![PathBuf::from("lib/jquery.js"), PathBuf::from("app/main.js")],
        };

        let route = BundleRoute::resolve(&bundle, Path::new("/src"), Path::new("/out"), None);

        assert_eq!(route.kind, BundleKind::Js);
        assert_eq!(route.output, PathBuf::from("/out/js/app.js"));
        assert_eq!(
            route.inputs,
            vec![
                PathBuf::from("/src/lib/jquery.js"),
                PathBuf::from("/src/app/main.js")
            ]
        );
    }

    #[test]
    fn test_rooted_input_stays_under_source_root() {
        let bundle = Bundle {
            name: "app.js".to_string(),
            kind: BundleKind::Js,
            inputs: vec![PathBuf::from("/lib/jquery.js")],
        };

        let route = BundleRoute::resolve(&bundle, Path::new("/src"), Path::new("/out"), None);

        assert_eq!(route.inputs, vec![PathBuf::from("/src/lib/jquery.js")]);
    }
}
