//! Output path resolution.

use std::path::{Path, PathBuf};

use crate::core::ReleaseStamp;

use super::BundleKind;

/// Compute a bundle's final output path under the target root.
///
/// The kind's extension is stripped from the declared name if present, the
/// stamp (when any) is inserted as `-<stamp>`, and the extension reappended:
/// `js/app.js` with stamp `2.5.0` becomes `<target>/js/app-2.5.0.js`.
///
/// Resolution is pure; for a fixed stamp the same name always yields the
/// same path. Invalid path characters surface later as filesystem errors.
pub fn resolve_output_path(
    target_root: &Path,
    name: &str,
    kind: BundleKind,
    stamp: Option<&ReleaseStamp>,
) -> PathBuf {
    // Declared names are always relative; a leading separator does not
    // escape the target root.
    let base = name.trim_start_matches('/');
    let base = base.strip_suffix(kind.suffix()).unwrap_or(base);
    let file = match stamp {
        Some(stamp) => format!("{base}-{stamp}{}", kind.suffix()),
        None => format!("{base}{}", kind.suffix()),
    };
    target_root.join(file)
}
