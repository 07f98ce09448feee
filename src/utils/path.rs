//! Path normalization utilities.
//!
//! Pure helpers for turning configured and user-supplied paths into the
//! absolute forms the rest of the pipeline works with.

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Expand a configured root directory to an absolute path.
///
/// Applies `~` expansion, then resolves relative paths against the project
/// root (the directory holding the config file).
///
/// # Example
/// ```ignore
/// // config says `target = "target"`, project root is /work/site
/// let root = expand_root(Path::new("target"), Path::new("/work/site"));
/// assert_eq!(root, PathBuf::from("/work/site/target"));
/// ```
pub fn expand_root(path: &Path, project_root: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(path.to_str().unwrap_or_default()).into_owned();
    let path = PathBuf::from(expanded);
    let full_path = if path.is_relative() {
        project_root.join(&path)
    } else {
        path
    };
    normalize_path(&full_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_absolute() {
        let path = Path::new("/absolute/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_normalize_path_relative() {
        let path = Path::new("relative/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_expand_root_relative_joins_project_root() {
        let root = expand_root(Path::new("target"), Path::new("/work/site"));
        assert_eq!(root, PathBuf::from("/work/site/target"));
    }

    #[test]
    fn test_expand_root_absolute_ignores_project_root() {
        let root = expand_root(Path::new("/srv/www/assets"), Path::new("/work/site"));
        assert_eq!(root, PathBuf::from("/srv/www/assets"));
    }

    #[test]
    fn test_expand_root_tilde() {
        // Tilde expansion needs a home directory to resolve against.
        if std::env::var_os("HOME").is_none() {
            return;
        }
        let root = expand_root(Path::new("~/bundles"), Path::new("/work/site"));
        assert!(root.is_absolute());
        assert!(!root.starts_with("/work/site"));
        assert!(root.ends_with("bundles"));
    }
}
