//! Bundle manifest model and parsing.
//!
//! A manifest is a line-oriented text file declaring output artifacts and
//! the ordered source files concatenated into each:
//!
//! ```text
//! # comment
//! -output: js/app.js
//! +lib/jquery.js
//! +app/main.js
//! -output: css/site.css
//! +styles/reset.css
//! ```

pub mod line;
pub mod parser;

use std::path::PathBuf;

use crate::bundle::BundleKind;

pub use parser::{ManifestError, ParseMode, parse_file, parse_lines};

/// One parsed manifest file.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// The manifest file the bundles were read from.
    pub source: PathBuf,
    /// Declared bundles, in declaration order.
    pub bundles: Vec<Bundle>,
}

/// One declared output artifact and its ordered inputs.
#[derive(Debug, Clone)]
pub struct Bundle {
    /// Output key as written in the manifest (e.g. `js/app.js`).
    pub name: String,
    /// Artifact kind derived from the output key's extension.
    pub kind: BundleKind,
    /// Input paths in declaration order, relative to the source root.
    pub inputs: Vec<PathBuf>,
}
