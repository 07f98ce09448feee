//! Compression seam.
//!
//! The processor consumes minification as a black box through [`Compressor`];
//! the production backend lives in [`super::minify`], tests substitute fakes.

use thiserror::Error;

use super::BundleKind;

/// Minification backend.
pub trait Compressor {
    /// Compress one input's source text.
    fn compress(&self, kind: BundleKind, source: &str) -> Result<Compressed, CompressError>;
}

/// Output of one compression call.
#[derive(Debug, Clone)]
pub struct Compressed {
    /// Compressed text.
    pub code: String,
    /// Recoverable diagnostics. Logged with the input path, never fatal.
    pub warnings: Vec<String>,
}

impl Compressed {
    /// Compressed text with no diagnostics.
    pub fn clean(code: String) -> Self {
        Self {
            code,
            warnings: Vec::new(),
        }
    }
}

/// Fatal compression failure.
#[derive(Debug, Error)]
pub enum CompressError {
    #[error("javascript parsing failed: {0}")]
    Js(String),

    #[error("css minification failed: {0}")]
    Css(String),
}
