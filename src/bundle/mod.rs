//! Bundle resolution, compression and processing.

mod compress;
mod kind;
pub mod minify;
mod process;
mod resolve;
mod route;

// Types
pub use compress::{Compressed, CompressError, Compressor};
pub use kind::BundleKind;
pub use route::BundleRoute;

// Resolution (pure functions)
pub use resolve::resolve_output_path;

// Processing (side effects)
pub use minify::MinifyCompressor;
pub use process::{BundleError, BundleProcessor, ProcessSummary};
