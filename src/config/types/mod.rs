//! Configuration utility types.

mod error;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
