//! Configuration section definitions.
//!
//! Each module corresponds to a section in `bundlemin.toml`:
//!
//! | Module  | TOML Section | Purpose                                 |
//! |---------|--------------|-----------------------------------------|
//! | `build` | `[build]`    | Bundle roots, manifests, release stamp  |

mod build;

pub use build::BuildSectionConfig;
