//! Core types - pure abstractions shared across the codebase.

mod clock;
mod release;

pub use clock::{Clock, SystemClock};
pub use release::ReleaseStamp;

#[cfg(test)]
pub use clock::FixedClock;
