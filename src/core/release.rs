//! Release stamp rendering.
//!
//! The configured release token is normalized and rendered exactly once per
//! run, then reused for every output filename.

use chrono::{Datelike, Timelike};

use super::clock::Clock;

/// A rendered release token, ready to splice into output filenames.
///
/// Rendering normalizes the raw token (trim, strip all internal whitespace,
/// lowercase) and then substitutes every occurrence of the embedded tokens:
///
/// - `datestamp` -> `YYYYMMDD`
/// - `timestamp` -> `YYYYMMDDHHMM`, where the hour is the 12-hour clock
///   value (hour mod 12, zero padded): 09:05 and 21:05 both render as
///   `0905`, midnight and noon both render hour `00`.
///
/// Substitution happens after lowercasing, so `DATESTAMP` is substituted too.
#[derive(Debug, Clone)]
pub struct ReleaseStamp(String);

impl ReleaseStamp {
    /// Render the raw release token against the given clock.
    ///
    /// Returns `None` when the token is empty or whitespace-only, in which
    /// case output filenames carry no stamp at all.
    pub fn render(token: &str, clock: &dyn Clock) -> Option<Self> {
        let stamp: String = token.split_whitespace().collect();
        if stamp.is_empty() {
            return None;
        }
        let mut stamp = stamp.to_lowercase();

        if stamp.contains("datestamp") || stamp.contains("timestamp") {
            let now = clock.now();
            let date = format!("{:04}{:02}{:02}", now.year(), now.month(), now.day());
            let time = format!("{date}{:02}{:02}", now.hour() % 12, now.minute());
            stamp = stamp.replace("datestamp", &date).replace("timestamp", &time);
        }

        Some(Self(stamp))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReleaseStamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
