//! Utility modules shared across the bundler.

pub mod path;

/// Return "s" suffix for plural counts
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "bundle")` -> `"0 bundles"`
/// - `plural_count(1, "bundle")` -> `"1 bundle"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "bundle"), "0 bundles");
        assert_eq!(plural_count(1, "bundle"), "1 bundle");
        assert_eq!(plural_count(7, "input"), "7 inputs");
    }
}
