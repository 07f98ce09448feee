//! Per-line directive classification.

/// Marker introducing an output directive.
const OUTPUT_MARKER: &str = "-output:";

/// One classified manifest line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    /// Empty line or `#` / `//` comment. Never touches parser state.
    Blank,
    /// `-output:` marker; the payload is the trimmed output key.
    Output(&'a str),
    /// `+` marker; the payload is the trimmed input path.
    Input(&'a str),
    /// Anything else. Ignored.
    Other,
}

impl<'a> Directive<'a> {
    /// Classify a raw manifest line.
    ///
    /// Precedence: comment/blank first, then the output marker, then the
    /// input marker. A commented-out marker is a comment.
    pub fn classify(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            return Self::Blank;
        }
        if let Some(rest) = line.strip_prefix(OUTPUT_MARKER) {
            return Self::Output(rest.trim());
        }
        if let Some(rest) = line.strip_prefix('+') {
            return Self::Input(rest.trim());
        }
        Self::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(Directive::classify(""), Directive::Blank);
        assert_eq!(Directive::classify("   \t  "), Directive::Blank);
        assert_eq!(Directive::classify("# a comment"), Directive::Blank);
        assert_eq!(Directive::classify("// a comment"), Directive::Blank);
    }

    #[test]
    fn test_comment_wins_over_markers() {
        assert_eq!(Directive::classify("#-output: js/app.js"), Directive::Blank);
        assert_eq!(Directive::classify("//+lib/jquery.js"), Directive::Blank);
    }

    #[test]
    fn test_output_directive() {
        assert_eq!(
            Directive::classify("-output: js/app.js"),
            Directive::Output("js/app.js")
        );
        assert_eq!(
            Directive::classify("-output:js/app.js"),
            Directive::Output("js/app.js")
        );
        assert_eq!(
            Directive::classify("  -output:   js/app.js  "),
            Directive::Output("js/app.js")
        );
    }

    #[test]
    fn test_output_marker_must_be_exact() {
        // A space inside the marker breaks it.
        assert_eq!(Directive::classify("- output: js/app.js"), Directive::Other);
        assert_eq!(Directive::classify("-Output: js/app.js"), Directive::Other);
        assert_eq!(Directive::classify("output: js/app.js"), Directive::Other);
    }

    #[test]
    fn test_input_directive() {
        assert_eq!(
            Directive::classify("+lib/jquery.js"),
            Directive::Input("lib/jquery.js")
        );
        assert_eq!(
            Directive::classify("  + lib/jquery.js "),
            Directive::Input("lib/jquery.js")
        );
    }

    #[test]
    fn test_unrecognized_lines() {
        assert_eq!(Directive::classify("jquery.js"), Directive::Other);
        assert_eq!(Directive::classify("-note: hello"), Directive::Other);
    }
}
