//! Manifest parsing.
//!
//! One scanning state machine with two named modes: `Strict` aborts on the
//! first malformed directive, `Tolerant` drops it and keeps going. Parsing
//! has no side effects beyond the returned [`Manifest`] and log output.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::bundle::BundleKind;
use crate::{debug, log};

use super::line::Directive;
use super::{Bundle, Manifest};

/// How the parser reacts to malformed directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Abort on the first malformed directive (`build`).
    Strict,
    /// Drop malformed directives and keep going (`inspect`).
    Tolerant,
}

/// Errors surfaced by manifest parsing.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest `{}`", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed manifest `{}` (line {line}): {reason}", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

/// Read and parse one manifest file.
pub fn parse_file(path: &Path, mode: ParseMode) -> Result<Manifest, ManifestError> {
    let text = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_lines(path, text.lines(), mode)
}

/// Parse manifest lines into an ordered bundle list.
///
/// `source` labels errors and log lines; the lines themselves may come from
/// anywhere, so tests can drive the parser with in-memory data.
pub fn parse_lines<'a, I>(
    source: &Path,
    lines: I,
    mode: ParseMode,
) -> Result<Manifest, ManifestError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut state = ParserState {
        bundles: Vec::new(),
        current: None,
    };

    for (idx, raw) in lines.into_iter().enumerate() {
        let number = idx + 1;
        match Directive::classify(raw) {
            Directive::Blank => {}
            Directive::Output(key) => state.open_output(source, number, key, mode)?,
            Directive::Input(input) => state.push_input(source, number, input, mode)?,
            Directive::Other => {
                debug!("manifest"; "{}:{}: unrecognized line skipped", source.display(), number);
            }
        }
    }

    Ok(Manifest {
        source: source.to_path_buf(),
        bundles: state.bundles,
    })
}

/// Scanning state threaded through one manifest pass.
struct ParserState {
    bundles: Vec<Bundle>,
    /// Index of the bundle opened by the most recent output directive.
    /// Inputs land there until the next output directive replaces it.
    current: Option<usize>,
}

impl ParserState {
    fn open_output(
        &mut self,
        source: &Path,
        line: usize,
        key: &str,
        mode: ParseMode,
    ) -> Result<(), ManifestError> {
        let Some(kind) = BundleKind::from_output_key(key) else {
            return match mode {
                ParseMode::Strict => Err(ManifestError::Malformed {
                    path: source.to_path_buf(),
                    line,
                    reason: format!("output `{key}` has neither a .js nor a .css extension"),
                }),
                ParseMode::Tolerant => {
                    log!("warning"; "{}:{}: output `{}` has neither a .js nor a .css extension, skipping", source.display(), line, key);
                    // Inputs after a skipped output have no home until the
                    // next valid output directive.
                    self.current = None;
                    Ok(())
                }
            };
        };

        // A repeated key starts fresh: the earlier definition is discarded
        // and the bundle takes the later declaration's position.
        if let Some(pos) = self.bundles.iter().position(|b| b.name == key) {
            log!("warning"; "{}:{}: duplicate output `{}`, keeping the later definition", source.display(), line, key);
            self.bundles.remove(pos);
        }

        self.bundles.push(Bundle {
            name: key.to_string(),
            kind,
            inputs: Vec::new(),
        });
        self.current = Some(self.bundles.len() - 1);
        Ok(())
    }

    fn push_input(
        &mut self,
        source: &Path,
        line: usize,
        input: &str,
        mode: ParseMode,
    ) -> Result<(), ManifestError> {
        match self.current {
            Some(idx) => {
                self.bundles[idx].inputs.push(PathBuf::from(input));
                Ok(())
            }
            None => match mode {
                ParseMode::Strict => Err(ManifestError::Malformed {
                    path: source.to_path_buf(),
                    line,
                    reason: format!("input `{input}` appears before any -output: directive"),
                }),
                ParseMode::Tolerant => {
                    debug!("manifest"; "{}:{}: input `{}` has no output directive, dropped", source.display(), line, input);
                    Ok(())
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict(lines: &[&str]) -> Result<Manifest, ManifestError> {
        parse_lines(Path::new("test.bundles"), lines.iter().copied(), ParseMode::Strict)
    }

    fn tolerant(lines: &[&str]) -> Manifest {
        parse_lines(Path::new("test.bundles"), lines.iter().copied(), ParseMode::Tolerant)
            .expect("tolerant parse never fails")
    }

    #[test]
    fn test_bundles_preserve_declaration_order() {
        let manifest = strict(&[
            "-output: js/app.js",
            "+lib/jquery.js",
            "+app/main.js",
            "-output: js/admin.js",
            "+admin/panel.js",
            "-output: css/site.css",
            "+styles/reset.css",
            "+styles/site.css",
        ])
        .unwrap();

        assert_eq!(manifest.bundles.len(), 3);
        assert_eq!(manifest.bundles[0].name, "js/app.js");
        assert_eq!(manifest.bundles[0].kind, BundleKind::Js);
        assert_eq!(
            manifest.bundles[0].inputs,
            vec![PathBuf::from("lib/jquery.js"), PathBuf::from("app/main.js")]
        );
        assert_eq!(manifest.bundles[1].name, "js/admin.js");
        assert_eq!(manifest.bundles[1].inputs, vec![PathBuf::from("admin/panel.js")]);
        assert_eq!(manifest.bundles[2].kind, BundleKind::Css);
        assert_eq!(manifest.bundles[2].inputs.len(), 2);

        let total: usize = manifest.bundles.iter().map(|b| b.inputs.len()).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn test_blank_and_comment_lines_leave_state_untouched() {
        let manifest = strict(&[
            "",
            "   ",
            "# header comment",
            "-output: js/app.js",
            "",
            "// interleaved comment",
            "+app/main.js",
            "\t",
        ])
        .unwrap();

        assert_eq!(manifest.bundles.len(), 1);
        assert_eq!(manifest.bundles[0].inputs, vec![PathBuf::from("app/main.js")]);
    }

    #[test]
    fn test_unrecognized_lines_are_skipped() {
        let manifest = strict(&[
            "- output: broken.js",
            "-output: js/app.js",
            "stray text",
            "+app/main.js",
        ])
        .unwrap();

        assert_eq!(manifest.bundles.len(), 1);
        assert_eq!(manifest.bundles[0].inputs.len(), 1);
    }

    #[test]
    fn test_input_before_output_fails_strict() {
        let err = strict(&["+app/main.js"]).unwrap_err();
        match err {
            ManifestError::Malformed { path, line, .. } => {
                assert_eq!(path, PathBuf::from("test.bundles"));
                assert_eq!(line, 1);
            }
            other => panic!("expected Malformed, got {other:?}"),
        }
        let rendered = strict(&["+app/main.js"]).unwrap_err().to_string();
        assert!(rendered.contains("test.bundles"));
    }

    #[test]
    fn test_input_before_output_dropped_tolerant() {
        let manifest = tolerant(&["+app/main.js", "-output: js/app.js", "+app/other.js"]);
        assert_eq!(manifest.bundles.len(), 1);
        assert_eq!(manifest.bundles[0].inputs, vec![PathBuf::from("app/other.js")]);
    }

    #[test]
    fn test_output_without_known_extension_fails_strict() {
        let err = strict(&["-output: bundle.txt"]).unwrap_err();
        assert!(matches!(err, ManifestError::Malformed { line: 1, .. }));
    }

    #[test]
    fn test_output_without_known_extension_skipped_tolerant() {
        // The bad output is dropped and so are its inputs, up to the next
        // valid output directive.
        let manifest = tolerant(&[
            "-output: bundle.txt",
            "+stray/input.js",
            "-output: js/app.js",
            "+app/main.js",
        ]);

        assert_eq!(manifest.bundles.len(), 1);
        assert_eq!(manifest.bundles[0].name, "js/app.js");
        assert_eq!(manifest.bundles[0].inputs, vec![PathBuf::from("app/main.js")]);
    }

    #[test]
    fn test_duplicate_output_keeps_later_definition() {
        let manifest = strict(&[
            "-output: js/app.js",
            "+old/one.js",
            "-output: js/admin.js",
            "+admin/panel.js",
            "-output: js/app.js",
            "+new/one.js",
        ])
        .unwrap();

        assert_eq!(manifest.bundles.len(), 2);
        // The surviving definition sits at its later declaration position
        // with a fresh input list.
        assert_eq!(manifest.bundles[0].name, "js/admin.js");
        assert_eq!(manifest.bundles[1].name, "js/app.js");
        assert_eq!(manifest.bundles[1].inputs, vec![PathBuf::from("new/one.js")]);
    }

    #[test]
    fn test_output_with_empty_input_list() {
        let manifest = strict(&["-output: js/empty.js"]).unwrap();
        assert_eq!(manifest.bundles.len(), 1);
        assert!(manifest.bundles[0].inputs.is_empty());
    }

    #[test]
    fn test_parse_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("js.bundles");
        fs::write(&path, "# app bundle\n-output: js/app.js\n+app/main.js\n").unwrap();

        let manifest = parse_file(&path, ParseMode::Strict).unwrap();
        assert_eq!(manifest.source, path);
        assert_eq!(manifest.bundles.len(), 1);
        assert_eq!(manifest.bundles[0].inputs, vec![PathBuf::from("app/main.js")]);
    }

    #[test]
    fn test_parse_file_missing_manifest() {
        let err = parse_file(Path::new("/nonexistent/js.bundles"), ParseMode::Strict).unwrap_err();
        assert!(matches!(err, ManifestError::Read { .. }));
    }
}
