//! Production compressor for JS and CSS bundles.
//!
//! Uses oxc for JavaScript and lightningcss for CSS.

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

use super::BundleKind;
use super::compress::{Compressed, CompressError, Compressor};

/// Compressor backed by oxc (JavaScript) and lightningcss (CSS).
pub struct MinifyCompressor;

impl Compressor for MinifyCompressor {
    fn compress(&self, kind: BundleKind, source: &str) -> Result<Compressed, CompressError> {
        match kind {
            BundleKind::Js => compress_js(source),
            BundleKind::Css => compress_css(source),
        }
    }
}

/// Minify JavaScript source code.
///
/// A parser panic is fatal; recoverable diagnostics are surfaced as warnings
/// and minification proceeds on the recovered tree.
fn compress_js(source: &str) -> Result<Compressed, CompressError> {
    let allocator = Allocator::default();
    let source_type = SourceType::mjs();
    let ret = Parser::new(&allocator, source, source_type).parse();
    if ret.panicked {
        let detail = ret
            .errors
            .first()
            .map_or_else(|| "unparseable input".to_string(), ToString::to_string);
        return Err(CompressError::Js(detail));
    }
    let warnings: Vec<String> = ret.errors.iter().map(ToString::to_string).collect();

    let mut program = ret.program;
    let options = MinifierOptions {
        mangle: Some(MangleOptions::default()),
        compress: Some(CompressOptions::smallest()),
    };
    let ret = Minifier::new(options).minify(&allocator, &mut program);
    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code;
    Ok(Compressed { code, warnings })
}

/// Minify CSS source code.
fn compress_css(source: &str) -> Result<Compressed, CompressError> {
    let stylesheet = StyleSheet::parse(source, ParserOptions::default())
        .map_err(|e| CompressError::Css(e.to_string()))?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|e| CompressError::Css(e.to_string()))?;
    Ok(Compressed::clean(result.code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_js_removes_whitespace() {
        let source = "function  add ( a , b ) {\n    return a + b ;\n}\nexport { add };";
        let out = MinifyCompressor
            .compress(BundleKind::Js, source)
            .expect("valid js minifies");
        assert!(!out.code.contains("\n    "));
        assert!(out.code.len() < source.len());
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_compress_js_unparseable_is_fatal() {
        // Unterminated string literal cannot be recovered from.
        let err = MinifyCompressor
            .compress(BundleKind::Js, "const s = 'abc")
            .unwrap_err();
        assert!(matches!(err, CompressError::Js(_)));
    }

    #[test]
    fn test_compress_css_minifies() {
        let source = "body {\n  color : red ;\n}\n";
        let out = MinifyCompressor
            .compress(BundleKind::Css, source)
            .expect("valid css minifies");
        assert_eq!(out.code, "body{color:red}");
    }

    #[test]
    fn test_compress_css_parse_failure_is_fatal() {
        let err = MinifyCompressor
            .compress(BundleKind::Css, "body { color: }")
            .unwrap_err();
        assert!(matches!(err, CompressError::Css(_)));
    }
}
