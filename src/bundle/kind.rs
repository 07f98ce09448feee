//! Bundle kind definitions.

/// Kind of bundled artifact, selected by the output key's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BundleKind {
    Js,
    Css,
}

impl BundleKind {
    /// Derive the kind from an output key's suffix.
    ///
    /// The match is case-sensitive: `app.js` and `theme.css` resolve,
    /// `APP.JS` does not.
    pub fn from_output_key(key: &str) -> Option<Self> {
        if key.ends_with(".js") {
            Some(Self::Js)
        } else if key.ends_with(".css") {
            Some(Self::Css)
        } else {
            None
        }
    }

    /// File suffix including the dot.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Js => ".js",
            Self::Css => ".css",
        }
    }

    /// Bare extension without the dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Js => "js",
            Self::Css => "css",
        }
    }
}

impl std::fmt::Display for BundleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}
