use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for parsegen-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a schema error from a JSON error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = line_column_offset(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 1)));
        Box::new(Error::Json {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an unknown built-in error for an override key.
    pub fn unknown_builtin_error(&self, name: impl Into<String>) -> Box<Error> {
        let name = name.into();
        Box::new(Error::UnknownBuiltin {
            src: self.named_source(),
            span: find_key_span(&self.src, &name),
            name,
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'parsegen init' to create a parsegen.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse parsegen.toml")]
    #[diagnostic(code(parsegen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse schema")]
    #[diagnostic(
        code(parsegen::schema_error),
        help("expected an array of classes or a /schemas response object")
    )]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid schema here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{name}' is not a built-in class")]
    #[diagnostic(
        code(parsegen::unknown_builtin),
        help("only '_User', '_Role' and '_Session' can be overridden")
    )]
    UnknownBuiltin {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown class")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("missing required parameter '{name}'")]
    #[diagnostic(
        code(parsegen::missing_parameter),
        help("pass --{flag} or set {env}")
    )]
    MissingParameter {
        name: &'static str,
        flag: &'static str,
        env: &'static str,
    },

    #[error("request to '{url}' failed")]
    #[diagnostic(code(parsegen::http_error))]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("'{url}' responded with status {status}")]
    #[diagnostic(
        code(parsegen::server_error),
        help("check the server URL, application id and master key")
    )]
    ServerStatus {
        url: String,
        status: u16,
        body: String,
    },

    #[error("{message}")]
    #[diagnostic(code(parsegen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

/// Convert a 1-based line/column pair into a byte offset.
fn line_column_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    (offset < src.len()).then_some(offset)
}

/// Find the span of a table key in TOML source.
/// Matches `name =`, `name=` and quoted `"name"` forms.
fn find_key_span(src: &str, name: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", name);
    if let Some(pos) = src.find(&quoted) {
        return Some(SourceSpan::from((pos, quoted.len())));
    }

    let patterns = [format!("{} =", name), format!("{}=", name)];
    for pattern in &patterns {
        if let Some(pos) = src.find(pattern) {
            return Some(SourceSpan::from((pos, name.len())));
        }
    }

    src.find(name).map(|pos| SourceSpan::from((pos, name.len())))
}
