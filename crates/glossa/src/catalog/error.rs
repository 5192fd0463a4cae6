use thiserror::Error;

/// Errors from importing a catalog from JSON.
#[derive(Debug, Error)]
pub enum CatalogParseError {
    /// The document root is not a JSON object.
    #[error("catalog root must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    /// The text is not valid JSON.
    #[error("invalid catalog JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    /// Strict import found a leaf that is neither a string nor an object.
    #[error("unsupported {kind} value at '{path}'")]
    UnsupportedValue { path: String, kind: &'static str },
}
