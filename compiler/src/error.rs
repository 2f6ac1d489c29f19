use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FbsError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error at line {line}, column {column}: {msg}")]
    ParseError {
        msg:    String,
        line:   usize,
        column: usize,
    },

    #[error("In schema {}: {source}", .path.display())]
    Schema {
        path:   PathBuf,
        #[source]
        source: Box<FbsError>,
    },

    #[error("Invalid type map: {0}")]
    TypeMapError(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FbsError {
    /// Wraps an I/O failure together with the path that caused it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FbsError::Io { path: path.into(), source }
    }

    /// Attaches the schema path to an error raised while scanning its text.
    pub fn in_schema(path: impl Into<PathBuf>, source: FbsError) -> Self {
        FbsError::Schema { path: path.into(), source: Box::new(source) }
    }
}
