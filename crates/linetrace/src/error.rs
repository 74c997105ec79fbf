//! Error types for map operations and reported script errors.

use camino::{Utf8Path, Utf8PathBuf};
use line_transform::TransformError;
use thiserror::Error;

/// A failure during a top-level map operation.
#[derive(Debug, Error)]
pub enum MapError {
    /// Failed to read the input file.
    #[error("failed to read input {path}: {source}")]
    ReadInput {
        /// The input path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write the output file or its map artifact.
    #[error("failed to write {path}: {source}")]
    WriteArtifact {
        /// The artifact path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to serialize the line map.
    #[error("failed to serialize map for {path}: {source}")]
    SerializeMap {
        /// The map artifact path.
        path: Utf8PathBuf,
        /// The underlying serialization error.
        source: serde_json::Error,
    },

    /// The transform function failed; propagated unchanged.
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// A runtime error reported against a generated output file.
///
/// Carries the file path and 1-based line number the runtime reported, plus
/// the original message and optional cause. The value is immutable:
/// relocation builds a new descriptor with corrected file and line rather
/// than mutating this one.
#[derive(Debug, Error)]
#[error("{message} ({file}:{line})")]
pub struct ScriptError {
    file: Utf8PathBuf,
    line: u32,
    message: String,
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ScriptError {
    /// Creates a script error reported at `file:line` (1-based line).
    pub fn new(file: impl Into<Utf8PathBuf>, line: u32, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            message: message.into(),
            cause: None,
        }
    }

    /// Attaches an underlying cause.
    pub fn with_cause(
        mut self,
        cause: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// The file the error is reported against.
    #[inline]
    pub fn file(&self) -> &Utf8Path {
        &self.file
    }

    /// The reported 1-based line number.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Builds a copy of this error relocated to `file:line`, carrying the
    /// same message and cause.
    pub(crate) fn relocated(self, file: impl Into<Utf8PathBuf>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
            message: self.message,
            cause: self.cause,
        }
    }
}
