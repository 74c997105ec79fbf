//! The external transformation seam.

use std::fmt;
use thiserror::Error;

/// A failure raised by a transformation backend.
///
/// The pipeline propagates this unchanged: transform failures are never
/// caught, retried, or wrapped by the core.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct TransformError(Box<dyn std::error::Error + Send + Sync>);

impl TransformError {
    /// Wraps an arbitrary error raised by a transformation backend.
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(source.into())
    }

    /// Creates a transform error from a plain message.
    pub fn msg(message: impl fmt::Display) -> Self {
        Self(message.to_string().into())
    }
}

/// An opaque source-to-source rewrite supplied by the caller.
///
/// The pipeline hands the implementation the full annotated source text and
/// takes back the transformed text. The transform may add, remove, reorder,
/// merge, or split lines arbitrarily; annotations are plain text to it, and
/// any annotation it leaves intact is assumed to still point at the correct
/// original line. Invoked exactly once per map operation.
pub trait Transform {
    /// Rewrites the annotated source text into transformed text.
    fn transform(&self, source: &str) -> Result<String, TransformError>;
}

impl<F> Transform for F
where
    F: Fn(&str) -> Result<String, TransformError>,
{
    fn transform(&self, source: &str) -> Result<String, TransformError> {
        self(source)
    }
}
