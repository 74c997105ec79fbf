//! Marker configuration for line annotations.

use regex::Regex;
use thiserror::Error;

/// The default marker tag.
pub const DEFAULT_TAG: &str = "PRE_LINE";

/// The default comment leader preceding the marker tag.
pub const DEFAULT_COMMENT: &str = "//";

/// An invalid marker configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MarkerError {
    /// The marker tag is empty or contains whitespace.
    #[error("invalid marker tag: {0:?}")]
    InvalidTag(String),

    /// The comment leader is empty or contains whitespace.
    #[error("invalid comment leader: {0:?}")]
    InvalidComment(String),
}

/// Marker configuration for a single map operation.
///
/// A marker is the trailing `<comment> <tag> <index>` token appended to each
/// non-blank input line before transformation. The tag and comment leader are
/// configured per operation rather than shared globally, so concurrent map
/// operations with different conventions cannot collide.
#[derive(Debug, Clone)]
pub struct Marker {
    tag: String,
    comment: String,
    /// Matches `<tag> (\d+)` anchored to end of line.
    capture_re: Regex,
    /// Matches the full removable suffix: `<comment> <tag> \d+` at end of line.
    strip_re: Regex,
}

impl Marker {
    /// Creates a marker with the given tag and comment leader.
    ///
    /// Both must be non-empty and free of whitespace; the annotation has to
    /// remain a single trailing token sequence for the end-anchored match to
    /// hold.
    pub fn new(tag: &str, comment: &str) -> Result<Self, MarkerError> {
        if tag.is_empty() || tag.chars().any(char::is_whitespace) {
            return Err(MarkerError::InvalidTag(tag.to_string()));
        }
        if comment.is_empty() || comment.chars().any(char::is_whitespace) {
            return Err(MarkerError::InvalidComment(comment.to_string()));
        }

        // Both tokens are escaped, so the patterns always compile.
        let capture_re = Regex::new(&format!(r"{} (\d+)$", regex::escape(tag)))
            .map_err(|_| MarkerError::InvalidTag(tag.to_string()))?;
        let strip_re = Regex::new(&format!(
            r"{} {} \d+$",
            regex::escape(comment),
            regex::escape(tag)
        ))
        .map_err(|_| MarkerError::InvalidComment(comment.to_string()))?;

        Ok(Self {
            tag: tag.to_string(),
            comment: comment.to_string(),
            capture_re,
            strip_re,
        })
    }

    /// Returns the marker tag.
    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the comment leader.
    #[inline]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Annotates a single input line with its original line index.
    ///
    /// Trailing whitespace is trimmed first; a line that is blank after
    /// trimming is normalized to the empty string and never annotated.
    pub fn annotate(&self, line: &str, index: u32) -> String {
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            return String::new();
        }
        format!("{} {} {} {}", trimmed, self.comment, self.tag, index)
    }

    /// Extracts the original line index from a surviving annotation.
    ///
    /// Only a `<tag> <digits>` sequence at the literal end of the line
    /// matches; a marker appearing mid-line is ignored.
    pub fn capture(&self, line: &str) -> Option<u32> {
        self.capture_re
            .captures(line)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// Removes a trailing annotation from a line, if present.
    ///
    /// Lines without an annotation pass through with trailing whitespace
    /// trimmed.
    pub fn strip(&self, line: &str) -> String {
        self.strip_re.replace(line, "").trim_end().to_string()
    }
}

impl Default for Marker {
    fn default() -> Self {
        // The default tokens satisfy the constructor's validation.
        match Self::new(DEFAULT_TAG, DEFAULT_COMMENT) {
            Ok(marker) => marker,
            Err(_) => unreachable!("default marker tokens are valid"),
        }
    }
}
