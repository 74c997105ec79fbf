//! Line-level correspondence maps for linetrace.
//!
//! This crate provides the data model shared by the transform pipeline and
//! the error relocator: the marker convention used to annotate lines, the
//! correspondence pairs recovered from transformed output, and the persisted
//! map from output line numbers back to original line numbers.

mod map;
mod marker;

pub use map::{LineMap, LinePair, MAP_SUFFIX};
pub use marker::{Marker, MarkerError, DEFAULT_COMMENT, DEFAULT_TAG};
