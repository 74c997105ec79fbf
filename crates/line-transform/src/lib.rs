//! Annotate/transform/strip pipeline for linetrace.
//!
//! This crate turns an input text and an opaque [`Transform`] into the final
//! output text plus a line correspondence map. Input lines are tagged with
//! their original index, the transform rewrites the text however it likes,
//! and whatever annotations survive are recovered to build the map before
//! being stripped from the output.
//!
//! # Example
//!
//! ```
//! use line_map::Marker;
//! use line_transform::{map_source, TransformError};
//!
//! let marker = Marker::default();
//! let identity = |source: &str| -> Result<String, TransformError> {
//!     Ok(source.to_string())
//! };
//!
//! let mapped = map_source("let x = 1;\n\nprint(x);", &marker, &identity).unwrap();
//! assert_eq!(mapped.output, "let x = 1;\n\nprint(x);\n");
//! assert_eq!(mapped.map.get(2), Some(2));
//! ```

mod pipeline;
mod transform;

pub use pipeline::{
    annotate_lines, assemble_output, extract_pairs, map_source, run_transform, strip_lines,
    MappedSource, LINE_SEPARATOR,
};
pub use transform::{Transform, TransformError};
