//! Line-level source maps for text transpilers.
//!
//! Given an input file, an opaque text-to-text transform, and an output
//! path, [`map`] writes the transformed output (with tracking annotations
//! stripped) plus a `.map` artifact recording which output line came from
//! which input line. Later, [`locate`] uses that artifact to move a runtime
//! error reported against the generated file back to the corresponding line
//! of the original file.
//!
//! # Example
//!
//! ```no_run
//! use camino::Utf8Path;
//! use line_map::Marker;
//! use linetrace::{locate, map, ScriptError, TransformError};
//!
//! let marker = Marker::default();
//! let identity = |source: &str| -> Result<String, TransformError> {
//!     Ok(source.to_string())
//! };
//!
//! let input = Utf8Path::new("app.pre");
//! let output = Utf8Path::new("app.php");
//! map(input, output, &marker, &identity)?;
//!
//! // A runtime fault reported against the generated file...
//! let error = ScriptError::new(output, 7, "undefined variable");
//! // ...comes back pointing at the original source.
//! let located = locate(input, error);
//! println!("{located}");
//! # Ok::<(), linetrace::MapError>(())
//! ```

mod error;
mod mapper;
mod relocate;

pub use error::{MapError, ScriptError};
pub use line_map::{LineMap, LinePair, Marker, MarkerError, MAP_SUFFIX};
pub use line_transform::{MappedSource, Transform, TransformError};
pub use mapper::{map, map_path};
pub use relocate::locate;
