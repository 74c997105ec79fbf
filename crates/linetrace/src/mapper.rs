//! The top-level map operation: file in, artifacts out.

use crate::error::MapError;
use camino::{Utf8Path, Utf8PathBuf};
use line_map::{LineMap, Marker, MAP_SUFFIX};
use line_transform::{map_source, Transform};
use std::fs;

/// Returns the map artifact path for a given output path.
pub fn map_path(output_path: &Utf8Path) -> Utf8PathBuf {
    Utf8PathBuf::from(format!("{output_path}{MAP_SUFFIX}"))
}

/// Transforms `input_path` into `output_path`, persisting a line map.
///
/// Reads the input, runs the annotate/transform/strip pipeline, writes the
/// cleaned output to `output_path`, then writes the serialized map to
/// `<output_path>.map`. The two writes are sequential single writes;
/// concurrent callers targeting the same output path must serialize
/// themselves.
pub fn map(
    input_path: &Utf8Path,
    output_path: &Utf8Path,
    marker: &Marker,
    transform: &impl Transform,
) -> Result<LineMap, MapError> {
    let source = fs::read_to_string(input_path).map_err(|source| MapError::ReadInput {
        path: input_path.to_owned(),
        source,
    })?;

    let mapped = map_source(&source, marker, transform)?;

    fs::write(output_path, &mapped.output).map_err(|source| MapError::WriteArtifact {
        path: output_path.to_owned(),
        source,
    })?;

    let artifact = map_path(output_path);
    let json = mapped
        .map
        .to_json()
        .map_err(|source| MapError::SerializeMap {
            path: artifact.clone(),
            source,
        })?;
    fs::write(&artifact, json).map_err(|source| MapError::WriteArtifact {
        path: artifact.clone(),
        source,
    })?;

    Ok(mapped.map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_path_appends_suffix() {
        assert_eq!(map_path(Utf8Path::new("out/app.php")), "out/app.php.map");
    }
}
