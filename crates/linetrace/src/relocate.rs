//! Relocation of reported errors back to the original source.

use crate::error::ScriptError;
use crate::mapper::map_path;
use camino::Utf8Path;
use line_map::LineMap;
use std::fs;

/// Relocates a reported error back into the original input file.
///
/// Loads the map artifact persisted next to the file the error was reported
/// against and floor-searches it for the reported line. When the map is
/// missing, malformed, or has no key at or after the reported line, the
/// error comes back unchanged; relocation never raises an error of its own.
pub fn locate(input_path: &Utf8Path, error: ScriptError) -> ScriptError {
    let Some(map) = load_map(error.file()) else {
        return error;
    };

    match map.original_for_reported_line(error.line()) {
        Some(original_line) => error.relocated(input_path, original_line),
        None => error,
    }
}

/// Reads and parses the map artifact for a reported file, if possible.
fn load_map(reported_file: &Utf8Path) -> Option<LineMap> {
    let json = fs::read_to_string(map_path(reported_file)).ok()?;
    LineMap::from_json(&json).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_map_returns_error_unchanged() {
        let error = ScriptError::new("/nonexistent/out.php", 3, "boom");
        let located = locate(Utf8Path::new("input.pre"), error);
        assert_eq!(located.file(), "/nonexistent/out.php");
        assert_eq!(located.line(), 3);
    }
}
