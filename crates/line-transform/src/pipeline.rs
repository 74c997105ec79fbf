//! Pipeline stages: annotate, invoke, extract, strip, assemble.

use crate::transform::{Transform, TransformError};
use line_map::{LineMap, LinePair, Marker};

/// The line separator the pipeline canonicalizes on.
pub const LINE_SEPARATOR: &str = "\n";

/// The result of a complete map operation over in-memory text.
#[derive(Debug, Clone)]
pub struct MappedSource {
    /// The stripped transformed text, ending with exactly one newline.
    pub output: String,
    /// The correspondence map recovered from surviving annotations.
    pub map: LineMap,
}

/// Annotates each input line with its 0-based original index.
///
/// Lines that are blank after trailing-whitespace trim come through as empty
/// strings with no annotation.
pub fn annotate_lines(lines: &[&str], marker: &Marker) -> Vec<String> {
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| marker.annotate(line, index as u32))
        .collect()
}

/// Joins annotated lines, invokes the transform exactly once, and splits the
/// result back into lines.
///
/// Any failure raised by the transform propagates unchanged.
pub fn run_transform(
    annotated: &[String],
    transform: &impl Transform,
) -> Result<Vec<String>, TransformError> {
    let source = annotated.join(LINE_SEPARATOR);
    let transformed = transform.transform(&source)?;
    Ok(transformed
        .split(LINE_SEPARATOR)
        .map(str::to_string)
        .collect())
}

/// Scans transformed lines for surviving annotations.
///
/// Emits one pair per annotated line, in output-line order; scan order
/// already equals output-line order, so no sort is needed.
pub fn extract_pairs(lines: &[String], marker: &Marker) -> Vec<LinePair> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(output, line)| {
            marker
                .capture(line)
                .map(|original| LinePair::new(original, output as u32))
        })
        .collect()
}

/// Removes annotations from transformed lines.
pub fn strip_lines(lines: &[String], marker: &Marker) -> Vec<String> {
    lines.iter().map(|line| marker.strip(line)).collect()
}

/// Joins stripped lines into the final output text.
///
/// Trailing separators and whitespace are trimmed from the combined text,
/// then exactly one newline is appended, so the output ends with a single
/// newline no matter how many blank lines the transform left at the end.
pub fn assemble_output(lines: &[String]) -> String {
    let mut combined = lines.join(LINE_SEPARATOR).trim_end().to_string();
    combined.push_str(LINE_SEPARATOR);
    combined
}

/// Runs the full pipeline over in-memory source text.
///
/// Annotates the source, hands it to the transform, then recovers the
/// correspondence map and the stripped output from the transformed text.
/// No file I/O happens here.
pub fn map_source(
    source: &str,
    marker: &Marker,
    transform: &impl Transform,
) -> Result<MappedSource, TransformError> {
    let input_lines: Vec<&str> = source.split(LINE_SEPARATOR).collect();
    let annotated = annotate_lines(&input_lines, marker);
    let transformed = run_transform(&annotated, transform)?;

    let map = LineMap::from_pairs(extract_pairs(&transformed, marker));
    let output = assemble_output(&strip_lines(&transformed, marker));

    Ok(MappedSource { output, map })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_annotate_lines_indexes_from_zero() {
        let marker = Marker::default();
        let annotated = annotate_lines(&["<?php", "", "$h = f();"], &marker);
        assert_eq!(
            annotated,
            vec![
                "<?php // PRE_LINE 0".to_string(),
                String::new(),
                "$h = f(); // PRE_LINE 2".to_string(),
            ]
        );
    }

    #[test]
    fn test_annotate_lines_empty_input() {
        let marker = Marker::default();
        assert_eq!(annotate_lines(&[], &marker), Vec::<String>::new());
    }

    #[test]
    fn test_run_transform_round_trips_lines() {
        let annotated = vec!["hello".to_string(), "world".to_string()];
        let upper =
            |source: &str| -> Result<String, TransformError> { Ok(source.to_uppercase()) };
        let lines = run_transform(&annotated, &upper).unwrap();
        assert_eq!(lines, vec!["HELLO".to_string(), "WORLD".to_string()]);
    }

    #[test]
    fn test_run_transform_propagates_failure() {
        let annotated = vec!["x".to_string()];
        let failing =
            |_: &str| -> Result<String, TransformError> { Err(TransformError::msg("bad input")) };
        assert!(run_transform(&annotated, &failing).is_err());
    }

    #[test]
    fn test_extract_pairs_in_scan_order() {
        let marker = Marker::default();
        let lines = vec![
            "<?php // PRE_LINE 0".to_string(),
            String::new(),
            "new Deferred(function() {".to_string(),
            "    close($h);".to_string(),
            "}); // PRE_LINE 2".to_string(),
        ];
        assert_eq!(
            extract_pairs(&lines, &marker),
            vec![LinePair::new(0, 0), LinePair::new(2, 4)]
        );
    }

    #[test]
    fn test_extract_pairs_ignores_mid_line_markers() {
        let marker = Marker::default();
        let lines = vec!["a PRE_LINE 12 b".to_string(), "c // PRE_LINE 12".to_string()];
        assert_eq!(extract_pairs(&lines, &marker), vec![LinePair::new(12, 1)]);
    }

    #[test]
    fn test_strip_lines_removes_only_annotations() {
        let marker = Marker::default();
        let lines = vec![
            "<?php // PRE_LINE 0".to_string(),
            String::new(),
            "}); // PRE_LINE 2".to_string(),
            "plain".to_string(),
        ];
        assert_eq!(
            strip_lines(&lines, &marker),
            vec![
                "<?php".to_string(),
                String::new(),
                "});".to_string(),
                "plain".to_string(),
            ]
        );
    }

    #[test]
    fn test_assemble_output_single_trailing_newline() {
        let lines = vec!["a".to_string(), "b".to_string()];
        assert_eq!(assemble_output(&lines), "a\nb\n");
    }

    #[test]
    fn test_assemble_output_collapses_trailing_blank_lines() {
        let lines = vec![
            "a".to_string(),
            String::new(),
            String::new(),
            String::new(),
        ];
        assert_eq!(assemble_output(&lines), "a\n");
    }

    #[test]
    fn test_assemble_output_empty_input() {
        assert_eq!(assemble_output(&[]), "\n");
    }

    #[test]
    fn test_map_source_identity_transform() {
        let marker = Marker::default();
        let identity = |source: &str| -> Result<String, TransformError> { Ok(source.to_string()) };

        let mapped = map_source("one\n\nthree", &marker, &identity).unwrap();
        assert_eq!(mapped.output, "one\n\nthree\n");
        assert_eq!(mapped.map.get(0), Some(0));
        assert_eq!(mapped.map.get(2), Some(2));
        assert_eq!(mapped.map.len(), 2);
    }

    #[test]
    fn test_round_trip_identity_without_blank_lines() {
        let marker = Marker::default();
        let identity = |source: &str| -> Result<String, TransformError> { Ok(source.to_string()) };

        let source = "fn main() {\n    print(1);\n}";
        let mapped = map_source(source, &marker, &identity).unwrap();
        assert_eq!(mapped.output, format!("{source}\n"));
    }
}
