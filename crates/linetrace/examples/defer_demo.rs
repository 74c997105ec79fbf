//! Demo: map a small script through a canned transform, then relocate a
//! runtime error reported against the generated file.
//!
//! Run with `cargo run --example defer_demo`.

use camino::Utf8PathBuf;
use line_map::Marker;
use linetrace::{locate, map, ScriptError, TransformError};
use std::fs;

/// Expands `defer <stmt>;` into a deferred-callback construct, keeping the
/// line annotation on the construct's closing line.
fn defer_transform(source: &str) -> Result<String, TransformError> {
    let mut out = Vec::new();
    for line in source.split('\n') {
        match line.trim_start().strip_prefix("defer ") {
            Some(rest) => {
                let annotation_at = rest
                    .rfind(" // ")
                    .ok_or_else(|| TransformError::msg("defer line lost its annotation"))?;
                let (stmt, annotation) = rest.split_at(annotation_at);
                out.push("new Deferred(function() use (&$handle) {".to_string());
                out.push(format!("    {stmt}"));
                out.push(format!("}});{annotation}"));
            }
            None => out.push(line.to_string()),
        }
    }
    Ok(out.join("\n"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
        .map_err(|path| format!("temp dir is not UTF-8: {}", path.display()))?;

    let input = root.join("input.pre");
    let output = root.join("output.php");

    fs::write(
        &input,
        "<?php\n\n$handle = fopen($file, 'r');\n\ndefer fclose($handle);\n\nwhile (!feof($handle)) {\n    print fgets($handle);\n}\n",
    )?;

    let built = map(&input, &output, &Marker::default(), &defer_transform)?;

    println!("generated output:\n{}", fs::read_to_string(&output)?);
    println!("line map: {}", built.to_json()?);

    // Pretend the runtime faulted inside the generated construct.
    let error = ScriptError::new(&output, 6, "fclose(): supplied resource is not valid");
    println!("reported:  {error}");

    let located = locate(&input, error);
    println!("relocated: {located}");

    Ok(())
}
