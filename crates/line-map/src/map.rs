//! The persisted output-line → original-line correspondence map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Suffix appended to an output path to name its map artifact.
pub const MAP_SUFFIX: &str = ".map";

/// A single correspondence between an original line and an output line.
///
/// Both indices are 0-based. Pairs are produced in output-line order by
/// scanning the transformed text top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePair {
    /// 0-based line index in the original input.
    pub original: u32,
    /// 0-based line index in the transformed output.
    pub output: u32,
}

impl LinePair {
    /// Creates a new correspondence pair.
    #[inline]
    pub fn new(original: u32, output: u32) -> Self {
        Self { original, output }
    }
}

/// A correspondence map from output line numbers to original line numbers.
///
/// Built once per transform run from the annotations that survive the
/// transform, persisted as a flat JSON object (string keys, integer values),
/// and read back later during error relocation. Never mutated after it is
/// written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineMap {
    entries: BTreeMap<u32, u32>,
}

impl LineMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from extracted correspondence pairs.
    ///
    /// Each pair inserts `output → original`. If the same output line occurs
    /// more than once, the later pair wins; overwrite is the explicit policy,
    /// not an accident of insertion order.
    pub fn from_pairs(pairs: impl IntoIterator<Item = LinePair>) -> Self {
        let mut entries = BTreeMap::new();
        for pair in pairs {
            entries.insert(pair.output, pair.original);
        }
        Self { entries }
    }

    /// Returns the number of entries in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the original line recorded for an exact output line, if any.
    pub fn get(&self, output_line: u32) -> Option<u32> {
        self.entries.get(&output_line).copied()
    }

    /// Iterates over `(output, original)` entries in ascending output order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.entries.iter().map(|(&output, &original)| (output, original))
    }

    /// Resolves a 1-based reported output line to an original line.
    ///
    /// Nearest-floor search: the first key at or after the 0-based
    /// equivalent of the reported line wins. A fault on an output line
    /// without its own annotation (inside a multi-line construct, say) is
    /// attributed to the nearest subsequent annotated line, since transforms
    /// annotate a construct's closing line. Returns `None` when every key
    /// lies before the reported line.
    pub fn original_for_reported_line(&self, reported_line: u32) -> Option<u32> {
        let target = reported_line.saturating_sub(1);
        self.entries
            .range(target..)
            .next()
            .map(|(_, &original)| original)
    }

    /// Serializes the map to its persisted JSON form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a map from its persisted JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl FromIterator<LinePair> for LineMap {
    fn from_iter<I: IntoIterator<Item = LinePair>>(pairs: I) -> Self {
        Self::from_pairs(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_map() -> LineMap {
        // Output line 0 came from original 0, output line 4 from original 2.
        LineMap::from_pairs([LinePair::new(0, 0), LinePair::new(2, 4)])
    }

    #[test]
    fn test_empty_map() {
        let map = LineMap::new();
        assert!(map.is_empty());
        assert_eq!(map.original_for_reported_line(1), None);
    }

    #[test]
    fn test_from_pairs_keys_by_output_line() {
        let map = sample_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(0), Some(0));
        assert_eq!(map.get(4), Some(2));
        assert_eq!(map.get(1), None);
    }

    #[test]
    fn test_duplicate_output_line_last_write_wins() {
        let map = LineMap::from_pairs([LinePair::new(3, 7), LinePair::new(9, 7)]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(7), Some(9));
    }

    #[test]
    fn test_floor_search_exact_key() {
        let map = sample_map();
        // Reported line 1 (1-based) targets output line 0.
        assert_eq!(map.original_for_reported_line(1), Some(0));
        // Reported line 5 targets output line 4.
        assert_eq!(map.original_for_reported_line(5), Some(2));
    }

    #[test]
    fn test_floor_search_takes_next_key_up() {
        let map = sample_map();
        // Output lines 1..=3 carry no annotation; the fault is attributed to
        // the nearest subsequent annotated line.
        assert_eq!(map.original_for_reported_line(2), Some(2));
        assert_eq!(map.original_for_reported_line(4), Some(2));
    }

    #[test]
    fn test_floor_search_beyond_all_keys() {
        let map = sample_map();
        assert_eq!(map.original_for_reported_line(100), None);
    }

    #[test]
    fn test_floor_search_reported_zero_behaves_like_one() {
        let map = sample_map();
        assert_eq!(map.original_for_reported_line(0), Some(0));
    }

    #[test]
    fn test_json_round_trip() {
        let map = sample_map();
        let json = map.to_json().unwrap();
        // Flat object, decimal-string keys, integer values.
        assert_eq!(json, r#"{"0":0,"4":2}"#);
        assert_eq!(LineMap::from_json(&json).unwrap(), map);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(LineMap::from_json("not json").is_err());
        assert!(LineMap::from_json(r#"{"0":"zero"}"#).is_err());
    }

    #[test]
    fn test_collect_from_iterator() {
        let map: LineMap = [LinePair::new(0, 0), LinePair::new(6, 8)]
            .into_iter()
            .collect();
        assert_eq!(map.get(8), Some(6));
    }
}
