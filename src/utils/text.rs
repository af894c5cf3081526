// ABOUTME: Boundary normalization for multi-line free text input
// ABOUTME: Splits instruction/tip text into trimmed, non-empty line sequences
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text normalization for instruction and tip input
//!
//! Admin clients submit instructions and tips either as an array of strings
//! or as a single multi-line text blob. Both forms are normalized at the
//! request boundary: split on newlines, trimmed, empty lines discarded.
//! Storage only ever sees the normalized sequence.

use serde::{Deserialize, Deserializer, Serialize};

/// Split text on newlines, trim each line, and discard empty lines
#[must_use]
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(std::borrow::ToOwned::to_owned)
        .collect()
}

/// An ordered sequence of lines, normalized on deserialization
///
/// Accepts either a JSON array of strings or a single multi-line string.
/// Array entries containing embedded newlines are split as well, so the
/// stored sequence never contains blank or multi-line entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LineList(pub Vec<String>);

impl LineList {
    /// Consume the wrapper and return the normalized lines
    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for LineList {
    fn from(lines: Vec<String>) -> Self {
        Self(lines.iter().flat_map(|s| normalize_lines(s)).collect())
    }
}

impl<'de> Deserialize<'de> for LineList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Lines(Vec<String>),
            Text(String),
        }

        let lines = match Raw::deserialize(deserializer)? {
            Raw::Lines(lines) => lines.iter().flat_map(|s| normalize_lines(s)).collect(),
            Raw::Text(text) => normalize_lines(&text),
        };

        Ok(Self(lines))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_normalize_drops_blank_lines() {
        assert_eq!(
            normalize_lines("Step one\n\nStep two\n"),
            vec!["Step one".to_owned(), "Step two".to_owned()]
        );
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(
            normalize_lines("  keep elbows in  \n\t\n slow tempo "),
            vec!["keep elbows in".to_owned(), "slow tempo".to_owned()]
        );
    }

    #[test]
    fn test_normalize_empty_input() {
        assert!(normalize_lines("").is_empty());
        assert!(normalize_lines("\n\n  \n").is_empty());
    }

    #[test]
    fn test_line_list_from_json_string() {
        let list: LineList = serde_json::from_str("\"Step one\\n\\nStep two\\n\"").unwrap();
        assert_eq!(list.0, vec!["Step one", "Step two"]);
    }

    #[test]
    fn test_line_list_from_json_array() {
        let list: LineList = serde_json::from_str("[\"Stand tall\", \"Grip the bar\"]").unwrap();
        assert_eq!(list.0, vec!["Stand tall", "Grip the bar"]);
    }

    #[test]
    fn test_line_list_splits_embedded_newlines() {
        let list: LineList = serde_json::from_str("[\"a\\nb\", \" \", \"c\"]").unwrap();
        assert_eq!(list.0, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_line_list_rejects_non_string_entries() {
        assert!(serde_json::from_str::<LineList>("[1, 2]").is_err());
        assert!(serde_json::from_str::<LineList>("42").is_err());
    }
}
