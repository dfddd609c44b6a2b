//! Extracts image path references from source files.
//!
//! Each source file declares image paths inside string literals following
//! one of two conventions: a mapping-style `image: "<path>"` field, or an
//! `images: [...]` array literal whose elements are quoted paths. Both
//! conventions tolerate single or double quote delimiters. Extraction is
//! order-preserving and keeps duplicates; deduplication happens later when
//! the reference sets are merged.

use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

/// Matches `image: '<path>'` or `image: "<path>"`, capturing the path.
/// Deliberately anchored on nothing but the literal `image:` text, so any
/// syntactically matching string literal in the file is extracted.
static MAPPING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"image: ['"]([^'"]+)['"]"#).expect("mapping pattern is valid")
});

/// Matches an `images: [...]` array literal, capturing the bracket body.
/// Bounded by the closing bracket so a match never crosses declarations.
static ARRAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"images: \[([^\]]*)\]").expect("array pattern is valid")
});

/// Matches one quoted element inside an array body, capturing its content.
static QUOTED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"['"]([^'"]+)['"]"#).expect("quoted-element pattern is valid")
});

/// How image paths are declared inside a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPattern {
    /// A mapping-style `image: "<path>"` field.
    MappingField,
    /// Quoted elements of an `images: ["<path>", ...]` array literal.
    ArrayField,
}

impl PathPattern {
    /// Returns every path captured by this pattern in `text`, in order of
    /// appearance, duplicates included.
    pub fn captures(self, text: &str) -> Vec<String> {
        match self {
            Self::MappingField => MAPPING_RE
                .captures_iter(text)
                .map(|caps| caps[1].to_string())
                .collect(),
            Self::ArrayField => {
                let mut paths = Vec::new();
                for array in ARRAY_RE.captures_iter(text) {
                    for element in QUOTED_RE.captures_iter(&array[1]) {
                        paths.push(element[1].to_string());
                    }
                }
                paths
            }
        }
    }
}

/// Reads `path` as UTF-8 text and extracts every image path declared with
/// `pattern`.
///
/// Zero matches is a normal outcome (empty vector). Any read failure
/// (missing file, permission denial, invalid UTF-8) is returned as an error
/// for the caller to report; extraction from other files is unaffected.
pub fn extract_references(path: &Path, pattern: PathPattern) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Error reading {}", path.display()))?;
    let paths = pattern.captures(&text);
    debug!(path = %path.display(), count = paths.len(), "extracted image references");
    Ok(paths)
}
