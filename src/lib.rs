#![warn(missing_docs)]
#![allow(clippy::indexing_slicing)] // Regex capture groups are fixed by the patterns

//! # Imgverify - Product Image Consistency Checker
//!
//! Imgverify is a developer-side CLI that cross-checks the image paths
//! referenced by a web application's source files against the image files
//! actually present in the asset directory, and reports what is missing and
//! what is unused.
//!
//! The run is a single linear pass with no persistent state:
//!
//! 1. [`scanner`] lists the physical image files in the asset directory.
//! 2. [`extract`] pulls referenced image paths out of three fixed source
//!    files via pattern matching.
//! 3. [`reconcile`] computes the missing and unused sets.
//! 4. [`report`] prints the annotated sections and the final summary.
//!
//! The tool is advisory only: every error is caught and printed as part of
//! the report, nothing on disk is ever modified, and the exit status is
//! always 0 regardless of findings.

/// Reference extraction from source files via pattern matching.
pub mod extract;

/// Set reconciliation between referenced and physical image paths.
pub mod reconcile;

/// Report formatting and printing.
pub mod report;

/// Asset directory scanning.
pub mod scanner;

use extract::PathPattern;

/// Current version of the imgverify binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Asset directory holding the product images, relative to the working
/// directory.
pub const IMAGE_DIR: &str = "public/images/products";

/// URL prefix under which the asset directory is served. Physical filenames
/// are normalized to `<IMAGE_URL_PREFIX>/<filename>` so they compare equal
/// to the paths referenced in source code.
pub const IMAGE_URL_PREFIX: &str = "/images/products";

/// Allowed image file extensions (matched case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// One source file to extract image references from.
pub struct SourceSpec {
    /// Section heading used when reporting this source's references.
    pub label: &'static str,
    /// Shorter name used in the summary block.
    pub summary_label: &'static str,
    /// Emoji tag prefixed to this source's section heading.
    pub emoji: &'static str,
    /// Path of the source file, relative to the working directory.
    pub path: &'static str,
    /// How image paths are declared inside this file.
    pub pattern: PathPattern,
}

/// The three source files checked on every run, in report order.
pub const SOURCES: [SourceSpec; 3] = [
    SourceSpec {
        label: "SearchContext",
        summary_label: "SearchContext",
        emoji: "\u{1F4F1}",
        path: "src/contexts/SearchContext.tsx",
        pattern: PathPattern::MappingField,
    },
    SourceSpec {
        label: "Individual product page",
        summary_label: "Individual page",
        emoji: "\u{1F50D}",
        path: "src/app/products/[id]/page.tsx",
        pattern: PathPattern::ArrayField,
    },
    SourceSpec {
        label: "Products page",
        summary_label: "Products page",
        emoji: "\u{1F4CB}",
        path: "src/app/products/page.tsx",
        pattern: PathPattern::MappingField,
    },
];
