//! Report formatting and printing.
//!
//! The report is the tool's entire product, so everything here goes to
//! stdout. Section shape is fixed: banner, physical files, one section per
//! source, consistency check, summary. Styling comes from `colored`, which
//! drops the escape codes automatically when stdout is not a terminal, so
//! captured output stays byte-stable across identical runs.

use crate::SourceSpec;
use crate::reconcile::Reconciliation;
use colored::Colorize;
use std::collections::BTreeSet;

/// Horizontal rule under the section banners.
const RULE: &str = "==================================================";

/// What extraction produced for one source file: the references found, or
/// the diagnostic explaining why none could be read.
#[derive(Debug, Default)]
pub struct SourceReport {
    /// Extracted image paths in order of appearance, duplicates included.
    pub references: Vec<String>,
    /// Read failure diagnostic; when set, `references` is empty.
    pub error: Option<String>,
}

/// Prints the report banner.
pub fn print_banner() {
    println!("\u{1F50D} COMPREHENSIVE IMAGE VERIFICATION");
    println!("{RULE}");
}

/// Prints the physical image section: count plus one ✅ line per file,
/// in sorted order.
pub fn print_physical(physical: &BTreeSet<String>) {
    println!("\u{1F4C1} Found {} physical image files:", physical.len());
    for img in physical {
        println!("   \u{2705} {img}");
    }
}

/// Prints the diagnostic for a failed asset directory scan.
pub fn print_physical_error(message: &str) {
    println!("{}", format!("\u{274C} {message}").red().bold());
}

/// Prints the heading of the extraction half of the report.
pub fn print_extraction_header() {
    println!("\n\u{1F50D} EXTRACTING IMAGE REFERENCES FROM CODE:");
    println!("{RULE}");
}

/// Prints one source file's section: its read-failure diagnostic if any,
/// the raw reference count, and one annotated line per extracted
/// occurrence. The ✅/❌ annotation is an independent membership test per
/// line, so duplicate references are each re-annotated.
pub fn print_source(spec: &SourceSpec, scan: &SourceReport, physical: &BTreeSet<String>) {
    if let Some(err) = &scan.error {
        println!("{}", err.red());
    }
    println!(
        "\n{} {} images ({}):",
        spec.emoji,
        spec.label,
        scan.references.len()
    );
    for img in &scan.references {
        let status = if physical.contains(img) {
            "\u{2705}"
        } else {
            "\u{274C}"
        };
        println!("   {status} {img}");
    }
}

/// Prints the consistency check: the missing and unused sets in sorted
/// order, with a positive confirmation line when a set is empty.
pub fn print_consistency(recon: &Reconciliation) {
    println!("\n\u{1F50D} CONSISTENCY CHECK:");
    println!("{RULE}");

    if recon.missing.is_empty() {
        println!("{}", "\u{2705} All referenced images exist physically!".green());
    } else {
        println!(
            "{}",
            format!("\u{274C} Missing image files ({}):", recon.missing.len())
                .red()
                .bold()
        );
        for img in &recon.missing {
            println!("   \u{1F4C1} {img}");
        }
    }

    if recon.unused.is_empty() {
        println!("\n{}", "\u{2705} No unused image files!".green());
    } else {
        println!(
            "\n{}",
            format!("\u{26A0}\u{FE0F}  Unused image files ({}):", recon.unused.len())
                .yellow()
                .bold()
        );
        for img in &recon.unused {
            println!("   \u{1F4C1} {img}");
        }
    }
}

/// Prints the final numeric summary. Per-source counts are the raw
/// extraction counts, not deduplicated.
pub fn print_summary(
    physical: &BTreeSet<String>,
    sources: &[(&SourceSpec, &SourceReport)],
    recon: &Reconciliation,
) {
    println!("\n\u{1F4CA} SUMMARY:");
    println!("   Physical images: {}", physical.len());
    for (spec, scan) in sources {
        println!("   {} images: {}", spec.summary_label, scan.references.len());
    }
    println!("   Missing images: {}", recon.missing.len());
    println!("   Unused images: {}", recon.unused.len());
}
