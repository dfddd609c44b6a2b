//! Scans the asset directory for physical image files.

use crate::{IMAGE_EXTENSIONS, IMAGE_URL_PREFIX};
use anyhow::{Result, bail};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Lists the image files directly inside `dir`, normalized to their served
/// URL form `/images/products/<filename>`.
///
/// Only regular files whose extension is on the allow-list (matched
/// case-insensitively) are kept; directories and other file types are
/// skipped silently. Subdirectories are not entered. A missing directory is
/// returned as an error for the caller to report as zero physical images.
pub fn scan_physical_images(dir: &Path) -> Result<BTreeSet<String>> {
    if !dir.is_dir() {
        bail!("Image directory {} doesn't exist!", dir.display());
    }

    let mut images = BTreeSet::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if has_image_extension(name) {
            images.insert(format!("{IMAGE_URL_PREFIX}/{name}"));
        }
    }

    debug!(dir = %dir.display(), count = images.len(), "scanned asset directory");
    Ok(images)
}

/// Checks whether `name` ends in one of the allowed image extensions.
fn has_image_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}
