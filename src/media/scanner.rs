// SPDX-License-Identifier: MPL-2.0
//! Directory scanner for building a static slide set from a folder.
//!
//! Scans a directory for supported image formats and sorts them by file name
//! so the slide order is stable across runs.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Image file extensions the decoder handles.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
];

/// Returns true if the path has a supported image extension (case-insensitive).
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Lists the supported images directly inside `directory`, sorted by file name.
///
/// Subdirectories are not descended into.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn scan_directory(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn create_test_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"fake image data").expect("failed to write test file");
        path
    }

    #[test]
    fn scan_directory_finds_only_images() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "a.jpg");
        create_test_file(temp_dir.path(), "b.png");
        create_test_file(temp_dir.path(), "c.gif");
        create_test_file(temp_dir.path(), "notes.txt");
        fs::create_dir(temp_dir.path().join("nested.png")).expect("failed to create dir");

        let images = scan_directory(temp_dir.path()).expect("failed to scan directory");
        assert_eq!(images.len(), 3);
    }

    #[test]
    fn scan_directory_sorts_by_file_name() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img_c = create_test_file(temp_dir.path(), "c.jpg");
        let img_a = create_test_file(temp_dir.path(), "a.jpg");
        let img_b = create_test_file(temp_dir.path(), "b.jpg");

        let images = scan_directory(temp_dir.path()).expect("failed to scan directory");
        assert_eq!(images, vec![img_a, img_b, img_c]);
    }

    #[test]
    fn scan_missing_directory_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        assert!(scan_directory(&temp_dir.path().join("missing")).is_err());
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(is_supported_image(Path::new("photo.JPG")));
        assert!(is_supported_image(Path::new("photo.WebP")));
        assert!(!is_supported_image(Path::new("clip.mp4")));
        assert!(!is_supported_image(Path::new("README")));
    }
}
