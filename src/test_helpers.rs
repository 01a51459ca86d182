//! Shared test utilities for the album-index test suite.
//!
//! Provides fixture setup and lookup helpers that work with the scanned
//! [`Gallery`] model.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let gallery = scan(tmp.path()).unwrap();
//!
//! let lake = find_album(&gallery, "Lake Weekend");
//! assert_eq!(image_names(lake), vec!["img1", "img2", "img10"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::{Album, Gallery};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Fixture layout:
///
/// ```text
/// 2023-lake/   album.yml (dated 2023-05-05), img1/img2/img10.jpg, img2.yml
/// 2024-city/   album.json (dated 2024-01-01), night.png, dusk.webp
/// misc/        photo.gif, notes.txt (no descriptor)
/// misc/nested/ scan.JPEG
/// drafts/      album.yml only, no images
/// ```
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write a placeholder image (scan only checks extensions).
pub fn touch_image(dir: &Path, name: &str) {
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(dir.join(name), "fake image").unwrap();
}

// =========================================================================
// Gallery lookups — panics with a clear message on miss
// =========================================================================

/// Find an album by resolved title. Panics if not found.
pub fn find_album<'a>(gallery: &'a Gallery, title: &str) -> &'a Album {
    gallery
        .albums
        .iter()
        .find(|a| a.title == title)
        .unwrap_or_else(|| {
            let titles = album_titles(gallery);
            panic!("album '{title}' not found. Available: {titles:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All album titles in gallery order.
pub fn album_titles(gallery: &Gallery) -> Vec<&str> {
    gallery.albums.iter().map(|a| a.title.as_str()).collect()
}

/// All image display names in album order.
pub fn image_names(album: &Album) -> Vec<&str> {
    album
        .images
        .iter()
        .map(|i| i.display_name.as_str())
        .collect()
}
