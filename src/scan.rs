//! Filesystem scanning and album aggregation.
//!
//! Walks the image root, buckets image files by their containing directory,
//! and produces the ordered [`Gallery`] the renderer consumes.
//!
//! ## Directory Structure
//!
//! Any directory holding at least one image becomes an album, at any depth.
//! A directory can hold both images and subdirectories; each is its own album.
//!
//! ```text
//! static/images/                   # Image root
//! ├── 2024-city/                   # Album
//! │   ├── album.json               # Descriptor (optional)
//! │   ├── night.png
//! │   └── dusk.webp
//! ├── 2023-lake/                   # Album
//! │   ├── album.yml
//! │   ├── img1.jpg
//! │   ├── img2.jpg
//! │   ├── img2.yml                 # Image sidecar (optional)
//! │   └── img10.jpg
//! ├── misc/                        # Album (images + a subdirectory)
//! │   ├── photo.gif
//! │   └── nested/                  # Album
//! │       └── scan.JPEG
//! └── drafts/                      # No images: not an album
//!     └── album.yml
//! ```
//!
//! ## Ordering
//!
//! - **Images**: natural order of their full path (`img2` before `img10`).
//! - **Albums**: newest date first when both albums have a date; a dated
//!   album precedes an undated one; everything else falls back to the natural
//!   order of the directory path.
//!
//! Per-album work (descriptor probe, image sidecars, sorting) runs on the
//! rayon pool. Albums are only ordered after every group has been collected,
//! so the result does not depend on completion order.
//!
//! ## Errors
//!
//! A missing or unreadable image root, and any error while walking it, aborts
//! the scan. Sidecar problems never do: see [`crate::metadata`].

use crate::metadata;
use crate::naming;
use crate::types::{Album, Gallery, ImagePath};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Image root does not exist or is not a directory: {0}")]
    RootNotFound(PathBuf),
    #[error("Failed to walk image root: {0}")]
    Walk(#[from] walkdir::Error),
}

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Scan `root` into an ordered gallery.
pub fn scan(root: &Path) -> Result<Gallery, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }
    log::info!("Scanning {}", root.display());

    let images = discover_images(root)?;
    let groups = group_by_directory(images);
    log::debug!("Found {} directories with images", groups.len());

    let mut albums: Vec<Album> = groups
        .into_par_iter()
        .map(|(dir, paths)| build_album(dir, paths))
        .collect();
    albums.sort_by(compare_albums);

    Ok(Gallery { albums })
}

/// Recursively collect every image file beneath `root`.
fn discover_images(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut images = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if is_image(path) {
            log::trace!("Discovered image: {}", path.display());
            images.push(path.to_path_buf());
        } else {
            log::trace!("Skipping non-image file: {}", path.display());
        }
    }
    Ok(images)
}

/// Whether the extension (case-insensitive) is a supported image type.
pub fn is_image(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

fn group_by_directory(images: Vec<PathBuf>) -> BTreeMap<PathBuf, Vec<PathBuf>> {
    let mut groups: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();
    for image in images {
        let dir = image
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        groups.entry(dir).or_default().push(image);
    }
    groups
}

fn build_album(directory: PathBuf, mut paths: Vec<PathBuf>) -> Album {
    let metadata = metadata::load_album_metadata(&directory);
    let dir_name = naming::last_segment(&directory);
    if metadata.is_empty() {
        log::debug!("No album descriptor in {}", directory.display());
    }
    let title = metadata::resolve(&[Some(metadata.title.as_str()), Some(dir_name.as_str())])
        .unwrap_or_default();

    paths.sort_by(|a, b| naming::natural_path_cmp(a, b));
    let images = paths
        .into_iter()
        .map(|path| ImagePath {
            display_name: naming::display_name(&path),
            metadata: metadata::load_image_metadata(&path),
            path,
        })
        .collect::<Vec<_>>();

    log::debug!("Album '{}': {} images", title, images.len());
    Album {
        directory,
        title,
        metadata,
        images,
    }
}

/// Album display order: dated albums newest first, then natural path order.
pub fn compare_albums(a: &Album, b: &Album) -> Ordering {
    let (date_a, date_b) = (&a.metadata.date, &b.metadata.date);
    let by_date = match (date_a.is_empty(), date_b.is_empty()) {
        (false, false) => date_b.cmp(date_a),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
    };
    by_date.then_with(|| naming::natural_path_cmp(&a.directory, &b.directory))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use crate::types::AlbumMetadata;
    use std::fs;
    use tempfile::TempDir;

    fn album(dir: &str, date: &str) -> Album {
        Album {
            directory: PathBuf::from(dir),
            title: dir.to_string(),
            metadata: AlbumMetadata {
                date: date.to_string(),
                ..Default::default()
            },
            images: vec![],
        }
    }

    // =========================================================================
    // Fixture scans
    // =========================================================================

    #[test]
    fn scan_finds_all_albums_in_order() {
        let tmp = setup_fixtures();
        let gallery = scan(tmp.path()).unwrap();

        assert_eq!(
            album_titles(&gallery),
            vec!["City Lights", "Lake Weekend", "misc", "nested"]
        );
    }

    #[test]
    fn directory_without_images_is_not_an_album() {
        let tmp = setup_fixtures();
        let gallery = scan(tmp.path()).unwrap();

        // drafts/ has a valid descriptor but no images
        assert!(!album_titles(&gallery).contains(&"Drafts"));
        assert!(!album_titles(&gallery).contains(&"drafts"));
    }

    #[test]
    fn images_sorted_numerically() {
        let tmp = setup_fixtures();
        let gallery = scan(tmp.path()).unwrap();

        let lake = find_album(&gallery, "Lake Weekend");
        assert_eq!(image_names(lake), vec!["img1", "img2", "img10"]);
    }

    #[test]
    fn descriptor_fields_attached() {
        let tmp = setup_fixtures();
        let gallery = scan(tmp.path()).unwrap();

        let lake = find_album(&gallery, "Lake Weekend");
        assert_eq!(lake.metadata.date, "2023-05-05");
        assert_eq!(lake.metadata.description, "Two days by the water, cabin #4");

        let city = find_album(&gallery, "City Lights");
        assert_eq!(city.metadata.description, "Night walks & <neon>");
    }

    #[test]
    fn image_sidecar_attached() {
        let tmp = setup_fixtures();
        let gallery = scan(tmp.path()).unwrap();

        let lake = find_album(&gallery, "Lake Weekend");
        let pier = &lake.images[1];
        assert_eq!(pier.display_name, "img2");
        assert_eq!(pier.metadata.title, "Pier");
        assert_eq!(pier.alt_text(), "Pier");
        assert!(lake.images[0].metadata.is_empty());
    }

    #[test]
    fn title_falls_back_to_directory_name() {
        let tmp = setup_fixtures();
        let gallery = scan(tmp.path()).unwrap();

        let misc = find_album(&gallery, "misc");
        assert!(misc.metadata.is_empty());
        assert_eq!(image_names(misc), vec!["photo"]);
    }

    #[test]
    fn extensions_are_case_insensitive() {
        let tmp = setup_fixtures();
        let gallery = scan(tmp.path()).unwrap();

        let nested = find_album(&gallery, "nested");
        assert_eq!(image_names(nested), vec!["scan"]);
    }

    #[test]
    fn counts_match_fixture() {
        let tmp = setup_fixtures();
        let gallery = scan(tmp.path()).unwrap();
        assert_eq!(gallery.album_count(), 4);
        assert_eq!(gallery.image_count(), 7);
    }

    #[test]
    fn rescanning_is_deterministic() {
        let tmp = setup_fixtures();
        let first = scan(tmp.path()).unwrap();
        let second = scan(tmp.path()).unwrap();

        let paths = |g: &Gallery| -> Vec<PathBuf> {
            g.albums
                .iter()
                .flat_map(|a| a.images.iter().map(|i| i.path.clone()))
                .collect()
        };
        assert_eq!(paths(&first), paths(&second));
        assert_eq!(album_titles(&first), album_titles(&second));
    }

    // =========================================================================
    // Edge cases
    // =========================================================================

    #[test]
    fn missing_root_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = scan(&tmp.path().join("does-not-exist"));
        assert!(matches!(result, Err(ScanError::RootNotFound(_))));
    }

    #[test]
    fn file_as_root_is_error() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("img.jpg");
        fs::write(&file, "fake image").unwrap();
        assert!(matches!(scan(&file), Err(ScanError::RootNotFound(_))));
    }

    #[test]
    fn empty_root_yields_empty_gallery() {
        let tmp = TempDir::new().unwrap();
        let gallery = scan(tmp.path()).unwrap();
        assert!(gallery.albums.is_empty());
    }

    #[test]
    fn images_directly_in_root_form_an_album() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("photos");
        touch_image(&root, "b.jpg");
        touch_image(&root, "a.jpg");

        let gallery = scan(&root).unwrap();
        assert_eq!(album_titles(&gallery), vec!["photos"]);
        assert_eq!(image_names(&gallery.albums[0]), vec!["a", "b"]);
    }

    #[test]
    fn unsupported_extensions_are_ignored() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("album");
        touch_image(&dir, "keep.webp");
        touch_image(&dir, "raw.cr2");
        touch_image(&dir, "clip.mp4");
        touch_image(&dir, "noext");

        let gallery = scan(tmp.path()).unwrap();
        assert_eq!(image_names(&gallery.albums[0]), vec!["keep"]);
    }

    #[test]
    fn bare_stem_image_sorts_before_numbered_siblings() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("trip");
        touch_image(&dir, "img10.png");
        touch_image(&dir, "img.png");
        touch_image(&dir, "img1.png");

        let gallery = scan(tmp.path()).unwrap();
        assert_eq!(image_names(&gallery.albums[0]), vec!["img", "img1", "img10"]);
    }

    #[test]
    fn undated_albums_sort_by_natural_path() {
        let tmp = TempDir::new().unwrap();
        touch_image(&tmp.path().join("trip10"), "a.jpg");
        touch_image(&tmp.path().join("trip2"), "a.jpg");
        touch_image(&tmp.path().join("trip1"), "a.jpg");

        let gallery = scan(tmp.path()).unwrap();
        assert_eq!(album_titles(&gallery), vec!["trip1", "trip2", "trip10"]);
    }

    // =========================================================================
    // compare_albums()
    // =========================================================================

    #[test]
    fn newer_date_sorts_first() {
        let newer = album("b", "2024-01-01");
        let older = album("a", "2023-05-05");
        assert_eq!(compare_albums(&newer, &older), Ordering::Less);
    }

    #[test]
    fn dated_sorts_before_undated() {
        let dated = album("z", "2001-01-01");
        let undated = album("a", "");
        assert_eq!(compare_albums(&dated, &undated), Ordering::Less);
        assert_eq!(compare_albums(&undated, &dated), Ordering::Greater);
    }

    #[test]
    fn equal_dates_fall_back_to_path() {
        let a = album("img/trip2", "2024-01-01");
        let b = album("img/trip10", "2024-01-01");
        assert_eq!(compare_albums(&a, &b), Ordering::Less);
    }

    #[test]
    fn undated_fall_back_to_natural_path() {
        let a = album("img/trip2", "");
        let b = album("img/trip10", "");
        assert_eq!(compare_albums(&a, &b), Ordering::Less);
    }

    #[test]
    fn is_image_accepts_supported_extensions() {
        for name in ["a.jpg", "a.JPEG", "a.Png", "a.webp", "a.GIF"] {
            assert!(is_image(Path::new(name)), "{name} should be an image");
        }
        for name in ["a.txt", "a.yml", "a", "a.tiff"] {
            assert!(!is_image(Path::new(name)), "{name} should not be an image");
        }
    }
}
