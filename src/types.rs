//! Gallery data model shared by the scan, generate, and output modules.
//!
//! Everything here is built once by [`crate::scan::scan`] and then only read.
//! The process is a single pass, so none of these types are mutated after the
//! scan hands them over.

use std::path::{Path, PathBuf};

/// Title, date, and description for an album or a single image.
///
/// Fields are always present: a missing sidecar file or a missing key yields
/// an empty string, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumMetadata {
    pub title: String,
    /// Free-form, but expected to be ISO-like (`YYYY-MM-DD`) so that plain
    /// string comparison sorts chronologically.
    pub date: String,
    pub description: String,
}

impl AlbumMetadata {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.date.is_empty() && self.description.is_empty()
    }
}

/// One discovered image file.
#[derive(Debug, Clone)]
pub struct ImagePath {
    /// Path as discovered under the image root (root-joined, not canonicalized).
    pub path: PathBuf,
    /// Filename without its extension (`img10.png` → `img10`).
    pub display_name: String,
    /// Per-image sidecar metadata; all-empty when no sidecar exists.
    pub metadata: AlbumMetadata,
}

impl ImagePath {
    /// The directory the image lives in.
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Alt text: the sidecar title when present, the display name otherwise.
    pub fn alt_text(&self) -> &str {
        if self.metadata.title.is_empty() {
            &self.display_name
        } else {
            &self.metadata.title
        }
    }
}

/// A directory holding at least one image.
#[derive(Debug, Clone)]
pub struct Album {
    /// The containing directory, as discovered under the image root.
    pub directory: PathBuf,
    /// Resolved title: the sidecar title, or the final directory segment.
    pub title: String,
    pub metadata: AlbumMetadata,
    /// Images in numeric-aware path order.
    pub images: Vec<ImagePath>,
}

impl Album {
    /// The directory relative to `root`, with forward slashes. Empty for the
    /// root itself.
    pub fn relative_dir(&self, root: &Path) -> String {
        let rel = self.directory.strip_prefix(root).unwrap_or(&self.directory);
        rel.components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// The whole page: albums in display order.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    pub albums: Vec<Album>,
}

impl Gallery {
    pub fn image_count(&self) -> usize {
        self.albums.iter().map(|a| a.images.len()).sum()
    }

    pub fn album_count(&self) -> usize {
        self.albums.len()
    }
}
