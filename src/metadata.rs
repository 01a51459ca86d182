//! Album and image metadata loading.
//!
//! Metadata lives in sidecar files named by convention, never referenced
//! explicitly. Each lookup is an ordered probe of candidate files; the first
//! one that exists and parses wins.
//!
//! ## Album descriptors
//!
//! Probed inside the album directory, in this order:
//!
//! ```text
//! album.json   structured (JSON object)
//! album.yaml   line-oriented key: value
//! album.yml    line-oriented key: value
//! ```
//!
//! ## Image sidecars
//!
//! Same formats, same order, named after the image stem:
//!
//! ```text
//! trip/img1.jpg  →  trip/img1.json, trip/img1.yaml, trip/img1.yml
//! ```
//!
//! ## Failure policy
//!
//! Missing metadata is the normal case, not an error. A candidate that cannot
//! be read or parsed is logged at debug level and skipped. When nothing is
//! usable the all-empty [`AlbumMetadata`] is returned. No error ever leaves
//! this module.

use crate::sidecar::{self, Fields, Format};
use crate::types::AlbumMetadata;
use std::path::{Path, PathBuf};

/// Sidecar extensions in probe order, with the parser each one uses.
const SIDECAR_FORMATS: &[(&str, Format)] = &[
    ("json", Format::Json),
    ("yaml", Format::KeyValue),
    ("yml", Format::KeyValue),
];

/// Base name of the album descriptor inside each album directory.
pub const ALBUM_DESCRIPTOR: &str = "album";

/// Candidate album descriptor files for a directory, in probe order.
pub fn album_candidates(dir: &Path) -> Vec<(PathBuf, Format)> {
    SIDECAR_FORMATS
        .iter()
        .map(|&(ext, format)| (dir.join(format!("{ALBUM_DESCRIPTOR}.{ext}")), format))
        .collect()
}

/// Candidate sidecar files for an image, in probe order.
pub fn image_candidates(image_path: &Path) -> Vec<(PathBuf, Format)> {
    SIDECAR_FORMATS
        .iter()
        .map(|&(ext, format)| (image_path.with_extension(ext), format))
        .collect()
}

/// Load album metadata from the first usable descriptor in `dir`.
pub fn load_album_metadata(dir: &Path) -> AlbumMetadata {
    probe(&album_candidates(dir))
}

/// Load per-image metadata from the first usable sidecar next to the image.
pub fn load_image_metadata(image_path: &Path) -> AlbumMetadata {
    probe(&image_candidates(image_path))
}

/// Try each candidate in order. Failures are logged, never raised.
pub fn probe(candidates: &[(PathBuf, Format)]) -> AlbumMetadata {
    for (path, format) in candidates {
        if !path.is_file() {
            continue;
        }
        match sidecar::load(path, *format) {
            Ok(fields) => {
                log::debug!("Loaded metadata from {}", path.display());
                return from_fields(&fields);
            }
            Err(e) => {
                log::debug!("Skipping unusable sidecar {}: {}", path.display(), e);
            }
        }
    }
    AlbumMetadata::default()
}

/// Pick the known keys out of a parsed sidecar, trimmed, defaulting to empty.
pub fn from_fields(fields: &Fields) -> AlbumMetadata {
    let field = |key: &str| {
        fields
            .get(key)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    };
    AlbumMetadata {
        title: field("title"),
        date: field("date"),
        description: field("description"),
    }
}

/// Resolve a metadata field from multiple sources.
///
/// Takes a list of optional values in priority order and returns the first
/// non-None, non-empty value.
///
/// ```text
/// album title: resolve(&[sidecar_title, directory_name])
/// ```
pub fn resolve(sources: &[Option<&str>]) -> Option<String> {
    sources
        .iter()
        .filter_map(|opt| {
            opt.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        })
        .next()
}
