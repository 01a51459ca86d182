//! CLI output formatting.
//!
//! Output is **information-first**: each album leads with its positional index
//! and title, with the source directory and metadata as indented context
//! lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Albums
//! 001 City Lights (2 photos)
//!     Source: 2024-city/
//!     Date: 2024-01-01
//!     Night walks & <neon>
//!     001 dusk
//!     002 night
//! 002 misc (1 photos)
//!     Source: misc/
//!     001 photo
//!
//! Processed 3 images in 2 albums
//! ```
//!
//! ## Build
//!
//! Only the summary line:
//!
//! ```text
//! Processed 7 images in 4 albums
//! ```
//!
//! Each output has a `format_*` function (returns lines) for testability and a
//! `print_*` wrapper that writes to stdout.

use crate::types::{Gallery, ImagePath};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Album header: positional index, title, photo count.
fn entity_header(index: usize, title: &str, count: usize) -> String {
    format!("{} {} ({} photos)", format_index(index), title, count)
}

/// Image line: display name, plus the sidecar title when it differs.
fn image_line(index: usize, image: &ImagePath) -> String {
    let title = &image.metadata.title;
    if title.is_empty() || *title == image.display_name {
        format!("{} {}", format_index(index), image.display_name)
    } else {
        format!("{} {} ({})", format_index(index), image.display_name, title)
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

/// One-line run summary.
pub fn summary_line(gallery: &Gallery) -> String {
    format!(
        "Processed {} images in {} albums",
        gallery.image_count(),
        gallery.album_count()
    )
}

/// Format the album listing shown by `check`.
pub fn format_scan_output(gallery: &Gallery, root: &Path) -> Vec<String> {
    let mut lines = vec!["Albums".to_string()];

    for (i, album) in gallery.albums.iter().enumerate() {
        lines.push(entity_header(i + 1, &album.title, album.images.len()));

        let rel = album.relative_dir(root);
        let source = if rel.is_empty() {
            "./".to_string()
        } else {
            format!("{}/", rel)
        };
        lines.push(format!("{}Source: {}", indent(1), source));

        if !album.metadata.date.is_empty() {
            lines.push(format!("{}Date: {}", indent(1), album.metadata.date));
        }
        if !album.metadata.description.is_empty() {
            lines.push(format!(
                "{}{}",
                indent(1),
                truncate_desc(&album.metadata.description, 60)
            ));
        }

        for (j, image) in album.images.iter().enumerate() {
            lines.push(format!("{}{}", indent(1), image_line(j + 1, image)));
        }
    }

    lines.push(String::new());
    lines.push(summary_line(gallery));
    lines
}

/// Print the album listing to stdout.
pub fn print_scan_output(gallery: &Gallery, root: &Path) {
    for line in format_scan_output(gallery, root) {
        println!("{}", line);
    }
}
