//! Filename conventions: display names and numeric-aware ordering.
//!
//! ## Natural Ordering
//!
//! Album directories and image paths are compared the way a person reads
//! them, not byte by byte. Runs of ASCII digits compare by numeric value, so
//! `img2` sorts before `img10`. Other characters compare one at a time,
//! case-insensitively, with the exact text as a final tie-break so the order
//! is total:
//!
//! ```text
//! img.png, img1.png, img2.png, img10.png   (not img1, img10, img2, img)
//! 2023-05, 2023-12, 2024-01
//! Beach, beach, Cabin                 (case folded, then exact)
//! ```
//!
//! Leading zeros do not change a number's value: `img007` and `img7` are equal
//! numerically and fall back to the shorter run first.

use std::cmp::Ordering;
use std::path::Path;

/// Display name for a file: its filename without the extension.
///
/// - `trip/img10.png` → `img10`
/// - `trip/IMG_0001.JPG` → `IMG_0001`
/// - `trip/archive.tar.gz` → `archive.tar`
pub fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// The final path segment, used as the fallback album title.
pub fn last_segment(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Compare two paths by their string form with [`natural_cmp`].
pub fn natural_path_cmp(a: &Path, b: &Path) -> Ordering {
    natural_cmp(&a.to_string_lossy(), &b.to_string_lossy())
}

/// Numeric-aware, case-insensitive comparison with an exact tie-break.
///
/// Walks both strings a character at a time. Where both sides sit at a digit,
/// the whole digit runs compare by value; anywhere else single characters
/// compare case-folded, so `cover.jpg` precedes `cover2.jpg` (`.` < `2`).
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (mut left, mut right) = (a, b);
    loop {
        let (Some(x), Some(y)) = (left.chars().next(), right.chars().next()) else {
            return match (left.is_empty(), right.is_empty()) {
                (true, true) => a.cmp(b),
                (true, false) => Ordering::Less,
                _ => Ordering::Greater,
            };
        };
        if x.is_ascii_digit() && y.is_ascii_digit() {
            let (run_x, rest_x) = split_digits(left);
            let (run_y, rest_y) = split_digits(right);
            let ord = compare_digits(run_x, run_y);
            if ord != Ordering::Equal {
                return ord;
            }
            left = rest_x;
            right = rest_y;
        } else {
            let ord = x.to_lowercase().cmp(y.to_lowercase());
            if ord != Ordering::Equal {
                return ord;
            }
            left = &left[x.len_utf8()..];
            right = &right[y.len_utf8()..];
        }
    }
}

/// Split off the leading run of ASCII digits.
fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Compare digit runs by value without parsing, so arbitrarily long runs work.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a_trimmed = a.trim_start_matches('0');
    let b_trimmed = b.trim_start_matches('0');
    a_trimmed
        .len()
        .cmp(&b_trimmed.len())
        .then_with(|| a_trimmed.cmp(b_trimmed))
        .then_with(|| a.len().cmp(&b.len()))
}
