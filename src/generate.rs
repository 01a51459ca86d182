//! Gallery page rendering.
//!
//! Turns the ordered [`Gallery`] into one text document: a YAML front-matter
//! header followed by an HTML fragment. The renderer trusts the scan's order
//! and does no sorting or filtering of its own.
//!
//! ## Output Shape
//!
//! ```text
//! ---
//! title: "Gallery"
//! date: 2024-07-14
//! ---
//!
//! <div class="gallery">
//!   <details class="album">
//!     <summary class="album-header">
//!       <h2 class="album-title">Lake Weekend</h2>
//!       <time class="album-date" datetime="2023-05-05">2023-05-05</time>
//!     </summary>
//!     <p class="album-description">Two days by the water</p>
//!     <div class="album-grid">
//!       <figure class="photo-card">
//!         <a class="photo-link" href="/images/2023-lake/img1.jpg">
//!           <img class="photo-image" src="/images/2023-lake/img1.jpg" alt="img1" loading="lazy">
//!         </a>
//!         <figcaption class="photo-caption">…</figcaption>
//!       </figure>
//!     </div>
//!   </details>
//! </div>
//! ```
//!
//! The date, description, and caption elements are left out entirely when
//! their text is empty. The class names are a contract with the site theme.
//! The fragment itself is emitted without the indentation shown above.
//!
//! ## Escaping
//!
//! Markup is built with [maud](https://maud.lambda.xyz/). Maud escapes `&`,
//! `<`, `>`, and `"` but not `'`, so every user-controlled string goes through
//! [`Escaped`], which covers all five.

use crate::types::{Album, Gallery, ImagePath};
use chrono::NaiveDate;
use maud::{Markup, Render, html};
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Page-level settings that do not come from the scanned content.
#[derive(Debug, Clone)]
pub struct RenderOptions<'a> {
    /// Fixed front-matter title.
    pub title: &'a str,
    /// Prefix stripped from image paths to form site-relative URLs.
    pub site_source: &'a Path,
    /// Render album sections expanded.
    pub expand_albums: bool,
}

/// Render the full document for `gallery`, stamped with `generated`.
pub fn render(gallery: &Gallery, options: &RenderOptions<'_>, generated: NaiveDate) -> String {
    let mut page = front_matter(options.title, generated);
    page.push_str(&render_gallery(gallery, options).into_string());
    page.push('\n');
    page
}

/// Write the rendered page, creating parent directories and overwriting any
/// previous file.
pub fn write_page(path: &Path, content: &str) -> Result<(), GenerateError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

/// YAML front matter. The title is JSON-quoted, which YAML accepts as a
/// double-quoted scalar.
fn front_matter(title: &str, generated: NaiveDate) -> String {
    let quoted = serde_json::Value::from(title).to_string();
    format!(
        "---\ntitle: {}\ndate: {}\n---\n\n",
        quoted,
        generated.format("%Y-%m-%d")
    )
}

// ============================================================================
// HTML Components
// ============================================================================

fn render_gallery(gallery: &Gallery, options: &RenderOptions<'_>) -> Markup {
    html! {
        div.gallery {
            @for album in &gallery.albums {
                (render_album(album, options))
            }
        }
    }
}

fn render_album(album: &Album, options: &RenderOptions<'_>) -> Markup {
    let meta = &album.metadata;
    html! {
        details.album open[options.expand_albums] {
            summary.album-header {
                h2.album-title { (Escaped(&album.title)) }
                @if !meta.date.is_empty() {
                    time.album-date datetime=(Escaped(&meta.date)) { (Escaped(&meta.date)) }
                }
            }
            @if !meta.description.is_empty() {
                p.album-description { (Escaped(&meta.description)) }
            }
            div.album-grid {
                @for image in &album.images {
                    (render_image(image, options.site_source))
                }
            }
        }
    }
}

/// One photo card. Alt text is the sidecar `title` when present, otherwise
/// the display name; the sidecar `description` becomes the caption.
fn render_image(image: &ImagePath, site_source: &Path) -> Markup {
    let url = site_url(&image.path, site_source);
    html! {
        figure.photo-card {
            a.photo-link href=(Escaped(&url)) {
                img.photo-image src=(Escaped(&url)) alt=(Escaped(image.alt_text())) loading="lazy";
            }
            @if !image.metadata.description.is_empty() {
                figcaption.photo-caption { (Escaped(&image.metadata.description)) }
            }
        }
    }
}

// ============================================================================
// Escaping and URLs
// ============================================================================

/// Text rendered with all five HTML-special characters escaped.
pub struct Escaped<'a>(pub &'a str);

impl Render for Escaped<'_> {
    fn render_to(&self, buffer: &mut String) {
        escape_into(self.0, buffer);
    }
}

/// Escape `& < > " '` for use in element content or quoted attributes.
fn escape_into(text: &str, buffer: &mut String) {
    for c in text.chars() {
        match c {
            '&' => buffer.push_str("&amp;"),
            '<' => buffer.push_str("&lt;"),
            '>' => buffer.push_str("&gt;"),
            '"' => buffer.push_str("&quot;"),
            '\'' => buffer.push_str("&#39;"),
            _ => buffer.push(c),
        }
    }
}

/// Site-relative URL for an image: the path relative to `site_source`, with
/// forward slashes and one leading `/`.
///
/// Both paths are made absolute against the working directory before
/// stripping, so an absolute image root still matches a relative
/// `site_source`. An image outside `site_source` is logged as a warning and
/// keeps its full (normalized) path.
///
/// - `static/images/trip/a.jpg` with `static` → `/images/trip/a.jpg`
/// - `./static/images/a.jpg` with `static/` → `/images/a.jpg`
/// - `$PWD/static/images/a.jpg` with `static` → `/images/a.jpg`
pub fn site_url(path: &Path, site_source: &Path) -> String {
    let path = without_cur_dir(path);
    let site_source = without_cur_dir(site_source);
    let absolute_path = std::path::absolute(&path).unwrap_or_else(|_| path.clone());
    let absolute_source =
        std::path::absolute(&site_source).unwrap_or_else(|_| site_source.clone());

    let relative = match absolute_path.strip_prefix(&absolute_source) {
        Ok(relative) => relative,
        Err(_) => {
            log::warn!(
                "{} is outside site source {}; using its full path as URL",
                path.display(),
                site_source.display()
            );
            path.as_path()
        }
    };
    let segments: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().replace('\\', "/")),
            _ => None,
        })
        .collect();
    format!("/{}", segments.join("/").trim_start_matches('/'))
}

fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
