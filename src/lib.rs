//! # album-index
//!
//! Builds one static gallery page from a directory tree of photos. Every
//! directory holding images becomes an album; optional sidecar files give
//! albums and images a title, date, and description.
//!
//! # Pipeline
//!
//! A single run-to-completion pass, one output write at the end:
//!
//! ```text
//! 1. Scan      images/  →  Gallery        (walk, group, load sidecars, order)
//! 2. Render    Gallery  →  String         (front matter + HTML fragment)
//! 3. Write     String   →  gallery.md     (overwritten every run)
//! ```
//!
//! Rendering is a pure function of the gallery and the generation date, so
//! two runs over unchanged input differ only in the front-matter date.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the image root, groups images into albums, orders them |
//! | [`metadata`] | Sidecar probing with silent fallback to empty metadata |
//! | [`sidecar`] | Line-oriented `key: value` parser and JSON parser |
//! | [`naming`] | Numeric-aware natural ordering and display names |
//! | [`generate`] | Maud rendering, HTML escaping, site URLs, the final write |
//! | [`config`] | `gallery.toml` loading, validation, CLI overrides |
//! | [`types`] | The gallery data model |
//! | [`output`] | CLI output formatting |
//!
//! # Errors
//!
//! Sidecar problems are never fatal: an unreadable or malformed descriptor is
//! logged at debug level and treated as absent. A missing image root, a
//! traversal error, a bad `gallery.toml`, or a failed write aborts the run.

pub mod config;
pub mod generate;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod scan;
pub mod sidecar;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
