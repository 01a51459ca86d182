//! Tool configuration.
//!
//! Handles loading and validating `gallery.toml`. Every setting has a default,
//! so the file is optional and may be sparse.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! images_dir = "static/images"    # Image root to scan
//! site_source = "static"          # Prefix stripped to build site-relative URLs
//! output = "content/gallery.md"   # Generated page (overwritten every run)
//! title = "Gallery"               # Front-matter title
//! expand_albums = false           # Render album sections open
//! ```
//!
//! Unknown keys are rejected to catch typos early. Command-line flags override
//! file values; see [`GalleryConfig::apply_overrides`].

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings loaded from `gallery.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Image root walked for albums.
    pub images_dir: PathBuf,
    /// Site source directory; image URLs are relative to it.
    pub site_source: PathBuf,
    /// Destination of the generated page.
    pub output: PathBuf,
    /// Fixed page title written to the front matter.
    pub title: String,
    /// Render every album's disclosure element expanded.
    pub expand_albums: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from("static/images"),
            site_source: PathBuf::from("static"),
            output: PathBuf::from("content/gallery.md"),
            title: "Gallery".to_string(),
            expand_albums: false,
        }
    }
}

/// Values given on the command line; `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub images_dir: Option<PathBuf>,
    pub site_source: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub title: Option<String>,
}

impl GalleryConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::Validation("output must not be empty".into()));
        }
        Ok(())
    }

    /// Layer command-line values over the file values.
    pub fn apply_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(images_dir) = overrides.images_dir {
            self.images_dir = images_dir;
        }
        if let Some(site_source) = overrides.site_source {
            self.site_source = site_source;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(title) = overrides.title {
            self.title = title;
        }
        self
    }
}

/// Load config from `path`.
///
/// Returns defaults if the file doesn't exist. Returns `Err` if it exists but
/// is invalid TOML or has unknown keys. Call [`GalleryConfig::validate`] once
/// CLI overrides have been applied.
pub fn load_config(path: &Path) -> Result<GalleryConfig, ConfigError> {
    if !path.exists() {
        log::debug!("No config at {}, using defaults", path.display());
        return Ok(GalleryConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: GalleryConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Returns a fully-commented stock `gallery.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# album-index configuration
# ========================
# Every key is optional. Values shown are the defaults.

# Directory tree to scan. Every directory holding at least one image
# (jpg, jpeg, png, webp, gif) becomes an album.
images_dir = "static/images"

# The static site's source directory. Image URLs are the image path relative
# to this directory, with forward slashes and a leading "/".
site_source = "static"

# Generated page. Overwritten on every run; parent directories are created.
output = "content/gallery.md"

# Title written to the page's front matter.
title = "Gallery"

# Render each album's <details> section expanded.
expand_albums = false
"##
}
