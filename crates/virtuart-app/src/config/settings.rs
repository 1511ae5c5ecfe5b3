//! Loaders for .virtuart/config.toml and .virtuart/content.toml

use std::path::{Path, PathBuf};

use virtuart_core::prelude::*;

use super::types::{GalleryContent, Settings};

const CONFIG_FILENAME: &str = "config.toml";
const CONTENT_FILENAME: &str = "content.toml";
const VIRTUART_DIR: &str = ".virtuart";

/// Path of the settings file under `dir`
pub fn settings_path(dir: &Path) -> PathBuf {
    dir.join(VIRTUART_DIR).join(CONFIG_FILENAME)
}

/// Path of the content file under `dir`
pub fn content_path(dir: &Path) -> PathBuf {
    dir.join(VIRTUART_DIR).join(CONTENT_FILENAME)
}

/// Load settings from `.virtuart/config.toml`.
///
/// A missing or unreadable file yields defaults; problems are logged.
pub fn load_settings(dir: &Path) -> Settings {
    let config_path = settings_path(dir);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load page content from `.virtuart/content.toml`.
///
/// Missing or malformed files fall back to the built-in placeholder content.
/// A well-formed file without slides is an error: the carousel cannot run.
pub fn load_content(dir: &Path) -> Result<GalleryContent> {
    let path = content_path(dir);

    if !path.exists() {
        debug!("No content file at {:?}, using placeholders", path);
        return Ok(GalleryContent::default());
    }

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            return Ok(GalleryContent::default());
        }
    };

    let content: GalleryContent = match toml::from_str(&text) {
        Ok(content) => content,
        Err(e) => {
            warn!("Failed to parse {:?}: {}", path, e);
            return Ok(GalleryContent::default());
        }
    };

    if content.slides.is_empty() {
        return Err(Error::config_invalid(path, "at least one [[slides]] entry is required"));
    }

    info!(
        "Loaded content from {:?}: {} slides, {} cards, {} features",
        path,
        content.slides.len(),
        content.cards.len(),
        content.features.len()
    );
    Ok(content)
}

/// Create default config files in the .virtuart/ directory.
///
/// Existing files are left untouched.
pub fn init_config_dir(dir: &Path) -> Result<()> {
    let virtuart_dir = dir.join(VIRTUART_DIR);

    if !virtuart_dir.exists() {
        std::fs::create_dir_all(&virtuart_dir)
            .map_err(|e| Error::config(format!("Failed to create .virtuart dir: {}", e)))?;
    }

    let config_path = virtuart_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# VirtuArt Configuration

[autoplay]
enabled = true
interval_ms = 4500      # Carousel auto-advance period (min 500)

[ui]
scroll_fraction = 0.8   # Share of the strip width moved per scroll
smooth_scroll = true
tick_rate_ms = 50
brand = "ARTGALLERY"
"#;
        std::fs::write(&config_path, default_content)
            .context("Writing default config.toml")?;
        info!("Created {:?}", config_path);
    }

    let content_file = virtuart_dir.join(CONTENT_FILENAME);
    if !content_file.exists() {
        let body = toml::to_string_pretty(&GalleryContent::default())
            .map_err(|e| Error::config(format!("Failed to serialize content: {}", e)))?;
        let text = format!("# VirtuArt page content\n# Replace the placeholders with your own assets.\n\n{body}");
        std::fs::write(&content_file, text).context("Writing default content.toml")?;
        info!("Created {:?}", content_file);
    }

    Ok(())
}
