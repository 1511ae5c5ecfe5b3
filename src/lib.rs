//! VirtuArt Library
//!
//! A terminal gallery landing page. The binary parses arguments and calls
//! into here; everything else lives in the workspace crates.

use std::path::Path;

use virtuart_app::config::{init_config_dir, load_content, load_settings, GalleryContent, Settings};
use virtuart_core::prelude::*;

/// Command-line overrides applied on top of `.virtuart/config.toml`
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Keep the carousel still regardless of the config file
    pub no_autoplay: bool,
}

/// Main application entry point for the gallery in `dir`
pub async fn run(dir: &Path, options: RunOptions) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    virtuart_core::logging::init()?;
    info!("Gallery directory: {}", dir.display());

    let result = match load(dir, &options) {
        Ok((content, settings)) => {
            info!(
                "Autoplay {} every {:?}",
                if settings.autoplay.enabled { "on" } else { "off" },
                settings.autoplay.interval()
            );
            virtuart_tui::run(content, settings).await
        }
        Err(e) => Err(e),
    };

    if let Err(ref e) = result {
        error!("{}: {:?}", failure_label(e), e);
    }

    info!("VirtuArt exiting");
    result
}

/// Log prefix for an error that ended the run
fn failure_label(error: &Error) -> &'static str {
    if error.is_fatal() {
        "Cannot start gallery"
    } else {
        "Application error"
    }
}

/// Load page content and settings for `dir`, applying `options`
pub fn load(dir: &Path, options: &RunOptions) -> Result<(GalleryContent, Settings)> {
    let mut settings = load_settings(dir);
    if options.no_autoplay {
        settings.autoplay.enabled = false;
    }
    let content = load_content(dir)?;
    Ok((content, settings))
}

/// Write default `.virtuart/` files into `dir`
pub fn init(dir: &Path) -> Result<()> {
    init_config_dir(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_label_separates_startup_errors() {
        assert_eq!(failure_label(&Error::EmptyCarousel), "Cannot start gallery");
        assert_eq!(
            failure_label(&Error::config_invalid("content.toml", "no slides")),
            "Cannot start gallery"
        );
        assert_eq!(failure_label(&Error::terminal("draw failed")), "Application error");
    }
}
