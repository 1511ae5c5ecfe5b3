//! Configuration types for the VirtuArt gallery
//!
//! Defines:
//! - `Settings` - Behaviour settings (`.virtuart/config.toml`)
//! - `GalleryContent` - Injected page content (`.virtuart/content.toml`)

use std::time::Duration;

use serde::{Deserialize, Serialize};
use virtuart_core::{CategoryCard, Feature, Route, Slide};

use crate::card_strip::DEFAULT_SCROLL_FRACTION;

/// Default carousel auto-advance period
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 4500;

/// Floor for the auto-advance period
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 500;

/// Default frame tick period
pub const DEFAULT_TICK_RATE_MS: u64 = 50;

/// Application settings (.virtuart/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub autoplay: AutoplaySettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Carousel auto-advance
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AutoplaySettings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_autoplay_interval_ms")]
    pub interval_ms: u64,
}

impl Default for AutoplaySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
        }
    }
}

impl AutoplaySettings {
    /// Auto-advance period, never shorter than [`MIN_AUTOPLAY_INTERVAL_MS`]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(MIN_AUTOPLAY_INTERVAL_MS))
    }
}

/// Rendering and interaction settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Share of the visible strip width moved per scroll request
    #[serde(default = "default_scroll_fraction")]
    pub scroll_fraction: f64,

    /// Ease the strip toward its target instead of jumping
    #[serde(default = "default_true")]
    pub smooth_scroll: bool,

    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Brand shown in the header logo and footer
    #[serde(default = "default_brand")]
    pub brand: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            scroll_fraction: DEFAULT_SCROLL_FRACTION,
            smooth_scroll: true,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            brand: default_brand(),
        }
    }
}

impl UiSettings {
    /// Scroll fraction limited to `(0, 1]`; anything else falls back to the default
    pub fn effective_scroll_fraction(&self) -> f64 {
        if self.scroll_fraction > 0.0 && self.scroll_fraction <= 1.0 {
            self.scroll_fraction
        } else {
            DEFAULT_SCROLL_FRACTION
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}

fn default_true() -> bool {
    true
}

fn default_autoplay_interval_ms() -> u64 {
    DEFAULT_AUTOPLAY_INTERVAL_MS
}

fn default_scroll_fraction() -> f64 {
    DEFAULT_SCROLL_FRACTION
}

fn default_tick_rate_ms() -> u64 {
    DEFAULT_TICK_RATE_MS
}

fn default_brand() -> String {
    "ARTGALLERY".to_string()
}

/// Page content (.virtuart/content.toml)
///
/// A missing section deserializes to an empty list. The carousel additionally
/// requires at least one slide, checked by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GalleryContent {
    #[serde(default)]
    pub slides: Vec<Slide>,

    #[serde(default)]
    pub cards: Vec<CategoryCard>,

    #[serde(default)]
    pub features: Vec<Feature>,
}

impl Default for GalleryContent {
    fn default() -> Self {
        Self {
            slides: vec![
                slide("1", "/assets/image7.jpg", "Curated Originals", "Discover art you love"),
                slide("2", "/assets/image.png", "Emerging Artists", "Support new voices"),
                slide("3", "/assets/lll.jpg", "Museum Quality", "Shop with confidence"),
            ],
            cards: vec![
                card("abstract", "Abstract", "Bold forms & colors", "/assets/image1.jpg"),
                card("landscape", "Landscapes", "Nature & vistas", "/assets/image3.jpg"),
                card("portrait", "Portraits", "Faces & stories", "/assets/image5.jpg"),
                card("modern", "Modern", "Contemporary vision", "/assets/image6.jpg"),
                card("flowers", "Flowers", "Beauty in bloom", "/assets/image4.jpg"),
            ],
            features: vec![
                Feature {
                    title: "Featured Artist: Maya".to_string(),
                    body: "Immersive watercolors that explore light and memory.".to_string(),
                    image: "/assets/image2.jpg".to_string(),
                    link_label: "View collection".to_string(),
                    route: Route::About,
                },
                Feature {
                    title: "Museum Quality Prints".to_string(),
                    body: "Archival prints with museum-grade paper and framing options."
                        .to_string(),
                    image: "/assets/image8.jpg".to_string(),
                    link_label: "Get a quote".to_string(),
                    route: Route::Contact,
                },
            ],
        }
    }
}

fn slide(id: &str, image: &str, title: &str, subtitle: &str) -> Slide {
    Slide {
        id: id.to_string(),
        image: image.to_string(),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
    }
}

fn card(id: &str, title: &str, description: &str, image: &str) -> CategoryCard {
    CategoryCard {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image: image.to_string(),
    }
}
