//! Page sections as widgets
//!
//! Each widget that holds interactive elements also exposes the rects of
//! those elements, computed from the same area it renders into. The view
//! records them in the hit map.

mod card_modal;
mod card_strip;
mod carousel;
mod features;
mod footer;
mod header;
mod hero;
pub mod modal_overlay;
mod status_bar;

pub use card_modal::CardModal;
pub use card_strip::{CardStripView, ScrollControl};
pub(crate) use card_strip::render_heading;
pub use carousel::{CarouselRects, CarouselView};
pub use features::FeatureGrid;
pub use footer::Footer;
pub use header::Header;
pub use hero::HeroCopy;
pub use status_bar::StatusBar;

use unicode_width::UnicodeWidthStr;

/// Display width of `text` in terminal columns
pub(crate) fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}
