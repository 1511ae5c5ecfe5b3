//! Fixed page chrome: hero copy, section headings and footer links.
//!
//! Unlike slides and cards this text is part of the page itself, not
//! injected content.

use virtuart_core::Route;

pub const HERO_HEADLINE: &str = "Find your next favorite artwork";

pub const HERO_BODY: &str = "Original pieces from emerging and established artists worldwide. \
Curated collections, secure checkout.";

/// Hero call-to-action buttons
pub const HERO_ACTIONS: [(&str, Route); 2] = [
    ("Join as Collector", Route::Register),
    ("Learn More", Route::About),
];

pub const CATEGORIES_HEADING: &str = "Explore Categories";

pub const CATEGORIES_SUBHEADING: &str = "Handpicked selections from our gallery";

/// Footer links
pub const FOOTER_LINKS: [(&str, Route); 3] = [
    ("About", Route::About),
    ("Contact", Route::Contact),
    ("Sign up", Route::Register),
];

pub const COPYRIGHT_SUFFIX: &str = "All rights reserved.";
