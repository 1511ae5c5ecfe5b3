//! Gallery domain types
//!
//! Content records shown on the landing page. All of them are read-only at
//! runtime; they are loaded once from configuration and then only referenced.

use serde::{Deserialize, Serialize};

/// One carousel entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Slide {
    pub id: String,
    /// Image path or URL. Rendered as a labelled placeholder.
    pub image: String,
    pub title: String,
    pub subtitle: String,
}

/// One clickable category tile
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategoryCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

/// One entry of the feature grid below the category strip
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Feature {
    pub title: String,
    pub body: String,
    pub image: String,
    pub link_label: String,
    pub route: Route,
}

/// Outbound navigation targets.
///
/// Routing itself belongs to the host; the gallery only names the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    About,
    Contact,
    Login,
    Register,
}

impl Route {
    /// Routes shown in the header navigation, in display order
    pub const NAV: [Route; 5] = [
        Route::Home,
        Route::About,
        Route::Contact,
        Route::Login,
        Route::Register,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Contact => "/contact",
            Route::Login => "/login",
            Route::Register => "/register",
        }
    }

    /// Label used in the header navigation
    pub fn nav_label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About Us",
            Route::Contact => "Contact",
            Route::Login => "Login",
            Route::Register => "Register",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
