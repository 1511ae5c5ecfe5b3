//! Color palette for the gallery page.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Rgb(18, 18, 22); // Panel/card backgrounds
pub const POPUP_BG: Color = Color::Rgb(28, 28, 34); // Modal background
pub const SLIDE_BG: Color = Color::Rgb(24, 20, 30); // Carousel track

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::LightYellow;

// --- Accent (gallery gold) ---
pub const ACCENT: Color = Color::Rgb(212, 175, 55);
pub const ACCENT_DIM: Color = Color::Rgb(120, 100, 40);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

/// Foreground on accent-colored backgrounds
pub const CONTRAST_FG: Color = Color::Black;

// --- Effects ---
pub const SHADOW: Color = Color::Black;
