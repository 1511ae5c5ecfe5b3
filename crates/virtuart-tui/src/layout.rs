//! Screen layout definitions for the gallery page
//!
//! The page stacks, top to bottom: header, hero (carousel beside the hero
//! copy), category strip, feature grid, footer and a one-line status bar.
//! Only the hero grows with the terminal.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + brand/nav row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Category section: heading row + subheading row + card row
pub const CATEGORIES_HEIGHT: u16 = 2 + CARD_ROW_HEIGHT;

/// Height of the card row (cards are bordered boxes)
pub const CARD_ROW_HEIGHT: u16 = 6;

pub const FEATURES_HEIGHT: u16 = 6;

pub const FOOTER_HEIGHT: u16 = 2;

/// Width of each strip scroll control column
pub const SCROLL_CONTROL_WIDTH: u16 = 3;

/// Screen areas for the gallery page
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    /// Carousel on the left part of the hero
    pub carousel: Rect,
    /// Headline, body and call-to-action buttons
    pub hero_copy: Rect,
    pub categories: Rect,
    pub features: Rect,
    pub footer: Rect,
    pub status: Rect,
}

/// Create the page layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(5), // Hero
        Constraint::Length(CATEGORIES_HEIGHT),
        Constraint::Length(FEATURES_HEIGHT),
        Constraint::Length(FOOTER_HEIGHT),
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    let hero = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    ScreenAreas {
        header: chunks[0],
        carousel: hero[0],
        hero_copy: hero[1],
        categories: chunks[2],
        features: chunks[3],
        footer: chunks[4],
        status: chunks[5],
    }
}

/// Areas inside the category section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripAreas {
    /// Heading and subheading rows
    pub heading: Rect,
    pub scroll_left: Rect,
    /// Visible part of the card row
    pub viewport: Rect,
    pub scroll_right: Rect,
}

/// Split the category section into heading, controls and viewport
pub fn strip_areas(area: Rect) -> StripAreas {
    let rows = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(area);
    let columns = Layout::horizontal([
        Constraint::Length(SCROLL_CONTROL_WIDTH),
        Constraint::Min(0),
        Constraint::Length(SCROLL_CONTROL_WIDTH),
    ])
    .split(rows[1]);

    StripAreas {
        heading: rows[0],
        scroll_left: columns[0],
        viewport: columns[1],
        scroll_right: columns[2],
    }
}
