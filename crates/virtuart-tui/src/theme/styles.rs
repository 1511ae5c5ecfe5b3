//! Semantic style builders for the gallery page.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn headline() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// "Black on gold" - used for the focused element across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Interactive elements ---

/// Text link, inverted when focused
pub fn link(focused: bool) -> Style {
    if focused {
        focused_selected()
    } else {
        text_secondary()
    }
}

/// Outlined button
pub fn button(focused: bool) -> Style {
    if focused {
        focused_selected()
    } else {
        accent()
    }
}

/// Carousel dot
pub fn dot(active: bool, focused: bool) -> Style {
    match (active, focused) {
        (_, true) => focused_selected(),
        (true, false) => accent_bold(),
        (false, false) => text_muted(),
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(accent_bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_style_is_inverted() {
        let style = focused_selected();
        assert_eq!(style.fg, Some(palette::CONTRAST_FG));
        assert_eq!(style.bg, Some(palette::ACCENT));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_focus_wins_over_active_dot() {
        assert_eq!(dot(true, true), focused_selected());
        assert_eq!(dot(true, false), accent_bold());
        assert_eq!(dot(false, false), text_muted());
    }

    #[test]
    fn test_link_and_button_focus() {
        assert_eq!(link(false), text_secondary());
        assert_eq!(link(true), focused_selected());
        assert_eq!(button(false), accent());
    }
}
