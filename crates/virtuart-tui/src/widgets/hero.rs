//! Hero copy beside the carousel: headline, pitch and call-to-action buttons

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use virtuart_app::page::{HERO_ACTIONS, HERO_BODY, HERO_HEADLINE};
use virtuart_app::Focus;

use crate::theme::styles;

use super::text_width;

/// Hero text block
pub struct HeroCopy {
    focus: Option<Focus>,
}

impl HeroCopy {
    pub fn new(focus: Option<Focus>) -> Self {
        Self { focus }
    }

    fn sections(area: Rect) -> [Rect; 3] {
        let padded = Rect::new(
            area.x.saturating_add(2),
            area.y.saturating_add(1),
            area.width.saturating_sub(4),
            area.height.saturating_sub(1),
        );
        let rows = Layout::vertical([
            Constraint::Length(2), // Headline
            Constraint::Min(0),    // Body
            Constraint::Length(2), // Actions + spacing
        ])
        .split(padded);
        [rows[0], rows[1], rows[2]]
    }

    /// Rects of the call-to-action buttons, left to right. Buttons that do
    /// not fit on the row are left out.
    pub fn action_rects(&self, area: Rect) -> Vec<Rect> {
        let [_, _, actions] = Self::sections(area);
        if actions.height == 0 {
            return Vec::new();
        }

        let mut rects = Vec::with_capacity(HERO_ACTIONS.len());
        let mut x = actions.x;
        for (label, _) in HERO_ACTIONS {
            let width = text_width(label) + 4;
            if x.saturating_add(width) > actions.right() {
                break;
            }
            rects.push(Rect::new(x, actions.y, width, 1));
            x += width + 2;
        }
        rects
    }
}

impl Widget for HeroCopy {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [headline, body, _] = Self::sections(area);

        Paragraph::new(Line::from(Span::styled(HERO_HEADLINE, styles::headline())))
            .wrap(Wrap { trim: true })
            .render(headline, buf);
        Paragraph::new(Line::from(Span::styled(HERO_BODY, styles::text_secondary())))
            .wrap(Wrap { trim: true })
            .render(body, buf);

        for (i, rect) in self.action_rects(area).into_iter().enumerate() {
            let (label, _) = HERO_ACTIONS[i];
            let style = styles::button(self.focus == Some(Focus::HeroAction(i)));
            buf.set_stringn(
                rect.x,
                rect.y,
                format!("[ {} ]", label),
                rect.width as usize,
                style,
            );
        }
    }
}
