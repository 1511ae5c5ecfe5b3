//! Card detail modal drawn over the dimmed page

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use virtuart_core::CategoryCard;

use super::modal_overlay;
use crate::theme::styles;

const MODAL_WIDTH: u16 = 52;
const MODAL_HEIGHT: u16 = 11;

/// Width of the close control on the top border
const CLOSE_WIDTH: u16 = 3;

pub struct CardModal<'a> {
    card: &'a CategoryCard,
    close_focused: bool,
}

impl<'a> CardModal<'a> {
    pub fn new(card: &'a CategoryCard, close_focused: bool) -> Self {
        Self {
            card,
            close_focused,
        }
    }

    /// Modal body rect for a screen `area`
    pub fn modal_rect(area: Rect) -> Rect {
        modal_overlay::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area)
    }

    /// Close control, on the top border near the right corner
    pub fn close_rect(modal: Rect) -> Rect {
        let x = modal.right().saturating_sub(CLOSE_WIDTH + 2).max(modal.x);
        Rect::new(x, modal.y, CLOSE_WIDTH.min(modal.width), modal.height.min(1))
    }
}

impl Widget for CardModal<'_> {
    /// `area` is the whole screen; the page behind is dimmed
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let modal = Self::modal_rect(area);
        modal_overlay::render_shadow(buf, modal);
        modal_overlay::clear_area(buf, modal);

        let title = format!(" {} ", self.card.title);
        let block = styles::modal_block(&title);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let close = Self::close_rect(modal);
        buf.set_stringn(
            close.x,
            close.y,
            " × ",
            close.width as usize,
            styles::button(self.close_focused),
        );

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(self.card.description.as_str(), styles::text_primary())),
            Line::from(""),
            Line::from(Span::styled(
                format!("[ {} ]", self.card.image),
                styles::text_muted(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Esc or click outside to close",
                styles::text_muted(),
            )),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
