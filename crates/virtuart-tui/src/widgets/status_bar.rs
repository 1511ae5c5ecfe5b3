//! One-line status bar: last followed link, or key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

const PAGE_HINTS: &str = "←/→ slides  Tab focus  Enter open  [/] scroll  q quit";
const MODAL_HINTS: &str = "Esc close  ←/→ slides";

pub struct StatusBar<'a> {
    status: Option<&'a str>,
    modal_open: bool,
}

impl<'a> StatusBar<'a> {
    pub fn new(status: Option<&'a str>, modal_open: bool) -> Self {
        Self { status, modal_open }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::CARD_BG));

        let hints = if self.modal_open {
            MODAL_HINTS
        } else {
            PAGE_HINTS
        };
        let mut spans = vec![Span::raw(" ")];
        if let Some(status) = self.status {
            spans.push(Span::styled(status, styles::accent()));
            spans.push(Span::styled("  │  ", styles::text_muted()));
        }
        spans.push(Span::styled(hints, styles::text_muted()));

        Line::from(spans).render(area, buf);
    }
}
