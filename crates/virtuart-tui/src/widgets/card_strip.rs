//! Category strip: heading, scroll controls and the horizontally clipped
//! row of category cards

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use virtuart_app::card_strip::{card_span, CARD_WIDTH};
use virtuart_app::page::{CATEGORIES_HEADING, CATEGORIES_SUBHEADING};
use virtuart_app::{Focus, ScrollDirection};
use virtuart_core::CategoryCard;

use crate::layout::StripAreas;
use crate::theme::{palette, styles};

/// The card row, scrolled by `offset` columns
pub struct CardStripView<'a> {
    cards: &'a [CategoryCard],
    offset: usize,
    focus: Option<Focus>,
}

impl<'a> CardStripView<'a> {
    pub fn new(cards: &'a [CategoryCard], offset: usize, focus: Option<Focus>) -> Self {
        Self {
            cards,
            offset,
            focus,
        }
    }

    /// Visible part of each card inside `viewport`, as `(card index, rect)`
    pub fn card_rects(&self, viewport: Rect) -> Vec<(usize, Rect)> {
        let view_start = self.offset;
        let view_end = self.offset + viewport.width as usize;

        (0..self.cards.len())
            .filter_map(|i| {
                let (start, width) = card_span(i);
                let end = start + width;
                let from = start.max(view_start);
                let to = end.min(view_end);
                (from < to).then(|| {
                    let x = viewport.x + (from - view_start) as u16;
                    (i, Rect::new(x, viewport.y, (to - from) as u16, viewport.height))
                })
            })
            .collect()
    }

    /// Draw card `index` at full size into a scratch buffer
    fn render_card(&self, index: usize, height: u16) -> Buffer {
        let card = &self.cards[index];
        let area = Rect::new(0, 0, CARD_WIDTH as u16, height);
        let mut scratch = Buffer::empty(area);

        let focused = self.focus == Some(Focus::Card(index));
        let block = styles::glass_block(focused)
            .title(Span::styled(
                format!(" {} ", card.title),
                if focused {
                    styles::focused_selected()
                } else {
                    styles::accent_bold()
                },
            ))
            .style(Style::default().bg(palette::CARD_BG));

        let lines = vec![
            Line::from(Span::styled(card.description.as_str(), styles::text_primary())),
            Line::from(""),
            Line::from(Span::styled(card.image.as_str(), styles::text_muted())),
        ];
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, &mut scratch);
        scratch
    }
}

impl Widget for CardStripView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (index, rect) in self.card_rects(area) {
            let scratch = self.render_card(index, area.height);
            let (start, _) = card_span(index);
            // Column inside the card where the visible part begins
            let skip = self.offset.saturating_sub(start) as u16;

            for dy in 0..rect.height {
                for dx in 0..rect.width {
                    let src = scratch.cell((skip + dx, dy)).cloned();
                    if let (Some(src), Some(dst)) = (src, buf.cell_mut((rect.x + dx, rect.y + dy)))
                    {
                        *dst = src;
                    }
                }
            }
        }
    }
}

/// One of the two strip scroll buttons
pub struct ScrollControl {
    direction: ScrollDirection,
    focused: bool,
    /// Whether there is anything to scroll to in this direction
    enabled: bool,
}

impl ScrollControl {
    pub fn new(direction: ScrollDirection, focused: bool, enabled: bool) -> Self {
        Self {
            direction,
            focused,
            enabled,
        }
    }
}

impl Widget for ScrollControl {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let symbol = match self.direction {
            ScrollDirection::Backward => " ‹ ",
            ScrollDirection::Forward => " › ",
        };
        let style = if self.enabled || self.focused {
            styles::button(self.focused)
        } else {
            styles::text_muted()
        };
        let y = area.y + area.height / 2;
        buf.set_stringn(area.x, y, symbol, area.width as usize, style);
    }
}

/// Heading and subheading above the strip
pub(crate) fn render_heading(areas: &StripAreas, buf: &mut Buffer) {
    Paragraph::new(vec![
        Line::from(Span::styled(CATEGORIES_HEADING, styles::headline())),
        Line::from(Span::styled(CATEGORIES_SUBHEADING, styles::text_muted())),
    ])
    .render(areas.heading, buf);
}
