//! Hero carousel: slide track, previous/next controls and dots

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use virtuart_app::{Carousel, Focus};
use virtuart_core::Slide;

use crate::theme::{palette, styles};

/// Width of the previous/next control columns
const CONTROL_WIDTH: u16 = 3;

/// Columns taken by one dot including the gap after it
const DOT_STRIDE: u16 = 2;

/// Interactive rects of the carousel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselRects {
    /// Where slides are shown
    pub track: Rect,
    pub prev: Rect,
    pub next: Rect,
    /// One rect per slide, in slide order
    pub dots: Vec<Rect>,
}

/// Carousel widget
pub struct CarouselView<'a> {
    carousel: &'a Carousel,
    focus: Option<Focus>,
}

impl<'a> CarouselView<'a> {
    pub fn new(carousel: &'a Carousel, focus: Option<Focus>) -> Self {
        Self { carousel, focus }
    }

    pub fn rects(&self, area: Rect) -> CarouselRects {
        let inner = styles::glass_block(false).inner(area);
        let count = self.carousel.len() as u16;

        // Bottom row holds the dots, the rest is controls + track
        let body_height = inner.height.saturating_sub(1);
        let control_y = inner.y + body_height / 2;
        let prev = Rect::new(inner.x, control_y, CONTROL_WIDTH.min(inner.width), 1);
        let next = Rect::new(
            inner.right().saturating_sub(CONTROL_WIDTH).max(inner.x),
            control_y,
            CONTROL_WIDTH.min(inner.width),
            1,
        );
        let track = Rect::new(
            inner.x + CONTROL_WIDTH,
            inner.y,
            inner.width.saturating_sub(CONTROL_WIDTH * 2),
            body_height,
        );

        let dots_width = (count * DOT_STRIDE).saturating_sub(1);
        let dots_x = inner.x + inner.width.saturating_sub(dots_width) / 2;
        let dots_y = inner.y + body_height;
        let dots = if inner.height == 0 || dots_width > inner.width {
            Vec::new()
        } else {
            (0..count)
                .map(|i| Rect::new(dots_x + i * DOT_STRIDE, dots_y, 1, 1))
                .collect()
        };

        CarouselRects {
            track,
            prev,
            next,
            dots,
        }
    }

    fn render_slide(slide: &Slide, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(format!("[ {} ]", slide.image), styles::text_muted())),
            Line::from(""),
            Line::from(Span::styled(slide.title.as_str(), styles::headline())),
            Line::from(Span::styled(slide.subtitle.as_str(), styles::text_secondary())),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(palette::SLIDE_BG))
            .render(area, buf);
    }
}

impl Widget for CarouselView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let counter = format!(
            " {} / {} ",
            self.carousel.index() + 1,
            self.carousel.len()
        );
        let block = styles::glass_block(false)
            .title_top(Line::from(Span::styled(counter, styles::text_muted())).right_aligned())
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let rects = self.rects(area);

        // Slides sit side by side on a track shifted left by offset_percent
        // of the track width; only the slide aligned with the track shows.
        let width = i64::from(rects.track.width);
        let shift = self.carousel.offset_percent() as i64 * width / 100;
        for (i, slide) in self.carousel.slides().iter().enumerate() {
            let left = i as i64 * width - shift;
            if left == 0 && !rects.track.is_empty() {
                Self::render_slide(slide, rects.track, buf);
            }
        }

        let prev_style = styles::button(self.focus == Some(Focus::PrevSlide));
        let next_style = styles::button(self.focus == Some(Focus::NextSlide));
        buf.set_stringn(rects.prev.x, rects.prev.y, " ‹ ", rects.prev.width as usize, prev_style);
        buf.set_stringn(rects.next.x, rects.next.y, " › ", rects.next.width as usize, next_style);

        for (i, dot) in rects.dots.iter().enumerate() {
            let active = self.carousel.is_active(i);
            let symbol = if active { "●" } else { "○" };
            let style = styles::dot(active, self.focus == Some(Focus::Dot(i)));
            buf.set_string(dot.x, dot.y, symbol, style);
        }
    }
}
