//! Feature grid: one bordered panel per feature, each with an outbound link

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use virtuart_app::Focus;
use virtuart_core::Feature;

use crate::theme::{palette, styles};

use super::text_width;

pub struct FeatureGrid<'a> {
    features: &'a [Feature],
    focus: Option<Focus>,
}

impl<'a> FeatureGrid<'a> {
    pub fn new(features: &'a [Feature], focus: Option<Focus>) -> Self {
        Self { features, focus }
    }

    fn panels(&self, area: Rect) -> Vec<Rect> {
        if self.features.is_empty() {
            return Vec::new();
        }
        let n = self.features.len() as u32;
        Layout::horizontal((0..n).map(|_| Constraint::Ratio(1, n)))
            .spacing(1)
            .split(area)
            .to_vec()
    }

    /// Rect of each feature's link, in feature order
    pub fn link_rects(&self, area: Rect) -> Vec<Rect> {
        self.panels(area)
            .into_iter()
            .zip(self.features)
            .filter_map(|(panel, feature)| {
                let inner = styles::glass_block(false).inner(panel);
                if inner.height == 0 || inner.width == 0 {
                    return None;
                }
                let width = (text_width(&feature.link_label) + 2).min(inner.width);
                Some(Rect::new(inner.x, inner.bottom() - 1, width, 1))
            })
            .collect()
    }
}

impl Widget for FeatureGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let links = self.link_rects(area);

        for (i, (panel, feature)) in self.panels(area).into_iter().zip(self.features).enumerate() {
            let block = styles::glass_block(false)
                .title(Span::styled(format!(" {} ", feature.title), styles::accent_bold()))
                .style(Style::default().bg(palette::CARD_BG));
            let inner = block.inner(panel);
            block.render(panel, buf);

            // Body above the link row
            let body = Rect {
                height: inner.height.saturating_sub(1),
                ..inner
            };
            Paragraph::new(Line::from(Span::styled(
                feature.body.as_str(),
                styles::text_secondary(),
            )))
            .wrap(Wrap { trim: true })
            .render(body, buf);

            if let Some(link) = links.get(i) {
                let style = styles::link(self.focus == Some(Focus::FeatureLink(i)));
                buf.set_stringn(
                    link.x,
                    link.y,
                    format!("→ {}", feature.link_label),
                    link.width as usize,
                    style,
                );
            }
        }
    }
}
