//! Header bar: brand on the left, navigation links on the right

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};
use virtuart_app::Focus;
use virtuart_core::Route;

use crate::theme::{palette, styles};

use super::text_width;

const LOGO_ICON: &str = "▣";

/// Main header showing the brand and the navigation links
pub struct Header<'a> {
    brand: &'a str,
    focus: Option<Focus>,
}

impl<'a> Header<'a> {
    pub fn new(brand: &'a str, focus: Option<Focus>) -> Self {
        Self { brand, focus }
    }

    /// Rects of the navigation links, right-aligned inside the border.
    /// Links that would overlap the brand or the border are left out.
    pub fn nav_rects(&self, area: Rect) -> Vec<(Route, Rect)> {
        let inner = styles::glass_block(false).inner(area);
        if inner.height == 0 {
            return Vec::new();
        }

        // " label " per link, one column between links and before the border
        let widths: Vec<u16> = Route::NAV
            .iter()
            .map(|r| text_width(r.nav_label()) + 2)
            .collect();
        let total = widths.iter().sum::<u16>() + widths.len() as u16;

        let mut x = inner
            .right()
            .saturating_sub(total)
            .max(self.brand_end(inner) + 1);
        let mut rects = Vec::with_capacity(widths.len());
        for (route, width) in Route::NAV.iter().zip(widths) {
            if x.saturating_add(width) > inner.right() {
                break;
            }
            rects.push((*route, Rect::new(x, inner.y, width, 1)));
            x += width + 1;
        }
        rects
    }

    /// Column just past the logo and brand text
    fn brand_end(&self, inner: Rect) -> u16 {
        inner.x + text_width(&Self::logo()) + text_width(self.brand)
    }

    fn logo() -> String {
        format!(" {} ", LOGO_ICON)
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let logo = Self::logo();
        buf.set_stringn(inner.x, inner.y, &logo, inner.width as usize, styles::accent());
        let brand_x = inner.x + text_width(&logo);
        if brand_x < inner.right() {
            buf.set_stringn(
                brand_x,
                inner.y,
                self.brand,
                (inner.right() - brand_x) as usize,
                styles::accent_bold(),
            );
        }

        for (route, rect) in self.nav_rects(area) {
            let focused = self.focus == Some(Focus::Nav(route));
            let style = if route == Route::Register {
                styles::button(focused)
            } else {
                styles::link(focused)
            };
            let label = format!(" {} ", route.nav_label());
            buf.set_stringn(rect.x, rect.y, &label, rect.width as usize, style);
        }
    }
}
