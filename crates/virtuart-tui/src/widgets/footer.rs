//! Page footer: brand, footer links and the copyright line

use chrono::{Datelike, Local};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use virtuart_app::page::{COPYRIGHT_SUFFIX, FOOTER_LINKS};
use virtuart_app::Focus;

use crate::theme::styles;

use super::text_width;

pub struct Footer<'a> {
    brand: &'a str,
    year: i32,
    focus: Option<Focus>,
}

impl<'a> Footer<'a> {
    /// Footer stamped with the current local year
    pub fn new(brand: &'a str, focus: Option<Focus>) -> Self {
        Self::with_year(brand, Local::now().year(), focus)
    }

    pub fn with_year(brand: &'a str, year: i32, focus: Option<Focus>) -> Self {
        Self { brand, year, focus }
    }

    /// Rects of the footer links on the first row, right-aligned
    pub fn link_rects(&self, area: Rect) -> Vec<Rect> {
        if area.height == 0 {
            return Vec::new();
        }
        let widths: Vec<u16> = FOOTER_LINKS
            .iter()
            .map(|(label, _)| text_width(label))
            .collect();
        let total = widths.iter().sum::<u16>() + 2 * widths.len() as u16;
        let min_x = area.x + text_width(self.brand) + 2;

        let mut x = area.right().saturating_sub(total).max(min_x);
        let mut rects = Vec::new();
        for width in widths {
            if x.saturating_add(width) > area.right() {
                break;
            }
            rects.push(Rect::new(x, area.y, width, 1));
            x += width + 2;
        }
        rects
    }

    pub fn copyright(&self) -> String {
        format!("© {} {}. {}", self.year, self.brand, COPYRIGHT_SUFFIX)
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        buf.set_stringn(area.x + 1, area.y, self.brand, area.width as usize, styles::accent_bold());

        for (i, rect) in self.link_rects(area).into_iter().enumerate() {
            let (label, _) = FOOTER_LINKS[i];
            let style = styles::link(self.focus == Some(Focus::FooterLink(i)));
            buf.set_stringn(rect.x, rect.y, label, rect.width as usize, style);
        }

        if area.height > 1 {
            buf.set_stringn(
                area.x + 1,
                area.y + 1,
                self.copyright(),
                area.width.saturating_sub(1) as usize,
                styles::text_muted(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_copyright_uses_year_and_brand() {
        let footer = Footer::with_year("ARTGALLERY", 2031, None);
        assert_eq!(footer.copyright(), "© 2031 ARTGALLERY. All rights reserved.");
    }

    #[test]
    fn test_new_uses_current_year() {
        let footer = Footer::new("ARTGALLERY", None);
        assert!(footer
            .copyright()
            .contains(&Local::now().year().to_string()));
    }

    #[test]
    fn test_renders_links_and_copyright() {
        let mut term = TestTerminal::with_size(80, 2);
        term.render_widget(Footer::with_year("ARTGALLERY", 2031, None), term.area());

        assert!(term.line_contains(0, "About"));
        assert!(term.line_contains(0, "Contact"));
        assert!(term.line_contains(0, "Sign up"));
        assert!(term.line_contains(1, "© 2031 ARTGALLERY"));
    }

    #[test]
    fn test_link_rects_right_aligned() {
        let footer = Footer::with_year("ARTGALLERY", 2031, None);
        let rects = footer.link_rects(Rect::new(0, 10, 80, 2));

        assert_eq!(rects.len(), 3);
        // About(5) Contact(7) Sign up(7) + 2 columns after each
        assert_eq!(rects[0], Rect::new(55, 10, 5, 1));
        assert_eq!(rects[2].right(), 78);
    }
}
