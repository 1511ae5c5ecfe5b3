//! Drawing helpers for the card modal overlay.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Place a `width` x `height` box in the middle of `area`, shrinking it to
/// fit when the area is smaller.
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use virtuart_tui::widgets::modal_overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let modal = centered_rect(40, 10, area);
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let size = (width.min(area.width), height.min(area.height));
    let margin_x = (area.width - size.0) / 2;
    let margin_y = (area.height - size.1) / 2;
    Rect::new(area.x + margin_x, area.y + margin_y, size.0, size.1)
}

/// Restyle every cell of `area` in the backdrop colours.
///
/// Stands in for the translucent backdrop behind the card modal: the page
/// text stays readable but recedes.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let backdrop = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);
    buf.set_style(area.intersection(buf.area), backdrop);
}

/// Cells covered by the one-cell drop shadow of `modal`: the column to its
/// right and the row below it, both shifted down/right by one.
fn shadow_cells(modal: Rect) -> impl Iterator<Item = (u16, u16)> {
    let right = modal.right();
    let bottom = modal.bottom();
    let column = (modal.y + 1..=bottom).map(move |y| (right, y));
    let row = (modal.x + 1..right).map(move |x| (x, bottom));
    column.chain(row)
}

/// Draw the drop shadow of `modal`, skipping cells outside the buffer
pub fn render_shadow(buf: &mut Buffer, modal: Rect) {
    let shadow = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);
    for pos in shadow_cells(modal) {
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_char(' ').set_style(shadow);
        }
    }
}

/// Reset the cells of `area` before drawing modal content
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Cell;

    #[test]
    fn test_centered_rect_within_area() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let result = centered_rect(60, 20, Rect::new(0, 0, 30, 10));
        assert_eq!(result, Rect::new(0, 0, 30, 10));
    }

    #[test]
    fn test_centered_rect_with_offset_area() {
        let area = Rect::new(10, 5, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(30, 12, 40, 10));
    }

    #[test]
    fn test_dim_background_only_touches_area() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        dim_background(&mut buf, Rect::new(5, 3, 10, 5));

        assert_eq!(buf[(5, 3)].fg, palette::TEXT_MUTED);
        assert_eq!(buf[(14, 7)].bg, palette::DEEPEST_BG);
        assert_ne!(buf[(4, 3)].fg, palette::TEXT_MUTED);
        assert_ne!(buf[(15, 8)].fg, palette::TEXT_MUTED);
    }

    #[test]
    fn test_render_shadow_offset() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        render_shadow(&mut buf, Rect::new(5, 2, 10, 6));

        let right = &buf[(15, 3)];
        assert_eq!(right.bg, palette::SHADOW);
        assert_eq!(right.symbol(), " ");

        let bottom = &buf[(6, 8)];
        assert_eq!(bottom.bg, palette::SHADOW);
    }

    #[test]
    fn test_render_shadow_at_buffer_edge() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 10));
        // Shadow cells fall outside the buffer and are skipped
        render_shadow(&mut buf, Rect::new(8, 8, 2, 2));
    }

    #[test]
    fn test_shadow_cells_trace_right_and_bottom_edges() {
        let cells: Vec<_> = shadow_cells(Rect::new(2, 1, 3, 2)).collect();
        assert_eq!(cells, vec![(5, 2), (5, 3), (3, 3), (4, 3)]);
    }

    #[test]
    fn test_clear_area_resets_only_modal_cells() {
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::filled(area, Cell::new("X"));

        clear_area(&mut buf, Rect::new(2, 2, 5, 2));

        assert_eq!(buf[(2, 2)].symbol(), " ");
        assert_eq!(buf[(6, 3)].symbol(), " ");
        assert_eq!(buf[(1, 2)].symbol(), "X");
    }
}
