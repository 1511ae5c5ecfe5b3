//! Horizontally scrollable category strip.
//!
//! Scrolling is driven only by explicit requests. A request moves the scroll
//! target by a fraction of the visible width; `tick()` then eases the visible
//! offset toward the target, the terminal stand-in for native smooth scroll.
//!
//! Requests are relative to the pending target, not to the offset currently
//! on screen, so several requests made during one ease add up, the way
//! repeated smooth `scrollBy` calls accumulate in a browser.
//!
//! The viewport is unknown until the strip is first rendered. Requests made
//! before that are dropped.

use tracing::trace;

/// Width of one card in columns, borders included
pub const CARD_WIDTH: usize = 24;

/// Gap between adjacent cards in columns
pub const CARD_GAP: usize = 2;

/// Default share of the visible width moved by one scroll request
pub const DEFAULT_SCROLL_FRACTION: f64 = 0.8;

/// Direction of a strip scroll request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Toward the start of the strip (left control)
    Backward,
    /// Toward the end of the strip (right control)
    Forward,
}

/// A scroll that was accepted by the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    /// Requested distance in columns, negative for backward
    pub delta: i64,
}

/// Signed distance for one scroll request: `round(visible_width * fraction)`.
pub fn scroll_distance(direction: ScrollDirection, visible_width: usize, fraction: f64) -> i64 {
    let amount = (visible_width as f64 * fraction).round() as i64;
    match direction {
        ScrollDirection::Forward => amount,
        ScrollDirection::Backward => -amount,
    }
}

/// Column span `(start, width)` of card `index` within the strip content
pub fn card_span(index: usize) -> (usize, usize) {
    (index * (CARD_WIDTH + CARD_GAP), CARD_WIDTH)
}

/// Total content width for `count` cards
pub fn content_width(count: usize) -> usize {
    if count == 0 {
        0
    } else {
        count * CARD_WIDTH + (count - 1) * CARD_GAP
    }
}

/// Scroll state of the category strip
#[derive(Debug, Clone)]
pub struct CardStrip {
    /// Offset currently shown, in columns from the strip start
    offset: usize,
    /// Offset the strip is easing toward
    target: usize,
    /// Visible width, set during render. `None` until first laid out.
    visible_width: Option<usize>,
    /// Width of all cards laid side by side
    content_width: usize,
    scroll_fraction: f64,
    smooth: bool,
}

impl Default for CardStrip {
    fn default() -> Self {
        Self::new(0)
    }
}

impl CardStrip {
    pub fn new(card_count: usize) -> Self {
        Self {
            offset: 0,
            target: 0,
            visible_width: None,
            content_width: content_width(card_count),
            scroll_fraction: DEFAULT_SCROLL_FRACTION,
            smooth: true,
        }
    }

    pub fn with_scroll_fraction(mut self, fraction: f64) -> Self {
        self.scroll_fraction = fraction;
        self
    }

    pub fn with_smooth_scroll(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn visible_width(&self) -> Option<usize> {
        self.visible_width
    }

    pub fn content_width(&self) -> usize {
        self.content_width
    }

    /// Record the laid-out viewport width (called from render).
    ///
    /// Re-clamps the offsets so a wider terminal never leaves the strip
    /// scrolled past its end.
    pub fn set_visible_width(&mut self, width: usize) {
        self.visible_width = Some(width);
        let max = self.max_offset();
        self.offset = self.offset.min(max);
        self.target = self.target.min(max);
    }

    /// Largest valid offset for the current viewport
    pub fn max_offset(&self) -> usize {
        self.content_width
            .saturating_sub(self.visible_width.unwrap_or(self.content_width))
    }

    pub fn is_animating(&self) -> bool {
        self.offset != self.target
    }

    /// Scroll one step in `direction`.
    ///
    /// Returns `None` without touching state when the strip has not been
    /// laid out yet.
    pub fn request_scroll(&mut self, direction: ScrollDirection) -> Option<ScrollRequest> {
        let width = self.visible_width?;
        let delta = scroll_distance(direction, width, self.scroll_fraction);
        self.scroll_by(delta);
        Some(ScrollRequest { delta })
    }

    /// Ensure card `index` is fully visible, scrolling as little as possible
    pub fn scroll_into_view(&mut self, index: usize) {
        let Some(width) = self.visible_width else {
            return;
        };
        let (start, card_width) = card_span(index);
        let end = start + card_width;
        if start < self.target {
            self.set_target(start);
        } else if end > self.target + width {
            self.set_target(end.saturating_sub(width));
        }
    }

    /// Advance the easing by one frame. Returns true while still moving.
    pub fn tick(&mut self) -> bool {
        if self.offset == self.target {
            return false;
        }
        let remaining = self.offset.abs_diff(self.target);
        let step = (remaining / 3).max(1);
        if self.offset < self.target {
            self.offset += step;
        } else {
            self.offset -= step;
        }
        trace!("Card strip offset {} -> target {}", self.offset, self.target);
        self.is_animating()
    }

    /// Move the target by `delta`, starting from the pending target
    fn scroll_by(&mut self, delta: i64) {
        let target = (self.target as i64).saturating_add(delta).max(0) as usize;
        self.set_target(target);
    }

    fn set_target(&mut self, target: usize) {
        self.target = target.min(self.max_offset());
        if !self.smooth {
            self.offset = self.target;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laid_out(cards: usize, width: usize) -> CardStrip {
        let mut strip = CardStrip::new(cards);
        strip.set_visible_width(width);
        strip
    }

    #[test]
    fn test_scroll_distance_is_eighty_percent() {
        assert_eq!(scroll_distance(ScrollDirection::Forward, 100, 0.8), 80);
        assert_eq!(scroll_distance(ScrollDirection::Backward, 100, 0.8), -80);
    }

    #[test]
    fn test_scroll_distance_rounds() {
        // 0.8 * 47 = 37.6
        assert_eq!(scroll_distance(ScrollDirection::Forward, 47, 0.8), 38);
        // 0.8 * 46 = 36.8
        assert_eq!(scroll_distance(ScrollDirection::Backward, 46, 0.8), -37);
    }

    #[test]
    fn test_request_before_layout_is_noop() {
        let mut strip = CardStrip::new(5);
        assert_eq!(strip.request_scroll(ScrollDirection::Forward), None);
        assert_eq!(strip.offset(), 0);
        assert_eq!(strip.target(), 0);
    }

    #[test]
    fn test_request_reports_signed_delta() {
        let mut strip = laid_out(5, 50);
        let req = strip.request_scroll(ScrollDirection::Forward).unwrap();
        assert_eq!(req.delta, 40);
        let req = strip.request_scroll(ScrollDirection::Backward).unwrap();
        assert_eq!(req.delta, -40);
    }

    #[test]
    fn test_target_clamped_to_content() {
        // 5 cards: 5*24 + 4*2 = 128 columns, 50 visible -> max 78
        let mut strip = laid_out(5, 50);
        assert_eq!(strip.max_offset(), 78);
        strip.request_scroll(ScrollDirection::Forward);
        strip.request_scroll(ScrollDirection::Forward);
        strip.request_scroll(ScrollDirection::Forward);
        assert_eq!(strip.target(), 78);

        strip.request_scroll(ScrollDirection::Backward);
        strip.request_scroll(ScrollDirection::Backward);
        strip.request_scroll(ScrollDirection::Backward);
        assert_eq!(strip.target(), 0);
    }

    #[test]
    fn test_requests_during_ease_accumulate() {
        let mut strip = CardStrip::new(8);
        strip.set_visible_width(50);
        strip.request_scroll(ScrollDirection::Forward);
        strip.tick();
        assert!(strip.offset() > 0 && strip.offset() < 40);

        // Second request stacks on the pending target, not the shown offset
        strip.request_scroll(ScrollDirection::Forward);
        assert_eq!(strip.target(), 80);

        while strip.tick() {}
        assert_eq!(strip.offset(), 80);
    }

    #[test]
    fn test_no_scroll_when_content_fits() {
        let mut strip = laid_out(2, 200);
        assert_eq!(strip.max_offset(), 0);
        assert!(strip.request_scroll(ScrollDirection::Forward).is_some());
        assert_eq!(strip.target(), 0);
    }

    #[test]
    fn test_tick_eases_to_target() {
        let mut strip = laid_out(5, 50);
        strip.request_scroll(ScrollDirection::Forward);
        assert_eq!(strip.offset(), 0);
        assert!(strip.is_animating());

        let mut ticks = 0;
        while strip.tick() {
            ticks += 1;
            assert!(ticks < 100, "easing never settled");
        }
        assert_eq!(strip.offset(), 40);
        assert!(!strip.is_animating());
    }

    #[test]
    fn test_tick_moves_monotonically() {
        let mut strip = laid_out(5, 50);
        strip.request_scroll(ScrollDirection::Forward);
        let mut last = strip.offset();
        while strip.tick() {
            assert!(strip.offset() > last);
            last = strip.offset();
        }
    }

    #[test]
    fn test_instant_scroll_without_smoothing() {
        let mut strip = CardStrip::new(5).with_smooth_scroll(false);
        strip.set_visible_width(50);
        strip.request_scroll(ScrollDirection::Forward);
        assert_eq!(strip.offset(), 40);
        assert!(!strip.tick());
    }

    #[test]
    fn test_custom_fraction() {
        let mut strip = CardStrip::new(10).with_scroll_fraction(0.5);
        strip.set_visible_width(60);
        let req = strip.request_scroll(ScrollDirection::Forward).unwrap();
        assert_eq!(req.delta, 30);
    }

    #[test]
    fn test_scroll_into_view_forward_and_back() {
        let mut strip = CardStrip::new(5).with_smooth_scroll(false);
        strip.set_visible_width(50);

        // Card 3 spans 78..102
        strip.scroll_into_view(3);
        assert_eq!(strip.offset(), 52);

        // Card 0 spans 0..24
        strip.scroll_into_view(0);
        assert_eq!(strip.offset(), 0);
    }

    #[test]
    fn test_scroll_into_view_visible_card_is_noop() {
        let mut strip = laid_out(5, 50);
        strip.scroll_into_view(1);
        assert_eq!(strip.target(), 0);
    }

    #[test]
    fn test_widening_viewport_reclamps() {
        let mut strip = CardStrip::new(5).with_smooth_scroll(false);
        strip.set_visible_width(50);
        strip.request_scroll(ScrollDirection::Forward);
        strip.request_scroll(ScrollDirection::Forward);
        assert_eq!(strip.offset(), 78);

        strip.set_visible_width(120);
        assert_eq!(strip.offset(), 8);
        assert_eq!(strip.target(), 8);
    }

    #[test]
    fn test_content_width() {
        assert_eq!(content_width(0), 0);
        assert_eq!(content_width(1), CARD_WIDTH);
        assert_eq!(content_width(3), 3 * CARD_WIDTH + 2 * CARD_GAP);
    }
}
