//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use virtuart_app::{AppState, Focus, HitMap, HitTarget, Region, ScrollDirection};

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete page (View function in TEA)
///
/// Besides drawing, the view records the frame's pointer regions in
/// `state.hit_map` and the laid-out strip width in `state.card_strip`.
/// Nothing else in the state is touched.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    state.hit_map.clear();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let focus = state.focus.current();

    // Header
    let header = widgets::Header::new(&state.settings.ui.brand, focus);
    for (route, rect) in header.nav_rects(areas.header) {
        push(&mut state.hit_map, rect, HitTarget::Element(Focus::Nav(route)));
    }
    frame.render_widget(header, areas.header);

    // Hero: carousel + copy
    let carousel = widgets::CarouselView::new(&state.carousel, focus);
    let rects = carousel.rects(areas.carousel);
    frame.render_widget(carousel, areas.carousel);
    push(&mut state.hit_map, rects.prev, HitTarget::Element(Focus::PrevSlide));
    push(&mut state.hit_map, rects.next, HitTarget::Element(Focus::NextSlide));
    for (i, dot) in rects.dots.into_iter().enumerate() {
        push(&mut state.hit_map, dot, HitTarget::Element(Focus::Dot(i)));
    }

    let hero = widgets::HeroCopy::new(focus);
    for (i, rect) in hero.action_rects(areas.hero_copy).into_iter().enumerate() {
        push(&mut state.hit_map, rect, HitTarget::Element(Focus::HeroAction(i)));
    }
    frame.render_widget(hero, areas.hero_copy);

    render_categories(frame, state, areas.categories, focus);

    // Features
    let grid = widgets::FeatureGrid::new(&state.features, focus);
    for (i, rect) in grid.link_rects(areas.features).into_iter().enumerate() {
        push(&mut state.hit_map, rect, HitTarget::Element(Focus::FeatureLink(i)));
    }
    frame.render_widget(grid, areas.features);

    // Footer
    let footer = widgets::Footer::new(&state.settings.ui.brand, focus);
    for (i, rect) in footer.link_rects(areas.footer).into_iter().enumerate() {
        push(&mut state.hit_map, rect, HitTarget::Element(Focus::FooterLink(i)));
    }
    frame.render_widget(footer, areas.footer);

    frame.render_widget(
        widgets::StatusBar::new(state.status.as_deref(), state.selection.is_open()),
        areas.status,
    );

    // Card modal goes last so its regions shadow the page
    if let Some(card) = state.selection.selected() {
        let modal = widgets::CardModal::modal_rect(area);
        let close = widgets::CardModal::close_rect(modal);
        frame.render_widget(
            widgets::CardModal::new(card, focus == Some(Focus::ModalClose)),
            area,
        );
        push(&mut state.hit_map, area, HitTarget::ModalBackdrop);
        push(&mut state.hit_map, modal, HitTarget::ModalContent);
        push(&mut state.hit_map, close, HitTarget::Element(Focus::ModalClose));
    }
}

/// Category heading, scroll controls and the card viewport
fn render_categories(frame: &mut Frame, state: &mut AppState, area: Rect, focus: Option<Focus>) {
    let strip = layout::strip_areas(area);

    // The strip learns its viewport here; scroll requests before the first
    // frame are ignored.
    state.card_strip.set_visible_width(strip.viewport.width as usize);

    widgets::render_heading(&strip, frame.buffer_mut());

    let offset = state.card_strip.offset();
    let max_offset = state.card_strip.max_offset();
    frame.render_widget(
        widgets::ScrollControl::new(
            ScrollDirection::Backward,
            focus == Some(Focus::ScrollLeft),
            offset > 0,
        ),
        strip.scroll_left,
    );
    frame.render_widget(
        widgets::ScrollControl::new(
            ScrollDirection::Forward,
            focus == Some(Focus::ScrollRight),
            offset < max_offset,
        ),
        strip.scroll_right,
    );

    let cards = widgets::CardStripView::new(&state.cards, offset, focus);
    let card_rects = cards.card_rects(strip.viewport);
    frame.render_widget(cards, strip.viewport);

    push(&mut state.hit_map, strip.viewport, HitTarget::CardStrip);
    push(&mut state.hit_map, strip.scroll_left, HitTarget::Element(Focus::ScrollLeft));
    push(&mut state.hit_map, strip.scroll_right, HitTarget::Element(Focus::ScrollRight));
    for (i, rect) in card_rects {
        push(&mut state.hit_map, rect, HitTarget::Element(Focus::Card(i)));
    }
}

fn push(hit_map: &mut HitMap, rect: Rect, target: HitTarget) {
    hit_map.push(Region::new(rect.x, rect.y, rect.width, rect.height), target);
}
