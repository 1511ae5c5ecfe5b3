//! Full-screen render tests

use super::view;
use crate::test_utils::{create_test_state, TestTerminal};
use virtuart_app::handler::update;
use virtuart_app::{AppState, Focus, HitTarget, Message, ScrollDirection};
use virtuart_core::Route;

fn render_page(state: &mut AppState) -> TestTerminal {
    let mut term = TestTerminal::page();
    term.draw_with(|frame| view(frame, state));
    term
}

/// Center cell of the first region registered for `focus`
fn center_of(state: &AppState, focus: Focus) -> (u16, u16) {
    let region = state
        .hit_map
        .region_of(focus)
        .unwrap_or_else(|| panic!("{focus:?} not rendered"));
    (region.x + region.width / 2, region.y + region.height / 2)
}

/// Run a message and its follow-ups
fn drive(state: &mut AppState, message: Message) {
    let mut next = Some(message);
    while let Some(msg) = next {
        next = update(state, msg).message;
    }
}

fn click(state: &mut AppState, (column, row): (u16, u16)) {
    drive(state, Message::Click { column, row });
}

#[test]
fn test_page_renders_every_section() {
    let mut state = create_test_state();
    let term = render_page(&mut state);

    assert!(term.buffer_contains("ARTGALLERY"));
    assert!(term.buffer_contains("About Us"));
    assert!(term.buffer_contains("Curated Originals"));
    assert!(term.buffer_contains("Find your next favorite artwork"));
    assert!(term.buffer_contains("Explore Categories"));
    assert!(term.buffer_contains("Abstract"));
    assert!(term.buffer_contains("Featured Artist: Maya"));
    assert!(term.buffer_contains("All rights reserved."));
}

#[test]
fn test_render_lays_out_card_strip() {
    let mut state = create_test_state();
    assert!(state.card_strip.visible_width().is_none());

    render_page(&mut state);

    // 100 columns minus the two scroll controls
    assert_eq!(state.card_strip.visible_width(), Some(94));
}

#[test]
fn test_render_records_hit_regions() {
    let mut state = create_test_state();
    render_page(&mut state);

    for focus in [
        Focus::Nav(Route::Home),
        Focus::Nav(Route::Register),
        Focus::PrevSlide,
        Focus::NextSlide,
        Focus::Dot(2),
        Focus::HeroAction(1),
        Focus::ScrollLeft,
        Focus::Card(0),
        Focus::ScrollRight,
        Focus::FeatureLink(1),
        Focus::FooterLink(2),
    ] {
        assert!(state.hit_map.region_of(focus).is_some(), "{focus:?}");
    }
    assert!(state.hit_map.region_of(Focus::ModalClose).is_none());
}

#[test]
fn test_clicking_next_control_advances_slide() {
    let mut state = create_test_state();
    render_page(&mut state);

    let point = center_of(&state, Focus::NextSlide);
    click(&mut state, point);

    assert_eq!(state.carousel.index(), 1);
    let term = render_page(&mut state);
    assert!(term.buffer_contains("Emerging Artists"));
}

#[test]
fn test_clicking_card_opens_modal() {
    let mut state = create_test_state();
    render_page(&mut state);

    let point = center_of(&state, Focus::Card(0));
    click(&mut state, point);

    assert_eq!(state.selection.selected().map(|c| c.id.as_str()), Some("abstract"));
    let term = render_page(&mut state);
    assert!(term.buffer_contains("Bold forms & colors"));
    assert!(term.buffer_contains("Esc or click outside to close"));
}

#[test]
fn test_modal_shadows_page_regions() {
    let mut state = create_test_state();
    update(&mut state, Message::SelectCard(0));
    render_page(&mut state);

    // The header link under the backdrop is no longer reachable
    let (column, row) = (1, 1);
    assert_eq!(state.hit_map.hit(column, row), Some(HitTarget::ModalBackdrop));

    let close = center_of(&state, Focus::ModalClose);
    assert_eq!(
        state.hit_map.hit(close.0, close.1),
        Some(HitTarget::Element(Focus::ModalClose))
    );
}

#[test]
fn test_backdrop_click_closes_modal() {
    let mut state = create_test_state();
    update(&mut state, Message::SelectCard(4));
    render_page(&mut state);

    click(&mut state, (0, 0));

    assert!(!state.selection.is_open());
    let term = render_page(&mut state);
    assert!(!term.buffer_contains("Esc or click outside to close"));
}

#[test]
fn test_click_inside_modal_keeps_it_open() {
    let mut state = create_test_state();
    update(&mut state, Message::SelectCard(0));
    render_page(&mut state);

    let modal = super::widgets::CardModal::modal_rect(ratatui::layout::Rect::new(0, 0, 100, 40));
    click(&mut state, (modal.x + 2, modal.y + 3));

    assert!(state.selection.is_open());
}

#[test]
fn test_scroll_control_moves_strip_after_layout() {
    let mut state = create_test_state();
    render_page(&mut state);

    let point = center_of(&state, Focus::ScrollRight);
    click(&mut state, point);

    // round(0.8 * 94) = 75, clamped to 128 - 94
    assert_eq!(state.card_strip.target(), 34);
}

#[test]
fn test_wheel_over_strip_scrolls() {
    let mut state = create_test_state();
    render_page(&mut state);

    let (column, row) = center_of(&state, Focus::Card(1));
    drive(
        &mut state,
        Message::Wheel {
            column,
            row,
            direction: ScrollDirection::Forward,
        },
    );
    assert_eq!(state.card_strip.target(), 34);
}

#[test]
fn test_status_line_shows_followed_link() {
    let mut state = create_test_state();
    update(&mut state, Message::Navigate(Route::About));
    let term = render_page(&mut state);
    assert!(term.buffer_contains("→ /about"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut state = create_test_state();
    update(&mut state, Message::SelectCard(2));
    let mut term = TestTerminal::with_size(20, 8);
    term.draw_with(|frame| view(frame, &mut state));
}
