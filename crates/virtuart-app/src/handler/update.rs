//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, info};

use crate::focus::Focus;
use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{activate, keys::handle_key, pointer, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Click { column, row } => match pointer::handle_click(state, column, row) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Wheel {
            column,
            row,
            direction,
        } => match pointer::handle_wheel(state, column, row, direction) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.card_strip.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Carousel Messages
        // ─────────────────────────────────────────────────────────
        Message::AutoAdvance | Message::NextSlide => {
            state.carousel.next();
            debug!("Slide {}", state.carousel.index());
            UpdateResult::none()
        }

        Message::PreviousSlide => {
            state.carousel.previous();
            debug!("Slide {}", state.carousel.index());
            UpdateResult::none()
        }

        Message::GoToSlide(n) => {
            state.carousel.go_to(n);
            debug!("Slide {} (requested {})", state.carousel.index(), n);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Category Strip Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollCards(direction) => {
            match state.card_strip.request_scroll(direction) {
                Some(request) => debug!("Card strip scroll by {}", request.delta),
                None => debug!("Card strip not laid out yet, scroll ignored"),
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Card Modal Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectCard(index) => {
            if state.select_card(index) {
                state.card_strip.scroll_into_view(index);
                state.focus.set(Focus::ModalClose);
                debug!("Opened card {}", index);
            }
            UpdateResult::none()
        }

        Message::DismissCard => {
            if !state.selection.is_open() {
                return UpdateResult::none();
            }
            let reopened = state.selection.selected().and_then(|c| state.card_index(&c.id));
            state.selection.dismiss();
            // Return focus to the card that opened the modal
            match reopened {
                Some(index) => state.focus.set(Focus::Card(index)),
                None => state.focus.clear(),
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => move_focus(state, true),
        Message::FocusPrevious => move_focus(state, false),

        Message::Activate => match state.focus.current() {
            Some(focus) => match activate::activate(state, focus) {
                Some(msg) => UpdateResult::message(msg),
                None => UpdateResult::none(),
            },
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate(route) => {
            info!("Navigate to {}", route);
            state.status = Some(format!("→ {}", route.path()));
            UpdateResult::action(UpdateAction::Navigate(route))
        }
    }
}

/// Tab / Shift+Tab. Focus stays on the close control while the modal is open.
fn move_focus(state: &mut AppState, forward: bool) -> UpdateResult {
    if state.selection.is_open() {
        state.focus.set(Focus::ModalClose);
        return UpdateResult::none();
    }
    let focus = if forward {
        state.focus.next()
    } else {
        state.focus.previous()
    };
    if let Focus::Card(index) = focus {
        state.card_strip.scroll_into_view(index);
    }
    UpdateResult::none()
}
