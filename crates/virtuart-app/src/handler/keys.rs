//! Key event handlers for the page and the card modal

use crate::card_strip::ScrollDirection;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on whether the card modal is open
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Arrow keys drive the carousel from anywhere on the page
    match key {
        InputKey::Left => return Some(Message::PreviousSlide),
        InputKey::Right => return Some(Message::NextSlide),
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        _ => {}
    }

    if state.selection.is_open() {
        handle_key_modal(key)
    } else {
        handle_key_page(state, key)
    }
}

/// Handle key events while the card modal is open
fn handle_key_modal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::DismissCard),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::Activate),
        // Focus stays inside the modal
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrevious),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events on the page
fn handle_key_page(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        // Focus
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrevious),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::Activate),

        // Carousel: 1-9 jump to an existing slide, Home/End to the ends
        InputKey::Char('1'..='9') => key
            .slide_digit()
            .filter(|&n| n < state.carousel.len())
            .map(|n| Message::GoToSlide(n as i64)),
        InputKey::Home => Some(Message::GoToSlide(0)),
        InputKey::End => Some(Message::GoToSlide(-1)),

        // Category strip
        InputKey::Char('[') | InputKey::Char('h') => {
            Some(Message::ScrollCards(ScrollDirection::Backward))
        }
        InputKey::Char(']') | InputKey::Char('l') => {
            Some(Message::ScrollCards(ScrollDirection::Forward))
        }

        _ => None,
    }
}
