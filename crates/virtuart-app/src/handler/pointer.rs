//! Pointer handlers. Presses and wheel events resolve through the hit map
//! recorded by the last render.

use tracing::trace;

use crate::card_strip::ScrollDirection;
use crate::hit_map::HitTarget;
use crate::message::Message;
use crate::state::AppState;

use super::activate;

/// Primary-button press at (`column`, `row`)
pub fn handle_click(state: &mut AppState, column: u16, row: u16) -> Option<Message> {
    let target = state.hit_map.hit(column, row);
    trace!("Click at ({}, {}) -> {:?}", column, row, target);

    match target? {
        HitTarget::Element(focus) => {
            state.focus.set(focus);
            activate::activate(state, focus)
        }
        // Presses inside the modal body stop there
        HitTarget::ModalContent => None,
        HitTarget::ModalBackdrop => Some(Message::DismissCard),
        HitTarget::CardStrip => None,
    }
}

/// Wheel at (`column`, `row`). Only the category strip reacts, and not while
/// the modal covers it.
pub fn handle_wheel(
    state: &AppState,
    column: u16,
    row: u16,
    direction: ScrollDirection,
) -> Option<Message> {
    if state.selection.is_open() {
        return None;
    }
    if state.hit_map.is_over(column, row, HitTarget::CardStrip) {
        Some(Message::ScrollCards(direction))
    } else {
        None
    }
}
