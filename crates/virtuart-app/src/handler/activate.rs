//! Activation of focusable elements (Enter/Space or a click)

use crate::card_strip::ScrollDirection;
use crate::focus::Focus;
use crate::message::Message;
use crate::page::{FOOTER_LINKS, HERO_ACTIONS};
use crate::state::AppState;

/// Message produced by activating `focus`, if it does anything
pub fn activate(state: &AppState, focus: Focus) -> Option<Message> {
    match focus {
        Focus::Nav(route) => Some(Message::Navigate(route)),
        Focus::PrevSlide => Some(Message::PreviousSlide),
        Focus::NextSlide => Some(Message::NextSlide),
        Focus::Dot(index) => Some(Message::GoToSlide(index as i64)),
        Focus::HeroAction(index) => HERO_ACTIONS
            .get(index)
            .map(|(_, route)| Message::Navigate(*route)),
        Focus::ScrollLeft => Some(Message::ScrollCards(ScrollDirection::Backward)),
        Focus::Card(index) => Some(Message::SelectCard(index)),
        Focus::ScrollRight => Some(Message::ScrollCards(ScrollDirection::Forward)),
        Focus::FeatureLink(index) => state
            .features
            .get(index)
            .map(|feature| Message::Navigate(feature.route)),
        Focus::FooterLink(index) => FOOTER_LINKS
            .get(index)
            .map(|(_, route)| Message::Navigate(*route)),
        Focus::ModalClose => Some(Message::DismissCard),
    }
}
