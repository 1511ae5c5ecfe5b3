//! Keyboard focus over the interactive elements of the page.
//!
//! The ring follows document order, the same order a browser walks with Tab:
//! header navigation, carousel controls, dots, hero actions, the category
//! strip (left control, cards, right control), feature links and footer links.

use virtuart_core::Route;

use crate::page::{FOOTER_LINKS, HERO_ACTIONS};

/// An interactive element that can hold focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    /// Header navigation link
    Nav(Route),
    /// Carousel "previous slide" control
    PrevSlide,
    /// Carousel "next slide" control
    NextSlide,
    /// Carousel dot for slide `n`
    Dot(usize),
    /// Hero call-to-action `n` (see [`HERO_ACTIONS`])
    HeroAction(usize),
    /// Strip "scroll left" control
    ScrollLeft,
    /// Category card `n`
    Card(usize),
    /// Strip "scroll right" control
    ScrollRight,
    /// Feature grid link `n`
    FeatureLink(usize),
    /// Footer link `n` (see [`FOOTER_LINKS`])
    FooterLink(usize),
    /// Close control of the card modal
    ModalClose,
}

/// Focus position plus the element counts needed to build the ring
#[derive(Debug, Clone, Default)]
pub struct FocusRing {
    current: Option<Focus>,
    slides: usize,
    cards: usize,
    features: usize,
}

impl FocusRing {
    pub fn new(slides: usize, cards: usize, features: usize) -> Self {
        Self {
            current: None,
            slides,
            cards,
            features,
        }
    }

    pub fn current(&self) -> Option<Focus> {
        self.current
    }

    pub fn is_focused(&self, focus: Focus) -> bool {
        self.current == Some(focus)
    }

    pub fn set(&mut self, focus: Focus) {
        self.current = Some(focus);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// All page elements in document order (the modal is not part of it)
    pub fn order(&self) -> Vec<Focus> {
        let mut order: Vec<Focus> = Route::NAV.iter().copied().map(Focus::Nav).collect();
        order.push(Focus::PrevSlide);
        order.push(Focus::NextSlide);
        order.extend((0..self.slides).map(Focus::Dot));
        order.extend((0..HERO_ACTIONS.len()).map(Focus::HeroAction));
        order.push(Focus::ScrollLeft);
        order.extend((0..self.cards).map(Focus::Card));
        order.push(Focus::ScrollRight);
        order.extend((0..self.features).map(Focus::FeatureLink));
        order.extend((0..FOOTER_LINKS.len()).map(Focus::FooterLink));
        order
    }

    /// Move focus forward, wrapping. With nothing focused, lands on the first element.
    pub fn next(&mut self) -> Focus {
        self.step(1)
    }

    /// Move focus backward, wrapping. With nothing focused, lands on the last element.
    pub fn previous(&mut self) -> Focus {
        self.step(-1)
    }

    fn step(&mut self, delta: i64) -> Focus {
        let order = self.order();
        let len = order.len() as i64;
        let position = self
            .current
            .and_then(|f| order.iter().position(|o| *o == f));
        let next = match position {
            Some(pos) => (pos as i64 + delta).rem_euclid(len),
            None if delta >= 0 => 0,
            None => len - 1,
        };
        let focus = order[next as usize];
        self.current = Some(focus);
        focus
    }
}
