//! Card detail modal state

use virtuart_core::CategoryCard;

/// Which category card, if any, is opened in the detail modal.
///
/// `Closed --select(c)--> Open(c)`, `Open(a) --select(b)--> Open(b)`,
/// `Open(_) --dismiss--> Closed`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Closed,
    Open(CategoryCard),
}

impl SelectionState {
    /// Open `card`, replacing any card already shown
    pub fn select(&mut self, card: CategoryCard) {
        *self = SelectionState::Open(card);
    }

    /// Close the modal. No-op when already closed.
    pub fn dismiss(&mut self) {
        *self = SelectionState::Closed;
    }

    pub fn selected(&self) -> Option<&CategoryCard> {
        match self {
            SelectionState::Open(card) => Some(card),
            SelectionState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, SelectionState::Open(_))
    }
}
