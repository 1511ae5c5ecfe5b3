//! Keys the gallery reacts to.
//!
//! The app layer never sees crossterm types; the TUI converts at the boundary
//! and drops every key that is not listed here.

/// A key press, independent of the terminal library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character, including `' '`
    Char(char),
    /// Character typed with Ctrl held
    CharCtrl(char),

    // Carousel
    Left,
    Right,
    Home,
    End,

    // Focus and activation
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
}

impl InputKey {
    /// Digit keys `1`..=`9` as a zero-based slide index
    pub fn slide_digit(self) -> Option<usize> {
        match self {
            InputKey::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
            _ => None,
        }
    }
}
