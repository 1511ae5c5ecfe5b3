//! Message types for the application (TEA pattern)

use crate::card_strip::ScrollDirection;
use crate::input_key::InputKey;
use virtuart_core::Route;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Primary-button press at a terminal cell
    Click { column: u16, row: u16 },

    /// Mouse wheel at a terminal cell
    Wheel {
        column: u16,
        row: u16,
        direction: ScrollDirection,
    },

    /// Frame tick for animations (card strip easing)
    Tick,

    /// Fired by the auto-advance subscription
    AutoAdvance,

    /// Force quit (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Carousel Messages
    // ─────────────────────────────────────────────────────────
    /// Advance to the next slide
    NextSlide,
    /// Go back to the previous slide
    PreviousSlide,
    /// Jump to a slide, normalized into range
    GoToSlide(i64),

    // ─────────────────────────────────────────────────────────
    // Category Strip Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll the category strip by one step
    ScrollCards(ScrollDirection),

    // ─────────────────────────────────────────────────────────
    // Card Modal Messages
    // ─────────────────────────────────────────────────────────
    /// Open the modal for the card at this position
    SelectCard(usize),
    /// Close the card modal
    DismissCard,

    // ─────────────────────────────────────────────────────────
    // Focus Messages
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next element (Tab)
    FocusNext,
    /// Move focus to the previous element (Shift+Tab)
    FocusPrevious,
    /// Activate the focused element (Enter/Space)
    Activate,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Follow an outbound link
    Navigate(Route),
}
