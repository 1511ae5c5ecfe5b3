//! Terminal event conversion

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use virtuart_app::{InputKey, Message, ScrollDirection};

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        _ => None,
    }
}

/// Convert a mouse event into a pointer message
pub fn mouse_event_to_message(mouse: MouseEvent) -> Option<Message> {
    let (column, row) = (mouse.column, mouse.row);
    let direction = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => return Some(Message::Click { column, row }),
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => ScrollDirection::Forward,
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => ScrollDirection::Backward,
        _ => return None,
    };
    Some(Message::Wheel {
        column,
        row,
        direction,
    })
}

/// Convert any terminal event into a message. Resizes need no message: the
/// next frame lays out against the new size.
pub fn to_message(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(mouse) => mouse_event_to_message(mouse),
        _ => None,
    }
}
