//! Message processing: runs the update loop and dispatches actions

use tracing::warn;

use crate::handler::{update, UpdateAction};
use crate::message::Message;
use crate::navigator::Navigator;
use crate::state::AppState;

/// Upper bound on follow-up messages chained from one input
const MAX_FOLLOW_UPS: usize = 16;

/// Process a message through the TEA update function.
///
/// Follow-up messages are processed in turn; actions go to `navigator`.
pub fn process_message(state: &mut AppState, message: Message, navigator: &mut dyn Navigator) {
    let mut msg = Some(message);
    let mut steps = 0;

    while let Some(m) = msg {
        if steps == MAX_FOLLOW_UPS {
            warn!("Dropping follow-up chain at {:?}", m);
            break;
        }
        steps += 1;

        let result = update(state, m);

        if let Some(action) = result.action {
            handle_action(action, navigator);
        }

        msg = result.message;
    }
}

fn handle_action(action: UpdateAction, navigator: &mut dyn Navigator) {
    match action {
        UpdateAction::Navigate(route) => navigator.navigate(route),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::Focus;
    use crate::input_key::InputKey;
    use crate::navigator::LogNavigator;
    use virtuart_core::Route;

    #[test]
    fn test_key_chain_reaches_navigator() {
        let mut state = AppState::with_defaults();
        let mut nav = LogNavigator::new();
        state.focus.set(Focus::Nav(Route::Login));

        process_message(&mut state, Message::Key(InputKey::Enter), &mut nav);

        assert_eq!(nav.last(), Some(Route::Login));
    }

    #[test]
    fn test_key_chain_updates_state() {
        let mut state = AppState::with_defaults();
        let mut nav = LogNavigator::new();

        process_message(&mut state, Message::Key(InputKey::Right), &mut nav);

        assert_eq!(state.carousel.index(), 1);
        assert!(nav.last().is_none());
    }
}
