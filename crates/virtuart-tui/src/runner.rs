//! Main TUI runner - entry point and event loop
//!
//! Lifecycle:
//! - build the state (fails before touching the terminal if content is unusable)
//! - init the terminal and mount the gallery (auto-advance + input listener)
//! - run the loop until quit
//! - unmount, stop the signal handler, restore the terminal

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use virtuart_app::config::{GalleryContent, Settings};
use virtuart_app::message::Message;
use virtuart_app::process::process_message;
use virtuart_app::signals::spawn_signal_handler;
use virtuart_app::{AppState, GalleryMount, LogNavigator, Navigator};
use virtuart_core::prelude::*;

use crate::listener::TerminalEvents;
use crate::{render, terminal};

/// Run the gallery page until the user quits
pub async fn run(content: GalleryContent, settings: Settings) -> Result<()> {
    let mut state = AppState::new(content, settings)?;

    // Install panic hook for terminal restoration
    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    // Unified message channel for every producer
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Sends Message::Quit on SIGINT/SIGTERM
    let signals = spawn_signal_handler(msg_tx.clone());
    let mount = GalleryMount::mount(&state.settings, TerminalEvents, msg_tx);

    let mut navigator = LogNavigator::new();
    let result = run_loop(&mut term, &mut state, msg_rx, &mut navigator).await;

    mount.unmount().await;
    signals.shutdown().await;
    terminal::restore();

    if let Some(route) = navigator.last() {
        info!("Last followed link: {}", route.path());
    }
    result
}

/// Main event loop: draw, then wait for the next message or animation tick
async fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    navigator: &mut dyn Navigator,
) -> Result<()> {
    let mut ticker = tokio::time::interval(state.settings.ui.tick_rate());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    while !state.should_quit() {
        terminal.draw(|frame| render::view(frame, state))?;

        tokio::select! {
            next = msg_rx.recv() => match next {
                Some(msg) => process_message(state, msg, navigator),
                None => {
                    warn!("All message producers stopped, exiting");
                    break;
                }
            },
            // Ticks only matter while the card strip is easing
            _ = ticker.tick(), if state.card_strip.is_animating() => {
                process_message(state, Message::Tick, navigator);
            }
        }

        // Drain whatever queued up while drawing
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, navigator);
        }
    }

    Ok(())
}
