//! Terminal input listener.
//!
//! Reads crossterm's async event stream inside a [`Subscription`] so the
//! listener is attached only while the gallery is mounted.

use crossterm::event::EventStream;
use futures_util::StreamExt;
use tokio::sync::mpsc;
use tracing::{debug, warn};
use virtuart_app::{EventSource, Message, Subscription};

use crate::event;

/// Key and mouse events from the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn listen(self, tx: mpsc::Sender<Message>) -> Subscription {
        Subscription::spawn("terminal-input", move |mut shutdown| async move {
            let mut events = EventStream::new();
            loop {
                tokio::select! {
                    _ = shutdown.changed() => break,
                    next = events.next() => match next {
                        Some(Ok(ev)) => {
                            let Some(msg) = event::to_message(ev) else {
                                continue;
                            };
                            if tx.send(msg).await.is_err() {
                                break;
                            }
                        }
                        Some(Err(e)) => {
                            warn!("Terminal event error: {}", e);
                            break;
                        }
                        None => break,
                    }
                }
            }
            debug!("Terminal input listener stopped");
        })
    }
}
