//! virtuart-app - Application state and orchestration for the VirtuArt gallery
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! landing page: the carousel, the category strip, the card modal and the
//! focus ring are plain state mutated by [`handler::update`]. Background
//! producers (auto-advance timer, terminal event listener, signal handler)
//! live in scoped [`Subscription`]s owned by a [`GalleryMount`].

pub mod card_strip;
pub mod carousel;
pub mod config;
pub mod focus;
pub mod handler;
pub mod hit_map;
pub mod input_key;
pub mod message;
pub mod mount;
pub mod navigator;
pub mod page;
pub mod process;
pub mod selection;
pub mod signals;
pub mod state;
pub mod subscription;

// Re-export primary types
pub use card_strip::{CardStrip, ScrollDirection, ScrollRequest};
pub use carousel::Carousel;
pub use focus::{Focus, FocusRing};
pub use handler::{UpdateAction, UpdateResult};
pub use hit_map::{HitMap, HitTarget, Region};
pub use input_key::InputKey;
pub use message::Message;
pub use mount::{EventSource, GalleryMount};
pub use navigator::{LogNavigator, Navigator};
pub use selection::SelectionState;
pub use state::AppState;
pub use subscription::Subscription;
