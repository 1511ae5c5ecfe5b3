//! Configuration file parsing for the VirtuArt gallery
//!
//! Supports:
//! - `.virtuart/config.toml` - Behaviour settings
//! - `.virtuart/content.toml` - Slides, category cards and features

pub mod settings;
pub mod types;

pub use settings::{content_path, init_config_dir, load_content, load_settings, settings_path};
pub use types::*;
