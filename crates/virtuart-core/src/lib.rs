//! # virtuart-core - Core Domain Types
//!
//! Foundation crate for the VirtuArt gallery. Provides the content types shown
//! on the landing page, the navigation routes, error handling and logging.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, toml, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Slide`] - One carousel entry (image reference + caption)
//! - [`CategoryCard`] - One clickable category tile, expandable into a modal
//! - [`Feature`] - One feature-grid entry with an outbound link
//! - [`Route`] - Outbound navigation targets (home, about, contact, login, register)
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use virtuart_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

pub use error::{Error, Result, ResultExt};
pub use types::{CategoryCard, Feature, Route, Slide};
