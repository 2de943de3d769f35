//! `play-list-core` provides the building blocks behind the `play-list` carousel.
//!
//! - [`nav::NavState`]: the index state machine (wrap or clamp, structural re-validation).
//! - [`input`], [`keymap`], [`nav::NavBindings`], [`scroll::ScrollBindings`]: backend-neutral
//!   input and configurable key bindings. Enable the `crossterm` feature for
//!   [`crossterm_input`] conversions.
//! - [`viewport`], [`wrapping`], [`render`]: the text plumbing used to draw a slide body into a
//!   ratatui buffer.
//!
//! Everything runs synchronously on the caller's thread; the app owns the event loop.
pub mod error;
pub mod theme;
pub mod variant;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod input;
pub mod keymap;
pub mod nav;
pub mod scroll;

pub mod render;
pub mod viewport;
pub mod wrapping;

pub use error::PlayListError;
pub use error::Result;
