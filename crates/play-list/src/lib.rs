//! `play-list` is a carousel component for [ratatui](https://ratatui.rs): a container that shows
//! one [`slide::Slide`] at a time, with arrow, dot, keyboard, and mouse navigation.
//!
//! ## Getting started
//!
//! ```
//! use play_list::play_list::PlayList;
//! use play_list::slide::Slide;
//!
//! let mut list = PlayList::from_slides([
//!     Slide::new("week 1", "Welcome").with_body("Intro material."),
//!     Slide::new("week 2", "Tooling"),
//! ]);
//! list.next();
//! assert_eq!(list.index(), 1);
//! assert!(list.slides()[1].is_active());
//! ```
//!
//! The app owns the event loop: feed [`input::InputEvent`]s to
//! [`play_list::PlayList::handle_event`] and call [`play_list::PlayList::render`] each frame. With
//! the `crossterm` feature, [`crossterm_input`] converts terminal events.
pub mod controls;
pub mod help;
pub mod play_list;
pub mod slide;

pub use play_list_core::error;
pub use play_list_core::input;
pub use play_list_core::keymap;
pub use play_list_core::nav;
pub use play_list_core::scroll;
pub use play_list_core::theme;
pub use play_list_core::variant;

#[cfg(feature = "crossterm")]
pub use play_list_core::crossterm_input;
