//! **termenu-core**: paginated, filterable selection menu for text
//! terminals.
//!
//! The engine lays items out once, keeps a filtered and paginated view of
//! them, redraws a fixed-height block in place with ANSI sequences, and
//! turns logical key events from a [`Driver`] into cursor and filter
//! changes until the user confirms or cancels.

pub mod config;
pub mod error;
pub mod event;
pub mod item;
mod layout;
pub mod menu;
mod render;
pub mod style;
pub mod view;
pub mod width;

pub use config::{FooterText, MenuConfig};
pub use error::{ActionError, DecodeError, MenuError, Result, StyleError};
pub use event::{Driver, MenuEvent};
pub use item::{Action, Item};
pub use menu::{Menu, Selection};
pub use style::{Color, SgrStyle};
pub use view::View;
pub use width::display_width;
