//! Error types for menu operations.

use thiserror::Error;

/// Error returned by [`Menu::run`](crate::Menu::run).
#[derive(Error, Debug)]
pub enum MenuError {
    /// The menu was run without any items; the terminal was not touched.
    #[error("no menu item")]
    EmptyMenu,

    /// The user left the menu with Esc or Ctrl+C.
    #[error("exit without selection")]
    Cancelled,

    /// Writing a frame or acquiring the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`MenuError`].
pub type Result<T> = std::result::Result<T, MenuError>;

/// Failure of a driver's blocking key read.
///
/// The run loop never propagates this; a failed read counts as an ignored key.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The underlying read failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// No key event could be produced from the raw input.
    #[error("input unavailable")]
    Unavailable,
}

/// Error type returned by an item's action.
pub type ActionError = Box<dyn std::error::Error + Send + Sync>;

/// Error produced by the strict style parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// The string is not a single `ESC [ <digits/;> m` sequence.
    #[error("invalid SGR sequence: {0:?}")]
    InvalidSgr(String),

    /// A legacy colour code outside the 30..=37 range.
    #[error("colour code out of range: {0}")]
    ColorOutOfRange(u8),
}
