//! Logical input events and the [`Driver`] trait that produces them.

use std::io::{self, Write};

use crate::error::DecodeError;

/// The closed set of events the menu reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MenuEvent {
    Up,
    Down,
    /// Left arrow or Page Up.
    PageUp,
    /// Right arrow or Page Down.
    PageDown,
    Escape,
    Enter,
    CtrlC,
    Backspace,
    /// A character appended to the filter.
    Filter(char),
    /// Anything else, including unreadable input.
    Ignore,
}

/// Terminal back-end used by [`Menu::run`](crate::Menu::run).
///
/// A driver owns the raw-mode state and the output stream. The menu calls
/// [`init`](Driver::init) once before drawing and [`close`](Driver::close)
/// on every exit path, so `close` must be safe to call more than once.
pub trait Driver {
    /// Stream that frames are written to.
    type Output: Write;

    /// Put the terminal into the mode needed for key-by-key reads.
    fn init(&mut self) -> io::Result<()>;

    /// Block until one key is available and decode it.
    fn read_event(&mut self) -> Result<MenuEvent, DecodeError>;

    /// The output stream.
    fn output(&mut self) -> &mut Self::Output;

    /// Restore the terminal.
    fn close(&mut self);
}
