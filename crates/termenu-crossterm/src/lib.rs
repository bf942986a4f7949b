//! Crossterm terminal driver for termenu.
//!
//! Provides a [`CrosstermDriver`] that implements [`termenu_core::Driver`],
//! holding the terminal in raw mode for the duration of a run and turning
//! crossterm key events into [`MenuEvent`]s.

use std::io::{self, Stdout};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use termenu_core::{DecodeError, Driver, Menu, MenuEvent, Selection};

/// Maps a crossterm [`Event`] to a [`MenuEvent`].
///
/// Only key presses count; releases, mouse, resize and focus events are
/// ignored.
pub fn decode(ev: &Event) -> MenuEvent {
    match ev {
        Event::Key(key) => decode_key(key),
        _ => MenuEvent::Ignore,
    }
}

fn decode_key(key: &KeyEvent) -> MenuEvent {
    if key.kind == KeyEventKind::Release {
        return MenuEvent::Ignore;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c' | 'C'))
    {
        return MenuEvent::CtrlC;
    }
    // Shift is part of typing upper-case letters; any other modifier
    // turns the key into something the menu does not handle.
    if !key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
        return MenuEvent::Ignore;
    }
    match key.code {
        KeyCode::Up => MenuEvent::Up,
        KeyCode::Down => MenuEvent::Down,
        KeyCode::Left | KeyCode::PageUp => MenuEvent::PageUp,
        KeyCode::Right | KeyCode::PageDown => MenuEvent::PageDown,
        KeyCode::Enter => MenuEvent::Enter,
        KeyCode::Esc => MenuEvent::Escape,
        KeyCode::Backspace => MenuEvent::Backspace,
        KeyCode::Char(c) if !c.is_whitespace() && !c.is_control() => MenuEvent::Filter(c),
        _ => MenuEvent::Ignore,
    }
}

/// A terminal back-end for termenu using crossterm and stdout.
pub struct CrosstermDriver {
    out: Stdout,
    raw: bool,
}

impl CrosstermDriver {
    /// Create a new driver. The terminal is left untouched until
    /// [`Driver::init`].
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            raw: false,
        }
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for CrosstermDriver {
    type Output = Stdout;

    fn init(&mut self) -> io::Result<()> {
        #[cfg(windows)]
        enable_virtual_terminal();
        terminal::enable_raw_mode()?;
        self.raw = true;
        Ok(())
    }

    fn read_event(&mut self) -> Result<MenuEvent, DecodeError> {
        Ok(decode(&event::read()?))
    }

    fn output(&mut self) -> &mut Stdout {
        &mut self.out
    }

    fn close(&mut self) {
        if self.raw {
            if let Err(e) = terminal::disable_raw_mode() {
                log::warn!("failed to leave raw mode: {e}");
            }
            self.raw = false;
        }
    }
}

impl Drop for CrosstermDriver {
    fn drop(&mut self) {
        self.close();
    }
}

/// Consoles that default to ignoring escape sequences get VT processing
/// switched on here.
#[cfg(windows)]
fn enable_virtual_terminal() {
    if !crossterm::ansi_support::supports_ansi() {
        log::warn!("console does not interpret ANSI escape sequences");
    }
}

/// Run `menu` on the process terminal.
pub fn run<T>(menu: &mut Menu<T>) -> termenu_core::Result<Selection<'_, T>> {
    let mut driver = CrosstermDriver::new();
    menu.run(&mut driver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn key_mod(code: KeyCode, mods: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, mods))
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(decode(&key(KeyCode::Up)), MenuEvent::Up);
        assert_eq!(decode(&key(KeyCode::Down)), MenuEvent::Down);
        assert_eq!(decode(&key(KeyCode::Left)), MenuEvent::PageUp);
        assert_eq!(decode(&key(KeyCode::PageUp)), MenuEvent::PageUp);
        assert_eq!(decode(&key(KeyCode::Right)), MenuEvent::PageDown);
        assert_eq!(decode(&key(KeyCode::PageDown)), MenuEvent::PageDown);
    }

    #[test]
    fn control_keys() {
        assert_eq!(decode(&key(KeyCode::Enter)), MenuEvent::Enter);
        assert_eq!(decode(&key(KeyCode::Esc)), MenuEvent::Escape);
        assert_eq!(decode(&key(KeyCode::Backspace)), MenuEvent::Backspace);
        assert_eq!(
            decode(&key_mod(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            MenuEvent::CtrlC
        );
    }

    #[test]
    fn printable_characters_extend_the_filter() {
        assert_eq!(decode(&key(KeyCode::Char('a'))), MenuEvent::Filter('a'));
        assert_eq!(decode(&key(KeyCode::Char('~'))), MenuEvent::Filter('~'));
        assert_eq!(decode(&key(KeyCode::Char('项'))), MenuEvent::Filter('项'));
        assert_eq!(
            decode(&key_mod(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            MenuEvent::Filter('A')
        );
    }

    #[test]
    fn everything_else_is_ignored() {
        assert_eq!(decode(&key(KeyCode::Char(' '))), MenuEvent::Ignore);
        assert_eq!(decode(&key(KeyCode::Tab)), MenuEvent::Ignore);
        assert_eq!(decode(&key(KeyCode::F(1))), MenuEvent::Ignore);
        assert_eq!(
            decode(&key_mod(KeyCode::Char('x'), KeyModifiers::ALT)),
            MenuEvent::Ignore
        );
        assert_eq!(
            decode(&key_mod(KeyCode::Up, KeyModifiers::CONTROL)),
            MenuEvent::Ignore
        );
        assert_eq!(decode(&Event::Resize(80, 24)), MenuEvent::Ignore);
        assert_eq!(decode(&Event::FocusGained), MenuEvent::Ignore);
    }

    #[test]
    fn key_releases_are_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(decode(&release), MenuEvent::Ignore);
    }

    #[test]
    fn close_without_init_is_harmless() {
        let mut driver = CrosstermDriver::new();
        driver.close();
        driver.close();
        assert!(!driver.raw);
    }
}
