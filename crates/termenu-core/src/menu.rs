//! The [`Menu`] and its run loop.

use std::cmp::Ordering;
use std::io::{self, Write};

use crossterm::{cursor, queue};

use crate::config::{FooterText, MenuConfig};
use crate::error::{ActionError, MenuError, Result};
use crate::event::{Driver, MenuEvent};
use crate::item::Item;
use crate::layout::{Layout, layout};
use crate::render::{FrameCache, clear_region};
use crate::style::SgrStyle;
use crate::view::View;

// ---------------------------------------------------------------------------
// RunState / Selection
// ---------------------------------------------------------------------------

/// State of the run loop after applying one event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum RunState {
    Running,
    /// The item at this index was confirmed.
    Confirmed(usize),
    Cancelled,
}

/// Outcome of a confirmed run: the chosen item and what its action returned.
#[derive(Debug)]
pub struct Selection<'a, T> {
    pub item: &'a Item<T>,
    pub result: std::result::Result<(), ActionError>,
}

impl<'a, T> Selection<'a, T> {
    /// The item if its action succeeded, the action's error otherwise.
    pub fn into_result(self) -> std::result::Result<&'a Item<T>, ActionError> {
        self.result.map(|()| self.item)
    }
}

// ---------------------------------------------------------------------------
// Menu
// ---------------------------------------------------------------------------

/// A paginated, filterable selection menu.
///
/// Populate it with [`add`](Menu::add) / [`add_item`](Menu::add_item),
/// optionally [`sort_by`](Menu::sort_by), then [`run`](Menu::run) it.
pub struct Menu<T> {
    items: Vec<Item<T>>,
    config: MenuConfig,
    filter: String,
    view: View,
    layout: Layout,
    frame: FrameCache,
}

impl<T> Default for Menu<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Menu<T> {
    /// An empty menu with the default configuration.
    pub fn new() -> Self {
        Self::with_config(MenuConfig::default())
    }

    /// An empty menu with the given configuration.
    pub fn with_config(config: MenuConfig) -> Self {
        Self {
            items: Vec::new(),
            config,
            filter: String::new(),
            view: View::new(1),
            layout: Layout::default(),
            frame: FrameCache::default(),
        }
    }

    // -- Items --

    /// Append an item with an action.
    pub fn add<F>(&mut self, name: &str, note: &str, tag: T, action: F)
    where
        F: Fn(&Item<T>) -> std::result::Result<(), ActionError> + 'static,
    {
        self.items.push(Item::new(name, note, tag).with_action(action));
    }

    pub fn add_item(&mut self, item: Item<T>) {
        self.items.push(item);
    }

    pub fn add_items<I: IntoIterator<Item = Item<T>>>(&mut self, items: I) {
        self.items.extend(items);
    }

    /// Stable sort of all items; equal items keep their insertion order.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Item<T>, &Item<T>) -> Ordering,
    {
        self.items.sort_by(compare);
    }

    #[inline]
    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // -- Configuration --

    #[inline]
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn set_index(&mut self, show: bool) {
        self.config.show_index = show;
    }

    /// Set the glyph drawn in front of the selected row.
    pub fn set_select_icon(&mut self, icon: &str) {
        self.config.cursor = icon.to_string();
    }

    pub fn set_message(&mut self, message: &str) {
        self.config.message = message.to_string();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.config.page_size = page_size;
    }

    pub fn set_delimiter(&mut self, delimiter: &str) {
        self.config.delimiter = delimiter.to_string();
    }

    /// Set the selected-row style from SGR strings such as
    /// [`style::RED`](crate::style::RED). Malformed entries are dropped.
    pub fn set_selected_style<S: AsRef<str>>(&mut self, styles: &[S]) {
        self.config.selected_style = SgrStyle::from_sequences(styles);
    }

    /// Set the selected-row colour from a legacy code in 30..=37.
    pub fn set_selected_color(&mut self, code: u8) {
        self.config.selected_style = SgrStyle::legacy_color(code);
    }

    pub fn set_footer_text(&mut self, cur: &str, page: &str, help: &str) {
        self.config.footer = FooterText::new(cur, page, help);
    }

    // -- State --

    /// The current filter text.
    #[inline]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// The current view. Meaningful once a run has laid the menu out.
    #[inline]
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Terminal rows one frame occupies, 0 before layout.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.layout.row_count
    }

    // -- Running --

    /// Show the menu on `driver` and block until the user confirms an item
    /// with an action or cancels.
    ///
    /// On confirm the drawn region is erased first, then the item's action
    /// runs and its result is returned alongside the item.
    pub fn run<D: Driver>(&mut self, driver: &mut D) -> Result<Selection<'_, T>> {
        if self.items.is_empty() {
            return Err(MenuError::EmptyMenu);
        }
        self.prepare();

        let mut session = Session::open(driver, self.layout.row_count)?;
        let state = self.event_loop(&mut session)?;
        let closed = session.close();

        match state {
            RunState::Confirmed(idx) => {
                // The driver is closed either way; only the drawn region is
                // left behind.
                if let Err(e) = closed {
                    log::warn!("failed to erase menu: {e}");
                }
                let item = &self.items[idx];
                let result = item.invoke().unwrap_or(Ok(()));
                Ok(Selection { item, result })
            }
            _ => {
                closed?;
                Err(MenuError::Cancelled)
            }
        }
    }

    /// Lay the items out and show the unfiltered first page.
    pub(crate) fn prepare(&mut self) {
        self.layout = layout(&mut self.items, self.config.page_size, self.config.spacer);
        self.frame.prepare(&self.config);
        self.filter.clear();
        self.view = View::new(self.layout.page_size);
        self.view.recompute(&self.items, &self.filter);
    }

    fn event_loop<D: Driver>(&mut self, session: &mut Session<'_, D>) -> Result<RunState> {
        loop {
            self.frame
                .compose(&self.items, &self.view, &self.filter, &self.config)
                .map_err(io::Error::other)?;
            self.frame.flush(session.output(), self.layout.row_count)?;

            let event = session.read_event();
            match self.apply(event) {
                RunState::Running => {}
                done => return Ok(done),
            }
        }
    }

    /// Apply one event to the cursor and filter.
    pub(crate) fn apply(&mut self, event: MenuEvent) -> RunState {
        log::trace!("event {event:?}");
        match event {
            MenuEvent::Escape | MenuEvent::CtrlC => return RunState::Cancelled,
            MenuEvent::Up => self.view.move_up(),
            MenuEvent::Down => self.view.move_down(),
            MenuEvent::PageUp => self.view.page_up(),
            MenuEvent::PageDown => self.view.page_down(),
            MenuEvent::Enter => match self.view.selected() {
                Some(idx) if self.items[idx].has_action() => return RunState::Confirmed(idx),
                _ => {}
            },
            MenuEvent::Backspace => {
                if self.filter.pop().is_some() {
                    self.view.recompute(&self.items, &self.filter);
                }
            }
            MenuEvent::Filter(ch) => {
                self.filter.push(ch);
                self.view.recompute(&self.items, &self.filter);
            }
            MenuEvent::Ignore => {}
        }
        RunState::Running
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Terminal state held for the duration of a run.
///
/// Dropping an unclosed session erases the drawn region, shows the cursor
/// and closes the driver, so early returns and panics restore the terminal.
struct Session<'d, D: Driver> {
    driver: &'d mut D,
    row_count: usize,
    open: bool,
}

impl<'d, D: Driver> Session<'d, D> {
    fn open(driver: &'d mut D, row_count: usize) -> io::Result<Self> {
        driver.init()?;
        let mut session = Self {
            driver,
            row_count,
            open: true,
        };
        queue!(session.output(), cursor::Hide)?;
        Ok(session)
    }

    #[inline]
    fn output(&mut self) -> &mut D::Output {
        self.driver.output()
    }

    fn read_event(&mut self) -> MenuEvent {
        self.driver.read_event().unwrap_or_else(|e| {
            log::debug!("ignoring unreadable key: {e}");
            MenuEvent::Ignore
        })
    }

    fn close(mut self) -> io::Result<()> {
        self.restore()
    }

    fn restore(&mut self) -> io::Result<()> {
        if !self.open {
            return Ok(());
        }
        self.open = false;
        let result = erase(self.driver.output(), self.row_count);
        self.driver.close();
        result
    }
}

impl<D: Driver> Drop for Session<'_, D> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::warn!("failed to restore terminal: {e}");
        }
    }
}

fn erase<W: Write>(out: &mut W, row_count: usize) -> io::Result<()> {
    clear_region(out, row_count)?;
    queue!(out, cursor::Show)?;
    out.flush()
}
