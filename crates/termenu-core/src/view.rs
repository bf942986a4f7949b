//! The displayed subsequence of a menu: filtering, pagination and the
//! cursor that moves over it.

use crate::item::Item;

/// Filtered, paginated view over a menu's items.
///
/// `displayed` holds indices into the item list in item order. Whenever it
/// is recomputed the cursor goes back to the first displayed entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    displayed: Vec<usize>,
    cursor: usize,
    page_size: usize,
    page_count: usize,
    last_page_start: usize,
}

impl View {
    /// An empty view paging by `page_size` rows (at least 1).
    pub(crate) fn new(page_size: usize) -> Self {
        Self {
            displayed: Vec::new(),
            cursor: 0,
            page_size: page_size.max(1),
            page_count: 1,
            last_page_start: 0,
        }
    }

    /// Rebuild the displayed set for `filter`.
    ///
    /// An empty filter shows everything; otherwise an item is shown when its
    /// name contains the filter, ignoring case.
    pub(crate) fn recompute<T>(&mut self, items: &[Item<T>], filter: &str) {
        self.displayed.clear();
        if filter.is_empty() {
            self.displayed.extend(0..items.len());
        } else {
            let needle = filter.to_lowercase();
            self.displayed.extend(
                items
                    .iter()
                    .enumerate()
                    .filter(|(_, it)| it.name().to_lowercase().contains(&needle))
                    .map(|(i, _)| i),
            );
        }

        self.page_count = self.displayed.len().div_ceil(self.page_size).max(1);
        self.last_page_start = (self.page_count - 1) * self.page_size;
        self.cursor = 0;
        log::debug!(
            "filter {filter:?}: {} of {} items, {} pages",
            self.displayed.len(),
            items.len(),
            self.page_count
        );
    }

    // -- Accessors --

    /// Item indices currently displayed, in item order.
    #[inline]
    pub fn displayed(&self) -> &[usize] {
        &self.displayed
    }

    /// Number of displayed items.
    #[inline]
    pub fn len(&self) -> usize {
        self.displayed.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.displayed.is_empty()
    }

    /// Position of the cursor within [`displayed`](Self::displayed).
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages, never less than 1.
    #[inline]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Displayed position of the first entry on the last page.
    #[inline]
    pub fn last_page_start(&self) -> usize {
        self.last_page_start
    }

    /// Displayed position of the first entry on the cursor's page.
    #[inline]
    pub fn page_start(&self) -> usize {
        self.cursor / self.page_size * self.page_size
    }

    /// 1-based number of the cursor's page.
    #[inline]
    pub fn page_number(&self) -> usize {
        self.cursor / self.page_size + 1
    }

    /// Item index under the cursor, `None` when nothing is displayed.
    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.displayed.get(self.cursor).copied()
    }

    // -- Navigation --

    pub(crate) fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub(crate) fn move_down(&mut self) {
        if self.cursor + 1 < self.displayed.len() {
            self.cursor += 1;
        }
    }

    pub(crate) fn page_up(&mut self) {
        if self.cursor >= self.page_size {
            self.cursor -= self.page_size;
        }
    }

    pub(crate) fn page_down(&mut self) {
        if self.cursor < self.last_page_start {
            self.cursor = (self.cursor + self.page_size).min(self.displayed.len() - 1);
        }
    }
}
