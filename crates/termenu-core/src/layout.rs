//! One-time layout performed at the start of a run.

use crate::item::Item;
use crate::width::{display_width, pad_to};

/// Frame geometry and column widths derived from the full item set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Layout {
    /// Rows per page, `min(configured, items)` and at least 1.
    pub page_size: usize,
    /// Terminal rows of one frame: header + `page_size` rows + footer.
    pub row_count: usize,
    /// Widest unpadded name.
    pub name_width: usize,
    /// Widest unpadded note.
    pub note_width: usize,
}

/// Assign ordinals and labels, and pad every name and note to a common
/// width. `items` must not be empty.
pub(crate) fn layout<T>(items: &mut [Item<T>], configured_page_size: usize, spacer: char) -> Layout {
    let count = items.len();
    let page_size = configured_page_size.min(count).max(1);
    let digits = count.to_string().len();

    let widths: Vec<(usize, usize)> = items
        .iter()
        .map(|it| (display_width(it.name()), display_width(it.note())))
        .collect();
    let name_width = widths.iter().map(|w| w.0).max().unwrap_or(0);
    let note_width = widths.iter().map(|w| w.1).max().unwrap_or(0);

    for (i, (item, (nw, tw))) in items.iter_mut().zip(widths).enumerate() {
        item.ordinal = i + 1;
        item.ordinal_label = format!("[{:>digits$}]:", i + 1);
        item.padded_name = pad_to(item.name(), nw, name_width, spacer);
        item.padded_note = pad_to(item.note(), tw, note_width, spacer);
    }

    let layout = Layout {
        page_size,
        row_count: page_size + 2,
        name_width,
        note_width,
    };
    log::debug!("laid out {count} items: {layout:?}");
    layout
}
