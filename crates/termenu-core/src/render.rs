//! Frame composition and in-place redraw.
//!
//! Every frame is exactly `row_count` lines: a header, `page_size` item
//! rows (blank when the page is short) and a footer. After writing, the
//! cursor goes back up `row_count` lines so the next frame overwrites the
//! same region.

use std::fmt::{self, Write as _};
use std::io::{self, Write};

use crossterm::style::{Attribute, SetAttribute};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{Command, cursor, queue};

use crate::config::MenuConfig;
use crate::item::Item;
use crate::view::View;
use crate::width::display_width;

/// Line terminator. Raw mode disables output newline translation.
pub(crate) const LINE_END: &str = "\r\n";

/// Reusable frame buffer.
#[derive(Debug, Default)]
pub(crate) struct FrameCache {
    buf: String,
    cursor_blank: String,
}

impl FrameCache {
    /// Derive the blank placeholder drawn in place of the cursor glyph on
    /// unselected rows.
    pub fn prepare(&mut self, config: &MenuConfig) {
        self.cursor_blank = std::iter::repeat_n(config.spacer, display_width(&config.cursor)).collect();
    }

    /// The most recently composed frame.
    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Build the frame for the current state into the buffer.
    pub fn compose<T>(
        &mut self,
        items: &[Item<T>],
        view: &View,
        filter: &str,
        config: &MenuConfig,
    ) -> fmt::Result {
        self.buf.clear();
        let buf = &mut self.buf;
        let delim = &config.delimiter;

        write!(buf, "{}{delim}{filter}", config.message)?;
        end_line(buf)?;

        let start = view.page_start();
        for row in 0..view.page_size() {
            let idx = start + row;
            let Some(&item_idx) = view.displayed().get(idx) else {
                end_line(buf)?;
                continue;
            };
            let item = &items[item_idx];
            if idx == view.cursor() {
                buf.push_str(&config.cursor);
                buf.push_str(config.selected_style.as_str());
            } else {
                buf.push_str(&self.cursor_blank);
                SetAttribute(Attribute::Reset).write_ansi(buf)?;
            }
            if config.show_index {
                buf.push_str(item.ordinal_label());
            }
            write!(
                buf,
                "{delim}{}{delim}{}",
                item.padded_name(),
                item.padded_note()
            )?;
            SetAttribute(Attribute::Reset).write_ansi(buf)?;
            end_line(buf)?;
        }

        let current = view.selected().map_or(0, |i| items[i].ordinal());
        let footer = &config.footer;
        write!(
            buf,
            "{}: ({current}/{}) {}: ({}/{}) {}",
            footer.cur,
            view.len(),
            footer.page,
            view.page_number(),
            view.page_count(),
            footer.help
        )?;
        end_line(buf)
    }

    /// Write the composed frame and rewind to its first line.
    pub fn flush<W: Write>(&self, out: &mut W, row_count: usize) -> io::Result<()> {
        out.write_all(self.buf.as_bytes())?;
        queue!(out, cursor::MoveUp(rows(row_count)))?;
        out.flush()
    }
}

/// Blank `row_count` lines and return to the first one.
pub(crate) fn clear_region<W: Write>(out: &mut W, row_count: usize) -> io::Result<()> {
    let mut buf = String::new();
    for _ in 0..row_count {
        end_line(&mut buf).map_err(io::Error::other)?;
    }
    out.write_all(buf.as_bytes())?;
    queue!(out, cursor::MoveUp(rows(row_count)))?;
    out.flush()
}

/// Erase the rest of the line and move to the next one.
fn end_line(buf: &mut String) -> fmt::Result {
    Clear(ClearType::UntilNewLine).write_ansi(buf)?;
    buf.push_str(LINE_END);
    Ok(())
}

#[inline]
fn rows(row_count: usize) -> u16 {
    u16::try_from(row_count).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout;

    const EL: &str = "\x1b[K\r\n";

    fn setup(n: usize, page_size: usize) -> (Vec<Item<()>>, View, MenuConfig) {
        let mut items: Vec<Item<()>> = (1..=n)
            .map(|i| Item::new(format!("item{i}"), format!("n{i}"), ()))
            .collect();
        let config = MenuConfig::default().with_page_size(page_size).with_message("pick");
        let l = layout(&mut items, config.page_size, config.spacer);
        let mut view = View::new(l.page_size);
        view.recompute(&items, "");
        (items, view, config)
    }

    fn compose(items: &[Item<()>], view: &View, filter: &str, config: &MenuConfig) -> String {
        let mut cache = FrameCache::default();
        cache.prepare(config);
        cache.compose(items, view, filter, config).unwrap();
        cache.as_str().to_string()
    }

    #[test]
    fn frame_has_header_rows_and_footer() {
        let (items, view, config) = setup(3, 5);
        let frame = compose(&items, &view, "", &config);
        let lines: Vec<&str> = frame.split_terminator("\r\n").collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "pick   \x1b[K");
        assert_eq!(
            lines[1],
            ">>> \x1b[34;1m   item1   n1\x1b[0m\x1b[K"
        );
        assert_eq!(lines[2], "    \x1b[0m   item2   n2\x1b[0m\x1b[K");
        assert_eq!(
            lines[4],
            "Cur: (1/3) Page: (1/1) Arrow key move, <Esc> or <Ctrl>+C exit, <Enter> confirm\x1b[K"
        );
    }

    #[test]
    fn short_last_page_is_padded_with_blank_rows() {
        let (items, mut view, config) = setup(13, 5);
        for _ in 0..12 {
            view.move_down();
        }
        let frame = compose(&items, &view, "", &config);
        assert_eq!(frame.matches("\r\n").count(), 7);
        let lines: Vec<&str> = frame.split_terminator("\r\n").collect();
        assert!(lines[1].contains("item11"));
        assert!(lines[3].starts_with(">>> "));
        assert!(lines[3].contains("item13"));
        assert_eq!(lines[4], "\x1b[K");
        assert_eq!(lines[5], "\x1b[K");
        assert!(lines[6].starts_with("Cur: (13/13) Page: (3/3)"));
    }

    #[test]
    fn row_count_is_constant_under_filtering() {
        let (items, mut view, config) = setup(13, 5);
        for filter in ["", "item1", "item13", "nothing"] {
            view.recompute(&items, filter);
            let frame = compose(&items, &view, filter, &config);
            assert_eq!(frame.matches("\r\n").count(), 7, "filter {filter:?}");
            assert!(frame.starts_with(&format!("pick   {filter}\x1b[K")));
        }
    }

    #[test]
    fn footer_reports_the_layout_ordinal() {
        let (items, mut view, config) = setup(13, 5);
        view.recompute(&items, "item12");
        let frame = compose(&items, &view, "item12", &config);
        assert!(frame.contains("Cur: (12/1) Page: (1/1)"));

        view.recompute(&items, "zzz");
        let frame = compose(&items, &view, "zzz", &config);
        assert!(frame.contains("Cur: (0/0) Page: (1/1)"));
    }

    #[test]
    fn index_column_and_custom_glyph() {
        let (items, view, config) = setup(10, 3);
        let config = config
            .with_index(true)
            .with_cursor(" \u{27A4} ")
            .with_delimiter("|");
        let frame = compose(&items, &view, "", &config);
        let lines: Vec<&str> = frame.split_terminator("\r\n").collect();
        assert_eq!(lines[0], "pick|\x1b[K");
        assert_eq!(lines[1], " \u{27A4} \x1b[34;1m[ 1]:|item1 |n1 \x1b[0m\x1b[K");
        assert_eq!(lines[2], "   \x1b[0m[ 2]:|item2 |n2 \x1b[0m\x1b[K");
    }

    #[test]
    fn blank_placeholder_matches_wide_glyph_width() {
        let mut cache = FrameCache::default();
        cache.prepare(&MenuConfig::default().with_cursor("→当"));
        assert_eq!(cache.cursor_blank, "   ");
    }

    #[test]
    fn flush_rewinds_by_row_count() {
        let (items, view, config) = setup(3, 5);
        let mut cache = FrameCache::default();
        cache.prepare(&config);
        cache.compose(&items, &view, "", &config).unwrap();
        let mut out = Vec::new();
        cache.flush(&mut out, 5).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.ends_with("\r\n\x1b[5A"));
    }

    #[test]
    fn clear_region_blanks_every_row() {
        let mut out = Vec::new();
        clear_region(&mut out, 4).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\x1b[4A", EL.repeat(4)));
    }
}
