//! Menu configuration and its defaults.

use crate::style::SgrStyle;

/// Labels shown in the footer line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FooterText {
    /// Label before the current-item counter.
    pub cur: String,
    /// Label before the page counter.
    pub page: String,
    /// Help text at the end of the line.
    pub help: String,
}

impl FooterText {
    pub fn new(cur: &str, page: &str, help: &str) -> Self {
        Self {
            cur: cur.to_string(),
            page: page.to_string(),
            help: help.to_string(),
        }
    }
}

impl Default for FooterText {
    fn default() -> Self {
        Self::new(
            "Cur",
            "Page",
            "Arrow key move, <Esc> or <Ctrl>+C exit, <Enter> confirm",
        )
    }
}

/// Configuration for a [`Menu`](crate::Menu).
///
/// Fixed before [`Menu::run`](crate::Menu::run) and read-only while it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MenuConfig {
    /// Show the `[ n]:` ordinal column.
    pub show_index: bool,
    /// Glyph drawn in front of the selected row.
    pub cursor: String,
    /// Prompt shown in the header line.
    pub message: String,
    /// Rows per page. Clamped to the item count (and to at least 1) at layout.
    pub page_size: usize,
    /// Separator between the header fields and between row columns.
    pub delimiter: String,
    /// Fill character used for alignment padding.
    pub spacer: char,
    /// Escape sequences applied to the selected row.
    pub selected_style: SgrStyle,
    /// Footer labels.
    pub footer: FooterText,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            show_index: false,
            cursor: ">>> ".to_string(),
            message: String::new(),
            page_size: 10,
            delimiter: "   ".to_string(),
            spacer: ' ',
            selected_style: SgrStyle::default(),
            footer: FooterText::default(),
        }
    }
}

impl MenuConfig {
    pub fn with_index(mut self, show: bool) -> Self {
        self.show_index = show;
        self
    }

    pub fn with_cursor(mut self, cursor: &str) -> Self {
        self.cursor = cursor.to_string();
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_delimiter(mut self, delimiter: &str) -> Self {
        self.delimiter = delimiter.to_string();
        self
    }

    pub fn with_spacer(mut self, spacer: char) -> Self {
        self.spacer = spacer;
        self
    }

    pub fn with_selected_style(mut self, style: SgrStyle) -> Self {
        self.selected_style = style;
        self
    }

    pub fn with_footer(mut self, footer: FooterText) -> Self {
        self.footer = footer;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let c = MenuConfig::default();
        assert!(!c.show_index);
        assert_eq!(c.cursor, ">>> ");
        assert_eq!(c.page_size, 10);
        assert_eq!(c.delimiter, "   ");
        assert_eq!(c.selected_style.as_str(), "\x1b[34;1m");
        assert_eq!(c.footer.cur, "Cur");
    }

    #[test]
    fn builder_chain() {
        let c = MenuConfig::default()
            .with_index(true)
            .with_cursor(" \u{27A4} ")
            .with_message("select one:")
            .with_page_size(5)
            .with_delimiter("|")
            .with_footer(FooterText::new("当前", "页", "方向键移动，回车确认"));
        assert!(c.show_index);
        assert_eq!(c.page_size, 5);
        assert_eq!(c.delimiter, "|");
        assert_eq!(c.footer.page, "页");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_config_uses_defaults() {
        let c: MenuConfig =
            serde_json::from_str(r#"{"page_size": 3, "footer": {"help": "?"}}"#).unwrap();
        assert_eq!(c.page_size, 3);
        assert_eq!(c.cursor, ">>> ");
        assert_eq!(c.footer.cur, "Cur");
        assert_eq!(c.footer.help, "?");
    }
}
