//! Display-width measurement for menu labels.
//!
//! Widths are counted in terminal columns: East-Asian wide and fullwidth
//! characters take two columns, everything else one. SGR escape sequences
//! (`ESC [ <digits/;> m`) take none, so coloured labels still line up.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use unicode_width::UnicodeWidthChar;

static SGR_SEQUENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[\d;]+m").expect("SGR pattern is valid"));

/// Remove every SGR escape sequence from `s`.
pub fn strip_sgr(s: &str) -> Cow<'_, str> {
    SGR_SEQUENCE.replace_all(s, "")
}

/// Visual column width of `s`.
pub fn display_width(s: &str) -> usize {
    strip_sgr(s).chars().map(char_width).sum()
}

#[inline]
fn char_width(ch: char) -> usize {
    match ch.width() {
        Some(2) => 2,
        _ => 1,
    }
}

/// Right-pad `s` with `spacer` until it spans `target` columns.
///
/// `current` is the already measured width of `s`; strings that are
/// already wide enough are returned unchanged.
pub(crate) fn pad_to(s: &str, current: usize, target: usize, spacer: char) -> String {
    let missing = target.saturating_sub(current);
    let mut out = String::with_capacity(s.len() + missing * spacer.len_utf8());
    out.push_str(s);
    out.extend(std::iter::repeat_n(spacer, missing));
    out
}
